//! Document discovery and manifest generation.
//!
//! Stage 1 of the build. Lists the docs directory, reads each document, and
//! resolves a title per document, producing a [`Manifest`] the generate
//! stage consumes.
//!
//! ## Selection
//!
//! An entry qualifies when its *name* ends in `.html` — a name test, not a
//! file-type test. A directory named `notes.html` is selected, fails to read,
//! and takes the recoverable read-error path like any unreadable file.
//!
//! ## Ordering
//!
//! Documents are sorted by filename: plain ascending byte comparison, not
//! locale-aware. The manifest order is deterministic regardless of how the
//! filesystem returns directory entries, and it is the order the cards
//! appear in on the generated index.
//!
//! ## Failure posture
//!
//! A missing docs directory and an empty selection abort the scan. A
//! per-document read failure does not: the error is recorded on the
//! [`Document`], the title falls back to the filename stem, and the scan
//! continues with the remaining documents.

use crate::extract;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Docs directory does not exist: {0}")]
    MissingDocsDir(PathBuf),
    #[error("No HTML documents found in {0}")]
    NoDocuments(PathBuf),
}

/// Manifest output from the scan stage.
#[derive(Debug, Serialize)]
pub struct Manifest {
    pub documents: Vec<Document>,
}

/// One input document, resolved to its display title.
///
/// Created by scanning, never mutated. `read_error` is set when the file
/// could not be read; the title is then the filename stem.
#[derive(Debug, Serialize)]
pub struct Document {
    /// Bare filename within the docs directory (`classloader.html`)
    pub filename: String,
    /// Resolved title: title tag → first h1 → filename stem
    pub title: String,
    /// Read failure recorded for reporting; the document still gets a card
    #[serde(skip_serializing_if = "Option::is_none")]
    pub read_error: Option<String>,
}

const DOC_EXTENSION: &str = ".html";

/// Scan `docs_dir` into a manifest of title-resolved documents.
pub fn scan(docs_dir: &Path) -> Result<Manifest, ScanError> {
    if !docs_dir.is_dir() {
        return Err(ScanError::MissingDocsDir(docs_dir.to_path_buf()));
    }

    let mut names: Vec<String> = fs::read_dir(docs_dir)?
        .filter_map(|e| e.ok())
        .map(|e| e.file_name().to_string_lossy().into_owned())
        .filter(|name| name.ends_with(DOC_EXTENSION))
        .collect();

    if names.is_empty() {
        return Err(ScanError::NoDocuments(docs_dir.to_path_buf()));
    }

    names.sort();

    let documents = names
        .into_iter()
        .map(|filename| match fs::read_to_string(docs_dir.join(&filename)) {
            Ok(content) => Document {
                title: extract::extract_title(&content, &filename),
                filename,
                read_error: None,
            },
            Err(e) => Document {
                title: extract::strip_extension(&filename).to_string(),
                filename,
                read_error: Some(e.to_string()),
            },
        })
        .collect();

    Ok(Manifest { documents })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_doc(dir: &Path, name: &str, content: &str) {
        fs::write(dir.join(name), content).unwrap();
    }

    #[test]
    fn missing_docs_dir_is_error() {
        let tmp = TempDir::new().unwrap();
        let result = scan(&tmp.path().join("nope"));
        assert!(matches!(result, Err(ScanError::MissingDocsDir(_))));
    }

    #[test]
    fn empty_dir_reports_no_documents() {
        let tmp = TempDir::new().unwrap();
        let result = scan(tmp.path());
        assert!(matches!(result, Err(ScanError::NoDocuments(_))));
    }

    #[test]
    fn non_html_entries_are_ignored() {
        let tmp = TempDir::new().unwrap();
        write_doc(tmp.path(), "readme.md", "# nope");
        write_doc(tmp.path(), "style.css", "body {}");
        let result = scan(tmp.path());
        assert!(matches!(result, Err(ScanError::NoDocuments(_))));
    }

    #[test]
    fn documents_sorted_by_filename() {
        let tmp = TempDir::new().unwrap();
        write_doc(tmp.path(), "c.html", "<title>C</title>");
        write_doc(tmp.path(), "a.html", "<title>A</title>");
        write_doc(tmp.path(), "b.html", "<title>B</title>");

        let manifest = scan(tmp.path()).unwrap();
        let names: Vec<&str> = manifest.documents.iter().map(|d| d.filename.as_str()).collect();
        assert_eq!(names, vec!["a.html", "b.html", "c.html"]);
    }

    #[test]
    fn titles_resolved_per_priority() {
        let tmp = TempDir::new().unwrap();
        write_doc(tmp.path(), "a.html", "<h1>Alpha Doc</h1>");
        write_doc(tmp.path(), "b.html", "<title>Beta</title>");
        write_doc(tmp.path(), "c.html", "<p>nothing</p>");

        let manifest = scan(tmp.path()).unwrap();
        let titles: Vec<&str> = manifest.documents.iter().map(|d| d.title.as_str()).collect();
        assert_eq!(titles, vec!["Alpha Doc", "Beta", "c"]);
    }

    #[test]
    fn unreadable_document_degrades_to_stem_title() {
        let tmp = TempDir::new().unwrap();
        write_doc(tmp.path(), "good.html", "<title>Good</title>");
        // A directory with a .html name is selected but cannot be read
        fs::create_dir(tmp.path().join("broken.html")).unwrap();

        let manifest = scan(tmp.path()).unwrap();
        assert_eq!(manifest.documents.len(), 2);

        let broken = &manifest.documents[0];
        assert_eq!(broken.filename, "broken.html");
        assert_eq!(broken.title, "broken");
        assert!(broken.read_error.is_some());

        let good = &manifest.documents[1];
        assert_eq!(good.title, "Good");
        assert!(good.read_error.is_none());
    }

    #[test]
    fn manifest_serializes_without_read_error_field_when_clean() {
        let tmp = TempDir::new().unwrap();
        write_doc(tmp.path(), "a.html", "<title>A</title>");

        let manifest = scan(tmp.path()).unwrap();
        let json = serde_json::to_string(&manifest).unwrap();
        assert!(json.contains(r#""filename":"a.html""#));
        assert!(!json.contains("read_error"));
    }
}
