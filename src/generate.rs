//! Index page generation.
//!
//! Stage 2 of the build. Renders one card fragment per scanned document and
//! substitutes the joined fragments into the on-disk template to produce the
//! index page.
//!
//! ## Card Shape
//!
//! Every card has the same fixed structure — only the three textual fields
//! (title, preview, filename) vary:
//!
//! ```text
//! div.doc-card
//! └── a.doc-link  href="html/{filename}"
//!     ├── h2.doc-title    {title}
//!     ├── p.doc-preview   {preview table lookup}
//!     └── span.doc-file   {filename}
//! ```
//!
//! Cards are rendered with Maud, so title and filename are HTML-escaped on
//! the way into the markup. Title extraction stays byte-for-byte; only the
//! serialization escapes.
//!
//! ## Template Substitution
//!
//! The template is plain text containing the literal `{{DOC_CARDS}}` token.
//! Every occurrence is replaced with the newline-joined fragments — a
//! template with two tokens gets the full card list twice. The output file
//! is overwritten unconditionally.

use crate::previews;
use crate::scan::{self, Document, ScanError};
use maud::{Markup, html};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Template not found: {0}")]
    MissingTemplate(PathBuf),
}

#[derive(Error, Debug)]
pub enum BuildError {
    #[error(transparent)]
    Scan(#[from] ScanError),
    #[error(transparent)]
    Generate(#[from] GenerateError),
}

/// Placeholder token the template must contain.
pub const PLACEHOLDER: &str = "{{DOC_CARDS}}";

/// Result of a completed build.
#[derive(Debug)]
pub struct BuildReport {
    /// Documents included in the index, in card order
    pub documents: Vec<Document>,
    /// Path the index was written to
    pub output: PathBuf,
}

/// Render the card fragment for one document.
///
/// `link_dir` is the subdirectory the card links into, i.e. the docs
/// directory name as seen from the generated index page.
pub fn render_card(filename: &str, title: &str, link_dir: &str) -> Markup {
    html! {
        div.doc-card {
            a.doc-link href={ (link_dir) "/" (filename) } {
                h2.doc-title { (title) }
                p.doc-preview { (previews::preview_for(filename)) }
                span.doc-file { (filename) }
            }
        }
    }
}

/// Render all cards and substitute them into the template at `template_path`,
/// writing the result to `output_path`.
///
/// Fragments are rendered before the template is read: a missing template
/// aborts after the per-document work, producing no output.
pub fn generate(
    manifest: &scan::Manifest,
    template_path: &Path,
    output_path: &Path,
    link_dir: &str,
) -> Result<(), GenerateError> {
    let cards: Vec<String> = manifest
        .documents
        .iter()
        .map(|doc| render_card(&doc.filename, &doc.title, link_dir).into_string())
        .collect();
    let joined = cards.join("\n");

    let template = match fs::read_to_string(template_path) {
        Ok(t) => t,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(GenerateError::MissingTemplate(template_path.to_path_buf()));
        }
        Err(e) => return Err(e.into()),
    };

    let index = template.replace(PLACEHOLDER, &joined);
    fs::write(output_path, index)?;
    Ok(())
}

/// Run the full build: scan → generate.
///
/// The only fatal conditions are a missing docs directory, an empty
/// document selection, a missing template, and an output write failure.
/// Per-document read errors are carried in the report, not raised.
pub fn build(
    docs_dir: &Path,
    template_path: &Path,
    output_path: &Path,
) -> Result<BuildReport, BuildError> {
    let manifest = scan::scan(docs_dir)?;
    let link_dir = link_dir_name(docs_dir);
    generate(&manifest, template_path, output_path, &link_dir)?;
    Ok(BuildReport {
        documents: manifest.documents,
        output: output_path.to_path_buf(),
    })
}

/// The docs directory name as used in card link targets.
fn link_dir_name(docs_dir: &Path) -> String {
    docs_dir
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| docs_dir.display().to_string())
}
