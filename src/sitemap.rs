//! Sitemap generation.
//!
//! Walks the docs directory tree for `.html` files and writes a standard
//! `sitemap.xml` (sitemaps.org urlset schema). The generated index page is
//! listed first with `changefreq daily` and priority 1.0; documents follow
//! with `changefreq monthly` and priority 0.8, `lastmod` taken from each
//! file's modification time (falling back to now when the filesystem cannot
//! say). URLs are joined from the configured `base_url` and the docs
//! directory name, always with forward slashes.
//!
//! The sitemap is XML, not HTML, so it is assembled by plain string
//! formatting rather than Maud.

use chrono::{DateTime, SecondsFormat, Utc};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

#[derive(Error, Debug)]
pub enum SitemapError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result of a sitemap run.
#[derive(Debug)]
pub struct SitemapReport {
    /// Number of URLs written, index page included
    pub url_count: usize,
    /// Path the sitemap was written to
    pub output: PathBuf,
}

/// Generate `sitemap.xml` at `output_path` for the documents under `docs_dir`.
///
/// A missing docs directory is not an error here: the sitemap then lists
/// only the index page. (The build command is where a missing docs dir is
/// fatal; the sitemap mirrors whatever is actually published.)
pub fn generate_sitemap(
    docs_dir: &Path,
    base_url: &str,
    output_path: &Path,
) -> Result<SitemapReport, SitemapError> {
    let mut xml = String::from("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    xml.push_str("<urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n");

    push_url(
        &mut xml,
        &format!("{base_url}/index.html"),
        Utc::now(),
        "daily",
        "1.0",
    );

    let mut url_count = 1;
    let link_dir = docs_dir
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| docs_dir.display().to_string());

    for rel in collect_document_paths(docs_dir) {
        let lastmod = fs::metadata(docs_dir.join(&rel))
            .and_then(|m| m.modified())
            .map(DateTime::<Utc>::from)
            .unwrap_or_else(|_| Utc::now());
        let slug = rel
            .components()
            .map(|c| c.as_os_str().to_string_lossy())
            .collect::<Vec<_>>()
            .join("/");
        push_url(
            &mut xml,
            &format!("{base_url}/{link_dir}/{slug}"),
            lastmod,
            "monthly",
            "0.8",
        );
        url_count += 1;
    }

    xml.push_str("</urlset>\n");
    fs::write(output_path, xml)?;

    Ok(SitemapReport {
        url_count,
        output: output_path.to_path_buf(),
    })
}

/// Collect document paths under `docs_dir`, relative to it, sorted.
///
/// Unreadable entries are skipped; sitemap generation never fails over one
/// bad directory entry.
fn collect_document_paths(docs_dir: &Path) -> Vec<PathBuf> {
    let mut paths: Vec<PathBuf> = WalkDir::new(docs_dir)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .filter(|e| e.file_name().to_string_lossy().ends_with(".html"))
        .filter_map(|e| e.path().strip_prefix(docs_dir).ok().map(Path::to_path_buf))
        .collect();
    paths.sort();
    paths
}

fn push_url(xml: &mut String, loc: &str, lastmod: DateTime<Utc>, changefreq: &str, priority: &str) {
    xml.push_str("  <url>\n");
    xml.push_str(&format!("    <loc>{loc}</loc>\n"));
    xml.push_str(&format!(
        "    <lastmod>{}</lastmod>\n",
        lastmod.to_rfc3339_opts(SecondsFormat::Millis, true)
    ));
    xml.push_str(&format!("    <changefreq>{changefreq}</changefreq>\n"));
    xml.push_str(&format!("    <priority>{priority}</priority>\n"));
    xml.push_str("  </url>\n");
}
