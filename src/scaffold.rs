//! New-document scaffolding for `docboard new`.
//!
//! Turns a title into `{docs_dir}/{slug}.html`: the title lowercased with
//! whitespace runs collapsed to single dashes. The generated page carries
//! the title in both `<title>` and `<h1>` so the next index build picks it
//! up from the title tag, plus stock embedded CSS, starter body sections,
//! and a back link to the index. Existing files are never overwritten.

use crate::config::SiteConfig;
use maud::{DOCTYPE, html};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScaffoldError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Title produces an empty filename")]
    EmptyTitle,
    #[error("Document already exists: {0}")]
    AlreadyExists(PathBuf),
}

/// Page styling embedded into every scaffolded document.
const DOC_CSS: &str = include_str!("../static/doc.css");

/// Derive the document filename slug from a title.
///
/// Whitespace runs become single dashes, the result is lowercased:
/// `"My New  Article"` → `"my-new-article"`.
pub fn slugify(title: &str) -> String {
    title
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
        .to_lowercase()
}

/// Create a new starter document under `docs_dir`, returning its path.
///
/// Creates `docs_dir` if absent. Refuses to overwrite an existing file.
pub fn new_document(
    docs_dir: &Path,
    title: &str,
    config: &SiteConfig,
) -> Result<PathBuf, ScaffoldError> {
    let slug = slugify(title);
    if slug.is_empty() {
        return Err(ScaffoldError::EmptyTitle);
    }

    fs::create_dir_all(docs_dir)?;
    let path = docs_dir.join(format!("{slug}.html"));
    if path.exists() {
        return Err(ScaffoldError::AlreadyExists(path));
    }

    fs::write(&path, render_document(title, config).into_string())?;
    Ok(path)
}

fn render_document(title: &str, config: &SiteConfig) -> maud::Markup {
    html! {
        (DOCTYPE)
        html lang=(config.language) {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                style { (DOC_CSS) }
            }
            body {
                h1 { (title) }
                p { "Write the document introduction here." }
                h2 { "Section" }
                p { "Body content for the first section." }
                pre { code { "// code samples go here" } }
                p {
                    a href="../index.html" { "← " (config.site_title) }
                }
            }
        }
    }
}
