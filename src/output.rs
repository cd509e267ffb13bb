//! CLI output formatting for all commands.
//!
//! # Information-First Display
//!
//! The `check` inventory is information-centric, not file-centric: each
//! document leads with its positional index and resolved title, with the
//! source filename as an indented `Source:` context line. Read failures are
//! surfaced the same way, as indented `Error:` lines.
//!
//! # Architecture
//!
//! Each command has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout. Format
//! functions are pure — no I/O, no side effects.

use crate::generate::BuildReport;
use crate::scan::Manifest;
use crate::sitemap::SitemapReport;

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

// ============================================================================
// Build output
// ============================================================================

/// Format build output: read-error diagnostics first, then the summary and
/// the included files in card order.
pub fn format_build_output(report: &BuildReport) -> Vec<String> {
    let mut lines = Vec::new();

    for doc in &report.documents {
        if let Some(err) = &doc.read_error {
            lines.push(format!("Error reading {}: {}", doc.filename, err));
        }
    }

    lines.push(format!(
        "Generated {} with {} documents",
        report.output.display(),
        report.documents.len()
    ));
    lines.push("Files included:".to_string());
    for doc in &report.documents {
        lines.push(format!("  - {}", doc.filename));
    }

    lines
}

/// Print build output to stdout.
pub fn print_build_output(report: &BuildReport) {
    for line in format_build_output(report) {
        println!("{}", line);
    }
}

// ============================================================================
// Check output
// ============================================================================

/// Format the document inventory for `check`.
pub fn format_check_output(manifest: &Manifest) -> Vec<String> {
    let mut lines = Vec::new();

    lines.push("Documents".to_string());
    for (i, doc) in manifest.documents.iter().enumerate() {
        lines.push(format!("{} {}", format_index(i + 1), doc.title));
        lines.push(format!("    Source: {}", doc.filename));
        if let Some(err) = &doc.read_error {
            lines.push(format!("    Error: {}", err));
        }
    }

    lines.push(String::new());
    lines.push(format!("{} documents", manifest.documents.len()));

    lines
}

/// Print check output to stdout.
pub fn print_check_output(manifest: &Manifest) {
    for line in format_check_output(manifest) {
        println!("{}", line);
    }
}

// ============================================================================
// Sitemap output
// ============================================================================

/// Format the sitemap summary line.
pub fn format_sitemap_output(report: &SitemapReport) -> Vec<String> {
    vec![format!(
        "Generated {} with {} URLs",
        report.output.display(),
        report.url_count
    )]
}

/// Print sitemap output to stdout.
pub fn print_sitemap_output(report: &SitemapReport) {
    for line in format_sitemap_output(report) {
        println!("{}", line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scan::Document;
    use std::path::PathBuf;

    fn doc(filename: &str, title: &str, read_error: Option<&str>) -> Document {
        Document {
            filename: filename.to_string(),
            title: title.to_string(),
            read_error: read_error.map(String::from),
        }
    }

    #[test]
    fn build_output_summary_and_file_list() {
        let report = BuildReport {
            documents: vec![doc("a.html", "Alpha", None), doc("b.html", "Beta", None)],
            output: PathBuf::from("index.html"),
        };
        let lines = format_build_output(&report);
        assert_eq!(lines[0], "Generated index.html with 2 documents");
        assert_eq!(lines[1], "Files included:");
        assert_eq!(lines[2], "  - a.html");
        assert_eq!(lines[3], "  - b.html");
    }

    #[test]
    fn build_output_leads_with_read_errors() {
        let report = BuildReport {
            documents: vec![
                doc("broken.html", "broken", Some("Is a directory (os error 21)")),
                doc("good.html", "Good", None),
            ],
            output: PathBuf::from("index.html"),
        };
        let lines = format_build_output(&report);
        assert_eq!(
            lines[0],
            "Error reading broken.html: Is a directory (os error 21)"
        );
        assert_eq!(lines[1], "Generated index.html with 2 documents");
    }

    #[test]
    fn check_output_is_information_first() {
        let manifest = Manifest {
            documents: vec![
                doc("classloader.html", "ClassLoader Walkthrough", None),
                doc("report.html", "report", Some("permission denied")),
            ],
        };
        let lines = format_check_output(&manifest);
        assert_eq!(lines[0], "Documents");
        assert_eq!(lines[1], "001 ClassLoader Walkthrough");
        assert_eq!(lines[2], "    Source: classloader.html");
        assert_eq!(lines[3], "002 report");
        assert_eq!(lines[4], "    Source: report.html");
        assert_eq!(lines[5], "    Error: permission denied");
        assert_eq!(lines.last().unwrap(), "2 documents");
    }

    #[test]
    fn sitemap_output_summary() {
        let report = SitemapReport {
            url_count: 10,
            output: PathBuf::from("sitemap.xml"),
        };
        assert_eq!(
            format_sitemap_output(&report),
            vec!["Generated sitemap.xml with 10 URLs"]
        );
    }
}
