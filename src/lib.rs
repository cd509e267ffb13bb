//! # docboard
//!
//! Index page generator for a directory of hand-written HTML documentation.
//! Your filesystem is the data source: every `.html` file in the docs
//! directory becomes a card on the generated index page, titled from its own
//! markup and annotated with a hand-maintained preview description.
//!
//! # Architecture: Scan, Then Generate
//!
//! The build is a single linear pass split into two stages:
//!
//! ```text
//! 1. Scan      html/      →  Manifest       (filesystem → document inventory)
//! 2. Generate  Manifest   →  index.html     (cards + template substitution)
//! ```
//!
//! The intermediate [`scan::Manifest`] is plain serializable data you can
//! inspect with `docboard check --json`, so pipeline problems are debuggable
//! without re-running the build, and each stage is independently testable
//! against temporary directories.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`scan`] | Stage 1 — lists the docs directory, reads each document, extracts titles |
//! | [`extract`] | Title extraction: light pattern matching over raw text, no DOM |
//! | [`previews`] | Hand-maintained filename → preview description table |
//! | [`generate`] | Stage 2 — renders cards with Maud and substitutes them into the template |
//! | [`sitemap`] | `sitemap.xml` generation over the docs tree |
//! | [`scaffold`] | `docboard new` — create a starter document from a title |
//! | [`config`] | Optional `config.toml` (site title, language, base URL) |
//! | [`output`] | CLI output formatting — pure `format_*` functions, `print_*` wrappers |
//!
//! # Design Decisions
//!
//! ## Regex Title Extraction, Not a Parser
//!
//! Documents are hand-written HTML from a known, well-formed subset. Titles
//! are pulled with two non-greedy case-insensitive patterns (`<title>`, then
//! `<h1>`), falling back to the filename stem. A full HTML parser would buy
//! nothing here and would change behavior on the malformed edge cases the
//! existing docs already depend on — a truncated title from an unclosed tag
//! is a known, accepted outcome.
//!
//! ## Maud Over Template Engines
//!
//! Card fragments and scaffolded pages are generated with
//! [Maud](https://maud.lambda.xyz/): malformed markup is a compile error,
//! template variables are Rust expressions, and all interpolation is
//! escaped by default. The index *shell* stays an on-disk `template.html`
//! with a `{{DOC_CARDS}}` placeholder — the site owner hand-edits that file,
//! so it must remain plain text rather than compiled-in markup.
//!
//! ## Whole-Run Rebuilds
//!
//! Every build regenerates the index from scratch. The input is a
//! documentation set of tens of files; scanning and rendering it is far
//! cheaper than any invalidation bookkeeping. Unchanged inputs produce
//! byte-identical output.
//!
//! ## Failure Posture
//!
//! Only two conditions abort a build: a missing docs directory and a missing
//! template. A document that cannot be read degrades to a filename-derived
//! title and the run continues — one unreadable file should never take down
//! the whole index.

pub mod config;
pub mod extract;
pub mod generate;
pub mod output;
pub mod previews;
pub mod scaffold;
pub mod scan;
pub mod sitemap;
