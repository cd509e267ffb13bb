use clap::{Parser, Subcommand};
use docboard::generate::BuildError;
use docboard::scan::ScanError;
use docboard::{config, generate, output, scaffold, scan, sitemap};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "docboard")]
#[command(about = "Index page generator for a directory of HTML documentation")]
#[command(long_about = "\
Index page generator for a directory of HTML documentation

Your filesystem is the data source. Every .html file in the docs directory
becomes a card on the generated index page, titled from its own markup.

Site layout:

  ./
  ├── config.toml        # Site config (optional — sitemap URL, language)
  ├── template.html      # Index shell containing the {{DOC_CARDS}} token
  ├── index.html         # Generated — do not edit by hand
  ├── sitemap.xml        # Generated by 'docboard sitemap'
  └── html/              # Hand-written documents
      ├── classloader.html
      └── jvm-desc.html

Title resolution (first available wins):
  <title> tag → first <h1> → filename without extension

Run 'docboard gen-config' to print a documented config.toml.")]
#[command(version)]
struct Cli {
    /// Directory of HTML documents
    #[arg(long, default_value = "html", global = true)]
    docs_dir: PathBuf,

    /// Index template containing the {{DOC_CARDS}} placeholder
    #[arg(long, default_value = "template.html", global = true)]
    template: PathBuf,

    /// Generated index page
    #[arg(long, default_value = "index.html", global = true)]
    output: PathBuf,

    /// Site config file
    #[arg(long, default_value = "config.toml", global = true)]
    config: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Build the index page from the docs directory
    Build,
    /// Scan the docs directory and print the inventory without building
    Check {
        /// Print the manifest as JSON instead of the inventory view
        #[arg(long)]
        json: bool,
    },
    /// Generate sitemap.xml for the published site
    Sitemap {
        /// Sitemap output path
        #[arg(long, default_value = "sitemap.xml")]
        out: PathBuf,
    },
    /// Create a new starter document from a title
    New {
        /// Document title, e.g. "JVM Class Loading"
        title: String,
    },
    /// Print a stock config.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Command::Build => {
            match generate::build(&cli.docs_dir, &cli.template, &cli.output) {
                Ok(report) => output::print_build_output(&report),
                // An empty docs directory is informational, not a crash
                Err(BuildError::Scan(ScanError::NoDocuments(dir))) => {
                    println!("No HTML documents found in {}", dir.display());
                }
                Err(e) => return Err(e.into()),
            }
        }
        Command::Check { json } => match scan::scan(&cli.docs_dir) {
            Ok(manifest) if json => {
                println!("{}", serde_json::to_string_pretty(&manifest)?);
            }
            Ok(manifest) => output::print_check_output(&manifest),
            Err(ScanError::NoDocuments(dir)) => {
                println!("No HTML documents found in {}", dir.display());
            }
            Err(e) => return Err(e.into()),
        },
        Command::Sitemap { out } => {
            let site = config::load_config(&cli.config)?;
            let report = sitemap::generate_sitemap(&cli.docs_dir, &site.base_url, &out)?;
            output::print_sitemap_output(&report);
        }
        Command::New { title } => {
            let site = config::load_config(&cli.config)?;
            let path = scaffold::new_document(&cli.docs_dir, &title, &site)?;
            println!("Created {}", path.display());
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}
