//! `docmerge` command-line entry point

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use docmerge::{report, Manifest, Merger, VersionSource};
use tracing_subscriber::EnvFilter;

/// Merge ordered Markdown documents into one file with a table of contents.
#[derive(Parser, Debug)]
#[command(name = "docmerge", version, about)]
struct Cli {
    /// Manifest file (defaults to ./docmerge.json, else the built-in order)
    #[arg(long, value_name = "FILE")]
    manifest: Option<PathBuf>,

    /// Directory containing the documents
    #[arg(long, value_name = "DIR")]
    base_dir: Option<PathBuf>,

    /// Output file
    #[arg(long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// JSON metadata file providing the `version` field
    #[arg(long, value_name = "FILE")]
    version_file: Option<PathBuf>,
}

impl Cli {
    fn run(self) -> Result<()> {
        let cwd = std::env::current_dir().context("cannot determine working directory")?;
        let (manifest, root) = Manifest::discover(self.manifest.as_deref(), &cwd)?;

        let mut builder = manifest.into_builder(&root)?;
        if let Some(dir) = self.base_dir {
            builder = builder.base_dir(dir);
        }
        if let Some(output) = self.output {
            builder = builder.output(output);
        }
        if let Some(file) = self.version_file {
            builder = builder.version_source(VersionSource::MetadataFile(file));
        }
        let config = builder.build()?;

        let merger = Merger::new(config);
        let prepared = merger.prepare();

        println!("{}\n", report::banner(&prepared.version.version));
        for line in report::progress_lines(&prepared.records) {
            println!("{}", line);
        }
        println!();

        let report = merger.write(prepared)?;
        print!("{}", report::summary(&report));
        Ok(())
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("docmerge=warn")),
        )
        .init();

    match Cli::parse().run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("❌ Fatal error: {:#}", err);
            ExitCode::FAILURE
        }
    }
}
