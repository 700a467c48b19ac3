//! Command-line interface for the converter.

use std::path::PathBuf;

use clap::Parser;
use console::style;
use indicatif::{ProgressBar, ProgressStyle};

use crate::config::{parse_object_kinds, ConversionOptions};
use crate::detector::{detect_format, validate_format};
use crate::error::Result;
use crate::extractor::extractor_for;
use crate::render::{write_catalog, write_markdown_files};
use crate::types::{Dialect, ObjectKind};

/// Convert 1C:Enterprise configuration metadata into Markdown documentation.
#[derive(Debug, Parser)]
#[command(name = "onec-cfg2md")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Source tree: a configurator export or an EDT project
    pub source: PathBuf,

    /// Output directory for Markdown pages and objects.csv
    pub output: PathBuf,

    /// Source format: cfg or edt (default: detect)
    #[arg(long)]
    pub format: Option<String>,

    /// Comma-separated object types, e.g. documents,catalogs (default: all)
    #[arg(long)]
    pub types: Option<String>,

    /// Log progress details
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Turn parsed arguments into conversion options.
    pub fn to_options(&self) -> Result<ConversionOptions> {
        let dialect = self
            .format
            .as_deref()
            .map(str::parse::<Dialect>)
            .transpose()?;
        let object_kinds = match self.types.as_deref() {
            Some(list) => parse_object_kinds(list)?,
            None => ObjectKind::ALL.to_vec(),
        };

        Ok(ConversionOptions {
            source_path: self.source.clone(),
            output_path: self.output.clone(),
            dialect,
            object_kinds,
            verbose: self.verbose,
        })
    }
}

/// Outcome of one conversion run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionReport {
    pub dialect: Dialect,
    pub object_count: usize,
    pub pages: Vec<PathBuf>,
    /// `None` when nothing was extracted and nothing was written.
    pub catalog: Option<PathBuf>,
}

/// Extract the requested kinds and write pages plus the CSV catalog.
///
/// A pinned dialect is validated against the tree before any parsing.
pub fn convert(options: &ConversionOptions) -> Result<ConversionReport> {
    let source = options.source_path.as_path();
    let dialect = match options.dialect {
        Some(dialect) => {
            validate_format(source, dialect)?;
            dialect
        }
        None => detect_format(source)?,
    };

    let extractor = extractor_for(source, dialect);
    let objects = extractor.parse_objects_by_type(&options.object_kinds)?;
    if objects.is_empty() {
        return Ok(ConversionReport {
            dialect,
            object_count: 0,
            pages: Vec::new(),
            catalog: None,
        });
    }

    let pages = write_markdown_files(&objects, &options.output_path)?;
    let catalog = write_catalog(&objects, &options.output_path)?;

    Ok(ConversionReport {
        dialect,
        object_count: objects.len(),
        pages,
        catalog: Some(catalog),
    })
}

/// Run the CLI with already-parsed arguments.
pub fn run(cli: Cli) -> Result<()> {
    let options = cli.to_options()?;

    println!(
        "{} {} -> {}",
        style("Converting").bold(),
        style(options.source_path.display()).cyan(),
        style(options.output_path.display()).green()
    );

    let pb = ProgressBar::new_spinner();
    #[allow(clippy::expect_used)] // Static template string that is guaranteed to be valid
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .expect("valid template"),
    );
    pb.set_message("Extracting metadata...");
    pb.enable_steady_tick(std::time::Duration::from_millis(100));

    let report = match convert(&options) {
        Ok(report) => report,
        Err(e) => {
            pb.finish_and_clear();
            return Err(e);
        }
    };

    pb.finish_and_clear();

    println!("  Format: {}", report.dialect);
    if report.object_count == 0 {
        println!(
            "{}",
            style("No objects found for the requested types; nothing written.").yellow()
        );
        return Ok(());
    }

    println!("  Objects: {}", report.object_count);
    if options.verbose {
        for page in &report.pages {
            println!("  {}", style(page.display()).dim());
        }
    }
    if let Some(catalog) = &report.catalog {
        println!();
        println!(
            "{} {} pages, catalog {}",
            style("Saved:").green().bold(),
            report.pages.len(),
            catalog.display()
        );
    }

    Ok(())
}
