mod extractor;

use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::warn;

use extractor::{extract, ExtractOptions, Extraction};

#[derive(Parser)]
#[command(name = "sds_extract", about = "Extract regulatory fields from safety data sheet text")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract fields from one flattened SDS text
    Extract {
        /// Input text file; reads stdin when omitted
        file: Option<PathBuf>,
        /// Pretty-print the JSON output
        #[arg(long)]
        pretty: bool,
        /// Drop repeated pictogram codes instead of keeping them
        #[arg(long)]
        dedupe_ghs: bool,
    },
    /// Extract fields from every .txt file in a directory, one JSON line each
    Batch {
        dir: PathBuf,
        /// Max files to process (default: all)
        #[arg(short = 'n', long)]
        limit: Option<usize>,
        /// Drop repeated pictogram codes instead of keeping them
        #[arg(long)]
        dedupe_ghs: bool,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Extract { file, pretty, dedupe_ghs } => {
            let text = read_input(file.as_deref())?;
            let result = extract(&text, &ExtractOptions { dedupe_ghs });
            let json = if pretty {
                serde_json::to_string_pretty(&result)?
            } else {
                serde_json::to_string(&result)?
            };
            println!("{}", json);
            Ok(())
        }
        Commands::Batch { dir, limit, dedupe_ghs } => batch(&dir, limit, dedupe_ghs),
    }
}

fn read_input(file: Option<&Path>) -> Result<String> {
    match file {
        Some(path) => {
            fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))
        }
        None => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("reading stdin")?;
            Ok(text)
        }
    }
}

#[derive(serde::Serialize)]
struct BatchLine {
    file: String,
    #[serde(flatten)]
    extraction: Extraction,
}

fn batch(dir: &Path, limit: Option<usize>, dedupe_ghs: bool) -> Result<()> {
    use indicatif::{ProgressBar, ProgressStyle};
    use rayon::prelude::*;

    let mut files: Vec<PathBuf> = fs::read_dir(dir)
        .with_context(|| format!("reading {}", dir.display()))?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|p| p.extension().is_some_and(|ext| ext == "txt"))
        .collect();
    files.sort();
    if let Some(n) = limit {
        files.truncate(n);
    }
    if files.is_empty() {
        println!("No .txt files in {}", dir.display());
        return Ok(());
    }

    let t0 = Instant::now();
    let pb = ProgressBar::new(files.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("[{elapsed_precise}] {bar:40} {pos}/{len} ({per_sec})")?
            .progress_chars("=> "),
    );

    let opts = ExtractOptions { dedupe_ghs };
    let results: Vec<(&PathBuf, std::io::Result<Extraction>)> = files
        .par_iter()
        .map(|path| {
            let result = fs::read_to_string(path).map(|text| extract(&text, &opts));
            pb.inc(1);
            (path, result)
        })
        .collect();
    pb.finish_and_clear();

    let mut ok = 0usize;
    let mut errors = 0usize;
    let mut misses = 0usize;

    for (path, result) in results {
        match result {
            Ok(extraction) => {
                ok += 1;
                misses += extraction.diagnostics.len();
                let line = BatchLine {
                    file: path.display().to_string(),
                    extraction,
                };
                println!("{}", serde_json::to_string(&line)?);
            }
            Err(e) => {
                errors += 1;
                warn!("Could not read {}: {}", path.display(), e);
            }
        }
    }

    println!(
        "Processed {} files ({} ok, {} unreadable, {} field misses) in {:.1}s",
        files.len(),
        ok,
        errors,
        misses,
        t0.elapsed().as_secs_f64()
    );
    Ok(())
}
