mod interactive;

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use find_overlap::{OverlapChecker, OverlapConfig, Report};
use interactive::{Session, Source};

#[derive(Parser, Debug)]
#[clap(
    name = "find-overlap",
    about = "A program to detect textual overlap between a target document and reference documents."
)]
struct Args {
    /// File path to the target document.
    #[clap(short = 't', long, required_unless_present = "interactive")]
    target: Option<PathBuf>,

    /// File paths to reference documents. Unreadable files are skipped.
    #[clap(short = 'r', long, multiple_values = true)]
    reference: Vec<PathBuf>,

    /// Window size for w-shingling in the range of [2,10].
    /// Values out of range fall back to 3.
    #[clap(short = 'k', long)]
    window_size: Option<usize>,

    /// File path to a JSON configuration. Unset fields keep their defaults.
    #[clap(short = 'c', long)]
    config: Option<PathBuf>,

    /// File path to write the JSON report to, instead of the standard output.
    #[clap(short = 'o', long)]
    output: Option<PathBuf>,

    /// Reads the k-value, documents and their names from prompts on the standard input.
    #[clap(short = 'i', long)]
    interactive: bool,

    /// Logs per-document details.
    #[clap(short = 'v', long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    let mut config = match &args.config {
        Some(path) => load_config(path)?,
        None => OverlapConfig::default(),
    };

    let session = if args.interactive {
        let stdin = io::stdin();
        interactive::read_session(&mut stdin.lock(), &mut io::stderr())?
    } else {
        // Guaranteed by clap unless interactive.
        let target = args
            .target
            .as_deref()
            .context("A target document is required.")?;
        load_session(target, &args.reference)?
    };

    if let Some(k) = args.window_size.or(session.k) {
        config.k = k;
    }

    let start = Instant::now();
    let mut checker = OverlapChecker::new(config)?.target(session.target.name, session.target.text)?;
    for reference in session.references {
        checker = checker.reference(reference.name, reference.text)?;
    }
    let report = checker.compare()?;
    info!("Done in {} sec", start.elapsed().as_secs_f64());

    write_report(&report, args.output.as_deref())
}

fn init_tracing(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(if verbose { "debug" } else { "info" }));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

fn load_config(path: &Path) -> Result<OverlapConfig> {
    let file = File::open(path).with_context(|| format!("Failed to open {}", path.display()))?;
    let config: OverlapConfig = serde_json::from_reader(io::BufReader::new(file))
        .with_context(|| format!("Failed to parse {}", path.display()))?;
    Ok(config)
}

fn load_session(target: &Path, references: &[PathBuf]) -> Result<Session> {
    let text = fs::read_to_string(target)
        .with_context(|| format!("Failed to read the target {}", target.display()))?;
    let target = Source {
        name: target.display().to_string(),
        text,
    };

    let mut sources = Vec::with_capacity(references.len());
    for path in references {
        match fs::read_to_string(path) {
            Ok(text) => sources.push(Source {
                name: path.display().to_string(),
                text,
            }),
            Err(e) => warn!("Skipping reference {}: {e}", path.display()),
        }
    }

    Ok(Session {
        k: None,
        target,
        references: sources,
    })
}

fn write_report(report: &Report, output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create {}", path.display()))?;
            let mut wtr = BufWriter::new(file);
            serde_json::to_writer_pretty(&mut wtr, report)?;
            writeln!(wtr)?;
            wtr.flush()?;
            info!("Wrote the report to {}", path.display());
        }
        None => {
            let stdout = io::stdout();
            let mut wtr = BufWriter::new(stdout.lock());
            serde_json::to_writer_pretty(&mut wtr, report)?;
            writeln!(wtr)?;
            wtr.flush()?;
        }
    }
    Ok(())
}
