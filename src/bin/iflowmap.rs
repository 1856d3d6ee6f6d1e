//! iflowmap CLI: adapter extraction and flow call-graph linking.
//!
//! Usage:
//!   iflowmap extract [DIR] [--output FILE]
//!   iflowmap link [PATHS...] [--adapter-type TYPE]

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use iflowmap::extract::Extractor;
use iflowmap::link::LinkOptions;
use iflowmap::project::{find_link_inputs, link_file, run_extraction};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "iflowmap",
    version,
    about = "Extract adapters from integration flow archives and link flow calls"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Log debug output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract adapters from every *.zip flow archive in a directory
    Extract {
        /// Directory holding the archives
        #[arg(default_value = ".")]
        dir: PathBuf,
        /// CSV file to write
        #[arg(short, long, default_value = "extracted_channels.csv")]
        output: PathBuf,
    },
    /// Add CallsIflow/IsCalledByIflow columns to adapter tables
    Link {
        /// CSV files, or directories scanned for *.csv
        #[arg(default_value = ".")]
        paths: Vec<PathBuf>,
        /// Adapter type whose endpoints are matched
        #[arg(long, default_value = "ProcessDirect")]
        adapter_type: String,
        /// Direction value of calling endpoints
        #[arg(long, default_value = "Sender")]
        sender: String,
        /// Direction value of called endpoints
        #[arg(long, default_value = "Receiver")]
        receiver: String,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Extract { dir, output } => extract(&dir, &output),
        Commands::Link {
            paths,
            adapter_type,
            sender,
            receiver,
        } => {
            let options = LinkOptions {
                adapter_type,
                sender_direction: sender,
                receiver_direction: receiver,
            };
            link(&paths, &options)
        }
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn extract(dir: &Path, output: &Path) -> ExitCode {
    let run = match run_extraction(dir, output, &Extractor::new()) {
        Ok(run) => run,
        Err(e) => {
            eprintln!("❌ Error: {e}");
            return ExitCode::FAILURE;
        }
    };

    for outcome in &run.report.outcomes {
        let name = outcome.archive.display();
        match &outcome.result {
            Ok(count) => println!("✅ {name}: extracted {count} adapter(s)"),
            Err(e) => println!("❌ {name}: {e}"),
        }
    }

    let failed = run.report.failed().count();
    match &run.output {
        Some(path) => println!(
            "✅ Extracted {} adapter(s) from {} archive(s) ({} failed). Saved to '{}'.",
            run.report.total_records(),
            run.report.succeeded().count(),
            failed,
            path.display()
        ),
        None => println!(
            "⚠️ No adapters found in {} archive(s) ({} failed). Nothing written.",
            run.report.outcomes.len(),
            failed
        ),
    }

    ExitCode::SUCCESS
}

fn link(paths: &[PathBuf], options: &LinkOptions) -> ExitCode {
    let mut inputs = Vec::new();
    for path in paths {
        if path.is_dir() {
            match find_link_inputs(path) {
                Ok(found) => inputs.extend(found),
                Err(e) => {
                    eprintln!("❌ {}: {e}", path.display());
                    return ExitCode::FAILURE;
                }
            }
        } else {
            inputs.push(path.clone());
        }
    }

    if inputs.is_empty() {
        println!("⚠️ No CSV files to link.");
        return ExitCode::SUCCESS;
    }

    let mut failures = 0usize;
    for input in &inputs {
        match link_file(input, options) {
            Ok(run) => println!(
                "✅ Processed: {} → {} ({} call(s) linked)",
                run.input.display(),
                run.output.display(),
                run.summary.senders_matched
            ),
            Err(e) => {
                failures += 1;
                println!("❌ {}: {e}", input.display());
            }
        }
    }

    if failures > 0 {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
