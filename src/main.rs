//! seqanalyzer - Sequence Analysis Tool
//!
//! ## Usage
//!
//! ```bash
//! seqanalyzer                          # interactive menu
//! seqanalyzer dna sequences.fasta      # GC content + reverse complement
//! seqanalyzer rna transcripts.fasta    # translation of each record
//! seqanalyzer protein proteins.fasta   # record lengths
//! seqanalyzer motif ATATAT ATA         # 1-based positions
//! seqanalyzer transcribe ATGCTA
//! seqanalyzer translate AUGUUUUUAUUG --table standard
//! seqanalyzer -o report.txt dna sequences.fasta
//! ```

// Use jemalloc for better memory management (returns memory to OS)
#[cfg(not(windows))]
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use tracing::info;

use seqanalyzer::controller::run_app;
use seqanalyzer::export::{write_report, ExportTarget};
use seqanalyzer::genetic_code::TableChoice;
use seqanalyzer::logging::{init_logging, LogTarget};
use seqanalyzer::model::AppState;
use seqanalyzer::report::{self, FileAnalysis, Report, NO_SEQUENCES};

/// Codon table choice for the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum TableArg {
    /// Partial table of nine codons; translation stops at any other codon
    Reference,
    /// Complete NCBI standard genetic code (stops shown as '*')
    Standard,
}

impl From<TableArg> for TableChoice {
    fn from(arg: TableArg) -> Self {
        match arg {
            TableArg::Reference => TableChoice::Reference,
            TableArg::Standard => TableChoice::Standard,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Command {
    /// GC content and reverse complement of each record of a DNA FASTA file
    Dna {
        /// DNA FASTA file
        file: PathBuf,
    },
    /// Translation of each record of an RNA FASTA file
    Rna {
        /// RNA FASTA file
        file: PathBuf,
    },
    /// Length of each record of a protein FASTA file
    Protein {
        /// Protein FASTA file
        file: PathBuf,
    },
    /// 1-based positions of a motif in a sequence (overlaps included)
    Motif {
        /// Sequence to search
        sequence: String,
        /// Exact motif to find
        motif: String,
    },
    /// Transcribe DNA to RNA (T -> U)
    Transcribe {
        /// DNA sequence
        dna: String,
    },
    /// Translate RNA to protein, stopping at the first unknown codon
    Translate {
        /// RNA sequence
        rna: String,
    },
}

/// seqanalyzer - GC content, reverse complement, motif search,
/// transcription and translation
///
/// Without a subcommand, opens the interactive menu.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Option<Command>,

    /// Output file for the report. Use "-" for stdout.
    #[arg(short = 'o', long = "output", global = true, default_value = "-")]
    output: String,

    /// Codon table used for translation
    #[arg(short = 't', long = "table", global = true, value_enum, default_value = "reference")]
    table: TableArg,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short = 'v', long = "verbose", global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

/// Runs CLI mode: build the requested report and write it out.
fn run_cli_mode(command: Command, output: &str, table: TableChoice) -> Result<()> {
    let report: Option<Report> = match command {
        Command::Dna { file } => analyze(FileAnalysis::Dna, &file, table)?,
        Command::Rna { file } => analyze(FileAnalysis::Rna, &file, table)?,
        Command::Protein { file } => analyze(FileAnalysis::Protein, &file, table)?,
        Command::Motif { sequence, motif } => Some(report::motif_report(&sequence, &motif)),
        Command::Transcribe { dna } => Some(report::transcription_report(&dna)),
        Command::Translate { rna } => Some(report::translation_report(&rna, table)),
    };

    let Some(report) = report else {
        eprintln!("{}", NO_SEQUENCES);
        return Ok(());
    };

    let target = ExportTarget::from_arg(output);
    write_report(report.text(), &target)?;
    if let ExportTarget::File(path) = &target {
        eprintln!("Wrote {} to {}", report.title(), path.display());
    }
    Ok(())
}

fn analyze(kind: FileAnalysis, file: &Path, table: TableChoice) -> Result<Option<Report>> {
    report::analyze_file(kind, file, table)
        .with_context(|| format!("Cannot analyze {}", file.display()))
}

fn main() -> Result<()> {
    let args = Args::parse();
    let table: TableChoice = args.table.into();

    match args.command {
        Some(command) => {
            init_logging(args.verbose, &LogTarget::Stderr)?;
            run_cli_mode(command, &args.output, table)?;
        }
        None => {
            // TUI mode: keep log lines off the alternate screen
            let log_target = LogTarget::temp_file();
            init_logging(args.verbose, &log_target)?;
            if let LogTarget::File(path) = &log_target {
                info!(path = %path.display(), "logging to file");
            }
            let export_dir = std::env::current_dir().context("Cannot resolve working directory")?;
            run_app(AppState::new(table, export_dir))?;
        }
    }

    Ok(())
}
