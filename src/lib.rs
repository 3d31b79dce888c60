//! # seqanalyzer - Sequence Analysis Tool
//!
//! Quick inspection of nucleotide and protein sequences, from the command
//! line or from an interactive terminal menu.
//!
//! ## Architecture
//!
//! Sequence utilities:
//! - `fasta`: FASTA parsing (collecting and streaming)
//! - `composition`: GC content and reverse complement
//! - `motif`: exact, overlapping motif search
//! - `genetic_code`: codon tables
//! - `translation`: DNA → RNA → protein
//!
//! Front ends:
//! - `report`: flat-text results shared by the CLI and the TUI
//! - `export`: writing reports to files or stdout
//! - `logging`: tracing subscriber set-up
//! - `model`: sequence record and application state
//! - `event`: keyboard event handling
//! - `ui`: TUI rendering with ratatui
//! - `controller`: orchestration of the interactive loop
//!
//! ```
//! use seqanalyzer::{composition, motif, translation};
//!
//! assert_eq!(composition::reverse_complement("ATGC"), "GCAT");
//! assert_eq!(motif::find_motif("ATATAT", "ATA"), vec![1, 3]);
//! assert_eq!(translation::translate(&translation::transcribe("ATGTTT")), "MF");
//! ```

pub mod composition;
pub mod controller;
pub mod event;
pub mod export;
pub mod fasta;
pub mod genetic_code;
pub mod logging;
pub mod model;
pub mod motif;
pub mod report;
pub mod translation;
pub mod ui;

pub use model::Sequence;
