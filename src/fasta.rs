//! FASTA file parser.
//!
//! This module handles reading and parsing FASTA-like files.
//! Records may span several body lines; the lines are trimmed and
//! concatenated without separator.
//!
//! ## FASTA Format
//!
//! ```text
//! >sequence name, free text
//! ACGTACGTACGT...
//! >another sequence
//! TGCATGCATGCA...
//! ```
//!
//! The reader is lenient: body lines found before the first header are
//! kept under an empty name, and headers without any body are dropped.
//! Lines end at `\n`, `\r\n` or a lone `\r`. Bytes that are not valid
//! UTF-8 are replaced with U+FFFD rather than rejected.

use std::fs::File;
use std::collections::VecDeque;
use std::io::{BufRead, BufReader};
use std::path::Path;

use thiserror::Error;
use tracing::debug;

use crate::model::Sequence;

/// Character that starts a header line.
pub const RECORD_MARKER: char = '>';

/// Errors that can occur during FASTA parsing.
#[derive(Error, Debug)]
pub enum FastaError {
    #[error("Error reading file: {0}")]
    IoError(#[from] std::io::Error),
}

/// Result type for FASTA operations.
pub type FastaResult<T> = Result<T, FastaError>;

/// Splits text on any line terminator.
///
/// `\r\n` yields an extra empty line, which the assembler ignores.
fn split_lines(text: &str) -> impl Iterator<Item = &str> {
    text.split(|c: char| c == '\n' || c == '\r')
}

/// Line-by-line record assembly.
///
/// Holds the pending header name and the residues accumulated since that
/// header. Feeding it a header line closes the current record (if it has
/// residues) and opens the next one.
#[derive(Debug, Default, Clone)]
pub struct RecordAssembler {
    name: String,
    residues: String,
}

impl RecordAssembler {
    /// Creates an assembler with an empty pending name.
    pub fn new() -> Self {
        Self::default()
    }

    /// Feeds one line (terminator already stripped).
    ///
    /// Returns the record completed by this line, if any. Only header lines
    /// can complete a record.
    pub fn push_line(&mut self, line: &str) -> Option<Sequence> {
        if let Some(header) = line.strip_prefix(RECORD_MARKER) {
            let completed = self.take_record();
            self.name = header.trim().to_string();
            completed
        } else {
            self.residues.push_str(line.trim());
            None
        }
    }

    /// Flushes the last record at end of input.
    pub fn finish(mut self) -> Option<Sequence> {
        self.take_record()
    }

    fn take_record(&mut self) -> Option<Sequence> {
        if self.residues.is_empty() {
            return None;
        }
        let residues = std::mem::take(&mut self.residues);
        debug!(name = %self.name, len = residues.len(), "record parsed");
        Some(Sequence::new(self.name.clone(), residues))
    }
}

/// Streaming iterator over the records of a reader.
///
/// Records completed before an I/O failure are yielded first, then the
/// failure itself, after which the iterator is exhausted.
pub struct FastaRecords<R: BufRead> {
    reader: R,
    buf: Vec<u8>,
    pending: VecDeque<Sequence>,
    assembler: Option<RecordAssembler>,
}

impl<R: BufRead> FastaRecords<R> {
    /// Wraps a buffered reader.
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            buf: Vec::new(),
            pending: VecDeque::new(),
            assembler: Some(RecordAssembler::new()),
        }
    }
}

impl<R: BufRead> Iterator for FastaRecords<R> {
    type Item = FastaResult<Sequence>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(record) = self.pending.pop_front() {
                return Some(Ok(record));
            }
            let assembler = self.assembler.as_mut()?;
            self.buf.clear();
            match self.reader.read_until(b'\n', &mut self.buf) {
                Ok(0) => {
                    return self.assembler.take()?.finish().map(Ok);
                }
                Ok(_) => {
                    // A '\n' byte never splits a multi-byte character
                    let chunk = String::from_utf8_lossy(&self.buf);
                    self.pending
                        .extend(split_lines(&chunk).filter_map(|line| assembler.push_line(line)));
                }
                Err(e) => {
                    self.assembler = None;
                    return Some(Err(FastaError::IoError(e)));
                }
            }
        }
    }
}

/// Parses a FASTA file and returns its records in file order.
///
/// # Examples
///
/// ```no_run
/// use seqanalyzer::fasta::parse_fasta_file;
///
/// let records = parse_fasta_file("sequences.fasta").unwrap();
/// println!("Loaded {} sequences", records.len());
/// ```
pub fn parse_fasta_file<P: AsRef<Path>>(path: P) -> FastaResult<Vec<Sequence>> {
    let file = File::open(path)?;
    parse_fasta(BufReader::new(file))
}

/// Parses FASTA content from a reader.
///
/// The whole read is aborted on the first I/O failure; no partial result
/// is returned. Use [`FastaRecords`] to keep the records read before it.
pub fn parse_fasta<R: BufRead>(reader: R) -> FastaResult<Vec<Sequence>> {
    let sequences = FastaRecords::new(reader).collect::<FastaResult<Vec<_>>>()?;
    debug!(count = sequences.len(), "FASTA input parsed");
    Ok(sequences)
}

/// Parses FASTA content from a string.
///
/// Reading from memory cannot fail, so the records are returned directly.
pub fn parse_fasta_str(content: &str) -> Vec<Sequence> {
    let mut assembler = RecordAssembler::new();
    let mut sequences: Vec<Sequence> = split_lines(content)
        .filter_map(|line| assembler.push_line(line))
        .collect();
    sequences.extend(assembler.finish());
    sequences
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{self, Read};

    #[test]
    fn test_parse_simple_fasta() {
        let records = parse_fasta_str(">seq1\nACGT\n>seq2\nTGCA\n");

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].name(), "seq1");
        assert_eq!(records[0].residues(), "ACGT");
        assert_eq!(records[1].name(), "seq2");
        assert_eq!(records[1].residues(), "TGCA");
    }

    #[test]
    fn test_parse_multiline_sequence() {
        let records = parse_fasta_str(">seq1\nACGT\n  TGCA \nAAAA\n");

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].residues(), "ACGTTGCAAAAA");
    }

    #[test]
    fn test_header_keeps_full_description() {
        let records = parse_fasta_str(">  seq1 This is a description  \nACGT\n");
        assert_eq!(records[0].name(), "seq1 This is a description");
    }

    #[test]
    fn test_parse_with_empty_lines() {
        let records = parse_fasta_str(">seq1\nACGT\n\n>seq2\n\nTGCA\n");

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].residues(), "ACGT");
        assert_eq!(records[1].residues(), "TGCA");
    }

    #[test]
    fn test_empty_input() {
        assert!(parse_fasta_str("").is_empty());
        assert!(parse_fasta_str("\n\n").is_empty());
    }

    #[test]
    fn test_sequence_without_header() {
        let records = parse_fasta_str("ACGT\n>seq1\nTGCA\n");

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].name(), "");
        assert_eq!(records[0].residues(), "ACGT");
        assert_eq!(records[1].name(), "seq1");
    }

    #[test]
    fn test_header_without_body_is_dropped() {
        let records = parse_fasta_str(">empty\n>seq1\nAC\n>trailing\n");

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].name(), "seq1");
        assert_eq!(records[0].residues(), "AC");
    }

    #[test]
    fn test_indented_marker_is_body() {
        let records = parse_fasta_str(">seq1\nAC\n >GT\n");
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].residues(), "AC>GT");
    }

    #[test]
    fn test_crlf_line_endings() {
        let records = parse_fasta_str(">seq1\r\nACGT\r\nTT\r\n");
        assert_eq!(records[0].name(), "seq1");
        assert_eq!(records[0].residues(), "ACGTTT");
    }

    #[test]
    fn test_lone_cr_line_endings() {
        let content = ">a\rACGT\r>b\rGG\r";
        let records = parse_fasta_str(content);
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].name(), "a");
        assert_eq!(records[0].residues(), "ACGT");
        assert_eq!(records[1].name(), "b");
        assert_eq!(records[1].residues(), "GG");
        assert_eq!(parse_fasta(content.as_bytes()).unwrap(), records);
    }

    #[test]
    fn test_mixed_line_endings() {
        let content = ">a\r\nAC\rGT\n>b\rTT";
        let records = parse_fasta(content.as_bytes()).unwrap();
        assert_eq!(records[0].residues(), "ACGT");
        assert_eq!(records[1].name(), "b");
        assert_eq!(records, parse_fasta_str(content));
    }

    #[test]
    fn test_invalid_utf8_is_replaced() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        std::io::Write::write_all(&mut file, b">g\xe8ne1\nATGC\n>gene2\nGGCC\n").unwrap();

        let records = parse_fasta_file(file.path()).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].name(), "g\u{FFFD}ne1");
        assert_eq!(records[0].residues(), "ATGC");
        assert_eq!(records[1].name(), "gene2");
    }

    #[test]
    fn test_case_preservation() {
        let records = parse_fasta_str(">seq1\nacgT\n");
        assert_eq!(records[0].residues(), "acgT");
    }

    #[test]
    fn test_reader_matches_str_parser() {
        let content = "NN\n>a\nAC\nGT\n>b\n>c\nTT\n";
        let from_reader = parse_fasta(content.as_bytes()).unwrap();
        assert_eq!(from_reader, parse_fasta_str(content));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = parse_fasta_file(dir.path().join("absent.fasta"));
        assert!(matches!(result, Err(FastaError::IoError(_))));
    }

    #[test]
    fn test_parse_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        std::io::Write::write_all(&mut file, b">x\nGGCC\n>y\nAATT\n").unwrap();

        let records = parse_fasta_file(file.path()).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[1].name(), "y");
    }

    /// Reader that serves some bytes, then fails.
    struct FailingReader {
        data: io::Cursor<Vec<u8>>,
    }

    impl Read for FailingReader {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            let n = self.data.read(buf)?;
            if n == 0 {
                Err(io::Error::new(io::ErrorKind::Other, "disk gone"))
            } else {
                Ok(n)
            }
        }
    }

    fn failing_input() -> io::BufReader<FailingReader> {
        io::BufReader::new(FailingReader {
            data: io::Cursor::new(b">a\nAC\n>b\nGT\n".to_vec()),
        })
    }

    #[test]
    fn test_streaming_yields_records_before_failure() {
        let mut records = FastaRecords::new(failing_input());

        let first = records.next().unwrap().unwrap();
        assert_eq!(first.name(), "a");
        assert!(matches!(records.next(), Some(Err(FastaError::IoError(_)))));
        assert!(records.next().is_none());
    }

    #[test]
    fn test_collecting_parser_aborts_on_failure() {
        assert!(parse_fasta(failing_input()).is_err());
    }
}
