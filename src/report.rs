//! Flat-text reports, one per operation.
//!
//! Both the command line and the terminal viewer print these reports
//! verbatim, so the layout lives here only.

use std::fmt;
use std::path::Path;

use crate::composition::{gc_content, reverse_complement};
use crate::fasta::{parse_fasta_file, FastaResult};
use crate::genetic_code::TableChoice;
use crate::model::Sequence;
use crate::motif::find_motif;
use crate::translation::{transcribe, translate_with};

/// Message shown when an input file holds no record.
pub const NO_SEQUENCES: &str = "No valid sequences found in the file.";

/// Titled report text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    title: String,
    text: String,
}

impl Report {
    pub fn new(title: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            text: text.into(),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Kind of per-record analysis run on a FASTA file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileAnalysis {
    Dna,
    Rna,
    Protein,
}

impl FileAnalysis {
    fn title(self) -> &'static str {
        match self {
            FileAnalysis::Dna => "DNA Analysis Results",
            FileAnalysis::Rna => "RNA Analysis Results",
            FileAnalysis::Protein => "Protein Analysis Results",
        }
    }
}

/// Reads a FASTA file and builds the matching report.
///
/// Returns `Ok(None)` when the file holds no sequence.
pub fn analyze_file<P: AsRef<Path>>(
    kind: FileAnalysis,
    path: P,
    table: TableChoice,
) -> FastaResult<Option<Report>> {
    let sequences = parse_fasta_file(path)?;
    if sequences.is_empty() {
        return Ok(None);
    }
    Ok(Some(match kind {
        FileAnalysis::Dna => dna_report(&sequences),
        FileAnalysis::Rna => rna_report(&sequences, table),
        FileAnalysis::Protein => protein_report(&sequences),
    }))
}

fn records_report(
    kind: FileAnalysis,
    sequences: &[Sequence],
    details: impl Fn(&Sequence) -> String,
) -> Report {
    let mut text = format!("{}:\n", kind.title());
    for seq in sequences {
        text.push_str(&format!(
            "Name: {}\nSequence: {}\n{}\n",
            seq.name(),
            seq.residues(),
            details(seq)
        ));
    }
    Report::new(kind.title(), text)
}

/// Name, sequence, GC content and reverse complement of each record.
pub fn dna_report(sequences: &[Sequence]) -> Report {
    records_report(FileAnalysis::Dna, sequences, |seq| {
        format!(
            "GC Content: {:.2}%\nReverse Complement: {}\n",
            gc_content(seq.residues()),
            reverse_complement(seq.residues())
        )
    })
}

/// Name, sequence and translated protein of each record.
pub fn rna_report(sequences: &[Sequence], table: TableChoice) -> Report {
    records_report(FileAnalysis::Rna, sequences, |seq| {
        format!(
            "Translated Protein: {}\n",
            translate_with(seq.residues(), table.table())
        )
    })
}

/// Name, sequence and length of each record.
pub fn protein_report(sequences: &[Sequence]) -> Report {
    records_report(FileAnalysis::Protein, sequences, |seq| {
        format!("Length: {}\n", seq.len())
    })
}

/// 1-based motif positions, space separated.
pub fn motif_report(sequence: &str, motif: &str) -> Report {
    let positions = find_motif(sequence, motif);
    let mut text = String::from("Motif Found at Positions:\n");
    for position in &positions {
        text.push_str(&position.to_string());
        text.push(' ');
    }
    if positions.is_empty() {
        text.push_str("No matches found.");
    }
    Report::new("Motif Search Results", text)
}

pub fn transcription_report(dna: &str) -> Report {
    let text = format!(
        "Transcription Result:\nDNA: {}\nRNA: {}",
        dna,
        transcribe(dna)
    );
    Report::new("Transcription Results", text)
}

pub fn translation_report(rna: &str, table: TableChoice) -> Report {
    let text = format!(
        "Translation Result:\nRNA: {}\nProtein: {}",
        rna,
        translate_with(rna, table.table())
    );
    Report::new("Translation Results", text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write as _;

    #[test]
    fn test_dna_report_layout() {
        let report = dna_report(&[Sequence::new("seq1", "ATGC")]);
        assert_eq!(report.title(), "DNA Analysis Results");
        assert_eq!(
            report.text(),
            "DNA Analysis Results:\n\
             Name: seq1\n\
             Sequence: ATGC\n\
             GC Content: 50.00%\n\
             Reverse Complement: GCAT\n\n"
        );
    }

    #[test]
    fn test_rna_report_uses_table() {
        let records = [Sequence::new("r", "AUGCCC")];
        assert!(rna_report(&records, TableChoice::Reference)
            .text()
            .contains("Translated Protein: M\n"));
        assert!(rna_report(&records, TableChoice::Standard)
            .text()
            .contains("Translated Protein: MP\n"));
    }

    #[test]
    fn test_protein_report_lists_each_record() {
        let records = [Sequence::new("p1", "MKV"), Sequence::new("p2", "MF")];
        let text = protein_report(&records).to_string();
        assert!(text.starts_with("Protein Analysis Results:\n"));
        assert!(text.contains("Name: p1\nSequence: MKV\nLength: 3\n\n"));
        assert!(text.contains("Name: p2\nSequence: MF\nLength: 2\n\n"));
    }

    #[test]
    fn test_records_report_keeps_file_order() {
        let records = [Sequence::new("a", "GG"), Sequence::new("b", "AT")];
        assert_eq!(
            dna_report(&records).text(),
            "DNA Analysis Results:\n\
             Name: a\nSequence: GG\nGC Content: 100.00%\nReverse Complement: CC\n\n\
             Name: b\nSequence: AT\nGC Content: 0.00%\nReverse Complement: AT\n\n"
        );
    }

    #[test]
    fn test_motif_report() {
        assert_eq!(
            motif_report("ATATAT", "ATA").text(),
            "Motif Found at Positions:\n1 3 "
        );
        assert_eq!(
            motif_report("ATGC", "").text(),
            "Motif Found at Positions:\nNo matches found."
        );
    }

    #[test]
    fn test_transcription_and_translation_reports() {
        assert_eq!(
            transcription_report("ATGCTA").text(),
            "Transcription Result:\nDNA: ATGCTA\nRNA: AUGCUA"
        );
        assert_eq!(
            translation_report("AUGCCCAAA", TableChoice::Reference).text(),
            "Translation Result:\nRNA: AUGCCCAAA\nProtein: M"
        );
    }

    #[test]
    fn test_analyze_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, ">a\nGGCC\n>b\nATAT\n").unwrap();

        let report = analyze_file(FileAnalysis::Dna, file.path(), TableChoice::Reference)
            .unwrap()
            .unwrap();
        assert!(report.text().contains("GC Content: 100.00%"));
        assert!(report.text().contains("GC Content: 0.00%"));
    }

    #[test]
    fn test_analyze_empty_file() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let report = analyze_file(FileAnalysis::Protein, file.path(), TableChoice::Reference);
        assert!(matches!(report, Ok(None)));
    }
}
