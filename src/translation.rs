//! DNA → RNA → protein.
//!
//! Transcription is a plain `T` → `U` substitution. Translation reads
//! consecutive codons from the first character and stops at the first codon
//! the table does not know; a trailing partial codon is ignored.

use tracing::debug;

use crate::genetic_code::CodonTable;

/// Transcribes DNA to RNA by replacing every uppercase `T` with `U`.
///
/// Lowercase and non-nucleotide characters pass through unchanged.
pub fn transcribe(dna: &str) -> String {
    dna.replace('T', "U")
}

/// Translates RNA with the reference codon table.
pub fn translate(rna: &str) -> String {
    translate_with(rna, CodonTable::reference())
}

/// Translates RNA with an explicit codon table.
///
/// Returns the amino acids read before the first unknown codon, possibly
/// an empty string.
pub fn translate_with(rna: &str, table: &CodonTable) -> String {
    let chars: Vec<char> = rna.chars().collect();
    let mut protein = String::with_capacity(chars.len() / 3);
    let mut codon = String::with_capacity(3);

    for (index, window) in chars.chunks_exact(3).enumerate() {
        codon.clear();
        codon.extend(window);
        match table.get(&codon) {
            Some(aa) => protein.push(aa),
            None => {
                debug!(codon = %codon, position = index * 3 + 1, "translation stopped");
                break;
            }
        }
    }

    protein
}
