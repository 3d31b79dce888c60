//! Codon tables used by RNA translation.
//!
//! This module provides:
//! - The reference table, a deliberately partial table of nine codons
//! - The NCBI standard genetic code (table 1), written with RNA codons
//!
//! A codon missing from a table is not an error: translation stops there.

use std::collections::HashMap;
use std::fmt;

use once_cell::sync::Lazy;

static REFERENCE: Lazy<CodonTable> = Lazy::new(|| {
    CodonTable::from_pairs(
        "Reference (partial)",
        &[
            ("AUG", 'M'),
            ("UUU", 'F'),
            ("UUC", 'F'),
            ("UUA", 'L'),
            ("UUG", 'L'),
            ("UCU", 'S'),
            ("UCC", 'S'),
            ("UCA", 'S'),
            ("UCG", 'S'),
        ],
    )
});

static STANDARD: Lazy<CodonTable> = Lazy::new(|| {
    CodonTable::from_ncbieaa(
        "Standard",
        "FFLLSSSSYY**CC*WLLLLPPPPHHQQRRRRIIIMTTTTNNKKSSRRVVVVAAAADDEEGGGG",
    )
});

/// A mapping from RNA codons to one-letter amino acid codes.
#[derive(Debug, Clone)]
pub struct CodonTable {
    name: &'static str,
    codons: HashMap<String, char>,
}

impl CodonTable {
    fn from_pairs(name: &'static str, pairs: &[(&str, char)]) -> Self {
        let codons = pairs
            .iter()
            .map(|&(codon, aa)| (codon.to_string(), aa))
            .collect();
        Self { name, codons }
    }

    /// Builds a complete table from an NCBI `ncbieaa` string.
    ///
    /// NCBI order: UUU, UUC, UUA, UUG, UCU, UCC, ... (Base1, Base2, Base3)
    fn from_ncbieaa(name: &'static str, ncbieaa: &str) -> Self {
        let bases = ['U', 'C', 'A', 'G'];
        let codons = bases
            .iter()
            .flat_map(|&b1| bases.iter().map(move |&b2| (b1, b2)))
            .flat_map(|(b1, b2)| bases.iter().map(move |&b3| [b1, b2, b3]))
            .zip(ncbieaa.chars())
            .map(|(codon, aa)| (codon.iter().collect::<String>(), aa))
            .collect();
        Self { name, codons }
    }

    /// The partial table translation uses by default.
    pub fn reference() -> &'static CodonTable {
        &REFERENCE
    }

    /// The complete NCBI standard code; stop codons map to '*'.
    pub fn standard() -> &'static CodonTable {
        &STANDARD
    }

    /// Looks up a codon. Case-sensitive, RNA alphabet only.
    pub fn get(&self, codon: &str) -> Option<char> {
        self.codons.get(codon).copied()
    }

    /// Name shown to the user.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Number of codons in the table.
    pub fn len(&self) -> usize {
        self.codons.len()
    }

    /// Whether the table holds no codon.
    pub fn is_empty(&self) -> bool {
        self.codons.is_empty()
    }
}

/// Which codon table to translate with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TableChoice {
    #[default]
    Reference,
    Standard,
}

impl TableChoice {
    /// The shared codon table for this choice.
    pub fn table(self) -> &'static CodonTable {
        match self {
            TableChoice::Reference => CodonTable::reference(),
            TableChoice::Standard => CodonTable::standard(),
        }
    }

    /// The other table.
    pub fn toggled(self) -> Self {
        match self {
            TableChoice::Reference => TableChoice::Standard,
            TableChoice::Standard => TableChoice::Reference,
        }
    }
}

impl fmt::Display for TableChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.table().name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_table_contents() {
        let table = CodonTable::reference();
        assert_eq!(table.len(), 9);
        assert_eq!(table.get("AUG"), Some('M'));
        assert_eq!(table.get("UUC"), Some('F'));
        assert_eq!(table.get("UUG"), Some('L'));
        assert_eq!(table.get("UCG"), Some('S'));
    }

    #[test]
    fn test_reference_table_is_partial() {
        let table = CodonTable::reference();
        assert_eq!(table.get("CCC"), None);
        assert_eq!(table.get("UAA"), None);
        // DNA alphabet and lowercase are not looked up
        assert_eq!(table.get("ATG"), None);
        assert_eq!(table.get("aug"), None);
    }

    #[test]
    fn test_standard_code_translation() {
        let table = CodonTable::standard();
        assert_eq!(table.len(), 64);
        assert_eq!(table.get("AUG"), Some('M')); // Start codon
        assert_eq!(table.get("UAA"), Some('*')); // Stop codon
        assert_eq!(table.get("UAG"), Some('*'));
        assert_eq!(table.get("UGA"), Some('*'));
        assert_eq!(table.get("UUU"), Some('F'));
        assert_eq!(table.get("GGG"), Some('G'));
        assert_eq!(table.get("CCC"), Some('P'));
    }

    #[test]
    fn test_standard_agrees_with_reference() {
        let standard = CodonTable::standard();
        for codon in ["AUG", "UUU", "UUC", "UUA", "UUG", "UCU", "UCC", "UCA", "UCG"] {
            assert_eq!(standard.get(codon), CodonTable::reference().get(codon));
        }
    }

    #[test]
    fn test_table_choice() {
        assert_eq!(TableChoice::default(), TableChoice::Reference);
        assert!(!TableChoice::Reference.table().is_empty());
        assert_eq!(TableChoice::Standard.table().len(), 64);
        assert_eq!(TableChoice::Reference.toggled(), TableChoice::Standard);
        assert_eq!(TableChoice::Standard.to_string(), "Standard");
    }
}
