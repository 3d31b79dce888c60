//! Base composition of DNA sequences.
//!
//! Only uppercase `A`, `C`, `G` and `T` are recognised; everything else
//! counts as "other" and complements to `N`.

/// Per-base counts of a sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BaseCounts {
    pub a: usize,
    pub c: usize,
    pub g: usize,
    pub t: usize,
    pub other: usize,
}

impl BaseCounts {
    /// Total number of characters counted.
    pub fn total(&self) -> usize {
        self.a + self.c + self.g + self.t + self.other
    }

    /// GC percentage; NaN when nothing was counted.
    pub fn gc_content(&self) -> f64 {
        (self.g + self.c) as f64 / self.total() as f64 * 100.0
    }
}

/// Counts the bases of a sequence, case-sensitively.
pub fn base_counts(seq: &str) -> BaseCounts {
    seq.chars().fold(BaseCounts::default(), |mut counts, c| {
        match c {
            'A' => counts.a += 1,
            'C' => counts.c += 1,
            'G' => counts.g += 1,
            'T' => counts.t += 1,
            _ => counts.other += 1,
        }
        counts
    })
}

/// Percentage (0-100) of uppercase `G` and `C` among all characters.
///
/// An empty sequence has no defined GC content and yields `f64::NAN`.
///
/// ```
/// use seqanalyzer::composition::gc_content;
///
/// assert_eq!(gc_content("ATGC"), 50.0);
/// assert!(gc_content("").is_nan());
/// ```
pub fn gc_content(seq: &str) -> f64 {
    base_counts(seq).gc_content()
}

/// Complement of a single base; unknown symbols become `N`.
pub fn complement(base: char) -> char {
    match base {
        'A' => 'T',
        'T' => 'A',
        'G' => 'C',
        'C' => 'G',
        _ => 'N',
    }
}

/// Reverse complement of a DNA sequence.
///
/// Characters outside `ACGT` (including lowercase) map to `N`, so applying
/// it twice does not always give the input back.
pub fn reverse_complement(seq: &str) -> String {
    seq.chars().rev().map(complement).collect()
}
