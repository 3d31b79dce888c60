//! Exact motif search.

/// Finds every occurrence of `motif` in `seq`, overlapping ones included.
///
/// Positions are 1-based character offsets in ascending order. An empty
/// motif, or one longer than the sequence, has no match.
///
/// ```
/// use seqanalyzer::motif::find_motif;
///
/// assert_eq!(find_motif("ATATAT", "ATA"), vec![1, 3]);
/// ```
pub fn find_motif(seq: &str, motif: &str) -> Vec<usize> {
    let seq: Vec<char> = seq.chars().collect();
    let motif: Vec<char> = motif.chars().collect();
    if motif.is_empty() || motif.len() > seq.len() {
        return Vec::new();
    }

    seq.windows(motif.len())
        .enumerate()
        .filter(|(_, window)| *window == motif.as_slice())
        .map(|(i, _)| i + 1)
        .collect()
}
