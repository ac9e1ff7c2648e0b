use optalign_alignment_rs::pairwise::alignment::{AlignedPair, Alignments, GAP};
use optalign_alignment_rs::pairwise::scoring::{Equality, Matrix};

mod global;
mod local;

pub type Score = i32;

/// Textbook scheme: +1 for a match, -1 for a mismatch.
pub fn textbook() -> Equality<Score> {
    Equality::new(1, -1)
}

/// Transition/transversion DNA matrix.
pub fn dna() -> eyre::Result<Matrix<Score>> {
    Matrix::new(
        b"ACGT".to_vec(),
        vec![
            (b'A', vec![5, -4, -1, -4]),
            (b'C', vec![-4, 5, -4, -1]),
            (b'G', vec![-1, -4, 5, -4]),
            (b'T', vec![-4, -1, -4, 5]),
        ],
    )
}

pub fn rows(alignments: &Alignments<Score>) -> Vec<(&str, &str)> {
    alignments
        .iter()
        .map(|x| (x.seq1().as_str(), x.seq2().as_str()))
        .collect()
}

pub fn ungapped(pair: &AlignedPair) -> (String, String) {
    let strip = |x: &str| x.chars().filter(|c| *c != GAP as char).collect::<String>();
    (strip(pair.seq1()), strip(pair.seq2()))
}

/// Pairs are equal-length rows and never align a gap against a gap.
pub fn ensure_well_formed(alignments: &Alignments<Score>) {
    for pair in alignments {
        assert_eq!(pair.seq1().len(), pair.seq2().len(), "{pair}");
        assert!(pair.columns().all(|(a, b)| a != GAP || b != GAP), "{pair}");
    }
    let sorted = alignments.pairs().windows(2).all(|w| w[0] < w[1]);
    assert!(sorted, "alignments are not sorted or contain duplicates");
}
