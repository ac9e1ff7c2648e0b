use derive_more::{Display, Error};

use crate::Score;

/// Failures of the alignment core. Input shape problems are reported by the loaders instead.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Display, Error)]
pub enum Error<S: Score> {
    /// The substitution scorer has no entry for a symbol pair met during the matrix fill.
    #[display(
        "No substitution score for {:?} (seq2) vs {:?} (seq1)",
        *seq2 as char,
        *seq1 as char
    )]
    MissingSymbol { seq1: u8, seq2: u8 },
    /// A DP score left the range of the score type.
    #[display("Alignment score overflow at DP cell ({row}, {col})")]
    ScoreOverflow { row: usize, col: usize },
    /// Linear gap penalties must be non-positive.
    #[display("Gap penalty must be non-positive, got {_0}")]
    PositiveGapPenalty(#[error(not(source))] S),
}
