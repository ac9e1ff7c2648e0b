/// `Op` represents a single column of a pairwise alignment.
#[repr(u8)]
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Debug, Hash)]
pub enum Op {
    /// Represents a gap in the first sequence (v)
    GapFirst,
    /// Represents a gap in the second sequence (^)
    GapSecond,
    /// Represents identical symbols in both sequences (=)
    Match,
    /// Represents different symbols in the sequences (X)
    Mismatch,
}

impl Op {
    /// Returns the symbol representation of the operation.
    pub fn symbol(&self) -> char {
        match self {
            Op::GapFirst => 'v',
            Op::GapSecond => '^',
            Op::Match => '=',
            Op::Mismatch => 'X',
        }
    }

    /// Classifies a single alignment column. Returns `None` for a column made of two gaps.
    pub fn classify(seq1: u8, seq2: u8, gap: u8) -> Option<Self> {
        match (seq1 == gap, seq2 == gap) {
            (true, true) => None,
            (true, false) => Some(Op::GapFirst),
            (false, true) => Some(Op::GapSecond),
            (false, false) if seq1 == seq2 => Some(Op::Match),
            (false, false) => Some(Op::Mismatch),
        }
    }
}
