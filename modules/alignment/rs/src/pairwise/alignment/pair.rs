use std::fmt;

use derive_getters::{Dissolve, Getters};
use itertools::Itertools;

use super::op::Op;
use super::step::Step;
use super::GAP;
use crate::pairwise::scoring::symbols;
use crate::Score;

/// A single optimal alignment: two rows of equal length over the sequence alphabet plus [GAP].
///
/// Pairs are ordered lexicographically by the first row and then by the second one.
#[derive(Clone, Eq, PartialEq, Ord, PartialOrd, Debug, Hash, Default, Getters, Dissolve)]
pub struct AlignedPair {
    seq1: String,
    seq2: String,
}

impl AlignedPair {
    /// Builds a pair from rows that were accumulated back to front during traceback.
    pub(crate) fn from_reversed(mut seq1: Vec<u8>, mut seq2: Vec<u8>) -> Self {
        debug_assert_eq!(seq1.len(), seq2.len());
        seq1.reverse();
        seq2.reverse();
        Self {
            seq1: seq1.into_iter().map(char::from).collect(),
            seq2: seq2.into_iter().map(char::from).collect(),
        }
    }

    /// Length of the alignment, i.e. the number of columns.
    pub fn len(&self) -> usize {
        self.seq1.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seq1.is_empty()
    }

    /// Iterate over alignment columns as (seq1 symbol, seq2 symbol).
    pub fn columns(&self) -> impl Iterator<Item = (u8, u8)> + '_ {
        self.seq1.bytes().zip(self.seq2.bytes())
    }

    /// Run-length encoded operations describing the alignment.
    pub fn steps(&self) -> Vec<Step<usize>> {
        self.columns()
            .filter_map(|(s1, s2)| Op::classify(s1, s2, GAP))
            .dedup_with_count()
            // dedup_with_count never yields empty runs
            .map(|(len, op)| Step::new_unchecked(op, len))
            .collect()
    }

    /// Returns the RLE representation of the alignment, e.g. `3=1v2=`.
    pub fn rle(&self) -> String {
        Step::rle_string(self.steps().iter())
    }

    /// Both rows with the gap markers removed.
    pub fn ungapped(&self) -> (Vec<u8>, Vec<u8>) {
        let strip = |row: &str| row.bytes().filter(|x| *x != GAP).collect::<Vec<u8>>();
        (strip(&self.seq1), strip(&self.seq2))
    }

    /// Recomputes the score of the alignment under the given scheme.
    /// Returns `None` if the scorer has no entry for one of the aligned symbol pairs
    /// or if the total does not fit into `S`.
    pub fn rescore<S, Scorer>(&self, scorer: &Scorer, gap: S) -> Option<S>
    where
        S: Score,
        Scorer: symbols::Scorer<Score = S, Symbol = u8>,
    {
        let mut total = S::zero();
        for (s1, s2) in self.columns() {
            let score = match (s1 == GAP, s2 == GAP) {
                (false, false) => scorer.score(&s2, &s1)?,
                _ => gap,
            };
            total = total.checked_add(&score)?;
        }
        Some(total)
    }
}

impl fmt::Display for AlignedPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\n{}", self.seq1, self.seq2)
    }
}
