use derive_getters::{Dissolve, Getters};

use super::pair::AlignedPair;
use crate::pairwise::dp::Mode;
use crate::Score;

/// All optimal alignments found for a pair of sequences, sorted by (seq1, seq2) row.
#[derive(Clone, Eq, PartialEq, Debug, Getters, Dissolve)]
pub struct Alignments<S: Score> {
    mode: Mode,
    /// Optimal score: the bottom-right cell for global alignments, the matrix maximum for local ones.
    score: S,
    pairs: Vec<AlignedPair>,
    /// True if enumeration stopped early because of the configured path cap.
    truncated: bool,
}

impl<S: Score> Alignments<S> {
    pub(crate) fn new(mode: Mode, score: S, pairs: Vec<AlignedPair>, truncated: bool) -> Self {
        debug_assert!(pairs.windows(2).all(|w| w[0] < w[1]));
        Self {
            mode,
            score,
            pairs,
            truncated,
        }
    }

    /// The canonical alignment: the first one in sorted order.
    pub fn best(&self) -> Option<&AlignedPair> {
        self.pairs.first()
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, AlignedPair> {
        self.pairs.iter()
    }

    /// Alignments a consumer is expected to report: only the canonical one for global mode and
    /// every surviving alignment for local mode.
    pub fn reported(&self) -> &[AlignedPair] {
        match self.mode {
            Mode::Global => &self.pairs[..self.pairs.len().min(1)],
            Mode::Local => &self.pairs,
        }
    }
}

impl<S: Score> IntoIterator for Alignments<S> {
    type Item = AlignedPair;
    type IntoIter = std::vec::IntoIter<AlignedPair>;

    fn into_iter(self) -> Self::IntoIter {
        self.pairs.into_iter()
    }
}

impl<'a, S: Score> IntoIterator for &'a Alignments<S> {
    type Item = &'a AlignedPair;
    type IntoIter = std::slice::Iter<'a, AlignedPair>;

    fn into_iter(self) -> Self::IntoIter {
        self.pairs.iter()
    }
}
