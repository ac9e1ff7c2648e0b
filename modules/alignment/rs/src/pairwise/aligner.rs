use std::num::NonZeroUsize;

use super::alignment::Alignments;
use super::dp::{self, Mode};
use super::scoring::{gaps, symbols};
use super::traceback;
use super::Error;
use crate::Alignable;

/// Configured pairwise aligner: a substitution scorer, a linear gap penalty, and a mode.
#[derive(Clone, Debug)]
pub struct Aligner<Scorer: symbols::Scorer<Symbol = u8>> {
    scorer: Scorer,
    gaps: gaps::Linear<Scorer::Score>,
    mode: Mode,
    max_paths: Option<NonZeroUsize>,
}

impl<Scorer: symbols::Scorer<Symbol = u8>> Aligner<Scorer> {
    /// Fails if the gap penalty is positive.
    pub fn new(scorer: Scorer, gap: Scorer::Score, mode: Mode) -> Result<Self, Error<Scorer::Score>> {
        Ok(Self {
            scorer,
            gaps: gaps::Linear::new(gap)?,
            mode,
            max_paths: None,
        })
    }

    pub fn with_mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }

    /// Caps the number of distinct alignments collected per call. `None` enumerates all of them.
    pub fn with_max_paths(mut self, max_paths: Option<NonZeroUsize>) -> Self {
        self.max_paths = max_paths;
        self
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn gap(&self) -> Scorer::Score {
        self.gaps.penalty()
    }

    pub fn max_paths(&self) -> Option<NonZeroUsize> {
        self.max_paths
    }

    pub fn scorer(&self) -> &Scorer {
        &self.scorer
    }

    /// Fills the DP matrices and enumerates every optimal alignment of `seq1` against `seq2`.
    pub fn align<Seq1, Seq2>(
        &self,
        seq1: &Seq1,
        seq2: &Seq2,
    ) -> Result<Alignments<Scorer::Score>, Error<Scorer::Score>>
    where
        Seq1: Alignable<Symbol = u8>,
        Seq2: Alignable<Symbol = u8>,
    {
        let matrix = dp::fill(seq1, seq2, &self.scorer, &self.gaps, self.mode)?;
        let score = matrix.optimum();

        let (pairs, truncated) = traceback::enumerate(&matrix, seq1, seq2, self.max_paths).dissolve();
        log::debug!(
            "{} alignment of {}x{} symbols: score {}, {} optimal path(s){}",
            self.mode,
            seq1.len(),
            seq2.len(),
            score,
            pairs.len(),
            if truncated { " (truncated)" } else { "" }
        );
        Ok(Alignments::new(self.mode, score, pairs, truncated))
    }
}

/// Aligns two sequences and returns every optimal alignment, sorted.
pub fn align<S, Scorer, Seq1, Seq2>(
    seq1: &Seq1,
    seq2: &Seq2,
    scorer: &Scorer,
    gap: S,
    mode: Mode,
) -> Result<Alignments<S>, Error<S>>
where
    S: crate::Score,
    Scorer: symbols::Scorer<Score = S, Symbol = u8>,
    Seq1: Alignable<Symbol = u8>,
    Seq2: Alignable<Symbol = u8>,
{
    Aligner::new(scorer, gap, mode)?.align(seq1, seq2)
}
