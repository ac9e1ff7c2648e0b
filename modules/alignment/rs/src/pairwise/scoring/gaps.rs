use crate::pairwise::Error;
use crate::Score;

/// Linear gap model: every gapped column costs the same non-positive penalty.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Debug, Hash)]
pub struct Linear<S: Score> {
    penalty: S,
}

impl<S: Score> Linear<S> {
    pub fn new(penalty: S) -> Result<Self, Error<S>> {
        if penalty > S::zero() {
            return Err(Error::PositiveGapPenalty(penalty));
        }
        Ok(Self { penalty })
    }

    #[inline(always)]
    pub fn penalty(&self) -> S {
        self.penalty
    }

    /// Score of a run of `len` gapped columns. `None` if it does not fit into `S`.
    pub fn run(&self, len: usize) -> Option<S> {
        S::from(len).and_then(|len| self.penalty.checked_mul(&len))
    }
}
