//! Exhaustive traceback over filled DP matrices.
//!
//! Every cell stores the full tie set of moves, so the traceback branches once per move and
//! enumerates every co-optimal path. Paths are walked with an explicit work list: long
//! sequences never grow the call stack.

use std::collections::BTreeSet;
use std::num::NonZeroUsize;

use derive_getters::Dissolve;

use super::alignment::{AlignedPair, GAP};
use super::dp::{Matrix, Mode, Move};
use crate::{Alignable, Score};

/// Outcome of a traceback: sorted distinct pairs and whether the path cap cut the search short.
#[derive(Clone, Eq, PartialEq, Debug, Default, Dissolve)]
pub struct Traced {
    pub pairs: Vec<AlignedPair>,
    pub truncated: bool,
}

/// A partially reconstructed path. Rows are accumulated back to front.
#[derive(Clone, Debug)]
struct Partial {
    row: usize,
    col: usize,
    seq1: Vec<u8>,
    seq2: Vec<u8>,
}

impl Partial {
    fn new(row: usize, col: usize) -> Self {
        let capacity = row + col;
        Self {
            row,
            col,
            seq1: Vec::with_capacity(capacity),
            seq2: Vec::with_capacity(capacity),
        }
    }

    #[inline(always)]
    fn push(&mut self, s1: u8, s2: u8) {
        self.seq1.push(s1);
        self.seq2.push(s2);
    }

    /// Applies a single move, consuming the current cell.
    #[inline(always)]
    fn apply<Seq1, Seq2>(&mut self, mv: Move, seq1: &Seq1, seq2: &Seq2)
    where
        Seq1: Alignable<Symbol = u8>,
        Seq2: Alignable<Symbol = u8>,
    {
        match mv {
            Move::Substitution => {
                self.push(*seq1.at(self.col - 1), *seq2.at(self.row - 1));
                self.row -= 1;
                self.col -= 1;
            }
            Move::Insertion => {
                self.push(*seq1.at(self.col - 1), GAP);
                self.col -= 1;
            }
            Move::Deletion => {
                self.push(GAP, *seq2.at(self.row - 1));
                self.row -= 1;
            }
            Move::None => unreachable!("None moves terminate the path"),
        }
    }

    fn finish(self) -> AlignedPair {
        AlignedPair::from_reversed(self.seq1, self.seq2)
    }
}

/// Cells the traceback starts from: the bottom-right corner for global alignments and every
/// maximum-scoring cell for local ones.
fn entries<S: Score>(matrix: &Matrix<S>) -> Vec<(usize, usize)> {
    match matrix.mode() {
        Mode::Global => vec![(matrix.rows() - 1, matrix.cols() - 1)],
        Mode::Local if matrix.best_cells().is_empty() => vec![(0, 0)],
        Mode::Local => matrix.best_cells().to_vec(),
    }
}

/// Enumerates every optimal alignment encoded in `matrix`.
///
/// `seq1` and `seq2` must be the sequences the matrix was filled with. With `limit` set, the
/// search stops as soon as that many distinct pairs were found and the result is flagged as
/// truncated.
pub fn enumerate<S, Seq1, Seq2>(
    matrix: &Matrix<S>,
    seq1: &Seq1,
    seq2: &Seq2,
    limit: Option<NonZeroUsize>,
) -> Traced
where
    S: Score,
    Seq1: Alignable<Symbol = u8>,
    Seq2: Alignable<Symbol = u8>,
{
    debug_assert_eq!(matrix.rows(), seq2.len() + 1);
    debug_assert_eq!(matrix.cols(), seq1.len() + 1);

    let local = matrix.mode() == Mode::Local;
    let mut found = BTreeSet::new();
    let mut truncated = false;

    // Reversed so that the first entry is explored first
    let mut stack = entries(matrix)
        .into_iter()
        .rev()
        .map(|(row, col)| Partial::new(row, col))
        .collect::<Vec<_>>();

    while let Some(mut path) = stack.pop() {
        if limit.is_some_and(|x| found.len() >= x.get()) {
            truncated = true;
            break;
        }

        loop {
            let (row, col) = (path.row, path.col);
            if row == 0 && col == 0 {
                break;
            }
            if col == 0 {
                path.apply(Move::Deletion, seq1, seq2);
                continue;
            }
            if row == 0 {
                path.apply(Move::Insertion, seq1, seq2);
                continue;
            }

            let moves = matrix.moves(row, col);
            if local && (moves.contains(Move::None) || matrix.score(row, col) == S::zero()) {
                break;
            }

            let mut branches = moves.iter().filter(|x| *x != Move::None);
            let Some(first) = branches.next() else {
                debug_assert!(false, "cell ({row}, {col}) has no predecessor");
                break;
            };
            // Later branches wait on the stack in reverse, so Insertion is popped before Deletion
            let rest = branches.collect::<Vec<_>>();
            for mv in rest.into_iter().rev() {
                let mut branch = path.clone();
                branch.apply(mv, seq1, seq2);
                stack.push(branch);
            }
            path.apply(first, seq1, seq2);
        }
        found.insert(path.finish());
    }

    let mut pairs = found.into_iter().collect::<Vec<_>>();
    if local {
        let longest = pairs.iter().map(AlignedPair::len).max().unwrap_or(0);
        pairs.retain(|x| x.len() == longest);
    }

    if truncated {
        log::warn!(
            "Traceback stopped after {} distinct alignments ({} matrix {}x{}), results are incomplete",
            pairs.len(),
            matrix.mode(),
            matrix.rows(),
            matrix.cols()
        );
    }
    Traced { pairs, truncated }
}
