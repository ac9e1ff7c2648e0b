//! Score and move matrices for linear-gap global (Needleman-Wunsch) and local (Smith-Waterman)
//! alignment.
//!
//! Rows follow the second sequence and columns follow the first one, so the cell `(row, col)`
//! describes the best alignment of `seq1[..col]` against `seq2[..row]`. Every cell keeps the
//! full tie set of moves that reach its score, which is what allows the traceback to enumerate
//! all co-optimal alignments.

use std::fmt;
use std::str::FromStr;

use derive_more::Display;
use eyre::eyre;

use super::scoring::{gaps, symbols};
use super::Error;
use crate::{Alignable, Score};

/// Alignment flavour.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Debug, Hash, Default, Display)]
pub enum Mode {
    /// End-to-end alignment of both sequences (Needleman-Wunsch).
    #[default]
    #[display("global")]
    Global,
    /// Best-scoring pair of substrings (Smith-Waterman).
    #[display("local")]
    Local,
}

impl FromStr for Mode {
    type Err = eyre::Report;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "global" | "nw" => Ok(Mode::Global),
            "local" | "sw" => Ok(Mode::Local),
            _ => Err(eyre!("Unknown alignment mode: {s:?} (expected 'global' or 'local')")),
        }
    }
}

/// The kind of predecessor a DP cell was reached from.
#[repr(u8)]
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Debug, Hash)]
pub enum Move {
    /// Diagonal step: `seq1[col - 1]` aligned against `seq2[row - 1]`.
    Substitution = 0b0001,
    /// Horizontal step: `seq1[col - 1]` aligned against a gap.
    Insertion = 0b0010,
    /// Vertical step: a gap aligned against `seq2[row - 1]`.
    Deletion = 0b0100,
    /// No predecessor: the start of a local alignment (or an untouched boundary cell).
    None = 0b1000,
}

impl Move {
    /// All move kinds in the order the traceback explores them.
    pub const ALL: [Move; 4] = [Move::Substitution, Move::Insertion, Move::Deletion, Move::None];
}

/// A set of [Move] kinds packed into a single byte.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
pub struct Moves(u8);

impl Moves {
    pub const EMPTY: Moves = Moves(0);

    #[inline(always)]
    pub fn insert(&mut self, mv: Move) {
        self.0 |= mv as u8;
    }

    #[inline(always)]
    pub fn contains(&self, mv: Move) -> bool {
        self.0 & mv as u8 != 0
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Members of the set in the fixed Substitution, Insertion, Deletion, None order.
    pub fn iter(&self) -> impl Iterator<Item = Move> + '_ {
        Move::ALL.into_iter().filter(|x| self.contains(*x))
    }
}

impl Default for Moves {
    /// Untouched cells have no predecessor.
    fn default() -> Self {
        Move::None.into()
    }
}

impl From<Move> for Moves {
    fn from(value: Move) -> Self {
        Moves(value as u8)
    }
}

impl FromIterator<Move> for Moves {
    fn from_iter<T: IntoIterator<Item = Move>>(iter: T) -> Self {
        let mut moves = Moves::EMPTY;
        for mv in iter {
            moves.insert(mv);
        }
        moves
    }
}

impl fmt::Debug for Moves {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

/// Filled score/move matrices for one pair of sequences.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct Matrix<S: Score> {
    mode: Mode,
    rows: usize,
    cols: usize,
    scores: Vec<S>,
    moves: Vec<Moves>,
    best: Option<S>,
    best_cells: Vec<(usize, usize)>,
}

impl<S: Score> Matrix<S> {
    fn new(mode: Mode, rows: usize, cols: usize) -> Self {
        Self {
            mode,
            rows,
            cols,
            scores: vec![S::zero(); rows * cols],
            moves: vec![Moves::default(); rows * cols],
            best: None,
            best_cells: Vec::new(),
        }
    }

    #[inline(always)]
    fn index(&self, row: usize, col: usize) -> usize {
        debug_assert!(row < self.rows && col < self.cols);
        row * self.cols + col
    }

    #[inline(always)]
    fn set(&mut self, row: usize, col: usize, score: S, moves: Moves) {
        let ind = self.index(row, col);
        self.scores[ind] = score;
        self.moves[ind] = moves;
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Number of rows: `seq2.len() + 1`.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns: `seq1.len() + 1`.
    pub fn cols(&self) -> usize {
        self.cols
    }

    #[inline(always)]
    pub fn score(&self, row: usize, col: usize) -> S {
        self.scores[self.index(row, col)]
    }

    #[inline(always)]
    pub fn moves(&self, row: usize, col: usize) -> Moves {
        self.moves[self.index(row, col)]
    }

    /// Score of the bottom-right cell, i.e. the global alignment score.
    pub fn last(&self) -> S {
        self.score(self.rows - 1, self.cols - 1)
    }

    /// Maximum score over the filled (non-boundary) cells. `None` if a sequence is empty.
    pub fn best(&self) -> Option<S> {
        self.best
    }

    /// Optimal alignment score: the bottom-right cell for global mode and the best filled cell
    /// (zero if there is none) for local mode.
    pub fn optimum(&self) -> S {
        match self.mode {
            Mode::Global => self.last(),
            Mode::Local => self.best.unwrap_or_else(S::zero),
        }
    }

    /// Every filled cell attaining [Matrix::best], in row-major order.
    pub fn best_cells(&self) -> &[(usize, usize)] {
        &self.best_cells
    }

    #[inline(always)]
    fn track(&mut self, row: usize, col: usize, score: S) {
        match self.best {
            Some(best) if best > score => {}
            Some(best) if best == score => self.best_cells.push((row, col)),
            _ => {
                self.best = Some(score);
                self.best_cells.clear();
                self.best_cells.push((row, col));
            }
        }
    }
}

/// Fill the DP matrices for `seq1` (columns) against `seq2` (rows).
///
/// Fails if the scorer has no entry for a pair of symbols or if a cell score does not fit into `S`.
pub fn fill<S, Seq1, Seq2, Scorer>(
    seq1: &Seq1,
    seq2: &Seq2,
    scorer: &Scorer,
    gaps: &gaps::Linear<S>,
    mode: Mode,
) -> Result<Matrix<S>, Error<S>>
where
    S: Score,
    Seq1: Alignable<Symbol = u8>,
    Seq2: Alignable<Symbol = u8>,
    Scorer: symbols::Scorer<Score = S, Symbol = u8>,
{
    let mut matrix = Matrix::new(mode, seq2.len() + 1, seq1.len() + 1);

    if mode == Mode::Global {
        for col in 1..matrix.cols {
            let score = gaps.run(col).ok_or(Error::ScoreOverflow { row: 0, col })?;
            matrix.set(0, col, score, Move::Insertion.into());
        }
        for row in 1..matrix.rows {
            let score = gaps.run(row).ok_or(Error::ScoreOverflow { row, col: 0 })?;
            matrix.set(row, 0, score, Move::Deletion.into());
        }
    }

    let gap = gaps.penalty();
    let start = match mode {
        Mode::Global => S::min_value(),
        Mode::Local => S::zero(),
    };

    for row in 1..matrix.rows {
        let b = seq2.at(row - 1);
        for col in 1..matrix.cols {
            let a = seq1.at(col - 1);
            let substitution = scorer.score(b, a).ok_or(Error::MissingSymbol {
                seq1: *a,
                seq2: *b,
            })?;

            let overflow = Error::ScoreOverflow { row, col };
            let candidates = [
                (
                    Move::Substitution,
                    matrix
                        .score(row - 1, col - 1)
                        .checked_add(&substitution)
                        .ok_or(overflow)?,
                ),
                (
                    Move::Insertion,
                    matrix.score(row, col - 1).checked_add(&gap).ok_or(overflow)?,
                ),
                (
                    Move::Deletion,
                    matrix.score(row - 1, col).checked_add(&gap).ok_or(overflow)?,
                ),
                (Move::None, start),
            ];
            let score = candidates
                .iter()
                .fold(start, |best, (_, score)| best.max(*score));
            let moves = candidates
                .iter()
                .filter(|(_, x)| *x == score)
                .map(|(mv, _)| *mv)
                .collect::<Moves>();
            debug_assert!(!moves.is_empty());

            matrix.set(row, col, score, moves);
            matrix.track(row, col, score);
        }
    }

    log::debug!(
        "Filled {} DP matrix {}x{}: last = {}, best = {:?} at {} cell(s)",
        mode,
        matrix.rows,
        matrix.cols,
        matrix.last(),
        matrix.best,
        matrix.best_cells.len()
    );
    Ok(matrix)
}
