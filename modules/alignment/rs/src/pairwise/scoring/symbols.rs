use eyre::{ensure, Result};

use crate::Score;

/// Substitution scores for a pair of aligned symbols.
pub trait Scorer {
    type Score: Score;
    type Symbol;

    /// Score of aligning `s1` against `s2`. Returns `None` if the pair is unknown to the scorer.
    fn score(&self, s1: &Self::Symbol, s2: &Self::Symbol) -> Option<Self::Score>;
}

impl<T: Scorer> Scorer for &T {
    type Score = T::Score;
    type Symbol = T::Symbol;

    #[inline(always)]
    fn score(&self, s1: &Self::Symbol, s2: &Self::Symbol) -> Option<Self::Score> {
        (*self).score(s1, s2)
    }
}

/// Constant match/mismatch scores for any pair of bytes.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub struct Equality<S: Score> {
    pub equal: S,
    pub different: S,
}

impl<S: Score> Equality<S> {
    pub fn new(equal: S, different: S) -> Self {
        Self { equal, different }
    }
}

impl<S: Score> Scorer for Equality<S> {
    type Score = S;
    type Symbol = u8;

    #[inline(always)]
    fn score(&self, a: &Self::Symbol, b: &Self::Symbol) -> Option<Self::Score> {
        if a == b {
            Some(self.equal)
        } else {
            Some(self.different)
        }
    }
}

const ABSENT: u8 = u8::MAX;

/// A substitution matrix (PAM, BLOSUM, ...) indexed by single-byte symbols.
///
/// Rows and columns are labelled independently; [Matrix::lookup] takes the row symbol first.
/// Symmetry is not required.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct Matrix<S: Score> {
    columns: Vec<u8>,
    rows: Vec<u8>,
    colind: [u8; 256],
    rowind: [u8; 256],
    scores: Vec<S>,
}

impl<S: Score> Matrix<S> {
    /// Builds the matrix from the header symbols and a list of `(row symbol, scores)` entries,
    /// where each row holds one score per header symbol.
    pub fn new(columns: Vec<u8>, rows: Vec<(u8, Vec<S>)>) -> Result<Self> {
        ensure!(!columns.is_empty(), "Substitution matrix has no columns");
        ensure!(
            columns.len() < ABSENT as usize && rows.len() < ABSENT as usize,
            "Substitution matrix is too large: {} columns x {} rows",
            columns.len(),
            rows.len()
        );

        let mut colind = [ABSENT; 256];
        for (ind, symbol) in columns.iter().enumerate() {
            ensure!(
                colind[*symbol as usize] == ABSENT,
                "Duplicated column symbol in the substitution matrix: {:?}",
                *symbol as char
            );
            colind[*symbol as usize] = ind as u8;
        }

        let mut rowind = [ABSENT; 256];
        let mut labels = Vec::with_capacity(rows.len());
        let mut scores = Vec::with_capacity(rows.len() * columns.len());
        for (ind, (symbol, row)) in rows.into_iter().enumerate() {
            ensure!(
                rowind[symbol as usize] == ABSENT,
                "Duplicated row symbol in the substitution matrix: {:?}",
                symbol as char
            );
            ensure!(
                row.len() == columns.len(),
                "Row {:?} has {} scores, expected one per column ({})",
                symbol as char,
                row.len(),
                columns.len()
            );
            ensure!(
                colind[symbol as usize] != ABSENT,
                "Row symbol {:?} is missing from the substitution matrix header",
                symbol as char
            );
            rowind[symbol as usize] = ind as u8;
            labels.push(symbol);
            scores.extend(row);
        }
        // Distinct labels drawn from the header: equal counts mean the same symbol set
        ensure!(
            labels.len() == columns.len(),
            "Substitution matrix has {} rows for {} header symbols",
            labels.len(),
            columns.len()
        );

        Ok(Self {
            columns,
            rows: labels,
            colind,
            rowind,
            scores,
        })
    }

    /// Score stored at the intersection of the `row` and `column` symbols.
    #[inline(always)]
    pub fn lookup(&self, row: u8, column: u8) -> Option<S> {
        let (r, c) = (self.rowind[row as usize], self.colind[column as usize]);
        if r == ABSENT || c == ABSENT {
            return None;
        }
        Some(self.scores[r as usize * self.columns.len() + c as usize])
    }

    pub fn columns(&self) -> &[u8] {
        &self.columns
    }

    pub fn rows(&self) -> &[u8] {
        &self.rows
    }

    /// True if every pair of symbols scores the same in both orders.
    pub fn is_symmetric(&self) -> bool {
        self.rows.iter().all(|r| {
            self.columns
                .iter()
                .all(|c| self.lookup(*r, *c) == self.lookup(*c, *r))
        })
    }
}

impl<S: Score> Scorer for Matrix<S> {
    type Score = S;
    type Symbol = u8;

    #[inline(always)]
    fn score(&self, s1: &Self::Symbol, s2: &Self::Symbol) -> Option<Self::Score> {
        self.lookup(*s1, *s2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dna() -> Result<Matrix<i32>> {
        Matrix::new(
            b"ACG".to_vec(),
            vec![
                (b'A', vec![2, -1, -2]),
                (b'C', vec![-1, 3, -3]),
                (b'G', vec![-2, -3, 4]),
            ],
        )
    }

    #[test]
    fn test_matrix_lookup() -> Result<()> {
        let matrix = dna()?;
        assert_eq!(matrix.lookup(b'A', b'A'), Some(2));
        assert_eq!(matrix.lookup(b'C', b'G'), Some(-3));
        assert_eq!(matrix.lookup(b'G', b'A'), Some(-2));
        assert_eq!(matrix.lookup(b'T', b'A'), None);
        assert_eq!(matrix.lookup(b'A', b'T'), None);
        assert_eq!(matrix.score(&b'G', &b'G'), Some(4));
        assert!(matrix.is_symmetric());
        Ok(())
    }

    #[test]
    fn test_asymmetric_matrix() -> Result<()> {
        let matrix = Matrix::new(b"AB".to_vec(), vec![(b'A', vec![1, 2]), (b'B', vec![3, 4])])?;
        assert_eq!(matrix.lookup(b'A', b'B'), Some(2));
        assert_eq!(matrix.lookup(b'B', b'A'), Some(3));
        assert!(!matrix.is_symmetric());
        Ok(())
    }

    #[test]
    fn test_row_labels_are_independent() -> Result<()> {
        // Rows listed in a different order than the header
        let matrix = Matrix::new(b"AB".to_vec(), vec![(b'B', vec![3, 4]), (b'A', vec![1, 2])])?;
        assert_eq!(matrix.lookup(b'A', b'A'), Some(1));
        assert_eq!(matrix.lookup(b'B', b'A'), Some(3));
        assert_eq!(matrix.rows(), b"BA");
        assert_eq!(matrix.columns(), b"AB");
        Ok(())
    }

    #[test]
    fn test_invalid_matrices() {
        assert!(Matrix::<i32>::new(vec![], vec![]).is_err());
        assert!(Matrix::new(b"AA".to_vec(), vec![(b'A', vec![1, 1])]).is_err());
        assert!(Matrix::new(b"AB".to_vec(), vec![(b'A', vec![1])]).is_err());
        assert!(Matrix::new(b"AB".to_vec(), vec![(b'A', vec![1, 2]), (b'A', vec![1, 2])]).is_err());
        // Header and row symbols must match one to one
        assert!(Matrix::new(b"ABC".to_vec(), vec![(b'A', vec![1, 0, 0])]).is_err());
        assert!(Matrix::new(b"AB".to_vec(), vec![(b'A', vec![1, 2]), (b'C', vec![1, 2])]).is_err());
    }

    #[test]
    fn test_equality() {
        let scorer = Equality::new(5, -4);
        assert_eq!(scorer.score(&b'A', &b'A'), Some(5));
        assert_eq!(scorer.score(&b'A', &b'C'), Some(-4));
        assert_eq!((&scorer).score(&b'*', &b'*'), Some(5));
    }
}
