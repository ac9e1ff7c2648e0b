//! Whitespace-delimited substitution matrices (PAM, BLOSUM, ...):
//!
//! ```text
//! # PAM250 (excerpt)
//!    A  R  N
//! A  2 -2  0
//! R -2  6  0
//! N  0  0  2
//! ```
//!
//! Lines starting with '#' are comments and blank lines are skipped. The first remaining line lists
//! the column symbols; every following line is a row symbol and one integer score per column, with
//! exactly one row per column symbol.

use std::error::Error;
use std::io::BufRead;
use std::path::Path;
use std::str::FromStr;

use derive_getters::Dissolve;
use eyre::{ensure, eyre, Result, WrapErr};

use optalign_alignment_rs::pairwise::scoring::Matrix;
use optalign_alignment_rs::Score;

use crate::compression;

#[derive(Debug, Clone, Eq, PartialEq, Dissolve)]
pub struct Reader<R> {
    reader: R,
}

impl Reader<()> {
    pub fn from_path(
        path: impl AsRef<Path>,
    ) -> Result<Reader<Box<dyn BufRead + Send + Sync + 'static>>> {
        Ok(Reader::new(compression::read_file(path)?.buffered()))
    }
}

fn symbol(token: &str) -> Result<u8> {
    match token.as_bytes() {
        [x] => Ok(*x),
        _ => Err(eyre!(
            "Substitution matrix symbols must be single characters, got {token:?}"
        )),
    }
}

impl<R: BufRead> Reader<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }

    /// Parses the whole input into a substitution matrix.
    pub fn read<S>(self) -> Result<Matrix<S>>
    where
        S: Score + FromStr,
        S::Err: Error + Send + Sync + 'static,
    {
        let mut lines = self
            .reader
            .lines()
            .enumerate()
            .filter_map(|(ind, line)| match line {
                Ok(line) => {
                    let line = line.trim();
                    if line.is_empty() || line.starts_with('#') {
                        None
                    } else {
                        Some(Ok((ind + 1, line.to_owned())))
                    }
                }
                Err(err) => Some(Err(
                    eyre::Report::new(err).wrap_err(format!("Failed to read line {}", ind + 1))
                )),
            });

        let (lineno, header) = lines
            .next()
            .transpose()?
            .ok_or_else(|| eyre!("Substitution matrix is empty"))?;
        let columns = header
            .split_whitespace()
            .map(symbol)
            .collect::<Result<Vec<_>>>()
            .wrap_err_with(|| format!("Invalid header at line {lineno}"))?;

        let mut rows = Vec::new();
        for line in lines {
            let (lineno, line) = line?;
            let mut tokens = line.split_whitespace();

            // Lines are never blank at this point
            let label = tokens.next().map(symbol).transpose()?.unwrap_or_default();
            let scores = tokens
                .map(|x| {
                    x.parse::<S>()
                        .wrap_err_with(|| format!("Invalid score at line {lineno}: {x:?}"))
                })
                .collect::<Result<Vec<_>>>()?;
            ensure!(
                scores.len() == columns.len(),
                "Row {:?} at line {lineno} has {} scores, expected {}",
                label as char,
                scores.len(),
                columns.len()
            );
            rows.push((label, scores));
        }

        let matrix = Matrix::new(columns, rows)?;
        log::debug!(
            "Loaded {}x{} substitution matrix (symmetric: {})",
            matrix.rows().len(),
            matrix.columns().len(),
            matrix.is_symmetric()
        );
        Ok(matrix)
    }
}
