use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use derive_getters::{Dissolve, Getters};
use derive_more::Constructor;
use eyre::{Result, WrapErr};

use optalign_alignment_rs::pairwise::alignment::{AlignedPair, Alignments};
use optalign_alignment_rs::Score;

use crate::traits::WriteRecord;

/// A single reported alignment: both header lines and the aligned rows.
#[derive(Debug, Clone, Eq, PartialEq, Hash, Default, Constructor, Getters, Dissolve)]
pub struct Block {
    label1: String,
    seq1: String,
    label2: String,
    seq2: String,
}

impl Block {
    pub fn from_pair(label1: impl Into<String>, label2: impl Into<String>, pair: &AlignedPair) -> Self {
        Self {
            label1: label1.into(),
            seq1: pair.seq1().clone(),
            label2: label2.into(),
            seq2: pair.seq2().clone(),
        }
    }
}

/// Writes alignments as four-line blocks: `label1`, aligned seq1, `label2`, aligned seq2.
/// Blocks follow each other without separators.
#[derive(Debug, Clone, Eq, PartialEq, Dissolve)]
pub struct Writer<W> {
    writer: W,
}

impl<W> Writer<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl Writer<()> {
    pub fn from_path(path: impl AsRef<Path>) -> Result<Writer<BufWriter<File>>> {
        let path = path.as_ref();
        let file = File::create(path)
            .wrap_err_with(|| format!("Failed to create output file {}", path.display()))?;
        Ok(Writer::new(BufWriter::new(file)))
    }
}

impl<W: Write> Writer<W> {
    /// Writes the alignments a consumer should see: the canonical one for global mode and every
    /// alignment for local mode. Returns the number of written blocks.
    pub fn write_alignments<S: Score>(
        &mut self,
        label1: &str,
        label2: &str,
        alignments: &Alignments<S>,
    ) -> Result<usize> {
        let reported = alignments.reported();
        for pair in reported {
            self.write_record(&Block::from_pair(label1, label2, pair))?;
        }
        Ok(reported.len())
    }
}

impl<W: Write> WriteRecord for Writer<W> {
    type Record = Block;

    fn write_record(&mut self, record: &Self::Record) -> Result<()> {
        for line in [
            &record.label1,
            &record.seq1,
            &record.label2,
            &record.seq2,
        ] {
            self.writer.write_all(line.as_bytes())?;
            self.writer.write_all(b"\n")?;
        }
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
