use std::io::BufRead;
use std::path::Path;

use derive_getters::Dissolve;
use eyre::{bail, Result, WrapErr};

use super::{record::Record, validate};
use crate::compression;
use crate::traits::ReadRecord;

/// A line-oriented FASTA reader that reads a single record at a time:
/// - A line starting with '>' opens a new record, the rest of the line (trimmed) is its ID
/// - Following lines are trimmed and concatenated into the record's sequence
/// - Blank lines are ignored anywhere in the file
///
/// Returns an error if there are:
/// - Errors while reading from the underlying reader
/// - Non-blank lines before the first record
/// - Sequence symbols that are not printable ASCII or that are the gap marker '-'
#[derive(Debug, Clone, Eq, PartialEq, Dissolve)]
pub struct Reader<R> {
    reader: R,
    line: String,
    // Header of the next record if it was already consumed while reading the previous one
    pending: Option<String>,
    lineno: usize,
}

impl Reader<()> {
    /// Create a new FASTA reader from the given file path. Gzip compression is detected from the
    /// file signature.
    pub fn from_path(
        path: impl AsRef<Path>,
    ) -> Result<Reader<Box<dyn BufRead + Send + Sync + 'static>>> {
        Ok(Reader::new(compression::read_file(path)?.buffered()))
    }
}

impl<R: BufRead> Reader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            line: String::new(),
            pending: None,
            lineno: 0,
        }
    }

    /// Reads the next line into the internal buffer. Returns `false` at EOF.
    #[inline(always)]
    fn next_line(&mut self) -> Result<bool> {
        self.line.clear();
        let read = self
            .reader
            .read_line(&mut self.line)
            .wrap_err_with(|| format!("Failed to read FASTA line {}", self.lineno + 1))?;
        self.lineno += 1;
        Ok(read > 0)
    }

    /// Finds the header of the next record. Returns `None` at EOF.
    fn next_header(&mut self) -> Result<Option<String>> {
        if let Some(header) = self.pending.take() {
            return Ok(Some(header));
        }
        while self.next_line()? {
            let line = self.line.trim();
            if line.is_empty() {
                continue;
            }
            match line.strip_prefix('>') {
                Some(id) => return Ok(Some(id.trim().to_owned())),
                None => bail!(
                    "Expected '>' at the start of the FASTA record, line {}: {:?}",
                    self.lineno,
                    line
                ),
            }
        }
        Ok(None)
    }

    fn read_parts(&mut self, record: &mut Record) -> Result<bool> {
        let Some(header) = self.next_header()? else {
            return Ok(false);
        };

        // SAFETY: The ID and sequence are validated below before the record is handed out
        let (id, seq) = unsafe { record.raw() };
        *id = header;
        seq.clear();

        while self.next_line()? {
            let line = self.line.trim();
            if let Some(next) = line.strip_prefix('>') {
                self.pending = Some(next.trim().to_owned());
                break;
            }
            seq.extend_from_slice(line.as_bytes());
        }

        validate::id(id)?;
        validate::seq(seq).wrap_err_with(|| format!("Invalid FASTA record: {id:?}"))?;
        Ok(true)
    }
}

impl<R: BufRead> ReadRecord for Reader<R> {
    type Record = Record;

    /// Parse the next FASTA record into the given [Record] buffer.
    /// Returns `false` if there are no more records to read.
    ///
    /// On error the buffer is left in an unspecified state, but can be reused for the next read.
    fn read_record(&mut self, buf: &mut Self::Record) -> Result<bool> {
        self.read_parts(buf)
    }
}

/// Reads a FASTA file that must contain exactly two records.
pub fn read_pair(path: impl AsRef<Path>) -> Result<(Record, Record)> {
    let path = path.as_ref();
    let mut records = Vec::with_capacity(2);
    Reader::from_path(path)?
        .read_to_end(&mut records)
        .wrap_err_with(|| format!("Failed to parse FASTA file {}", path.display()))?;

    match <[Record; 2]>::try_from(records) {
        Ok([first, second]) => Ok((first, second)),
        Err(records) => bail!(
            "Expected exactly 2 sequences in {}, found {}",
            path.display(),
            records.len()
        ),
    }
}
