use derive_getters::{Dissolve, Getters};
use derive_more::Into;
use eyre::Result;
use std::error::Error;

use super::validate;

/// A single FASTA record:
/// - The ID is the header line after '>', trimmed. It may be empty but never contains newlines.
/// - The sequence is made of printable ASCII symbols other than the gap marker '-' and may be
///   empty.
#[derive(Debug, Clone, Ord, PartialOrd, Eq, PartialEq, Hash, Default, Dissolve, Getters, Into)]
pub struct Record {
    id: String,
    seq: Vec<u8>,
}

impl<ID, SEQ> TryFrom<(ID, SEQ)> for Record
where
    ID: TryInto<String, Error: Error + Send + Sync + 'static>,
    SEQ: TryInto<Vec<u8>, Error: Error + Send + Sync + 'static>,
{
    type Error = eyre::Report;

    fn try_from(value: (ID, SEQ)) -> Result<Self> {
        Self::new(value.0.try_into()?, value.1.try_into()?)
    }
}

impl Record {
    pub fn new(id: String, seq: Vec<u8>) -> Result<Self> {
        validate::id(&id)?;
        validate::seq(&seq)?;
        Ok(Self { id, seq })
    }

    /// The header line as it appears in FASTA files, i.e. the ID prefixed with '>'.
    pub fn label(&self) -> String {
        format!(">{}", self.id)
    }

    /// # Safety
    /// The caller must ensure that all fields remain valid after modification.
    pub(crate) unsafe fn raw(&mut self) -> (&mut String, &mut Vec<u8>) {
        (&mut self.id, &mut self.seq)
    }
}
