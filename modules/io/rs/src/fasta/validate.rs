use eyre::{ensure, Result};

use optalign_alignment_rs::pairwise::alignment::GAP;

pub fn id(id: &str) -> Result<()> {
    ensure!(
        !id.contains(&['\n', '\r'] as &[char]),
        "Newline characters are not allowed in the FASTA ID: {id:?}"
    );
    Ok(())
}

/// Sequences are printable ASCII without whitespace. The gap marker is reserved for alignments.
pub fn seq(seq: &[u8]) -> Result<()> {
    for (i, &x) in seq.iter().enumerate() {
        ensure!(
            x.is_ascii_graphic() && x != GAP,
            "Invalid sequence symbol at index {i}: {:?}",
            x as char
        );
    }
    Ok(())
}
