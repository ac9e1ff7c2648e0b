pub use alignments::Alignments;
pub use op::Op;
pub use pair::AlignedPair;
pub use step::Step;

mod alignments;
mod op;
mod pair;
mod step;

/// Gap marker used in aligned rows.
pub const GAP: u8 = b'-';
