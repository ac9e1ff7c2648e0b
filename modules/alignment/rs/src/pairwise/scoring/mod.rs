pub use gaps::Linear;
pub use symbols::{Equality, Matrix};

pub use crate::Score;

pub mod gaps;
pub mod symbols;
