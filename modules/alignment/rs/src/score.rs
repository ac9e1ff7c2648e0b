use std::fmt::Display;

use optalign_core_rs::num::PrimSInt;

/// Alignment scores are signed integers: gap penalties are non-positive and local alignment
/// clamps at zero.
pub trait Score: PrimSInt + Display + Send + Sync {}

impl<T: PrimSInt + Display + Send + Sync> Score for T {}
