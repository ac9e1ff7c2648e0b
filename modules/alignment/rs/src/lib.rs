pub use optalign_core_rs::Alignable;
pub use score::Score;

pub mod pairwise;
mod score;
