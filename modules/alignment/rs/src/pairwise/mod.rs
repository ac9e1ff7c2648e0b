pub use aligner::{align, Aligner};
pub use dp::Mode;
pub use error::Error;

pub mod alignment;
pub mod dp;
pub mod scoring;
pub mod traceback;

mod aligner;
mod error;
