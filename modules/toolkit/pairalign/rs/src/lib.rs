pub use engine::PairAlign;
pub use job::{read_manifest, Job, Summary};

mod engine;
mod job;
