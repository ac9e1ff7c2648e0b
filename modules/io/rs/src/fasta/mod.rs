mod reader;
mod record;
pub mod validate;

pub use reader::{read_pair, Reader};
pub use record::Record;
