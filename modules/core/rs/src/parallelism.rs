use std::cmp::Ordering;
use std::thread::available_parallelism;

use eyre::{Result, WrapErr};

fn _normalize(requested: isize, max: isize) -> usize {
    match requested.cmp(&0) {
        Ordering::Less => (max + requested + 1).max(1) as usize,
        Ordering::Equal => 1,
        Ordering::Greater => requested.min(max) as usize,
    }
}

/// Number of worker threads to use for the requested value:
/// 0 -> 1, positive -> capped by the machine, negative -> all but (|requested| - 1).
pub fn available(requested: isize) -> Result<usize> {
    let max = available_parallelism()
        .wrap_err("Failed to query the available parallelism")?
        .get() as isize;
    Ok(_normalize(requested, max))
}
