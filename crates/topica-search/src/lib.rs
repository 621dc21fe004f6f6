mod filter;
mod highlight;

pub use filter::{block_matches, filter_blocks};
pub use highlight::{highlight, Segment};
