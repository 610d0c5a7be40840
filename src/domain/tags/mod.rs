//! Tag index

pub mod aggregate;

pub use aggregate::{TagAggregator, TagCount};
