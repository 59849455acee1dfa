//! Resize resolution — applying a signed delta across a splitter's neighbors.

mod apply;
mod neighbors;

pub use apply::{resolve, ResolveOutcome};
