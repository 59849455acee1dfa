//! The SplitLayout coordinates the child registry, the resize resolver,
//! the drag session, and the state surface exposed to host code.

mod interaction;
mod lifecycle;
mod state;
mod types;

pub use types::*;
