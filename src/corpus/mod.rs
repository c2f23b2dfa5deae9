//! Categories of items, each carrying the history of its game's passes.
mod disk;
mod item;
mod pass;
mod stages;
mod stats;
mod validated;

pub use disk::*;
pub use item::*;
pub use pass::*;
pub use stages::*;
pub use stats::*;
pub use validated::*;
