mod args;
mod runner;

pub use args::*;
pub use runner::*;
