mod evaluation;

pub use evaluation::*;
