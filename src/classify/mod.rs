mod classification;
mod feedback;
mod verdict;

pub use classification::*;
pub use feedback::*;
pub use verdict::*;
