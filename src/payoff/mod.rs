mod bimatrix;
mod matrix;

pub use bimatrix::*;
pub use matrix::*;
