mod algorithm;
mod equilibria;
mod failure;
mod lemke;
mod linalg;
mod point;
mod support;
mod tableau;
mod vertex;

pub use algorithm::*;
pub use equilibria::*;
pub use failure::*;
pub use lemke::*;
pub use point::*;
pub use support::*;
pub use vertex::*;
