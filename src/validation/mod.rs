mod error;
mod report;
mod validator;

pub use error::*;
pub use report::*;
pub use validator::*;
