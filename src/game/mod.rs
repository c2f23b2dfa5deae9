mod density;
mod entry;
mod game;
mod ordered;
mod outcome;
mod player;
mod profile;
mod strategy;
mod table;

pub use density::*;
pub use entry::*;
pub use game::*;
pub use ordered::*;
pub use outcome::*;
pub use player::*;
pub use profile::*;
pub use strategy::*;
pub use table::*;
