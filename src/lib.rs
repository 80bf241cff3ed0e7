pub mod controller;
pub mod game;
pub mod utils;

pub use crate::controller::*;
pub use crate::game::*;
pub use crate::utils::*;
