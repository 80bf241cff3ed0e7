pub mod board;
pub mod history;
pub mod movegen;
pub mod moves;
pub mod notation;
pub mod pieces;
pub mod square;
pub mod tables;

pub use board::*;
pub use history::*;
pub use moves::*;
pub use notation::*;
pub use pieces::*;
pub use square::*;
pub use tables::*;
