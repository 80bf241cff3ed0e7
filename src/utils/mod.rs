pub mod cli;
pub mod zobris;

pub use cli::*;
pub use zobris::*;
