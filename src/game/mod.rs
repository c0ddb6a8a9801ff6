mod board;
pub use board::*;
mod cell;
pub use cell::*;
mod window;
pub use window::*;
pub mod search;
