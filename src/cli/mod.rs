pub mod args;
pub mod display;
pub mod interface;

pub use args::{Args, Operation};
pub use display::write_result;
pub use interface::CLI;
