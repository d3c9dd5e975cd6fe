mod showcase_handler;

pub use showcase_handler::*;
