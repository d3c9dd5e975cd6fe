mod lead_handler;

pub use lead_handler::*;
