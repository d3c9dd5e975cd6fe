mod showcase_service;

pub use showcase_service::*;
