mod showcase_dto;

pub use showcase_dto::*;
