pub mod entity;
pub mod dtos;

pub use dtos::*;
