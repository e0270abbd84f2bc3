pub mod user;
pub mod product;

pub use user::*;
pub use product::*;
