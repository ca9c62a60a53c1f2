pub mod models;
pub mod catalog;
pub mod errors;

pub use models::*;
pub use catalog::*;
pub use errors::*;
