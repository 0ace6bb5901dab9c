pub mod errors;
pub mod factories;
pub mod models;
pub mod ports;

pub use errors::*;
pub use models::*;
pub use ports::*;
