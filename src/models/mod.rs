pub mod config;
pub mod versions;

pub use config::*;
pub use versions::*;
