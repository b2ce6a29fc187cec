pub mod complexity;
pub mod config;

pub use complexity::*;
pub use config::*;
