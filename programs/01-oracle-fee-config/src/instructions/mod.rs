pub mod admin;
pub mod initialize;
pub mod query;

pub use admin::*;
pub use initialize::*;
pub use query::*;
