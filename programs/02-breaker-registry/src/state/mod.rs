pub mod bucket;
pub mod rate_feed;
pub mod registry;

pub use bucket::*;
pub use rate_feed::*;
pub use registry::*;
