pub mod add_breaker;
pub mod add_rate_feed;
pub mod initialize;
pub mod query;
pub mod remove_breaker;
pub mod toggle_breaker;

pub use add_breaker::*;
pub use add_rate_feed::*;
pub use initialize::*;
pub use query::*;
pub use remove_breaker::*;
pub use toggle_breaker::*;
