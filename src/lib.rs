pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod router;
pub mod session;
pub mod views;

pub use config::Config;
pub use error::ScrawlError;
pub use router::{ScrawlState, scrawl_router};
