//! Background catalog refresh.
//!
//! A single task fetches the feed, replaces the catalog, then sleeps for the
//! configured interval before the next cycle. The interval is measured from
//! the end of a cycle, so a slow fetch pushes the next one back.

mod config;
mod runner;
mod types;

pub use config::RefreshConfig;
pub use runner::Refresher;
pub use types::{RefreshError, RefreshStatus};
