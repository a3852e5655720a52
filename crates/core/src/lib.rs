pub mod catalog;
pub mod config;
pub mod feed;
pub mod metrics;
pub mod refresh;
pub mod testing;

pub use catalog::{identify, CatalogError, CatalogStore, Entry, Snapshot};
pub use config::{
    load_config, load_config_from_str, load_config_strict, validate_config, Config, ConfigError,
    FeedConfig, ServerConfig,
};
pub use feed::{parse_bookshelf, FeedClient, FeedError, MagPiClient, BOOK_CATEGORY, MAGPI_CATEGORY};
pub use refresh::{RefreshConfig, RefreshError, RefreshStatus, Refresher};
