//! Bookshelf catalog - the in-memory collection served to the front end.
//!
//! The catalog is rebuilt from the feed on every refresh and published as a
//! whole. Readers never see a half-built catalog.

mod identity;
mod snapshot;
mod store;
mod types;

pub use identity::identify;
pub use snapshot::Snapshot;
pub use store::CatalogStore;
pub use types::*;
