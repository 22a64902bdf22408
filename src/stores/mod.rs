pub mod error;
pub mod favorite;
pub mod latency;
pub mod neighborhood;
pub mod property;
pub mod types;

pub use error::{StoreError, StoreResult};
pub use favorite::FavoriteStore;
pub use latency::Latency;
pub use neighborhood::NeighborhoodStore;
pub use property::PropertyStore;
pub use types::{NewProperty, PropertyPatch, SearchFilters};

/// Id for the next record: highest existing id + 1, or 1 for an empty
/// collection.
pub(crate) fn next_id(ids: impl Iterator<Item = u32>) -> u32 {
    ids.max().map_or(1, |max| max + 1)
}
