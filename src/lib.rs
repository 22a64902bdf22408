pub mod models;
pub mod saved;
pub mod seed;
pub mod stores;

// Re-export the public surface
pub use models::{Coordinates, Favorite, NeighborhoodStats, Property};
pub use saved::{FlaggedListing, SavedListing};
pub use stores::{
    FavoriteStore, Latency, NeighborhoodStore, NewProperty, PropertyPatch, PropertyStore,
    SearchFilters, StoreError, StoreResult,
};
