use serde::Serialize;
use tracing::warn;

use crate::models::{Favorite, Property};
use crate::stores::{FavoriteStore, PropertyStore, StoreResult};

/// A listing decorated with its current favorited state
#[derive(Debug, Clone, Serialize)]
pub struct FlaggedListing {
    pub property: Property,
    pub favorited: bool,
}

/// A favorite joined to the listing it points at
#[derive(Debug, Clone, Serialize)]
pub struct SavedListing {
    pub favorite: Favorite,
    pub property: Property,
}

/// Decorate each listing with whether it is currently saved, from one
/// favorites snapshot.
pub async fn flag_favorites(
    favorites: &FavoriteStore,
    listings: Vec<Property>,
) -> Vec<FlaggedListing> {
    let saved = favorites.get_all().await;
    listings
        .into_iter()
        .map(|property| {
            let favorited = saved.iter().any(|f| f.property_id == property.id);
            FlaggedListing { property, favorited }
        })
        .collect()
}

/// Flip a property's favorite state and return the new one
/// (true means the property is now saved).
pub async fn toggle(favorites: &FavoriteStore, property_id: u32) -> StoreResult<bool> {
    match favorites.get_by_property_id(property_id).await {
        Some(_) => {
            favorites.delete_by_property_id(property_id).await?;
            Ok(false)
        }
        None => {
            favorites.create(property_id).await;
            Ok(true)
        }
    }
}

/// Resolve every favorite to its full listing. A favorite whose
/// property has been deleted is skipped, not an error.
pub async fn saved_listings(
    properties: &PropertyStore,
    favorites: &FavoriteStore,
) -> Vec<SavedListing> {
    let mut listings = Vec::new();
    for favorite in favorites.get_all().await {
        match properties.get_by_id(favorite.property_id).await {
            Ok(property) => listings.push(SavedListing { favorite, property }),
            Err(err) => warn!("Skipping favorite {}: {}", favorite.id, err),
        }
    }
    listings
}

/// Remove every favorite, one delete per record. Returns how many
/// were removed.
pub async fn clear_all(favorites: &FavoriteStore) -> StoreResult<usize> {
    let all = favorites.get_all().await;
    for favorite in &all {
        favorites.delete(favorite.id).await?;
    }
    Ok(all.len())
}
