use std::sync::RwLock;
use std::time::Duration;

use chrono::Utc;
use tracing::debug;

use crate::models::Favorite;
use crate::seed;
use crate::stores::error::{StoreError, StoreResult};
use crate::stores::latency::Latency;
use crate::stores::next_id;

// Base response delays, per operation
const GET_ALL_DELAY: Duration = Duration::from_millis(200);
const GET_BY_ID_DELAY: Duration = Duration::from_millis(150);
const GET_BY_PROPERTY_DELAY: Duration = Duration::from_millis(150);
const CREATE_DELAY: Duration = Duration::from_millis(300);
const DELETE_DELAY: Duration = Duration::from_millis(250);
const DELETE_BY_PROPERTY_DELAY: Duration = Duration::from_millis(250);

/// In-memory collection of saved-listing markers.
///
/// Holds at most one favorite per property id; `create` is a no-op
/// when the property is already saved. Whether the referenced
/// property still exists is not this store's concern.
pub struct FavoriteStore {
    records: RwLock<Vec<Favorite>>,
    latency: Latency,
}

impl FavoriteStore {
    /// Create a store seeded with the bundled fixture favorites
    pub fn seeded(latency: Latency) -> Self {
        Self::with_records(seed::favorites(), latency)
    }

    /// Create a store over the given favorites
    pub fn with_records(records: Vec<Favorite>, latency: Latency) -> Self {
        Self {
            records: RwLock::new(records),
            latency,
        }
    }

    /// Snapshot of every favorite, insertion order
    pub async fn get_all(&self) -> Vec<Favorite> {
        self.latency.pause(GET_ALL_DELAY).await;
        self.records.read().unwrap().clone()
    }

    /// Look up a favorite by its own id
    pub async fn get_by_id(&self, id: u32) -> StoreResult<Favorite> {
        self.latency.pause(GET_BY_ID_DELAY).await;
        let records = self.records.read().unwrap();
        records
            .iter()
            .find(|f| f.id == id)
            .copied()
            .ok_or(StoreError::FavoriteNotFound(id))
    }

    /// Non-failing existence check: the favorite saved for a property,
    /// or `None`. Callers branch on this instead of catching an error.
    pub async fn get_by_property_id(&self, property_id: u32) -> Option<Favorite> {
        self.latency.pause(GET_BY_PROPERTY_DELAY).await;
        let records = self.records.read().unwrap();
        records.iter().find(|f| f.property_id == property_id).copied()
    }

    /// Save a property to the favorites list. Returns the existing
    /// record unchanged when the property is already saved.
    pub async fn create(&self, property_id: u32) -> Favorite {
        self.latency.pause(CREATE_DELAY).await;
        let mut records = self.records.write().unwrap();
        if let Some(existing) = records.iter().find(|f| f.property_id == property_id) {
            debug!("Property {} already saved as favorite {}", property_id, existing.id);
            return *existing;
        }
        let favorite = Favorite {
            id: next_id(records.iter().map(|f| f.id)),
            property_id,
            saved_date: Utc::now().date_naive(),
        };
        records.push(favorite);
        debug!("Saved property {} as favorite {}", property_id, favorite.id);
        favorite
    }

    /// Remove a favorite by its own id
    pub async fn delete(&self, id: u32) -> StoreResult<()> {
        self.latency.pause(DELETE_DELAY).await;
        let mut records = self.records.write().unwrap();
        let index = records
            .iter()
            .position(|f| f.id == id)
            .ok_or(StoreError::FavoriteNotFound(id))?;
        records.remove(index);
        Ok(())
    }

    /// Remove the favorite saved for a property
    pub async fn delete_by_property_id(&self, property_id: u32) -> StoreResult<()> {
        self.latency.pause(DELETE_BY_PROPERTY_DELAY).await;
        let mut records = self.records.write().unwrap();
        let index = records
            .iter()
            .position(|f| f.property_id == property_id)
            .ok_or(StoreError::NoFavoriteForProperty(property_id))?;
        records.remove(index);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn favorite(id: u32, property_id: u32) -> Favorite {
        Favorite {
            id,
            property_id,
            saved_date: NaiveDate::from_ymd_opt(2024, 2, 1).unwrap(),
        }
    }

    fn store(records: Vec<Favorite>) -> FavoriteStore {
        FavoriteStore::with_records(records, Latency::None)
    }

    #[tokio::test]
    async fn create_is_idempotent_per_property() {
        let store = store(vec![]);

        let first = store.create(12).await;
        let second = store.create(12).await;

        assert_eq!(first, second);
        let all = store.get_all().await;
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].property_id, 12);
    }

    #[tokio::test]
    async fn create_on_empty_store_starts_at_one() {
        let store = store(vec![]);
        assert_eq!(store.create(5).await.id, 1);
    }

    #[tokio::test]
    async fn create_stamps_saved_date() {
        let store = store(vec![favorite(1, 3)]);
        let saved = store.create(9).await;
        assert_eq!(saved.id, 2);
        assert_eq!(saved.saved_date, Utc::now().date_naive());
    }

    #[tokio::test]
    async fn lookup_by_property_is_a_sentinel_not_an_error() {
        let store = store(vec![favorite(1, 3)]);

        assert_eq!(store.get_by_property_id(3).await, Some(favorite(1, 3)));
        assert_eq!(store.get_by_property_id(8).await, None);
        // The id lookup still errors
        assert_eq!(
            store.get_by_id(8).await,
            Err(StoreError::FavoriteNotFound(8))
        );
    }

    #[tokio::test]
    async fn delete_by_property_clears_the_sentinel() {
        let store = store(vec![]);
        store.create(4).await;

        store.delete_by_property_id(4).await.unwrap();
        assert_eq!(store.get_by_property_id(4).await, None);
        assert_eq!(
            store.delete_by_property_id(4).await,
            Err(StoreError::NoFavoriteForProperty(4))
        );
    }

    #[tokio::test]
    async fn delete_missing_leaves_collection_untouched() {
        let store = store(vec![favorite(1, 3)]);
        assert_eq!(store.delete(2).await, Err(StoreError::FavoriteNotFound(2)));
        assert_eq!(store.get_all().await.len(), 1);
    }

    #[tokio::test]
    async fn ids_are_not_reused_after_delete() {
        let store = store(vec![favorite(1, 3), favorite(2, 5)]);
        store.delete(1).await.unwrap();
        assert_eq!(store.create(7).await.id, 3);
    }
}
