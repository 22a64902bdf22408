use std::sync::RwLock;
use std::time::Duration;

use crate::models::NeighborhoodStats;
use crate::seed;
use crate::stores::error::{StoreError, StoreResult};
use crate::stores::latency::Latency;

const GET_BY_PROPERTY_DELAY: Duration = Duration::from_millis(300);

/// In-memory collection of neighborhood insight reports.
///
/// Reports exist only for a subset of listings; a missing report is a
/// NotFound error, unlike the favorite store's sentinel lookup.
pub struct NeighborhoodStore {
    records: RwLock<Vec<NeighborhoodStats>>,
    latency: Latency,
}

impl NeighborhoodStore {
    /// Create a store seeded with the bundled fixture reports
    pub fn seeded(latency: Latency) -> Self {
        Self::with_records(seed::neighborhood_stats(), latency)
    }

    /// Create a store over the given reports
    pub fn with_records(records: Vec<NeighborhoodStats>, latency: Latency) -> Self {
        Self {
            records: RwLock::new(records),
            latency,
        }
    }

    /// The area report for a property
    pub async fn get_by_property_id(&self, property_id: u32) -> StoreResult<NeighborhoodStats> {
        self.latency.pause(GET_BY_PROPERTY_DELAY).await;
        let records = self.records.read().unwrap();
        records
            .iter()
            .find(|s| s.property_id == property_id)
            .cloned()
            .ok_or(StoreError::NeighborhoodNotFound(property_id))
    }
}
