use std::sync::RwLock;
use std::time::Duration;

use chrono::Utc;
use tracing::debug;

use crate::models::Property;
use crate::seed;
use crate::stores::error::{StoreError, StoreResult};
use crate::stores::latency::Latency;
use crate::stores::next_id;
use crate::stores::types::{NewProperty, PropertyPatch, SearchFilters};

/// Maximum number of listings returned by `get_featured`
pub const FEATURED_LIMIT: usize = 6;

// Base response delays, per operation
const GET_ALL_DELAY: Duration = Duration::from_millis(300);
const GET_BY_ID_DELAY: Duration = Duration::from_millis(200);
const GET_FEATURED_DELAY: Duration = Duration::from_millis(250);
const SEARCH_DELAY: Duration = Duration::from_millis(400);
const CREATE_DELAY: Duration = Duration::from_millis(500);
const UPDATE_DELAY: Duration = Duration::from_millis(400);
const DELETE_DELAY: Duration = Duration::from_millis(300);

/// In-memory collection of property listings, standing in for a
/// remote listings API.
///
/// Queries hand out independent copies; stored records change only
/// through `create`, `update`, and `delete`. No lock is held across
/// an await point.
pub struct PropertyStore {
    records: RwLock<Vec<Property>>,
    latency: Latency,
}

impl PropertyStore {
    /// Create a store seeded with the bundled fixture listings
    pub fn seeded(latency: Latency) -> Self {
        Self::with_records(seed::properties(), latency)
    }

    /// Create a store over the given listings
    pub fn with_records(records: Vec<Property>, latency: Latency) -> Self {
        Self {
            records: RwLock::new(records),
            latency,
        }
    }

    /// Snapshot of every listing, insertion order
    pub async fn get_all(&self) -> Vec<Property> {
        self.latency.pause(GET_ALL_DELAY).await;
        self.records.read().unwrap().clone()
    }

    /// Look up a single listing by id
    pub async fn get_by_id(&self, id: u32) -> StoreResult<Property> {
        self.latency.pause(GET_BY_ID_DELAY).await;
        let records = self.records.read().unwrap();
        records
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or(StoreError::PropertyNotFound(id))
    }

    /// The first `FEATURED_LIMIT` listings flagged as featured, in
    /// collection order. Fewer qualify, fewer returned.
    pub async fn get_featured(&self) -> Vec<Property> {
        self.latency.pause(GET_FEATURED_DELAY).await;
        let records = self.records.read().unwrap();
        records
            .iter()
            .filter(|p| p.featured)
            .take(FEATURED_LIMIT)
            .cloned()
            .collect()
    }

    /// Filter listings by the given criteria, preserving collection
    /// order. Criteria left at zero or empty are not applied.
    pub async fn search(&self, filters: &SearchFilters) -> Vec<Property> {
        self.latency.pause(SEARCH_DELAY).await;
        let records = self.records.read().unwrap();
        let results: Vec<Property> = records
            .iter()
            .filter(|p| matches(filters, p))
            .cloned()
            .collect();
        debug!("Search matched {} of {} listings", results.len(), records.len());
        results
    }

    /// Add a new listing. The store assigns the next id, stamps the
    /// listing date, and sets the status to "active".
    pub async fn create(&self, data: NewProperty) -> Property {
        self.latency.pause(CREATE_DELAY).await;
        let mut records = self.records.write().unwrap();
        // Id scan and append stay under one write guard so concurrent
        // creates cannot mint the same id.
        let id = next_id(records.iter().map(|p| p.id));
        let property = data.into_property(id, Utc::now().date_naive());
        records.push(property.clone());
        debug!("Created listing {}", id);
        property
    }

    /// Merge a patch onto an existing listing and return the result.
    /// The id and listing date stay as they are.
    pub async fn update(&self, id: u32, patch: PropertyPatch) -> StoreResult<Property> {
        self.latency.pause(UPDATE_DELAY).await;
        let mut records = self.records.write().unwrap();
        let property = records
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(StoreError::PropertyNotFound(id))?;
        patch.apply(property);
        debug!("Updated listing {}", id);
        Ok(property.clone())
    }

    /// Remove a listing by id
    pub async fn delete(&self, id: u32) -> StoreResult<()> {
        self.latency.pause(DELETE_DELAY).await;
        let mut records = self.records.write().unwrap();
        let index = records
            .iter()
            .position(|p| p.id == id)
            .ok_or(StoreError::PropertyNotFound(id))?;
        records.remove(index);
        debug!("Deleted listing {}", id);
        Ok(())
    }
}

/// One conjunctive pass over the search criteria: location substring,
/// price band, bedroom and bathroom minimums, then type membership.
fn matches(filters: &SearchFilters, property: &Property) -> bool {
    if let Some(location) = filters.location.as_deref().filter(|l| !l.is_empty()) {
        let needle = location.to_lowercase();
        let hit = property.address.to_lowercase().contains(&needle)
            || property.city.to_lowercase().contains(&needle)
            || property.state.to_lowercase().contains(&needle);
        if !hit {
            return false;
        }
    }
    if let Some(min) = filters.price_min.filter(|&min| min > 0) {
        if property.price < min {
            return false;
        }
    }
    if let Some(max) = filters.price_max.filter(|&max| max > 0) {
        if property.price > max {
            return false;
        }
    }
    if let Some(bedrooms) = filters.bedrooms.filter(|&n| n > 0) {
        if property.bedrooms < bedrooms {
            return false;
        }
    }
    if let Some(bathrooms) = filters.bathrooms.filter(|&n| n > 0.0) {
        if property.bathrooms < bathrooms {
            return false;
        }
    }
    if !filters.property_types.is_empty()
        && !filters.property_types.contains(&property.property_type)
    {
        return false;
    }
    true
}
