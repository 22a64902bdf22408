use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::{Coordinates, Property};

/// Search criteria for property queries
///
/// All criteria are conjunctive. Absent, zero, and empty values impose
/// no constraint.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SearchFilters {
    /// Case-insensitive substring matched against address, city, or state
    pub location: Option<String>,
    /// Minimum price (USD), inclusive
    pub price_min: Option<i64>,
    /// Maximum price (USD), inclusive
    pub price_max: Option<i64>,
    /// Minimum number of bedrooms
    pub bedrooms: Option<u32>,
    /// Minimum number of bathrooms
    pub bathrooms: Option<f32>,
    /// Allowed property types; empty means any
    pub property_types: Vec<String>,
}

/// Input for creating a property listing.
///
/// The store assigns `id`, `listing_date`, and `status` itself, so
/// they are not part of the input.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProperty {
    pub title: String,
    pub price: i64,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub bedrooms: u32,
    pub bathrooms: f32,
    pub square_feet: i32,
    pub property_type: String,
    pub featured: bool,
    pub description: String,
    pub features: Vec<String>,
    pub images: Vec<String>,
    pub coordinates: Coordinates,
}

impl NewProperty {
    pub(crate) fn into_property(self, id: u32, listing_date: NaiveDate) -> Property {
        Property {
            id,
            title: self.title,
            price: self.price,
            address: self.address,
            city: self.city,
            state: self.state,
            zip_code: self.zip_code,
            bedrooms: self.bedrooms,
            bathrooms: self.bathrooms,
            square_feet: self.square_feet,
            property_type: self.property_type,
            featured: self.featured,
            listing_date,
            status: "active".to_string(),
            description: self.description,
            features: self.features,
            images: self.images,
            coordinates: self.coordinates,
        }
    }
}

/// Partial update for a property listing.
///
/// Only present fields are applied. `id` and `listing_date` are
/// immutable and have no counterpart here; unknown keys in a JSON
/// payload (an `id`, for instance) are skipped on deserialization.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PropertyPatch {
    pub title: Option<String>,
    pub price: Option<i64>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip_code: Option<String>,
    pub bedrooms: Option<u32>,
    pub bathrooms: Option<f32>,
    pub square_feet: Option<i32>,
    pub property_type: Option<String>,
    pub featured: Option<bool>,
    pub status: Option<String>,
    pub description: Option<String>,
    pub features: Option<Vec<String>>,
    pub images: Option<Vec<String>>,
    pub coordinates: Option<Coordinates>,
}

impl PropertyPatch {
    pub(crate) fn apply(self, property: &mut Property) {
        if let Some(title) = self.title {
            property.title = title;
        }
        if let Some(price) = self.price {
            property.price = price;
        }
        if let Some(address) = self.address {
            property.address = address;
        }
        if let Some(city) = self.city {
            property.city = city;
        }
        if let Some(state) = self.state {
            property.state = state;
        }
        if let Some(zip_code) = self.zip_code {
            property.zip_code = zip_code;
        }
        if let Some(bedrooms) = self.bedrooms {
            property.bedrooms = bedrooms;
        }
        if let Some(bathrooms) = self.bathrooms {
            property.bathrooms = bathrooms;
        }
        if let Some(square_feet) = self.square_feet {
            property.square_feet = square_feet;
        }
        if let Some(property_type) = self.property_type {
            property.property_type = property_type;
        }
        if let Some(featured) = self.featured {
            property.featured = featured;
        }
        if let Some(status) = self.status {
            property.status = status;
        }
        if let Some(description) = self.description {
            property.description = description;
        }
        if let Some(features) = self.features {
            property.features = features;
        }
        if let Some(images) = self.images {
            property.images = images;
        }
        if let Some(coordinates) = self.coordinates {
            property.coordinates = coordinates;
        }
    }
}
