use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Geographic position of a listing
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

/// Core property listing model
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Property {
    pub id: u32,
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
    pub listing_date: NaiveDate,
    pub status: String,
    pub description: String,
    pub features: Vec<String>,
    pub images: Vec<String>,
    pub coordinates: Coordinates,
}

/// A saved-listing marker pointing at a property
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Favorite {
    pub id: u32,
    pub property_id: u32,
    pub saved_date: NaiveDate,
}

/// Area insight report for a single property
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NeighborhoodStats {
    pub property_id: u32,
    /// Overall school rating, 0-10
    pub school_rating: f32,
    pub elementary_rating: f32,
    pub middle_school_rating: f32,
    pub high_school_rating: f32,
    /// Transit score, 0-100
    pub transit_score: u32,
    pub bus_routes: u32,
    pub nearest_station: String,
    /// Average wait between departures, minutes
    pub avg_wait_time: u32,
    /// Walk score, 0-100
    pub walk_score: u32,
    pub nearby_restaurants: u32,
    pub nearby_grocery: u32,
    pub nearby_parks: u32,
}
