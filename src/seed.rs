use chrono::NaiveDate;

use crate::models::{Coordinates, Favorite, NeighborhoodStats, Property};

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid fixture date")
}

/// Fixture listings the demo property store is seeded with.
/// Seven are featured, one more than the featured rail shows.
pub fn properties() -> Vec<Property> {
    vec![
        Property {
            id: 1,
            title: "Modern Farmhouse Retreat".to_string(),
            price: 725_000,
            address: "412 Bluebonnet Ln".to_string(),
            city: "Austin".to_string(),
            state: "TX".to_string(),
            zip_code: "78704".to_string(),
            bedrooms: 4,
            bathrooms: 3.0,
            square_feet: 2850,
            property_type: "House".to_string(),
            featured: true,
            listing_date: date(2024, 1, 8),
            status: "active".to_string(),
            description: "Board-and-batten farmhouse with a wraparound porch minutes from South Congress.".to_string(),
            features: vec![
                "Wraparound Porch".to_string(),
                "Hardwood Floors".to_string(),
                "Smart Home".to_string(),
            ],
            images: vec![
                "https://picsum.photos/seed/homefinder-1a/800/600".to_string(),
                "https://picsum.photos/seed/homefinder-1b/800/600".to_string(),
            ],
            coordinates: Coordinates { lat: 30.2451, lng: -97.7604 },
        },
        Property {
            id: 2,
            title: "Downtown Skyline Condo".to_string(),
            price: 489_000,
            address: "501 Congress Ave Unit 1204".to_string(),
            city: "Austin".to_string(),
            state: "TX".to_string(),
            zip_code: "78701".to_string(),
            bedrooms: 2,
            bathrooms: 2.0,
            square_feet: 1150,
            property_type: "Condo".to_string(),
            featured: true,
            listing_date: date(2024, 1, 12),
            status: "active".to_string(),
            description: "Twelfth-floor corner unit with floor-to-ceiling windows over Congress Avenue.".to_string(),
            features: vec![
                "Floor-to-Ceiling Windows".to_string(),
                "Concierge".to_string(),
                "Rooftop Pool".to_string(),
            ],
            images: vec![
                "https://picsum.photos/seed/homefinder-2a/800/600".to_string(),
                "https://picsum.photos/seed/homefinder-2b/800/600".to_string(),
            ],
            coordinates: Coordinates { lat: 30.2672, lng: -97.7431 },
        },
        Property {
            id: 3,
            title: "Craftsman Bungalow".to_string(),
            price: 515_000,
            address: "2208 Willow St".to_string(),
            city: "Dallas".to_string(),
            state: "TX".to_string(),
            zip_code: "75214".to_string(),
            bedrooms: 3,
            bathrooms: 2.0,
            square_feet: 1720,
            property_type: "House".to_string(),
            featured: true,
            listing_date: date(2024, 1, 15),
            status: "active".to_string(),
            description: "Restored 1920s craftsman near the Lakewood shopping district.".to_string(),
            features: vec![
                "Original Millwork".to_string(),
                "Fireplace".to_string(),
                "Fenced Yard".to_string(),
            ],
            images: vec![
                "https://picsum.photos/seed/homefinder-3a/800/600".to_string(),
            ],
            coordinates: Coordinates { lat: 32.8153, lng: -96.7479 },
        },
        Property {
            id: 4,
            title: "Lakeside Townhouse".to_string(),
            price: 389_000,
            address: "77 Marina Way".to_string(),
            city: "Austin".to_string(),
            state: "TX".to_string(),
            zip_code: "78730".to_string(),
            bedrooms: 3,
            bathrooms: 2.5,
            square_feet: 1980,
            property_type: "Townhouse".to_string(),
            featured: false,
            listing_date: date(2024, 1, 18),
            status: "active".to_string(),
            description: "End-unit townhouse with a private dock slip on Lake Austin.".to_string(),
            features: vec![
                "Dock Slip".to_string(),
                "Two-Car Garage".to_string(),
            ],
            images: vec![
                "https://picsum.photos/seed/homefinder-4a/800/600".to_string(),
            ],
            coordinates: Coordinates { lat: 30.3520, lng: -97.8120 },
        },
        Property {
            id: 5,
            title: "Renovated Midtown Loft".to_string(),
            price: 342_000,
            address: "914 Peachtree St NE".to_string(),
            city: "Atlanta".to_string(),
            state: "GA".to_string(),
            zip_code: "30309".to_string(),
            bedrooms: 1,
            bathrooms: 1.0,
            square_feet: 890,
            property_type: "Apartment".to_string(),
            featured: true,
            listing_date: date(2024, 1, 22),
            status: "active".to_string(),
            description: "Exposed-brick loft above the Peachtree streetcar line.".to_string(),
            features: vec![
                "Exposed Brick".to_string(),
                "14ft Ceilings".to_string(),
            ],
            images: vec![
                "https://picsum.photos/seed/homefinder-5a/800/600".to_string(),
                "https://picsum.photos/seed/homefinder-5b/800/600".to_string(),
            ],
            coordinates: Coordinates { lat: 33.7813, lng: -84.3839 },
        },
        Property {
            id: 6,
            title: "Suburban Family Home".to_string(),
            price: 610_000,
            address: "1530 Maple Grove Dr".to_string(),
            city: "Plano".to_string(),
            state: "TX".to_string(),
            zip_code: "75023".to_string(),
            bedrooms: 5,
            bathrooms: 3.5,
            square_feet: 3400,
            property_type: "House".to_string(),
            featured: true,
            listing_date: date(2024, 1, 25),
            status: "active".to_string(),
            description: "Five-bedroom home backing onto the Chisholm Trail greenbelt.".to_string(),
            features: vec![
                "Pool".to_string(),
                "Game Room".to_string(),
                "Three-Car Garage".to_string(),
            ],
            images: vec![
                "https://picsum.photos/seed/homefinder-6a/800/600".to_string(),
            ],
            coordinates: Coordinates { lat: 33.0401, lng: -96.7266 },
        },
        Property {
            id: 7,
            title: "Historic District Rowhouse".to_string(),
            price: 829_000,
            address: "118 E Charles St".to_string(),
            city: "Savannah".to_string(),
            state: "GA".to_string(),
            zip_code: "31401".to_string(),
            bedrooms: 4,
            bathrooms: 3.0,
            square_feet: 2600,
            property_type: "Townhouse".to_string(),
            featured: true,
            listing_date: date(2024, 2, 1),
            status: "active".to_string(),
            description: "Gas-lantern rowhouse two blocks off Forsyth Park.".to_string(),
            features: vec![
                "Courtyard".to_string(),
                "Original Heart-Pine Floors".to_string(),
            ],
            images: vec![
                "https://picsum.photos/seed/homefinder-7a/800/600".to_string(),
            ],
            coordinates: Coordinates { lat: 32.0742, lng: -81.0921 },
        },
        Property {
            id: 8,
            title: "Hill Country Ranch".to_string(),
            price: 1_150_000,
            address: "8800 Ranch Rd 2222".to_string(),
            city: "Austin".to_string(),
            state: "TX".to_string(),
            zip_code: "78730".to_string(),
            bedrooms: 4,
            bathrooms: 4.0,
            square_feet: 3900,
            property_type: "House".to_string(),
            featured: true,
            listing_date: date(2024, 2, 5),
            status: "active".to_string(),
            description: "Single-story ranch on two oak-shaded acres with canyon views.".to_string(),
            features: vec![
                "Two Acres".to_string(),
                "Outdoor Kitchen".to_string(),
                "Casita".to_string(),
            ],
            images: vec![
                "https://picsum.photos/seed/homefinder-8a/800/600".to_string(),
                "https://picsum.photos/seed/homefinder-8b/800/600".to_string(),
            ],
            coordinates: Coordinates { lat: 30.4066, lng: -97.8606 },
        },
        Property {
            id: 9,
            title: "Cozy Garden Apartment".to_string(),
            price: 268_000,
            address: "340 Elm Ct".to_string(),
            city: "San Antonio".to_string(),
            state: "TX".to_string(),
            zip_code: "78205".to_string(),
            bedrooms: 2,
            bathrooms: 1.0,
            square_feet: 940,
            property_type: "Apartment".to_string(),
            featured: false,
            listing_date: date(2024, 2, 10),
            status: "active".to_string(),
            description: "Ground-floor unit opening onto a shared walled garden near the River Walk.".to_string(),
            features: vec![
                "Private Patio".to_string(),
                "Updated Kitchen".to_string(),
            ],
            images: vec![
                "https://picsum.photos/seed/homefinder-9a/800/600".to_string(),
            ],
            coordinates: Coordinates { lat: 29.4252, lng: -98.4946 },
        },
        Property {
            id: 10,
            title: "Gulf Coast Cottage".to_string(),
            price: 459_000,
            address: "21 Seabreeze Ave".to_string(),
            city: "Galveston".to_string(),
            state: "TX".to_string(),
            zip_code: "77550".to_string(),
            bedrooms: 3,
            bathrooms: 2.0,
            square_feet: 1540,
            property_type: "House".to_string(),
            featured: false,
            listing_date: date(2024, 2, 14),
            status: "active".to_string(),
            description: "Raised beach cottage a short walk from the seawall.".to_string(),
            features: vec![
                "Covered Deck".to_string(),
                "Hurricane Shutters".to_string(),
            ],
            images: vec![
                "https://picsum.photos/seed/homefinder-10a/800/600".to_string(),
            ],
            coordinates: Coordinates { lat: 29.3013, lng: -94.7977 },
        },
    ]
}

/// Fixture favorites: two of the seeded listings start out saved
pub fn favorites() -> Vec<Favorite> {
    vec![
        Favorite {
            id: 1,
            property_id: 2,
            saved_date: date(2024, 2, 18),
        },
        Favorite {
            id: 2,
            property_id: 6,
            saved_date: date(2024, 3, 2),
        },
    ]
}

/// Fixture neighborhood reports. Only some listings have one; the
/// rest surface a not-found error, as the app expects.
pub fn neighborhood_stats() -> Vec<NeighborhoodStats> {
    vec![
        NeighborhoodStats {
            property_id: 1,
            school_rating: 8.2,
            elementary_rating: 8.6,
            middle_school_rating: 7.9,
            high_school_rating: 8.1,
            transit_score: 58,
            bus_routes: 4,
            nearest_station: "South Congress & Monroe".to_string(),
            avg_wait_time: 12,
            walk_score: 74,
            nearby_restaurants: 38,
            nearby_grocery: 5,
            nearby_parks: 6,
        },
        NeighborhoodStats {
            property_id: 2,
            school_rating: 7.4,
            elementary_rating: 7.0,
            middle_school_rating: 7.2,
            high_school_rating: 7.9,
            transit_score: 89,
            bus_routes: 11,
            nearest_station: "Republic Square".to_string(),
            avg_wait_time: 6,
            walk_score: 95,
            nearby_restaurants: 112,
            nearby_grocery: 8,
            nearby_parks: 4,
        },
        NeighborhoodStats {
            property_id: 6,
            school_rating: 9.1,
            elementary_rating: 9.4,
            middle_school_rating: 8.8,
            high_school_rating: 9.0,
            transit_score: 34,
            bus_routes: 2,
            nearest_station: "Parker Road".to_string(),
            avg_wait_time: 18,
            walk_score: 41,
            nearby_restaurants: 16,
            nearby_grocery: 3,
            nearby_parks: 8,
        },
        NeighborhoodStats {
            property_id: 8,
            school_rating: 8.8,
            elementary_rating: 9.0,
            middle_school_rating: 8.5,
            high_school_rating: 8.9,
            transit_score: 21,
            bus_routes: 1,
            nearest_station: "Four Points Park & Ride".to_string(),
            avg_wait_time: 25,
            walk_score: 18,
            nearby_restaurants: 9,
            nearby_grocery: 2,
            nearby_parks: 5,
        },
    ]
}
