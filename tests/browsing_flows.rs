use chrono::NaiveDate;
use homefinder::{
    saved, Coordinates, FavoriteStore, Latency, NeighborhoodStore, NewProperty, Property,
    PropertyPatch, PropertyStore, SearchFilters, StoreError,
};

fn listing(id: u32, price: i64, city: &str, property_type: &str) -> Property {
    Property {
        id,
        title: format!("Listing {}", id),
        price,
        address: format!("{} Main St", 100 + id),
        city: city.to_string(),
        state: "TX".to_string(),
        zip_code: "78701".to_string(),
        bedrooms: 3,
        bathrooms: 2.0,
        square_feet: 1800,
        property_type: property_type.to_string(),
        featured: false,
        listing_date: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
        status: "active".to_string(),
        description: String::new(),
        features: vec![],
        images: vec![],
        coordinates: Coordinates { lat: 30.2672, lng: -97.7431 },
    }
}

fn seeded_stores() -> (PropertyStore, FavoriteStore, NeighborhoodStore) {
    (
        PropertyStore::seeded(Latency::None),
        FavoriteStore::seeded(Latency::None),
        NeighborhoodStore::seeded(Latency::None),
    )
}

#[tokio::test]
async fn home_page_featured_rail() {
    let (properties, _, _) = seeded_stores();

    let featured = properties.get_featured().await;
    assert_eq!(featured.len(), 6);
    assert!(featured.iter().all(|p| p.featured));

    // Seven seeded listings are featured; the rail shows the first six
    let all_featured: Vec<u32> = properties
        .get_all()
        .await
        .iter()
        .filter(|p| p.featured)
        .map(|p| p.id)
        .collect();
    assert!(all_featured.len() > 6);
    let rail_ids: Vec<u32> = featured.iter().map(|p| p.id).collect();
    assert_eq!(rail_ids, all_featured[..6]);
}

#[tokio::test]
async fn every_seeded_listing_is_retrievable_by_id() {
    let (properties, _, _) = seeded_stores();

    for property in properties.get_all().await {
        let looked_up = properties.get_by_id(property.id).await.unwrap();
        assert_eq!(looked_up, property);
    }
}

#[tokio::test]
async fn austin_budget_search_returns_only_the_house() {
    let store = PropertyStore::with_records(
        vec![
            listing(1, 300_000, "Austin", "House"),
            listing(2, 800_000, "Austin", "Condo"),
        ],
        Latency::None,
    );

    let filters = SearchFilters {
        location: Some("austin".to_string()),
        price_max: Some(500_000),
        ..Default::default()
    };
    let results = store.search(&filters).await;

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].id, 1);
    assert_eq!(results[0].price, 300_000);
}

#[tokio::test]
async fn empty_criteria_list_the_full_inventory() {
    let (properties, _, _) = seeded_stores();

    let results = properties.search(&SearchFilters::default()).await;
    assert_eq!(results, properties.get_all().await);
}

#[tokio::test]
async fn price_slider_bounds_are_inclusive() {
    let (properties, _, _) = seeded_stores();

    // The 342k loft and the 515k bungalow sit exactly on the bounds
    let band = SearchFilters {
        price_min: Some(342_000),
        price_max: Some(515_000),
        ..Default::default()
    };
    let ids: Vec<u32> = properties.search(&band).await.iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![2, 3, 4, 5, 10]);

    // A slider dragged past itself matches nothing
    let inverted = SearchFilters {
        price_min: Some(600_000),
        price_max: Some(400_000),
        ..Default::default()
    };
    assert!(properties.search(&inverted).await.is_empty());
}

#[tokio::test]
async fn type_checkboxes_restrict_only_when_checked() {
    let (properties, _, _) = seeded_stores();

    let unchecked = SearchFilters {
        property_types: vec![],
        ..Default::default()
    };
    assert_eq!(
        properties.search(&unchecked).await.len(),
        properties.get_all().await.len()
    );

    let condos_only = SearchFilters {
        property_types: vec!["Condo".to_string()],
        ..Default::default()
    };
    let results = properties.search(&condos_only).await;
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].id, 2);
    assert_eq!(results[0].property_type, "Condo");
}

#[tokio::test]
async fn filter_panel_payload_drives_a_search() {
    let (properties, _, _) = seeded_stores();

    // The browse page sends its filter state as camelCase JSON
    let filters: SearchFilters = serde_json::from_value(serde_json::json!({
        "location": "austin",
        "priceMax": 500_000,
        "propertyTypes": [],
    }))
    .unwrap();

    let results = properties.search(&filters).await;
    assert!(!results.is_empty());
    for property in &results {
        assert!(property.city.to_lowercase().contains("austin"));
        assert!(property.price <= 500_000);
    }
}

#[tokio::test]
async fn browse_page_flags_saved_listings() {
    let (properties, favorites, _) = seeded_stores();

    let results = properties
        .search(&SearchFilters {
            location: Some("austin".to_string()),
            ..Default::default()
        })
        .await;
    let flagged = saved::flag_favorites(&favorites, results).await;

    // Seed favorites cover properties 2 and 6; only 2 is in Austin
    assert!(flagged.iter().any(|l| l.property.id == 2 && l.favorited));
    assert!(flagged
        .iter()
        .all(|l| l.property.id == 2 || !l.favorited));
}

#[tokio::test]
async fn detail_page_loads_listing_and_area_report() {
    let (properties, _, neighborhoods) = seeded_stores();

    let property = properties.get_by_id(2).await.unwrap();
    assert_eq!(property.title, "Downtown Skyline Condo");

    let stats = neighborhoods.get_by_property_id(2).await.unwrap();
    assert_eq!(stats.property_id, 2);
    assert!(stats.walk_score <= 100);

    // Not every listing has a report
    assert_eq!(
        neighborhoods.get_by_property_id(4).await,
        Err(StoreError::NeighborhoodNotFound(4))
    );
}

#[tokio::test]
async fn favorite_lifecycle_from_a_listing_card() {
    let favorites = FavoriteStore::with_records(vec![], Latency::None);

    assert!(saved::toggle(&favorites, 9).await.unwrap());
    let saved_record = favorites.get_by_property_id(9).await.unwrap();

    // Saving again changes nothing
    let again = favorites.create(9).await;
    assert_eq!(again, saved_record);
    assert_eq!(favorites.get_all().await.len(), 1);

    assert!(!saved::toggle(&favorites, 9).await.unwrap());
    assert_eq!(favorites.get_by_property_id(9).await, None);
    assert!(favorites.get_all().await.is_empty());
}

#[tokio::test]
async fn favorites_page_survives_a_delisted_property() {
    let (properties, favorites, _) = seeded_stores();
    favorites.create(4).await;
    properties.delete(4).await.unwrap();

    let listings = saved::saved_listings(&properties, &favorites).await;
    let shown: Vec<u32> = listings.iter().map(|l| l.property.id).collect();
    assert_eq!(shown, vec![2, 6]);

    let cleared = saved::clear_all(&favorites).await.unwrap();
    assert_eq!(cleared, 3);
    assert!(favorites.get_all().await.is_empty());
}

#[tokio::test]
async fn manage_listing_lifecycle() {
    let (properties, _, _) = seeded_stores();
    let before = properties.get_all().await.len();

    let created = properties
        .create(NewProperty {
            title: "East Side Duplex".to_string(),
            price: 540_000,
            address: "1108 Walnut Ave".to_string(),
            city: "Austin".to_string(),
            state: "TX".to_string(),
            zip_code: "78702".to_string(),
            bedrooms: 4,
            bathrooms: 2.0,
            square_feet: 2300,
            property_type: "House".to_string(),
            featured: false,
            description: "Updated duplex with separate entrances.".to_string(),
            features: vec!["Dual Living".to_string()],
            images: vec![],
            coordinates: Coordinates { lat: 30.2711, lng: -97.7171 },
        })
        .await;
    assert_eq!(created.id, before as u32 + 1);
    assert_eq!(created.status, "active");

    // An edit form payload may still carry the id; it must not move the record
    let patch: PropertyPatch =
        serde_json::from_value(serde_json::json!({ "id": 9999, "price": 525_000 })).unwrap();
    let updated = properties.update(created.id, patch).await.unwrap();
    assert_eq!(updated.id, created.id);
    assert_eq!(updated.price, 525_000);

    properties.delete(created.id).await.unwrap();
    assert_eq!(
        properties.get_by_id(created.id).await,
        Err(StoreError::PropertyNotFound(created.id))
    );
    assert_eq!(properties.get_all().await.len(), before);
}

#[tokio::test]
async fn failed_deletes_change_nothing() {
    let (properties, favorites, _) = seeded_stores();
    let listings_before = properties.get_all().await.len();
    let favorites_before = favorites.get_all().await.len();

    assert!(properties.delete(999).await.is_err());
    assert!(favorites.delete(999).await.is_err());

    assert_eq!(properties.get_all().await.len(), listings_before);
    assert_eq!(favorites.get_all().await.len(), favorites_before);
}
