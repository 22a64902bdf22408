use homefinder::{
    saved, Coordinates, FavoriteStore, Latency, NeighborhoodStore, NewProperty, PropertyPatch,
    PropertyStore, SearchFilters,
};
use tracing::{info, warn, Level};
use tracing_subscriber;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .init();

    info!("🏠 HomeFinder Pro - Property Data Services");
    info!("==========================================");
    info!("");

    // Seeded stores with the simulated API latency the app runs with
    let properties = PropertyStore::seeded(Latency::Simulated);
    let favorites = FavoriteStore::seeded(Latency::Simulated);
    let neighborhoods = NeighborhoodStore::seeded(Latency::Simulated);

    // Home page: the featured rail
    info!("Loading featured listings...");
    let featured = properties.get_featured().await;
    info!("✅ {} featured listings", featured.len());

    for (i, property) in featured.iter().enumerate() {
        println!("{}. {} (${})", i + 1, property.title, property.price);
        println!("   {}, {}, {}", property.address, property.city, property.state);
        println!();
    }

    // Browse page: filtered search, flagged with favorite state
    let filters = SearchFilters {
        location: Some("austin".to_string()),
        price_max: Some(500_000),
        ..Default::default()
    };
    info!("Searching listings in Austin under $500k...");
    let results = properties.search(&filters).await;
    info!("✅ {} matching listings", results.len());

    let flagged = saved::flag_favorites(&favorites, results).await;
    for listing in &flagged {
        let marker = if listing.favorited { "♥" } else { " " };
        println!(
            " {} {} - {} ({} bd / {} ba)",
            marker,
            listing.property.title,
            listing.property.city,
            listing.property.bedrooms,
            listing.property.bathrooms
        );
    }
    println!();

    // Detail page: full listing, the current favorite state, and the
    // area report, if there is one
    if let Some(first) = flagged.first() {
        let id = first.property.id;
        let detail = properties.get_by_id(id).await?;
        info!("Viewing {} ({})", detail.title, detail.address);

        let favorited = favorites.get_by_property_id(id).await.is_some();
        info!("Saved to favorites: {}", favorited);

        match neighborhoods.get_by_property_id(id).await {
            Ok(stats) => info!(
                "Area report: schools {}/10, transit {}/100, walk {}/100",
                stats.school_rating, stats.transit_score, stats.walk_score
            ),
            Err(err) => warn!("No area report: {}", err),
        }
    }

    // Toggling a favorite from a listing card
    let toggled_id = 4;
    let now_saved = saved::toggle(&favorites, toggled_id).await?;
    info!("Toggled listing {}: saved = {}", toggled_id, now_saved);

    // Favorites page: every favorite joined to its listing
    let saved_now = saved::saved_listings(&properties, &favorites).await;
    info!("💾 {} saved listings", saved_now.len());
    for listing in &saved_now {
        println!(
            "   {} (saved {})",
            listing.property.title, listing.favorite.saved_date
        );
    }
    println!();

    // Snapshot of the saved listings, as the app's export would send it
    let json = serde_json::to_string_pretty(&saved_now)?;
    println!("{}", json);

    // Managing a listing: create, adjust the price, then withdraw it
    let draft = NewProperty {
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
        description: "Updated duplex with separate entrances and a shared yard.".to_string(),
        features: vec!["Dual Living".to_string(), "New Roof".to_string()],
        images: vec![],
        coordinates: Coordinates { lat: 30.2711, lng: -97.7171 },
    };
    let created = properties.create(draft).await;
    info!("Listed {} as #{}", created.title, created.id);

    let reduced = properties
        .update(
            created.id,
            PropertyPatch {
                price: Some(525_000),
                ..Default::default()
            },
        )
        .await?;
    info!("Price adjusted to ${}", reduced.price);

    properties.delete(created.id).await?;
    info!("Listing #{} withdrawn", created.id);
    info!("");

    // Clear All from the favorites page
    let cleared = saved::clear_all(&favorites).await?;
    info!("✅ Cleared {} saved listings", cleared);

    Ok(())
}
