//! The fixed listing catalog
//!
//! The catalog is authored directly in code and constructed once, on first
//! access, behind a [`LazyLock`]. It is never mutated, persisted, or
//! reloaded; concurrent readers share the same `'static` slice.

use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

/// One catalog entry: a property, vehicle, or other listed item.
///
/// Listings are display records. `price` mixes currency and an optional
/// unit suffix, and `sqft`/`beds`/`baths` hold pre-formatted text with the
/// literal `"N/A"` marking fields that do not apply (a car has no bedroom
/// count). Every field is always present in the serialized form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Listing {
    pub id: u32,
    pub title: String,
    pub image: String,
    pub price: String,
    pub status: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub location: String,
    pub sqft: String,
    pub beds: String,
    pub baths: String,
    /// Tags consumed by clients for their own grouping, insertion order
    /// as authored.
    pub category: Vec<String>,
}

static CATALOG: LazyLock<Vec<Listing>> = LazyLock::new(build_catalog);

/// The full catalog in authoring order, ids 1 through 9.
pub fn all() -> &'static [Listing] {
    &CATALOG
}

fn build_catalog() -> Vec<Listing> {
    vec![
        Listing {
            id: 1,
            title: "Luxury Villa with Ocean View".to_string(),
            image: "/img/deals/property-1.jpg".to_string(),
            price: "$2,500,000".to_string(),
            status: "For Sell".to_string(),
            kind: "Villa".to_string(),
            location: "123 Ocean Drive, Miami, FL".to_string(),
            sqft: "5000 Sqft".to_string(),
            beds: "5 Bed".to_string(),
            baths: "6 Bath".to_string(),
            category: vec!["featured".to_string(), "tab-2".to_string()],
        },
        Listing {
            id: 2,
            title: "Modern Downtown Apartment".to_string(),
            image: "/img/deals/property-2.jpg".to_string(),
            price: "$3,500/month".to_string(),
            status: "For Rent".to_string(),
            kind: "Apartment".to_string(),
            location: "456 Main Street, New York, NY".to_string(),
            sqft: "1200 Sqft".to_string(),
            beds: "2 Bed".to_string(),
            baths: "2 Bath".to_string(),
            category: vec!["featured".to_string(), "tab-3".to_string()],
        },
        Listing {
            id: 3,
            title: "Spacious Family House".to_string(),
            image: "/img/deals/property-3.jpg".to_string(),
            price: "$750,000".to_string(),
            status: "For Sell".to_string(),
            kind: "House".to_string(),
            location: "789 Suburb Lane, Chicago, IL".to_string(),
            sqft: "2500 Sqft".to_string(),
            beds: "4 Bed".to_string(),
            baths: "3 Bath".to_string(),
            category: vec!["tab-2".to_string()],
        },
        Listing {
            id: 4,
            title: "Cozy Studio for Rent".to_string(),
            image: "/img/deals/property-4.jpg".to_string(),
            price: "$1,800/month".to_string(),
            status: "For Rent".to_string(),
            kind: "Studio".to_string(),
            location: "101 City Center, San Francisco, CA".to_string(),
            sqft: "600 Sqft".to_string(),
            beds: "1 Bed".to_string(),
            baths: "1 Bath".to_string(),
            category: vec!["tab-3".to_string()],
        },
        Listing {
            id: 5,
            title: "Commercial Office Space".to_string(),
            image: "/img/deals/office-1.jpg".to_string(),
            price: "$1,200,000".to_string(),
            status: "For Sell".to_string(),
            kind: "Office".to_string(),
            location: "202 Business Park, Austin, TX".to_string(),
            sqft: "10000 Sqft".to_string(),
            beds: "N/A".to_string(),
            baths: "4 Bath".to_string(),
            category: vec!["featured".to_string(), "tab-2".to_string()],
        },
        Listing {
            id: 6,
            title: "Charming Suburban Home for Rent".to_string(),
            image: "/img/deals/property-5.jpg".to_string(),
            price: "$4,000/month".to_string(),
            status: "For Rent".to_string(),
            kind: "Home".to_string(),
            location: "303 Quiet Street, Seattle, WA".to_string(),
            sqft: "1800 Sqft".to_string(),
            beds: "3 Bed".to_string(),
            baths: "2.5 Bath".to_string(),
            category: vec!["tab-3".to_string()],
        },
        Listing {
            id: 7,
            title: "Sleek Sports Car".to_string(),
            image: "/img/deals/car-1.jpg".to_string(),
            price: "$85,000".to_string(),
            status: "For Sell".to_string(),
            kind: "Automobile".to_string(),
            location: "Prestige Motors, LA".to_string(),
            sqft: "N/A".to_string(),
            beds: "N/A".to_string(),
            baths: "N/A".to_string(),
            category: vec!["featured".to_string(), "tab-2".to_string()],
        },
        Listing {
            id: 8,
            title: "Vintage Collector Watch".to_string(),
            image: "/img/deals/watch-1.jpg".to_string(),
            price: "$22,000".to_string(),
            status: "For Sell".to_string(),
            kind: "Luxury Item".to_string(),
            location: "Timeless Pieces Boutique".to_string(),
            sqft: "N/A".to_string(),
            beds: "N/A".to_string(),
            baths: "N/A".to_string(),
            category: vec!["tab-2".to_string()],
        },
        Listing {
            id: 9,
            title: "High-End Gaming Laptop Rental".to_string(),
            image: "/img/deals/laptop-1.jpg".to_string(),
            price: "$200/week".to_string(),
            status: "For Rent".to_string(),
            kind: "Electronics".to_string(),
            location: "Tech Rentals Co.".to_string(),
            sqft: "N/A".to_string(),
            beds: "N/A".to_string(),
            baths: "N/A".to_string(),
            category: vec!["featured".to_string(), "tab-3".to_string()],
        },
    ]
}
