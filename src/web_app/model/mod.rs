// web_app/model/mod.rs - Shared data models for client and server
//
// These structs are used throughout the application for type-safe
// communication between frontend and backend.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Catalog entry as rendered in the dashboard table.
///
/// `added_date` is not part of the remote payload; it is assigned once at
/// load time and stays fixed for the rest of the session, so date-range
/// filtering is deterministic between renders.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: i32,
    pub title: String,
    pub category: String,
    pub price: rust_decimal::Decimal,
    pub added_date: NaiveDate,
}

/// Raw product shape returned by the catalog service.
///
/// The remote API sends more fields (description, image, rating); only
/// the ones the dashboard renders are kept, the rest are ignored by serde.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ProductRecord {
    pub id: i32,
    pub title: String,
    pub category: String,
    pub price: f64,
}

impl ProductRecord {
    /// Convert into a dashboard `Product` with its session added-date.
    pub fn into_product(self, added_date: NaiveDate) -> Product {
        Product {
            id: self.id,
            title: self.title,
            category: self.category,
            price: rust_decimal::Decimal::try_from(self.price).unwrap_or_default(),
            added_date,
        }
    }
}

/// Result of the one-time catalog load.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    pub products: Vec<Product>,
    pub categories: Vec<String>,
}

/// Filter inputs as applied by the user.
///
/// A criterion participates in filtering only when it is set; the default
/// value keeps every product.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterCriteria {
    pub search: String,
    pub category: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

impl FilterCriteria {
    /// True when no criterion is active.
    pub fn is_empty(&self) -> bool {
        self.search.is_empty()
            && self.category.is_none()
            && self.start_date.is_none()
            && self.end_date.is_none()
    }
}

/// Tag each record with a synthetic added-date: today minus a uniformly
/// random offset of 0..=29 days.
///
/// Called once per load. The offsets must not be recomputed afterwards or
/// date filtering would see a different catalog on every render.
pub fn assign_added_dates(records: Vec<ProductRecord>, today: NaiveDate) -> Vec<Product> {
    use rand::Rng;

    let mut rng = rand::thread_rng();
    records
        .into_iter()
        .map(|record| {
            let offset: i64 = rng.gen_range(0..30);
            record.into_product(today - chrono::Duration::days(offset))
        })
        .collect()
}
