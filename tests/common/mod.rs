// common/mod.rs - Shared fixtures for the integration test suites
//
// A fixed 20-product catalog shaped like the remote service's data:
// 8 electronics, 4 per clothing category, 4 jewelery, and exactly three
// titles containing "shirt". Added dates are pinned so the date-range
// tests never depend on the real clock.

use catalog_dashboard::web_app::model::{Catalog, Product};
use chrono::NaiveDate;
use rust_decimal::Decimal;

/// Fixture calendar date.
pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid fixture date")
}

/// Single fixture product; price given in cents.
pub fn product(id: i32, title: &str, category: &str, cents: i64, added: NaiveDate) -> Product {
    Product {
        id,
        title: title.to_string(),
        category: category.to_string(),
        price: Decimal::new(cents, 2),
        added_date: added,
    }
}

/// The full 20-product fixture catalog.
pub fn sample_catalog() -> Catalog {
    let products = vec![
        product(1, "WD 2TB Elements Portable External Hard Drive", "electronics", 6400, date(2026, 7, 2)),
        product(2, "SanDisk SSD PLUS 1TB Internal SSD", "electronics", 10900, date(2026, 7, 4)),
        product(3, "Silicon Power 256GB SSD 3D NAND", "electronics", 10900, date(2026, 7, 6)),
        product(4, "WD 4TB Gaming Drive Works with Playstation 4", "electronics", 11400, date(2026, 7, 8)),
        product(5, "Acer SB220Q 21.5 inch Full HD IPS Monitor", "electronics", 59900, date(2026, 7, 10)),
        product(6, "Samsung 49-Inch CHG90 Curved Gaming Monitor", "electronics", 99999, date(2026, 7, 12)),
        product(7, "Logitech Wireless Keyboard and Mouse Combo", "electronics", 3999, date(2026, 7, 14)),
        product(8, "JBL Quantum 100 Wired Over-Ear Gaming Headset", "electronics", 2999, date(2026, 7, 16)),
        product(9, "Fjallraven Foldsack No. 1 Backpack", "men's clothing", 10995, date(2026, 7, 3)),
        product(10, "Mens Casual Premium Slim Fit T-Shirts", "men's clothing", 2230, date(2026, 7, 7)),
        product(11, "Mens Cotton Jacket", "men's clothing", 5599, date(2026, 7, 11)),
        product(12, "Mens Casual Slim Fit", "men's clothing", 1599, date(2026, 7, 15)),
        product(13, "BIYLACLESEN Women's 3-in-1 Snowboard Jacket", "women's clothing", 5699, date(2026, 7, 5)),
        product(14, "Lock and Love Women's Removable Hooded Jacket", "women's clothing", 2999, date(2026, 7, 9)),
        product(15, "Opna Women's Short Sleeve Moisture Wicking Shirt", "women's clothing", 795, date(2026, 7, 13)),
        product(16, "DANVOUY Womens T Shirt Casual Cotton Short", "women's clothing", 1299, date(2026, 7, 17)),
        product(17, "John Hardy Legends Naga Bracelet", "jewelery", 69500, date(2026, 7, 1)),
        product(18, "Solid Gold Petite Micropave Ring", "jewelery", 16800, date(2026, 7, 18)),
        product(19, "White Gold Plated Princess Ring", "jewelery", 999, date(2026, 7, 19)),
        product(20, "Pierced Owl Rose Gold Plated Earrings", "jewelery", 1099, date(2026, 7, 20)),
    ];

    let categories = vec![
        "electronics".to_string(),
        "jewelery".to_string(),
        "men's clothing".to_string(),
        "women's clothing".to_string(),
    ];

    Catalog {
        products,
        categories,
    }
}
