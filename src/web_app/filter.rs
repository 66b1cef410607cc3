// web_app/filter.rs - Product filtering
//
// Pure functions over the loaded product list. Filtering is always
// computed from the full list, never from a previous filtered result, so
// the outcome depends only on the criteria currently applied.

use crate::web_app::model::{FilterCriteria, Product};

/// Apply `criteria` to the full product list.
///
/// Predicates are conjunctive, applied in sequence, and each participates
/// only when its criterion is set:
/// - case-insensitive substring match of the search text against the title
/// - exact equality against the product category
/// - added-date strictly after the start date
/// - added-date strictly before the end date
///
/// The relative order of the input is preserved.
pub fn apply_filters(products: &[Product], criteria: &FilterCriteria) -> Vec<Product> {
    let mut filtered: Vec<Product> = products.to_vec();

    if !criteria.search.is_empty() {
        let needle = criteria.search.to_lowercase();
        filtered.retain(|product| product.title.to_lowercase().contains(&needle));
    }

    if let Some(category) = &criteria.category {
        filtered.retain(|product| &product.category == category);
    }

    if let Some(start) = criteria.start_date {
        filtered.retain(|product| product.added_date > start);
    }

    if let Some(end) = criteria.end_date {
        filtered.retain(|product| product.added_date < end);
    }

    filtered
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rust_decimal::Decimal;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn product(id: i32, title: &str, category: &str, added: NaiveDate) -> Product {
        Product {
            id,
            title: title.to_string(),
            category: category.to_string(),
            price: Decimal::new(999, 2),
            added_date: added,
        }
    }

    fn sample() -> Vec<Product> {
        vec![
            product(1, "Mens Casual Premium Slim Fit T-Shirts", "men's clothing", date(2026, 7, 1)),
            product(2, "SanDisk SSD PLUS 1TB Internal SSD", "electronics", date(2026, 7, 5)),
            product(3, "Opna Women's Short Sleeve Shirt", "women's clothing", date(2026, 7, 10)),
            product(4, "Solid Gold Petite Micropave Ring", "jewelery", date(2026, 7, 15)),
            product(5, "Acer SB220Q Full HD IPS Monitor", "electronics", date(2026, 7, 20)),
        ]
    }

    #[test]
    fn test_empty_criteria_keeps_everything() {
        let products = sample();
        let filtered = apply_filters(&products, &FilterCriteria::default());
        assert_eq!(filtered, products);
    }

    #[test]
    fn test_search_is_case_insensitive_substring() {
        let products = sample();
        let criteria = FilterCriteria {
            search: "SHIRT".to_string(),
            ..Default::default()
        };

        let filtered = apply_filters(&products, &criteria);
        let ids: Vec<i32> = filtered.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 3]);

        for p in &filtered {
            assert!(p.title.to_lowercase().contains("shirt"));
        }
    }

    #[test]
    fn test_search_excludes_only_non_matching_titles() {
        let products = sample();
        let criteria = FilterCriteria {
            search: "shirt".to_string(),
            ..Default::default()
        };

        let filtered = apply_filters(&products, &criteria);
        for p in &products {
            let kept = filtered.iter().any(|f| f.id == p.id);
            let matches = p.title.to_lowercase().contains("shirt");
            assert_eq!(kept, matches, "product {} misclassified", p.id);
        }
    }

    #[test]
    fn test_category_is_exact_equality() {
        let products = sample();
        let criteria = FilterCriteria {
            category: Some("electronics".to_string()),
            ..Default::default()
        };

        let filtered = apply_filters(&products, &criteria);
        let ids: Vec<i32> = filtered.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![2, 5]);

        // A prefix is not a match.
        let criteria = FilterCriteria {
            category: Some("electron".to_string()),
            ..Default::default()
        };
        assert!(apply_filters(&products, &criteria).is_empty());
    }

    #[test]
    fn test_date_bounds_are_strict() {
        let products = sample();

        // Product 3 was added exactly on July 10; a start date of July 10
        // must exclude it.
        let criteria = FilterCriteria {
            start_date: Some(date(2026, 7, 10)),
            ..Default::default()
        };
        let ids: Vec<i32> = apply_filters(&products, &criteria).iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![4, 5]);

        // Same on the end side.
        let criteria = FilterCriteria {
            end_date: Some(date(2026, 7, 10)),
            ..Default::default()
        };
        let ids: Vec<i32> = apply_filters(&products, &criteria).iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn test_identical_start_and_end_exclude_everything() {
        let products = sample();
        let today = date(2026, 7, 10);
        let criteria = FilterCriteria {
            start_date: Some(today),
            end_date: Some(today),
            ..Default::default()
        };

        // No date can be both strictly after and strictly before the same day.
        assert!(apply_filters(&products, &criteria).is_empty());
    }

    #[test]
    fn test_predicates_combine_conjunctively() {
        let products = sample();
        let criteria = FilterCriteria {
            search: "shirt".to_string(),
            category: Some("women's clothing".to_string()),
            ..Default::default()
        };

        let filtered = apply_filters(&products, &criteria);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id, 3);
    }

    #[test]
    fn test_full_criteria_set() {
        let products = sample();
        let criteria = FilterCriteria {
            search: "s".to_string(),
            category: Some("electronics".to_string()),
            start_date: Some(date(2026, 7, 1)),
            end_date: Some(date(2026, 7, 10)),
        };

        let filtered = apply_filters(&products, &criteria);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id, 2);
    }

    #[test]
    fn test_output_preserves_input_order() {
        // Input deliberately not sorted by id.
        let products = vec![
            product(9, "Gaming Headset", "electronics", date(2026, 7, 2)),
            product(4, "Wireless Keyboard", "electronics", date(2026, 7, 3)),
            product(7, "Curved Gaming Monitor", "electronics", date(2026, 7, 4)),
        ];
        let criteria = FilterCriteria {
            category: Some("electronics".to_string()),
            ..Default::default()
        };

        let ids: Vec<i32> = apply_filters(&products, &criteria).iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![9, 4, 7]);
    }

    #[test]
    fn test_refilter_starts_from_full_list() {
        let products = sample();

        // A narrow filter followed by a broader one must not be limited to
        // the previous result set.
        let narrow = FilterCriteria {
            search: "monitor".to_string(),
            ..Default::default()
        };
        assert_eq!(apply_filters(&products, &narrow).len(), 1);

        let broad = FilterCriteria {
            category: Some("electronics".to_string()),
            ..Default::default()
        };
        assert_eq!(apply_filters(&products, &broad).len(), 2);

        // And clearing recovers the full list exactly.
        assert_eq!(apply_filters(&products, &FilterCriteria::default()), products);
    }
}
