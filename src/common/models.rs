use serde::{Deserialize, Serialize};

/// Query suffix appended to product image URLs for the image-resizing CDN.
pub const IMAGE_CDN_SUFFIX: &str = "?auto=format&fit=crop&w=800&q=60";

/// A sellable item as delivered by the backend sample endpoint.
///
/// Fields default when absent so a partially-formed record still renders
/// instead of failing the whole payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    // Free-form backend string, not constrained to the Category set.
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub price: f64,
    #[serde(default)]
    pub image_url: String,
}

impl Product {
    pub fn display_image_url(&self) -> String {
        format!("{}{}", self.image_url, IMAGE_CDN_SUFFIX)
    }

    /// Price with a literal `$` prefix, no currency formatting.
    pub fn display_price(&self) -> String {
        format!("${}", self.price)
    }
}

/// Closed set of storefront filter categories. `All` is the sentinel
/// meaning "no filtering applied".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Category {
    #[default]
    All,
    Laptops,
    Audio,
    Monitors,
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

const ALL_CATEGORIES: [Category; 4] = [
    Category::All,
    Category::Laptops,
    Category::Audio,
    Category::Monitors,
];

impl Category {
    pub fn all() -> &'static [Category] {
        &ALL_CATEGORIES
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::All => "All",
            Category::Laptops => "Laptops",
            Category::Audio => "Audio",
            Category::Monitors => "Monitors",
        }
    }

    /// Derive the visible subsequence of `products` for this category.
    ///
    /// `All` keeps every product; any other category keeps the products
    /// whose backend category string matches exactly (case-sensitive).
    /// Original order is preserved and an empty result is a normal outcome.
    pub fn filter<'a>(&self, products: &'a [Product]) -> Vec<&'a Product> {
        match self {
            Category::All => products.iter().collect(),
            _ => products
                .iter()
                .filter(|p| p.category == self.as_str())
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn product(id: i64, category: &str) -> Product {
        Product {
            id,
            title: format!("Product {}", id),
            description: "d".to_string(),
            category: category.to_string(),
            price: 10.0,
            image_url: "http://x/y".to_string(),
        }
    }

    #[test]
    fn all_returns_every_product_in_order() {
        let products = vec![product(1, "Audio"), product(2, "Laptops"), product(3, "Audio")];
        let filtered = Category::All.filter(&products);
        let expected: Vec<&Product> = products.iter().collect();
        assert_eq!(filtered, expected);
    }

    #[test]
    fn category_keeps_only_exact_matches_in_order() {
        let products = vec![product(1, "Audio"), product(2, "Laptops"), product(3, "Audio")];
        let filtered = Category::Audio.filter(&products);
        assert_eq!(filtered.len(), 2);
        assert_eq!(filtered[0].id, 1);
        assert_eq!(filtered[1].id, 3);
        assert!(filtered.iter().all(|p| p.category == "Audio"));
    }

    #[test]
    fn filtered_output_is_subset_of_products() {
        let products = vec![product(1, "Audio"), product(2, "Laptops"), product(3, "Monitors")];
        for category in Category::all() {
            let filtered = category.filter(&products);
            assert!(filtered
                .iter()
                .all(|f| products.iter().any(|p| std::ptr::eq(*f, p))));
        }
    }

    #[test]
    fn match_is_case_sensitive() {
        let products = vec![product(1, "audio")];
        assert!(Category::Audio.filter(&products).is_empty());
    }

    #[test]
    fn no_matches_yields_empty_not_error() {
        let products = vec![product(1, "Audio"), product(2, "Laptops")];
        assert!(Category::Monitors.filter(&products).is_empty());
    }

    #[test]
    fn filter_is_idempotent_for_same_inputs() {
        let products = vec![product(1, "Audio"), product(2, "Laptops"), product(3, "Audio")];
        let first = Category::Audio.filter(&products);
        let second = Category::Audio.filter(&products);
        assert_eq!(first, second);
    }

    #[test]
    fn category_set_is_closed_with_all_sentinel_first() {
        let labels: Vec<&str> = Category::all().iter().map(|c| c.as_str()).collect();
        assert_eq!(labels, vec!["All", "Laptops", "Audio", "Monitors"]);
        assert_eq!(Category::default(), Category::All);
    }

    #[test]
    fn product_deserializes_from_backend_payload() {
        let json = r#"{"id":1,"title":"Laptop X","category":"Laptops","price":999,"description":"d","image_url":"http://x/y"}"#;
        let p: Product = serde_json::from_str(json).unwrap();
        assert_eq!(p.id, 1);
        assert_eq!(p.title, "Laptop X");
        assert_eq!(p.category, "Laptops");
        assert_eq!(p.price, 999.0);
        assert_eq!(p.display_price(), "$999");
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let p: Product = serde_json::from_str(r#"{"id":7}"#).unwrap();
        assert_eq!(p.id, 7);
        assert_eq!(p.title, "");
        assert_eq!(p.price, 0.0);
    }

    #[test]
    fn image_url_gets_cdn_suffix() {
        let p = product(1, "Audio");
        assert_eq!(
            p.display_image_url(),
            "http://x/y?auto=format&fit=crop&w=800&q=60"
        );
    }
}
