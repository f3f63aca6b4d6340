//! # Catalog Model
//!
//! An ordered list of products plus index-based lookup. The catalog is
//! built once per view instance and never mutated afterwards, so indices
//! stay stable for every render pass.
//!
//! ```text
//! Catalog
//! └── products: Vec<Product>   // insertion order is significant
//!     ├── [0] Kayak
//!     ├── [1] Lifejacket
//!     └── ...
//! ```

use log::info;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::Path;

/// A named, priced, categorized catalog entry.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Product {
    pub name: String,
    pub category: String,
    pub price: f64,
}

impl Product {
    pub fn new(name: impl Into<String>, category: impl Into<String>, price: f64) -> Self {
        Self {
            name: name.into(),
            category: category.into(),
            price,
        }
    }
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum CatalogError {
    /// The key does not address an existing catalog entry.
    OutOfRange { key: usize, len: usize },
    /// The fixture file could not be read.
    Io(std::io::Error),
    /// The fixture file is not a JSON array of products.
    Fixture(serde_json::Error),
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::OutOfRange { key, len } => {
                write!(f, "product key {key} out of range (catalog has {len} entries)")
            }
            CatalogError::Io(e) => write!(f, "fixture I/O error: {e}"),
            CatalogError::Fixture(e) => write!(f, "fixture parse error: {e}"),
        }
    }
}

impl std::error::Error for CatalogError {}

// ============================================================================
// Catalog
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::fixture()
    }
}

impl Catalog {
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// The five-entry reference fixture.
    pub fn fixture() -> Self {
        Self::new(vec![
            Product::new("Kayak", "Watersports", 275.0),
            Product::new("Lifejacket", "Watersports", 48.95),
            Product::new("Soccer Ball", "Soccer", 19.50),
            Product::new("Corner Flag", "Soccer", 34.95),
            Product::new("Stadium", "Soccer", 79500.0),
        ])
    }

    /// Parse a fixture from a JSON array of `{name, category, price}` objects.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let products: Vec<Product> = serde_json::from_str(json).map_err(CatalogError::Fixture)?;
        Ok(Self::new(products))
    }

    /// Load a fixture file from disk.
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let contents = fs::read_to_string(path).map_err(CatalogError::Io)?;
        let catalog = Self::from_json(&contents)?;
        info!(
            "Loaded {} products from {}",
            catalog.len(),
            path.display()
        );
        Ok(catalog)
    }

    /// The full, order-preserving product list.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// The product at position `key`.
    pub fn product(&self, key: usize) -> Result<&Product, CatalogError> {
        self.products.get(key).ok_or(CatalogError::OutOfRange {
            key,
            len: self.products.len(),
        })
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixture_order() {
        let catalog = Catalog::fixture();
        let names: Vec<&str> = catalog.products().iter().map(|p| p.name.as_str()).collect();
        assert_eq!(
            names,
            vec!["Kayak", "Lifejacket", "Soccer Ball", "Corner Flag", "Stadium"]
        );
        assert_eq!(catalog.len(), 5);
    }

    #[test]
    fn test_product_lookup() {
        let catalog = Catalog::fixture();
        let product = catalog.product(1).unwrap();
        assert_eq!(product.name, "Lifejacket");
        assert_eq!(product.price, 48.95);
    }

    #[test]
    fn test_product_out_of_range() {
        let catalog = Catalog::fixture();
        match catalog.product(5) {
            Err(CatalogError::OutOfRange { key, len }) => {
                assert_eq!(key, 5);
                assert_eq!(len, 5);
            }
            other => panic!("Expected OutOfRange, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_catalog_lookup_fails() {
        let catalog = Catalog::new(Vec::new());
        assert!(catalog.is_empty());
        assert!(matches!(
            catalog.product(0),
            Err(CatalogError::OutOfRange { key: 0, len: 0 })
        ));
    }

    #[test]
    fn test_from_json() {
        let json = r#"[
            {"name": "Kayak", "category": "Watersports", "price": 275},
            {"name": "Lifejacket", "category": "Watersports", "price": 48.95}
        ]"#;
        let catalog = Catalog::from_json(json).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.products()[0].price, 275.0);
    }

    #[test]
    fn test_from_json_rejects_malformed() {
        let result = Catalog::from_json(r#"{"name": "Kayak"}"#);
        assert!(matches!(result, Err(CatalogError::Fixture(_))));
    }

    #[test]
    fn test_out_of_range_display() {
        let err = CatalogError::OutOfRange { key: 7, len: 5 };
        assert_eq!(
            err.to_string(),
            "product key 7 out of range (catalog has 5 entries)"
        );
    }
}
