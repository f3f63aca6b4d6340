//! # Application State
//!
//! The view instance: one immutable catalog plus one mutable selection cell.
//! No UI types live here; the markup and TUI adapters read from `App`.
//!
//! ```text
//! App
//! ├── catalog: Catalog                // built once, never mutated
//! ├── selected_product: String        // the only mutable state
//! ├── target_name: String             // bound into input values
//! ├── font_size_with_units: String    // "30px"
//! └── font_size_without_units: String // "30"
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.
//! Every getter re-derives its value from scratch, so rendering is a pure
//! function of `(catalog, selected_product)`.

use serde::Serialize;

use crate::core::binding::{self, ClassList, ClassMap, StyleDeclaration, StyleMap};
use crate::core::config::ResolvedConfig;
use crate::core::product::{Catalog, CatalogError, Product};

pub struct App {
    pub catalog: Catalog,
    pub selected_product: String,
    pub target_name: String,
    pub font_size_with_units: String,
    pub font_size_without_units: String,
}

/// Every derived value for one product, as shown by `catalog inspect`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Presentation {
    pub position: usize,
    pub name: String,
    pub classes: ClassList,
    /// Flattened class map: only the tokens whose condition holds.
    pub class_map: ClassList,
    /// Normalized declarations (`margin.px: 100` as `margin: 100px`).
    pub style: Vec<StyleDeclaration>,
    pub selected: bool,
}

impl App {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            selected_product: String::new(),
            target_name: crate::core::config::DEFAULT_TARGET_NAME.to_string(),
            font_size_with_units: crate::core::config::DEFAULT_FONT_SIZE_WITH_UNITS.to_string(),
            font_size_without_units: crate::core::config::DEFAULT_FONT_SIZE_WITHOUT_UNITS
                .to_string(),
        }
    }

    pub fn from_config(catalog: Catalog, config: &ResolvedConfig) -> Self {
        Self {
            target_name: config.target_name.clone(),
            font_size_with_units: config.font_size_with_units.clone(),
            font_size_without_units: config.font_size_without_units.clone(),
            ..Self::new(catalog)
        }
    }

    pub fn products(&self) -> &[Product] {
        self.catalog.products()
    }

    pub fn product(&self, key: usize) -> Result<&Product, CatalogError> {
        self.catalog.product(key)
    }

    pub fn product_by_position(&self, position: usize) -> Result<&Product, CatalogError> {
        self.catalog.product(position)
    }

    pub fn product_count(&self) -> usize {
        self.catalog.len()
    }

    /// `"p-2"` plus the price token of the product at `position`.
    pub fn classes_by_position(&self, position: usize) -> Result<ClassList, CatalogError> {
        self.product_by_position(position)
            .map(binding::product_classes)
    }

    /// The catalog-wide status token.
    pub fn classes(&self) -> &'static str {
        binding::catalog_status(self.product_count())
    }

    pub fn class_map(&self, key: usize) -> Result<ClassMap, CatalogError> {
        self.product(key).map(ClassMap::for_product)
    }

    pub fn styles(&self, key: usize) -> Result<StyleMap, CatalogError> {
        self.product(key).map(StyleMap::for_product)
    }

    pub fn is_selected(&self, product: &Product) -> bool {
        binding::is_selected(product, &self.selected_product)
    }

    /// Index of the product matching the selection, if any.
    pub fn selected_index(&self) -> Option<usize> {
        self.products().iter().position(|p| self.is_selected(p))
    }

    pub fn presentations(&self) -> Vec<Presentation> {
        self.products()
            .iter()
            .enumerate()
            .map(|(position, product)| Presentation {
                position,
                name: product.name.clone(),
                classes: binding::product_classes(product),
                class_map: ClassMap::for_product(product).to_class_list(),
                style: StyleMap::for_product(product).declarations(),
                selected: self.is_selected(product),
            })
            .collect()
    }
}
