//! # Binding Derivations
//!
//! Pure functions from a `Product` (or the whole catalog) to the values a
//! renderer binds onto elements: class lists, class maps, style maps and the
//! selection predicate. Nothing here touches state; `App` wires these to the
//! catalog and the selection cell.
//!
//! ```text
//! Product ──┬── product_classes()  → "p-2 bg-info"
//!           ├── ClassMap           → {"text-center bg-danger": true, "bg-info": false}
//!           ├── StyleMap           → "font-size: 30px; margin: 100px; color: red;"
//!           └── is_selected()      → name == selection
//! ```
//!
//! The class list cuts at `price < 50` while the style color cuts at
//! `price > 50`. A product priced exactly 50 gets `bg-warning` *and* `green`.

use serde::Serialize;
use std::fmt;

use crate::core::product::Product;

/// Price cutoff shared by the class and style derivations.
pub const PRICE_THRESHOLD: f64 = 50.0;

/// Catalog length that earns the success status token.
pub const EXPECTED_PRODUCT_COUNT: usize = 5;

/// Product name highlighted by the class map.
pub const HIGHLIGHT_NAME: &str = "Kayak";

pub const FONT_SIZE: &str = "30px";
pub const MARGIN_PX: f64 = 100.0;

/// Class tokens understood by the renderers.
pub mod tokens {
    pub const PADDED: &str = "p-2";
    pub const BG_INFO: &str = "bg-info";
    pub const BG_WARNING: &str = "bg-warning";
    pub const BG_SUCCESS: &str = "bg-success";
    pub const BG_DANGER: &str = "bg-danger";
    pub const BG_PRIMARY: &str = "bg-primary";
    pub const TEXT_CENTER: &str = "text-center";
    pub const TEXT_WHITE: &str = "text-white";
}

// ============================================================================
// Class Lists
// ============================================================================

/// An ordered, duplicate-free list of class tokens.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ClassList(Vec<String>);

impl ClassList {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Parse a whitespace separated class attribute.
    pub fn parse(classes: &str) -> Self {
        classes.split_whitespace().collect()
    }

    /// Append a token unless it is already present.
    pub fn push(&mut self, token: &str) {
        if !token.is_empty() && !self.contains(token) {
            self.0.push(token.to_string());
        }
    }

    /// Append every token of `other`, keeping the existing order.
    pub fn merge(&mut self, other: &ClassList) {
        for token in &other.0 {
            self.push(token);
        }
    }

    pub fn contains(&self, token: &str) -> bool {
        self.0.iter().any(|t| t == token)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<'a> FromIterator<&'a str> for ClassList {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        let mut list = ClassList::new();
        for token in iter {
            for part in token.split_whitespace() {
                list.push(part);
            }
        }
        list
    }
}

impl fmt::Display for ClassList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.join(" "))
    }
}

/// `bg-info` below the threshold, `bg-warning` at or above it.
pub fn price_class(product: &Product) -> &'static str {
    if product.price < PRICE_THRESHOLD {
        tokens::BG_INFO
    } else {
        tokens::BG_WARNING
    }
}

/// Base padding token plus the price token.
pub fn product_classes(product: &Product) -> ClassList {
    [tokens::PADDED, price_class(product)].into_iter().collect()
}

/// Global status token: success only for a catalog of exactly five entries.
pub fn catalog_status(len: usize) -> &'static str {
    if len == EXPECTED_PRODUCT_COUNT {
        tokens::BG_SUCCESS
    } else {
        tokens::BG_WARNING
    }
}

/// Alternating row classes for a table body row at `index` (0-based).
pub fn row_stripe(index: usize) -> ClassList {
    let stripe = if index % 2 == 0 {
        tokens::BG_INFO
    } else {
        tokens::BG_PRIMARY
    };
    [tokens::TEXT_WHITE, stripe].into_iter().collect()
}

// ============================================================================
// Class Maps
// ============================================================================

/// Class keys mapped to independently evaluated conditions.
///
/// A key may hold several tokens (`"text-center bg-danger"`). Only keys
/// whose condition holds end up in the flattened class list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassMap(Vec<(String, bool)>);

impl ClassMap {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn for_product(product: &Product) -> Self {
        let mut map = Self::new();
        map.insert(
            &format!("{} {}", tokens::TEXT_CENTER, tokens::BG_DANGER),
            product.name == HIGHLIGHT_NAME,
        );
        map.insert(tokens::BG_INFO, product.price < PRICE_THRESHOLD);
        map
    }

    /// Set a key's condition, replacing an earlier entry for the same key.
    pub fn insert(&mut self, key: &str, active: bool) {
        match self.0.iter_mut().find(|(k, _)| k == key) {
            Some(entry) => entry.1 = active,
            None => self.0.push((key.to_string(), active)),
        }
    }

    pub fn entries(&self) -> &[(String, bool)] {
        &self.0
    }

    /// Tokens of every active key, in key order.
    pub fn to_class_list(&self) -> ClassList {
        self.0
            .iter()
            .filter(|(_, active)| *active)
            .map(|(key, _)| key.as_str())
            .collect()
    }
}

// ============================================================================
// Style Maps
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub enum StyleValue {
    Text(String),
    Number(f64),
}

impl fmt::Display for StyleValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StyleValue::Text(s) => write!(f, "{s}"),
            StyleValue::Number(n) => write!(f, "{n}"),
        }
    }
}

impl From<&str> for StyleValue {
    fn from(value: &str) -> Self {
        StyleValue::Text(value.to_string())
    }
}

impl From<f64> for StyleValue {
    fn from(value: f64) -> Self {
        StyleValue::Number(value)
    }
}

/// One normalized CSS declaration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StyleDeclaration {
    pub property: String,
    pub value: String,
}

/// Style keys as written by the binding (`fontSize`, `margin.px`) mapped to
/// raw values. Normalization happens on the way out.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StyleMap(Vec<(String, StyleValue)>);

impl StyleMap {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn for_product(product: &Product) -> Self {
        let mut map = Self::new();
        map.insert("fontSize", FONT_SIZE);
        map.insert("margin.px", MARGIN_PX);
        map.insert("color", style_color(product));
        map
    }

    pub fn insert(&mut self, key: &str, value: impl Into<StyleValue>) {
        let value = value.into();
        match self.0.iter_mut().find(|(k, _)| k == key) {
            Some(entry) => entry.1 = value,
            None => self.0.push((key.to_string(), value)),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Normalized declarations in insertion order.
    pub fn declarations(&self) -> Vec<StyleDeclaration> {
        self.0
            .iter()
            .map(|(key, value)| normalize_style(key, value))
            .collect()
    }
}

impl fmt::Display for StyleMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered: Vec<String> = self
            .declarations()
            .iter()
            .map(|d| format!("{}: {};", d.property, d.value))
            .collect();
        write!(f, "{}", rendered.join(" "))
    }
}

/// `red` above the threshold, `green` at or below it.
pub fn style_color(product: &Product) -> &'static str {
    if product.price > PRICE_THRESHOLD {
        "red"
    } else {
        "green"
    }
}

/// Turn a binding key into a CSS property and move any `.unit` suffix onto
/// the value: `margin.px` + `100` becomes `margin: 100px`.
pub fn normalize_style(key: &str, value: &StyleValue) -> StyleDeclaration {
    let (name, unit) = match key.split_once('.') {
        Some((name, unit)) => (name, unit),
        None => (key, ""),
    };
    StyleDeclaration {
        property: kebab_case(name),
        value: format!("{value}{unit}"),
    }
}

fn kebab_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 2);
    for c in name.chars() {
        if c.is_ascii_uppercase() {
            out.push('-');
            out.push(c.to_ascii_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}

// ============================================================================
// Selection
// ============================================================================

/// Exact, case-sensitive name match against the selection.
pub fn is_selected(product: &Product, selection: &str) -> bool {
    product.name == selection
}
