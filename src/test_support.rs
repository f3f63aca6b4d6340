//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use crate::core::product::Catalog;
use crate::core::state::App;

/// Creates a test App over the five-entry fixture with nothing selected.
pub fn test_app() -> App {
    App::new(Catalog::fixture())
}

/// Creates a test App with `selection` already in the selection cell.
pub fn test_app_selecting(selection: &str) -> App {
    let mut app = test_app();
    app.selected_product = selection.to_string();
    app
}
