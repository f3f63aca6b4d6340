//! Catalog library exports for testing

pub mod core;
pub mod markup;
pub mod tui;

#[cfg(test)]
pub mod test_support;
