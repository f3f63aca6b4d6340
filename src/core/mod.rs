//! # Core Application Logic
//!
//! The catalog model and the binding layer.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • Catalog (products)   │
//!                    │  • Bindings (derived)   │
//!                    │  • State + Action       │
//!                    │                         │
//!                    │  No I/O. No UI. Pure.   │
//!                    └───────────┬─────────────┘
//!                                │
//!                     ┌──────────┴──────────┐
//!                     ▼                     ▼
//!              ┌────────────┐        ┌────────────┐
//!              │   Markup   │        │    TUI     │
//!              │  (element  │        │  Adapter   │
//!              │   tree)    │        │ (ratatui)  │
//!              └────────────┘        └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`product`]: `Product` and `Catalog`, with `OutOfRange` lookups
//! - [`binding`]: class lists, class maps, style maps, selection predicate
//! - [`state`]: The `App` struct, the view instance
//! - [`action`]: The `Action` enum and the `update()` reducer
//! - [`config`]: layered settings from `~/.catalog/config.toml`

pub mod action;
pub mod binding;
pub mod config;
pub mod product;
pub mod state;
