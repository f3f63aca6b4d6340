//! # Markup Renderer
//!
//! Turns the binding layer into a DOM-like element tree. Like the TUI, this
//! is an adapter over `core`: it reads `App`, never writes it. Events come
//! back out as `core::action::Action` values.
//!
//! ```text
//! App ──render──▶ Document ──dispatch(path, event)──▶ Action ──update──▶ App
//!  ▲                                                                      │
//!  └──────────────────────────── render again ◀──────────────────────────┘
//! ```

mod element;
mod page;

pub use element::{DomEvent, Element, EventKind, Handler, Listener, NodePath};
pub use page::Document;
