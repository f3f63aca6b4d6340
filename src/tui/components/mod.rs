//! # TUI Components
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! - `TitleBar`: status token, product count, current selection
//! - `ProductTable`: the catalog, styled from the binding derivations
//!
//! ### Stateful Components (Event-Driven)
//!
//! - `InputBox`: single-line field whose buffer mirrors the selection
//!
//! Components receive external data as props, never by reaching into
//! global state:
//!
//! ```rust,ignore
//! // Good: Dependencies are explicit
//! ProductTable::new(&app).render(frame, area);
//!
//! // Bad: Hidden dependency on global state
//! ProductTable::render(frame, area); // reads from a global App
//! ```

pub mod input_box;
pub mod product_table;
mod title_bar;

pub use input_box::{InputBox, InputEvent};
pub use product_table::ProductTable;
pub use title_bar::TitleBar;
