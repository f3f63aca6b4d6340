//! # Actions
//!
//! Everything that can happen to the catalog view becomes an `Action`.
//! Pointer over a row? That's `Action::Hover(index)`.
//! Text typed into a bound input? That's `Action::Input(value)`.
//!
//! The `update()` function applies an action to the state and returns the
//! `Effect` the adapter must carry out. No I/O happens here.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```
//!
//! Every successful transition asks for a full re-render: the adapters
//! re-derive all presentation values instead of patching what changed.

use log::debug;

use crate::core::product::CatalogError;
use crate::core::state::App;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Pointer moved over the row (or a cell of the row) for the product at this index.
    Hover(usize),
    /// A bound input's raw value changed.
    Input(String),
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Selection written, re-derive everything.
    Render,
    Quit,
}

/// Apply `action` to `app`.
///
/// A hover on a key outside the catalog fails with `OutOfRange` and leaves
/// the selection untouched.
pub fn update(app: &mut App, action: Action) -> Result<Effect, CatalogError> {
    debug!("update: {:?}", action);
    match action {
        Action::Hover(index) => {
            let name = app.product(index)?.name.clone();
            Ok(select(app, name))
        }
        Action::Input(value) => Ok(select(app, value)),
        Action::Quit => Ok(Effect::Quit),
    }
}

fn select(app: &mut App, value: String) -> Effect {
    app.selected_product = value;
    Effect::Render
}
