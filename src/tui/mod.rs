//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the catalog,
//! and translates pointer and keyboard events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Redraw Strategy
//!
//! The loop blocks on input for up to 500ms and only redraws after an
//! event arrived. Every draw derives all presentation values again from
//! `App`, so there is no per-widget invalidation to get wrong.

mod component;
mod components;
mod event;
mod ui;

use log::{debug, info, warn};
use std::io::stdout;
use std::time::Duration;

use crossterm::event::{
    DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture,
};
use crossterm::execute;

use crate::core::action::{Action, Effect, update};
use crate::core::state::App;
use crate::tui::component::EventHandler;
use crate::tui::components::{InputBox, InputEvent};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    /// Two fields bound to the same selection
    pub inputs: [InputBox; 2],
    /// Index into `inputs` of the field receiving keystrokes
    pub focus: usize,
}

impl Default for TuiState {
    fn default() -> Self {
        Self::new()
    }
}

impl TuiState {
    pub fn new() -> Self {
        Self {
            inputs: [InputBox::new(" Two-way A "), InputBox::new(" Two-way B ")],
            focus: 0,
        }
    }

    pub fn focus_next(&mut self) {
        self.focus = (self.focus + 1) % self.inputs.len();
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(stdout(), EnableMouseCapture, EnableBracketedPaste)?;
        info!("Terminal modes enabled (mouse, bracketed paste)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableMouseCapture, DisableBracketedPaste);
    }
}

/// Route one terminal event. Returns the action it maps to, if any.
///
/// Mouse hover selects the product under the pointer; edits in the focused
/// input write the whole buffer into the selection.
pub fn route_event(
    event: &TuiEvent,
    app: &App,
    tui: &mut TuiState,
    frame_area: ratatui::layout::Rect,
) -> Option<Action> {
    match event {
        TuiEvent::Quit | TuiEvent::ForceQuit => Some(Action::Quit),
        TuiEvent::Resize => None,
        TuiEvent::FocusNext => {
            tui.focus_next();
            None
        }
        TuiEvent::MouseMove(col, row) => {
            ui::hit_test_row(*col, *row, frame_area, app.product_count()).map(Action::Hover)
        }
        _ => {
            // Events are drained in batches between draws, so the selection
            // may have moved since the last sync.
            let focused = &mut tui.inputs[tui.focus];
            focused.sync(&app.selected_product);
            focused
                .handle_event(event)
                .map(|InputEvent::Changed(value)| Action::Input(value))
        }
    }
}

pub fn run(mut app: App) -> std::io::Result<()> {
    let mut tui = TuiState::new();

    let mut terminal = ratatui::init();
    let result = TerminalModeGuard::new()
        .and_then(|_guard| event_loop(&mut terminal, &mut app, &mut tui));

    ratatui::restore();
    info!("Catalog exiting with selection {:?}", app.selected_product);
    result
}

fn event_loop(
    terminal: &mut ratatui::DefaultTerminal,
    app: &mut App,
    tui: &mut TuiState,
) -> std::io::Result<()> {
    let mut needs_redraw = true; // Force first frame

    loop {
        if needs_redraw {
            terminal.draw(|f| ui::draw_ui(f, app, tui))?;
            needs_redraw = false;
        }

        // Process first event + drain ALL pending events before next draw
        let mut pending = poll_event_timeout(Duration::from_millis(500))?;
        while let Some(event) = pending.take() {
            needs_redraw = true;
            let frame_area = terminal.get_frame().area();
            if let Some(action) = route_event(&event, app, tui, frame_area) {
                debug!("Event loop dispatching: {:?}", action);
                match update(app, action) {
                    Ok(Effect::Quit) => return Ok(()),
                    Ok(Effect::Render) => {}
                    Err(e) => warn!("Dropped event: {}", e),
                }
            }
            pending = poll_event_immediate()?;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::test_app;
    use ratatui::layout::Rect;

    const FRAME: Rect = Rect {
        x: 0,
        y: 0,
        width: 80,
        height: 20,
    };

    #[test]
    fn test_hover_routes_to_row_index() {
        let app = test_app();
        let mut tui = TuiState::new();
        let action = route_event(&TuiEvent::MouseMove(10, 4), &app, &mut tui, FRAME);
        assert_eq!(action, Some(Action::Hover(1)));
    }

    #[test]
    fn test_hover_outside_table_is_ignored() {
        let app = test_app();
        let mut tui = TuiState::new();
        assert_eq!(
            route_event(&TuiEvent::MouseMove(10, 0), &app, &mut tui, FRAME),
            None
        );
    }

    #[test]
    fn test_typing_writes_selection_through_either_input() {
        let mut app = test_app();
        let mut tui = TuiState::new();

        for c in "Kayak".chars() {
            let action = route_event(&TuiEvent::InputChar(c), &app, &mut tui, FRAME).unwrap();
            update(&mut app, action).unwrap();
        }
        assert_eq!(app.selected_product, "Kayak");

        // Second field reads the selection before applying its edit
        route_event(&TuiEvent::FocusNext, &app, &mut tui, FRAME);
        let action = route_event(&TuiEvent::InputChar('4'), &app, &mut tui, FRAME).unwrap();
        update(&mut app, action).unwrap();
        assert_eq!(app.selected_product, "Kayak4");

        tui.inputs[0].sync(&app.selected_product);
        assert_eq!(tui.inputs[0].buffer, "Kayak4");
    }

    #[test]
    fn test_hover_then_typing_without_redraw_edits_new_selection() {
        let mut app = test_app();
        let mut tui = TuiState::new();

        // Row y=7 is Stadium; no draw happens between the two events
        let hover = route_event(&TuiEvent::MouseMove(10, 7), &app, &mut tui, FRAME).unwrap();
        update(&mut app, hover).unwrap();
        assert_eq!(app.selected_product, "Stadium");

        let edit = route_event(&TuiEvent::InputChar('x'), &app, &mut tui, FRAME).unwrap();
        update(&mut app, edit).unwrap();
        assert_eq!(app.selected_product, "Stadiumx");
    }

    #[test]
    fn test_hover_on_side_border_is_ignored() {
        let app = test_app();
        let mut tui = TuiState::new();
        assert_eq!(
            route_event(&TuiEvent::MouseMove(0, 4), &app, &mut tui, FRAME),
            None
        );
    }

    #[test]
    fn test_escape_quits() {
        let mut app = test_app();
        let mut tui = TuiState::new();
        let action = route_event(&TuiEvent::Quit, &app, &mut tui, FRAME).unwrap();
        assert_eq!(update(&mut app, action).unwrap(), Effect::Quit);
    }

    #[test]
    fn test_focus_cycles() {
        let mut tui = TuiState::new();
        tui.focus_next();
        assert_eq!(tui.focus, 1);
        tui.focus_next();
        assert_eq!(tui.focus, 0);
    }
}
