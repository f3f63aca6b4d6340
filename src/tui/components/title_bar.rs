//! # TitleBar Component
//!
//! Top status bar: catalog status token, product count and the current
//! selection. Purely presentational; all data arrives as props.
//!
//! ```text
//! Catalog (5 products) | bg-success | Selected: Kayak
//! ```
//!
//! The text takes the color of the status token, so a catalog that does not
//! hold exactly five products shows up in the warning color.

use crate::tui::component::Component;
use crate::tui::components::product_table::token_color;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::Span;

pub struct TitleBar {
    /// Catalog-wide status token (e.g. "bg-success")
    pub status_token: &'static str,
    pub product_count: usize,
    /// Current selection, empty when nothing is selected
    pub selection: String,
}

impl TitleBar {
    pub fn new(status_token: &'static str, product_count: usize, selection: String) -> Self {
        Self {
            status_token,
            product_count,
            selection,
        }
    }

    fn title_text(&self) -> String {
        let base = format!(
            "Catalog ({} products) | {}",
            self.product_count, self.status_token
        );
        if self.selection.is_empty() {
            base
        } else {
            format!("{} | Selected: {}", base, self.selection)
        }
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let style = Style::default().fg(token_color(self.status_token));
        frame.render_widget(Span::styled(self.title_text(), style), area);
    }
}
