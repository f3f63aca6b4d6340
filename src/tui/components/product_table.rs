//! # ProductTable Component
//!
//! The catalog as a table. Every visual decision comes from the binding
//! layer:
//!
//! - row color: the product's price class token (`bg-info` / `bg-warning`)
//! - price color: the style map color (`red` / `green`)
//! - flags column: the active class map tokens
//! - reversed + bold: the selection predicate
//!
//! Transient component: built each frame around a borrowed `App`.

use ratatui::Frame;
use ratatui::layout::{Constraint, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Cell, Row, Table};

use crate::core::binding::{self, ClassMap, tokens};
use crate::core::state::App;
use crate::tui::component::Component;

/// Rows above the first product: top border + header.
const BODY_OFFSET: u16 = 2;

/// Terminal color standing in for a class token.
pub fn token_color(token: &str) -> Color {
    match token {
        tokens::BG_INFO => Color::Cyan,
        tokens::BG_WARNING => Color::Yellow,
        tokens::BG_SUCCESS => Color::Green,
        tokens::BG_DANGER => Color::Red,
        tokens::BG_PRIMARY => Color::Blue,
        _ => Color::Reset,
    }
}

/// Terminal color for a CSS color name from a style map.
pub fn css_color(name: &str) -> Color {
    match name {
        "red" => Color::Red,
        "green" => Color::Green,
        _ => Color::Reset,
    }
}

/// Which product row (if any) sits under the pointer at (`screen_x`,
/// `screen_y`) of a table rendered into `area`. Borders never hit.
pub fn hit_test_row(
    screen_x: u16,
    screen_y: u16,
    area: Rect,
    product_count: usize,
) -> Option<usize> {
    let inner_left = area.x.saturating_add(1);
    let inner_right = area.right().saturating_sub(1);
    if screen_x < inner_left || screen_x >= inner_right {
        return None;
    }
    let body_top = area.y + BODY_OFFSET;
    let body_bottom = area.y + area.height.saturating_sub(1);
    if screen_y < body_top || screen_y >= body_bottom {
        return None;
    }
    let index = (screen_y - body_top) as usize;
    (index < product_count).then_some(index)
}

pub struct ProductTable<'a> {
    app: &'a App,
}

impl<'a> ProductTable<'a> {
    pub fn new(app: &'a App) -> Self {
        Self { app }
    }

    fn rows(&self) -> Vec<Row<'a>> {
        self.app
            .products()
            .iter()
            .enumerate()
            .map(|(i, product)| {
                let mut style = Style::default().fg(token_color(binding::price_class(product)));
                if self.app.is_selected(product) {
                    style = style.add_modifier(Modifier::REVERSED | Modifier::BOLD);
                }
                let price_style =
                    Style::default().fg(css_color(binding::style_color(product)));
                let flags = ClassMap::for_product(product).to_class_list().to_string();

                Row::new(vec![
                    Cell::from((i + 1).to_string()),
                    Cell::from(product.name.clone()),
                    Cell::from(product.category.clone()),
                    Cell::from(product.price.to_string()).style(price_style),
                    Cell::from(flags),
                ])
                .style(style)
            })
            .collect()
    }
}

impl Component for ProductTable<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let header = Row::new(vec!["#", "Name", "Category", "Price", "Classes"])
            .style(Style::default().add_modifier(Modifier::BOLD));
        let widths = [
            Constraint::Length(3),
            Constraint::Min(12),
            Constraint::Min(12),
            Constraint::Length(9),
            Constraint::Min(22),
        ];
        let table = Table::new(self.rows(), widths)
            .header(header)
            .block(Block::bordered().title(" Products "));
        frame.render_widget(table, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{test_app, test_app_selecting};
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    #[test]
    fn test_hit_test_row() {
        let area = Rect::new(0, 1, 80, 9);
        // border at y=1, header at y=2, first product at y=3
        assert_eq!(hit_test_row(10, 2, area, 5), None);
        assert_eq!(hit_test_row(10, 3, area, 5), Some(0));
        assert_eq!(hit_test_row(10, 7, area, 5), Some(4));
        // bottom border
        assert_eq!(hit_test_row(10, 9, area, 5), None);
        // below the last product
        assert_eq!(hit_test_row(10, 8, area, 5), None);
    }

    #[test]
    fn test_hit_test_row_ignores_side_borders() {
        let area = Rect::new(0, 1, 80, 9);
        assert_eq!(hit_test_row(0, 3, area, 5), None);
        assert_eq!(hit_test_row(79, 3, area, 5), None);
        assert_eq!(hit_test_row(1, 3, area, 5), Some(0));
        assert_eq!(hit_test_row(78, 3, area, 5), Some(0));
    }

    #[test]
    fn test_token_colors() {
        assert_eq!(token_color("bg-info"), Color::Cyan);
        assert_eq!(token_color("bg-warning"), Color::Yellow);
        assert_eq!(token_color("unknown"), Color::Reset);
        assert_eq!(css_color("red"), Color::Red);
    }

    #[test]
    fn test_render_lists_products() {
        let backend = TestBackend::new(80, 9);
        let mut terminal = Terminal::new(backend).unwrap();
        let app = test_app();

        terminal
            .draw(|f| {
                ProductTable::new(&app).render(f, f.area());
            })
            .unwrap();

        let text = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect::<String>();
        assert!(text.contains("Kayak"));
        assert!(text.contains("48.95"));
        assert!(text.contains("text-center bg-danger"));
        assert!(text.contains("Stadium"));
    }

    #[test]
    fn test_selected_row_is_reversed() {
        let backend = TestBackend::new(80, 9);
        let mut terminal = Terminal::new(backend).unwrap();
        let app = test_app_selecting("Lifejacket");

        terminal
            .draw(|f| {
                ProductTable::new(&app).render(f, f.area());
            })
            .unwrap();

        let buffer = terminal.backend().buffer();
        // Kayak at y=2, Lifejacket at y=3
        assert!(!buffer[(1, 2)].modifier.contains(Modifier::REVERSED));
        assert!(buffer[(1, 3)].modifier.contains(Modifier::REVERSED));
        assert_eq!(buffer[(1, 3)].fg, Color::Cyan);
    }
}
