use crate::core::state::App;
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{ProductTable, TitleBar, product_table};

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};

/// Title, table, then the two bound inputs.
fn layout(area: Rect) -> [Rect; 4] {
    use Constraint::{Length, Min};
    Layout::vertical([Length(1), Min(0), Length(3), Length(3)]).areas(area)
}

/// Draw the whole screen. Every value is derived from `app` again; nothing
/// from the previous frame is reused.
pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState) {
    let [title_area, table_area, first_input_area, second_input_area] = layout(frame.area());

    TitleBar::new(
        app.classes(),
        app.product_count(),
        app.selected_product.clone(),
    )
    .render(frame, title_area);

    ProductTable::new(app).render(frame, table_area);

    // Two-way: both inputs read the selection cell before drawing
    for (index, input) in tui.inputs.iter_mut().enumerate() {
        input.sync(&app.selected_product);
        input.focused = index == tui.focus;
    }
    let [first, second] = &mut tui.inputs;
    first.render(frame, first_input_area);
    second.render(frame, second_input_area);
}

/// Hit test: given a screen position, find which product row (if any)
/// is under it.
pub fn hit_test_row(
    screen_x: u16,
    screen_y: u16,
    frame_area: Rect,
    product_count: usize,
) -> Option<usize> {
    let [_, table_area, _, _] = layout(frame_area);
    product_table::hit_test_row(screen_x, screen_y, table_area, product_count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::test_app_selecting;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    #[test]
    fn test_draw_ui_mirrors_selection_into_both_inputs() {
        let backend = TestBackend::new(80, 20);
        let mut terminal = Terminal::new(backend).unwrap();
        let app = test_app_selecting("Corner Flag");
        let mut tui = TuiState::new();

        terminal
            .draw(|f| {
                draw_ui(f, &app, &mut tui);
            })
            .unwrap();

        assert_eq!(tui.inputs[0].buffer, "Corner Flag");
        assert_eq!(tui.inputs[1].buffer, "Corner Flag");
        assert!(tui.inputs[0].focused);
        assert!(!tui.inputs[1].focused);

        let text = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect::<String>();
        assert!(text.contains("Selected: Corner Flag"));
    }

    #[test]
    fn test_hit_test_row_uses_table_area() {
        let frame_area = Rect::new(0, 0, 80, 20);
        // title y=0, table border y=1, header y=2, first product y=3
        assert_eq!(hit_test_row(10, 0, frame_area, 5), None);
        assert_eq!(hit_test_row(10, 3, frame_area, 5), Some(0));
        assert_eq!(hit_test_row(10, 4, frame_area, 5), Some(1));
        assert_eq!(hit_test_row(10, 8, frame_area, 5), None);
        // table side border
        assert_eq!(hit_test_row(0, 4, frame_area, 5), None);
    }
}
