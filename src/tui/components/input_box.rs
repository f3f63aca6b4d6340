//! # InputBox Component
//!
//! A single-line text field bound to the selection.
//!
//! ## State Management
//!
//! The buffer is a projection of `App::selected_product`: the parent calls
//! [`InputBox::sync`] before every draw so the field shows the canonical
//! value, and every edit is emitted as [`InputEvent::Changed`] carrying the
//! whole new buffer. Two boxes showing the same selection never talk to
//! each other; they both read the one selection cell.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

/// High-level events emitted by the InputBox
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// The buffer changed; carries the full new value.
    Changed(String),
}

/// Offset from area edge to content (border width)
const BORDER_OFFSET: u16 = 1;

pub struct InputBox {
    pub buffer: String,
    /// Title shown on the border (Prop)
    pub label: &'static str,
    /// Whether keystrokes go to this box (Prop)
    pub focused: bool,
    /// Cursor position as byte offset in buffer (0..=buffer.len())
    cursor: usize,
}

impl InputBox {
    pub fn new(label: &'static str) -> Self {
        Self {
            buffer: String::new(),
            label,
            focused: false,
            cursor: 0,
        }
    }

    /// Replace the buffer with the bound value. The cursor stays put when
    /// the value is unchanged and moves to the end otherwise.
    pub fn sync(&mut self, value: &str) {
        if self.buffer != value {
            self.buffer = value.to_string();
            self.cursor = self.buffer.len();
        }
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    fn changed(&self) -> Option<InputEvent> {
        Some(InputEvent::Changed(self.buffer.clone()))
    }

    /// Screen position of the cursor inside `area`, pinned to the last
    /// content column when the text is wider than the box.
    fn cursor_position(&self, area: Rect) -> (u16, u16) {
        let column = u16::try_from(self.buffer[..self.cursor].width()).unwrap_or(u16::MAX);
        let max_column = area.width.saturating_sub(2 * BORDER_OFFSET + 1);
        (
            area.x
                .saturating_add(BORDER_OFFSET)
                .saturating_add(column.min(max_column)),
            area.y.saturating_add(BORDER_OFFSET),
        )
    }
}

/// Find the byte offset of the previous character boundary before `pos` in `text`.
fn prev_char_boundary(text: &str, pos: usize) -> usize {
    text[..pos]
        .char_indices()
        .next_back()
        .map(|(i, _)| i)
        .unwrap_or(0)
}

/// Find the byte offset of the next character boundary after `pos` in `text`.
fn next_char_boundary(text: &str, pos: usize) -> usize {
    text[pos..]
        .char_indices()
        .nth(1)
        .map(|(i, _)| pos + i)
        .unwrap_or(text.len())
}

impl Component for InputBox {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let border_style = if self.focused {
            Style::default().fg(Color::Green)
        } else {
            Style::default().add_modifier(Modifier::DIM)
        };
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(border_style)
            .title(self.label);

        let input = Paragraph::new(self.buffer.as_str()).block(block);
        frame.render_widget(input, area);

        if self.focused {
            frame.set_cursor_position(self.cursor_position(area));
        }
    }
}

impl EventHandler for InputBox {
    type Event = InputEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::InputChar(c) => {
                self.buffer.insert(self.cursor, *c);
                self.cursor += c.len_utf8();
                self.changed()
            }
            TuiEvent::Paste(text) => {
                // Single-line field: newlines are dropped
                let text: String = text.chars().filter(|c| *c != '\n' && *c != '\r').collect();
                self.buffer.insert_str(self.cursor, &text);
                self.cursor += text.len();
                self.changed()
            }
            TuiEvent::Backspace => {
                if self.cursor == 0 {
                    return None;
                }
                let prev = prev_char_boundary(&self.buffer, self.cursor);
                self.buffer.drain(prev..self.cursor);
                self.cursor = prev;
                self.changed()
            }
            TuiEvent::Delete => {
                if self.cursor >= self.buffer.len() {
                    return None;
                }
                let next = next_char_boundary(&self.buffer, self.cursor);
                self.buffer.drain(self.cursor..next);
                self.changed()
            }
            TuiEvent::CursorLeft => {
                self.cursor = prev_char_boundary(&self.buffer, self.cursor);
                None
            }
            TuiEvent::CursorRight => {
                if self.cursor < self.buffer.len() {
                    self.cursor = next_char_boundary(&self.buffer, self.cursor);
                }
                None
            }
            TuiEvent::CursorHome => {
                self.cursor = 0;
                None
            }
            TuiEvent::CursorEnd => {
                self.cursor = self.buffer.len();
                None
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    #[test]
    fn test_input_box_new() {
        let input = InputBox::new("Selection");
        assert!(input.buffer.is_empty());
        assert_eq!(input.cursor(), 0);
    }

    #[test]
    fn test_typing_emits_full_buffer() {
        let mut input = InputBox::new("Selection");
        input.sync("Kayak");

        let res = input.handle_event(&TuiEvent::InputChar('2'));
        assert_eq!(res, Some(InputEvent::Changed("Kayak2".to_string())));

        let res = input.handle_event(&TuiEvent::Backspace);
        assert_eq!(res, Some(InputEvent::Changed("Kayak".to_string())));
    }

    #[test]
    fn test_edit_in_middle() {
        let mut input = InputBox::new("Selection");
        input.sync("Kyak");
        input.handle_event(&TuiEvent::CursorHome);
        input.handle_event(&TuiEvent::CursorRight);
        let res = input.handle_event(&TuiEvent::InputChar('a'));
        assert_eq!(res, Some(InputEvent::Changed("Kayak".to_string())));
        assert_eq!(input.cursor(), 2);
    }

    #[test]
    fn test_backspace_at_start_is_noop() {
        let mut input = InputBox::new("Selection");
        assert_eq!(input.handle_event(&TuiEvent::Backspace), None);
        assert_eq!(input.handle_event(&TuiEvent::Delete), None);
    }

    #[test]
    fn test_multibyte_editing() {
        let mut input = InputBox::new("Selection");
        input.sync("Café");
        let res = input.handle_event(&TuiEvent::Backspace);
        assert_eq!(res, Some(InputEvent::Changed("Caf".to_string())));
    }

    #[test]
    fn test_paste_strips_newlines() {
        let mut input = InputBox::new("Selection");
        let res = input.handle_event(&TuiEvent::Paste("Corner\nFlag".to_string()));
        assert_eq!(res, Some(InputEvent::Changed("CornerFlag".to_string())));
    }

    #[test]
    fn test_sync_keeps_cursor_when_unchanged() {
        let mut input = InputBox::new("Selection");
        input.sync("Stadium");
        input.handle_event(&TuiEvent::CursorHome);
        input.sync("Stadium");
        assert_eq!(input.cursor(), 0);
        input.sync("Kayak");
        assert_eq!(input.cursor(), 5);
    }

    #[test]
    fn test_cursor_stays_inside_box_for_long_text() {
        let mut input = InputBox::new("Selection");
        input.handle_event(&TuiEvent::Paste("a".repeat(70_000)));
        let area = Rect::new(5, 2, 40, 3);
        assert_eq!(input.cursor_position(area), (5 + 1 + 37, 3));
    }

    #[test]
    fn test_render_after_huge_paste() {
        let backend = TestBackend::new(40, 3);
        let mut terminal = Terminal::new(backend).unwrap();

        let mut input = InputBox::new("Two-way A");
        input.focused = true;
        input.handle_event(&TuiEvent::Paste("a".repeat(65_535)));

        terminal
            .draw(|f| {
                input.render(f, f.area());
            })
            .unwrap();

        let text = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect::<String>();
        assert!(text.contains("aaaa"));
    }

    #[test]
    fn test_render_shows_label_and_value() {
        let backend = TestBackend::new(40, 3);
        let mut terminal = Terminal::new(backend).unwrap();

        let mut input = InputBox::new("Two-way A");
        input.sync("Lifejacket");
        input.focused = true;

        terminal
            .draw(|f| {
                input.render(f, f.area());
            })
            .unwrap();

        let buffer = terminal.backend().buffer();
        let text = buffer.content().iter().map(|c| c.symbol()).collect::<String>();

        assert!(text.contains("Two-way A"));
        assert!(text.contains("Lifejacket"));
    }
}
