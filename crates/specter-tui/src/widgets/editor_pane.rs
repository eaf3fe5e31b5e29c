//! Spec editor pane
//!
//! Renders the editable buffer with a line-number gutter and a block
//! cursor. Scroll bookkeeping lives in `EditorState`; the widget
//! records the viewport during render so the state can keep the cursor
//! visible.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    widgets::{StatefulWidget, Widget},
};

use specter_app::EditorState;

use crate::theme::styles;

/// Left pane holding the editable spec buffer.
pub struct EditorPane {
    focused: bool,
    modified: bool,
}

impl EditorPane {
    pub fn new(focused: bool, modified: bool) -> Self {
        Self { focused, modified }
    }
}

impl StatefulWidget for EditorPane {
    type State = EditorState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut EditorState) {
        let title = if self.modified { " Spec ● " } else { " Spec " };
        let block = styles::glass_block(self.focused).title(title);
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        // Gutter sized for the largest line number plus a separator space
        let gutter_width = (digit_count(state.line_count()).max(3) + 1) as u16;
        let text_width = inner.width.saturating_sub(gutter_width);
        if text_width == 0 {
            return;
        }

        state.adjust_scroll(inner.height as usize, text_width as usize);

        for row in 0..inner.height as usize {
            let line_idx = state.scroll_row + row;
            if line_idx >= state.line_count() {
                break;
            }
            let y = inner.y + row as u16;

            let number = format!(
                "{:>width$} ",
                line_idx + 1,
                width = gutter_width as usize - 1
            );
            let number_style = if line_idx == state.cursor_row {
                styles::text_secondary()
            } else {
                styles::text_muted()
            };
            buf.set_stringn(inner.x, y, &number, gutter_width as usize, number_style);

            let visible: String = state.lines()[line_idx]
                .chars()
                .skip(state.scroll_col)
                .take(text_width as usize)
                .collect();
            buf.set_stringn(
                inner.x + gutter_width,
                y,
                &visible,
                text_width as usize,
                styles::text_primary(),
            );
        }

        // Block cursor; adjust_scroll has already pulled it into view
        if self.focused {
            let x = inner.x + gutter_width + (state.cursor_col - state.scroll_col) as u16;
            let y = inner.y + (state.cursor_row - state.scroll_row) as u16;
            buf.set_style(
                Rect::new(x, y, 1, 1),
                Style::default().add_modifier(Modifier::REVERSED),
            );
        }
    }
}

fn digit_count(mut n: usize) -> usize {
    let mut digits = 1;
    while n >= 10 {
        n /= 10;
        digits += 1;
    }
    digits
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;

    fn editor_with(text: &str) -> EditorState {
        let mut editor = EditorState::new(2);
        editor.set_text(text);
        editor
    }

    #[test]
    fn test_digit_count() {
        assert_eq!(digit_count(0), 1);
        assert_eq!(digit_count(9), 1);
        assert_eq!(digit_count(10), 2);
        assert_eq!(digit_count(999), 3);
        assert_eq!(digit_count(1000), 4);
    }

    #[test]
    fn test_renders_buffer_lines_with_numbers() {
        let mut term = TestTerminal::new();
        let mut editor = editor_with("openapi: 3.0.0\ninfo:\n  title: Pets");

        term.render_stateful_widget(EditorPane::new(true, false), term.area(), &mut editor);

        assert!(term.buffer_contains("openapi: 3.0.0"));
        assert!(term.buffer_contains("  title: Pets"));
        // Gutter numbers
        assert!(term.line_contains(1, "1"));
        assert!(term.line_contains(3, "3"));
    }

    #[test]
    fn test_title_marks_modified_buffer() {
        let mut term = TestTerminal::new();
        let mut editor = editor_with("x: 1");

        term.render_stateful_widget(EditorPane::new(true, true), term.area(), &mut editor);
        assert!(term.buffer_contains("Spec ●"));

        term.clear();
        term.render_stateful_widget(EditorPane::new(true, false), term.area(), &mut editor);
        assert!(!term.buffer_contains("Spec ●"));
        assert!(term.buffer_contains("Spec"));
    }

    #[test]
    fn test_cursor_cell_is_reversed_when_focused() {
        let mut term = TestTerminal::new();
        let mut editor = editor_with("abc");

        term.render_stateful_widget(EditorPane::new(true, false), term.area(), &mut editor);

        // Border takes one cell, gutter takes four ("  1 ")
        let cursor_x = 1 + 4;
        let style = term.buffer()[(cursor_x, 1)].style();
        assert!(style.add_modifier.contains(Modifier::REVERSED));
    }

    #[test]
    fn test_no_cursor_when_unfocused() {
        let mut term = TestTerminal::new();
        let mut editor = editor_with("abc");

        term.render_stateful_widget(EditorPane::new(false, false), term.area(), &mut editor);

        let cursor_x = 1 + 4;
        let style = term.buffer()[(cursor_x, 1)].style();
        assert!(!style.add_modifier.contains(Modifier::REVERSED));
    }

    #[test]
    fn test_scrolls_to_follow_cursor() {
        let text: String = (1..=50)
            .map(|i| format!("line-{}", i))
            .collect::<Vec<_>>()
            .join("\n");
        let mut term = TestTerminal::with_size(30, 10);
        let mut editor = editor_with(&text);
        editor.cursor_row = 49;

        term.render_stateful_widget(EditorPane::new(true, false), term.area(), &mut editor);

        assert!(term.buffer_contains("line-50"));
        assert!(!term.buffer_contains("line-1 "));
        assert!(editor.scroll_row > 0);
    }

    #[test]
    fn test_long_lines_scroll_horizontally() {
        let mut term = TestTerminal::with_size(20, 5);
        let mut editor = editor_with(&format!("{}END", "x".repeat(60)));
        editor.cursor_col = 63;

        term.render_stateful_widget(EditorPane::new(true, false), term.area(), &mut editor);

        assert!(term.buffer_contains("END"));
        assert!(editor.scroll_col > 0);
    }

    #[test]
    fn test_records_viewport_dimensions() {
        let mut term = TestTerminal::new();
        let mut editor = editor_with("x: 1");

        term.render_stateful_widget(EditorPane::new(true, false), term.area(), &mut editor);

        // 24 rows minus two border rows
        assert_eq!(editor.viewport_rows, 22);
        // 80 cols minus two border cols minus the gutter
        assert_eq!(editor.viewport_cols, 80 - 2 - 4);
    }

    #[test]
    fn test_tiny_area_does_not_panic() {
        let mut term = TestTerminal::with_size(4, 2);
        let mut editor = editor_with("x: 1");

        term.render_stateful_widget(EditorPane::new(true, false), term.area(), &mut editor);
    }
}
