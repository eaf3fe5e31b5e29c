//! Spec buffer editing state.
//!
//! A plain line buffer with a cursor, no undo stack and no syntax
//! awareness. The rendering widget lives in specter-tui; this module
//! only owns text mutation and scroll bookkeeping.

use crate::message::EditorOp;

/// Compute a scroll offset that keeps the target row inside the viewport.
/// Scrolls up if the target is above the window, down if below.
pub fn follow_offset(target: usize, visible: usize, current: usize) -> usize {
    if visible == 0 {
        return current;
    }
    if target < current {
        target
    } else if target >= current + visible {
        target + 1 - visible
    } else {
        current
    }
}

/// Editable spec buffer with cursor and viewport state.
///
/// Invariant: `lines` always holds at least one line, and the cursor
/// stays on an existing line at a column no greater than its length.
/// Columns are char indices, never byte offsets.
#[derive(Debug, Clone)]
pub struct EditorState {
    lines: Vec<String>,
    /// Cursor row (line index)
    pub cursor_row: usize,
    /// Cursor column (char index within the line)
    pub cursor_col: usize,
    /// First visible row
    pub scroll_row: usize,
    /// First visible column
    pub scroll_col: usize,
    /// Viewport height in rows (set during render)
    pub viewport_rows: usize,
    /// Viewport width in columns (set during render)
    pub viewport_cols: usize,
    tab_width: usize,
}

impl EditorState {
    pub fn new(tab_width: usize) -> Self {
        Self {
            lines: vec![String::new()],
            cursor_row: 0,
            cursor_col: 0,
            scroll_row: 0,
            scroll_col: 0,
            viewport_rows: 0,
            viewport_cols: 0,
            tab_width: tab_width.max(1),
        }
    }

    /// Replace the whole buffer and reset cursor and scroll.
    pub fn set_text(&mut self, text: &str) {
        self.lines = text.split('\n').map(str::to_string).collect();
        if self.lines.is_empty() {
            self.lines.push(String::new());
        }
        self.cursor_row = 0;
        self.cursor_col = 0;
        self.scroll_row = 0;
        self.scroll_col = 0;
    }

    /// Reassemble the buffer into a single newline-joined string.
    pub fn text(&self) -> String {
        self.lines.join("\n")
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Apply an editing operation. Returns true when the buffer content
    /// changed (movement never does).
    pub fn apply(&mut self, op: EditorOp) -> bool {
        match op {
            EditorOp::InsertChar(c) => {
                let at = Self::byte_index(&self.lines[self.cursor_row], self.cursor_col);
                self.lines[self.cursor_row].insert(at, c);
                self.cursor_col += 1;
                true
            }
            EditorOp::InsertNewline => {
                let at = Self::byte_index(&self.lines[self.cursor_row], self.cursor_col);
                let rest = self.lines[self.cursor_row].split_off(at);
                self.lines.insert(self.cursor_row + 1, rest);
                self.cursor_row += 1;
                self.cursor_col = 0;
                true
            }
            EditorOp::InsertIndent => {
                let at = Self::byte_index(&self.lines[self.cursor_row], self.cursor_col);
                let pad = " ".repeat(self.tab_width);
                self.lines[self.cursor_row].insert_str(at, &pad);
                self.cursor_col += self.tab_width;
                true
            }
            EditorOp::DeleteBackward => {
                if self.cursor_col > 0 {
                    self.cursor_col -= 1;
                    let at = Self::byte_index(&self.lines[self.cursor_row], self.cursor_col);
                    self.lines[self.cursor_row].remove(at);
                    true
                } else if self.cursor_row > 0 {
                    let removed = self.lines.remove(self.cursor_row);
                    self.cursor_row -= 1;
                    self.cursor_col = Self::char_len(&self.lines[self.cursor_row]);
                    self.lines[self.cursor_row].push_str(&removed);
                    true
                } else {
                    false
                }
            }
            EditorOp::DeleteForward => {
                let len = Self::char_len(&self.lines[self.cursor_row]);
                if self.cursor_col < len {
                    let at = Self::byte_index(&self.lines[self.cursor_row], self.cursor_col);
                    self.lines[self.cursor_row].remove(at);
                    true
                } else if self.cursor_row + 1 < self.lines.len() {
                    let next = self.lines.remove(self.cursor_row + 1);
                    self.lines[self.cursor_row].push_str(&next);
                    true
                } else {
                    false
                }
            }
            EditorOp::MoveLeft => {
                if self.cursor_col > 0 {
                    self.cursor_col -= 1;
                } else if self.cursor_row > 0 {
                    self.cursor_row -= 1;
                    self.cursor_col = Self::char_len(&self.lines[self.cursor_row]);
                }
                false
            }
            EditorOp::MoveRight => {
                let len = Self::char_len(&self.lines[self.cursor_row]);
                if self.cursor_col < len {
                    self.cursor_col += 1;
                } else if self.cursor_row + 1 < self.lines.len() {
                    self.cursor_row += 1;
                    self.cursor_col = 0;
                }
                false
            }
            EditorOp::MoveUp => {
                self.cursor_row = self.cursor_row.saturating_sub(1);
                self.clamp_col();
                false
            }
            EditorOp::MoveDown => {
                if self.cursor_row + 1 < self.lines.len() {
                    self.cursor_row += 1;
                }
                self.clamp_col();
                false
            }
            EditorOp::MoveLineStart => {
                self.cursor_col = 0;
                false
            }
            EditorOp::MoveLineEnd => {
                self.cursor_col = Self::char_len(&self.lines[self.cursor_row]);
                false
            }
            EditorOp::PageUp => {
                let page = self.viewport_rows.max(1);
                self.cursor_row = self.cursor_row.saturating_sub(page);
                self.clamp_col();
                false
            }
            EditorOp::PageDown => {
                let page = self.viewport_rows.max(1);
                self.cursor_row = (self.cursor_row + page).min(self.lines.len() - 1);
                self.clamp_col();
                false
            }
        }
    }

    /// Record the viewport size and pull the scroll window over the
    /// cursor. Called by the editor widget during render.
    pub fn adjust_scroll(&mut self, rows: usize, cols: usize) {
        self.viewport_rows = rows;
        self.viewport_cols = cols;
        self.scroll_row = follow_offset(self.cursor_row, rows, self.scroll_row);
        self.scroll_col = follow_offset(self.cursor_col, cols, self.scroll_col);
    }

    fn clamp_col(&mut self) {
        let len = Self::char_len(&self.lines[self.cursor_row]);
        if self.cursor_col > len {
            self.cursor_col = len;
        }
    }

    fn char_len(line: &str) -> usize {
        line.chars().count()
    }

    fn byte_index(line: &str, col: usize) -> usize {
        line.char_indices()
            .nth(col)
            .map(|(i, _)| i)
            .unwrap_or(line.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn editor_with(text: &str) -> EditorState {
        let mut editor = EditorState::new(2);
        editor.set_text(text);
        editor
    }

    #[test]
    fn test_new_starts_with_one_empty_line() {
        let editor = EditorState::new(2);
        assert_eq!(editor.line_count(), 1);
        assert_eq!(editor.text(), "");
    }

    #[test]
    fn test_set_text_round_trip() {
        let mut editor = EditorState::new(2);
        editor.set_text("paths:\n  /pets:\n    get: {}");
        assert_eq!(editor.line_count(), 3);
        assert_eq!(editor.text(), "paths:\n  /pets:\n    get: {}");
    }

    #[test]
    fn test_set_text_preserves_trailing_newline() {
        let editor = editor_with("a\n");
        assert_eq!(editor.line_count(), 2);
        assert_eq!(editor.text(), "a\n");
    }

    #[test]
    fn test_insert_char_advances_cursor() {
        let mut editor = EditorState::new(2);
        assert!(editor.apply(EditorOp::InsertChar('x')));
        assert!(editor.apply(EditorOp::InsertChar(':')));
        assert_eq!(editor.text(), "x:");
        assert_eq!(editor.cursor_col, 2);
    }

    #[test]
    fn test_insert_char_mid_line_multibyte() {
        let mut editor = editor_with("héllo");
        editor.cursor_col = 2;
        assert!(editor.apply(EditorOp::InsertChar('é')));
        assert_eq!(editor.text(), "hééllo");
        assert_eq!(editor.cursor_col, 3);
    }

    #[test]
    fn test_insert_newline_splits_line() {
        let mut editor = editor_with("key: value");
        editor.cursor_col = 4;
        assert!(editor.apply(EditorOp::InsertNewline));
        assert_eq!(editor.text(), "key:\n value");
        assert_eq!(editor.cursor_row, 1);
        assert_eq!(editor.cursor_col, 0);
    }

    #[test]
    fn test_insert_indent_uses_tab_width() {
        let mut editor = EditorState::new(4);
        assert!(editor.apply(EditorOp::InsertIndent));
        assert_eq!(editor.text(), "    ");
        assert_eq!(editor.cursor_col, 4);
    }

    #[test]
    fn test_backspace_removes_previous_char() {
        let mut editor = editor_with("abc");
        editor.cursor_col = 2;
        assert!(editor.apply(EditorOp::DeleteBackward));
        assert_eq!(editor.text(), "ac");
        assert_eq!(editor.cursor_col, 1);
    }

    #[test]
    fn test_backspace_at_line_start_joins_lines() {
        let mut editor = editor_with("ab\ncd");
        editor.cursor_row = 1;
        editor.cursor_col = 0;
        assert!(editor.apply(EditorOp::DeleteBackward));
        assert_eq!(editor.text(), "abcd");
        assert_eq!(editor.cursor_row, 0);
        assert_eq!(editor.cursor_col, 2);
    }

    #[test]
    fn test_backspace_at_origin_is_noop() {
        let mut editor = editor_with("ab");
        assert!(!editor.apply(EditorOp::DeleteBackward));
        assert_eq!(editor.text(), "ab");
    }

    #[test]
    fn test_delete_forward_at_line_end_joins_next() {
        let mut editor = editor_with("ab\ncd");
        editor.cursor_col = 2;
        assert!(editor.apply(EditorOp::DeleteForward));
        assert_eq!(editor.text(), "abcd");
        assert_eq!(editor.cursor_row, 0);
    }

    #[test]
    fn test_delete_forward_at_buffer_end_is_noop() {
        let mut editor = editor_with("ab");
        editor.cursor_col = 2;
        assert!(!editor.apply(EditorOp::DeleteForward));
    }

    #[test]
    fn test_move_left_wraps_to_previous_line_end() {
        let mut editor = editor_with("ab\ncd");
        editor.cursor_row = 1;
        editor.cursor_col = 0;
        editor.apply(EditorOp::MoveLeft);
        assert_eq!(editor.cursor_row, 0);
        assert_eq!(editor.cursor_col, 2);
    }

    #[test]
    fn test_move_right_wraps_to_next_line_start() {
        let mut editor = editor_with("ab\ncd");
        editor.cursor_col = 2;
        editor.apply(EditorOp::MoveRight);
        assert_eq!(editor.cursor_row, 1);
        assert_eq!(editor.cursor_col, 0);
    }

    #[test]
    fn test_vertical_move_clamps_column() {
        let mut editor = editor_with("long line\nab");
        editor.cursor_col = 8;
        editor.apply(EditorOp::MoveDown);
        assert_eq!(editor.cursor_row, 1);
        assert_eq!(editor.cursor_col, 2);
    }

    #[test]
    fn test_page_down_uses_viewport_height() {
        let mut editor = editor_with("a\nb\nc\nd\ne\nf");
        editor.viewport_rows = 3;
        editor.apply(EditorOp::PageDown);
        assert_eq!(editor.cursor_row, 3);
        editor.apply(EditorOp::PageDown);
        assert_eq!(editor.cursor_row, 5);
    }

    #[test]
    fn test_adjust_scroll_follows_cursor_down() {
        let mut editor = editor_with("a\nb\nc\nd\ne\nf");
        editor.cursor_row = 5;
        editor.adjust_scroll(3, 80);
        assert_eq!(editor.scroll_row, 3);
    }

    #[test]
    fn test_adjust_scroll_follows_cursor_back_up() {
        let mut editor = editor_with("a\nb\nc\nd\ne\nf");
        editor.cursor_row = 5;
        editor.adjust_scroll(3, 80);
        editor.cursor_row = 1;
        editor.adjust_scroll(3, 80);
        assert_eq!(editor.scroll_row, 1);
    }

    #[test]
    fn test_follow_offset_keeps_target_visible() {
        assert_eq!(follow_offset(0, 10, 0), 0);
        assert_eq!(follow_offset(9, 10, 0), 0);
        assert_eq!(follow_offset(10, 10, 0), 1);
        assert_eq!(follow_offset(2, 10, 5), 2);
        assert_eq!(follow_offset(7, 0, 4), 4);
    }
}
