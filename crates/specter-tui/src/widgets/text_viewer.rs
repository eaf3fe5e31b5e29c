//! Read-only text viewer
//!
//! Scrollable pane for generated artifacts (OpenAPI text, YouTrack
//! markdown). Long lines are truncated, not wrapped, so line numbers in
//! generator output stay meaningful.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    widgets::{Scrollbar, ScrollbarOrientation, ScrollbarState, StatefulWidget, Widget},
};

use specter_app::state::ViewerScroll;

use crate::theme::styles;

/// Viewer for one generated text artifact.
pub struct TextViewer<'a> {
    title: &'a str,
    text: &'a str,
    focused: bool,
}

impl<'a> TextViewer<'a> {
    pub fn new(title: &'a str, text: &'a str, focused: bool) -> Self {
        Self {
            title,
            text,
            focused,
        }
    }
}

impl StatefulWidget for TextViewer<'_> {
    type State = ViewerScroll;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut ViewerScroll) {
        let block = styles::glass_block(self.focused).title(format!(" {} ", self.title));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        if self.text.is_empty() {
            state.record_viewport(0, inner.height as usize);
            render_empty(inner, buf);
            return;
        }

        let lines: Vec<&str> = self.text.lines().collect();
        let total_lines = lines.len();
        let visible_lines = inner.height as usize;
        state.record_viewport(total_lines, visible_lines);

        for (row, line) in lines
            .iter()
            .skip(state.offset)
            .take(visible_lines)
            .enumerate()
        {
            buf.set_stringn(
                inner.x,
                inner.y + row as u16,
                line,
                inner.width as usize,
                styles::text_primary(),
            );
        }

        // Render scrollbar if content exceeds visible area
        if total_lines > visible_lines {
            let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
                .begin_symbol(Some("▲"))
                .end_symbol(Some("▼"))
                .track_symbol(Some("│"))
                .thumb_symbol("█");

            let mut scrollbar_state = ScrollbarState::new(total_lines).position(state.offset);

            scrollbar.render(area, buf, &mut scrollbar_state);
        }
    }
}

/// Placeholder shown before the first successful generation.
fn render_empty(inner: Rect, buf: &mut Buffer) {
    let message = "Nothing generated yet";
    let hint = "Press ^g to run the generator";

    let mid = inner.y + inner.height / 2;
    centered_string(buf, inner, mid.saturating_sub(1), message);
    if inner.height > 1 {
        centered_string(buf, inner, mid, hint);
    }
}

fn centered_string(buf: &mut Buffer, inner: Rect, y: u16, text: &str) {
    let width = text.chars().count() as u16;
    let x = inner.x + inner.width.saturating_sub(width) / 2;
    buf.set_stringn(x, y, text, inner.width as usize, styles::text_muted());
}
