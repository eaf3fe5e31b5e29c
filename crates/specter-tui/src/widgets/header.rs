//! Header bar widget
//!
//! One-row bar naming the app, the generator server, and the loaded
//! document path once the server has reported one.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::Widget,
};

use crate::theme::styles;

/// Top bar: app name and server URL on the left, document path on the
/// right when known.
pub struct HeaderBar<'a> {
    server_url: &'a str,
    document_path: Option<&'a str>,
}

impl<'a> HeaderBar<'a> {
    pub fn new(server_url: &'a str, document_path: Option<&'a str>) -> Self {
        Self {
            server_url,
            document_path,
        }
    }
}

impl Widget for HeaderBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 || area.width == 0 {
            return;
        }

        let left_line = Line::from(vec![
            Span::raw(" "),
            Span::styled("Specter", styles::accent_bold()),
            Span::raw(" "),
            Span::styled("/", styles::text_muted()),
            Span::raw(" "),
            Span::styled(self.server_url, styles::text_secondary()),
        ]);
        let left_width = left_line.width() as u16;

        buf.set_line(area.x, area.y, &left_line, area.width);

        // Right-align the document path when there is room for it
        if let Some(path) = self.document_path {
            let right_line = Line::from(vec![
                Span::styled(path, styles::text_secondary()),
                Span::raw(" "),
            ]);
            let right_width = right_line.width() as u16;

            if left_width + right_width + 2 <= area.width {
                let x = area.x + area.width - right_width;
                buf.set_line(x, area.y, &right_line, right_width);
            }
        }
    }
}
