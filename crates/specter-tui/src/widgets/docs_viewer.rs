//! Rendered-documentation tab
//!
//! The generator serves rendered docs as a web page; this tab shows the
//! page URL and the key that hands off to the system browser.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::theme::styles;

/// Contents of the rendered-doc tab.
pub struct DocsViewer<'a> {
    docs_url: Option<&'a str>,
    focused: bool,
}

impl<'a> DocsViewer<'a> {
    pub fn new(docs_url: Option<&'a str>, focused: bool) -> Self {
        Self { docs_url, focused }
    }
}

impl Widget for DocsViewer<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(self.focused).title(" Docs ");
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let lines = match self.docs_url {
            Some(url) => vec![
                Line::raw(""),
                Line::from(Span::styled(
                    " Rendered documentation is served at:",
                    styles::text_secondary(),
                )),
                Line::raw(""),
                Line::from(vec![
                    Span::raw("   "),
                    Span::styled(url.to_string(), styles::accent()),
                ]),
                Line::raw(""),
                Line::from(vec![
                    Span::styled(" Press ", styles::text_muted()),
                    Span::styled("o", styles::keybinding()),
                    Span::styled(" to open it in your browser", styles::text_muted()),
                ]),
            ],
            None => vec![
                Line::raw(""),
                Line::from(Span::styled(
                    " Nothing generated yet",
                    styles::text_muted(),
                )),
                Line::raw(""),
                Line::from(vec![
                    Span::styled(" Press ", styles::text_muted()),
                    Span::styled("^g", styles::keybinding()),
                    Span::styled(" to run the generator", styles::text_muted()),
                ]),
            ],
        };

        Paragraph::new(lines).render(inner, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;

    #[test]
    fn test_shows_url_and_open_hint() {
        let mut term = TestTerminal::new();
        let viewer = DocsViewer::new(Some("http://localhost:8777/swagger/42/"), true);

        term.render_widget(viewer, term.area());

        assert!(term.buffer_contains("http://localhost:8777/swagger/42/"));
        assert!(term.buffer_contains("to open it in your browser"));
    }

    #[test]
    fn test_placeholder_before_first_generation() {
        let mut term = TestTerminal::new();
        let viewer = DocsViewer::new(None, false);

        term.render_widget(viewer, term.area());

        assert!(term.buffer_contains("Nothing generated yet"));
        assert!(term.buffer_contains("^g"));
        assert!(!term.buffer_contains("browser"));
    }

    #[test]
    fn test_compact_render_does_not_panic() {
        let mut term = TestTerminal::compact();
        let viewer = DocsViewer::new(Some("http://localhost:8777/swagger/1/"), false);

        term.render_widget(viewer, term.area());

        assert!(term.buffer_contains("Docs"));
    }
}
