//! Log panel widget
//!
//! Collapsible panel reporting the outcome of the last generation:
//! either "No errors" or the generator's error message.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    widgets::{Paragraph, Widget, Wrap},
};

use specter_app::state::LogPanelState;

use crate::theme::styles;

/// Bottom panel showing the generation error report.
pub struct LogPanel<'a> {
    state: &'a LogPanelState,
}

impl<'a> LogPanel<'a> {
    pub fn new(state: &'a LogPanelState) -> Self {
        Self { state }
    }
}

impl Widget for LogPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(false).title(" Logs ");
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let style = if self.state.text().starts_with("Error:") {
            styles::status_red()
        } else {
            styles::text_muted()
        };

        Paragraph::new(self.state.text())
            .style(style)
            .wrap(Wrap { trim: false })
            .render(inner, buf);
    }
}
