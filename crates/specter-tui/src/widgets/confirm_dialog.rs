//! Confirmation dialog widget for save/reload/quit prompts

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Clear, Paragraph, Widget, Wrap},
};

use specter_app::ConfirmDialogState;

use crate::theme::styles;

/// Modal confirmation prompt with labelled outcomes.
pub struct ConfirmDialog<'a> {
    state: &'a ConfirmDialogState,
}

impl<'a> ConfirmDialog<'a> {
    pub fn new(state: &'a ConfirmDialogState) -> Self {
        Self { state }
    }

    /// Calculate centered modal rect
    fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
        let x = area.x + (area.width.saturating_sub(width)) / 2;
        let y = area.y + (area.height.saturating_sub(height)) / 2;
        Rect::new(x, y, width.min(area.width), height.min(area.height))
    }
}

impl Widget for ConfirmDialog<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        // Fixed modal size
        let modal_width = 50;
        let modal_height = 8;
        let modal_area = Self::centered_rect(modal_width, modal_height, area);

        // Clear the area behind the modal
        Clear.render(modal_area, buf);

        let title = format!(" {} ", self.state.title);
        let block = styles::modal_block(&title).title_alignment(Alignment::Center);

        let inner = block.inner(modal_area);
        block.render(modal_area, buf);

        let chunks = Layout::vertical([
            Constraint::Length(1), // Spacer
            Constraint::Length(2), // Message (may wrap)
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Buttons
            Constraint::Min(0),    // Rest
        ])
        .split(inner);

        let message = Paragraph::new(self.state.message.as_str())
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .style(styles::text_bright());
        message.render(chunks[1], buf);

        // Buttons carry the labels of the dialog's outcomes
        let confirm_label = self
            .state
            .options
            .first()
            .map(|(label, _)| label.as_str())
            .unwrap_or("Yes");
        let decline_label = self
            .state
            .options
            .get(1)
            .map(|(label, _)| label.as_str())
            .unwrap_or("No");

        let buttons = Line::from(vec![
            Span::styled("[", styles::text_muted()),
            Span::styled("y", styles::status_green().add_modifier(Modifier::BOLD)),
            Span::styled(format!("] {}  ", confirm_label), styles::text_muted()),
            Span::styled("[", styles::text_muted()),
            Span::styled("n", styles::status_red().add_modifier(Modifier::BOLD)),
            Span::styled(format!("] {}", decline_label), styles::text_muted()),
        ]);

        let buttons_para = Paragraph::new(buttons).alignment(Alignment::Center);
        buttons_para.render(chunks[3], buf);
    }
}
