//! Result pane tab bar
//!
//! One-row bar selecting which generated artifact the results pane
//! shows. Tabs are numbered to match their jump keys.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::Line,
    widgets::{Tabs, Widget},
};

use specter_app::state::ResultTab;

use crate::theme::styles;

/// Tab bar over the results viewers.
pub struct ResultTabs {
    active: ResultTab,
    focused: bool,
}

impl ResultTabs {
    pub fn new(active: ResultTab, focused: bool) -> Self {
        Self { active, focused }
    }

    fn tab_titles() -> Vec<Line<'static>> {
        ResultTab::ALL
            .iter()
            .enumerate()
            .map(|(i, tab)| Line::from(format!(" {} {} ", i + 1, tab.title())))
            .collect()
    }
}

impl Widget for ResultTabs {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 || area.width == 0 {
            return;
        }

        let selected = ResultTab::ALL
            .iter()
            .position(|tab| *tab == self.active)
            .unwrap_or(0);

        // The focused pane gets the filled highlight; otherwise the
        // active tab is only tinted so focus stays readable.
        let highlight = if self.focused {
            styles::focused_selected()
        } else {
            styles::accent_bold()
        };

        let tabs = Tabs::new(Self::tab_titles())
            .style(styles::text_secondary())
            .select(selected)
            .highlight_style(highlight)
            .divider("│");

        // Render with left padding
        let padded_area = Rect {
            x: area.x + 1,
            y: area.y,
            width: area.width.saturating_sub(2),
            height: area.height,
        };

        tabs.render(padded_area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use crate::theme::palette;
    use ratatui::style::Color;

    fn any_cell_with_bg(term: &TestTerminal, bg: Color) -> bool {
        let buffer = term.buffer();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                if buffer[(x, y)].style().bg == Some(bg) {
                    return true;
                }
            }
        }
        false
    }

    #[test]
    fn test_all_tabs_render_with_jump_numbers() {
        let mut term = TestTerminal::with_size(60, 1);
        let tabs = ResultTabs::new(ResultTab::RawSpec, false);

        term.render_widget(tabs, term.area());

        assert!(term.buffer_contains("1 Docs"));
        assert!(term.buffer_contains("2 OpenAPI"));
        assert!(term.buffer_contains("3 YouTrack"));
        assert!(term.buffer_contains("│"));
    }

    #[test]
    fn test_focused_active_tab_gets_accent_fill() {
        let mut term = TestTerminal::with_size(60, 1);

        term.render_widget(ResultTabs::new(ResultTab::RawSpec, true), term.area());
        assert!(any_cell_with_bg(&term, palette::ACCENT));

        term.clear();
        term.render_widget(ResultTabs::new(ResultTab::RawSpec, false), term.area());
        assert!(!any_cell_with_bg(&term, palette::ACCENT));
    }

    #[test]
    fn test_each_tab_can_be_active() {
        for tab in ResultTab::ALL {
            let mut term = TestTerminal::with_size(60, 1);
            term.render_widget(ResultTabs::new(tab, true), term.area());
            assert!(term.buffer_contains(tab.title()));
        }
    }
}
