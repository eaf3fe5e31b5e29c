//! Screen layout
//!
//! Splits the terminal into the fixed regions the renderer draws into:
//! a one-row header, the editor/results body, an optional log panel and
//! a one-row status bar.

use ratatui::layout::{Constraint, Layout, Rect};

/// Height of the log panel when visible, borders included.
pub const LOG_PANEL_HEIGHT: u16 = 6;

/// Resolved screen regions for one frame.
#[derive(Debug, Clone, Copy)]
pub struct ScreenAreas {
    pub header: Rect,
    pub editor: Rect,
    pub results: Rect,
    pub log: Option<Rect>,
    pub status_bar: Rect,
}

/// Compute the frame layout.
///
/// The body is split evenly between the spec editor on the left and the
/// results pane on the right. The log panel row only exists while the
/// panel is toggled visible.
pub fn create(area: Rect, log_visible: bool) -> ScreenAreas {
    let mut constraints = vec![Constraint::Length(1), Constraint::Min(0)];
    if log_visible {
        constraints.push(Constraint::Length(LOG_PANEL_HEIGHT));
    }
    constraints.push(Constraint::Length(1));

    let rows = Layout::vertical(constraints).split(area);

    let body = Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(rows[1]);

    let (log, status_bar) = if log_visible {
        (Some(rows[2]), rows[3])
    } else {
        (None, rows[2])
    };

    ScreenAreas {
        header: rows[0],
        editor: body[0],
        results: body[1],
        log,
        status_bar,
    }
}
