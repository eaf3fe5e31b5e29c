//! Frame rendering
//!
//! `view` is the single entry point the event loop draws with. It is a
//! pure function of `AppState` apart from the viewport bookkeeping the
//! stateful widgets record while rendering.

use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::Style,
    text::Line,
    widgets::{Block, Paragraph},
    Frame,
};

use specter_app::state::{AppPhase, AppState, Focus, ResultTab};

use crate::layout;
use crate::theme::{palette, styles};
use crate::widgets::{
    ConfirmDialog, DocsViewer, EditorPane, HeaderBar, LogPanel, ResultTabs, StatusBar, TextViewer,
};


/// Render one frame of the UI.
pub fn view(frame: &mut Frame, state: &mut AppState) {
    let area = frame.area();

    // Fill the background
    frame.render_widget(
        Block::default().style(Style::default().bg(palette::DEEPEST_BG)),
        area,
    );

    let areas = layout::create(area, state.log_panel.visible);

    frame.render_widget(
        HeaderBar::new(state.server_url(), state.document_path.as_deref()),
        areas.header,
    );

    if state.phase == AppPhase::Loading {
        render_loading(frame, areas.editor.union(areas.results));
    } else {
        render_editor(frame, state, areas.editor);
        render_results(frame, state, areas.results);
    }

    if let Some(log_area) = areas.log {
        frame.render_widget(LogPanel::new(&state.log_panel), log_area);
    }

    frame.render_widget(StatusBar::new(state), areas.status_bar);

    // Modal overlays render last, over everything else
    if let Some(dialog_state) = &state.confirm_dialog_state {
        frame.render_widget(ConfirmDialog::new(dialog_state), area);
    }
}

/// Placeholder body shown until the initial document fetch resolves.
fn render_loading(frame: &mut Frame, area: Rect) {
    let block = styles::glass_block(false).title(" Specter ");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if inner.height == 0 || inner.width == 0 {
        return;
    }

    let top_padding = (inner.height / 2).saturating_sub(1) as usize;
    let mut lines: Vec<Line> = (0..top_padding).map(|_| Line::raw("")).collect();
    lines.push(Line::styled(
        "Contacting the generator...",
        styles::text_secondary(),
    ));
    lines.push(Line::styled(
        "Fetching the current spec document",
        styles::text_muted(),
    ));

    frame.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center),
        inner,
    );
}

fn render_editor(frame: &mut Frame, state: &mut AppState, area: Rect) {
    let pane = EditorPane::new(state.focus == Focus::Editor, state.modified_since_save);
    frame.render_stateful_widget(pane, area, &mut state.editor);
}

fn render_results(frame: &mut Frame, state: &mut AppState, area: Rect) {
    let focused = state.focus == Focus::Results;
    let rows = Layout::vertical([Constraint::Length(1), Constraint::Min(0)]).split(area);

    frame.render_widget(ResultTabs::new(state.results.active_tab, focused), rows[0]);

    let results = &mut state.results;
    match results.active_tab {
        ResultTab::RenderedDoc => {
            frame.render_widget(DocsViewer::new(results.docs_url.as_deref(), focused), rows[1]);
        }
        ResultTab::RawSpec => {
            let viewer = TextViewer::new("OpenAPI", &results.openapi, focused);
            frame.render_stateful_widget(viewer, rows[1], &mut results.openapi_scroll);
        }
        ResultTab::ExportDoc => {
            let viewer = TextViewer::new("YouTrack", &results.youtrack, focused);
            frame.render_stateful_widget(viewer, rows[1], &mut results.youtrack_scroll);
        }
    }
}
