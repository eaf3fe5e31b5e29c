//! Rendering test helpers.
//!
//! Widget and full-frame tests draw into ratatui's `TestBackend` and
//! assert on the resulting cell buffer. No PTY, no timing, fully
//! deterministic.

use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::widgets::{StatefulWidget, Widget};
use ratatui::{Frame, Terminal};

use specter_app::state::AppState;
use specter_core::SpecDocument;

/// In-memory terminal the rendering tests draw into.
///
/// The default size is a conventional 80x24 screen; `compact()` gives a
/// 40x12 one for exercising the narrow-terminal fallbacks.
pub struct TestTerminal {
    pub terminal: Terminal<TestBackend>,
}

impl TestTerminal {
    pub fn new() -> Self {
        Self::with_size(80, 24)
    }

    pub fn compact() -> Self {
        Self::with_size(40, 12)
    }

    pub fn with_size(width: u16, height: u16) -> Self {
        let terminal =
            Terminal::new(TestBackend::new(width, height)).expect("test terminal backend");
        Self { terminal }
    }

    /// The whole screen as a render target.
    pub fn area(&self) -> Rect {
        let size = self.terminal.size().expect("test terminal size");
        Rect::new(0, 0, size.width, size.height)
    }

    pub fn render_widget<W: Widget>(&mut self, widget: W, area: Rect) {
        self.draw_with(|frame| frame.render_widget(widget, area));
    }

    pub fn render_stateful_widget<W, S>(&mut self, widget: W, area: Rect, state: &mut S)
    where
        W: StatefulWidget<State = S>,
    {
        self.draw_with(|frame| frame.render_stateful_widget(widget, area, state));
    }

    /// Draw one frame with an arbitrary closure, for testing
    /// `render::view` rather than a single widget.
    pub fn draw_with<F>(&mut self, f: F)
    where
        F: FnOnce(&mut Frame),
    {
        self.terminal.draw(f).expect("test frame draw");
    }

    pub fn buffer(&self) -> &Buffer {
        self.terminal.backend().buffer()
    }

    /// Whether `text` appears anywhere on screen. Matches within a
    /// single row only, never across a row boundary.
    pub fn buffer_contains(&self, text: &str) -> bool {
        let buffer = self.buffer();
        (0..buffer.area.height).any(|y| row_text(buffer, y).contains(text))
    }

    /// Whether screen row `line` contains `text`.
    pub fn line_contains(&self, line: u16, text: &str) -> bool {
        let buffer = self.buffer();
        line < buffer.area.height && row_text(buffer, line).contains(text)
    }

    /// Start the next render from an empty screen.
    pub fn clear(&mut self) {
        self.terminal.clear().expect("test terminal clear");
    }
}

impl Default for TestTerminal {
    fn default() -> Self {
        Self::new()
    }
}

fn row_text(buffer: &Buffer, y: u16) -> String {
    (0..buffer.area.width)
        .map(|x| buffer[(x, y)].symbol())
        .collect()
}

/// State as the app starts: no document yet, still loading.
pub fn create_test_state() -> AppState {
    AppState::default()
}

/// State after the initial fetch resolved with the given document.
pub fn create_loaded_state(text: &str, path: Option<&str>) -> AppState {
    let mut state = create_test_state();
    state.load_document(SpecDocument::new(text, path.map(str::to_string)));
    state
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::widgets::Paragraph;
    use specter_app::state::AppPhase;

    #[test]
    fn test_sizes() {
        assert_eq!(TestTerminal::new().area(), Rect::new(0, 0, 80, 24));
        assert_eq!(TestTerminal::compact().area(), Rect::new(0, 0, 40, 12));
    }

    #[test]
    fn test_buffer_contains_does_not_match_across_rows() {
        let mut term = TestTerminal::with_size(20, 5);
        term.render_widget(Paragraph::new("alpha\nbeta"), term.area());

        assert!(term.buffer_contains("alpha"));
        assert!(term.buffer_contains("beta"));
        // "alpha" ends its row; the padding cells keep "alphabeta" apart
        assert!(!term.buffer_contains("alphabeta"));
    }

    #[test]
    fn test_line_contains_is_row_scoped() {
        let mut term = TestTerminal::with_size(20, 5);
        term.render_widget(Paragraph::new("alpha\nbeta"), term.area());

        assert!(term.line_contains(0, "alpha"));
        assert!(term.line_contains(1, "beta"));
        assert!(!term.line_contains(0, "beta"));
        assert!(!term.line_contains(99, "alpha"));
    }

    #[test]
    fn test_loaded_state_helper_is_ready() {
        let state = create_loaded_state("openapi: 3.0.0", Some("specs/pets.yaml"));
        assert_eq!(state.phase, AppPhase::Ready);
        assert_eq!(state.editor.text(), "openapi: 3.0.0");
        assert_eq!(state.document_path.as_deref(), Some("specs/pets.yaml"));

        assert_eq!(create_test_state().phase, AppPhase::Loading);
    }
}
