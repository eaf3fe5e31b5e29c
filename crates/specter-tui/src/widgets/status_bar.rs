//! Status bar widget
//!
//! One-row bar with the request phase on the left and key hints on the
//! right. Hints degrade to a core set, then disappear, as the terminal
//! narrows.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Widget,
};

use specter_app::state::{AppPhase, AppState, RequestPhase};

use crate::theme::styles;

/// Bottom bar summarizing request state and available chords.
pub struct StatusBar<'a> {
    state: &'a AppState,
}

impl<'a> StatusBar<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    fn left_spans(&self) -> Vec<Span<'_>> {
        let state = self.state;
        let mut spans: Vec<Span> = vec![Span::raw(" ")];

        if state.phase == AppPhase::Loading {
            spans.push(Span::styled("○ Loading", styles::text_muted()));
        } else {
            let (icon, label, style) = styles::phase_indicator(&state.request_phase);
            spans.push(Span::styled(icon, style));
            spans.push(Span::raw(" "));
            let text: String = match &state.request_phase {
                RequestPhase::Requesting { .. } => state
                    .busy
                    .as_ref()
                    .map(|busy| busy.phrase.clone())
                    .unwrap_or_else(|| label.to_string()),
                RequestPhase::Succeeded => match &state.results.generated_at {
                    Some(at) => format!("{} {}", label, at.format("%H:%M:%S")),
                    None => label.to_string(),
                },
                _ => label.to_string(),
            };
            spans.push(Span::styled(text, style));
        }

        if state.modified_since_save {
            spans.push(Span::styled(" │ ", styles::text_muted()));
            spans.push(Span::styled("● edited", styles::status_yellow()));
        }

        spans
    }

    fn hint_spans(&self, full: bool) -> Vec<Span<'static>> {
        let state = self.state;
        let mut spans = Vec::new();

        push_hint(
            &mut spans,
            "^g",
            "Generate",
            styles::generate_hint(state.generate_available),
        );
        if full {
            if state.document_path.is_some() {
                push_hint(&mut spans, "^s", "Save", styles::keybinding());
            }
            push_hint(&mut spans, "^r", "Reload", styles::keybinding());
            push_hint(&mut spans, "^l", "Logs", styles::keybinding());
            push_hint(&mut spans, "^o", "Focus", styles::keybinding());
        }
        push_hint(&mut spans, "^q", "Quit", styles::keybinding());
        spans.push(Span::raw(" "));

        spans
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 || area.width == 0 {
            return;
        }

        let left_line = Line::from(self.left_spans());
        let left_width = left_line.width() as u16;
        buf.set_line(area.x, area.y, &left_line, area.width);

        // Right-align the widest hint tier that fits next to the status
        for full in [true, false] {
            let hints_line = Line::from(self.hint_spans(full));
            let hints_width = hints_line.width() as u16;
            if left_width + hints_width + 2 <= area.width {
                let x = area.x + area.width - hints_width;
                buf.set_line(x, area.y, &hints_line, hints_width);
                break;
            }
        }
    }
}

fn push_hint(
    spans: &mut Vec<Span<'static>>,
    key: &'static str,
    label: &'static str,
    key_style: Style,
) {
    spans.push(Span::styled("[", styles::text_muted()));
    spans.push(Span::styled(key, key_style));
    spans.push(Span::styled(format!("] {} ", label), styles::text_muted()));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{create_loaded_state, create_test_state, TestTerminal};

    fn wide_term() -> TestTerminal {
        TestTerminal::with_size(120, 1)
    }

    #[test]
    fn test_loading_state_shows_loading() {
        let mut term = wide_term();
        let state = create_test_state();

        term.render_widget(StatusBar::new(&state), term.area());

        assert!(term.buffer_contains("Loading"));
    }

    #[test]
    fn test_idle_shows_hints_without_save() {
        let mut term = wide_term();
        let state = create_loaded_state("x: 1", None);

        term.render_widget(StatusBar::new(&state), term.area());

        assert!(term.buffer_contains("Idle"));
        assert!(term.buffer_contains("[^g] Generate"));
        assert!(term.buffer_contains("[^r] Reload"));
        assert!(term.buffer_contains("[^l] Logs"));
        assert!(term.buffer_contains("[^o] Focus"));
        assert!(term.buffer_contains("[^q] Quit"));
        assert!(!term.buffer_contains("[^s] Save"));
    }

    #[test]
    fn test_save_hint_requires_document_path() {
        let mut term = wide_term();
        let state = create_loaded_state("x: 1", Some("specs/pets.yaml"));

        term.render_widget(StatusBar::new(&state), term.area());

        assert!(term.buffer_contains("[^s] Save"));
    }

    #[test]
    fn test_requesting_shows_busy_phrase() {
        let mut term = wide_term();
        let mut state = create_loaded_state("x: 1", None);
        state.begin_generate().unwrap();
        let phrase = state.busy.as_ref().unwrap().phrase.clone();

        term.render_widget(StatusBar::new(&state), term.area());

        assert!(term.buffer_contains("↻"));
        assert!(term.buffer_contains(&phrase));
    }

    #[test]
    fn test_succeeded_shows_generated_with_time() {
        let mut term = wide_term();
        let mut state = create_loaded_state("x: 1", None);
        state.begin_generate().unwrap();
        state.apply_generate_success(
            specter_core::GeneratedArtifacts {
                openapi: "A".to_string(),
                youtrack: "B".to_string(),
                swagger_id: "1".to_string(),
            },
            "http://localhost:8777/swagger/1/".to_string(),
        );

        term.render_widget(StatusBar::new(&state), term.area());

        assert!(term.buffer_contains("● Generated"));
    }

    #[test]
    fn test_failed_shows_failed() {
        let mut term = wide_term();
        let mut state = create_loaded_state("x: 1", None);
        state.begin_generate().unwrap();
        state.apply_generate_failure("boom");

        term.render_widget(StatusBar::new(&state), term.area());

        assert!(term.buffer_contains("✗ Failed"));
    }

    #[test]
    fn test_edited_marker_follows_buffer_state() {
        let mut term = wide_term();
        let mut state = create_loaded_state("x: 1", None);

        term.render_widget(StatusBar::new(&state), term.area());
        assert!(!term.buffer_contains("● edited"));

        state.note_edit();
        term.clear();
        term.render_widget(StatusBar::new(&state), term.area());
        assert!(term.buffer_contains("● edited"));
    }

    #[test]
    fn test_narrow_terminal_falls_back_to_core_hints() {
        let mut term = TestTerminal::with_size(44, 1);
        let state = create_loaded_state("x: 1", Some("specs/pets.yaml"));

        term.render_widget(StatusBar::new(&state), term.area());

        assert!(term.buffer_contains("[^g] Generate"));
        assert!(term.buffer_contains("[^q] Quit"));
        assert!(!term.buffer_contains("[^r] Reload"));
    }
}
