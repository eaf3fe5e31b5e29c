//! Application state (the Model in TEA)
//!
//! Everything the UI renders lives here: the editable spec buffer, the
//! generate request state machine, the results pane, the log panel, and
//! any active confirmation dialog. Transitions happen only in the
//! handler layer; widgets read this state and never mutate it (the one
//! exception is viewport bookkeeping recorded during render).

use chrono::{DateTime, Local};
use rand::Rng;

use specter_core::{GeneratedArtifacts, SpecDocument};

use crate::config::Settings;
use crate::confirm_dialog::ConfirmDialogState;
use crate::editor::EditorState;

/// Top-level application lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppPhase {
    /// Waiting for the initial document fetch
    Loading,
    /// Normal interactive operation
    Ready,
    /// Event loop should exit
    Quitting,
}

/// State machine for one generate round trip.
///
/// A new dispatch may supersede an in-flight request; the carried id
/// lets completion messages for superseded requests be discarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestPhase {
    /// No request has been made since startup
    Idle,
    /// A request with this id is in flight
    Requesting { id: u64 },
    /// The most recent request produced artifacts
    Succeeded,
    /// The most recent request ended in an error
    Failed,
}

impl RequestPhase {
    pub fn is_requesting(&self) -> bool {
        matches!(self, RequestPhase::Requesting { .. })
    }
}

/// Which pane receives keystrokes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Editor,
    Results,
}

/// Results pane tabs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultTab {
    /// Rendered documentation page (URL + browser hand-off)
    RenderedDoc,
    /// Generated OpenAPI text
    RawSpec,
    /// YouTrack-flavoured markdown export
    ExportDoc,
}

impl ResultTab {
    pub const ALL: [ResultTab; 3] = [
        ResultTab::RenderedDoc,
        ResultTab::RawSpec,
        ResultTab::ExportDoc,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            ResultTab::RenderedDoc => "Docs",
            ResultTab::RawSpec => "OpenAPI",
            ResultTab::ExportDoc => "YouTrack",
        }
    }

    pub fn next(&self) -> ResultTab {
        match self {
            ResultTab::RenderedDoc => ResultTab::RawSpec,
            ResultTab::RawSpec => ResultTab::ExportDoc,
            ResultTab::ExportDoc => ResultTab::RenderedDoc,
        }
    }

    pub fn prev(&self) -> ResultTab {
        match self {
            ResultTab::RenderedDoc => ResultTab::ExportDoc,
            ResultTab::RawSpec => ResultTab::RenderedDoc,
            ResultTab::ExportDoc => ResultTab::RawSpec,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────

const GENERATE_PHRASES: &[&str] = &[
    "Negotiating with the generator...",
    "Unfolding YAML origami...",
    "Promoting drafts to contracts...",
    "Inflating the OpenAPI balloon...",
    "Teaching endpoints to describe themselves...",
    "Rolling YouTrack markdown...",
    "Numbering the swagger...",
    "Converting coffee into specs...",
];

/// Rotating status message shown while a generate request is in flight
#[derive(Debug, Clone)]
pub struct BusyState {
    /// Current phrase
    pub phrase: String,
    /// Animation frame counter for the spinner
    pub animation_frame: u64,
    /// Current index into GENERATE_PHRASES for cycling
    phrase_index: usize,
}

impl BusyState {
    pub fn new() -> Self {
        // Start at a random index for variety
        let start_index = rand::thread_rng().gen_range(0..GENERATE_PHRASES.len());

        Self {
            phrase: GENERATE_PHRASES[start_index].to_string(),
            animation_frame: 0,
            phrase_index: start_index,
        }
    }

    /// Tick the animation frame and cycle the phrase every ~1.5s at a
    /// 100ms tick rate.
    pub fn tick(&mut self) {
        self.animation_frame = self.animation_frame.wrapping_add(1);
        if self.animation_frame % 15 == 0 {
            self.phrase_index = (self.phrase_index + 1) % GENERATE_PHRASES.len();
            self.phrase = GENERATE_PHRASES[self.phrase_index].to_string();
        }
    }
}

impl Default for BusyState {
    fn default() -> Self {
        Self::new()
    }
}

// ─────────────────────────────────────────────────────────────────────────────

/// Scroll state for a read-only text viewer
#[derive(Debug, Clone, Default)]
pub struct ViewerScroll {
    /// First visible line
    pub offset: usize,
    /// Total number of lines (set during render)
    pub total_lines: usize,
    /// Visible lines (set during render)
    pub visible_lines: usize,
}

impl ViewerScroll {
    pub fn new() -> Self {
        Self::default()
    }

    fn max_offset(&self) -> usize {
        self.total_lines.saturating_sub(self.visible_lines)
    }

    pub fn scroll_up(&mut self, lines: usize) {
        self.offset = self.offset.saturating_sub(lines);
    }

    pub fn scroll_down(&mut self, lines: usize) {
        self.offset = (self.offset + lines).min(self.max_offset());
    }

    pub fn page_up(&mut self) {
        self.scroll_up(self.visible_lines.max(1));
    }

    pub fn page_down(&mut self) {
        self.scroll_down(self.visible_lines.max(1));
    }

    pub fn to_top(&mut self) {
        self.offset = 0;
    }

    pub fn to_bottom(&mut self) {
        self.offset = self.max_offset();
    }

    /// Record the rendered extent and clamp the offset to it.
    /// Called by the viewer widget during render.
    pub fn record_viewport(&mut self, total_lines: usize, visible_lines: usize) {
        self.total_lines = total_lines;
        self.visible_lines = visible_lines;
        self.offset = self.offset.min(self.max_offset());
    }
}

/// Artifacts of the last successful generation plus viewer state
#[derive(Debug, Clone)]
pub struct ResultsState {
    /// Currently selected tab
    pub active_tab: ResultTab,
    /// Generated OpenAPI text (raw-spec viewer)
    pub openapi: String,
    /// Generated YouTrack markdown (export-doc viewer)
    pub youtrack: String,
    /// Rendered documentation URL, set after the first success
    pub docs_url: Option<String>,
    /// When the artifacts were produced
    pub generated_at: Option<DateTime<Local>>,
    /// Scroll state of the raw-spec viewer
    pub openapi_scroll: ViewerScroll,
    /// Scroll state of the export-doc viewer
    pub youtrack_scroll: ViewerScroll,
}

impl ResultsState {
    pub fn new() -> Self {
        Self {
            active_tab: ResultTab::RawSpec,
            openapi: String::new(),
            youtrack: String::new(),
            docs_url: None,
            generated_at: None,
            openapi_scroll: ViewerScroll::new(),
            youtrack_scroll: ViewerScroll::new(),
        }
    }

    pub fn has_results(&self) -> bool {
        self.generated_at.is_some()
    }

    /// Scroll state of the active viewer. The rendered-doc tab shows a
    /// single URL and does not scroll.
    pub fn active_scroll_mut(&mut self) -> Option<&mut ViewerScroll> {
        match self.active_tab {
            ResultTab::RenderedDoc => None,
            ResultTab::RawSpec => Some(&mut self.openapi_scroll),
            ResultTab::ExportDoc => Some(&mut self.youtrack_scroll),
        }
    }

    /// Replace all artifacts and reset viewer scroll positions.
    pub fn apply(&mut self, artifacts: GeneratedArtifacts, docs_url: String) {
        self.openapi = artifacts.openapi;
        self.youtrack = artifacts.youtrack;
        self.docs_url = Some(docs_url);
        self.generated_at = Some(Local::now());
        self.openapi_scroll = ViewerScroll::new();
        self.youtrack_scroll = ViewerScroll::new();
    }
}

impl Default for ResultsState {
    fn default() -> Self {
        Self::new()
    }
}

// ─────────────────────────────────────────────────────────────────────────────

/// Collapsible panel reporting the outcome of the last generation
#[derive(Debug, Clone)]
pub struct LogPanelState {
    /// Whether the panel occupies its layout row
    pub visible: bool,
    text: String,
}

impl LogPanelState {
    pub fn new() -> Self {
        Self {
            visible: false,
            text: "No errors".to_string(),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Show the panel with an error message.
    pub fn record_error(&mut self, message: &str) {
        self.text = format!("Error: {}", message);
        self.visible = true;
    }

    /// Reset to the no-error message and collapse the panel.
    pub fn clear_errors(&mut self) {
        self.text = "No errors".to_string();
        self.visible = false;
    }

    pub fn toggle(&mut self) {
        self.visible = !self.visible;
    }
}

impl Default for LogPanelState {
    fn default() -> Self {
        Self::new()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
/// Complete application state (the Model in TEA)
#[derive(Debug)]
pub struct AppState {
    /// Current application phase
    pub phase: AppPhase,

    /// Which pane receives keystrokes
    pub focus: Focus,

    /// Editable spec buffer
    pub editor: EditorState,

    /// Server-side path of the loaded document (None = path unknown,
    /// save is unavailable)
    pub document_path: Option<String>,

    /// True when the buffer changed since the last successful
    /// generation or load; gates the generate action
    pub generate_available: bool,

    /// True when the buffer changed since the last save or load;
    /// gates the quit and reload confirmations
    pub modified_since_save: bool,

    /// Generate round-trip state machine
    pub request_phase: RequestPhase,

    /// Results pane artifacts and tab state
    pub results: ResultsState,

    /// Log panel state
    pub log_panel: LogPanelState,

    /// Rotating status phrase while a request is in flight
    pub busy: Option<BusyState>,

    /// Confirmation dialog state
    pub confirm_dialog_state: Option<ConfirmDialogState>,

    /// Application settings from config file and CLI
    pub settings: Settings,

    /// Monotonic generate request counter
    next_request_id: u64,
}

impl Default for AppState {
    fn default() -> Self {
        Self::with_settings(Settings::default())
    }
}

impl AppState {
    pub fn with_settings(settings: Settings) -> Self {
        let editor = EditorState::new(settings.ui.tab_width);
        Self {
            phase: AppPhase::Loading,
            focus: Focus::Editor,
            editor,
            document_path: None,
            generate_available: true,
            modified_since_save: false,
            request_phase: RequestPhase::Idle,
            results: ResultsState::new(),
            log_panel: LogPanelState::new(),
            busy: None,
            confirm_dialog_state: None,
            settings,
            next_request_id: 0,
        }
    }

    pub fn server_url(&self) -> &str {
        &self.settings.server.url
    }

    pub fn should_quit(&self) -> bool {
        self.phase == AppPhase::Quitting
    }

    // ─────────────────────────────────────────────────────────
    // Document Lifecycle
    // ─────────────────────────────────────────────────────────

    /// Install a freshly fetched document and enter normal operation.
    pub fn load_document(&mut self, document: SpecDocument) {
        self.editor.set_text(&document.text);
        self.document_path = document.path;
        self.generate_available = true;
        self.modified_since_save = false;
        self.log_panel.clear_errors();
        self.phase = AppPhase::Ready;
    }

    /// Record a user edit to the buffer.
    pub fn note_edit(&mut self) {
        self.generate_available = true;
        self.modified_since_save = true;
    }

    // ─────────────────────────────────────────────────────────
    // Generate State Machine
    // ─────────────────────────────────────────────────────────

    /// Enter `Requesting` and hand out the id the dispatch must carry.
    /// Returns None when the availability guard blocks the request.
    pub fn begin_generate(&mut self) -> Option<u64> {
        if !self.generate_available {
            return None;
        }
        self.next_request_id += 1;
        let id = self.next_request_id;
        self.request_phase = RequestPhase::Requesting { id };
        self.busy = Some(BusyState::new());
        Some(id)
    }

    /// Whether a completion for this id belongs to the in-flight request.
    pub fn is_current_request(&self, id: u64) -> bool {
        matches!(self.request_phase, RequestPhase::Requesting { id: current } if current == id)
    }

    /// A generation succeeded: populate the viewers, collapse the log
    /// panel, and disarm the generate action until the next edit.
    pub fn apply_generate_success(&mut self, artifacts: GeneratedArtifacts, docs_url: String) {
        self.request_phase = RequestPhase::Succeeded;
        self.busy = None;
        self.generate_available = false;
        self.results.apply(artifacts, docs_url);
        self.log_panel.clear_errors();
    }

    /// A generation failed: surface the message in the log panel. The
    /// availability flag is untouched so the user can retry.
    pub fn apply_generate_failure(&mut self, message: &str) {
        self.request_phase = RequestPhase::Failed;
        self.busy = None;
        self.log_panel.record_error(message);
    }

    /// Advance periodic animations.
    pub fn tick(&mut self) {
        if let Some(busy) = &mut self.busy {
            busy.tick();
        }
    }

    // ─────────────────────────────────────────────────────────
    // Quit Flow
    // ─────────────────────────────────────────────────────────

    /// Quit immediately, or ask first when unsaved edits exist.
    pub fn request_quit(&mut self) {
        if self.modified_since_save {
            self.confirm_dialog_state = Some(ConfirmDialogState::quit_confirmation());
        } else {
            self.phase = AppPhase::Quitting;
        }
    }

    pub fn confirm_quit(&mut self) {
        self.confirm_dialog_state = None;
        self.phase = AppPhase::Quitting;
    }

    pub fn dismiss_dialog(&mut self) {
        self.confirm_dialog_state = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ready_state() -> AppState {
        let mut state = AppState::default();
        state.load_document(SpecDocument {
            text: "openapi: 3.0.0".to_string(),
            path: Some("specs/pets.yaml".to_string()),
        });
        state
    }

    fn artifacts(openapi: &str, youtrack: &str) -> GeneratedArtifacts {
        GeneratedArtifacts {
            openapi: openapi.to_string(),
            youtrack: youtrack.to_string(),
            swagger_id: "42".to_string(),
        }
    }

    #[test]
    fn test_default_tab_is_raw_spec() {
        let state = AppState::default();
        assert_eq!(state.results.active_tab, ResultTab::RawSpec);
    }

    #[test]
    fn test_tab_cycle_round_trips() {
        for tab in ResultTab::ALL {
            assert_eq!(tab.next().prev(), tab);
        }
        assert_eq!(ResultTab::ExportDoc.next(), ResultTab::RenderedDoc);
    }

    #[test]
    fn test_load_document_enters_ready() {
        let state = ready_state();
        assert_eq!(state.phase, AppPhase::Ready);
        assert_eq!(state.editor.text(), "openapi: 3.0.0");
        assert_eq!(state.document_path.as_deref(), Some("specs/pets.yaml"));
        assert!(state.generate_available);
        assert!(!state.modified_since_save);
    }

    #[test]
    fn test_load_document_without_path() {
        let mut state = AppState::default();
        state.load_document(SpecDocument {
            text: "x: 1".to_string(),
            path: None,
        });
        assert_eq!(state.document_path, None);
    }

    #[test]
    fn test_note_edit_arms_generate() {
        let mut state = ready_state();
        state.generate_available = false;
        state.note_edit();
        assert!(state.generate_available);
        assert!(state.modified_since_save);
    }

    #[test]
    fn test_begin_generate_blocked_when_unavailable() {
        let mut state = ready_state();
        state.generate_available = false;
        assert_eq!(state.begin_generate(), None);
        assert_eq!(state.request_phase, RequestPhase::Idle);
    }

    #[test]
    fn test_begin_generate_hands_out_increasing_ids() {
        let mut state = ready_state();
        let first = state.begin_generate().unwrap();
        let second = state.begin_generate().unwrap();
        assert!(second > first);
        assert_eq!(state.request_phase, RequestPhase::Requesting { id: second });
        assert!(state.busy.is_some());
    }

    #[test]
    fn test_success_populates_viewers_and_disarms() {
        let mut state = ready_state();
        state.begin_generate().unwrap();
        state.log_panel.record_error("old failure");

        state.apply_generate_success(
            artifacts("A", "B"),
            "http://localhost:8777/swagger/42/".to_string(),
        );

        assert_eq!(state.request_phase, RequestPhase::Succeeded);
        assert_eq!(state.results.openapi, "A");
        assert_eq!(state.results.youtrack, "B");
        assert_eq!(
            state.results.docs_url.as_deref(),
            Some("http://localhost:8777/swagger/42/")
        );
        assert!(!state.generate_available);
        assert!(!state.log_panel.visible);
        assert_eq!(state.log_panel.text(), "No errors");
        assert!(state.busy.is_none());
    }

    #[test]
    fn test_failure_shows_log_panel_and_keeps_flag() {
        let mut state = ready_state();
        state.begin_generate().unwrap();
        state.apply_generate_failure("bad input");

        assert_eq!(state.request_phase, RequestPhase::Failed);
        assert!(state.log_panel.visible);
        assert_eq!(state.log_panel.text(), "Error: bad input");
        assert!(state.generate_available);
        assert!(state.results.openapi.is_empty());
    }

    #[test]
    fn test_stale_request_id_is_not_current() {
        let mut state = ready_state();
        let first = state.begin_generate().unwrap();
        let second = state.begin_generate().unwrap();
        assert!(!state.is_current_request(first));
        assert!(state.is_current_request(second));
    }

    #[test]
    fn test_quit_without_edits_skips_dialog() {
        let mut state = ready_state();
        state.request_quit();
        assert_eq!(state.phase, AppPhase::Quitting);
        assert!(state.confirm_dialog_state.is_none());
    }

    #[test]
    fn test_quit_with_edits_asks_first() {
        let mut state = ready_state();
        state.note_edit();
        state.request_quit();
        assert_eq!(state.phase, AppPhase::Ready);
        assert!(state.confirm_dialog_state.is_some());

        state.confirm_quit();
        assert_eq!(state.phase, AppPhase::Quitting);
    }

    #[test]
    fn test_busy_phrase_rotates_on_tick() {
        let mut busy = BusyState::new();
        assert!(GENERATE_PHRASES.contains(&busy.phrase.as_str()));
        let before = busy.phrase.clone();
        for _ in 0..15 {
            busy.tick();
        }
        assert_ne!(busy.phrase, before);
    }

    #[test]
    fn test_viewer_scroll_clamps_to_extent() {
        let mut scroll = ViewerScroll::new();
        scroll.record_viewport(10, 4);
        scroll.scroll_down(100);
        assert_eq!(scroll.offset, 6);
        scroll.page_up();
        assert_eq!(scroll.offset, 2);
        scroll.to_bottom();
        assert_eq!(scroll.offset, 6);
        scroll.record_viewport(3, 4);
        assert_eq!(scroll.offset, 0);
    }

    #[test]
    fn test_results_apply_resets_scroll() {
        let mut results = ResultsState::new();
        results.openapi_scroll.offset = 5;
        results.apply(artifacts("A", "B"), "http://x/swagger/1/".to_string());
        assert_eq!(results.openapi_scroll.offset, 0);
        assert!(results.has_results());
    }

    #[test]
    fn test_rendered_doc_tab_has_no_scroll() {
        let mut results = ResultsState::new();
        results.active_tab = ResultTab::RenderedDoc;
        assert!(results.active_scroll_mut().is_none());
        results.active_tab = ResultTab::ExportDoc;
        assert!(results.active_scroll_mut().is_some());
    }
}
