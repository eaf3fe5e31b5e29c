//! Custom widget components
//!
//! Widgets are lightweight structs borrowing state from specter-app;
//! all of them render in a single pass with no internal state of their
//! own beyond what `AppState` carries.

mod confirm_dialog;
mod docs_viewer;
mod editor_pane;
mod header;
mod log_panel;
mod result_tabs;
mod status_bar;
mod text_viewer;

pub use confirm_dialog::ConfirmDialog;
pub use docs_viewer::DocsViewer;
pub use editor_pane::EditorPane;
pub use header::HeaderBar;
pub use log_panel::LogPanel;
pub use result_tabs::ResultTabs;
pub use status_bar::StatusBar;
pub use text_viewer::TextViewer;
