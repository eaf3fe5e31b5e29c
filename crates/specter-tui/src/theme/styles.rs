//! Semantic style builders for the terminal theme.

use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders};

use specter_app::state::RequestPhase;

use super::palette;

// --- Text styles ---
pub fn text_primary() -> Style {
    Style::default().fg(palette::TEXT_PRIMARY)
}

pub fn text_secondary() -> Style {
    Style::default().fg(palette::TEXT_SECONDARY)
}

pub fn text_muted() -> Style {
    Style::default().fg(palette::TEXT_MUTED)
}

pub fn text_bright() -> Style {
    Style::default().fg(palette::TEXT_BRIGHT)
}

// --- Border styles ---
pub fn border_inactive() -> Style {
    Style::default().fg(palette::BORDER_DIM)
}

pub fn border_active() -> Style {
    Style::default().fg(palette::BORDER_ACTIVE)
}

// --- Accent styles ---
pub fn accent() -> Style {
    Style::default().fg(palette::ACCENT)
}

pub fn accent_bold() -> Style {
    Style::default()
        .fg(palette::ACCENT)
        .add_modifier(Modifier::BOLD)
}

// --- Status styles ---
pub fn status_green() -> Style {
    Style::default().fg(palette::STATUS_GREEN)
}

pub fn status_red() -> Style {
    Style::default().fg(palette::STATUS_RED)
}

pub fn status_yellow() -> Style {
    Style::default().fg(palette::STATUS_YELLOW)
}

// --- Keybinding hint style ---
pub fn keybinding() -> Style {
    Style::default().fg(palette::STATUS_YELLOW)
}

/// Style for the generate key hint.
///
/// Dimmed while a request is in flight so the chord reads as unavailable.
pub fn generate_hint(available: bool) -> Style {
    if available {
        keybinding()
    } else {
        text_muted()
    }
}

/// "Black on Cyan" - used for focused+selected items across widgets
pub fn focused_selected() -> Style {
    Style::default()
        .fg(palette::CONTRAST_FG)
        .bg(palette::ACCENT)
        .add_modifier(Modifier::BOLD)
}

// --- Block builders ---
pub fn glass_block(focused: bool) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(if focused {
            border_active()
        } else {
            border_inactive()
        })
}

pub fn modal_block(title: &str) -> Block<'_> {
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(border_inactive())
        .style(Style::default().bg(palette::POPUP_BG))
}

// --- Request phase indicator mapping ---

/// Indicator for the status bar request display.
///
/// Returns `(icon_char, label, Style)` for the given request phase. The
/// label for an in-flight request is a placeholder; the status bar swaps
/// in the rotating busy phrase.
pub fn phase_indicator(phase: &RequestPhase) -> (&'static str, &'static str, Style) {
    match phase {
        RequestPhase::Idle => ("○", "Idle", text_muted()),
        RequestPhase::Requesting { .. } => (
            "↻",
            "Generating",
            status_yellow().add_modifier(Modifier::BOLD),
        ),
        RequestPhase::Succeeded => (
            "●",
            "Generated",
            status_green().add_modifier(Modifier::BOLD),
        ),
        RequestPhase::Failed => ("✗", "Failed", status_red().add_modifier(Modifier::BOLD)),
    }
}
