//! Terminal lifecycle helpers

/// Install a panic hook that restores the terminal before the panic is
/// reported, so a crash never leaves the shell in raw mode.
pub fn install_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        ratatui::restore();
        original_hook(panic_info);
    }));
}
