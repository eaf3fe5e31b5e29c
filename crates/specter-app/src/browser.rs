//! System browser hand-off for the rendered documentation page.
//!
//! The opener is spawned detached and never waited on; failures are
//! reported to the caller and logged there.

use std::io;
use std::path::PathBuf;
use std::process::Command;

/// Launch the platform browser opener with the given URL.
#[cfg(target_os = "windows")]
pub fn open_in_browser(url: &str) -> io::Result<()> {
    // `start` is a cmd.exe builtin; the empty string is the window title.
    Command::new("cmd").args(["/C", "start", "", url]).spawn()?;
    Ok(())
}

/// Launch the platform browser opener with the given URL.
#[cfg(not(target_os = "windows"))]
pub fn open_in_browser(url: &str) -> io::Result<()> {
    let opener = resolve_opener()?;
    Command::new(opener).arg(url).spawn()?;
    Ok(())
}

#[cfg(target_os = "macos")]
fn resolve_opener() -> io::Result<PathBuf> {
    resolve("open")
}

#[cfg(all(unix, not(target_os = "macos")))]
fn resolve_opener() -> io::Result<PathBuf> {
    resolve("xdg-open")
}

#[cfg(not(target_os = "windows"))]
fn resolve(name: &str) -> io::Result<PathBuf> {
    which::which(name).map_err(|e| io::Error::other(format!("{name} not found: {e}")))
}
