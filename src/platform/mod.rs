// Linkstash platform abstraction
// Provides the platform-specific data directory where the state file lives.
//
// Uses `cfg(target_os)` for conditional compilation to select the correct
// platform-specific implementation at compile time.

use std::path::PathBuf;

#[cfg(target_os = "linux")]
mod linux;

#[cfg(target_os = "macos")]
mod macos;

#[cfg(target_os = "windows")]
mod windows;

/// Returns the platform-specific data directory for Linkstash.
///
/// - **Linux**: `~/.local/share/linkstash` (or `$XDG_DATA_HOME/linkstash`)
/// - **macOS**: `~/Library/Application Support/Linkstash`
/// - **Windows**: `%APPDATA%/Linkstash`
pub fn get_data_dir() -> PathBuf {
    #[cfg(target_os = "linux")]
    {
        linux::get_data_dir()
    }
    #[cfg(target_os = "macos")]
    {
        macos::get_data_dir()
    }
    #[cfg(target_os = "windows")]
    {
        windows::get_data_dir()
    }
}
