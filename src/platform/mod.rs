// Seedbrowser platform abstraction
// Provides the settings location and the document storage root that the
// download directory lives under.
//
// Desktop targets resolve conventional per-OS paths. Mobile hosts run the
// core inside an app sandbox and hand their directories in through
// `SEEDBROWSER_CONFIG_DIR` / `SEEDBROWSER_DOCUMENTS_DIR`, which take
// precedence everywhere.

use std::env;
use std::path::PathBuf;

#[cfg(target_os = "linux")]
mod linux;

#[cfg(target_os = "macos")]
mod macos;

#[cfg(target_os = "windows")]
mod windows;

/// Environment variable overriding the config directory.
pub const CONFIG_DIR_ENV: &str = "SEEDBROWSER_CONFIG_DIR";

/// Environment variable overriding the document storage root.
pub const DOCUMENTS_DIR_ENV: &str = "SEEDBROWSER_DOCUMENTS_DIR";

fn env_override(name: &str) -> Option<PathBuf> {
    env::var(name)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .map(PathBuf::from)
}

/// Returns the directory holding `settings.json`.
///
/// - **Linux**: `$XDG_CONFIG_HOME/seedbrowser` or `~/.config/seedbrowser`
/// - **macOS**: `~/Library/Application Support/Seedbrowser`
/// - **Windows**: `%APPDATA%/Seedbrowser`
/// - **Other**: `./seedbrowser/config`
pub fn get_config_dir() -> PathBuf {
    if let Some(dir) = env_override(CONFIG_DIR_ENV) {
        return dir;
    }
    #[cfg(target_os = "linux")]
    {
        linux::get_config_dir()
    }
    #[cfg(target_os = "macos")]
    {
        macos::get_config_dir()
    }
    #[cfg(target_os = "windows")]
    {
        windows::get_config_dir()
    }
    #[cfg(not(any(target_os = "linux", target_os = "macos", target_os = "windows")))]
    {
        PathBuf::from("seedbrowser").join("config")
    }
}

/// Returns the application's document storage root.
///
/// - **Linux**: `$XDG_DATA_HOME/seedbrowser` or `~/.local/share/seedbrowser`
/// - **macOS**: `~/Documents/Seedbrowser`
/// - **Windows**: `%USERPROFILE%/Documents/Seedbrowser`
/// - **Other**: `./seedbrowser/documents`
pub fn get_documents_dir() -> PathBuf {
    if let Some(dir) = env_override(DOCUMENTS_DIR_ENV) {
        return dir;
    }
    #[cfg(target_os = "linux")]
    {
        linux::get_documents_dir()
    }
    #[cfg(target_os = "macos")]
    {
        macos::get_documents_dir()
    }
    #[cfg(target_os = "windows")]
    {
        windows::get_documents_dir()
    }
    #[cfg(not(any(target_os = "linux", target_os = "macos", target_os = "windows")))]
    {
        PathBuf::from("seedbrowser").join("documents")
    }
}
