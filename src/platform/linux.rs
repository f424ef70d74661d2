// Seedbrowser platform paths for Linux
// Config:    ~/.config/seedbrowser
// Documents: ~/.local/share/seedbrowser

use std::env;
use std::path::PathBuf;

fn home() -> String {
    env::var("HOME").unwrap_or_else(|_| String::from("/tmp"))
}

/// Resolves the config directory from an optional `XDG_CONFIG_HOME` and a home dir.
fn config_dir_from(xdg: Option<String>, home: &str) -> PathBuf {
    match xdg {
        Some(xdg) => PathBuf::from(xdg).join("seedbrowser"),
        None => PathBuf::from(home).join(".config").join("seedbrowser"),
    }
}

/// Resolves the documents root from an optional `XDG_DATA_HOME` and a home dir.
fn documents_dir_from(xdg: Option<String>, home: &str) -> PathBuf {
    match xdg {
        Some(xdg) => PathBuf::from(xdg).join("seedbrowser"),
        None => PathBuf::from(home)
            .join(".local")
            .join("share")
            .join("seedbrowser"),
    }
}

pub fn get_config_dir() -> PathBuf {
    config_dir_from(env::var("XDG_CONFIG_HOME").ok(), &home())
}

pub fn get_documents_dir() -> PathBuf {
    documents_dir_from(env::var("XDG_DATA_HOME").ok(), &home())
}
