// Seedbrowser platform paths for macOS
// Config:    ~/Library/Application Support/Seedbrowser
// Documents: ~/Documents/Seedbrowser

use std::env;
use std::path::PathBuf;

fn home_dir() -> PathBuf {
    PathBuf::from(env::var("HOME").unwrap_or_else(|_| String::from("/tmp")))
}

pub fn get_config_dir() -> PathBuf {
    home_dir()
        .join("Library")
        .join("Application Support")
        .join("Seedbrowser")
}

pub fn get_documents_dir() -> PathBuf {
    home_dir().join("Documents").join("Seedbrowser")
}
