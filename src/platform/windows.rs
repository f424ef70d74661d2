// Seedbrowser platform paths for Windows
// Config:    %APPDATA%/Seedbrowser
// Documents: %USERPROFILE%/Documents/Seedbrowser

use std::env;
use std::path::PathBuf;

pub fn get_config_dir() -> PathBuf {
    let appdata = env::var("APPDATA")
        .unwrap_or_else(|_| String::from("C:\\Users\\Default\\AppData\\Roaming"));
    PathBuf::from(appdata).join("Seedbrowser")
}

pub fn get_documents_dir() -> PathBuf {
    let profile =
        env::var("USERPROFILE").unwrap_or_else(|_| String::from("C:\\Users\\Default"));
    PathBuf::from(profile).join("Documents").join("Seedbrowser")
}
