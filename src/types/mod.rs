// Seedbrowser shared type definitions
// Each submodule defines types used across the application.

pub mod download;
pub mod errors;
pub mod history;
pub mod overlay;
pub mod settings;
pub mod tab;
