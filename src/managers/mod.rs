// Seedbrowser state managers
// Managers own the stateful parts of a session: tabs, their navigation
// history, overlay panels, and download interception.

pub mod download_interceptor;
pub mod navigation_history;
pub mod overlay_manager;
pub mod tab_manager;
