// Seedbrowser services
// Stateless helpers and configuration loading used by the managers.

pub mod filename_resolver;
pub mod settings_engine;
