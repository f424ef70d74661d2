// Seedbrowser view layer
// Glue between the host's render surface and the session core.

pub mod session_view;
