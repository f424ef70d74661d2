use std::fmt;

// === TabError ===

/// Errors related to tab registry operations.
///
/// Every variant describes a request that left the registry untouched.
/// The session view treats them as ignored input rather than user-facing faults.
#[derive(Debug, Clone, PartialEq)]
pub enum TabError {
    /// Tab with the given ID was not found.
    NotFound(String),
    /// The only remaining tab cannot be closed.
    LastTab,
    /// The requested history position does not exist in the tab.
    InvalidHistoryIndex(usize),
}

impl fmt::Display for TabError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TabError::NotFound(id) => write!(f, "Tab not found: {}", id),
            TabError::LastTab => write!(f, "Cannot close the last remaining tab"),
            TabError::InvalidHistoryIndex(index) => {
                write!(f, "Invalid history index: {}", index)
            }
        }
    }
}

impl std::error::Error for TabError {}

// === DownloadError ===

/// Errors raised by the download interception pipeline.
///
/// All variants surface to the user as one "download failed" alert; the
/// `Display` text is the human-readable reason shown in it.
#[derive(Debug, Clone, PartialEq)]
pub enum DownloadError {
    /// The metadata probe or body transfer failed on the network.
    NetworkError(String),
    /// Creating the directory or writing the file failed.
    FileSystemError(String),
    /// The resolved filename does not carry the allowed extension.
    RejectedExtension(String),
    /// The download was cancelled before it finished.
    Cancelled,
}

impl fmt::Display for DownloadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DownloadError::NetworkError(msg) => write!(f, "Download network error: {}", msg),
            DownloadError::FileSystemError(msg) => {
                write!(f, "Download file system error: {}", msg)
            }
            DownloadError::RejectedExtension(name) => {
                write!(f, "Download rejected, unsupported file type: {}", name)
            }
            DownloadError::Cancelled => write!(f, "Download cancelled"),
        }
    }
}

impl std::error::Error for DownloadError {}

// === SettingsError ===

/// Errors related to settings management.
#[derive(Debug)]
pub enum SettingsError {
    /// An I/O error occurred while reading or writing settings.
    IoError(String),
    /// Failed to serialize or deserialize settings.
    SerializationError(String),
    /// The provided settings key is invalid.
    InvalidKey(String),
    /// The provided settings value is invalid.
    InvalidValue(String),
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingsError::IoError(msg) => write!(f, "Settings I/O error: {}", msg),
            SettingsError::SerializationError(msg) => {
                write!(f, "Settings serialization error: {}", msg)
            }
            SettingsError::InvalidKey(key) => write!(f, "Invalid settings key: {}", key),
            SettingsError::InvalidValue(msg) => {
                write!(f, "Invalid settings value: {}", msg)
            }
        }
    }
}

impl std::error::Error for SettingsError {}
