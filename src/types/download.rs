use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Status of an intercepted download.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum DownloadStatus {
    InProgress,
    Completed,
    Failed(String),
}

/// Ledger entry for a download intercepted during this session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DownloadItem {
    pub id: String,
    pub url: String,
    /// Tab whose navigation was intercepted.
    pub tab_id: String,
    pub filepath: Option<PathBuf>,
    pub status: DownloadStatus,
    pub started_at: i64,
    pub completed_at: Option<i64>,
}

/// A navigation captured for the download pipeline.
#[derive(Debug, Clone, PartialEq)]
pub struct DownloadRequest {
    pub url: String,
    /// Title of the page the request came from, used to name the file.
    pub page_title: Option<String>,
}

/// Completion notifications for the host, delivered over the session channel.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DownloadEvent {
    Started { id: String, url: String },
    Completed { id: String, url: String, path: PathBuf },
    /// One-shot user-visible alert; `reason` is human-readable.
    Failed { id: String, url: String, reason: String },
}

impl DownloadEvent {
    pub fn id(&self) -> &str {
        match self {
            DownloadEvent::Started { id, .. }
            | DownloadEvent::Completed { id, .. }
            | DownloadEvent::Failed { id, .. } => id,
        }
    }
}
