//! Session core for Seedbrowser.
//!
//! `Session` is the single owner of mutable browsing state: the tab registry,
//! the overlay panels, and the download ledger. Views receive it by reference
//! and mutate it only through these methods.

use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tokio_util::task::TaskTracker;
use uuid::Uuid;

use crate::managers::download_interceptor::DownloadInterceptor;
use crate::managers::overlay_manager::OverlayManager;
use crate::managers::tab_manager::{TabManager, TabManagerTrait};
use crate::services::settings_engine::{SettingsEngine, SettingsEngineTrait};
use crate::types::download::{DownloadEvent, DownloadItem, DownloadRequest, DownloadStatus};
use crate::types::errors::{SettingsError, TabError};
use crate::types::settings::SessionSettings;

/// A download still running, tied to the tab that started it.
struct RunningDownload {
    tab_id: String,
    token: CancellationToken,
}

pub struct Session {
    pub settings: SessionSettings,
    pub tab_manager: TabManager,
    pub overlay_manager: OverlayManager,
    interceptor: Arc<DownloadInterceptor>,
    downloads: Vec<DownloadItem>,
    running: HashMap<String, RunningDownload>,
    root_token: CancellationToken,
    tasks: TaskTracker,
    events_tx: mpsc::UnboundedSender<DownloadEvent>,
    events_rx: Option<mpsc::UnboundedReceiver<DownloadEvent>>,
}

impl Session {
    /// Creates a session with one blank tab. Downloads land in
    /// `<documents_root>/<downloads.directory_name>`.
    pub fn new(settings: SessionSettings, documents_root: &Path) -> Self {
        let tab_manager = TabManager::with_placeholders(
            &settings.general.blank_url,
            &settings.general.blank_url,
            &settings.general.new_tab_title,
        );
        let overlay_manager = OverlayManager::new(settings.overlay.clone());
        let interceptor = Arc::new(DownloadInterceptor::new(
            settings.downloads.clone(),
            documents_root,
        ));
        let (events_tx, events_rx) = mpsc::unbounded_channel();

        Self {
            settings,
            tab_manager,
            overlay_manager,
            interceptor,
            downloads: Vec::new(),
            running: HashMap::new(),
            root_token: CancellationToken::new(),
            tasks: TaskTracker::new(),
            events_tx,
            events_rx: Some(events_rx),
        }
    }

    /// Loads settings through `engine` and builds a session from them.
    pub fn from_settings_engine(
        engine: &mut SettingsEngine,
        documents_root: &Path,
    ) -> Result<Self, SettingsError> {
        let settings = engine.load()?;
        Ok(Self::new(settings, documents_root))
    }

    fn now() -> i64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs() as i64
    }

    pub fn interceptor(&self) -> &DownloadInterceptor {
        &self.interceptor
    }

    /// Hands out the receiving end of the download event channel, once.
    pub fn take_download_events(&mut self) -> Option<mpsc::UnboundedReceiver<DownloadEvent>> {
        self.events_rx.take()
    }

    /// Whether `url` should be captured as a download instead of rendered.
    pub fn should_intercept(&self, url: &str) -> bool {
        self.interceptor.matches(url)
    }

    /// Starts the download pipeline for `url` on behalf of `tab_id`.
    ///
    /// Returns the download id immediately; completion arrives as a
    /// [`DownloadEvent`]. Must be called from within a Tokio runtime,
    /// otherwise the download fails straight away.
    pub fn start_download(&mut self, tab_id: &str, url: &str, page_title: Option<&str>) -> String {
        let id = Uuid::new_v4().to_string();
        let token = self.root_token.child_token();

        self.downloads.insert(
            0,
            DownloadItem {
                id: id.clone(),
                url: url.to_string(),
                tab_id: tab_id.to_string(),
                filepath: None,
                status: DownloadStatus::InProgress,
                started_at: Self::now(),
                completed_at: None,
            },
        );
        let _ = self.events_tx.send(DownloadEvent::Started {
            id: id.clone(),
            url: url.to_string(),
        });

        let handle = match tokio::runtime::Handle::try_current() {
            Ok(handle) => handle,
            Err(e) => {
                tracing::warn!(%url, error = %e, "no async runtime for download");
                let _ = self.events_tx.send(DownloadEvent::Failed {
                    id: id.clone(),
                    url: url.to_string(),
                    reason: "Download could not be started".to_string(),
                });
                return id;
            }
        };

        self.running.insert(
            id.clone(),
            RunningDownload {
                tab_id: tab_id.to_string(),
                token: token.clone(),
            },
        );

        let request = DownloadRequest {
            url: url.to_string(),
            page_title: page_title.map(str::to_string),
        };
        let interceptor = Arc::clone(&self.interceptor);
        let tx = self.events_tx.clone();
        let task_id = id.clone();
        tracing::info!(download_id = %id, %url, "download intercepted");

        self.tasks.spawn_on(
            async move {
                let event = match interceptor.download(&request, &token).await {
                    Ok(path) => DownloadEvent::Completed {
                        id: task_id,
                        url: request.url,
                        path,
                    },
                    Err(e) => {
                        tracing::warn!(download_id = %task_id, url = %request.url, error = %e, "download failed");
                        DownloadEvent::Failed {
                            id: task_id,
                            url: request.url,
                            reason: e.to_string(),
                        }
                    }
                };
                let _ = tx.send(event);
            },
            &handle,
        );

        id
    }

    /// Folds a download event into the ledger. The host calls this for each
    /// event it drains from the channel.
    pub fn record_download_event(&mut self, event: &DownloadEvent) {
        let Some(item) = self.downloads.iter_mut().find(|d| d.id == event.id()) else {
            return;
        };
        match event {
            DownloadEvent::Started { .. } => {}
            DownloadEvent::Completed { path, .. } => {
                item.status = DownloadStatus::Completed;
                item.filepath = Some(path.clone());
                item.completed_at = Some(Self::now());
                self.running.remove(event.id());
            }
            DownloadEvent::Failed { reason, .. } => {
                item.status = DownloadStatus::Failed(reason.clone());
                item.completed_at = Some(Self::now());
                self.running.remove(event.id());
            }
        }
    }

    pub fn downloads(&self) -> &[DownloadItem] {
        &self.downloads
    }

    /// Number of downloads whose task has not reported back yet.
    pub fn running_downloads(&self) -> usize {
        self.running.len()
    }

    /// Cancels every running download started from `tab_id`.
    pub fn cancel_downloads_for_tab(&mut self, tab_id: &str) -> usize {
        let mut cancelled = 0;
        for running in self.running.values().filter(|r| r.tab_id == tab_id) {
            running.token.cancel();
            cancelled += 1;
        }
        cancelled
    }

    /// Closes a tab and cancels the downloads it started.
    pub fn close_tab(&mut self, tab_id: &str) -> Result<(), TabError> {
        self.tab_manager.close_tab(tab_id)?;
        let cancelled = self.cancel_downloads_for_tab(tab_id);
        if cancelled > 0 {
            tracing::info!(%tab_id, cancelled, "cancelled downloads of closed tab");
        }
        Ok(())
    }

    /// Cancels all running downloads. The session stays usable for tab
    /// operations, but downloads started afterwards are cancelled at once.
    ///
    /// Await [`Session::download_tasks`] afterwards, before the runtime is
    /// dropped, so cancelled transfers get to remove their partial files.
    pub fn shutdown(&mut self) {
        tracing::info!(running = self.running.len(), "session shutting down");
        self.root_token.cancel();
        self.tasks.close();
    }

    /// Tracker of every spawned download task.
    pub fn download_tasks(&self) -> TaskTracker {
        self.tasks.clone()
    }
}
