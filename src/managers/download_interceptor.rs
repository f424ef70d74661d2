//! Download interception for the browsing session.
//!
//! Every URL the render surface is about to load is checked against the
//! configured download roots. A match skips rendering and runs the
//! probe → name → validate → transfer pipeline into the download directory.
//! Failures are reported once and never retried.

use std::path::{Path, PathBuf};

use futures_util::StreamExt;
use reqwest::header::CONTENT_DISPOSITION;
use reqwest::Client;
use tokio::io::AsyncWriteExt;
use tokio_util::sync::CancellationToken;
use uuid::Uuid;

use crate::services::filename_resolver::{has_allowed_extension, resolve_filename, FilenameSources};
use crate::types::download::DownloadRequest;
use crate::types::errors::DownloadError;
use crate::types::settings::DownloadSettings;

pub struct DownloadInterceptor {
    client: Client,
    settings: DownloadSettings,
    target_dir: PathBuf,
}

impl DownloadInterceptor {
    /// Creates an interceptor saving into `<documents_root>/<directory_name>`.
    pub fn new(settings: DownloadSettings, documents_root: &Path) -> Self {
        let client = Client::builder()
            .user_agent(settings.user_agent.clone())
            .build()
            .unwrap_or_else(|e| {
                tracing::warn!(error = %e, "falling back to default HTTP client");
                Client::new()
            });
        let target_dir = documents_root.join(&settings.directory_name);
        Self {
            client,
            settings,
            target_dir,
        }
    }

    /// Exact, case-sensitive prefix match against the configured download roots.
    pub fn matches(&self, url: &str) -> bool {
        self.settings
            .intercept_prefixes
            .iter()
            .any(|prefix| !prefix.is_empty() && url.starts_with(prefix.as_str()))
    }

    pub fn target_dir(&self) -> &Path {
        &self.target_dir
    }

    pub fn settings(&self) -> &DownloadSettings {
        &self.settings
    }

    /// Runs the full pipeline and returns the saved file's path.
    ///
    /// The body is written to `<name>.<uuid>.part` and renamed once complete; any
    /// failure or cancellation removes the partial file.
    pub async fn download(
        &self,
        request: &DownloadRequest,
        cancel: &CancellationToken,
    ) -> Result<PathBuf, DownloadError> {
        tokio::fs::create_dir_all(&self.target_dir)
            .await
            .map_err(|e| {
                DownloadError::FileSystemError(format!("Failed to create download directory: {}", e))
            })?;

        let disposition = tokio::select! {
            biased;
            _ = cancel.cancelled() => return Err(DownloadError::Cancelled),
            probed = self.probe(&request.url) => probed?,
        };

        let filename = resolve_filename(
            FilenameSources {
                content_disposition: disposition.as_deref(),
                page_title: request.page_title.as_deref(),
                url: &request.url,
            },
            &self.settings.allowed_extension,
            &self.settings.default_filename,
        );

        if !has_allowed_extension(&filename, &self.settings.allowed_extension) {
            tracing::warn!(url = %request.url, %filename, "rejected download by extension");
            return Err(DownloadError::RejectedExtension(filename));
        }

        let final_path = self.target_dir.join(&filename);
        // unique per transfer so same-name downloads never share a partial file
        let part_path = self
            .target_dir
            .join(format!("{}.{}.part", filename, Uuid::new_v4().simple()));

        match self.transfer(&request.url, &part_path, cancel).await {
            Ok(bytes) => {
                tokio::fs::rename(&part_path, &final_path).await.map_err(|e| {
                    DownloadError::FileSystemError(format!("Failed to finalize file: {}", e))
                })?;
                tracing::info!(url = %request.url, path = %final_path.display(), bytes, "download saved");
                Ok(final_path)
            }
            Err(e) => {
                let _ = tokio::fs::remove_file(&part_path).await;
                Err(e)
            }
        }
    }

    /// Header-only request returning the `Content-Disposition` value, if any.
    async fn probe(&self, url: &str) -> Result<Option<String>, DownloadError> {
        let response = self
            .client
            .head(url)
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(|e| DownloadError::NetworkError(format!("Metadata request failed: {}", e)))?;

        Ok(response
            .headers()
            .get(CONTENT_DISPOSITION)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string))
    }

    /// Streams the body of `url` into `path`, returning the byte count.
    async fn transfer(
        &self,
        url: &str,
        path: &Path,
        cancel: &CancellationToken,
    ) -> Result<u64, DownloadError> {
        let response = tokio::select! {
            biased;
            _ = cancel.cancelled() => return Err(DownloadError::Cancelled),
            sent = self.client.get(url).send() => sent
                .and_then(|r| r.error_for_status())
                .map_err(|e| DownloadError::NetworkError(format!("Transfer request failed: {}", e)))?,
        };

        let mut file = tokio::fs::File::create(path).await.map_err(|e| {
            DownloadError::FileSystemError(format!("Failed to create file: {}", e))
        })?;

        let mut stream = response.bytes_stream();
        let mut written: u64 = 0;
        loop {
            let next = tokio::select! {
                biased;
                _ = cancel.cancelled() => return Err(DownloadError::Cancelled),
                next = stream.next() => next,
            };
            match next {
                Some(Ok(chunk)) => {
                    file.write_all(&chunk).await.map_err(|e| {
                        DownloadError::FileSystemError(format!("Failed to write file: {}", e))
                    })?;
                    written += chunk.len() as u64;
                }
                Some(Err(e)) => {
                    return Err(DownloadError::NetworkError(format!("Transfer interrupted: {}", e)))
                }
                None => break,
            }
        }

        file.flush().await.map_err(|e| {
            DownloadError::FileSystemError(format!("Failed to flush file: {}", e))
        })?;
        Ok(written)
    }
}
