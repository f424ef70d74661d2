//! Seedbrowser RPC server, JSON-RPC over stdin/stdout for the mobile shell.
//!
//! Protocol: one JSON object per line (newline-delimited JSON).
//! Request:  {"id":1, "method":"surface.navigate", "params":{"url":"...","title":"..."}}
//! Response: {"id":1, "result":{...}} or {"id":1, "error":"..."}
//! Download completions are pushed unsolicited as
//! {"event":"download", "kind":"completed"|"failed"|"started", ...}.

use std::io::{self, Write};
use std::sync::Mutex;
use std::time::Duration;

use serde_json::{json, Value};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::EnvFilter;

use seedbrowser::app::Session;
use seedbrowser::platform;
use seedbrowser::rpc_handler::{handle_method, BrowserHost};
use seedbrowser::services::settings_engine::SettingsEngine;

const SHUTDOWN_GRACE: Duration = Duration::from_secs(5);

fn emit(value: &Value) {
    let mut stdout = io::stdout().lock();
    let _ = writeln!(stdout, "{}", value);
    let _ = stdout.flush();
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(io::stderr)
        .init();

    let config_override = std::env::var("SEEDBROWSER_SETTINGS").ok();
    let mut engine = SettingsEngine::new(config_override);
    let mut session = match Session::from_settings_engine(&mut engine, &platform::get_documents_dir()) {
        Ok(session) => session,
        Err(e) => {
            tracing::error!(error = %e, "failed to load settings");
            emit(&json!({"event":"fatal","error":e.to_string()}));
            return;
        }
    };
    let Some(mut download_events) = session.take_download_events() else {
        return;
    };
    let host = Mutex::new(BrowserHost::new(session));

    emit(&json!({"event":"ready","version":env!("CARGO_PKG_VERSION")}));

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        tokio::select! {
            Some(event) = download_events.recv() => {
                if let Ok(mut h) = host.lock() {
                    h.session.record_download_event(&event);
                }
                let mut payload = serde_json::to_value(&event).unwrap_or(Value::Null);
                if let Value::Object(map) = &mut payload {
                    map.insert("event".to_string(), json!("download"));
                }
                emit(&payload);
            }
            line = lines.next_line() => {
                let line = match line {
                    Ok(Some(l)) => l,
                    Ok(None) | Err(_) => break,
                };
                if line.trim().is_empty() {
                    continue;
                }

                let req: Value = match serde_json::from_str(&line) {
                    Ok(v) => v,
                    Err(e) => {
                        emit(&json!({"id":null,"error":format!("parse error: {}", e)}));
                        continue;
                    }
                };

                let id = req.get("id").cloned().unwrap_or(Value::Null);
                let method = req.get("method").and_then(|v| v.as_str()).unwrap_or("");
                let params = req.get("params").cloned().unwrap_or(json!({}));

                let response = match handle_method(&host, method, &params) {
                    Ok(val) => json!({"id": id, "result": val}),
                    Err(err) => json!({"id": id, "error": err}),
                };
                emit(&response);
            }
        }
    }

    let tasks = match host.lock() {
        Ok(mut h) => {
            h.session.shutdown();
            h.session.download_tasks()
        }
        Err(_) => return,
    };
    // cancelled transfers still need the runtime to remove their partial files
    if tokio::time::timeout(SHUTDOWN_GRACE, tasks.wait()).await.is_err() {
        tracing::warn!(pending = tasks.len(), "downloads still running at exit");
    }
}
