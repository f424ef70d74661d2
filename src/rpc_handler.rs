//! RPC method handler for the Seedbrowser host bridge.
//!
//! Extracted from `rpc_server.rs` so it can be unit-tested independently.
//! The mobile shell forwards render-surface events and user input as JSON-RPC
//! calls; `handle_method` applies them to the session and answers with the
//! render command or state the shell needs next.

use std::sync::Mutex;

use serde_json::{json, Value};

use crate::app::Session;
use crate::managers::tab_manager::TabManagerTrait;
use crate::types::overlay::PanelKind;
use crate::ui::session_view::{RenderCommand, SessionView};

/// The session plus the view state the shell renders from.
pub struct BrowserHost {
    pub session: Session,
    pub view: SessionView,
}

impl BrowserHost {
    pub fn new(session: Session) -> Self {
        Self {
            session,
            view: SessionView::new(),
        }
    }
}

fn state(session: &Session, view: &SessionView) -> Value {
    let active = session.tab_manager.active_tab();
    json!({
        "active_tab_id": active.id,
        "active_url": active.url,
        "active_title": active.title,
        "loading": active.loading,
        "error": active.error_message,
        "tab_count": session.tab_manager.tab_count(),
        "address": view.address(),
        "showing_home": view.is_showing_home(),
        "toolbar": view.toolbar(session),
        "visible_panel": session.overlay_manager.visible_panel(),
    })
}

fn str_param<'a>(params: &'a Value, key: &str) -> Result<&'a str, String> {
    params
        .get(key)
        .and_then(|v| v.as_str())
        .ok_or_else(|| format!("missing {}", key))
}

fn panel_param(params: &Value) -> Result<PanelKind, String> {
    let raw = params.get("panel").cloned().ok_or("missing panel")?;
    serde_json::from_value(raw).map_err(|e| format!("invalid panel: {}", e))
}

fn command(cmd: Option<RenderCommand>) -> Value {
    json!({ "render": cmd })
}

/// Dispatch a JSON-RPC method call to the session.
///
/// Returns `Ok(Value)` on success or `Err(String)` with an error message.
/// Requests the session ignores (closing the last tab, unknown ids) still
/// succeed with a `null` render command.
pub fn handle_method(host: &Mutex<BrowserHost>, method: &str, params: &Value) -> Result<Value, String> {
    let mut guard = host.lock().map_err(|e| e.to_string())?;
    let BrowserHost { session, view } = &mut *guard;

    match method {
        "ping" => Ok(json!({"pong": true})),

        "session.state" => Ok(state(session, view)),

        // ─── Tabs ───
        "tab.list" => Ok(json!({ "items": view.tab_switcher_items(session) })),
        "tab.open" => {
            let url = params.get("url").and_then(|v| v.as_str());
            let title = params.get("title").and_then(|v| v.as_str());
            let activate = params.get("activate").and_then(|v| v.as_bool()).unwrap_or(true);
            let (id, render) = view.open_tab(session, url, title, activate);
            Ok(json!({ "id": id, "render": render }))
        }
        "tab.open_link" => {
            let url = str_param(params, "url")?;
            Ok(json!({ "id": view.open_in_new_tab(session, url) }))
        }
        "tab.new" => Ok(command(Some(view.new_tab(session)))),
        "tab.close" => {
            let id = str_param(params, "id")?;
            Ok(command(view.close_tab(session, id)))
        }
        "tab.switch" => {
            let id = str_param(params, "id")?;
            Ok(command(view.switch_tab(session, id)))
        }

        // ─── Navigation ───
        "nav.submit" => {
            let input = str_param(params, "input")?;
            Ok(command(view.submit_address(session, input)))
        }
        "nav.open_from_home" => {
            let url = str_param(params, "url")?;
            Ok(command(view.open_from_home(session, url)))
        }
        "nav.back" => Ok(command(view.go_back(session))),
        "nav.forward" => Ok(command(view.go_forward(session))),
        "nav.reload" => Ok(command(view.reload(session))),
        "nav.home" => Ok(command(view.go_home(session))),
        "nav.retry" => Ok(command(view.retry(session))),
        "nav.history_jump" => {
            let index = params
                .get("index")
                .and_then(|v| v.as_u64())
                .ok_or("missing index")? as usize;
            Ok(command(view.go_to_history(session, index)))
        }
        "history.list" => Ok(json!({ "items": view.history_items(session) })),

        // ─── Render surface events ───
        "surface.should_load" => {
            let url = str_param(params, "url")?;
            let decision = view.should_start_load(session, url);
            serde_json::to_value(decision).map_err(|e| e.to_string())
        }
        "surface.navigate" => {
            let url = str_param(params, "url")?;
            let title = params.get("title").and_then(|v| v.as_str());
            view.on_navigate(session, url, title);
            Ok(json!({"ok": true}))
        }
        "surface.load_error" => {
            let message = str_param(params, "message")?;
            view.on_load_error(session, message);
            Ok(json!({"ok": true}))
        }
        "surface.http_error" => {
            let status = params
                .get("status")
                .and_then(|v| v.as_u64())
                .and_then(|s| u16::try_from(s).ok())
                .ok_or("missing status")?;
            view.on_http_error(session, status);
            Ok(json!({"ok": true}))
        }
        "surface.load_end" => {
            view.on_load_end(session);
            Ok(json!({"ok": true}))
        }

        // ─── Panels ───
        "panel.toggle" => {
            let kind = panel_param(params)?;
            Ok(json!({ "events": view.toggle_panel(session, kind) }))
        }
        "panel.close" => {
            let kind = panel_param(params)?;
            Ok(json!({ "closing": session.overlay_manager.close(kind) }))
        }
        "panel.drag" => {
            let kind = panel_param(params)?;
            let translation = params
                .get("translation")
                .and_then(|v| v.as_f64())
                .ok_or("missing translation")? as f32;
            Ok(json!({ "tracking": view.drag_panel(session, kind, translation) }))
        }
        "panel.release" => {
            let kind = panel_param(params)?;
            Ok(json!({ "release": view.release_panel(session, kind) }))
        }
        "panel.advance" => {
            let dt_ms = params.get("dt_ms").and_then(|v| v.as_u64()).ok_or("missing dt_ms")?;
            Ok(json!({ "events": view.advance(session, dt_ms) }))
        }
        "panel.state" => {
            let kind = panel_param(params)?;
            let panel = session.overlay_manager.panel(kind);
            let height = params.get("height").and_then(|v| v.as_f64()).unwrap_or(0.0) as f32;
            Ok(json!({
                "phase": panel.phase(),
                "drag_offset": panel.drag_offset(),
                "offset": panel.offset(height),
            }))
        }

        // ─── Downloads ───
        "download.list" => Ok(json!({ "items": session.downloads() })),

        _ => Err(format!("unknown method: {}", method)),
    }
}
