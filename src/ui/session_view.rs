//! Session view: the address bar, render surface and bottom toolbar.
//!
//! Forwards render-surface lifecycle events into the session and turns user
//! input into [`RenderCommand`]s for the host to execute. It keeps only
//! view state of its own; tab and panel state live in [`Session`].

use serde::Serialize;

use crate::app::Session;
use crate::managers::tab_manager::TabManagerTrait;
use crate::types::overlay::{DragRelease, PanelEvent, PanelKind};

/// Instruction for the render surface.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "command", content = "url", rename_all = "snake_case")]
pub enum RenderCommand {
    Load(String),
    Reload(String),
    ShowHome,
}

/// Answer to the render surface asking whether to load a URL.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "decision", rename_all = "snake_case")]
pub enum NavigationDecision {
    Proceed,
    Intercepted { download_id: String },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ToolbarState {
    pub can_go_back: bool,
    pub can_go_forward: bool,
    pub can_reload: bool,
    pub can_go_home: bool,
    pub show_retry: bool,
}

/// Row in the tab switcher panel.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TabListItem {
    pub id: String,
    pub title: String,
    pub url: String,
    pub active: bool,
    pub has_error: bool,
}

/// Row in the history panel.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HistoryListItem {
    pub index: usize,
    pub url: String,
    pub title: Option<String>,
    pub current: bool,
}

/// Turns address-bar input into a location. Bare hosts get `https://`.
pub fn normalize_address(input: &str) -> Option<String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return None;
    }
    if trimmed.contains("://") || trimmed.starts_with("about:") || trimmed.contains(char::is_whitespace) {
        return Some(trimmed.to_string());
    }
    Some(format!("https://{}", trimmed))
}

/// Whether `home_url` names the built-in home screen rather than a page.
fn is_home_screen(home_url: &str) -> bool {
    home_url.starts_with("about:")
}

#[derive(Debug, Clone)]
pub struct SessionView {
    address: String,
    showing_home: bool,
    /// (tab id, url) of a load we started from existing history, so its
    /// `on_navigate` must not push a new entry.
    pending_traversal: Option<(String, String)>,
}

impl Default for SessionView {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionView {
    pub fn new() -> Self {
        Self {
            address: String::new(),
            showing_home: true,
            pending_traversal: None,
        }
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn is_showing_home(&self) -> bool {
        self.showing_home
    }

    pub fn set_address_text(&mut self, text: &str) {
        self.address = text.to_string();
    }

    fn expect_traversal(&mut self, session: &Session, url: &str) {
        self.pending_traversal = Some((
            session.tab_manager.active_tab_id().to_string(),
            url.to_string(),
        ));
    }

    fn load_active(&mut self, session: &mut Session, url: String) -> RenderCommand {
        let active = session.tab_manager.active_tab_id().to_string();
        let _ = session.tab_manager.set_loading(&active, true);
        self.address = url.clone();
        self.showing_home = false;
        RenderCommand::Load(url)
    }

    /// Address bar "Go". From the home screen this opens a new tab.
    pub fn submit_address(&mut self, session: &mut Session, input: &str) -> Option<RenderCommand> {
        let url = normalize_address(input)?;
        if self.showing_home {
            return self.open_from_home(session, &url);
        }
        if session.should_intercept(&url) {
            self.start_active_download(session, &url);
            return None;
        }
        Some(self.load_active(session, url))
    }

    /// Home-screen tile or URL submit. An untouched blank active tab is
    /// navigated in place; otherwise a new active tab is opened at `url`.
    pub fn open_from_home(&mut self, session: &mut Session, url: &str) -> Option<RenderCommand> {
        if session.should_intercept(url) {
            self.start_active_download(session, url);
            return None;
        }
        if !session.tab_manager.seed_active(url) {
            session.tab_manager.open_tab(Some(url), None, true);
        }
        self.expect_traversal(session, url);
        Some(self.load_active(session, url.to_string()))
    }

    /// Opens a link in a new tab without leaving the current one.
    pub fn open_in_new_tab(&mut self, session: &mut Session, url: &str) -> String {
        session.tab_manager.open_tab(Some(url), None, false)
    }

    /// Opens a tab; when `activate` is set the surface moves to it.
    pub fn open_tab(
        &mut self,
        session: &mut Session,
        url: Option<&str>,
        title: Option<&str>,
        activate: bool,
    ) -> (String, Option<RenderCommand>) {
        let id = session.tab_manager.open_tab(url, title, activate);
        if !activate {
            return (id, None);
        }
        let command = self.show_active(session);
        (id, command)
    }

    /// New-tab button: a blank active tab showing the home screen.
    pub fn new_tab(&mut self, session: &mut Session) -> RenderCommand {
        session.tab_manager.open_tab(None, None, true);
        self.pending_traversal = None;
        self.address.clear();
        self.showing_home = true;
        RenderCommand::ShowHome
    }

    /// Closes a tab. Reloads the surface when activation moved.
    pub fn close_tab(&mut self, session: &mut Session, tab_id: &str) -> Option<RenderCommand> {
        let was_active = session.tab_manager.active_tab_id() == tab_id;
        if let Err(e) = session.close_tab(tab_id) {
            tracing::debug!(%tab_id, error = %e, "ignored close");
            return None;
        }
        if !was_active {
            return None;
        }
        self.show_active(session)
    }

    /// Switches to a tab, e.g. from the tab switcher, and closes the panel.
    pub fn switch_tab(&mut self, session: &mut Session, tab_id: &str) -> Option<RenderCommand> {
        if let Err(e) = session.tab_manager.switch_tab(tab_id) {
            tracing::debug!(%tab_id, error = %e, "ignored switch");
            return None;
        }
        session.overlay_manager.close(PanelKind::TabSwitcher);
        self.show_active(session)
    }

    fn show_active(&mut self, session: &mut Session) -> Option<RenderCommand> {
        let url = session.tab_manager.active_tab().url.clone();
        let general = &session.settings.general;
        if url == general.blank_url || (url == general.home_url && is_home_screen(&url)) {
            self.pending_traversal = None;
            self.address.clear();
            self.showing_home = true;
            return Some(RenderCommand::ShowHome);
        }
        self.expect_traversal(session, &url);
        Some(self.load_active(session, url))
    }

    pub fn go_back(&mut self, session: &mut Session) -> Option<RenderCommand> {
        if self.showing_home {
            return None;
        }
        let url = session.tab_manager.go_back()?;
        self.expect_traversal(session, &url);
        Some(self.load_active(session, url))
    }

    pub fn go_forward(&mut self, session: &mut Session) -> Option<RenderCommand> {
        if self.showing_home {
            return None;
        }
        let url = session.tab_manager.go_forward()?;
        self.expect_traversal(session, &url);
        Some(self.load_active(session, url))
    }

    /// History panel selection.
    pub fn go_to_history(&mut self, session: &mut Session, index: usize) -> Option<RenderCommand> {
        let url = match session.tab_manager.go_to_history(index) {
            Ok(url) => url,
            Err(e) => {
                tracing::debug!(index, error = %e, "ignored history jump");
                return None;
            }
        };
        session.overlay_manager.close(PanelKind::History);
        self.expect_traversal(session, &url);
        Some(self.load_active(session, url))
    }

    pub fn reload(&mut self, session: &mut Session) -> Option<RenderCommand> {
        if self.showing_home {
            return None;
        }
        let url = session.tab_manager.active_tab().url.clone();
        self.expect_traversal(session, &url);
        let active = session.tab_manager.active_tab_id().to_string();
        let _ = session.tab_manager.set_loading(&active, true);
        Some(RenderCommand::Reload(url))
    }

    /// Home button. A built-in `about:` home shows the home screen; any
    /// other configured home is loaded as a page.
    pub fn go_home(&mut self, session: &mut Session) -> Option<RenderCommand> {
        let home = session.settings.general.home_url.clone();
        if !is_home_screen(&home) {
            if self.showing_home {
                return self.open_from_home(session, &home);
            }
            return Some(self.load_active(session, home));
        }
        if self.showing_home {
            return None;
        }
        self.showing_home = true;
        self.pending_traversal = None;
        Some(RenderCommand::ShowHome)
    }

    /// Retry affordance: only available while the active tab is faulted.
    pub fn retry(&mut self, session: &mut Session) -> Option<RenderCommand> {
        let active = session.tab_manager.active_tab();
        if !active.has_error() {
            return None;
        }
        let (id, url) = (active.id.clone(), active.url.clone());
        let _ = session.tab_manager.clear_error(&id);
        let _ = session.tab_manager.set_loading(&id, true);
        self.expect_traversal(session, &url);
        Some(RenderCommand::Reload(url))
    }

    /// Render-surface hook run before every load.
    pub fn should_start_load(&mut self, session: &mut Session, url: &str) -> NavigationDecision {
        if !session.should_intercept(url) {
            return NavigationDecision::Proceed;
        }
        let download_id = self.start_active_download(session, url);
        NavigationDecision::Intercepted { download_id }
    }

    fn start_active_download(&mut self, session: &mut Session, url: &str) -> String {
        let tab = session.tab_manager.active_tab();
        let tab_id = tab.id.clone();
        let title = Some(tab.title.clone())
            .filter(|t| !t.is_empty() && *t != session.settings.general.new_tab_title);
        session.start_download(&tab_id, url, title.as_deref())
    }

    /// `onNavigate(url, title)` from the render surface.
    pub fn on_navigate(&mut self, session: &mut Session, url: &str, title: Option<&str>) {
        let active = session.tab_manager.active_tab_id().to_string();
        let traversal = self
            .pending_traversal
            .take()
            .filter(|(tab_id, pending)| *tab_id == active && pending == url);

        if traversal.is_some() {
            if let Some(title) = title {
                let _ = session.tab_manager.set_title(&active, title);
            }
            let _ = session.tab_manager.clear_error(&active);
        } else {
            session.tab_manager.update_active(url, title);
        }
        self.address = url.to_string();
        self.showing_home = false;
    }

    /// `onLoadError(message)`: records a render fault on the active tab.
    pub fn on_load_error(&mut self, session: &mut Session, message: &str) {
        let active = session.tab_manager.active_tab_id().to_string();
        tracing::warn!(tab_id = %active, %message, "load error");
        let _ = session.tab_manager.mark_error(&active, message);
        self.pending_traversal = None;
    }

    /// `onHttpError(status)`: statuses of 400 and above fault the active tab.
    pub fn on_http_error(&mut self, session: &mut Session, status: u16) {
        if status < 400 {
            return;
        }
        let active = session.tab_manager.active_tab_id().to_string();
        tracing::warn!(tab_id = %active, status, "http error");
        let _ = session
            .tab_manager
            .mark_error(&active, &format!("HTTP error {}", status));
    }

    /// `onLoadEnd()`.
    pub fn on_load_end(&mut self, session: &mut Session) {
        let active = session.tab_manager.active_tab_id().to_string();
        let _ = session.tab_manager.set_loading(&active, false);
    }

    pub fn toolbar(&self, session: &Session) -> ToolbarState {
        let tab = session.tab_manager.active_tab();
        let on_page = !self.showing_home;
        let home_is_page = !is_home_screen(&session.settings.general.home_url);
        ToolbarState {
            can_go_back: on_page && tab.history.can_go_back(),
            can_go_forward: on_page && tab.history.can_go_forward(),
            can_reload: on_page,
            can_go_home: on_page || home_is_page,
            show_retry: on_page && tab.has_error(),
        }
    }

    pub fn tab_switcher_items(&self, session: &Session) -> Vec<TabListItem> {
        let active = session.tab_manager.active_tab_id();
        session
            .tab_manager
            .tabs()
            .iter()
            .map(|t| TabListItem {
                id: t.id.clone(),
                title: t.title.clone(),
                url: t.url.clone(),
                active: t.id == active,
                has_error: t.has_error(),
            })
            .collect()
    }

    pub fn history_items(&self, session: &Session) -> Vec<HistoryListItem> {
        let history = &session.tab_manager.active_tab().history;
        history
            .entries()
            .iter()
            .enumerate()
            .map(|(index, e)| HistoryListItem {
                index,
                url: e.url.clone(),
                title: e.title.clone(),
                current: index == history.cursor(),
            })
            .collect()
    }

    pub fn toggle_panel(&mut self, session: &mut Session, kind: PanelKind) -> Vec<PanelEvent> {
        session.overlay_manager.toggle(kind)
    }

    pub fn drag_panel(&mut self, session: &mut Session, kind: PanelKind, translation: f32) -> bool {
        session.overlay_manager.update_drag(kind, translation)
    }

    pub fn release_panel(&mut self, session: &mut Session, kind: PanelKind) -> DragRelease {
        session.overlay_manager.release_drag(kind)
    }

    /// Frame tick for panel animations.
    pub fn advance(&mut self, session: &mut Session, dt_ms: u64) -> Vec<PanelEvent> {
        session.overlay_manager.advance(dt_ms)
    }
}
