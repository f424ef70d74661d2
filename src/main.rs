//! Seedbrowser: multi-tab browsing session core.
//!
//! Entry point: runs a scripted console walkthrough of the session core.
//! The mobile shell talks to the core through the `seedbrowser-rpc` binary.

use seedbrowser::app::Session;
use seedbrowser::managers::tab_manager::TabManagerTrait;
use seedbrowser::platform;
use seedbrowser::types::overlay::PanelKind;
use seedbrowser::types::settings::SessionSettings;
use seedbrowser::ui::session_view::SessionView;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    println!();
    println!("Seedbrowser v{} (demo mode)", env!("CARGO_PKG_VERSION"));
    println!();

    let mut session = Session::new(SessionSettings::default(), &platform::get_documents_dir());
    let mut view = SessionView::new();

    demo_navigation(&mut session, &mut view);
    demo_tabs(&mut session, &mut view);
    demo_panels(&mut session, &mut view);
    demo_faults(&mut session, &mut view);

    println!();
    println!("  Download directory: {}", session.interceptor().target_dir().display());
}

fn section(name: &str) {
    println!("───────────────────────────────────────────────────────────────");
    println!("  {}", name);
    println!("───────────────────────────────────────────────────────────────");
}

fn demo_navigation(session: &mut Session, view: &mut SessionView) {
    section("Navigation history");

    if let Some(cmd) = view.open_from_home(session, "https://x.example") {
        println!("  home submit  -> {:?}", cmd);
    }
    view.on_navigate(session, "https://x.example", Some("X"));
    view.submit_address(session, "y.example");
    view.on_navigate(session, "https://y.example", Some("Y"));

    println!("  back         -> {:?}", view.go_back(session));
    view.on_navigate(session, "https://x.example", Some("X"));
    println!("  forward      -> {:?}", view.go_forward(session));
    view.on_navigate(session, "https://y.example", Some("Y"));

    for item in view.history_items(session) {
        let marker = if item.current { ">" } else { " " };
        println!("  {} [{}] {}", marker, item.index, item.url);
    }
    println!();
}

fn demo_tabs(session: &mut Session, view: &mut SessionView) {
    section("Tab registry");

    let other = view.open_in_new_tab(session, "https://z.example");
    println!("  tabs open: {}", session.tab_manager.tab_count());
    view.close_tab(session, &other);
    println!("  closed background tab, tabs open: {}", session.tab_manager.tab_count());

    let only = session.tab_manager.active_tab_id().to_string();
    view.close_tab(session, &only);
    println!("  closing the last tab is ignored, tabs open: {}", session.tab_manager.tab_count());
    println!();
}

fn demo_panels(session: &mut Session, view: &mut SessionView) {
    section("Overlay panels");

    view.toggle_panel(session, PanelKind::TabSwitcher);
    view.advance(session, 300);
    view.drag_panel(session, PanelKind::TabSwitcher, 40.0);
    println!("  short swipe  -> {:?}", view.release_panel(session, PanelKind::TabSwitcher));
    view.drag_panel(session, PanelKind::TabSwitcher, 400.0);
    println!("  long swipe   -> {:?}", view.release_panel(session, PanelKind::TabSwitcher));
    println!("  after anim   -> {:?}", view.advance(session, 300));
    println!();
}

fn demo_faults(session: &mut Session, view: &mut SessionView) {
    section("Render faults");

    view.on_http_error(session, 503);
    println!("  toolbar: {:?}", view.toolbar(session));
    println!("  retry  -> {:?}", view.retry(session));
    println!("  toolbar: {:?}", view.toolbar(session));
}
