//! Plain-text projection of the shell state, one field per line.

use std::fmt::Write;

use crate::{ContentView, Shell};

fn open_closed(open: bool) -> &'static str {
    if open { "open" } else { "closed" }
}

fn or_dash(value: &str) -> &str {
    if value.is_empty() { "-" } else { value }
}

fn describe_content(view: &ContentView<'_>, shell: &Shell) -> String {
    match view {
        ContentView::Cards(cards) => format!("{} cards", cards.len()),
        ContentView::StudioSettings => "studio settings".to_string(),
        ContentView::AppSettings(app) => format!(
            "{} settings ({} panels)",
            app.display_name(),
            shell.catalog().app_settings_panels().len()
        ),
        ContentView::Placeholder(_) => "no cards".to_string(),
    }
}

#[must_use]
pub fn render_status(shell: &Shell) -> String {
    let nav = shell.navigation();
    let mut out = String::new();

    let _ = writeln!(
        out,
        "section:   {} ({})",
        nav.section(),
        shell.section_label()
    );
    let _ = writeln!(out, "header:    {}", or_dash(nav.header_id()));
    let _ = writeln!(
        out,
        "subnav:    {}{}",
        or_dash(nav.subnav_id()),
        if nav.has_subnav() { "" } else { " (hidden)" }
    );
    let _ = writeln!(
        out,
        "content:   {} -> {}",
        nav.content_key(),
        describe_content(&shell.content(), shell)
    );

    let overlays = shell.overlays();
    match (overlays.active(), shell.overlay_navigation()) {
        (Some(app), Some(overlay_nav)) => {
            let (header, subnav) = overlay_nav.breadcrumb();
            let _ = writeln!(out, "overlay:   {app} ({header} / {subnav})");
        }
        (Some(app), None) => {
            let _ = writeln!(out, "overlay:   {app}");
        }
        (None, _) => {
            let _ = writeln!(out, "overlay:   -");
        }
    }
    let minimized: Vec<&str> = overlays.minimized().iter().map(|app| app.as_str()).collect();
    let _ = writeln!(
        out,
        "minimized: {}",
        if minimized.is_empty() {
            "-".to_string()
        } else {
            minimized.join(", ")
        }
    );

    let chrome = shell.chrome();
    let _ = writeln!(
        out,
        "chrome:    left={} right={} tray={} theme={}",
        open_closed(chrome.left_sidebar_open()),
        open_closed(chrome.right_sidebar_open()),
        open_closed(chrome.tray_open()),
        chrome.theme().as_str()
    );

    if let Some(editor) = shell.settings_editor() {
        let _ = writeln!(
            out,
            "settings:  {} [{}] dirty={} errors={}",
            editor.status().as_str(),
            editor.active_category(),
            editor.is_dirty(),
            editor.errors().len()
        );
    }

    let _ = write!(
        out,
        "announce:  {}",
        chrome.announcement().unwrap_or("-")
    );
    out
}
