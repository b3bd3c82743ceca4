//! Unit tests for the engine crate.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use dashdeck_types::{OverlayId, OverlayState, SectionId, Theme, Transition, TriggerRef};

use super::{
    Catalog, CommandOutcome, ContentView, FocusSink, SaveStatus, Shell, ShellError, ShellOptions,
    SettingsError,
};

#[derive(Default)]
struct RecordingSink(Mutex<Vec<String>>);

impl RecordingSink {
    fn taken(&self) -> Vec<String> {
        std::mem::take(&mut *self.0.lock().expect("sink lock"))
    }
}

impl FocusSink for RecordingSink {
    fn focus(&self, trigger: &TriggerRef) {
        self.0
            .lock()
            .expect("sink lock")
            .push(trigger.as_str().to_string());
    }
}

fn test_shell() -> (Shell, Arc<RecordingSink>) {
    let sink = Arc::new(RecordingSink::default());
    let shell = Shell::new(
        Catalog::builtin().expect("builtin catalog"),
        &ShellOptions::default(),
        Arc::clone(&sink) as Arc<dyn FocusSink>,
    )
    .expect("shell");
    (shell, sink)
}

fn trigger(name: &str) -> TriggerRef {
    TriggerRef::new(name).expect("non-empty trigger")
}

// ========================================================================
// Navigation
// ========================================================================

#[test]
fn starts_on_communication_inbox() {
    let (shell, _) = test_shell();
    let nav = shell.navigation();
    assert_eq!(nav.section(), SectionId::Communication);
    assert_eq!(nav.header_id(), "email");
    assert_eq!(nav.subnav_id(), "inbox");
    assert!(matches!(shell.content(), ContentView::Cards(cards) if cards.len() == 24));
    assert_eq!(shell.chrome().announcement(), None);
}

#[test]
fn section_change_announces_uppercase_label() {
    let (mut shell, _) = test_shell();
    shell.select_section(SectionId::School).expect("select");
    assert_eq!(
        shell.chrome().announcement(),
        Some("Navigated to SCHOOL section")
    );
    assert_eq!(shell.navigation().header_id(), "courses");
    assert_eq!(shell.navigation().subnav_id(), "all-courses");
}

#[test]
fn unknown_section_string_keeps_state() {
    let (mut shell, _) = test_shell();
    let err = shell.select_section_str("nowhere").expect_err("unknown");
    assert!(matches!(err, ShellError::Selection(_)));
    assert_eq!(shell.navigation().section(), SectionId::Communication);
    assert_eq!(shell.chrome().announcement(), None);
}

#[test]
fn empty_section_resolves_to_placeholder() {
    let (mut shell, _) = test_shell();
    shell.select_section(SectionId::ConciergeAi).expect("select");
    assert_eq!(shell.navigation().header_id(), "");
    assert!(!shell.navigation().has_subnav());
    assert!(matches!(shell.content(), ContentView::Placeholder(_)));
}

#[test]
fn overlay_setting_management_resolves_settings_views() {
    let (mut shell, _) = test_shell();
    shell.select_section(SectionId::OverlaySetting).expect("select");
    assert_eq!(shell.navigation().subnav_id(), "studio");
    assert!(matches!(shell.content(), ContentView::StudioSettings));

    shell.select_subnav("lifestyle").expect("subnav");
    assert!(matches!(
        shell.content(),
        ContentView::AppSettings(OverlayId::Lifestyle)
    ));
}

// ========================================================================
// Overlays
// ========================================================================

#[test]
fn launch_creates_fresh_overlay_navigation() {
    let (mut shell, _) = test_shell();
    shell.launch(OverlayId::Studio, trigger("tray-studio"));
    shell.overlay_select_header("video").expect("header");
    assert_eq!(
        shell.overlay_navigation().map(|nav| nav.subnav_id()),
        Some("video_editor")
    );

    shell.minimize_overlay();
    assert!(shell.overlay_navigation().is_none());

    let transition = shell.restore(OverlayId::Studio, trigger("min-studio"));
    assert!(matches!(
        transition,
        Transition::Opened {
            from_minimized: true,
            ..
        }
    ));
    let nav = shell.overlay_navigation().expect("overlay nav");
    assert_eq!(nav.header_id(), "designer");
    assert_eq!(nav.subnav_id(), "templates");
}

#[test]
fn launch_announces_and_demotes_previous_active() {
    let (mut shell, _) = test_shell();
    shell.launch(OverlayId::Studio, trigger("tray-studio"));
    let transition = shell.launch(OverlayId::Market, trigger("tray-market"));
    assert!(matches!(
        transition,
        Transition::Opened {
            app: OverlayId::Market,
            demoted: Some(OverlayId::Studio),
            ..
        }
    ));
    assert_eq!(shell.overlays().state_of(OverlayId::Studio), OverlayState::Closed);
    assert_eq!(shell.chrome().announcement(), Some("market app opened"));
}

#[test]
fn close_without_runtime_parks_focus_return() {
    let (mut shell, sink) = test_shell();
    shell.launch(OverlayId::Media, trigger("tray-media"));
    shell.close_overlay();

    assert!(sink.taken().is_empty());
    assert_eq!(
        shell.pending_focus_return().map(|req| req.trigger.as_str()),
        Some("tray-media")
    );
    assert_eq!(shell.chrome().announcement(), Some("media app closed"));

    assert!(shell.flush_focus_return());
    assert_eq!(sink.taken(), vec!["tray-media".to_string()]);
    assert!(shell.pending_focus_return().is_none());
}

#[tokio::test]
async fn close_in_runtime_defers_focus_return() {
    let (mut shell, sink) = test_shell();
    shell.launch(OverlayId::Sports, trigger("tray-sports"));
    shell.minimize_overlay();
    assert!(sink.taken().is_empty());

    tokio::time::sleep(Duration::from_millis(10)).await;
    assert_eq!(sink.taken(), vec!["tray-sports".to_string()]);
}

#[test]
fn overlay_commands_need_an_active_overlay() {
    let (mut shell, _) = test_shell();
    let err = shell.overlay_select_header("designer").expect_err("inactive");
    assert!(matches!(err, ShellError::NoActiveOverlay));
    assert_eq!(shell.close_overlay(), Transition::Unchanged);
    assert_eq!(shell.chrome().announcement(), None);
}

#[test]
fn empty_trigger_is_rejected() {
    let (mut shell, _) = test_shell();
    let err = shell.launch_str("studio", "").expect_err("empty");
    assert!(matches!(err, ShellError::EmptyTrigger(_)));
    assert!(shell.overlays().active().is_none());
}

#[test]
fn chrome_toggles_announce() {
    let (mut shell, _) = test_shell();
    assert!(!shell.toggle_left_sidebar());
    assert_eq!(shell.chrome().announcement(), Some("Left sidebar collapsed"));
    assert!(shell.toggle_tray());
    assert_eq!(shell.chrome().announcement(), Some("App tray opened"));

    shell.set_announcement("Loading");
    assert_eq!(shell.chrome().announcement(), Some("Loading"));
    shell.clear_announcement();
    assert_eq!(shell.chrome().announcement(), None);
}

// ========================================================================
// Settings
// ========================================================================

#[tokio::test]
async fn settings_edit_and_save_flow() {
    let (mut shell, _) = test_shell();
    let err = shell.set_setting("auto-save", "off").expect_err("not open");
    assert!(matches!(err, ShellError::Settings(SettingsError::NotOpen)));

    shell.open_settings().await.expect("open");
    shell.set_setting("project-name", "").expect("stored");
    let save = shell.save_settings().await.expect_err("blocked");
    assert!(matches!(
        save,
        ShellError::Settings(SettingsError::ValidationFailed { count: 1 })
    ));

    shell.set_setting("project-name", "Launch Reel").expect("set");
    shell.save_settings().await.expect("save");
    let editor = shell.settings_editor().expect("editor");
    assert_eq!(editor.status(), SaveStatus::Saved);
    assert!(!editor.is_dirty());

    let stored = shell.settings_service().fetch().await.expect("fetch");
    let name = stored
        .iter()
        .find(|item| item.id == "project-name")
        .expect("project-name");
    assert_eq!(name.value.display_value(), "Launch Reel");
}

// ========================================================================
// Commands
// ========================================================================

#[tokio::test]
async fn commands_drive_the_shell() {
    let (mut shell, _) = test_shell();
    let outcome = shell.process_command("section school").await.expect("section");
    assert_eq!(
        outcome,
        CommandOutcome::Message("school / courses / all-courses".to_string())
    );

    let outcome = shell.process_command("launch studio").await.expect("launch");
    assert_eq!(
        outcome,
        CommandOutcome::Message("studio app opened".to_string())
    );
    assert_eq!(
        shell.overlays().last_trigger().map(TriggerRef::as_str),
        Some("tray-studio")
    );

    let outcome = shell.process_command("theme").await.expect("theme");
    assert_eq!(outcome, CommandOutcome::ThemeChanged(Theme::Light));

    assert_eq!(
        shell.process_command("quit").await.expect("quit"),
        CommandOutcome::Quit
    );
}

#[tokio::test]
async fn command_errors_leave_state_alone() {
    let (mut shell, _) = test_shell();
    let err = shell.process_command("section").await.expect_err("usage");
    assert!(matches!(err, ShellError::Usage(_)));
    let err = shell.process_command("warp 9").await.expect_err("unknown");
    assert!(err.to_string().starts_with("Unknown command `warp`"));
    assert_eq!(shell.navigation().section(), SectionId::Communication);
}

#[tokio::test]
async fn set_command_reports_validation_message() {
    let (mut shell, _) = test_shell();
    shell.process_command("settings").await.expect("open");
    let outcome = shell
        .process_command("set studio-api-key bad key!")
        .await
        .expect("set");
    assert_eq!(
        outcome,
        CommandOutcome::Message(
            "API Key can only contain letters, numbers, and hyphens.".to_string()
        )
    );
}
