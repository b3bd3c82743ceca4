//! End-to-end command sessions and the status projection.

use std::fs;

use dashdeck_engine::dashdeck_types::Theme;
use dashdeck_engine::{
    CommandOutcome, DashdeckConfig, ShellError, ShellOptions, persist_theme_at, render_status,
};
use insta::assert_snapshot;
use tempfile::tempdir;

use crate::common::{run, shell, shell_with};

#[test]
fn status_on_startup() {
    let (shell, _) = shell();
    assert_snapshot!(render_status(&shell), @r"
    section:   communication (COMMUNICATION)
    header:    email
    subnav:    inbox
    content:   communication_email_inbox -> 24 cards
    overlay:   -
    minimized: -
    chrome:    left=open right=open tray=closed theme=dark
    announce:  -
    ");
}

#[tokio::test]
async fn status_after_a_session() {
    let (mut shell, _) = shell();
    run(
        &mut shell,
        &[
            "section dashboard",
            "launch studio",
            "oheader video",
            "minimize",
            "launch media",
            "tray",
            "theme",
            "settings",
            "set project-name",
        ],
    )
    .await;

    assert_snapshot!(render_status(&shell), @r"
    section:   dashboard (DASHBOARD)
    header:    overview
    subnav:    - (hidden)
    content:   dashboard_overview_ -> 18 cards
    overlay:   media (Movies / Movie Library)
    minimized: studio
    chrome:    left=open right=open tray=open theme=light
    settings:  idle [General] dirty=true errors=1
    announce:  Theme set to light mode
    ");
}

#[tokio::test]
async fn overlay_settings_content() {
    let (mut shell, _) = shell();
    run(&mut shell, &["section overlay_setting", "subnav sports"]).await;
    let status = render_status(&shell);
    assert!(status.contains(
        "content:   overlay_setting_management_sports -> Sports settings (4 panels)"
    ));

    run(&mut shell, &["subnav studio"]).await;
    assert!(render_status(&shell).contains("-> studio settings"));
}

#[tokio::test]
async fn settings_session_saves_and_exports() {
    let (mut shell, _) = shell();
    run(
        &mut shell,
        &[
            "settings",
            "category Exports",
            "set export-quality 4K",
            "set watermark on",
            "save",
        ],
    )
    .await;

    let CommandOutcome::Message(json) = shell.process_command("export").await.expect("export")
    else {
        panic!("export prints JSON");
    };
    let items: serde_json::Value = serde_json::from_str(&json).expect("json");
    let quality = items
        .as_array()
        .expect("array")
        .iter()
        .find(|item| item["id"] == "export-quality")
        .expect("export-quality");
    assert_eq!(quality["type"], "select");
    assert_eq!(quality["value"], "4K");
}

#[tokio::test]
async fn invalid_select_option_is_reported() {
    let (mut shell, _) = shell();
    run(&mut shell, &["settings"]).await;
    let err = shell
        .process_command("set export-quality 8K")
        .await
        .expect_err("not an option");
    assert_eq!(err.to_string(), "`8K` is not an option for `export-quality`");

    let err = shell
        .process_command("category Nowhere")
        .await
        .expect_err("unknown category");
    assert!(matches!(err, ShellError::Settings(_)));
}

#[test]
fn config_file_shapes_the_initial_state() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("config.toml");
    fs::write(
        &path,
        r#"
[app]
theme = "light"
left_sidebar_open = false

[navigation]
initial_section = "school"
"#,
    )
    .expect("write config");

    let config = DashdeckConfig::load_from(&path)
        .expect("readable")
        .expect("present");
    let (shell, _) = shell_with(&ShellOptions::from_config(&config));

    assert_snapshot!(render_status(&shell), @r"
    section:   school (SCHOOL)
    header:    courses
    subnav:    all-courses
    content:   school_courses_all-courses -> 12 cards
    overlay:   -
    minimized: -
    chrome:    left=closed right=open tray=closed theme=light
    announce:  -
    ");
}

#[tokio::test]
async fn theme_command_round_trips_through_config() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("config.toml");
    fs::write(&path, "# keep me\n[app]\nright_sidebar_open = true\n").expect("write config");

    let (mut shell, _) = shell();
    let CommandOutcome::ThemeChanged(theme) = shell.process_command("theme").await.expect("theme")
    else {
        panic!("theme command reports the new theme");
    };
    assert_eq!(theme, Theme::Light);
    persist_theme_at(&path, theme).expect("persist");

    let content = fs::read_to_string(&path).expect("read back");
    assert!(content.starts_with("# keep me"));
    let config = DashdeckConfig::load_from(&path)
        .expect("readable")
        .expect("present");
    let options = ShellOptions::from_config(&config);
    assert_eq!(options.theme, Theme::Light);
    assert!(options.right_sidebar_open);
}

#[tokio::test]
async fn help_lists_every_command() {
    let (mut shell, _) = shell();
    let CommandOutcome::Message(help) = shell.process_command("help").await.expect("help") else {
        panic!("help prints text");
    };
    for spec in dashdeck_engine::command_specs() {
        assert!(help.contains(spec.description), "{}", spec.help_label);
    }
}
