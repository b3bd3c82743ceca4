//! Overlay lifecycle and overlay navigation through the shell.

use std::time::Duration;

use dashdeck_engine::dashdeck_types::{OverlayId, OverlayState, Transition};
use dashdeck_engine::{Catalog, ShellError};
use proptest::prelude::*;

use crate::common::{shell, trigger};

#[test]
fn every_tray_app_opens_on_its_first_sub_app() {
    let catalog = Catalog::builtin().expect("catalog");
    for entry in catalog.overlay_apps() {
        let nav = catalog.overlay_navigation(entry.id);
        let first = nav.current_header_items().first().expect("sub-apps");
        assert_eq!(nav.header_id(), first.id, "{}", entry.id);
        assert!(nav.has_subnav(), "{}", entry.id);
    }
}

#[test]
fn sports_and_religion_have_distinct_tables() {
    let catalog = Catalog::builtin().expect("catalog");
    let sports = catalog.overlay_navigation(OverlayId::Sports);
    let religion = catalog.overlay_navigation(OverlayId::Religion);
    assert_ne!(
        sports.current_header_items(),
        religion.current_header_items()
    );
}

#[test]
fn launching_the_active_app_changes_nothing() {
    let (mut shell, sink) = shell();
    shell.launch(OverlayId::Knowledge, trigger("tray-knowledge"));
    shell.overlay_select_header("courses").expect("second sub-app");

    let transition = shell.launch(OverlayId::Knowledge, trigger("tray-knowledge-2"));
    assert_eq!(transition, Transition::Unchanged);
    assert_eq!(
        shell.overlay_navigation().map(|nav| nav.header_id()),
        Some("courses")
    );
    assert_eq!(shell.chrome().announcement(), Some("knowledge app opened"));
    assert!(sink.take().is_empty());
}

#[test]
fn minimize_then_restore_round_trips() {
    let (mut shell, sink) = shell();
    shell.launch(OverlayId::Hobbies, trigger("tray-hobbies"));
    assert_eq!(
        shell.minimize_overlay(),
        Transition::Minimized(OverlayId::Hobbies)
    );
    assert_eq!(
        shell.overlays().state_of(OverlayId::Hobbies),
        OverlayState::Minimized
    );
    assert!(sink.take().is_empty());
    assert!(shell.flush_focus_return());
    assert_eq!(sink.take(), vec!["tray-hobbies".to_string()]);

    shell.restore(OverlayId::Hobbies, trigger("minimized-hobbies"));
    assert_eq!(shell.overlays().active(), Some(OverlayId::Hobbies));
    assert!(shell.overlays().minimized().is_empty());
}

#[test]
fn close_minimized_leaves_the_active_app() {
    let (mut shell, _) = shell();
    shell.launch(OverlayId::Leisure, trigger("tray-leisure"));
    shell.minimize_overlay();
    shell.launch(OverlayId::Services, trigger("tray-services"));

    let transition = shell
        .close_minimized_str("leisure")
        .expect("known overlay");
    assert_eq!(transition, Transition::ClosedFromMinimized(OverlayId::Leisure));
    assert_eq!(shell.overlays().active(), Some(OverlayId::Services));
    assert!(shell.overlay_navigation().is_some());
    assert_eq!(
        shell.chrome().announcement(),
        Some("leisure app closed from minimized")
    );
}

#[test]
fn unknown_overlay_is_rejected() {
    let (mut shell, _) = shell();
    let err = shell.launch_str("casino", "tray-casino").expect_err("unknown");
    assert!(matches!(err, ShellError::UnknownOverlay(_)));
    assert!(shell.overlays().active().is_none());
}

#[test]
fn transitions_never_call_the_focus_sink() {
    let (mut shell, sink) = shell();
    shell.launch(OverlayId::Studio, trigger("tray-studio"));
    shell.minimize_overlay();
    assert!(sink.take().is_empty());

    shell.restore(OverlayId::Studio, trigger("minimized-studio"));
    shell.close_overlay();
    assert!(sink.take().is_empty());

    assert!(shell.flush_focus_return());
    assert_eq!(sink.take(), vec!["minimized-studio".to_string()]);
}

#[tokio::test]
async fn newest_focus_return_wins() {
    let (mut shell, sink) = shell();
    shell.launch(OverlayId::Studio, trigger("tray-studio"));
    shell.close_overlay();
    shell.launch(OverlayId::Media, trigger("tray-media"));
    shell.minimize_overlay();

    tokio::time::sleep(Duration::from_millis(10)).await;
    assert_eq!(sink.take(), vec!["tray-media".to_string()]);
}

#[derive(Debug, Clone)]
enum Op {
    Launch(usize),
    Restore(usize),
    Close,
    Minimize,
    Dismiss(usize),
}

fn op() -> impl Strategy<Value = Op> {
    let apps = OverlayId::all().len();
    prop_oneof![
        (0..apps).prop_map(Op::Launch),
        (0..apps).prop_map(Op::Restore),
        Just(Op::Close),
        Just(Op::Minimize),
        (0..apps).prop_map(Op::Dismiss),
    ]
}

proptest! {
    #[test]
    fn active_is_never_minimized(ops in prop::collection::vec(op(), 1..50)) {
        let (mut shell, _) = shell();
        for op in ops {
            match op {
                Op::Launch(idx) => {
                    shell.launch(OverlayId::all()[idx], trigger("tray"));
                }
                Op::Restore(idx) => {
                    shell.restore(OverlayId::all()[idx], trigger("minimized"));
                }
                Op::Close => {
                    shell.close_overlay();
                }
                Op::Minimize => {
                    shell.minimize_overlay();
                }
                Op::Dismiss(idx) => {
                    shell.close_minimized(OverlayId::all()[idx]);
                }
            }

            let overlays = shell.overlays();
            if let Some(active) = overlays.active() {
                prop_assert!(!overlays.minimized().contains(&active));
                prop_assert_eq!(
                    shell.overlay_navigation().map(|nav| nav.app()),
                    Some(active)
                );
            } else {
                prop_assert!(shell.overlay_navigation().is_none());
            }
            let mut seen = overlays.minimized().to_vec();
            seen.sort_by_key(|app| app.as_str());
            seen.dedup();
            prop_assert_eq!(seen.len(), overlays.minimized().len());
        }
    }
}
