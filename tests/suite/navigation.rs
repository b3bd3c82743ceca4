//! Main-shell navigation against the built-in catalog.

use dashdeck_engine::dashdeck_types::{InvalidSelectionError, SectionId};
use dashdeck_engine::{Catalog, ContentView, ShellError};
use proptest::prelude::*;

use crate::common::shell;

#[test]
fn cascading_reset_follows_first_items() {
    let (mut shell, _) = shell();
    shell.select_header("social_media").expect("header");
    assert_eq!(shell.navigation().subnav_id(), "feed");

    shell.select_subnav("messages").expect("subnav");
    shell.select_section(SectionId::School).expect("section");
    shell.select_section(SectionId::Communication).expect("section");

    assert_eq!(shell.navigation().header_id(), "email");
    assert_eq!(shell.navigation().subnav_id(), "inbox");
}

#[test]
fn every_section_enters_on_its_first_items() {
    let catalog = Catalog::builtin().expect("catalog");
    let tree = catalog.tree();
    let (mut shell, _) = shell();

    for entry in catalog.sections() {
        shell.select_section(entry.id).expect("section");
        let group = tree.group(entry.id).expect("group");
        let first_header = group.header().first().map_or("", |item| item.id.as_str());
        let first_subnav = group
            .subnav_for(first_header)
            .first()
            .map_or("", |item| item.id.as_str());

        assert_eq!(shell.navigation().header_id(), first_header, "{}", entry.id);
        assert_eq!(shell.navigation().subnav_id(), first_subnav, "{}", entry.id);
        assert_eq!(
            shell.chrome().announcement(),
            Some(format!("Navigated to {} section", entry.label).as_str())
        );
    }
}

#[test]
fn rejected_selections_keep_the_current_path() {
    let (mut shell, _) = shell();
    shell.select_header("templates").expect("header");

    let err = shell.select_header("payroll").expect_err("unknown header");
    assert!(matches!(
        err,
        ShellError::Selection(InvalidSelectionError::UnknownHeader { ref header, .. })
            if header == "payroll"
    ));

    // `inbox` belongs to email, not templates.
    let err = shell.select_subnav("inbox").expect_err("wrong tab");
    assert!(matches!(
        err,
        ShellError::Selection(InvalidSelectionError::UnknownSubnav { .. })
    ));

    assert_eq!(shell.navigation().header_id(), "templates");
    assert_eq!(shell.navigation().subnav_id(), "email-templates");
}

#[test]
fn dashboard_hides_subnav_and_shows_cards() {
    let (mut shell, _) = shell();
    shell.select_section_str("Dashboard").expect("section");
    assert!(!shell.navigation().has_subnav());
    assert_eq!(shell.navigation().content_key().to_string(), "dashboard_overview_");

    let ContentView::Cards(cards) = shell.content() else {
        panic!("dashboard overview has cards");
    };
    assert_eq!(cards.len(), 18);
    assert_eq!(cards[0].id, "card-dash-0");
    assert_eq!(cards[0].title, "Dashboard Metric 1");

    shell.select_header("system").expect("header");
    assert!(matches!(shell.content(), ContentView::Cards(cards) if cards.len() == 6));
}

#[test]
fn community_has_no_cards() {
    let (mut shell, _) = shell();
    shell.select_header("community").expect("header");
    let ContentView::Placeholder(key) = shell.content() else {
        panic!("community has no cards");
    };
    assert_eq!(key.to_string(), "communication_community_general");
}

#[derive(Debug, Clone)]
enum Op {
    Section(usize),
    Header(usize),
    Subnav(usize),
    BogusHeader,
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        (0..SectionId::all().len()).prop_map(Op::Section),
        (0..8usize).prop_map(Op::Header),
        (0..8usize).prop_map(Op::Subnav),
        Just(Op::BogusHeader),
    ]
}

proptest! {
    #[test]
    fn selection_stays_inside_the_tree(ops in prop::collection::vec(op(), 1..40)) {
        let (mut shell, _) = shell();
        for op in ops {
            match op {
                Op::Section(idx) => {
                    shell.select_section(SectionId::all()[idx]).expect("section");
                }
                Op::Header(idx) => {
                    let id = shell
                        .navigation()
                        .current_header_items()
                        .get(idx)
                        .map(|item| item.id.clone());
                    if let Some(id) = id {
                        shell.select_header(&id).expect("listed header");
                    }
                }
                Op::Subnav(idx) => {
                    let id = shell
                        .navigation()
                        .current_subnav_items()
                        .get(idx)
                        .map(|item| item.id.clone());
                    if let Some(id) = id {
                        shell.select_subnav(&id).expect("listed subnav");
                    }
                }
                Op::BogusHeader => {
                    prop_assert!(shell.select_header("no-such-tab").is_err());
                }
            }

            let nav = shell.navigation();
            let headers = nav.current_header_items();
            if headers.is_empty() {
                prop_assert_eq!(nav.header_id(), "");
            } else {
                prop_assert!(headers.iter().any(|item| item.id == nav.header_id()));
            }
            let subnav = nav.current_subnav_items();
            if subnav.is_empty() {
                prop_assert_eq!(nav.subnav_id(), "");
            } else {
                prop_assert!(subnav.iter().any(|item| item.id == nav.subnav_id()));
            }
        }
    }
}
