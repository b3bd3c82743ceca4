//! Built-in static tables: sections, navigation, overlay apps, content cards
//! and the studio settings seed.
//!
//! Everything here is read-only after [`Catalog::builtin`] returns. Navigation
//! groups are validated once at build time, so the selection models never
//! see a header tab without a subnav entry.

mod overlay_nav;
mod sections;
mod settings_seed;

use std::collections::HashMap;
use std::sync::Arc;

use dashdeck_types::{
    ContentKey, IconName, NavItem, NavigationGroup, NavigationTree, OverlayId, OverlayNavigation,
    SectionId, SettingItem, SettingsPanel, TreeError,
};
use serde::Serialize;

/// Header tab with its subnav items, as `(id, label, [(id, label, icon)])`.
pub(crate) type Tab = (
    &'static str,
    &'static str,
    &'static [(&'static str, &'static str, IconName)],
);

/// Right-sidebar entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionEntry {
    pub id: SectionId,
    pub label: &'static str,
    pub icon: IconName,
}

/// Tray entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OverlayAppEntry {
    pub id: OverlayId,
    pub label: &'static str,
    pub icon: IconName,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Card {
    pub id: String,
    pub title: String,
    pub icon: IconName,
}

/// What the content area shows for a selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentView<'a> {
    Cards(&'a [Card]),
    /// The editable studio settings form.
    StudioSettings,
    /// Panel list for an overlay app other than studio.
    AppSettings(OverlayId),
    /// Nothing registered for this key.
    Placeholder(ContentKey),
}

#[must_use]
pub const fn section_label(section: SectionId) -> &'static str {
    match section {
        SectionId::Dashboard => "DASHBOARD",
        SectionId::School => "SCHOOL",
        SectionId::Crm => "CRM",
        SectionId::ToolPlatform => "TOOL-PLATFORM",
        SectionId::Communication => "COMMUNICATION",
        SectionId::ConciergeAi => "CONCIERGE AI",
        SectionId::OverlaySetting => "OVERLAY-SETTING",
        SectionId::Setting => "SETTING",
    }
}

#[must_use]
pub const fn section_icon(section: SectionId) -> IconName {
    match section {
        SectionId::Dashboard => IconName::Home,
        SectionId::School => IconName::GraduationCap,
        SectionId::Crm => IconName::Calculator,
        SectionId::ToolPlatform => IconName::Briefcase,
        SectionId::Communication => IconName::ChatBubbleLeftRight,
        SectionId::ConciergeAi => IconName::BellAlert,
        SectionId::OverlaySetting => IconName::SquaresPlus,
        SectionId::Setting => IconName::Cog6Tooth,
    }
}

#[must_use]
pub const fn overlay_icon(app: OverlayId) -> IconName {
    match app {
        OverlayId::Studio => IconName::Film,
        OverlayId::Media => IconName::Photo,
        OverlayId::Gamification => IconName::PuzzlePiece,
        OverlayId::Leisure => IconName::Beach,
        OverlayId::Market => IconName::BuildingStorefront,
        OverlayId::Lifestyle => IconName::PaperAirplane,
        OverlayId::Hobbies => IconName::Heart,
        OverlayId::Knowledge => IconName::BookOpen,
        OverlayId::Sports => IconName::Trophy,
        OverlayId::Religion => IconName::Sparkles,
        OverlayId::Services => IconName::WrenchScrewdriver,
    }
}

fn group_from_tabs(tabs: &[Tab]) -> NavigationGroup {
    tabs.iter()
        .fold(NavigationGroup::new(), |group, (id, label, items)| {
            let subnav = items
                .iter()
                .map(|(item_id, item_label, icon)| {
                    NavItem::new(*item_id, *item_label).with_icon(*icon)
                })
                .collect();
            group.tab(NavItem::new(*id, *label), subnav)
        })
}

fn section_group(section: SectionId) -> NavigationGroup {
    if section == SectionId::OverlaySetting {
        let (id, label, items) = sections::overlay_setting_tab();
        let subnav = items
            .into_iter()
            .map(|(item_id, item_label, icon)| NavItem::new(item_id, item_label).with_icon(icon))
            .collect();
        return NavigationGroup::new().tab(NavItem::new(id, label), subnav);
    }
    group_from_tabs(sections::tabs(section))
}

fn overlay_group(app: OverlayId) -> NavigationGroup {
    group_from_tabs(overlay_nav::tabs(app))
}

fn build_cards() -> HashMap<ContentKey, Vec<Card>> {
    let mut cards = HashMap::new();
    for run in sections::CARD_RUNS {
        let list = (0..run.count)
            .map(|i| Card {
                id: format!("{}-{i}", run.id_prefix),
                title: format!("{} {}", run.title_prefix, i + 1),
                icon: run.icon,
            })
            .collect();
        cards.insert(ContentKey::new(run.section, run.header, run.subnav), list);
    }
    for (subnav, list) in sections::MANAGEMENT_CARDS {
        let list = list
            .iter()
            .map(|(id, title, icon)| Card {
                id: (*id).to_string(),
                title: (*title).to_string(),
                icon: *icon,
            })
            .collect();
        cards.insert(
            ContentKey::new(SectionId::Communication, "management", *subnav),
            list,
        );
    }
    cards
}

#[derive(Debug, Clone)]
pub struct Catalog {
    tree: Arc<NavigationTree>,
    cards: HashMap<ContentKey, Vec<Card>>,
}

impl Catalog {
    /// Build the built-in tables, validating every navigation group.
    pub fn builtin() -> Result<Self, TreeError> {
        let tree = NavigationTree::new(
            SectionId::all()
                .iter()
                .map(|section| (*section, section_group(*section))),
        )?;
        for app in OverlayId::all() {
            overlay_group(*app).validate(app.as_str())?;
        }
        tracing::debug!(
            sections = SectionId::all().len(),
            overlays = OverlayId::all().len(),
            "Catalog built"
        );
        Ok(Self {
            tree: Arc::new(tree),
            cards: build_cards(),
        })
    }

    #[must_use]
    pub fn tree(&self) -> Arc<NavigationTree> {
        Arc::clone(&self.tree)
    }

    /// Right-sidebar entries in display order.
    #[must_use]
    pub fn sections(&self) -> Vec<SectionEntry> {
        SectionId::all()
            .iter()
            .map(|id| SectionEntry {
                id: *id,
                label: section_label(*id),
                icon: section_icon(*id),
            })
            .collect()
    }

    /// Tray entries in display order.
    #[must_use]
    pub fn overlay_apps(&self) -> Vec<OverlayAppEntry> {
        OverlayId::all()
            .iter()
            .map(|id| OverlayAppEntry {
                id: *id,
                label: id.display_name(),
                icon: overlay_icon(*id),
            })
            .collect()
    }

    /// Fresh two-level navigation for `app`, positioned on its first sub-app.
    #[must_use]
    pub fn overlay_navigation(&self, app: OverlayId) -> OverlayNavigation {
        OverlayNavigation::new(app, Arc::new(overlay_group(app)))
    }

    #[must_use]
    pub fn studio_settings_seed(&self) -> Vec<SettingItem> {
        settings_seed::studio_settings()
    }

    /// Settings panels shown for every overlay app other than studio. All of
    /// them share one list.
    #[must_use]
    pub fn app_settings_panels(&self) -> Vec<SettingsPanel> {
        settings_seed::app_settings_panels()
    }

    /// Content shown for `key`.
    #[must_use]
    pub fn resolve(&self, key: &ContentKey) -> ContentView<'_> {
        if key.section == SectionId::OverlaySetting && key.header == "management" {
            match OverlayId::parse(&key.subnav) {
                Some(OverlayId::Studio) => return ContentView::StudioSettings,
                Some(app) => return ContentView::AppSettings(app),
                None => {}
            }
        }
        match self.cards.get(key) {
            Some(cards) if !cards.is_empty() => ContentView::Cards(cards),
            _ => ContentView::Placeholder(key.clone()),
        }
    }
}
