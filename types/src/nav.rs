//! Static navigation data: items, groups and the section tree.
//!
//! These are read-only after startup. A [`NavigationTree`] is validated once
//! when it is built, so the selection models can rely on every section being
//! present and every header tab owning a (possibly empty) subnav list.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::SectionId;

/// Icon reference carried by navigation items and cards.
///
/// Only the name travels through the core; glyph rendering belongs to the
/// presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IconName {
    #[serde(rename = "home-icon")]
    Home,
    #[serde(rename = "graduation-cap-icon")]
    GraduationCap,
    #[serde(rename = "calculator-icon")]
    Calculator,
    #[serde(rename = "briefcase-icon")]
    Briefcase,
    #[serde(rename = "chat-bubble-left-right-icon")]
    ChatBubbleLeftRight,
    #[serde(rename = "bell-alert-icon")]
    BellAlert,
    #[serde(rename = "squares-plus-icon")]
    SquaresPlus,
    #[serde(rename = "cog-6-tooth-icon")]
    Cog6Tooth,
    #[serde(rename = "bell-icon")]
    Bell,
    #[serde(rename = "chat-bubble-left-ellipsis-icon")]
    ChatBubbleLeftEllipsis,
    #[serde(rename = "arrow-right-circle-icon")]
    ArrowRightCircle,
    #[serde(rename = "plus-icon")]
    Plus,
    #[serde(rename = "arrow-left-circle-icon")]
    ArrowLeftCircle,
    #[serde(rename = "inbox-arrow-down-icon")]
    InboxArrowDown,
    #[serde(rename = "star-icon")]
    Star,
    #[serde(rename = "exclamation-triangle-icon")]
    ExclamationTriangle,
    #[serde(rename = "calendar-days-icon")]
    CalendarDays,
    #[serde(rename = "paper-airplane-icon")]
    PaperAirplane,
    #[serde(rename = "photo-icon")]
    Photo,
    #[serde(rename = "film-icon")]
    Film,
    #[serde(rename = "puzzle-piece-icon")]
    PuzzlePiece,
    #[serde(rename = "building-storefront-icon")]
    BuildingStorefront,
    #[serde(rename = "beach-icon")]
    Beach,
    #[serde(rename = "heart-icon")]
    Heart,
    #[serde(rename = "minus-icon")]
    Minus,
    #[serde(rename = "x-mark-icon")]
    XMark,
    #[serde(rename = "sun-icon")]
    Sun,
    #[serde(rename = "moon-icon")]
    Moon,
    #[serde(rename = "chevron-down-icon")]
    ChevronDown,
    #[serde(rename = "check-icon")]
    Check,
    #[serde(rename = "book-open-icon")]
    BookOpen,
    #[serde(rename = "trophy-icon")]
    Trophy,
    #[serde(rename = "sparkles-icon")]
    Sparkles,
    #[serde(rename = "wrench-screwdriver-icon")]
    WrenchScrewdriver,
}

impl IconName {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            IconName::Home => "home-icon",
            IconName::GraduationCap => "graduation-cap-icon",
            IconName::Calculator => "calculator-icon",
            IconName::Briefcase => "briefcase-icon",
            IconName::ChatBubbleLeftRight => "chat-bubble-left-right-icon",
            IconName::BellAlert => "bell-alert-icon",
            IconName::SquaresPlus => "squares-plus-icon",
            IconName::Cog6Tooth => "cog-6-tooth-icon",
            IconName::Bell => "bell-icon",
            IconName::ChatBubbleLeftEllipsis => "chat-bubble-left-ellipsis-icon",
            IconName::ArrowRightCircle => "arrow-right-circle-icon",
            IconName::Plus => "plus-icon",
            IconName::ArrowLeftCircle => "arrow-left-circle-icon",
            IconName::InboxArrowDown => "inbox-arrow-down-icon",
            IconName::Star => "star-icon",
            IconName::ExclamationTriangle => "exclamation-triangle-icon",
            IconName::CalendarDays => "calendar-days-icon",
            IconName::PaperAirplane => "paper-airplane-icon",
            IconName::Photo => "photo-icon",
            IconName::Film => "film-icon",
            IconName::PuzzlePiece => "puzzle-piece-icon",
            IconName::BuildingStorefront => "building-storefront-icon",
            IconName::Beach => "beach-icon",
            IconName::Heart => "heart-icon",
            IconName::Minus => "minus-icon",
            IconName::XMark => "x-mark-icon",
            IconName::Sun => "sun-icon",
            IconName::Moon => "moon-icon",
            IconName::ChevronDown => "chevron-down-icon",
            IconName::Check => "check-icon",
            IconName::BookOpen => "book-open-icon",
            IconName::Trophy => "trophy-icon",
            IconName::Sparkles => "sparkles-icon",
            IconName::WrenchScrewdriver => "wrench-screwdriver-icon",
        }
    }
}

/// Leaf or tab descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavItem {
    pub id: String,
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<IconName>,
}

impl NavItem {
    #[must_use]
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            icon: None,
        }
    }

    #[must_use]
    pub fn with_icon(mut self, icon: IconName) -> Self {
        self.icon = Some(icon);
        self
    }
}

/// Id of the first item, or the empty string when there is none.
pub(crate) fn first_id(items: &[NavItem]) -> String {
    items.first().map(|item| item.id.clone()).unwrap_or_default()
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TreeError {
    #[error("navigation tree has no group for section `{0}`")]
    MissingSection(SectionId),
    #[error("{scope}: header tab `{header}` has no subnav entry")]
    MissingSubnav { scope: String, header: String },
    #[error("{scope}: header tab `{header}` is listed twice")]
    DuplicateHeader { scope: String, header: String },
}

/// Header tabs plus the subnav list owned by each tab.
///
/// Used both for a main-app section and for an overlay application's own
/// navigation (its sub-apps are the header tabs).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationGroup {
    header: Vec<NavItem>,
    subnav: HashMap<String, Vec<NavItem>>,
}

impl NavigationGroup {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a header tab together with its subnav list.
    #[must_use]
    pub fn tab(mut self, item: NavItem, subnav: Vec<NavItem>) -> Self {
        self.subnav.insert(item.id.clone(), subnav);
        self.header.push(item);
        self
    }

    #[must_use]
    pub fn header(&self) -> &[NavItem] {
        &self.header
    }

    /// Subnav list for `header_id`; empty when the tab has none.
    #[must_use]
    pub fn subnav_for(&self, header_id: &str) -> &[NavItem] {
        self.subnav.get(header_id).map_or(&[], Vec::as_slice)
    }

    #[must_use]
    pub fn contains_header(&self, header_id: &str) -> bool {
        self.header.iter().any(|item| item.id == header_id)
    }

    /// True when any header tab owns a non-empty subnav list.
    #[must_use]
    pub fn has_subnav(&self) -> bool {
        self.subnav.values().any(|items| !items.is_empty())
    }

    #[must_use]
    pub fn header_label(&self, header_id: &str) -> Option<&str> {
        self.header
            .iter()
            .find(|item| item.id == header_id)
            .map(|item| item.label.as_str())
    }

    #[must_use]
    pub fn subnav_label(&self, header_id: &str, subnav_id: &str) -> Option<&str> {
        self.subnav_for(header_id)
            .iter()
            .find(|item| item.id == subnav_id)
            .map(|item| item.label.as_str())
    }

    /// Check the header-to-subnav invariant. `scope` names the owner in errors.
    pub fn validate(&self, scope: &str) -> Result<(), TreeError> {
        for (idx, item) in self.header.iter().enumerate() {
            if self.header[..idx].iter().any(|prev| prev.id == item.id) {
                return Err(TreeError::DuplicateHeader {
                    scope: scope.to_string(),
                    header: item.id.clone(),
                });
            }
            if !self.subnav.contains_key(&item.id) {
                return Err(TreeError::MissingSubnav {
                    scope: scope.to_string(),
                    header: item.id.clone(),
                });
            }
        }
        Ok(())
    }
}

/// Exhaustive mapping from every [`SectionId`] to its navigation group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationTree {
    groups: HashMap<SectionId, NavigationGroup>,
}

impl NavigationTree {
    /// Build and validate a tree. Every section must be present.
    pub fn new(
        groups: impl IntoIterator<Item = (SectionId, NavigationGroup)>,
    ) -> Result<Self, TreeError> {
        let groups: HashMap<SectionId, NavigationGroup> = groups.into_iter().collect();
        for section in SectionId::all() {
            let group = groups
                .get(section)
                .ok_or(TreeError::MissingSection(*section))?;
            group.validate(section.as_str())?;
        }
        Ok(Self { groups })
    }

    #[must_use]
    pub fn group(&self, section: SectionId) -> Option<&NavigationGroup> {
        self.groups.get(&section)
    }
}
