//! Hierarchical navigation selection with cascading reset.
//!
//! The main shell tracks three levels (section, header tab, subnav item); an
//! overlay application tracks the lower two against its own group. Changing a
//! level always re-derives every level below it from the first available
//! entry. Nothing is remembered per branch: re-entering a section lands on
//! its first header tab and that tab's first subnav item.
//!
//! Membership invariants hold after every call. A rejected selection leaves
//! the previous state untouched.

use std::fmt;
use std::sync::Arc;

use thiserror::Error;

use crate::nav::first_id;
use crate::{NavItem, NavigationGroup, NavigationTree, OverlayId, SectionId, UnknownSectionError};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidSelectionError {
    #[error("unknown section `{0}`")]
    UnknownSection(String),
    #[error("section `{0}` has no navigation group")]
    MissingSection(SectionId),
    #[error("{scope}: no header tab `{header}`")]
    UnknownHeader { scope: String, header: String },
    #[error("{scope}: header tab `{header}` has no subnav item `{subnav}`")]
    UnknownSubnav {
        scope: String,
        header: String,
        subnav: String,
    },
}

impl From<UnknownSectionError> for InvalidSelectionError {
    fn from(err: UnknownSectionError) -> Self {
        InvalidSelectionError::UnknownSection(err.0)
    }
}

/// Header/subnav cursor shared by both navigation variants.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct TabCursor {
    header: String,
    subnav: String,
}

impl TabCursor {
    /// First header tab and its first subnav item.
    fn first_of(group: &NavigationGroup) -> Self {
        let header = first_id(group.header());
        let subnav = first_id(group.subnav_for(&header));
        Self { header, subnav }
    }

    fn select_header(
        &mut self,
        group: &NavigationGroup,
        scope: &str,
        header_id: &str,
    ) -> Result<(), InvalidSelectionError> {
        if !group.contains_header(header_id) {
            return Err(InvalidSelectionError::UnknownHeader {
                scope: scope.to_string(),
                header: header_id.to_string(),
            });
        }
        self.subnav = first_id(group.subnav_for(header_id));
        self.header = header_id.to_string();
        Ok(())
    }

    fn select_subnav(
        &mut self,
        group: &NavigationGroup,
        scope: &str,
        subnav_id: &str,
    ) -> Result<(), InvalidSelectionError> {
        let items = group.subnav_for(&self.header);
        if !items.iter().any(|item| item.id == subnav_id) {
            return Err(InvalidSelectionError::UnknownSubnav {
                scope: scope.to_string(),
                header: self.header.clone(),
                subnav: subnav_id.to_string(),
            });
        }
        self.subnav = subnav_id.to_string();
        Ok(())
    }
}

/// Lookup key for the content renderer: the full three-level path.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ContentKey {
    pub section: SectionId,
    pub header: String,
    pub subnav: String,
}

impl ContentKey {
    #[must_use]
    pub fn new(section: SectionId, header: impl Into<String>, subnav: impl Into<String>) -> Self {
        Self {
            section,
            header: header.into(),
            subnav: subnav.into(),
        }
    }
}

/// Renders as `section_header_subnav`; empty levels leave a trailing `_`.
impl fmt::Display for ContentKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}_{}_{}", self.section, self.header, self.subnav)
    }
}

/// Snapshot of the main shell's selection path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationSelection {
    pub section: SectionId,
    pub header: String,
    pub subnav: String,
}

/// Three-level navigation state for the main shell.
#[derive(Debug, Clone)]
pub struct NavigationModel {
    tree: Arc<NavigationTree>,
    section: SectionId,
    tabs: TabCursor,
}

impl NavigationModel {
    /// Start at `section`, cascading down to its first header and subnav.
    pub fn new(tree: Arc<NavigationTree>, section: SectionId) -> Result<Self, InvalidSelectionError> {
        let tabs = TabCursor::first_of(
            tree.group(section)
                .ok_or(InvalidSelectionError::MissingSection(section))?,
        );
        Ok(Self {
            tree,
            section,
            tabs,
        })
    }

    /// Switch section and reset both lower levels to their first entries.
    pub fn select_section(&mut self, section: SectionId) -> Result<(), InvalidSelectionError> {
        let group = self
            .tree
            .group(section)
            .ok_or(InvalidSelectionError::MissingSection(section))?;
        self.tabs = TabCursor::first_of(group);
        self.section = section;
        Ok(())
    }

    /// String entry point for [`Self::select_section`].
    pub fn select_section_str(&mut self, raw: &str) -> Result<SectionId, InvalidSelectionError> {
        let section: SectionId = raw.parse()?;
        self.select_section(section)?;
        Ok(section)
    }

    /// Switch header tab within the current section and reset the subnav.
    pub fn select_header(&mut self, header_id: &str) -> Result<(), InvalidSelectionError> {
        let group = self
            .tree
            .group(self.section)
            .ok_or(InvalidSelectionError::MissingSection(self.section))?;
        self.tabs
            .select_header(group, self.section.as_str(), header_id)
    }

    /// Switch subnav item under the current header tab. No cascade.
    pub fn select_subnav(&mut self, subnav_id: &str) -> Result<(), InvalidSelectionError> {
        let group = self
            .tree
            .group(self.section)
            .ok_or(InvalidSelectionError::MissingSection(self.section))?;
        self.tabs
            .select_subnav(group, self.section.as_str(), subnav_id)
    }

    #[must_use]
    pub fn section(&self) -> SectionId {
        self.section
    }

    #[must_use]
    pub fn header_id(&self) -> &str {
        &self.tabs.header
    }

    #[must_use]
    pub fn subnav_id(&self) -> &str {
        &self.tabs.subnav
    }

    #[must_use]
    pub fn selection(&self) -> NavigationSelection {
        NavigationSelection {
            section: self.section,
            header: self.tabs.header.clone(),
            subnav: self.tabs.subnav.clone(),
        }
    }

    #[must_use]
    pub fn content_key(&self) -> ContentKey {
        ContentKey::new(self.section, self.tabs.header.clone(), self.tabs.subnav.clone())
    }

    #[must_use]
    pub fn current_group(&self) -> Option<&NavigationGroup> {
        self.tree.group(self.section)
    }

    #[must_use]
    pub fn current_header_items(&self) -> &[NavItem] {
        self.current_group().map_or(&[], NavigationGroup::header)
    }

    #[must_use]
    pub fn current_subnav_items(&self) -> &[NavItem] {
        self.current_group()
            .map_or(&[], |group| group.subnav_for(&self.tabs.header))
    }

    /// Whether the subnav panel renders at all for this section, independent
    /// of which header tab is active.
    #[must_use]
    pub fn has_subnav(&self) -> bool {
        self.current_group().is_some_and(NavigationGroup::has_subnav)
    }
}

/// Snapshot of an overlay application's selection path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverlaySelection {
    pub header: String,
    pub subnav: String,
}

/// Two-level navigation scoped to one overlay application.
///
/// Built fresh whenever the overlay becomes active; nothing carries over
/// from a previous session of the same app.
#[derive(Debug, Clone)]
pub struct OverlayNavigation {
    app: OverlayId,
    group: Arc<NavigationGroup>,
    tabs: TabCursor,
}

const MISSING_LABEL: &str = "...";

impl OverlayNavigation {
    #[must_use]
    pub fn new(app: OverlayId, group: Arc<NavigationGroup>) -> Self {
        let tabs = TabCursor::first_of(&group);
        Self { app, group, tabs }
    }

    /// Switch sub-app (header tab) and reset the subnav.
    pub fn select_header(&mut self, header_id: &str) -> Result<(), InvalidSelectionError> {
        self.tabs
            .select_header(&self.group, self.app.as_str(), header_id)
    }

    pub fn select_subnav(&mut self, subnav_id: &str) -> Result<(), InvalidSelectionError> {
        self.tabs
            .select_subnav(&self.group, self.app.as_str(), subnav_id)
    }

    #[must_use]
    pub fn app(&self) -> OverlayId {
        self.app
    }

    #[must_use]
    pub fn header_id(&self) -> &str {
        &self.tabs.header
    }

    #[must_use]
    pub fn subnav_id(&self) -> &str {
        &self.tabs.subnav
    }

    #[must_use]
    pub fn selection(&self) -> OverlaySelection {
        OverlaySelection {
            header: self.tabs.header.clone(),
            subnav: self.tabs.subnav.clone(),
        }
    }

    #[must_use]
    pub fn current_header_items(&self) -> &[NavItem] {
        self.group.header()
    }

    #[must_use]
    pub fn current_subnav_items(&self) -> &[NavItem] {
        self.group.subnav_for(&self.tabs.header)
    }

    /// True when any sub-app owns subnav items.
    #[must_use]
    pub fn has_subnav(&self) -> bool {
        self.group.has_subnav()
    }

    /// True when the active sub-app owns subnav items.
    #[must_use]
    pub fn has_active_subnav(&self) -> bool {
        !self.current_subnav_items().is_empty()
    }

    /// Header and subnav labels for the active path, `...` where missing.
    #[must_use]
    pub fn breadcrumb(&self) -> (&str, &str) {
        let header = self
            .group
            .header_label(&self.tabs.header)
            .unwrap_or(MISSING_LABEL);
        let subnav = self
            .group
            .subnav_label(&self.tabs.header, &self.tabs.subnav)
            .unwrap_or(MISSING_LABEL);
        (header, subnav)
    }
}
