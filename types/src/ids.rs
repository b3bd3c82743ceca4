//! Closed identifier sets for navigation sections and overlay applications.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Top-level destination in the right sidebar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionId {
    Dashboard,
    School,
    Crm,
    ToolPlatform,
    Communication,
    ConciergeAi,
    OverlaySetting,
    Setting,
}

impl SectionId {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            SectionId::Dashboard => "dashboard",
            SectionId::School => "school",
            SectionId::Crm => "crm",
            SectionId::ToolPlatform => "tool_platform",
            SectionId::Communication => "communication",
            SectionId::ConciergeAi => "concierge_ai",
            SectionId::OverlaySetting => "overlay_setting",
            SectionId::Setting => "setting",
        }
    }

    /// Sidebar order.
    #[must_use]
    pub const fn all() -> &'static [SectionId] {
        &[
            SectionId::Dashboard,
            SectionId::School,
            SectionId::Crm,
            SectionId::ToolPlatform,
            SectionId::Communication,
            SectionId::ConciergeAi,
            SectionId::OverlaySetting,
            SectionId::Setting,
        ]
    }

    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        Self::all()
            .iter()
            .copied()
            .find(|section| section.as_str().eq_ignore_ascii_case(trimmed))
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown section `{0}`")]
pub struct UnknownSectionError(pub String);

impl FromStr for SectionId {
    type Err = UnknownSectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| UnknownSectionError(s.trim().to_string()))
    }
}

/// Overlay application that can be launched from the footer tray.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OverlayId {
    Studio,
    Media,
    Gamification,
    Leisure,
    Market,
    Lifestyle,
    Hobbies,
    Knowledge,
    Sports,
    Religion,
    Services,
}

impl OverlayId {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            OverlayId::Studio => "studio",
            OverlayId::Media => "media",
            OverlayId::Gamification => "gamification",
            OverlayId::Leisure => "leisure",
            OverlayId::Market => "market",
            OverlayId::Lifestyle => "lifestyle",
            OverlayId::Hobbies => "hobbies",
            OverlayId::Knowledge => "knowledge",
            OverlayId::Sports => "sports",
            OverlayId::Religion => "religion",
            OverlayId::Services => "services",
        }
    }

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            OverlayId::Studio => "Studio",
            OverlayId::Media => "Media",
            OverlayId::Gamification => "Gamification",
            OverlayId::Leisure => "Leisure",
            OverlayId::Market => "Market",
            OverlayId::Lifestyle => "Lifestyle",
            OverlayId::Hobbies => "Hobbies",
            OverlayId::Knowledge => "Knowledge",
            OverlayId::Sports => "Sports",
            OverlayId::Religion => "Religion",
            OverlayId::Services => "Services",
        }
    }

    /// Tray order.
    #[must_use]
    pub const fn all() -> &'static [OverlayId] {
        &[
            OverlayId::Studio,
            OverlayId::Media,
            OverlayId::Gamification,
            OverlayId::Leisure,
            OverlayId::Market,
            OverlayId::Lifestyle,
            OverlayId::Hobbies,
            OverlayId::Knowledge,
            OverlayId::Sports,
            OverlayId::Religion,
            OverlayId::Services,
        ]
    }

    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        Self::all()
            .iter()
            .copied()
            .find(|app| app.as_str().eq_ignore_ascii_case(trimmed))
    }
}

impl fmt::Display for OverlayId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A lifecycle call named an overlay outside the closed set.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown overlay application `{0}`")]
pub struct UnknownOverlayError(pub String);

impl FromStr for OverlayId {
    type Err = UnknownOverlayError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| UnknownOverlayError(s.trim().to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::{OverlayId, SectionId, UnknownOverlayError};

    #[test]
    fn section_round_trips_through_str() {
        for section in SectionId::all() {
            assert_eq!(section.as_str().parse::<SectionId>(), Ok(*section));
        }
    }

    #[test]
    fn section_parse_is_case_insensitive_and_trimmed() {
        assert_eq!(SectionId::parse("  Tool_Platform "), Some(SectionId::ToolPlatform));
        assert_eq!(SectionId::parse("tool-platform"), None);
    }

    #[test]
    fn overlay_parse_rejects_unknown_ids() {
        assert_eq!(
            "arcade".parse::<OverlayId>(),
            Err(UnknownOverlayError("arcade".to_string()))
        );
        assert_eq!("STUDIO".parse::<OverlayId>(), Ok(OverlayId::Studio));
    }

    #[test]
    fn serde_uses_snake_case_ids() {
        let json = serde_json::to_string(&SectionId::ConciergeAi).unwrap();
        assert_eq!(json, "\"concierge_ai\"");
        let app: OverlayId = serde_json::from_str("\"gamification\"").unwrap();
        assert_eq!(app, OverlayId::Gamification);
    }

    #[test]
    fn every_overlay_has_a_display_name() {
        assert_eq!(OverlayId::all().len(), 11);
        for app in OverlayId::all() {
            assert!(!app.display_name().is_empty());
        }
    }
}
