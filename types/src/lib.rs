//! Core domain types for dashdeck.
//!
//! This crate contains pure domain types with no IO, no async, and minimal dependencies.
//! Navigation selection, overlay lifecycle and shell chrome live here as plain
//! state machines; the engine crate owns them and wires in side effects.

// Pedantic lint configuration - these are intentional design choices
#![allow(clippy::missing_errors_doc)] // Result-returning functions are self-explanatory
#![allow(clippy::missing_panics_doc)] // Panics are documented in assertions

mod chrome;
mod ids;
mod nav;
mod navigation;
mod overlay;
mod settings;

pub use chrome::{ShellChrome, Theme};
pub use ids::{OverlayId, SectionId, UnknownOverlayError, UnknownSectionError};
pub use nav::{IconName, NavItem, NavigationGroup, NavigationTree, TreeError};
pub use navigation::{
    ContentKey, InvalidSelectionError, NavigationModel, NavigationSelection, OverlayNavigation,
    OverlaySelection,
};
pub use overlay::{
    FocusReturn, LifecycleOutcome, OverlayLifecycle, OverlayState, Transition, TriggerRef,
};
pub use settings::{SettingItem, SettingValue, SettingsPanel, ValidationRule, categories};

use serde::{Deserialize, Serialize};
use thiserror::Error;

// ============================================================================
// NonEmpty String Types
// ============================================================================

/// A string guaranteed to be non-empty (after trimming).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct NonEmptyString(String);

#[derive(Debug, Error)]
#[error("value must not be empty")]
pub struct EmptyStringError;

impl NonEmptyString {
    pub fn new(value: impl Into<String>) -> Result<Self, EmptyStringError> {
        let value = value.into();
        if value.trim().is_empty() {
            Err(EmptyStringError)
        } else {
            Ok(Self(value))
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl TryFrom<String> for NonEmptyString {
    type Error = EmptyStringError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for NonEmptyString {
    type Error = EmptyStringError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<NonEmptyString> for String {
    fn from(value: NonEmptyString) -> Self {
        value.0
    }
}

impl std::ops::Deref for NonEmptyString {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        self.as_str()
    }
}

impl AsRef<str> for NonEmptyString {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
