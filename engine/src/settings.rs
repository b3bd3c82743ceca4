//! Studio settings: an async store plus a draft editor.
//!
//! The editor works on a copy of what the store returned. Edits are validated
//! per field as they happen and again in full before a save; a save with any
//! failing field sends nothing.

use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;
use std::time::Duration;

use dashdeck_types::{SettingItem, SettingValue, categories};
use regex::Regex;
use thiserror::Error;
use tokio::sync::RwLock;

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("unknown setting `{0}`")]
    UnknownSetting(String),
    #[error("unknown settings category `{0}`")]
    UnknownCategory(String),
    #[error("setting `{id}` expects a {expected} value")]
    TypeMismatch { id: String, expected: &'static str },
    #[error("`{value}` is not an option for `{id}`")]
    InvalidOption { id: String, value: String },
    #[error("setting `{id}` has an invalid validation pattern")]
    InvalidPattern {
        id: String,
        #[source]
        source: regex::Error,
    },
    #[error("{count} setting(s) failed validation")]
    ValidationFailed { count: usize },
    #[error("settings editor is not open")]
    NotOpen,
    #[error("failed to encode settings: {0}")]
    Encode(#[from] serde_json::Error),
}

/// In-memory settings store with optional simulated latency.
///
/// Cloning shares the store. Reads and writes hand out deep copies.
#[derive(Debug, Clone)]
pub struct SettingsService {
    store: Arc<RwLock<Vec<SettingItem>>>,
    latency: Duration,
}

impl SettingsService {
    #[must_use]
    pub fn new(seed: Vec<SettingItem>) -> Self {
        Self {
            store: Arc::new(RwLock::new(seed)),
            latency: Duration::ZERO,
        }
    }

    #[must_use]
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    async fn simulate_latency(&self) {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
    }

    pub async fn fetch(&self) -> Result<Vec<SettingItem>, SettingsError> {
        self.simulate_latency().await;
        let items = self.store.read().await.clone();
        tracing::debug!(count = items.len(), "Fetched studio settings");
        Ok(items)
    }

    /// Replace the stored items. Every id must already exist in the store.
    pub async fn update(&self, items: Vec<SettingItem>) -> Result<(), SettingsError> {
        self.simulate_latency().await;
        let mut store = self.store.write().await;
        if let Some(unknown) = items
            .iter()
            .find(|item| !store.iter().any(|stored| stored.id == item.id))
        {
            return Err(SettingsError::UnknownSetting(unknown.id.clone()));
        }
        tracing::debug!(count = items.len(), "Updated studio settings");
        *store = items;
        Ok(())
    }

    /// Stored items as pretty-printed JSON.
    pub async fn export_json(&self) -> Result<String, SettingsError> {
        let items = self.fetch().await?;
        Ok(serde_json::to_string_pretty(&items)?)
    }
}

/// Value supplied for a single field edit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SettingInput {
    Bool(bool),
    Text(String),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SaveStatus {
    #[default]
    Idle,
    Pending,
    Saved,
}

impl SaveStatus {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            SaveStatus::Idle => "idle",
            SaveStatus::Pending => "pending",
            SaveStatus::Saved => "saved",
        }
    }
}

fn compile_patterns(items: &[SettingItem]) -> Result<HashMap<String, Regex>, SettingsError> {
    let mut patterns = HashMap::new();
    for item in items {
        if let SettingValue::Text {
            validation: Some(rule),
            ..
        } = &item.value
        {
            let regex = Regex::new(&rule.pattern).map_err(|source| SettingsError::InvalidPattern {
                id: item.id.clone(),
                source,
            })?;
            patterns.insert(item.id.clone(), regex);
        }
    }
    Ok(patterns)
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "on" | "yes" | "1" => Some(true),
        "false" | "off" | "no" | "0" => Some(false),
        _ => None,
    }
}

#[derive(Debug, Clone)]
pub struct SettingsEditor {
    baseline: Vec<SettingItem>,
    draft: Vec<SettingItem>,
    patterns: HashMap<String, Regex>,
    errors: BTreeMap<String, String>,
    active_category: String,
    status: SaveStatus,
}

impl SettingsEditor {
    pub fn new(items: Vec<SettingItem>) -> Result<Self, SettingsError> {
        let patterns = compile_patterns(&items)?;
        let active_category = categories(&items).into_iter().next().unwrap_or_default();
        Ok(Self {
            draft: items.clone(),
            baseline: items,
            patterns,
            errors: BTreeMap::new(),
            active_category,
            status: SaveStatus::Idle,
        })
    }

    /// Fetch from `service` and open an editor on the result.
    pub async fn open(service: &SettingsService) -> Result<Self, SettingsError> {
        Self::new(service.fetch().await?)
    }

    #[must_use]
    pub fn items(&self) -> &[SettingItem] {
        &self.draft
    }

    #[must_use]
    pub fn item(&self, id: &str) -> Option<&SettingItem> {
        self.draft.iter().find(|item| item.id == id)
    }

    /// Categories in first-seen order.
    #[must_use]
    pub fn categories(&self) -> Vec<String> {
        categories(&self.draft)
    }

    #[must_use]
    pub fn active_category(&self) -> &str {
        &self.active_category
    }

    pub fn select_category(&mut self, category: &str) -> Result<(), SettingsError> {
        if !self.draft.iter().any(|item| item.category == category) {
            return Err(SettingsError::UnknownCategory(category.to_string()));
        }
        self.active_category = category.to_string();
        Ok(())
    }

    /// Items in the active category.
    pub fn visible_items(&self) -> impl Iterator<Item = &SettingItem> {
        self.draft
            .iter()
            .filter(|item| item.category == self.active_category)
    }

    /// Edit one field.
    ///
    /// Unknown ids, values of the wrong kind and select values outside the
    /// option list are rejected without touching the draft. A text value that
    /// fails its pattern is still stored; the message shows up in
    /// [`Self::errors`] until the field is fixed.
    pub fn set_value(&mut self, id: &str, input: SettingInput) -> Result<(), SettingsError> {
        let pattern = self.patterns.get(id);
        let item = self
            .draft
            .iter_mut()
            .find(|item| item.id == id)
            .ok_or_else(|| SettingsError::UnknownSetting(id.to_string()))?;

        let error = match (&mut item.value, input) {
            (SettingValue::Boolean { value }, SettingInput::Bool(new)) => {
                *value = new;
                None
            }
            (SettingValue::Text { value, validation, .. }, SettingInput::Text(new)) => {
                let error = match (pattern, validation.as_ref()) {
                    (Some(regex), Some(rule)) if !regex.is_match(&new) => Some(rule.message.clone()),
                    _ => None,
                };
                *value = new;
                error
            }
            (SettingValue::Select { value, options }, SettingInput::Text(new)) => {
                if !options.contains(&new) {
                    return Err(SettingsError::InvalidOption {
                        id: id.to_string(),
                        value: new,
                    });
                }
                *value = new;
                None
            }
            (other, _) => {
                return Err(SettingsError::TypeMismatch {
                    id: id.to_string(),
                    expected: other.kind(),
                });
            }
        };

        match error {
            Some(message) => {
                self.errors.insert(id.to_string(), message);
            }
            None => {
                self.errors.remove(id);
            }
        }
        self.status = SaveStatus::Idle;
        Ok(())
    }

    /// Edit one field from text, reading booleans as `on`/`off`/`true`/`false`.
    pub fn set_raw(&mut self, id: &str, raw: &str) -> Result<(), SettingsError> {
        let item = self
            .item(id)
            .ok_or_else(|| SettingsError::UnknownSetting(id.to_string()))?;
        let input = match item.value {
            SettingValue::Boolean { .. } => {
                SettingInput::Bool(parse_bool(raw).ok_or_else(|| SettingsError::TypeMismatch {
                    id: id.to_string(),
                    expected: "boolean",
                })?)
            }
            SettingValue::Text { .. } | SettingValue::Select { .. } => {
                SettingInput::Text(raw.to_string())
            }
        };
        self.set_value(id, input)
    }

    /// Field id to message, for every field currently failing validation.
    #[must_use]
    pub fn errors(&self) -> &BTreeMap<String, String> {
        &self.errors
    }

    #[must_use]
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Re-check every text field. Returns true when all pass.
    pub fn validate_all(&mut self) -> bool {
        self.errors.clear();
        for item in &self.draft {
            if let SettingValue::Text {
                value,
                validation: Some(rule),
                ..
            } = &item.value
                && let Some(regex) = self.patterns.get(&item.id)
                && !regex.is_match(value)
            {
                self.errors.insert(item.id.clone(), rule.message.clone());
            }
        }
        self.errors.is_empty()
    }

    /// Draft differs from what was last fetched.
    #[must_use]
    pub fn is_dirty(&self) -> bool {
        self.draft != self.baseline
    }

    #[must_use]
    pub fn status(&self) -> SaveStatus {
        self.status
    }

    /// Validate, push the draft to `service` and reload from it.
    pub async fn save(&mut self, service: &SettingsService) -> Result<(), SettingsError> {
        if !self.validate_all() {
            let count = self.errors.len();
            tracing::warn!(count, "Refusing to save settings with validation errors");
            return Err(SettingsError::ValidationFailed { count });
        }

        self.status = SaveStatus::Pending;
        if let Err(err) = service.update(self.draft.clone()).await {
            self.status = SaveStatus::Idle;
            return Err(err);
        }
        let fresh = match service.fetch().await {
            Ok(items) => items,
            Err(err) => {
                self.status = SaveStatus::Idle;
                return Err(err);
            }
        };

        self.patterns = compile_patterns(&fresh)?;
        self.draft = fresh.clone();
        self.baseline = fresh;
        self.status = SaveStatus::Saved;
        tracing::info!("Studio settings saved");
        Ok(())
    }
}
