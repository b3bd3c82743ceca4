//! Settings records shown by the overlay-settings panels.

use serde::{Deserialize, Serialize};

use crate::IconName;

/// Pattern a text setting must match, plus the message shown when it does not.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationRule {
    pub pattern: String,
    pub message: String,
}

/// Typed value of a setting. Serialized with a `type` tag next to the
/// item's other fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SettingValue {
    #[serde(rename = "boolean")]
    Boolean { value: bool },
    #[serde(rename = "string")]
    Text {
        value: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        placeholder: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        validation: Option<ValidationRule>,
    },
    #[serde(rename = "select")]
    Select { value: String, options: Vec<String> },
}

impl SettingValue {
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            SettingValue::Boolean { .. } => "boolean",
            SettingValue::Text { .. } => "string",
            SettingValue::Select { .. } => "select",
        }
    }

    /// Current value as display text.
    #[must_use]
    pub fn display_value(&self) -> String {
        match self {
            SettingValue::Boolean { value } => if *value { "on" } else { "off" }.to_string(),
            SettingValue::Text { value, .. } | SettingValue::Select { value, .. } => value.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettingItem {
    pub id: String,
    pub label: String,
    pub description: String,
    pub icon: IconName,
    pub category: String,
    #[serde(flatten)]
    pub value: SettingValue,
}

/// Entry in a per-app settings panel. These carry no value yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettingsPanel {
    pub id: String,
    pub label: String,
    pub icon: IconName,
}

/// Distinct categories in first-seen order.
#[must_use]
pub fn categories(items: &[SettingItem]) -> Vec<String> {
    let mut seen: Vec<String> = Vec::new();
    for item in items {
        if !seen.iter().any(|category| *category == item.category) {
            seen.push(item.category.clone());
        }
    }
    seen
}

#[cfg(test)]
mod tests {
    use super::{SettingItem, SettingValue, ValidationRule, categories};
    use crate::IconName;

    fn text_item(id: &str, category: &str) -> SettingItem {
        SettingItem {
            id: id.to_string(),
            label: id.to_uppercase(),
            description: String::new(),
            icon: IconName::Cog6Tooth,
            category: category.to_string(),
            value: SettingValue::Text {
                value: "x".to_string(),
                placeholder: None,
                validation: Some(ValidationRule {
                    pattern: "^.+$".to_string(),
                    message: "required".to_string(),
                }),
            },
        }
    }

    #[test]
    fn categories_keep_first_seen_order() {
        let items = vec![
            text_item("a", "General"),
            text_item("b", "Exports"),
            text_item("c", "General"),
            text_item("d", "Templates"),
        ];
        assert_eq!(categories(&items), vec!["General", "Exports", "Templates"]);
    }

    #[test]
    fn value_is_tagged_inline() {
        let json = serde_json::to_value(text_item("project-name", "General")).unwrap();
        assert_eq!(json["type"], "string");
        assert_eq!(json["value"], "x");
        assert_eq!(json["icon"], "cog-6-tooth-icon");
        assert_eq!(json["validation"]["message"], "required");

        let back: SettingItem = serde_json::from_value(json).unwrap();
        assert_eq!(back.value.kind(), "string");
    }

    #[test]
    fn boolean_display_value() {
        assert_eq!(SettingValue::Boolean { value: true }.display_value(), "on");
        assert_eq!(SettingValue::Boolean { value: false }.display_value(), "off");
    }
}
