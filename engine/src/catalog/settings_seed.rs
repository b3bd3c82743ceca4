//! Initial studio settings and the per-app settings panels.

use dashdeck_types::IconName as I;
use dashdeck_types::{SettingItem, SettingValue, SettingsPanel, ValidationRule};

fn item(
    id: &str,
    label: &str,
    description: &str,
    icon: I,
    category: &str,
    value: SettingValue,
) -> SettingItem {
    SettingItem {
        id: id.to_string(),
        label: label.to_string(),
        description: description.to_string(),
        icon,
        category: category.to_string(),
        value,
    }
}

fn text(value: &str, placeholder: &str, pattern: &str, message: &str) -> SettingValue {
    SettingValue::Text {
        value: value.to_string(),
        placeholder: Some(placeholder.to_string()),
        validation: Some(ValidationRule {
            pattern: pattern.to_string(),
            message: message.to_string(),
        }),
    }
}

fn select(value: &str, options: &[&str]) -> SettingValue {
    SettingValue::Select {
        value: value.to_string(),
        options: options.iter().map(|option| (*option).to_string()).collect(),
    }
}

pub(super) fn studio_settings() -> Vec<SettingItem> {
    vec![
        item(
            "project-name",
            "Project Name",
            "The default name for new projects created in the studio.",
            I::Briefcase,
            "General",
            text(
                "My Awesome Project",
                "Project Name",
                "^.+$",
                "Project Name cannot be empty.",
            ),
        ),
        item(
            "auto-save",
            "Auto-save",
            "Automatically save your work every 5 minutes to prevent data loss.",
            I::Check,
            "General",
            SettingValue::Boolean { value: false },
        ),
        item(
            "dark-mode",
            "Editor Theme",
            "Toggle the dark mode for the studio editor interface.",
            I::Moon,
            "Appearance",
            SettingValue::Boolean { value: true },
        ),
        item(
            "export-quality",
            "Default Export Quality",
            "Set the default resolution for video and image exports.",
            I::Photo,
            "Exports",
            select("1080p", &["720p", "1080p", "4K"]),
        ),
        item(
            "watermark",
            "Add Watermark",
            "Automatically add a watermark to all exported content.",
            I::Sparkles,
            "Exports",
            SettingValue::Boolean { value: false },
        ),
        item(
            "studio-api-key",
            "Studio API Key",
            "Your personal API key for third-party integrations.",
            I::Cog6Tooth,
            "Integrations",
            text(
                "sflk-j329-982f-23js",
                "Enter API Key",
                "^[a-zA-Z0-9-]+$",
                "API Key can only contain letters, numbers, and hyphens.",
            ),
        ),
        item(
            "unsplash-api-key",
            "Unsplash API Key",
            "API key for the Unsplash integration to access their photo library.",
            I::Photo,
            "Integrations",
            text(
                "",
                "Enter Unsplash Key",
                "^[a-zA-Z0-9_-]{40,}$|^$",
                "A valid Unsplash key is typically at least 40 characters long.",
            ),
        ),
        item(
            "pexels-api-key",
            "Pexels API Key",
            "API key for the Pexels integration to access their photo and video library.",
            I::Film,
            "Integrations",
            text(
                "",
                "Enter Pexels Key",
                "^[a-zA-Z0-9]{50,}$|^$",
                "A valid Pexels key is typically at least 50 characters long.",
            ),
        ),
        item(
            "template-image-source",
            "Default Image Source",
            "Choose the default service for fetching images for templates.",
            I::Photo,
            "Templates",
            select("Unsplash", &["Unsplash", "Pexels", "Local"]),
        ),
    ]
}

pub(super) fn app_settings_panels() -> Vec<SettingsPanel> {
    [
        ("general", "General", I::Cog6Tooth),
        ("permissions", "User Permissions", I::WrenchScrewdriver),
        ("integrations", "API & Integrations", I::SquaresPlus),
        ("analytics", "Usage Analytics", I::Calculator),
    ]
    .into_iter()
    .map(|(id, label, icon)| SettingsPanel {
        id: id.to_string(),
        label: label.to_string(),
        icon,
    })
    .collect()
}
