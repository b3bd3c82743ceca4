//! Shell chrome: sidebars, tray, theme and the live announcement.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

/// Visibility flags for the shell's panels plus the text most recently
/// announced to assistive technology.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellChrome {
    left_sidebar_open: bool,
    right_sidebar_open: bool,
    tray_open: bool,
    theme: Theme,
    announcement: Option<String>,
}

impl Default for ShellChrome {
    fn default() -> Self {
        Self::new(true, true, Theme::default())
    }
}

impl ShellChrome {
    #[must_use]
    pub fn new(left_sidebar_open: bool, right_sidebar_open: bool, theme: Theme) -> Self {
        Self {
            left_sidebar_open,
            right_sidebar_open,
            tray_open: false,
            theme,
            announcement: None,
        }
    }

    pub fn toggle_left_sidebar(&mut self) -> bool {
        self.left_sidebar_open = !self.left_sidebar_open;
        self.announce(if self.left_sidebar_open {
            "Left sidebar expanded"
        } else {
            "Left sidebar collapsed"
        });
        self.left_sidebar_open
    }

    pub fn toggle_right_sidebar(&mut self) -> bool {
        self.right_sidebar_open = !self.right_sidebar_open;
        self.announce(if self.right_sidebar_open {
            "Right sidebar expanded"
        } else {
            "Right sidebar collapsed"
        });
        self.right_sidebar_open
    }

    pub fn toggle_tray(&mut self) -> bool {
        self.tray_open = !self.tray_open;
        self.announce(if self.tray_open {
            "App tray opened"
        } else {
            "App tray closed"
        });
        self.tray_open
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
        self.announce(format!("Theme set to {} mode", theme.as_str()));
    }

    pub fn toggle_theme(&mut self) -> Theme {
        self.set_theme(self.theme.toggled());
        self.theme
    }

    pub fn announce(&mut self, message: impl Into<String>) {
        self.announcement = Some(message.into());
    }

    pub fn clear_announcement(&mut self) {
        self.announcement = None;
    }

    #[must_use]
    pub fn left_sidebar_open(&self) -> bool {
        self.left_sidebar_open
    }

    #[must_use]
    pub fn right_sidebar_open(&self) -> bool {
        self.right_sidebar_open
    }

    #[must_use]
    pub fn tray_open(&self) -> bool {
        self.tray_open
    }

    #[must_use]
    pub fn theme(&self) -> Theme {
        self.theme
    }

    #[must_use]
    pub fn announcement(&self) -> Option<&str> {
        self.announcement.as_deref()
    }
}
