use serde::Deserialize;
use std::io::Write;
use std::path::Path;
use std::time::Duration;
use std::{env, fs, path::PathBuf};

use dashdeck_types::{SectionId, Theme};
use tempfile::NamedTempFile;
use thiserror::Error;

/// Environment variable that overrides the config file location.
pub const CONFIG_ENV: &str = "DASHDECK_CONFIG";

const DEFAULT_SECTION: SectionId = SectionId::Communication;

#[derive(Debug, Default, Deserialize)]
pub struct DashdeckConfig {
    pub app: Option<AppConfig>,
    pub navigation: Option<NavigationConfig>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config at {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse config at {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

impl ConfigError {
    pub fn path(&self) -> &PathBuf {
        match self {
            ConfigError::Read { path, .. } | ConfigError::Parse { path, .. } => path,
        }
    }
}

/// Shell chrome defaults.
///
/// ```toml
/// [app]
/// theme = "dark"
/// left_sidebar_open = true
/// right_sidebar_open = true
/// focus_return_delay_ms = 0
/// ```
#[derive(Debug, Default, Deserialize)]
pub struct AppConfig {
    /// `"light"` or `"dark"`.
    pub theme: Option<String>,
    pub left_sidebar_open: Option<bool>,
    pub right_sidebar_open: Option<bool>,
    /// Delay before focus returns to the launching control after an overlay
    /// closes or minimizes.
    pub focus_return_delay_ms: Option<u64>,
}

#[derive(Debug, Default, Deserialize)]
pub struct NavigationConfig {
    /// Section shown at startup.
    pub initial_section: Option<String>,
}

impl DashdeckConfig {
    pub fn load() -> Result<Option<Self>, ConfigError> {
        let Some(path) = config_path() else {
            return Ok(None);
        };
        Self::load_from(&path)
    }

    /// Load from an explicit path. A missing file is not an error.
    pub fn load_from(path: &Path) -> Result<Option<Self>, ConfigError> {
        if !path.exists() {
            return Ok(None);
        }

        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) => {
                tracing::warn!("Failed to read config at {:?}: {}", path, err);
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source: err,
                });
            }
        };

        Self::parse(&content)
            .map(Some)
            .map_err(|err| {
                tracing::warn!("Failed to parse config at {:?}: {}", path, err);
                ConfigError::Parse {
                    path: path.to_path_buf(),
                    source: err,
                }
            })
    }

    /// Parse TOML text. Values are taken literally.
    pub fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    #[must_use]
    pub fn path() -> Option<PathBuf> {
        config_path()
    }

    /// Persist the theme to the config file.
    pub fn persist_theme(theme: Theme) -> std::io::Result<()> {
        let Some(path) = config_path() else {
            return Err(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "Could not determine config path",
            ));
        };
        persist_theme_at(&path, theme)
    }
}

/// Rewrite `[app].theme` in the file at `path`.
///
/// Uses `toml_edit` so comments and unrelated keys survive. Creates the file
/// and its parent directory if needed.
pub fn persist_theme_at(path: &Path, theme: Theme) -> std::io::Result<()> {
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent)?;

    let content = if path.exists() {
        fs::read_to_string(path)?
    } else {
        String::new()
    };

    let mut doc = content
        .parse::<toml_edit::DocumentMut>()
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;

    if !doc.contains_key("app") {
        doc["app"] = toml_edit::Item::Table(toml_edit::Table::new());
    }
    doc["app"]["theme"] = toml_edit::value(theme.as_str());

    let mut tmp = NamedTempFile::new_in(parent)?;
    tmp.write_all(doc.to_string().as_bytes())?;
    tmp.as_file().sync_all()?;
    tmp.persist(path).map_err(|err| err.error)?;

    tracing::debug!(path = %path.display(), theme = theme.as_str(), "Persisted theme");
    Ok(())
}

/// `$DASHDECK_CONFIG`, else `~/.dashdeck/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    if let Some(custom) = env::var_os(CONFIG_ENV).filter(|value| !value.is_empty()) {
        return Some(PathBuf::from(custom));
    }
    dirs::home_dir().map(|home| home.join(".dashdeck").join("config.toml"))
}

// ============================================================================
// Resolved startup options
// ============================================================================

/// Startup options for a [`crate::Shell`], with invalid config values
/// replaced by defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellOptions {
    pub theme: Theme,
    pub left_sidebar_open: bool,
    pub right_sidebar_open: bool,
    pub initial_section: SectionId,
    pub focus_return_delay: Duration,
}

impl Default for ShellOptions {
    fn default() -> Self {
        Self {
            theme: Theme::default(),
            left_sidebar_open: true,
            right_sidebar_open: true,
            initial_section: DEFAULT_SECTION,
            focus_return_delay: Duration::ZERO,
        }
    }
}

impl ShellOptions {
    #[must_use]
    pub fn from_config(config: &DashdeckConfig) -> Self {
        let mut options = Self::default();

        if let Some(app) = config.app.as_ref() {
            if let Some(raw) = app.theme.as_deref() {
                match Theme::parse(raw) {
                    Some(theme) => options.theme = theme,
                    None => tracing::warn!(theme = raw, "Unknown theme in config; using default"),
                }
            }
            if let Some(open) = app.left_sidebar_open {
                options.left_sidebar_open = open;
            }
            if let Some(open) = app.right_sidebar_open {
                options.right_sidebar_open = open;
            }
            if let Some(ms) = app.focus_return_delay_ms {
                options.focus_return_delay = Duration::from_millis(ms);
            }
        }

        if let Some(raw) = config
            .navigation
            .as_ref()
            .and_then(|nav| nav.initial_section.as_deref())
        {
            match SectionId::parse(raw) {
                Some(section) => options.initial_section = section,
                None => tracing::warn!(
                    section = raw,
                    "Unknown initial_section in config; using default"
                ),
            }
        }

        options
    }
}
