use dashdeck_types::{
    EmptyStringError, InvalidSelectionError, TreeError, UnknownOverlayError,
};
use thiserror::Error;

use crate::settings::SettingsError;

/// Everything a [`crate::Shell`] operation can reject.
#[derive(Debug, Error)]
pub enum ShellError {
    #[error(transparent)]
    Selection(#[from] InvalidSelectionError),
    #[error(transparent)]
    UnknownOverlay(#[from] UnknownOverlayError),
    #[error(transparent)]
    Tree(#[from] TreeError),
    #[error(transparent)]
    Settings(#[from] SettingsError),
    #[error("trigger name must not be empty")]
    EmptyTrigger(#[from] EmptyStringError),
    #[error("no overlay application is active")]
    NoActiveOverlay,
    #[error("{0}")]
    Usage(String),
}
