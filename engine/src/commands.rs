//! Line commands for driving a [`Shell`].
//!
//! Each line is one command word followed by its arguments, e.g.
//! `section communication` or `launch studio tray-studio`.

use dashdeck_types::{Theme, Transition};

use crate::{Shell, ShellError, render_status};

#[derive(Debug, Clone, Copy)]
pub struct CommandSpec {
    pub palette_label: &'static str,
    pub help_label: &'static str,
    pub description: &'static str,
    pub show_in_help: bool,
}

const COMMAND_SPECS: &[CommandSpec] = &[
    CommandSpec {
        palette_label: "section <id>",
        help_label: "section",
        description: "Select a right-sidebar section",
        show_in_help: true,
    },
    CommandSpec {
        palette_label: "header <id>",
        help_label: "header",
        description: "Select a header tab in the current section",
        show_in_help: true,
    },
    CommandSpec {
        palette_label: "subnav <id>",
        help_label: "subnav",
        description: "Select a subnav item under the current tab",
        show_in_help: true,
    },
    CommandSpec {
        palette_label: "launch <app> [trigger]",
        help_label: "launch",
        description: "Open an overlay app from the tray",
        show_in_help: true,
    },
    CommandSpec {
        palette_label: "restore <app> [trigger]",
        help_label: "restore",
        description: "Restore a minimized overlay app",
        show_in_help: true,
    },
    CommandSpec {
        palette_label: "close",
        help_label: "close",
        description: "Close the active overlay app",
        show_in_help: true,
    },
    CommandSpec {
        palette_label: "min, minimize",
        help_label: "min(imize)",
        description: "Minimize the active overlay app",
        show_in_help: true,
    },
    CommandSpec {
        palette_label: "dismiss <app>",
        help_label: "dismiss",
        description: "Close a minimized overlay app",
        show_in_help: true,
    },
    CommandSpec {
        palette_label: "oheader <id>",
        help_label: "oheader",
        description: "Select a sub-app in the active overlay",
        show_in_help: true,
    },
    CommandSpec {
        palette_label: "osubnav <id>",
        help_label: "osubnav",
        description: "Select a subnav item in the active overlay",
        show_in_help: true,
    },
    CommandSpec {
        palette_label: "left",
        help_label: "left",
        description: "Toggle the left sidebar",
        show_in_help: true,
    },
    CommandSpec {
        palette_label: "right",
        help_label: "right",
        description: "Toggle the right sidebar",
        show_in_help: true,
    },
    CommandSpec {
        palette_label: "tray",
        help_label: "tray",
        description: "Toggle the app tray",
        show_in_help: true,
    },
    CommandSpec {
        palette_label: "theme",
        help_label: "theme",
        description: "Toggle light/dark theme",
        show_in_help: true,
    },
    CommandSpec {
        palette_label: "settings",
        help_label: "settings",
        description: "Open the studio settings editor",
        show_in_help: true,
    },
    CommandSpec {
        palette_label: "category <name>",
        help_label: "category",
        description: "Switch the settings category",
        show_in_help: true,
    },
    CommandSpec {
        palette_label: "set <id> <value>",
        help_label: "set",
        description: "Edit a studio setting",
        show_in_help: true,
    },
    CommandSpec {
        palette_label: "save",
        help_label: "save",
        description: "Validate and save studio settings",
        show_in_help: true,
    },
    CommandSpec {
        palette_label: "export",
        help_label: "export",
        description: "Print the stored studio settings as JSON",
        show_in_help: true,
    },
    CommandSpec {
        palette_label: "status",
        help_label: "status",
        description: "Show the shell state",
        show_in_help: true,
    },
    CommandSpec {
        palette_label: "q, quit",
        help_label: "q(uit)",
        description: "Exit the application",
        show_in_help: true,
    },
    CommandSpec {
        palette_label: "help",
        help_label: "help",
        description: "Show available commands",
        show_in_help: false,
    },
];

#[must_use]
pub fn command_specs() -> &'static [CommandSpec] {
    COMMAND_SPECS
}

#[must_use]
pub fn command_help_summary() -> String {
    let labels: Vec<&str> = COMMAND_SPECS
        .iter()
        .filter(|spec| spec.show_in_help)
        .map(|spec| spec.help_label)
        .collect();
    format!("Commands: {}", labels.join(", "))
}

/// Parsed command with typed arguments.
#[derive(Debug, PartialEq, Eq)]
pub enum Command<'a> {
    Section(Option<&'a str>),
    Header(Option<&'a str>),
    Subnav(Option<&'a str>),
    Launch {
        app: Option<&'a str>,
        trigger: Option<&'a str>,
    },
    Restore {
        app: Option<&'a str>,
        trigger: Option<&'a str>,
    },
    Close,
    Minimize,
    Dismiss(Option<&'a str>),
    OverlayHeader(Option<&'a str>),
    OverlaySubnav(Option<&'a str>),
    Left,
    Right,
    Tray,
    Theme,
    Settings,
    Category(Option<&'a str>),
    /// `value` is the rest of the line and may contain spaces or be empty.
    Set {
        id: Option<&'a str>,
        value: &'a str,
    },
    Save,
    Export,
    Status,
    Quit,
    Help,
    Unknown(&'a str),
    Empty,
}

fn split_word(raw: &str) -> (&str, &str) {
    let raw = raw.trim_start();
    match raw.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim_start()),
        None => (raw, ""),
    }
}

impl<'a> Command<'a> {
    /// Parse a raw command line into a typed Command.
    pub fn parse(raw: &'a str) -> Self {
        let (word, rest) = split_word(raw.trim());
        let parts: Vec<&str> = rest.split_whitespace().collect();
        let arg = |idx: usize| parts.get(idx).copied();

        match word {
            "" => Command::Empty,
            "section" => Command::Section(arg(0)),
            "header" => Command::Header(arg(0)),
            "subnav" => Command::Subnav(arg(0)),
            "launch" => Command::Launch {
                app: arg(0),
                trigger: arg(1),
            },
            "restore" => Command::Restore {
                app: arg(0),
                trigger: arg(1),
            },
            "close" => Command::Close,
            "min" | "minimize" => Command::Minimize,
            "dismiss" => Command::Dismiss(arg(0)),
            "oheader" => Command::OverlayHeader(arg(0)),
            "osubnav" => Command::OverlaySubnav(arg(0)),
            "left" => Command::Left,
            "right" => Command::Right,
            "tray" => Command::Tray,
            "theme" => Command::Theme,
            "settings" => Command::Settings,
            "category" => Command::Category((!rest.is_empty()).then_some(rest.trim_end())),
            "set" => {
                let (id, value) = split_word(rest);
                Command::Set {
                    id: (!id.is_empty()).then_some(id),
                    value: value.trim_end(),
                }
            }
            "save" => Command::Save,
            "export" => Command::Export,
            "status" => Command::Status,
            "q" | "quit" => Command::Quit,
            "help" => Command::Help,
            other => Command::Unknown(other),
        }
    }
}

/// Result of a processed command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutcome {
    /// Text to show the user.
    Message(String),
    /// Theme changed; the caller may persist it.
    ThemeChanged(Theme),
    Quit,
    Empty,
}

fn required<'a>(value: Option<&'a str>, usage: &str) -> Result<&'a str, ShellError> {
    value.ok_or_else(|| ShellError::Usage(format!("Usage: {usage}")))
}

impl Shell {
    /// Parse and apply one command line.
    pub async fn process_command(&mut self, raw: &str) -> Result<CommandOutcome, ShellError> {
        let parsed = Command::parse(raw);
        tracing::debug!(?parsed, "Processing command");

        let outcome = match parsed {
            Command::Empty => CommandOutcome::Empty,
            Command::Quit => CommandOutcome::Quit,
            Command::Help => CommandOutcome::Message(help_text()),
            Command::Status => CommandOutcome::Message(render_status(self)),
            Command::Section(id) => {
                let section = self.select_section_str(required(id, "section <id>")?)?;
                CommandOutcome::Message(format!(
                    "{section} / {} / {}",
                    self.navigation().header_id(),
                    self.navigation().subnav_id()
                ))
            }
            Command::Header(id) => {
                self.select_header(required(id, "header <id>")?)?;
                CommandOutcome::Message(format!(
                    "header {} / subnav {}",
                    self.navigation().header_id(),
                    self.navigation().subnav_id()
                ))
            }
            Command::Subnav(id) => {
                self.select_subnav(required(id, "subnav <id>")?)?;
                CommandOutcome::Message(format!("subnav {}", self.navigation().subnav_id()))
            }
            Command::Launch { app, trigger } => {
                let app = required(app, "launch <app> [trigger]")?;
                let trigger = trigger.map_or_else(|| format!("tray-{app}"), str::to_string);
                transition_message(self.launch_str(app, &trigger)?)
            }
            Command::Restore { app, trigger } => {
                let app = required(app, "restore <app> [trigger]")?;
                let trigger = trigger.map_or_else(|| format!("minimized-{app}"), str::to_string);
                transition_message(self.restore_str(app, &trigger)?)
            }
            Command::Close => transition_message(self.close_overlay()),
            Command::Minimize => transition_message(self.minimize_overlay()),
            Command::Dismiss(app) => {
                transition_message(self.close_minimized_str(required(app, "dismiss <app>")?)?)
            }
            Command::OverlayHeader(id) => {
                self.overlay_select_header(required(id, "oheader <id>")?)?;
                self.breadcrumb_message()
            }
            Command::OverlaySubnav(id) => {
                self.overlay_select_subnav(required(id, "osubnav <id>")?)?;
                self.breadcrumb_message()
            }
            Command::Left => {
                self.toggle_left_sidebar();
                self.announcement_message()
            }
            Command::Right => {
                self.toggle_right_sidebar();
                self.announcement_message()
            }
            Command::Tray => {
                self.toggle_tray();
                self.announcement_message()
            }
            Command::Theme => CommandOutcome::ThemeChanged(self.toggle_theme()),
            Command::Settings => {
                let editor = self.open_settings().await?;
                CommandOutcome::Message(format!(
                    "Studio settings: {} items in {}",
                    editor.items().len(),
                    editor.categories().join(", ")
                ))
            }
            Command::Category(name) => {
                let name = required(name, "category <name>")?;
                self.select_settings_category(name)?;
                CommandOutcome::Message(format!("Category {name}"))
            }
            Command::Set { id, value } => {
                let id = required(id, "set <id> <value>")?;
                self.set_setting(id, value)?;
                let message = self
                    .settings_editor()
                    .and_then(|editor| editor.errors().get(id).cloned())
                    .unwrap_or_else(|| format!("{id} updated"));
                CommandOutcome::Message(message)
            }
            Command::Save => {
                self.save_settings().await?;
                CommandOutcome::Message("Configuration saved!".to_string())
            }
            Command::Export => CommandOutcome::Message(self.export_settings().await?),
            Command::Unknown(word) => {
                tracing::warn!(command = word, "Unknown command");
                return Err(ShellError::Usage(format!(
                    "Unknown command `{word}`. {}",
                    command_help_summary()
                )));
            }
        };
        Ok(outcome)
    }

    fn breadcrumb_message(&self) -> CommandOutcome {
        match self.overlay_navigation() {
            Some(nav) => {
                let (header, subnav) = nav.breadcrumb();
                CommandOutcome::Message(format!("{} / {header} / {subnav}", nav.app()))
            }
            None => CommandOutcome::Empty,
        }
    }

    fn announcement_message(&self) -> CommandOutcome {
        match self.chrome().announcement() {
            Some(text) => CommandOutcome::Message(text.to_string()),
            None => CommandOutcome::Empty,
        }
    }
}

fn transition_message(transition: Transition) -> CommandOutcome {
    CommandOutcome::Message(
        transition
            .announcement()
            .unwrap_or_else(|| "No change".to_string()),
    )
}

fn help_text() -> String {
    let width = COMMAND_SPECS
        .iter()
        .map(|spec| spec.palette_label.len())
        .max()
        .unwrap_or(0);
    COMMAND_SPECS
        .iter()
        .map(|spec| format!("  {:width$}  {}", spec.palette_label, spec.description))
        .collect::<Vec<_>>()
        .join("\n")
}
