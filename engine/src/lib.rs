//! Core engine for dashdeck - the shell coordinator.
//!
//! [`Shell`] owns every piece of UI state (navigation, overlay lifecycle,
//! chrome, settings draft) and applies transitions one at a time in the
//! order they are dispatched. Side effects leave through two seams: focus
//! returns go to a [`FocusSink`] on a deferred task, and settings go through
//! the async [`SettingsService`].

use std::sync::Arc;

use dashdeck_types::{
    FocusReturn, LifecycleOutcome, NavigationModel, OverlayId, OverlayLifecycle, OverlayNavigation,
    SectionId, ShellChrome, Theme, Transition, TriggerRef,
};

pub use dashdeck_types;

mod catalog;
mod commands;
mod config;
mod error;
mod focus;
mod settings;
mod status;

pub use catalog::{
    Card, Catalog, ContentView, OverlayAppEntry, SectionEntry, overlay_icon, section_icon,
    section_label,
};
pub use commands::{Command, CommandOutcome, CommandSpec, command_help_summary, command_specs};
pub use config::{
    AppConfig, CONFIG_ENV, ConfigError, DashdeckConfig, NavigationConfig, ShellOptions,
    config_path, persist_theme_at,
};
pub use error::ShellError;
pub use focus::{FocusReturnScheduler, FocusSink, NoopFocusSink};
pub use settings::{SaveStatus, SettingInput, SettingsEditor, SettingsError, SettingsService};
pub use status::render_status;

#[derive(Debug)]
pub struct Shell {
    catalog: Catalog,
    navigation: NavigationModel,
    overlays: OverlayLifecycle,
    overlay_navigation: Option<OverlayNavigation>,
    chrome: ShellChrome,
    focus: FocusReturnScheduler,
    settings: SettingsService,
    editor: Option<SettingsEditor>,
}

impl Shell {
    pub fn new(
        catalog: Catalog,
        options: &ShellOptions,
        sink: Arc<dyn FocusSink>,
    ) -> Result<Self, ShellError> {
        let navigation = NavigationModel::new(catalog.tree(), options.initial_section)?;
        let settings = SettingsService::new(catalog.studio_settings_seed());
        tracing::info!(
            section = %options.initial_section,
            theme = options.theme.as_str(),
            "Shell started"
        );
        Ok(Self {
            navigation,
            overlays: OverlayLifecycle::new(),
            overlay_navigation: None,
            chrome: ShellChrome::new(
                options.left_sidebar_open,
                options.right_sidebar_open,
                options.theme,
            ),
            focus: FocusReturnScheduler::new(sink, options.focus_return_delay),
            settings,
            editor: None,
            catalog,
        })
    }

    /// Shell on the built-in catalog with default options and no focus sink.
    pub fn with_defaults() -> Result<Self, ShellError> {
        Self::new(
            Catalog::builtin()?,
            &ShellOptions::default(),
            Arc::new(NoopFocusSink),
        )
    }

    // ========================================================================
    // Read access
    // ========================================================================

    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    #[must_use]
    pub fn navigation(&self) -> &NavigationModel {
        &self.navigation
    }

    #[must_use]
    pub fn overlays(&self) -> &OverlayLifecycle {
        &self.overlays
    }

    /// Navigation of the active overlay, if any.
    #[must_use]
    pub fn overlay_navigation(&self) -> Option<&OverlayNavigation> {
        self.overlay_navigation.as_ref()
    }

    #[must_use]
    pub fn chrome(&self) -> &ShellChrome {
        &self.chrome
    }

    #[must_use]
    pub fn section_label(&self) -> &'static str {
        section_label(self.navigation.section())
    }

    #[must_use]
    pub fn content(&self) -> ContentView<'_> {
        self.catalog.resolve(&self.navigation.content_key())
    }

    // ========================================================================
    // Main navigation
    // ========================================================================

    pub fn select_section(&mut self, section: SectionId) -> Result<(), ShellError> {
        self.navigation.select_section(section)?;
        self.chrome
            .announce(format!("Navigated to {} section", section_label(section)));
        tracing::debug!(
            section = %section,
            header = self.navigation.header_id(),
            subnav = self.navigation.subnav_id(),
            "Section selected"
        );
        Ok(())
    }

    pub fn select_section_str(&mut self, raw: &str) -> Result<SectionId, ShellError> {
        let section: SectionId = raw
            .parse()
            .map_err(dashdeck_types::InvalidSelectionError::from)?;
        self.select_section(section)?;
        Ok(section)
    }

    pub fn select_header(&mut self, header_id: &str) -> Result<(), ShellError> {
        self.navigation.select_header(header_id)?;
        tracing::debug!(
            header = header_id,
            subnav = self.navigation.subnav_id(),
            "Header selected"
        );
        Ok(())
    }

    pub fn select_subnav(&mut self, subnav_id: &str) -> Result<(), ShellError> {
        self.navigation.select_subnav(subnav_id)?;
        tracing::debug!(subnav = subnav_id, "Subnav selected");
        Ok(())
    }

    // ========================================================================
    // Overlay lifecycle
    // ========================================================================

    pub fn launch(&mut self, app: OverlayId, trigger: TriggerRef) -> Transition {
        let outcome = self.overlays.launch(app, trigger);
        self.apply_lifecycle(outcome)
    }

    pub fn restore(&mut self, app: OverlayId, trigger: TriggerRef) -> Transition {
        let outcome = self.overlays.restore(app, trigger);
        self.apply_lifecycle(outcome)
    }

    pub fn close_overlay(&mut self) -> Transition {
        let outcome = self.overlays.close();
        self.apply_lifecycle(outcome)
    }

    pub fn minimize_overlay(&mut self) -> Transition {
        let outcome = self.overlays.minimize();
        self.apply_lifecycle(outcome)
    }

    pub fn close_minimized(&mut self, app: OverlayId) -> Transition {
        let outcome = self.overlays.close_minimized(app);
        self.apply_lifecycle(outcome)
    }

    /// String entry point for [`Self::launch`].
    pub fn launch_str(&mut self, app: &str, trigger: &str) -> Result<Transition, ShellError> {
        let app: OverlayId = app.parse()?;
        Ok(self.launch(app, TriggerRef::new(trigger)?))
    }

    /// String entry point for [`Self::restore`].
    pub fn restore_str(&mut self, app: &str, trigger: &str) -> Result<Transition, ShellError> {
        let app: OverlayId = app.parse()?;
        Ok(self.restore(app, TriggerRef::new(trigger)?))
    }

    /// String entry point for [`Self::close_minimized`].
    pub fn close_minimized_str(&mut self, app: &str) -> Result<Transition, ShellError> {
        let app: OverlayId = app.parse()?;
        Ok(self.close_minimized(app))
    }

    fn apply_lifecycle(&mut self, outcome: LifecycleOutcome) -> Transition {
        let LifecycleOutcome {
            transition,
            focus_return,
        } = outcome;

        match transition {
            Transition::Opened { app, .. } => {
                self.overlay_navigation = Some(self.catalog.overlay_navigation(app));
            }
            Transition::Closed(_) | Transition::Minimized(_) => {
                self.overlay_navigation = None;
            }
            Transition::ClosedFromMinimized(_) | Transition::Unchanged => {}
        }

        if let Some(text) = transition.announcement() {
            self.chrome.announce(text);
        }
        if let Some(request) = focus_return {
            // Detached or parked; a newer request supersedes it either way.
            let _ = self.focus.schedule(request);
        }
        tracing::debug!(?transition, "Overlay transition");
        transition
    }

    /// Focus return parked because no runtime was running when it was issued.
    #[must_use]
    pub fn pending_focus_return(&self) -> Option<&FocusReturn> {
        self.focus.parked()
    }

    /// Hand a parked focus return to the sink, after the transition that
    /// produced it has returned.
    pub fn flush_focus_return(&mut self) -> bool {
        self.focus.flush()
    }

    pub fn overlay_select_header(&mut self, header_id: &str) -> Result<(), ShellError> {
        let nav = self
            .overlay_navigation
            .as_mut()
            .ok_or(ShellError::NoActiveOverlay)?;
        nav.select_header(header_id)?;
        Ok(())
    }

    pub fn overlay_select_subnav(&mut self, subnav_id: &str) -> Result<(), ShellError> {
        let nav = self
            .overlay_navigation
            .as_mut()
            .ok_or(ShellError::NoActiveOverlay)?;
        nav.select_subnav(subnav_id)?;
        Ok(())
    }

    // ========================================================================
    // Chrome
    // ========================================================================

    pub fn toggle_left_sidebar(&mut self) -> bool {
        self.chrome.toggle_left_sidebar()
    }

    pub fn toggle_right_sidebar(&mut self) -> bool {
        self.chrome.toggle_right_sidebar()
    }

    pub fn toggle_tray(&mut self) -> bool {
        self.chrome.toggle_tray()
    }

    pub fn toggle_theme(&mut self) -> Theme {
        self.chrome.toggle_theme()
    }

    pub fn set_announcement(&mut self, text: impl Into<String>) {
        self.chrome.announce(text);
    }

    pub fn clear_announcement(&mut self) {
        self.chrome.clear_announcement();
    }

    // ========================================================================
    // Studio settings
    // ========================================================================

    #[must_use]
    pub fn settings_service(&self) -> &SettingsService {
        &self.settings
    }

    #[must_use]
    pub fn settings_editor(&self) -> Option<&SettingsEditor> {
        self.editor.as_ref()
    }

    /// Fetch the studio settings and open a fresh draft.
    pub async fn open_settings(&mut self) -> Result<&SettingsEditor, ShellError> {
        let editor = SettingsEditor::open(&self.settings).await?;
        Ok(self.editor.insert(editor))
    }

    pub fn set_setting(&mut self, id: &str, raw: &str) -> Result<(), ShellError> {
        let editor = self.editor.as_mut().ok_or(SettingsError::NotOpen)?;
        editor.set_raw(id, raw)?;
        Ok(())
    }

    pub fn select_settings_category(&mut self, category: &str) -> Result<(), ShellError> {
        let editor = self.editor.as_mut().ok_or(SettingsError::NotOpen)?;
        editor.select_category(category)?;
        Ok(())
    }

    /// Stored studio settings as JSON.
    pub async fn export_settings(&self) -> Result<String, ShellError> {
        Ok(self.settings.export_json().await?)
    }

    pub async fn save_settings(&mut self) -> Result<(), ShellError> {
        let editor = self.editor.as_mut().ok_or(SettingsError::NotOpen)?;
        editor.save(&self.settings).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests;
