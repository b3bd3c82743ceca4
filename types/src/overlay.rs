//! Overlay application lifecycle.
//!
//! At most one overlay is active at a time. Minimized overlays sit in the
//! tray in the order they were minimized. An id is never both active and
//! minimized.
//!
//! Transitions report what happened through [`LifecycleOutcome`]. Closing or
//! minimizing the active overlay asks the caller to return focus to the
//! control that last launched or restored an overlay; executing that request
//! is the caller's job.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{EmptyStringError, NonEmptyString, OverlayId};

/// Opaque handle naming the control that launched an overlay.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TriggerRef(NonEmptyString);

impl TriggerRef {
    pub fn new(value: impl Into<String>) -> Result<Self, EmptyStringError> {
        NonEmptyString::new(value).map(Self)
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for TriggerRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OverlayState {
    Closed,
    Active,
    Minimized,
}

impl OverlayState {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            OverlayState::Closed => "closed",
            OverlayState::Active => "active",
            OverlayState::Minimized => "minimized",
        }
    }
}

/// What a lifecycle call changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// `app` became active; `demoted` was active before and is now closed.
    Opened {
        app: OverlayId,
        demoted: Option<OverlayId>,
        from_minimized: bool,
    },
    Closed(OverlayId),
    Minimized(OverlayId),
    ClosedFromMinimized(OverlayId),
    Unchanged,
}

impl Transition {
    #[must_use]
    pub fn is_change(self) -> bool {
        !matches!(self, Transition::Unchanged)
    }

    /// Screen-reader text for this transition.
    #[must_use]
    pub fn announcement(self) -> Option<String> {
        match self {
            Transition::Opened { app, .. } => Some(format!("{app} app opened")),
            Transition::Closed(app) => Some(format!("{app} app closed")),
            Transition::Minimized(app) => Some(format!("{app} app minimized")),
            Transition::ClosedFromMinimized(app) => {
                Some(format!("{app} app closed from minimized"))
            }
            Transition::Unchanged => None,
        }
    }
}

/// Request to move keyboard focus back to a launching control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FocusReturn {
    pub trigger: TriggerRef,
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use]
pub struct LifecycleOutcome {
    pub transition: Transition,
    pub focus_return: Option<FocusReturn>,
}

impl LifecycleOutcome {
    fn plain(transition: Transition) -> Self {
        Self {
            transition,
            focus_return: None,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct OverlayLifecycle {
    active: Option<OverlayId>,
    minimized: Vec<OverlayId>,
    last_trigger: Option<TriggerRef>,
}

impl OverlayLifecycle {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Open `app` from the tray.
    ///
    /// Re-launching the active overlay changes nothing; launching a minimized
    /// one restores it. Any other active overlay is closed, not minimized.
    /// The trigger is recorded in every case.
    pub fn launch(&mut self, app: OverlayId, trigger: TriggerRef) -> LifecycleOutcome {
        self.last_trigger = Some(trigger);
        if self.active == Some(app) {
            return LifecycleOutcome::plain(Transition::Unchanged);
        }
        let from_minimized = self.take_minimized(app);
        let demoted = self.active.replace(app);
        LifecycleOutcome::plain(Transition::Opened {
            app,
            demoted,
            from_minimized,
        })
    }

    /// Bring `app` back from the tray. On an overlay that is not minimized
    /// this is the same as [`Self::launch`].
    pub fn restore(&mut self, app: OverlayId, trigger: TriggerRef) -> LifecycleOutcome {
        self.launch(app, trigger)
    }

    pub fn close(&mut self) -> LifecycleOutcome {
        match self.active.take() {
            Some(app) => self.with_focus_return(Transition::Closed(app)),
            None => LifecycleOutcome::plain(Transition::Unchanged),
        }
    }

    pub fn minimize(&mut self) -> LifecycleOutcome {
        let Some(app) = self.active.take() else {
            return LifecycleOutcome::plain(Transition::Unchanged);
        };
        if !self.minimized.contains(&app) {
            self.minimized.push(app);
        }
        self.with_focus_return(Transition::Minimized(app))
    }

    /// Dismiss a minimized overlay from the tray. Never touches the active one.
    pub fn close_minimized(&mut self, app: OverlayId) -> LifecycleOutcome {
        if self.take_minimized(app) {
            LifecycleOutcome::plain(Transition::ClosedFromMinimized(app))
        } else {
            LifecycleOutcome::plain(Transition::Unchanged)
        }
    }

    #[must_use]
    pub fn state_of(&self, app: OverlayId) -> OverlayState {
        if self.active == Some(app) {
            OverlayState::Active
        } else if self.minimized.contains(&app) {
            OverlayState::Minimized
        } else {
            OverlayState::Closed
        }
    }

    #[must_use]
    pub fn active(&self) -> Option<OverlayId> {
        self.active
    }

    /// Tray order: oldest minimized first.
    #[must_use]
    pub fn minimized(&self) -> &[OverlayId] {
        &self.minimized
    }

    #[must_use]
    pub fn last_trigger(&self) -> Option<&TriggerRef> {
        self.last_trigger.as_ref()
    }

    fn take_minimized(&mut self, app: OverlayId) -> bool {
        let before = self.minimized.len();
        self.minimized.retain(|id| *id != app);
        self.minimized.len() != before
    }

    fn with_focus_return(&self, transition: Transition) -> LifecycleOutcome {
        LifecycleOutcome {
            transition,
            focus_return: self.last_trigger.clone().map(|trigger| FocusReturn { trigger }),
        }
    }
}
