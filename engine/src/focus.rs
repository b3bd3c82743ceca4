//! Deferred focus returns.
//!
//! Closing or minimizing an overlay asks for keyboard focus to go back to the
//! control that opened it. The request is delivered after the state change is
//! applied, on a separate task, so the renderer has already dropped the
//! overlay by the time focus moves. Only the newest pending request is
//! delivered.
//!
//! Without a tokio runtime nothing is spawned: the request is parked until
//! the caller drains it with [`FocusReturnScheduler::flush`].

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use dashdeck_types::{FocusReturn, TriggerRef};
use tokio::runtime::Handle;
use tokio::task::JoinHandle;

/// Receiver of focus-return requests. Implemented by the presentation layer.
pub trait FocusSink: Send + Sync {
    fn focus(&self, trigger: &TriggerRef);
}

/// Sink that drops every request.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopFocusSink;

impl FocusSink for NoopFocusSink {
    fn focus(&self, _trigger: &TriggerRef) {}
}

pub struct FocusReturnScheduler {
    sink: Arc<dyn FocusSink>,
    delay: Duration,
    generation: Arc<AtomicU64>,
    parked: Option<FocusReturn>,
}

impl std::fmt::Debug for FocusReturnScheduler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FocusReturnScheduler")
            .field("delay", &self.delay)
            .field("generation", &self.generation.load(Ordering::Relaxed))
            .field("parked", &self.parked)
            .finish_non_exhaustive()
    }
}

impl FocusReturnScheduler {
    #[must_use]
    pub fn new(sink: Arc<dyn FocusSink>, delay: Duration) -> Self {
        Self {
            sink,
            delay,
            generation: Arc::new(AtomicU64::new(0)),
            parked: None,
        }
    }

    /// Queue `request`, superseding any request that has not fired yet.
    ///
    /// Returns the task handle when running inside a tokio runtime. Without a
    /// runtime the request is parked for [`Self::flush`] and `None` is
    /// returned. The sink is never called from inside this method.
    pub fn schedule(&mut self, request: FocusReturn) -> Option<JoinHandle<()>> {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        let Ok(handle) = Handle::try_current() else {
            tracing::debug!(trigger = %request.trigger, "No runtime; parking focus return");
            self.parked = Some(request);
            return None;
        };
        self.parked = None;

        let sink = Arc::clone(&self.sink);
        let current = Arc::clone(&self.generation);
        let delay = self.delay;
        Some(handle.spawn(async move {
            if delay.is_zero() {
                tokio::task::yield_now().await;
            } else {
                tokio::time::sleep(delay).await;
            }
            if current.load(Ordering::SeqCst) != generation {
                tracing::debug!(trigger = %request.trigger, "Focus return superseded");
                return;
            }
            sink.focus(&request.trigger);
        }))
    }

    /// Request parked while no runtime was available, if any.
    #[must_use]
    pub fn parked(&self) -> Option<&FocusReturn> {
        self.parked.as_ref()
    }

    /// Deliver the parked request to the sink. Returns whether one was sent.
    pub fn flush(&mut self) -> bool {
        match self.parked.take() {
            Some(request) => {
                self.sink.focus(&request.trigger);
                true
            }
            None => false,
        }
    }
}
