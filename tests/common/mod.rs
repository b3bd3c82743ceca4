//! Shared test utilities and fixtures
//!
//! Common infrastructure for integration tests.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use dashdeck_engine::dashdeck_types::TriggerRef;
use dashdeck_engine::{Catalog, FocusSink, Shell, ShellOptions};

/// Focus sink that records every trigger it is handed.
#[derive(Default)]
pub struct RecordingSink(Mutex<Vec<String>>);

impl RecordingSink {
    pub fn take(&self) -> Vec<String> {
        std::mem::take(&mut *self.0.lock().expect("sink lock"))
    }
}

impl FocusSink for RecordingSink {
    fn focus(&self, trigger: &TriggerRef) {
        self.0
            .lock()
            .expect("sink lock")
            .push(trigger.as_str().to_string());
    }
}

pub fn shell_with(options: &ShellOptions) -> (Shell, Arc<RecordingSink>) {
    let sink = Arc::new(RecordingSink::default());
    let shell = Shell::new(
        Catalog::builtin().expect("builtin catalog"),
        options,
        Arc::clone(&sink) as Arc<dyn FocusSink>,
    )
    .expect("shell");
    (shell, sink)
}

pub fn shell() -> (Shell, Arc<RecordingSink>) {
    shell_with(&ShellOptions::default())
}

pub fn trigger(name: &str) -> TriggerRef {
    TriggerRef::new(name).expect("non-empty trigger")
}

/// Run each line through the command processor, failing on the first error.
pub async fn run(shell: &mut Shell, lines: &[&str]) {
    for line in lines {
        shell
            .process_command(line)
            .await
            .unwrap_or_else(|err| panic!("`{line}` failed: {err}"));
    }
}
