//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use case_cycle::config::CycleConfig;
use case_cycle::model::AppModel;
use case_cycle::runtime::{BufferHost, Runtime};

/// Config with the given cycle and notifications on
pub fn config_with_cycle(cycle: &[&str]) -> CycleConfig {
    CycleConfig {
        case_cycle: cycle.iter().map(|s| s.to_string()).collect(),
        show_notifications: true,
    }
}

/// Runtime over a buffer with one fully selected line per text, default cycle
pub fn test_runtime(texts: &[&str]) -> Runtime {
    Runtime::new(
        AppModel::default(),
        BufferHost::from_selected_texts(texts),
    )
}

/// Runtime with a custom cycle
pub fn test_runtime_with_cycle(texts: &[&str], cycle: &[&str]) -> Runtime {
    Runtime::new(
        AppModel::new(config_with_cycle(cycle)),
        BufferHost::from_selected_texts(texts),
    )
}

/// Text under every selection
pub fn selected(runtime: &Runtime) -> Vec<String> {
    runtime.host.selected_texts()
}
