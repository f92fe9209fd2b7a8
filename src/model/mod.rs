//! Application model - the complete state of the case cycler
//!
//! This module contains all the state types following the Elm Architecture pattern.

pub mod history;
pub mod selection;
pub mod session;

pub use history::CycleHistory;
pub use selection::{is_selection_empty, SelectionRecord, SelectionTracker};
pub use session::Session;

use crate::case::CaseVariant;
use crate::config::CycleConfig;
use crate::cycle::CaseOrder;
use crate::orchestrator::Conversion;

/// The complete application model
#[derive(Debug, Clone)]
pub struct AppModel {
    /// Selection records and style history
    pub session: Session,
    /// Persisted configuration
    pub config: CycleConfig,
    /// Validated style order derived from `config`
    pub order: CaseOrder,
    /// Conversion waiting for the host to apply its edits.
    /// While set, every message except the acknowledgement is ignored.
    pub in_flight: Option<Conversion>,
}

impl AppModel {
    pub fn new(config: CycleConfig) -> Self {
        let order = config.case_order();
        Self {
            session: Session::new(),
            config,
            order,
            in_flight: None,
        }
    }

    /// Replace the configuration and rebuild the style order
    pub fn set_config(&mut self, config: CycleConfig) {
        self.order = config.case_order();
        self.config = config;
    }

    pub fn current_variant(&self) -> CaseVariant {
        self.session.current_variant()
    }

    pub fn is_in_flight(&self) -> bool {
        self.in_flight.is_some()
    }
}

impl Default for AppModel {
    fn default() -> Self {
        Self::new(CycleConfig::default())
    }
}
