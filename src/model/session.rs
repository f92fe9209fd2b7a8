//! Session state: selection records plus the style history, alive while a
//! selection stays active.

use super::history::CycleHistory;
use super::selection::SelectionTracker;
use crate::case::CaseVariant;
use crate::cycle::CaseOrder;
use crate::messages::Direction;
use crate::orchestrator::{self, Conversion, EditResult};

#[derive(Debug, Clone, Default)]
pub struct Session {
    pub tracker: SelectionTracker,
    pub history: CycleHistory,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current_variant(&self) -> CaseVariant {
        self.history.current()
    }

    /// Record everything `conversion` produced and make its style current.
    ///
    /// Call only once the host has written `conversion.texts` into its buffer.
    pub fn commit(&mut self, conversion: Conversion) -> EditResult {
        let Conversion {
            variant,
            texts,
            originals,
            skipped,
            ..
        } = conversion;

        for (skipped_variant, skipped_texts) in &skipped {
            for (original, text) in originals.iter().zip(skipped_texts) {
                self.tracker.record(original, *skipped_variant, text);
            }
        }
        for (original, text) in originals.iter().zip(&texts) {
            self.tracker.record(original, variant, text);
        }

        self.history.push(variant);
        tracing::debug!(%variant, depth = self.history.depth(), "Committed conversion");

        EditResult { variant, texts }
    }

    /// Resolve and commit in one step, for hosts that mutate their buffer
    /// synchronously.
    pub fn apply<S: AsRef<str>>(
        &mut self,
        order: &CaseOrder,
        direction: Direction,
        selections: &[S],
    ) -> Option<EditResult> {
        let conversion = orchestrator::resolve(self, order, direction, selections)?;
        Some(self.commit(conversion))
    }

    /// Forget every record and go back to `Original`
    pub fn reset(&mut self) {
        if !self.tracker.is_empty() || self.history.can_undo() || self.history.can_redo() {
            tracing::debug!("Session reset");
        }
        self.tracker.clear();
        self.history.reset();
    }
}
