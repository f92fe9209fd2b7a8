//! Undo/redo stacks over style transitions.

use crate::case::CaseVariant;

/// Style transitions kept above the root; hosts cap their buffer undo to match.
pub const DEFAULT_MAX_DEPTH: usize = 1000;

/// Style history with undo/redo stacks.
///
/// The history stack is never empty and its bottom entry is always
/// [`CaseVariant::Original`]; the current style is its top.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CycleHistory {
    history: Vec<CaseVariant>,
    redo_stack: Vec<CaseVariant>,
    max_depth: usize,
}

impl Default for CycleHistory {
    fn default() -> Self {
        Self::new()
    }
}

impl CycleHistory {
    pub fn new() -> Self {
        Self::with_max_depth(DEFAULT_MAX_DEPTH)
    }

    /// History that keeps at most `max_depth` entries above the root
    pub fn with_max_depth(max_depth: usize) -> Self {
        Self {
            history: vec![CaseVariant::Original],
            redo_stack: Vec::new(),
            max_depth: max_depth.max(1),
        }
    }

    /// The style currently applied
    pub fn current(&self) -> CaseVariant {
        // Never empty: every mutation below keeps the root in place
        self.history
            .last()
            .copied()
            .unwrap_or(CaseVariant::Original)
    }

    /// Push a new style (clears the redo stack)
    pub fn push(&mut self, variant: CaseVariant) {
        self.redo_stack.clear();
        self.history.push(variant);

        // Trim the oldest entries but keep the root
        while self.history.len() > self.max_depth + 1 {
            self.history.remove(1);
        }
    }

    /// Step back to the previous style. Returns false if already at the root.
    pub fn undo(&mut self) -> bool {
        if self.history.len() <= 1 {
            return false;
        }
        match self.history.pop() {
            Some(variant) => {
                self.redo_stack.push(variant);
                true
            }
            None => false,
        }
    }

    /// Re-apply the last undone style. Returns false if nothing to redo.
    pub fn redo(&mut self) -> bool {
        match self.redo_stack.pop() {
            Some(variant) => {
                self.history.push(variant);
                true
            }
            None => false,
        }
    }

    /// Back to `[Original]` with an empty redo stack
    pub fn reset(&mut self) {
        self.history.clear();
        self.history.push(CaseVariant::Original);
        self.redo_stack.clear();
    }

    pub fn can_undo(&self) -> bool {
        self.history.len() > 1
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    /// History stack, bottom first
    pub fn entries(&self) -> &[CaseVariant] {
        &self.history
    }

    /// Redo stack, oldest undo first
    pub fn redo_entries(&self) -> &[CaseVariant] {
        &self.redo_stack
    }

    pub fn depth(&self) -> usize {
        self.history.len()
    }
}
