//! Command types for the Elm-style architecture
//!
//! Commands represent side effects the host should perform after an update.

use crate::case::CaseVariant;
use crate::orchestrator::EditResult;

/// Commands returned by update functions
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Cmd {
    /// No command - do nothing
    #[default]
    None,
    /// Write `texts` into the corresponding selections, then reply with
    /// `ConvertMsg::EditsApplied`
    ApplyEdits(EditResult),
    /// Tell the user which style was applied
    Notify {
        variant: CaseVariant,
        /// Offer an "undo" action that reverts the buffer edit
        offer_undo: bool,
    },
    /// Revert the most recent buffer edit (the host reports it back as
    /// `HistoryMsg::Undo`)
    UndoBufferEdit,
    /// Execute multiple commands
    Batch(Vec<Cmd>),
}

impl Cmd {
    /// Create a batch of commands
    pub fn batch(cmds: Vec<Cmd>) -> Self {
        Cmd::Batch(cmds)
    }
}

/// Notification text for an applied style
pub fn notification_text(variant: CaseVariant) -> String {
    format!("Converted to {}", variant.label())
}
