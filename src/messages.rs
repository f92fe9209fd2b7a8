//! Message types for the Elm-style architecture
//!
//! All state changes flow through these message types.

use std::ops::Range;

use crate::config::CycleConfig;

/// Direction to step through the configured style order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Forward,
    Backward,
}

/// Conversion messages (the user invocation and its acknowledgement)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConvertMsg {
    /// Cycle every selection to the next style
    Cycle {
        direction: Direction,
        /// Text currently under each active selection, in a stable order
        selections: Vec<String>,
    },
    /// The host finished writing the in-flight conversion into its buffer
    EditsApplied(Result<(), String>),
}

/// Selection messages from the host
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionMsg {
    /// The active selection set changed; spans are char ranges
    Changed { spans: Vec<Range<usize>> },
}

/// Buffer-level undo/redo performed by the host
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistoryMsg {
    Undo,
    Redo,
}

/// App-level messages
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppMsg {
    /// Configuration was (re)loaded
    ConfigChanged(CycleConfig),
    /// The user accepted the "undo" offered by a conversion notification
    NotificationUndo,
    /// Host is shutting down
    Shutdown,
}

/// Top-level message type
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    Convert(ConvertMsg),
    Selection(SelectionMsg),
    History(HistoryMsg),
    App(AppMsg),
}

impl Msg {
    /// Shorthand for a cycle invocation
    pub fn cycle<I, S>(direction: Direction, selections: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Msg::Convert(ConvertMsg::Cycle {
            direction,
            selections: selections.into_iter().map(Into::into).collect(),
        })
    }
}
