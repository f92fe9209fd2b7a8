//! Runtime module - drives the update loop against a host
//!
//! - `host` - in-memory rope buffer that executes commands

pub mod host;

use std::collections::VecDeque;
use std::ops::Range;

pub use host::{BufferHost, Notification};

use crate::messages::{AppMsg, Direction, Msg};
use crate::model::AppModel;
use crate::update::update;

/// Owns the model and a host, and feeds messages between them until
/// nothing is left to do.
#[derive(Debug, Clone)]
pub struct Runtime {
    pub model: AppModel,
    pub host: BufferHost,
}

impl Runtime {
    pub fn new(model: AppModel, host: BufferHost) -> Self {
        Self { model, host }
    }

    /// Process `msg` and every message the resulting commands produce
    pub fn dispatch(&mut self, msg: Msg) {
        let mut queue = VecDeque::from([msg]);
        while let Some(msg) = queue.pop_front() {
            if let Some(cmd) = update(&mut self.model, msg) {
                queue.extend(self.host.process_cmd(cmd));
            }
        }
    }

    /// Cycle the host's current selections one step
    pub fn cycle(&mut self, direction: Direction) {
        let selections = self.host.selected_texts();
        self.dispatch(Msg::cycle(direction, selections));
    }

    /// User-triggered buffer undo
    pub fn undo(&mut self) {
        if let Some(msg) = self.host.undo() {
            self.dispatch(msg);
        }
    }

    /// User-triggered buffer redo
    pub fn redo(&mut self) {
        if let Some(msg) = self.host.redo() {
            self.dispatch(msg);
        }
    }

    pub fn select(&mut self, spans: Vec<Range<usize>>) {
        let msg = self.host.select(spans);
        self.dispatch(msg);
    }

    pub fn collapse_selections(&mut self) {
        let msg = self.host.collapse_selections();
        self.dispatch(msg);
    }

    /// The user clicked "undo" on the last notification
    pub fn accept_notification_undo(&mut self) {
        self.dispatch(Msg::App(AppMsg::NotificationUndo));
    }
}
