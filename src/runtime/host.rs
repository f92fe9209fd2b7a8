//! In-memory editor host
//!
//! A rope-backed buffer with multiple selections and snapshot undo/redo. It
//! executes the commands `update` returns and answers with the messages a
//! real editor would send back.

use std::ops::Range;

use ropey::Rope;

use crate::commands::{notification_text, Cmd};
use crate::messages::{ConvertMsg, HistoryMsg, Msg, SelectionMsg};
use crate::model::history::DEFAULT_MAX_DEPTH;

/// A notification shown to the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub message: String,
    pub offer_undo: bool,
}

#[derive(Debug, Clone)]
struct Snapshot {
    buffer: Rope,
    selections: Vec<Range<usize>>,
}

/// Rope buffer plus sorted, non-overlapping char-range selections
#[derive(Debug, Clone)]
pub struct BufferHost {
    buffer: Rope,
    selections: Vec<Range<usize>>,
    undo_stack: Vec<Snapshot>,
    redo_stack: Vec<Snapshot>,
    /// Snapshots kept on the undo stack, matching the style history depth
    max_undo: usize,
    notifications: Vec<Notification>,
    read_only: bool,
}

impl Default for BufferHost {
    fn default() -> Self {
        Self {
            buffer: Rope::new(),
            selections: Vec::new(),
            undo_stack: Vec::new(),
            redo_stack: Vec::new(),
            max_undo: DEFAULT_MAX_DEPTH,
            notifications: Vec::new(),
            read_only: false,
        }
    }
}

impl BufferHost {
    /// Buffer with the given text and no selection
    pub fn new(text: &str) -> Self {
        Self {
            buffer: Rope::from_str(text),
            ..Self::default()
        }
    }

    /// One line per text, each line fully selected
    pub fn from_selected_texts<S: AsRef<str>>(texts: &[S]) -> Self {
        let mut content = String::new();
        let mut selections = Vec::with_capacity(texts.len());
        let mut offset = 0;

        for (i, text) in texts.iter().enumerate() {
            if i > 0 {
                content.push('\n');
                offset += 1;
            }
            let text = text.as_ref();
            let len = text.chars().count();
            content.push_str(text);
            selections.push(offset..offset + len);
            offset += len;
        }

        let mut host = Self::new(&content);
        host.selections = selections;
        host
    }

    pub fn text(&self) -> String {
        self.buffer.to_string()
    }

    pub fn selections(&self) -> &[Range<usize>] {
        &self.selections
    }

    /// Text under each selection, in buffer order
    pub fn selected_texts(&self) -> Vec<String> {
        self.selections
            .iter()
            .map(|range| self.buffer.slice(range.clone()).to_string())
            .collect()
    }

    pub fn notifications(&self) -> &[Notification] {
        &self.notifications
    }

    /// Reject further edits, as a read-only buffer would
    pub fn set_read_only(&mut self, read_only: bool) {
        self.read_only = read_only;
    }

    /// Replace the selection set, returning the change notification
    pub fn select(&mut self, spans: Vec<Range<usize>>) -> Msg {
        let len = self.buffer.len_chars();
        let mut spans: Vec<Range<usize>> = spans
            .into_iter()
            .map(|r| r.start.min(len)..r.end.min(len).max(r.start.min(len)))
            .collect();
        spans.sort_by_key(|r| r.start);
        spans.dedup_by(|next, prev| next.start < prev.end);
        self.selections = spans;
        self.selection_changed()
    }

    /// Collapse every selection to its end
    pub fn collapse_selections(&mut self) -> Msg {
        for range in &mut self.selections {
            range.start = range.end;
        }
        self.selection_changed()
    }

    /// Buffer-level undo, reported as a history message
    pub fn undo(&mut self) -> Option<Msg> {
        let snapshot = self.undo_stack.pop()?;
        let current = self.replace_state(snapshot);
        self.redo_stack.push(current);
        Some(Msg::History(HistoryMsg::Undo))
    }

    /// Buffer-level redo, reported as a history message
    pub fn redo(&mut self) -> Option<Msg> {
        let snapshot = self.redo_stack.pop()?;
        let current = self.replace_state(snapshot);
        self.undo_stack.push(current);
        Some(Msg::History(HistoryMsg::Redo))
    }

    /// Execute a command, returning the messages it produces
    pub fn process_cmd(&mut self, cmd: Cmd) -> Vec<Msg> {
        match cmd {
            Cmd::None => Vec::new(),
            Cmd::ApplyEdits(result) => match self.apply_edits(&result.texts) {
                // The edit moves the selections, which the editor reports
                // before it acknowledges the edit itself
                Ok(()) => vec![
                    self.selection_changed(),
                    Msg::Convert(ConvertMsg::EditsApplied(Ok(()))),
                ],
                Err(e) => vec![Msg::Convert(ConvertMsg::EditsApplied(Err(e)))],
            },
            Cmd::Notify {
                variant,
                offer_undo,
            } => {
                self.notifications.push(Notification {
                    message: notification_text(variant),
                    offer_undo,
                });
                Vec::new()
            }
            Cmd::UndoBufferEdit => self.undo().into_iter().collect(),
            Cmd::Batch(cmds) => cmds
                .into_iter()
                .flat_map(|cmd| self.process_cmd(cmd))
                .collect(),
        }
    }

    fn apply_edits(&mut self, texts: &[String]) -> Result<(), String> {
        if self.read_only {
            return Err("buffer is read-only".to_string());
        }
        if texts.len() != self.selections.len() {
            return Err(format!(
                "expected {} replacement texts, got {}",
                self.selections.len(),
                texts.len()
            ));
        }

        self.undo_stack.push(self.snapshot());
        if self.undo_stack.len() > self.max_undo {
            self.undo_stack.remove(0);
        }
        self.redo_stack.clear();

        // Back to front so earlier offsets stay valid
        for (range, text) in self.selections.iter().zip(texts).rev() {
            self.buffer.remove(range.clone());
            self.buffer.insert(range.start, text);
        }

        let mut shift: isize = 0;
        for (range, text) in self.selections.iter_mut().zip(texts) {
            let old_len = range.len() as isize;
            let new_len = text.chars().count();
            let start = (range.start as isize + shift) as usize;
            *range = start..start + new_len;
            shift += new_len as isize - old_len;
        }

        Ok(())
    }

    fn snapshot(&self) -> Snapshot {
        Snapshot {
            buffer: self.buffer.clone(),
            selections: self.selections.clone(),
        }
    }

    fn replace_state(&mut self, snapshot: Snapshot) -> Snapshot {
        let current = self.snapshot();
        self.buffer = snapshot.buffer;
        self.selections = snapshot.selections;
        current
    }

    fn selection_changed(&self) -> Msg {
        Msg::Selection(SelectionMsg::Changed {
            spans: self.selections.clone(),
        })
    }
}
