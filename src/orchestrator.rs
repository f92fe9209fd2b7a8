//! One cycling invocation: reconcile, pick the next visibly distinct style,
//! and produce the text for every selection.
//!
//! Resolution and commit are split so a host that mutates its buffer
//! asynchronously can hold the [`Conversion`] until the edit has landed, and
//! only then push the style onto history.

use serde::Serialize;

use crate::case::{convert_text, CaseVariant};
use crate::cycle::CaseOrder;
use crate::messages::Direction;
use crate::model::Session;

/// What the host writes back: one text per selection, in invocation order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EditResult {
    pub variant: CaseVariant,
    pub texts: Vec<String>,
}

/// A resolved but not yet committed conversion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conversion {
    /// Style to land on
    pub variant: CaseVariant,
    /// Converted text per selection slot
    pub texts: Vec<String>,
    /// Recovered original per selection slot
    pub originals: Vec<String>,
    /// Candidates skipped because every selection came out unchanged
    pub skipped: Vec<(CaseVariant, Vec<String>)>,
    /// Number of candidates evaluated, including the chosen one
    pub candidates_tried: usize,
}

impl Conversion {
    pub fn edit_result(&self) -> EditResult {
        EditResult {
            variant: self.variant,
            texts: self.texts.clone(),
        }
    }
}

/// Resolve the next style for `selections` without committing it.
///
/// Reconciles the session's records against `selections`, then walks `order`
/// from the current style in `direction`. A candidate whose output equals the
/// visible text for every selection is skipped; at most `order.len()`
/// candidates are evaluated, after which the last one is taken as-is.
/// Returns `None` for an empty invocation.
pub fn resolve<S: AsRef<str>>(
    session: &mut Session,
    order: &CaseOrder,
    direction: Direction,
    selections: &[S],
) -> Option<Conversion> {
    if selections.is_empty() {
        tracing::debug!("Empty invocation, nothing to convert");
        return None;
    }

    let originals: Vec<String> = session
        .tracker
        .reconcile(selections)
        .iter()
        .map(|record| record.original_text().to_string())
        .collect();

    let limit = order.len().max(1);
    let mut candidate = order.next(session.current_variant(), direction);
    let mut skipped = Vec::new();
    let mut tried = 0;

    loop {
        tried += 1;
        let texts: Vec<String> = originals
            .iter()
            .map(|original| convert_text(original, candidate))
            .collect();

        let unchanged = texts
            .iter()
            .zip(selections)
            .all(|(converted, visible)| converted == visible.as_ref());

        if unchanged && tried < limit {
            tracing::trace!(%candidate, "Skipping style with no visible change");
            skipped.push((candidate, texts));
            candidate = order.next(candidate, direction);
            continue;
        }

        tracing::debug!(
            %candidate,
            tried,
            skipped = skipped.len(),
            "Resolved conversion"
        );

        return Some(Conversion {
            variant: candidate,
            texts,
            originals,
            skipped,
            candidates_tried: tried,
        });
    }
}
