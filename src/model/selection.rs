//! Per-selection state: the true original text and the conversions produced
//! from it so far.

use std::collections::BTreeMap;
use std::ops::Range;

use crate::case::CaseVariant;

/// State for one selection slot.
///
/// The original text never changes for the life of the slot. Converted texts
/// are only stored for non-original styles, and only once per style.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionRecord {
    original_text: String,
    converted: BTreeMap<CaseVariant, String>,
}

impl SelectionRecord {
    pub fn new(original_text: impl Into<String>) -> Self {
        Self {
            original_text: original_text.into(),
            converted: BTreeMap::new(),
        }
    }

    pub fn original_text(&self) -> &str {
        &self.original_text
    }

    /// Text previously produced for `variant`, if any
    pub fn converted(&self, variant: CaseVariant) -> Option<&str> {
        self.converted.get(&variant).map(String::as_str)
    }

    /// All styles produced so far, in variant order
    pub fn converted_variants(&self) -> impl Iterator<Item = CaseVariant> + '_ {
        self.converted.keys().copied()
    }

    /// True if `text` is the original or any conversion of it
    pub fn matches(&self, text: &str) -> bool {
        self.original_text == text || self.converted.values().any(|c| c == text)
    }

    fn insert_converted(&mut self, variant: CaseVariant, text: &str) {
        if variant.is_original() {
            return;
        }
        self.converted
            .entry(variant)
            .or_insert_with(|| text.to_string());
    }
}

/// Tracks one [`SelectionRecord`] per selection slot, by position.
#[derive(Debug, Clone, Default)]
pub struct SelectionTracker {
    records: Vec<SelectionRecord>,
}

impl SelectionTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Line the stored records up with the texts currently under the
    /// selections.
    ///
    /// A record survives only if its slot still shows the original or one of
    /// its conversions; anything else is a new selection and gets a fresh
    /// record. Slots past the current selection count are dropped.
    pub fn reconcile<S: AsRef<str>>(&mut self, current_texts: &[S]) -> &[SelectionRecord] {
        let mut kept = 0usize;
        let mut replaced = 0usize;

        self.records.truncate(current_texts.len());
        for (i, text) in current_texts.iter().enumerate() {
            let text = text.as_ref();
            match self.records.get_mut(i) {
                Some(record) if record.matches(text) => kept += 1,
                Some(record) => {
                    *record = SelectionRecord::new(text);
                    replaced += 1;
                }
                None => self.records.push(SelectionRecord::new(text)),
            }
        }

        tracing::debug!(
            slots = current_texts.len(),
            kept,
            replaced,
            added = current_texts.len() - kept - replaced,
            "Reconciled selection records"
        );

        &self.records
    }

    /// Remember `converted_text` as the `variant` form of every record whose
    /// original is `original_text`.
    pub fn record(&mut self, original_text: &str, variant: CaseVariant, converted_text: &str) {
        for record in self
            .records
            .iter_mut()
            .filter(|r| r.original_text == original_text)
        {
            record.insert_converted(variant, converted_text);
        }
    }

    pub fn records(&self) -> &[SelectionRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn clear(&mut self) {
        self.records.clear();
    }
}

/// True when there are no selections or every selection spans zero
/// characters.
pub fn is_selection_empty(spans: &[Range<usize>]) -> bool {
    spans.iter().all(|span| span.is_empty())
}
