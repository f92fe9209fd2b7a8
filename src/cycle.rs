//! Cyclic style resolution over a validated style order

use crate::case::{CaseVariant, DEFAULT_CYCLE, DEFAULT_SECOND_VARIANT};
use crate::messages::Direction;

/// Step from `current` to its neighbour in `order`.
///
/// A `current` that is not in `order` (for example after the configuration
/// changed) resolves to the first entry going forward and the last entry
/// going backward. An empty `order` yields `current` unchanged.
pub fn next_variant(current: CaseVariant, direction: Direction, order: &[CaseVariant]) -> CaseVariant {
    let len = order.len();
    if len == 0 {
        return current;
    }

    match (order.iter().position(|v| *v == current), direction) {
        (Some(i), Direction::Forward) => order[(i + 1) % len],
        (Some(i), Direction::Backward) => order[(i + len - 1) % len],
        (None, Direction::Forward) => order[0],
        (None, Direction::Backward) => order[len - 1],
    }
}

/// Ordered, deduplicated set of styles to cycle through.
///
/// Always contains [`CaseVariant::Original`] and at least two entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaseOrder(Vec<CaseVariant>);

impl CaseOrder {
    /// Build an order from configured style names.
    ///
    /// Unknown names are dropped, duplicates keep their first position,
    /// `original` is prepended when missing and a fallback style is appended
    /// when fewer than two styles remain.
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let variants = names.into_iter().filter_map(|name| {
            let name = name.as_ref();
            match name.parse::<CaseVariant>() {
                Ok(variant) => Some(variant),
                Err(e) => {
                    tracing::warn!("Dropping case cycle entry: {}", e);
                    None
                }
            }
        });
        Self::from_variants(variants)
    }

    /// Build an order from already-parsed variants, applying the same
    /// dedupe/`Original`/fallback rules as [`CaseOrder::from_names`].
    pub fn from_variants<I>(variants: I) -> Self
    where
        I: IntoIterator<Item = CaseVariant>,
    {
        let mut order: Vec<CaseVariant> = Vec::with_capacity(CaseVariant::ALL.len());
        for variant in variants {
            if !order.contains(&variant) {
                order.push(variant);
            }
        }

        if !order.contains(&CaseVariant::Original) {
            order.insert(0, CaseVariant::Original);
        }
        if order.len() < 2 {
            order.push(DEFAULT_SECOND_VARIANT);
        }

        Self(order)
    }

    pub fn as_slice(&self) -> &[CaseVariant] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, variant: CaseVariant) -> bool {
        self.0.contains(&variant)
    }

    /// Neighbour of `current` in this order
    pub fn next(&self, current: CaseVariant, direction: Direction) -> CaseVariant {
        next_variant(current, direction, &self.0)
    }
}

impl Default for CaseOrder {
    fn default() -> Self {
        Self(DEFAULT_CYCLE.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use CaseVariant::*;

    #[test]
    fn test_next_forward_wraps() {
        let order = [Original, Const, Camel];
        assert_eq!(next_variant(Original, Direction::Forward, &order), Const);
        assert_eq!(next_variant(Camel, Direction::Forward, &order), Original);
    }

    #[test]
    fn test_next_backward_wraps() {
        let order = [Original, Const, Camel];
        assert_eq!(next_variant(Original, Direction::Backward, &order), Camel);
        assert_eq!(next_variant(Const, Direction::Backward, &order), Original);
    }

    #[test]
    fn test_next_absent_current() {
        let order = [Original, Const, Camel];
        assert_eq!(next_variant(Kebab, Direction::Forward, &order), Original);
        assert_eq!(next_variant(Kebab, Direction::Backward, &order), Camel);
    }

    #[test]
    fn test_default_order() {
        assert_eq!(
            CaseOrder::default().as_slice(),
            &[Original, Const, Camel, Snake, Kebab]
        );
    }

    #[test]
    fn test_from_names_drops_unknown_and_dedupes() {
        let order = CaseOrder::from_names(["snake", "title", "SNAKE", "kebab"]);
        assert_eq!(order.as_slice(), &[Original, Snake, Kebab]);
    }

    #[test]
    fn test_from_names_keeps_configured_original_position() {
        let order = CaseOrder::from_names(["camel", "original", "const"]);
        assert_eq!(order.as_slice(), &[Camel, Original, Const]);
    }

    #[test]
    fn test_from_names_appends_fallback() {
        assert_eq!(CaseOrder::from_names(["original"]).as_slice(), &[Original, Const]);
        assert_eq!(
            CaseOrder::from_names(["original", "original"]).as_slice(),
            &[Original, Const]
        );
        assert_eq!(CaseOrder::from_names(Vec::<String>::new()).as_slice(), &[Original, Const]);
        assert_eq!(CaseOrder::from_names(["bogus"]).as_slice(), &[Original, Const]);
    }

    #[test]
    fn test_single_non_original_gets_original_prepended() {
        assert_eq!(CaseOrder::from_names(["kebab"]).as_slice(), &[Original, Kebab]);
    }
}
