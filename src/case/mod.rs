//! Case styles and the text conversion pipeline
//!
//! A piece of text is split into word and delimiter runs by [`segment`], and
//! every word run is rewritten by [`transform`]. Delimiters pass through
//! untouched, so converting never changes anything but the words.
//!
//! # Example
//!
//! ```
//! use case_cycle::case::{convert_text, CaseVariant};
//!
//! let out = convert_text("<div class=\"hello-world\">", CaseVariant::Snake);
//! assert_eq!(out, "<div class=\"hello_world\">");
//! ```

mod segment;
mod transform;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

pub use segment::{segment, WordSegment};
pub use transform::{canonical_form, convert_text, transform};

/// A text-casing convention the cycle can land on.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum CaseVariant {
    /// The text as it was before the first conversion
    #[default]
    Original,
    /// UPPER_SNAKE
    Const,
    /// camelCase
    Camel,
    /// PascalCase
    Pascal,
    /// snake_case
    Snake,
    /// kebab-case
    Kebab,
}

/// Fallback appended when a configured cycle has fewer than two styles.
pub const DEFAULT_SECOND_VARIANT: CaseVariant = CaseVariant::Const;

/// Cycle used when nothing is configured.
pub const DEFAULT_CYCLE: [CaseVariant; 5] = [
    CaseVariant::Original,
    CaseVariant::Const,
    CaseVariant::Camel,
    CaseVariant::Snake,
    CaseVariant::Kebab,
];

impl CaseVariant {
    pub const ALL: [CaseVariant; 6] = [
        CaseVariant::Original,
        CaseVariant::Const,
        CaseVariant::Camel,
        CaseVariant::Pascal,
        CaseVariant::Snake,
        CaseVariant::Kebab,
    ];

    /// Stable name used in configuration files and notifications
    pub fn name(self) -> &'static str {
        match self {
            CaseVariant::Original => "original",
            CaseVariant::Const => "const",
            CaseVariant::Camel => "camel",
            CaseVariant::Pascal => "pascal",
            CaseVariant::Snake => "snake",
            CaseVariant::Kebab => "kebab",
        }
    }

    /// Human-readable label with an example of the style
    pub fn label(self) -> &'static str {
        match self {
            CaseVariant::Original => "Original",
            CaseVariant::Const => "CONST_CASE",
            CaseVariant::Camel => "camelCase",
            CaseVariant::Pascal => "PascalCase",
            CaseVariant::Snake => "snake_case",
            CaseVariant::Kebab => "kebab-case",
        }
    }

    pub fn is_original(self) -> bool {
        self == CaseVariant::Original
    }
}

impl fmt::Display for CaseVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

/// Error returned when a style name has no entry in the alias table
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown case style: {0}")]
pub struct UnknownVariant(pub String);

impl FromStr for CaseVariant {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase();
        match key.as_str() {
            "original" => Ok(CaseVariant::Original),
            "const" | "constant" | "upper_snake" | "screaming_snake" => Ok(CaseVariant::Const),
            "camel" | "camelcase" => Ok(CaseVariant::Camel),
            "pascal" | "pascalcase" => Ok(CaseVariant::Pascal),
            "snake" | "snake_case" => Ok(CaseVariant::Snake),
            "kebab" | "kebab-case" => Ok(CaseVariant::Kebab),
            _ => Err(UnknownVariant(s.to_string())),
        }
    }
}
