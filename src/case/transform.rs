//! Per-word case transformation
//!
//! Every non-original style is derived from one canonical form: the word
//! lowercased, with `_` inserted at each lowercase-to-uppercase boundary and
//! `-` joiners rewritten to `_`.

use super::segment::{is_joiner, segment};
use super::CaseVariant;

/// Canonical underscore-joined lowercase form of a word.
///
/// ```
/// use case_cycle::case::canonical_form;
///
/// assert_eq!(canonical_form("helloWorld"), "hello_world");
/// assert_eq!(canonical_form("Hello-World_again"), "hello_world_again");
/// assert_eq!(canonical_form("HTTPServer"), "httpserver");
/// ```
pub fn canonical_form(word: &str) -> String {
    let mut out = String::with_capacity(word.len() + 4);
    let mut prev_lower = false;

    for ch in word.chars() {
        if prev_lower && ch.is_ascii_uppercase() {
            out.push('_');
        }
        if ch.is_ascii() && is_joiner(ch as u8) {
            out.push('_');
        } else {
            out.push(ch.to_ascii_lowercase());
        }
        prev_lower = ch.is_ascii_lowercase();
    }

    out
}

/// Rewrite a single word run in the given style.
///
/// Delimiter runs are never passed here; see [`convert_text`] for whole
/// strings.
pub fn transform(word: &str, variant: CaseVariant) -> String {
    match variant {
        CaseVariant::Original => word.to_string(),
        CaseVariant::Const => canonical_form(word).to_ascii_uppercase(),
        CaseVariant::Snake => canonical_form(word),
        CaseVariant::Kebab => canonical_form(word).replace('_', "-"),
        CaseVariant::Camel => camel_from_canonical(&canonical_form(word)),
        CaseVariant::Pascal => {
            let mut camel = camel_from_canonical(&canonical_form(word));
            if let Some(first) = camel.get_mut(0..1) {
                first.make_ascii_uppercase();
            }
            camel
        }
    }
}

/// Drop each joiner and uppercase the character after it
fn camel_from_canonical(canonical: &str) -> String {
    let mut out = String::with_capacity(canonical.len());
    let mut upper_next = false;

    for ch in canonical.chars() {
        if ch == '_' {
            upper_next = true;
            continue;
        }
        if upper_next {
            out.push(ch.to_ascii_uppercase());
            upper_next = false;
        } else {
            out.push(ch);
        }
    }

    if let Some(first) = out.get_mut(0..1) {
        first.make_ascii_lowercase();
    }
    out
}

/// Convert every word in `text` to `variant`, leaving delimiters untouched.
///
/// ```
/// use case_cycle::case::{convert_text, CaseVariant};
///
/// assert_eq!(convert_text("hello-world", CaseVariant::Snake), "hello_world");
/// assert_eq!(convert_text("hello_world", CaseVariant::Kebab), "hello-world");
/// assert_eq!(convert_text("fooBar(x, y)", CaseVariant::Const), "FOO_BAR(X, Y)");
/// ```
pub fn convert_text(text: &str, variant: CaseVariant) -> String {
    if variant.is_original() {
        return text.to_string();
    }

    let mut out = String::with_capacity(text.len() + 8);
    for part in segment(text) {
        if part.is_word {
            out.push_str(&transform(part.text, variant));
        } else {
            out.push_str(part.text);
        }
    }
    out
}
