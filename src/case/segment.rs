//! Lossless word/delimiter segmentation

/// A run of the input, either a convertible word or a verbatim delimiter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WordSegment<'a> {
    pub text: &'a str,
    pub is_word: bool,
}

impl<'a> WordSegment<'a> {
    pub fn word(text: &'a str) -> Self {
        Self {
            text,
            is_word: true,
        }
    }

    pub fn delimiter(text: &'a str) -> Self {
        Self {
            text,
            is_word: false,
        }
    }
}

/// Split `text` into word and delimiter runs.
///
/// A word is one or more ASCII alphanumerics, optionally continued by `-` or
/// `_` followed by more alphanumerics. Joiners inside a word belong to it; a
/// joiner that is not followed by an alphanumeric ends the word and lands in
/// the next delimiter run. Concatenating the returned texts in order yields
/// `text` exactly.
///
/// ```
/// use case_cycle::case::{segment, WordSegment};
///
/// let parts = segment("<div class=\"hello-world\">");
/// assert_eq!(
///     parts,
///     vec![
///         WordSegment::delimiter("<"),
///         WordSegment::word("div"),
///         WordSegment::delimiter(" "),
///         WordSegment::word("class"),
///         WordSegment::delimiter("=\""),
///         WordSegment::word("hello-world"),
///         WordSegment::delimiter("\">"),
///     ]
/// );
/// ```
pub fn segment(text: &str) -> Vec<WordSegment<'_>> {
    let bytes = text.as_bytes();
    let mut parts = Vec::new();
    let mut delimiter_start = 0;
    let mut i = 0;

    while i < bytes.len() {
        if !bytes[i].is_ascii_alphanumeric() {
            i += 1;
            continue;
        }

        let end = word_end(bytes, i);
        if i > delimiter_start {
            parts.push(WordSegment::delimiter(&text[delimiter_start..i]));
        }
        // Word bytes are ASCII, so both ends are char boundaries
        parts.push(WordSegment::word(&text[i..end]));
        i = end;
        delimiter_start = end;
    }

    if delimiter_start < bytes.len() {
        parts.push(WordSegment::delimiter(&text[delimiter_start..]));
    }

    parts
}

/// Byte index one past the end of the word starting at `start`
fn word_end(bytes: &[u8], start: usize) -> usize {
    let mut end = alnum_run_end(bytes, start);
    while end + 1 < bytes.len()
        && is_joiner(bytes[end])
        && bytes[end + 1].is_ascii_alphanumeric()
    {
        end = alnum_run_end(bytes, end + 1);
    }
    end
}

fn alnum_run_end(bytes: &[u8], start: usize) -> usize {
    bytes[start..]
        .iter()
        .position(|b| !b.is_ascii_alphanumeric())
        .map_or(bytes.len(), |offset| start + offset)
}

#[inline]
pub(crate) fn is_joiner(byte: u8) -> bool {
    byte == b'-' || byte == b'_'
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts<'a>(parts: &[WordSegment<'a>]) -> Vec<(&'a str, bool)> {
        parts.iter().map(|p| (p.text, p.is_word)).collect()
    }

    #[test]
    fn test_empty_input() {
        assert!(segment("").is_empty());
    }

    #[test]
    fn test_single_word() {
        assert_eq!(texts(&segment("hello")), vec![("hello", true)]);
    }

    #[test]
    fn test_joiners_stay_inside_words() {
        assert_eq!(
            texts(&segment("foo-bar baz_qux")),
            vec![("foo-bar", true), (" ", false), ("baz_qux", true)]
        );
    }

    #[test]
    fn test_dangling_joiners_are_delimiters() {
        assert_eq!(
            texts(&segment("-foo_ bar--baz")),
            vec![
                ("-", false),
                ("foo", true),
                ("_ ", false),
                ("bar", true),
                ("--", false),
                ("baz", true),
            ]
        );
    }

    #[test]
    fn test_non_ascii_is_delimiter() {
        assert_eq!(
            texts(&segment("café_au")),
            vec![("caf", true), ("é_", false), ("au", true)]
        );
    }

    #[test]
    fn test_digits_are_word_characters() {
        assert_eq!(
            texts(&segment("v2_api 42")),
            vec![("v2_api", true), (" ", false), ("42", true)]
        );
    }

    #[test]
    fn test_only_delimiters() {
        assert_eq!(texts(&segment(" -> ")), vec![(" -> ", false)]);
    }
}
