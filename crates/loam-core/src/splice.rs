//! Cursor-relative text surgery.
//!
//! Replaces the selected range of a text buffer with a fragment and reports
//! where the caret should land afterwards. Offsets are byte offsets into the
//! UTF-8 buffer and must fall on character boundaries.

use crate::{Error, Result};

/// A selection inside a text buffer, `start <= end <= buffer.len()`.
///
/// An empty selection (`start == end`) is a bare caret position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionRange {
    pub start: usize,
    pub end: usize,
}

impl SelectionRange {
    /// A collapsed selection at a single caret position
    #[must_use]
    pub const fn caret(at: usize) -> Self {
        Self { start: at, end: at }
    }

    /// Whether this selection covers no text
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// Result of a splice: the rewritten buffer and the caret that follows it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Splice {
    pub buffer: String,
    pub caret: usize,
}

/// Replace `selection` in `buffer` with `fragment`.
///
/// Text strictly between `start` and `end` is replaced; everything outside
/// the selection is untouched. The returned caret sits immediately after the
/// inserted fragment (`selection.start + fragment.len()`), not at buffer end.
///
/// Fails with [`Error::InvalidRange`] when the selection is out of bounds,
/// inverted, or not aligned to character boundaries; the buffer is left
/// unchanged in that case.
pub fn splice(buffer: &str, selection: SelectionRange, fragment: &str) -> Result<Splice> {
    let SelectionRange { start, end } = selection;
    let valid = start <= end
        && end <= buffer.len()
        && buffer.is_char_boundary(start)
        && buffer.is_char_boundary(end);
    if !valid {
        return Err(Error::InvalidRange {
            start,
            end,
            len: buffer.len(),
        });
    }

    let mut out = String::with_capacity(buffer.len() - (end - start) + fragment.len());
    out.push_str(&buffer[..start]);
    out.push_str(fragment);
    out.push_str(&buffer[end..]);

    Ok(Splice {
        buffer: out,
        caret: start + fragment.len(),
    })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn inserts_at_collapsed_caret() {
        let result = splice("Hello world", SelectionRange::caret(5), "! ").unwrap();
        assert_eq!(result.buffer, "Hello! world");
        assert_eq!(result.caret, 7);
    }

    #[test]
    fn replaces_selected_text() {
        let result = splice("Hello world", SelectionRange { start: 6, end: 11 }, "Rust").unwrap();
        assert_eq!(result.buffer, "Hello Rust");
        assert_eq!(result.caret, 10);
    }

    #[test]
    fn inserts_at_buffer_start_and_end() {
        let start = splice("abc", SelectionRange::caret(0), ">> ").unwrap();
        assert_eq!(start.buffer, ">> abc");
        assert_eq!(start.caret, 3);

        let end = splice("abc", SelectionRange::caret(3), "!").unwrap();
        assert_eq!(end.buffer, "abc!");
        assert_eq!(end.caret, 4);
    }

    #[test]
    fn empty_fragment_deletes_selection() {
        let result = splice("abcdef", SelectionRange { start: 2, end: 4 }, "").unwrap();
        assert_eq!(result.buffer, "abef");
        assert_eq!(result.caret, 2);
    }

    #[test]
    fn output_length_matches_contract() {
        let buffer = "The quick brown fox";
        let selection = SelectionRange { start: 4, end: 9 };
        let fragment = "slow and steady";
        let result = splice(buffer, selection, fragment).unwrap();

        assert_eq!(
            result.buffer.len(),
            buffer.len() - (selection.end - selection.start) + fragment.len()
        );
        assert_eq!(result.caret, selection.start + fragment.len());
    }

    #[test]
    fn rejects_out_of_bounds_selection() {
        let err = splice("abc", SelectionRange { start: 1, end: 9 }, "x").unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidRange {
                start: 1,
                end: 9,
                len: 3
            }
        ));
    }

    #[test]
    fn rejects_inverted_selection() {
        assert!(splice("abc", SelectionRange { start: 2, end: 1 }, "x").is_err());
    }

    #[test]
    fn rejects_non_character_boundary() {
        // "é" is two bytes; offset 1 lands inside it.
        assert!(splice("é", SelectionRange::caret(1), "x").is_err());
    }

    #[test]
    fn splices_multibyte_text_on_boundaries() {
        let buffer = "héllo";
        let result = splice(buffer, SelectionRange::caret(3), "y").unwrap();
        assert_eq!(result.buffer, "héyllo");
        assert_eq!(result.caret, 4);
    }
}
