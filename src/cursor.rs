use crate::mask::DigitMask;
use log::debug;
use std::ops::Range;

/// Result of [relocate_cursor].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CursorUpdate {
    /// New cursor, as char offset into the formatted text.
    pub cursor: usize,
    /// Truncated replacement for the formatted text. Set when the
    /// tail behind the cursor has been cut off.
    pub text: Option<String>,
}

/// Map a cursor position from the text before reformatting to the
/// freshly formatted text.
///
/// * `text` and `selection` are the content and cursor of the host
///   widget as they stand right after the keystroke, before
///   reformatting. Char offsets, a plain cursor is an empty range.
/// * `backward_delete` is set by the host when the keystroke was a
///   backward delete. This is not detectable from the text alone.
/// * `new_text` is the result of formatting `text`.
///
/// The cursor keeps its position relative to the entered digits.
/// After an insert it sits behind as many digits of `new_text` as
/// preceded the selection, after a backward delete it sits before as
/// many digits as followed the selection. When no position satisfies
/// the digit count the cursor snaps to the end of `new_text`. It also
/// snaps to the end when it would land before the first editable slot
/// of the mask.
///
/// A cursor in the middle of `new_text` cuts off the tail when the
/// tail is decoration. That is the case when the mask continues with
/// literal digits behind the cursor, and when the tail of `new_text`
/// contains no digit at all. The result carries the truncated string
/// then, and the host is expected to replace the text once more.
pub fn relocate_cursor(
    mask: &DigitMask,
    text: &str,
    selection: Range<usize>,
    backward_delete: bool,
    new_text: &str,
) -> CursorUpdate {
    let new_len = new_text.chars().count();

    let candidate = if backward_delete {
        let budget = text
            .chars()
            .skip(selection.end)
            .filter(|c| c.is_ascii_digit())
            .count();
        suffix_with_digits(new_text, budget).map(|n| new_len - n)
    } else {
        let budget = text
            .chars()
            .take(selection.start)
            .filter(|c| c.is_ascii_digit())
            .count();
        prefix_with_digits(new_text, budget)
    };

    let mut cursor = candidate.unwrap_or(new_len);
    if let Some(first_edit) = mask.first_editable_index() {
        if cursor < first_edit {
            debug!("cursor {} before {}, snap to end", cursor, first_edit);
            cursor = new_len;
        }
    }

    let cut = if cursor < new_len && cut_tail(mask, new_text, cursor) {
        debug!("cut tail at {} of {:?}", cursor, new_text);
        Some(new_text.chars().take(cursor).collect())
    } else {
        None
    };

    CursorUpdate { cursor, text: cut }
}

/// Length of the shortest prefix containing count digits.
/// None for a zero count and when the digits run out.
fn prefix_with_digits(text: &str, count: usize) -> Option<usize> {
    if count == 0 {
        return None;
    }
    let mut seen = 0;
    for (i, c) in text.chars().enumerate() {
        if c.is_ascii_digit() {
            seen += 1;
            if seen == count {
                return Some(i + 1);
            }
        }
    }
    None
}

/// Length of the shortest suffix containing count digits.
/// None for a zero count and when the digits run out.
fn suffix_with_digits(text: &str, count: usize) -> Option<usize> {
    if count == 0 {
        return None;
    }
    let mut seen = 0;
    for (i, c) in text.chars().rev().enumerate() {
        if c.is_ascii_digit() {
            seen += 1;
            if seen == count {
                return Some(i + 1);
            }
        }
    }
    None
}

/// The tail of new_text behind the cursor is decoration.
fn cut_tail(mask: &DigitMask, new_text: &str, cursor: usize) -> bool {
    let fixed_digits_ahead = mask
        .tokens()
        .iter()
        .skip(cursor)
        .any(|t| t.is_literal_digit());
    let no_digits_in_tail = !new_text.chars().skip(cursor).any(|c| c.is_ascii_digit());
    fixed_digits_ahead || no_digits_in_tail
}
