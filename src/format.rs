use crate::FormatMismatch;
use crate::cursor::{CursorUpdate, relocate_cursor};
use crate::mask::{DigitMask, Token};
use std::ops::Range;

/// How literal digits in the mask interact with the entered digits.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Entered digits must match the literal digits.
    /// Formatting stops at the first digit that doesn't.
    #[default]
    Strict,
    /// Literal digits are decoration, entered digits are never
    /// matched against them.
    FillIn,
    /// Literal digits are inserted automatically. An entered digit
    /// that matches the literal digit is swallowed.
    Mixed,
}

/// Digit-mask formatter.
///
/// Combines a [DigitMask] with a [Mode]. Immutable, one instance
/// formats any number of inputs.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct MaskFormat {
    mask: DigitMask,
    mode: Mode,
}

impl MaskFormat {
    /// New formatter with [Mode::Strict].
    pub fn new(template: &str, placeholder: char) -> Self {
        Self {
            mask: DigitMask::new(template, placeholder),
            mode: Default::default(),
        }
    }

    /// Same formatter with another mode.
    pub fn with_mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }

    /// The mask.
    #[inline]
    pub fn mask(&self) -> &DigitMask {
        &self.mask
    }

    /// The mode.
    #[inline]
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Position of the first placeholder or literal digit in the mask.
    #[inline]
    pub fn first_editable_index(&self) -> Option<usize> {
        self.mask.first_editable_index()
    }

    /// Format the digits found in raw against the mask.
    ///
    /// Everything but ascii digits in raw is ignored. The walk over
    /// the mask stops when the digits run out, so every prefix of a
    /// full input gives a valid intermediate text. Returns an empty
    /// string when raw contains no digit, and when the formatted
    /// text would contain no digit.
    pub fn format(&self, raw: &str) -> String {
        format_digits(&self.mask, self.mode, raw)
    }

    /// Format with the literal digits treated as decoration, whatever
    /// the mode. Use with digit-only input, as recovered by
    /// [unfixed_digits](Self::unfixed_digits).
    pub fn fill_in(&self, digits: &str) -> String {
        format_digits(&self.mask, Mode::FillIn, digits)
    }

    /// True if the text fills the mask completely. Each position must
    /// hold a digit in a placeholder slot, or the exact template char
    /// otherwise, and the lengths must match.
    pub fn is_fulfilled(&self, text: &str) -> bool {
        if text.chars().count() != self.mask.len() {
            return false;
        }
        for (c, t) in text.chars().zip(self.mask.tokens()) {
            let ok = match t {
                Token::Placeholder => c.is_ascii_digit(),
                Token::LiteralDigit(m) | Token::Literal(m) => c == *m,
            };
            if !ok {
                return false;
            }
        }
        true
    }

    /// Recover the entered digits from a formatted text.
    ///
    /// Literal digits and separators are skipped, digits in
    /// placeholder slots are collected. A placeholder char sitting in
    /// its own slot is skipped too. Fails when the text is longer
    /// than the mask or deviates from it anywhere.
    pub fn unfixed_digits(&self, text: &str) -> Result<String, FormatMismatch> {
        if text.chars().count() > self.mask.len() {
            return Err(FormatMismatch);
        }
        let mut digits = String::new();
        for (c, t) in text.chars().zip(self.mask.tokens()) {
            match t {
                Token::Placeholder if c == self.mask.placeholder() => {}
                Token::Placeholder if c.is_ascii_digit() => {
                    digits.push(c);
                }
                Token::LiteralDigit(m) | Token::Literal(m) if c == *m => {}
                _ => {
                    return Err(FormatMismatch);
                }
            }
        }
        Ok(digits)
    }

    /// Map a cursor position from the text before reformatting to the
    /// freshly formatted text. See [relocate_cursor](crate::relocate_cursor).
    pub fn relocate_cursor(
        &self,
        text: &str,
        selection: Range<usize>,
        backward_delete: bool,
        new_text: &str,
    ) -> CursorUpdate {
        relocate_cursor(&self.mask, text, selection, backward_delete, new_text)
    }
}

/// One-shot formatting against a mask built on the fly.
pub fn format(raw: &str, template: &str, placeholder: char, mode: Mode) -> String {
    let mask = DigitMask::new(template, placeholder);
    format_digits(&mask, mode, raw)
}

fn format_digits(mask: &DigitMask, mode: Mode, raw: &str) -> String {
    let digits = raw
        .chars()
        .filter(|c| c.is_ascii_digit())
        .collect::<Vec<_>>();
    if digits.is_empty() {
        return String::new();
    }

    let mut out = String::with_capacity(mask.len());
    let mut next = 0;

    for t in mask.tokens() {
        match t {
            Token::Placeholder => {
                let Some(d) = digits.get(next) else {
                    break;
                };
                out.push(*d);
                next += 1;
            }
            Token::LiteralDigit(m) if mode != Mode::FillIn => match digits.get(next) {
                Some(d) if *d == *m => {
                    out.push(*m);
                    next += 1;
                }
                _ if mode == Mode::Mixed => {
                    out.push(*m);
                }
                _ => {
                    break;
                }
            },
            Token::LiteralDigit(m) => {
                out.push(*m);
            }
            Token::Literal(c) => {
                out.push(*c);
            }
        }
    }

    if !out.chars().any(|c| c.is_ascii_digit()) {
        return String::new();
    }

    out
}
