use std::fmt;
use std::fmt::{Display, Formatter};

/// One slot of a [DigitMask].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token {
    /// The placeholder char. Slot for one entered digit.
    Placeholder,
    /// Digit char in the template. Fixed digit that is part of the
    /// format itself.
    LiteralDigit(char),
    /// Any other char. Separator, emitted verbatim.
    Literal(char),
}

impl Token {
    /// Placeholder or literal digit. The slots editing interacts with.
    #[inline]
    pub fn is_editable(&self) -> bool {
        matches!(self, Token::Placeholder | Token::LiteralDigit(_))
    }

    /// Literal digit slot.
    #[inline]
    pub fn is_literal_digit(&self) -> bool {
        matches!(self, Token::LiteralDigit(_))
    }
}

/// Compiled digit mask.
///
/// Built from a template string and a placeholder char.
/// Each template char becomes one slot:
/// * the placeholder char: slot for one entered digit
/// * an ascii digit: literal digit of the format
/// * everything else: separator
///
/// The placeholder test wins, so a digit used as placeholder char
/// gives digit slots, not literal digits.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct DigitMask {
    tok: Vec<Token>,
    placeholder: char,
}

impl DigitMask {
    /// Compile the template. Every template is valid, there is no
    /// failure mode.
    pub fn new(template: &str, placeholder: char) -> Self {
        let mut tok = Vec::new();
        for c in template.chars() {
            if c == placeholder {
                tok.push(Token::Placeholder);
            } else if c.is_ascii_digit() {
                tok.push(Token::LiteralDigit(c));
            } else {
                tok.push(Token::Literal(c));
            }
        }
        Self { tok, placeholder }
    }

    /// Number of slots.
    #[inline]
    pub fn len(&self) -> usize {
        self.tok.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tok.is_empty()
    }

    /// The placeholder char.
    #[inline]
    pub fn placeholder(&self) -> char {
        self.placeholder
    }

    /// The compiled slots.
    #[inline]
    pub fn tokens(&self) -> &[Token] {
        &self.tok
    }

    /// Position of the first placeholder or literal digit.
    /// None for a mask of separators only.
    pub fn first_editable_index(&self) -> Option<usize> {
        self.tok.iter().position(|t| t.is_editable())
    }
}

impl Display for DigitMask {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for t in &self.tok {
            match t {
                Token::Placeholder => {
                    write!(f, "{}", self.placeholder)?;
                }
                Token::LiteralDigit(c) | Token::Literal(c) => {
                    write!(f, "{}", c)?;
                }
            }
        }
        Ok(())
    }
}
