#![doc = include_str!("../readme.md")]
#![allow(clippy::uninlined_format_args)]

use std::error::Error;
use std::fmt::{Display, Formatter};

mod cursor;
mod format;
mod mask;

pub use cursor::{CursorUpdate, relocate_cursor};
pub use format::{MaskFormat, Mode, format};
pub use mask::{DigitMask, Token};

/// The text cannot be a result of formatting with the mask.
#[derive(Debug)]
pub struct FormatMismatch;

impl Display for FormatMismatch {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl Error for FormatMismatch {}
