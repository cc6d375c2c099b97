//! Unicode codepoint to X11 keysym translation.
//!
//! The mapping is applied in priority order, first match wins:
//!
//! | Codepoint range                  | Keysym                   |
//! |----------------------------------|--------------------------|
//! | `0x00..=0x1F`, `0x7F..=0x9F`     | `0xFF00 \| codepoint`     |
//! | `0x20..=0x7E`, `0xA0..=0xFF`     | `codepoint`              |
//! | `0x100..=0x10FFFF`               | `0x01000000 \| codepoint` |
//!
//! The control rule overlaps the Latin-1 rule on `0x7F..=0x9F` and is checked
//! first, so control characters always take the control mapping.

use thiserror::Error;

use super::Keysym;

/// Highest valid Unicode codepoint.
const MAX_CODEPOINT: i64 = 0x10_FFFF;

/// Error type for keysym resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum KeysymError {
    /// The value is outside `0..=0x10FFFF` and names no Unicode character.
    #[error("invalid codepoint: {}", signed_hex(*.0))]
    InvalidCodepoint(i64),
}

/// Formats `value` as hex with an explicit sign, e.g. `-0x1` for `-1`.
fn signed_hex(value: i64) -> String {
    if value < 0 {
        format!("-{:#X}", value.unsigned_abs())
    } else {
        format!("{value:#X}")
    }
}

/// Returns the X11 keysym which types the Unicode character with the given
/// codepoint.
///
/// # Errors
///
/// Returns [`KeysymError::InvalidCodepoint`] if `codepoint` is negative or
/// greater than `0x10FFFF`.
///
/// # Examples
///
/// ```rust
/// use synthkeys_core::keysym::{resolve, Keysym};
///
/// assert_eq!(resolve(0x0D), Ok(Keysym(0xFF0D)));
/// assert_eq!(resolve('H' as i64), Ok(Keysym(0x48)));
/// assert_eq!(resolve(0x20AC), Ok(Keysym(0x0100_20AC)));
/// assert!(resolve(-1).is_err());
/// ```
pub fn resolve(codepoint: i64) -> Result<Keysym, KeysymError> {
    if !(0..=MAX_CODEPOINT).contains(&codepoint) {
        return Err(KeysymError::InvalidCodepoint(codepoint));
    }
    // The range check above makes the narrowing lossless.
    Ok(map_codepoint(codepoint as u32))
}

/// Returns the X11 keysym which types `c`.
///
/// Infallible counterpart of [`resolve`]: every `char` is a valid codepoint.
pub fn resolve_char(c: char) -> Keysym {
    map_codepoint(u32::from(c))
}

fn map_codepoint(codepoint: u32) -> Keysym {
    match codepoint {
        // Keysyms for control characters
        0x00..=0x1F | 0x7F..=0x9F => Keysym(0xFF00 | codepoint),
        // Keysyms for Latin-1 characters
        0x20..=0xFF => Keysym(codepoint),
        // Keysyms for Unicode
        _ => Keysym(0x0100_0000 | codepoint),
    }
}
