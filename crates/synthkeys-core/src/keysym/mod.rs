//! X11 keysym values and their translation from Unicode.
//!
//! X11 KeySym values are defined in X11/keysymdef.h.
//! Reference: https://gitlab.freedesktop.org/xorg/proto/xorgproto/-/blob/master/include/X11/keysymdef.h
//!
//! # What is an X11 KeySym? (for beginners)
//!
//! A keysym names a key *symbol* rather than a physical key position.  It can
//! represent characters as well as keys that produce no character:
//!
//! | KeySym name | Value      | Meaning          |
//! |-------------|------------|------------------|
//! | `XK_a`      | 0x0061     | lowercase 'a'    |
//! | `XK_Return` | 0xFF0D     | Enter key        |
//! | `XK_Escape` | 0xFF1B     | Escape key       |
//! | `U+20AC`    | 0x010020AC | Euro sign '€'    |
//!
//! Latin-1 characters use their own codepoint as keysym.  Every other Unicode
//! character is expressed by setting bit 24 (`0x01000000 | codepoint`).

pub mod resolver;
pub mod table;

use std::fmt;

use serde::{Deserialize, Serialize};

pub use resolver::{resolve, resolve_char, KeysymError};

/// An X11 keysym.
///
/// Serialized as its bare integer value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Keysym(pub u32);

impl Keysym {
    /// Returns the raw keysym value.
    pub const fn value(self) -> u32 {
        self.0
    }

    /// Returns the character this keysym types, if it lies in the Latin-1
    /// printable or Unicode sub-ranges.
    ///
    /// Control-range keysyms (`0xFF00 | c`) are not inverted: that block is
    /// shared with named keys such as `XK_BackSpace` and `XK_Num_Lock`.
    pub fn to_char(self) -> Option<char> {
        match self.0 {
            0x20..=0x7E | 0xA0..=0xFF => char::from_u32(self.0),
            0x0100_0100..=0x0110_FFFF => char::from_u32(self.0 & 0x00FF_FFFF),
            _ => None,
        }
    }
}

impl From<u32> for Keysym {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

impl From<Keysym> for u32 {
    fn from(keysym: Keysym) -> Self {
        keysym.0
    }
}

impl fmt::Display for Keysym {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:04X}", self.0)
    }
}
