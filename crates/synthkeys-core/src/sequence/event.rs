//! Press/release events emitted by the sequencer.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::keysym::{table, Keysym};

/// Whether a key goes down or comes up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum KeyPhase {
    Press,
    Release,
}

impl KeyPhase {
    /// Returns `true` for [`KeyPhase::Press`].
    pub fn is_pressed(self) -> bool {
        matches!(self, KeyPhase::Press)
    }
}

/// A single synthetic key event.
///
/// Events carry no identity beyond their position in the emitted order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct KeyEvent {
    pub keysym: Keysym,
    pub phase: KeyPhase,
}

impl KeyEvent {
    /// Creates a key-down event.
    pub fn press(keysym: Keysym) -> Self {
        Self { keysym, phase: KeyPhase::Press }
    }

    /// Creates a key-up event.
    pub fn release(keysym: Keysym) -> Self {
        Self { keysym, phase: KeyPhase::Release }
    }
}

/// Formats as `press 0xFFE3 (L_CTRL)` or `release 0x0048 'H'`.
impl fmt::Display for KeyEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phase = match self.phase {
            KeyPhase::Press => "press",
            KeyPhase::Release => "release",
        };
        write!(f, "{phase} {}", self.keysym)?;
        if let Some(name) = table::name_of(self.keysym) {
            write!(f, " ({name})")
        } else if let Some(c) = self.keysym.to_char() {
            write!(f, " {c:?}")
        } else {
            Ok(())
        }
    }
}
