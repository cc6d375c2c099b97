//! # synthkeys-core
//!
//! Shared library for synthkeys containing the keysym resolver, the named
//! key table, and the synthetic key sequencer.
//!
//! This crate has zero dependencies on OS APIs, UI frameworks, or network
//! sockets.  Events are handed to an [`EventSink`] supplied by the caller.
//!
//! # Architecture overview (for beginners)
//!
//! Remote-desktop protocols in the VNC/RDP family describe keys with X11
//! *keysyms*: 32-bit integers that name a key symbol independently of the
//! physical keyboard layout.  synthkeys lets a developer type into a remote
//! session from a script by describing what to press instead of pressing it.
//!
//! - **`keysym`** – Translation of Unicode codepoints into keysyms, plus a
//!   table of named keysyms (`L_CTRL`, `ENTER`, `F1`…) for keys that have no
//!   character.
//!
//! - **`sequence`** – The sequencer.  It walks a nested list of
//!   [`InputItem`]s (keys to hold, text to type, nested lists) and emits a
//!   strictly ordered stream of press/release [`KeyEvent`]s.

pub mod keysym;
pub mod sequence;

pub use keysym::{resolve, resolve_char, Keysym, KeysymError};
pub use sequence::{send_keys, sequence, EventSink, InputItem, KeyEvent, KeyPhase};
