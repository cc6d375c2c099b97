//! synthkeys-console library entry point.
//!
//! Re-exports all public modules so that integration tests in `tests/`
//! and the binary entry point in `main.rs` share the same module tree.
//!
//! # What does synthkeys-console do? (for beginners)
//!
//! When debugging a remote desktop it is often necessary to send input that
//! the local machine would intercept (Ctrl+Alt+Del) or that is tedious to
//! type by hand.  The console accepts a description of the keys instead:
//!
//! ```text
//! synthkeys send-keys @L_CTRL '[{"key": "L_SHIFT"}, "T"]' f
//! ```
//!
//! 1. The arguments are classified into `InputItem`s (keys to hold, text to
//!    type, nested lists).
//! 2. `synthkeys_core::send_keys` turns them into ordered press/release events.
//! 3. The events are written to the remote session, which encodes them as
//!    protocol instructions.
//!
//! The console can also push named argument values and pipe streams to the
//! session, and toggle the on-screen menu of an attached UI.

/// Application layer: the debug console use case and the session boundary.
pub mod application;

/// Infrastructure layer: protocol session, script parsing, UI state, config.
pub mod infrastructure;
