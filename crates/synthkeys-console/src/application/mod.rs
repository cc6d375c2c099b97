//! Application layer use cases for the console.
//!
//! # What use cases does the console have?
//!
//! - **`session`** – The boundary to the remote desktop connection.  The
//!   [`session::RemoteSession`] trait is implemented in the infrastructure
//!   layer; this module also holds the helpers that adapt a session into an
//!   event sink and stream text through it.
//!
//! - **`debug_console`** – The [`debug_console::DebugConsole`] use case:
//!   sending key sequences, Ctrl+Alt+Shift, argument values and pipe data,
//!   and toggling the UI menu.  The session and UI are injected at
//!   construction time rather than looked up globally.

pub mod debug_console;
pub mod session;
