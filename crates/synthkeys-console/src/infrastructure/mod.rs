//! Infrastructure layer for the console.
//!
//! Contains the adapters behind the application-layer traits: protocol
//! encoding, script parsing, UI state, and configuration persistence.
//!
//! **Dependency rule**: this layer may depend on `application` and
//! `synthkeys_core`, but MUST NOT be imported by the `application` layer.
//!
//! # Sub-modules
//!
//! - **`session`** – Implementations of `RemoteSession`: `WireSession`
//!   encodes protocol instructions onto any `io::Write`; `RecordingSession`
//!   keeps everything in memory for tests and `--dry-run`.
//!
//! - **`script`** – The classification step that turns JSON values and raw
//!   command-line arguments into `InputItem`s, and the line-based script
//!   format understood by `synthkeys run`.
//!
//! - **`ui_bridge`** – Menu visibility state implementing `ConsoleUi`.
//!
//! - **`storage`** – TOML configuration file loading.

pub mod script;
pub mod session;
pub mod storage;
pub mod ui_bridge;
