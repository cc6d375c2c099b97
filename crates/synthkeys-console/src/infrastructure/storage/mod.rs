//! Configuration persistence.
//!
//! - **`config`** – Loads `ConsoleConfig` from a TOML file, falling back to
//!   defaults for any field the file omits.

pub mod config;
