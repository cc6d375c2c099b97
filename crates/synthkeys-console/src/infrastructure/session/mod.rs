//! `RemoteSession` implementations.
//!
//! - [`wire::WireSession`] writes protocol instructions to an `io::Write`.
//! - [`mock::RecordingSession`] records events and streams in memory.

pub mod mock;
pub mod wire;
