//! The remote session boundary.
//!
//! [`RemoteSession`] stands in for the live connection to the remote
//! desktop.  Implementations live in the infrastructure layer: a protocol
//! encoder for real use and a recording session for tests and dry runs.
//!
//! # Streams (for beginners)
//!
//! Besides key events, the console pushes text to the remote side over
//! *streams*.  A stream is opened with a mimetype and a name, receives its
//! payload as a series of *blobs*, and is closed with an *end* marker.  The
//! session hands out a [`StreamIndex`] when a stream is opened; every later
//! blob and the end marker refer to it.

use std::fmt;

use synthkeys_core::{EventSink, KeyEvent};

/// Largest payload sent in a single blob, in bytes.
pub const DEFAULT_BLOB_LENGTH: usize = 6048;

/// Identifies an open output stream on a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StreamIndex(pub u32);

impl fmt::Display for StreamIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An active connection to a remote desktop.
///
/// All methods are fire-and-forget: delivery failures are the
/// implementation's concern and never reach the console.
#[cfg_attr(test, mockall::automock)]
pub trait RemoteSession {
    /// Dispatches a single key press or release.
    fn send_key_event(&mut self, event: KeyEvent);

    /// Opens a stream carrying the value of the connection parameter `name`.
    fn create_argument_value_stream(&mut self, mimetype: &str, name: &str) -> StreamIndex;

    /// Opens a named pipe stream.
    fn create_pipe_stream(&mut self, mimetype: &str, name: &str) -> StreamIndex;

    /// Sends one chunk of stream payload.
    fn send_blob(&mut self, stream: StreamIndex, data: &[u8]);

    /// Closes a stream.
    fn end_stream(&mut self, stream: StreamIndex);
}

/// Adapts a [`RemoteSession`] into an [`EventSink`] for the sequencer.
pub struct SessionSink<'a, S: RemoteSession + ?Sized>(pub &'a mut S);

impl<S: RemoteSession + ?Sized> EventSink for SessionSink<'_, S> {
    fn notify(&mut self, event: KeyEvent) {
        self.0.send_key_event(event);
    }
}

/// Sends `value` along `stream` as UTF-8 and closes the stream.
///
/// The payload is split into blobs of at most `blob_length` bytes.  Blob
/// boundaries may fall inside a multi-byte character; the receiver joins
/// blobs before decoding.  Empty text sends no blob but still ends the stream.
pub fn send_text<S: RemoteSession + ?Sized>(
    session: &mut S,
    stream: StreamIndex,
    value: &str,
    blob_length: usize,
) {
    for chunk in value.as_bytes().chunks(blob_length.max(1)) {
        session.send_blob(stream, chunk);
    }
    session.end_stream(stream);
}
