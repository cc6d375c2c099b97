//! In-memory session for tests and dry runs.
//!
//! # Why a recording session?
//!
//! The wire session produces protocol text that is hard to assert on and
//! hard to read.  `RecordingSession` replaces delivery with simple in-memory
//! recording: each key event is pushed onto `events` and each stream is kept
//! with its reassembled payload, so assertions can inspect exactly what was
//! sent and in what order.
//!
//! # Usage in tests
//!
//! ```rust
//! use synthkeys_console::application::debug_console::{ConsoleSettings, DebugConsole};
//! use synthkeys_console::infrastructure::session::mock::RecordingSession;
//!
//! let mut console = DebugConsole::new(ConsoleSettings::default())
//!     .with_session(RecordingSession::new());
//! console.send_keys(&["a".into()]).unwrap();
//!
//! let session = console.into_session().unwrap();
//! assert_eq!(session.events.len(), 2);
//! ```

use std::fmt;

use synthkeys_core::KeyEvent;

use crate::application::session::{RemoteSession, StreamIndex};

/// The kind of stream a [`RecordedStream`] was opened as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StreamKind {
    ArgumentValue,
    Pipe,
}

/// A stream opened on a [`RecordingSession`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedStream {
    pub index: StreamIndex,
    pub kind: StreamKind,
    pub mimetype: String,
    pub name: String,
    /// Every blob sent so far, concatenated.
    pub data: Vec<u8>,
    /// Number of blobs the payload arrived in.
    pub blobs: usize,
    pub ended: bool,
}

impl RecordedStream {
    /// Returns the payload decoded as UTF-8, replacing invalid sequences.
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.data).into_owned()
    }
}

/// Everything sent to the session, in arrival order per kind.
#[derive(Debug, Default)]
pub struct RecordingSession {
    /// Every key event, in the order received.
    pub events: Vec<KeyEvent>,
    /// Every opened stream, indexed by its [`StreamIndex`].
    pub streams: Vec<RecordedStream>,
    /// Blobs or end markers addressed to a stream that was never opened.
    pub stray_writes: usize,
}

impl RecordingSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the first stream opened under `name`.
    pub fn stream(&self, name: &str) -> Option<&RecordedStream> {
        self.streams.iter().find(|s| s.name == name)
    }

    fn open(&mut self, kind: StreamKind, mimetype: &str, name: &str) -> StreamIndex {
        // Indices are positions in `streams`; the count stays far below u32::MAX.
        let index = StreamIndex(self.streams.len() as u32);
        self.streams.push(RecordedStream {
            index,
            kind,
            mimetype: mimetype.to_string(),
            name: name.to_string(),
            data: Vec::new(),
            blobs: 0,
            ended: false,
        });
        index
    }

    fn stream_mut(&mut self, index: StreamIndex) -> Option<&mut RecordedStream> {
        self.streams.get_mut(index.0 as usize)
    }
}

impl RemoteSession for RecordingSession {
    fn send_key_event(&mut self, event: KeyEvent) {
        self.events.push(event);
    }

    fn create_argument_value_stream(&mut self, mimetype: &str, name: &str) -> StreamIndex {
        self.open(StreamKind::ArgumentValue, mimetype, name)
    }

    fn create_pipe_stream(&mut self, mimetype: &str, name: &str) -> StreamIndex {
        self.open(StreamKind::Pipe, mimetype, name)
    }

    fn send_blob(&mut self, stream: StreamIndex, data: &[u8]) {
        match self.stream_mut(stream) {
            Some(recorded) => {
                recorded.data.extend_from_slice(data);
                recorded.blobs += 1;
            }
            None => self.stray_writes += 1,
        }
    }

    fn end_stream(&mut self, stream: StreamIndex) {
        match self.stream_mut(stream) {
            Some(recorded) => recorded.ended = true,
            None => self.stray_writes += 1,
        }
    }
}

/// Human-readable transcript: one event per line, then one line per stream.
impl fmt::Display for RecordingSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for event in &self.events {
            writeln!(f, "{event}")?;
        }
        for stream in &self.streams {
            let kind = match stream.kind {
                StreamKind::ArgumentValue => "argv",
                StreamKind::Pipe => "pipe",
            };
            writeln!(
                f,
                "{kind} {:?} ({}): {:?}{}",
                stream.name,
                stream.mimetype,
                stream.text(),
                if stream.ended { "" } else { " [open]" }
            )?;
        }
        Ok(())
    }
}
