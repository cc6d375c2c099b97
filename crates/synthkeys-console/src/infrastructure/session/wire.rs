//! Text instruction encoding for the remote desktop protocol.
//!
//! # Wire format (for beginners)
//!
//! Every instruction is a list of elements separated by commas and
//! terminated by a semicolon.  The first element is the opcode.  Each
//! element is prefixed with its length in Unicode codepoints and a period:
//!
//! ```text
//! 3.key,5.65507,1.1;              press L_CTRL (0xFFE3 = 65507)
//! 4.argv,1.0,10.text/plain,8.username;
//! 4.blob,1.0,8.Z3Vlc3Q=;          "guest", base64-encoded
//! 3.end,1.0;
//! ```
//!
//! Stream payloads travel base64-encoded inside `blob` instructions so that
//! arbitrary bytes survive the text framing.

use std::io::{self, Write};

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use synthkeys_core::KeyEvent;
use tracing::warn;

use crate::application::session::{RemoteSession, StreamIndex};

/// Encodes one instruction, including the trailing semicolon.
pub fn encode_instruction(opcode: &str, args: &[&str]) -> String {
    let mut out = String::new();
    push_element(&mut out, opcode);
    for arg in args {
        out.push(',');
        push_element(&mut out, arg);
    }
    out.push(';');
    out
}

fn push_element(out: &mut String, value: &str) {
    out.push_str(&value.chars().count().to_string());
    out.push('.');
    out.push_str(value);
}

/// A session that writes protocol instructions to `W`.
///
/// Write failures are logged once; the first error is kept and returned by
/// [`finish`](Self::finish), and nothing further is written.
pub struct WireSession<W: Write> {
    writer: W,
    next_stream: u32,
    error: Option<io::Error>,
}

impl<W: Write> WireSession<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, next_stream: 0, error: None }
    }

    pub fn get_ref(&self) -> &W {
        &self.writer
    }

    /// Flushes the writer and returns it.
    ///
    /// # Errors
    ///
    /// Returns the first write error encountered by the session, or the
    /// error from the final flush.
    pub fn finish(mut self) -> io::Result<W> {
        if let Some(err) = self.error.take() {
            return Err(err);
        }
        self.writer.flush()?;
        Ok(self.writer)
    }

    fn write_instruction(&mut self, opcode: &str, args: &[&str]) {
        if self.error.is_some() {
            return;
        }
        let instruction = encode_instruction(opcode, args);
        if let Err(err) = self.writer.write_all(instruction.as_bytes()) {
            warn!(opcode, "failed to write instruction: {err}");
            self.error = Some(err);
        }
    }

    fn open_stream(&mut self, opcode: &str, mimetype: &str, name: &str) -> StreamIndex {
        let stream = StreamIndex(self.next_stream);
        self.next_stream = self.next_stream.wrapping_add(1);
        self.write_instruction(opcode, &[&stream.to_string(), mimetype, name]);
        stream
    }
}

impl<W: Write> RemoteSession for WireSession<W> {
    fn send_key_event(&mut self, event: KeyEvent) {
        let pressed = if event.phase.is_pressed() { "1" } else { "0" };
        self.write_instruction("key", &[&event.keysym.value().to_string(), pressed]);
    }

    fn create_argument_value_stream(&mut self, mimetype: &str, name: &str) -> StreamIndex {
        self.open_stream("argv", mimetype, name)
    }

    fn create_pipe_stream(&mut self, mimetype: &str, name: &str) -> StreamIndex {
        self.open_stream("pipe", mimetype, name)
    }

    fn send_blob(&mut self, stream: StreamIndex, data: &[u8]) {
        self.write_instruction("blob", &[&stream.to_string(), &STANDARD.encode(data)]);
    }

    fn end_stream(&mut self, stream: StreamIndex) {
        self.write_instruction("end", &[&stream.to_string()]);
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use synthkeys_core::keysym::table::L_CTRL;
    use synthkeys_core::Keysym;

    fn output(session: WireSession<Vec<u8>>) -> String {
        String::from_utf8(session.finish().unwrap()).unwrap()
    }

    /// A writer that fails every write.
    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_encode_instruction_prefixes_lengths() {
        assert_eq!(encode_instruction("end", &["0"]), "3.end,1.0;");
        assert_eq!(encode_instruction("nop", &[]), "3.nop;");
    }

    #[test]
    fn test_encode_instruction_counts_codepoints_not_bytes() {
        assert_eq!(encode_instruction("x", &["é😀"]), "1.x,2.é😀;");
    }

    #[test]
    fn test_key_press_and_release() {
        // Arrange
        let mut session = WireSession::new(Vec::new());

        // Act
        session.send_key_event(KeyEvent::press(L_CTRL));
        session.send_key_event(KeyEvent::release(Keysym(0x61)));

        // Assert
        assert_eq!(output(session), "3.key,5.65507,1.1;3.key,2.97,1.0;");
    }

    #[test]
    fn test_streams_get_increasing_indices() {
        let mut session = WireSession::new(Vec::new());

        let argv = session.create_argument_value_stream("text/plain", "username");
        let pipe = session.create_pipe_stream("text/plain", "log");

        assert_eq!(argv, StreamIndex(0));
        assert_eq!(pipe, StreamIndex(1));
        assert_eq!(
            output(session),
            "4.argv,1.0,10.text/plain,8.username;4.pipe,1.1,10.text/plain,3.log;"
        );
    }

    #[test]
    fn test_blob_payload_is_base64_encoded() {
        let mut session = WireSession::new(Vec::new());

        session.send_blob(StreamIndex(0), b"guest");
        session.end_stream(StreamIndex(0));

        assert_eq!(output(session), "4.blob,1.0,8.Z3Vlc3Q=;3.end,1.0;");
    }

    #[test]
    fn test_instructions_are_written_as_they_are_sent() {
        let mut session = WireSession::new(Vec::new());

        session.send_key_event(KeyEvent::press(L_CTRL));

        assert_eq!(session.get_ref().as_slice(), b"3.key,5.65507,1.1;");
    }

    #[test]
    fn test_first_write_error_is_reported_by_finish() {
        // Arrange
        let mut session = WireSession::new(BrokenPipe);

        // Act
        session.send_key_event(KeyEvent::press(L_CTRL));
        session.send_key_event(KeyEvent::release(L_CTRL));

        // Assert
        let err = session.finish().err().expect("write error must surface");
        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
    }
}
