//! DebugConsole: the console's operations against an injected session.
//!
//! This use case sits at the application layer and delegates to a
//! [`RemoteSession`] implementation for delivery.  The session is optional:
//! every operation is a silent no-op while no session is attached, which
//! matches how a debug helper behaves outside an active connection.

use synthkeys_core::keysym::table::{L_ALT, L_CTRL, L_SHIFT};
use synthkeys_core::{send_keys, InputItem, KeysymError};
use thiserror::Error;
use tracing::{debug, info};

use super::session::{send_text, RemoteSession, SessionSink, DEFAULT_BLOB_LENGTH};

/// Error type for console operations.
#[derive(Debug, Error)]
pub enum ConsoleError {
    /// Text contained a codepoint with no keysym.  Keys held before the
    /// failure were not released.
    #[error(transparent)]
    Keysym(#[from] KeysymError),
}

/// A user interface whose on-screen menu the console can show or hide.
pub trait ConsoleUi {
    /// Flips menu visibility and returns whether the menu is now shown.
    fn toggle_menu(&mut self) -> bool;
}

/// Stream settings applied to argument value and pipe streams.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConsoleSettings {
    /// Mimetype every stream is opened with.
    pub mimetype: String,
    /// Largest blob sent per stream chunk, in bytes.
    pub blob_length: usize,
}

impl Default for ConsoleSettings {
    fn default() -> Self {
        Self {
            mimetype: "text/plain".to_string(),
            blob_length: DEFAULT_BLOB_LENGTH,
        }
    }
}

/// A single console operation, as parsed from a script line or the CLI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConsoleCommand {
    /// Sends a key sequence.
    SendKeys(Vec<InputItem>),
    /// Presses and releases Ctrl+Alt+Shift.
    Cas,
    /// Sends a connection parameter value.
    Argv { name: String, value: String },
    /// Sends text along a named pipe stream.
    Pipe { name: String, value: String },
    /// Shows or hides the UI menu.
    ToggleMenu,
}

/// The debug console use case.
///
/// Owns its session exclusively, so two key sequences can never interleave
/// on the same connection.
pub struct DebugConsole<S: RemoteSession> {
    session: Option<S>,
    ui: Option<Box<dyn ConsoleUi>>,
    settings: ConsoleSettings,
}

impl<S: RemoteSession> DebugConsole<S> {
    /// Creates a console with no session and no UI attached.
    pub fn new(settings: ConsoleSettings) -> Self {
        Self { session: None, ui: None, settings }
    }

    /// Attaches `session` for subsequent operations.
    pub fn with_session(mut self, session: S) -> Self {
        self.session = Some(session);
        self
    }

    /// Attaches a UI whose menu [`toggle_menu`](Self::toggle_menu) controls.
    pub fn with_ui(mut self, ui: Box<dyn ConsoleUi>) -> Self {
        self.ui = Some(ui);
        self
    }

    /// Replaces the current session, returning the previous one.
    pub fn attach(&mut self, session: S) -> Option<S> {
        self.session.replace(session)
    }

    /// Removes and returns the current session.
    pub fn detach(&mut self) -> Option<S> {
        self.session.take()
    }

    pub fn session(&self) -> Option<&S> {
        self.session.as_ref()
    }

    pub fn settings(&self) -> &ConsoleSettings {
        &self.settings
    }

    /// Sends the given key sequence to the session.
    ///
    /// See [`synthkeys_core::send_keys`] for the ordering rules.
    ///
    /// # Errors
    ///
    /// Returns [`ConsoleError::Keysym`] if a text item cannot be typed.  Keys
    /// already held stay pressed on the remote side.
    pub fn send_keys(&mut self, items: &[InputItem]) -> Result<(), ConsoleError> {
        let Some(session) = self.session.as_mut() else {
            debug!("no active session; key sequence dropped");
            return Ok(());
        };
        send_keys(&mut SessionSink(session), items)?;
        Ok(())
    }

    /// Presses Ctrl+Alt+Shift within the session.
    ///
    /// # Errors
    ///
    /// Never fails in practice; see [`send_keys`](Self::send_keys).
    pub fn cas(&mut self) -> Result<(), ConsoleError> {
        self.send_keys(&[L_CTRL.into(), L_ALT.into(), L_SHIFT.into()])
    }

    /// Sends a connection parameter value as an argument value stream.
    pub fn send_argv(&mut self, name: &str, value: &str) {
        let Some(session) = self.session.as_mut() else {
            debug!(name, "no active session; argv dropped");
            return;
        };
        let stream = session.create_argument_value_stream(&self.settings.mimetype, name);
        send_text(session, stream, value, self.settings.blob_length);
        info!(name, %stream, bytes = value.len(), "argument value sent");
    }

    /// Sends text along a named pipe stream.
    pub fn send_pipe(&mut self, name: &str, value: &str) {
        let Some(session) = self.session.as_mut() else {
            debug!(name, "no active session; pipe data dropped");
            return;
        };
        let stream = session.create_pipe_stream(&self.settings.mimetype, name);
        send_text(session, stream, value, self.settings.blob_length);
        info!(name, %stream, bytes = value.len(), "pipe data sent");
    }

    /// Toggles the UI menu.
    ///
    /// Returns the new visibility, or `None` if no UI is attached.
    pub fn toggle_menu(&mut self) -> Option<bool> {
        let shown = self.ui.as_mut()?.toggle_menu();
        debug!(shown, "menu toggled");
        Some(shown)
    }

    /// Runs one parsed command.
    ///
    /// # Errors
    ///
    /// Propagates [`ConsoleError`] from key sequences.
    pub fn execute(&mut self, command: &ConsoleCommand) -> Result<(), ConsoleError> {
        match command {
            ConsoleCommand::SendKeys(items) => self.send_keys(items)?,
            ConsoleCommand::Cas => self.cas()?,
            ConsoleCommand::Argv { name, value } => self.send_argv(name, value),
            ConsoleCommand::Pipe { name, value } => self.send_pipe(name, value),
            ConsoleCommand::ToggleMenu => {
                self.toggle_menu();
            }
        }
        Ok(())
    }

    /// Consumes the console, returning the attached session.
    pub fn into_session(self) -> Option<S> {
        self.session
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::session::{MockRemoteSession, StreamIndex};
    use mockall::predicate::eq;
    use mockall::Sequence;
    use synthkeys_core::keysym::table::DELETE;
    use synthkeys_core::KeyEvent;

    fn console(session: MockRemoteSession) -> DebugConsole<MockRemoteSession> {
        DebugConsole::new(ConsoleSettings::default()).with_session(session)
    }

    fn expect_events(session: &mut MockRemoteSession, events: &[KeyEvent]) {
        let mut seq = Sequence::new();
        for &event in events {
            session
                .expect_send_key_event()
                .with(eq(event))
                .times(1)
                .in_sequence(&mut seq)
                .return_const(());
        }
    }

    struct FlagUi(bool);

    impl ConsoleUi for FlagUi {
        fn toggle_menu(&mut self) -> bool {
            self.0 = !self.0;
            self.0
        }
    }

    // ── Key sequences ─────────────────────────────────────────────────────────

    #[test]
    fn test_send_keys_delivers_events_in_order() {
        // Arrange
        let mut session = MockRemoteSession::new();
        expect_events(
            &mut session,
            &[
                KeyEvent::press(L_CTRL),
                KeyEvent::press(L_ALT),
                KeyEvent::press(DELETE),
                KeyEvent::release(DELETE),
                KeyEvent::release(L_ALT),
                KeyEvent::release(L_CTRL),
            ],
        );
        let mut console = console(session);

        // Act
        let result = console.send_keys(&[L_CTRL.into(), L_ALT.into(), DELETE.into()]);

        // Assert
        assert!(result.is_ok());
    }

    #[test]
    fn test_cas_presses_ctrl_alt_shift_and_releases_in_reverse() {
        // Arrange
        let mut session = MockRemoteSession::new();
        expect_events(
            &mut session,
            &[
                KeyEvent::press(L_CTRL),
                KeyEvent::press(L_ALT),
                KeyEvent::press(L_SHIFT),
                KeyEvent::release(L_SHIFT),
                KeyEvent::release(L_ALT),
                KeyEvent::release(L_CTRL),
            ],
        );
        let mut console = console(session);

        // Act / Assert
        console.cas().unwrap();
    }

    #[test]
    fn test_send_keys_without_session_is_a_no_op() {
        let mut console: DebugConsole<MockRemoteSession> =
            DebugConsole::new(ConsoleSettings::default());

        assert!(console.send_keys(&["ignored".into()]).is_ok());
        assert!(console.session().is_none());
    }

    // ── Streams ───────────────────────────────────────────────────────────────

    #[test]
    fn test_send_argv_opens_argument_stream_and_sends_value() {
        // Arrange
        let mut session = MockRemoteSession::new();
        let mut seq = Sequence::new();
        session
            .expect_create_argument_value_stream()
            .withf(|mimetype, name| mimetype == "text/plain" && name == "username")
            .times(1)
            .in_sequence(&mut seq)
            .return_const(StreamIndex(4));
        session
            .expect_send_blob()
            .withf(|stream, data| *stream == StreamIndex(4) && data == b"guest")
            .times(1)
            .in_sequence(&mut seq)
            .return_const(());
        session
            .expect_end_stream()
            .with(eq(StreamIndex(4)))
            .times(1)
            .in_sequence(&mut seq)
            .return_const(());
        let mut console = console(session);

        // Act
        console.send_argv("username", "guest");
    }

    #[test]
    fn test_send_pipe_uses_configured_mimetype_and_blob_length() {
        // Arrange
        let mut session = MockRemoteSession::new();
        session
            .expect_create_pipe_stream()
            .withf(|mimetype, name| mimetype == "application/octet-stream" && name == "clipboard")
            .times(1)
            .return_const(StreamIndex(0));
        session.expect_send_blob().times(3).return_const(());
        session.expect_end_stream().times(1).return_const(());
        let settings = ConsoleSettings {
            mimetype: "application/octet-stream".to_string(),
            blob_length: 2,
        };
        let mut console = DebugConsole::new(settings).with_session(session);

        // Act
        console.send_pipe("clipboard", "hello");
    }

    #[test]
    fn test_stream_helpers_without_session_do_nothing() {
        let mut console: DebugConsole<MockRemoteSession> =
            DebugConsole::new(ConsoleSettings::default());

        console.send_argv("username", "guest");
        console.send_pipe("clipboard", "hello");

        assert!(console.into_session().is_none());
    }

    // ── Session management ────────────────────────────────────────────────────

    #[test]
    fn test_attach_replaces_and_detach_removes_session() {
        let mut console: DebugConsole<MockRemoteSession> =
            DebugConsole::new(ConsoleSettings::default());

        assert!(console.attach(MockRemoteSession::new()).is_none());
        assert!(console.attach(MockRemoteSession::new()).is_some());
        assert!(console.detach().is_some());
        assert!(console.detach().is_none());
    }

    // ── Menu ──────────────────────────────────────────────────────────────────

    #[test]
    fn test_toggle_menu_flips_visibility() {
        let mut console: DebugConsole<MockRemoteSession> =
            DebugConsole::new(ConsoleSettings::default()).with_ui(Box::new(FlagUi(false)));

        assert_eq!(console.toggle_menu(), Some(true));
        assert_eq!(console.toggle_menu(), Some(false));
    }

    #[test]
    fn test_toggle_menu_without_ui_returns_none() {
        let mut console: DebugConsole<MockRemoteSession> =
            DebugConsole::new(ConsoleSettings::default());

        assert_eq!(console.toggle_menu(), None);
    }

    // ── Command dispatch ──────────────────────────────────────────────────────

    #[test]
    fn test_execute_dispatches_each_command() {
        // Arrange
        let mut session = MockRemoteSession::new();
        session.expect_send_key_event().times(6 + 2).return_const(());
        session
            .expect_create_argument_value_stream()
            .times(1)
            .return_const(StreamIndex(0));
        session.expect_create_pipe_stream().times(1).return_const(StreamIndex(1));
        session.expect_send_blob().times(2).return_const(());
        session.expect_end_stream().times(2).return_const(());
        let mut console = console(session).with_ui(Box::new(FlagUi(false)));

        // Act
        for command in [
            ConsoleCommand::Cas,
            ConsoleCommand::SendKeys(vec!["x".into()]),
            ConsoleCommand::Argv { name: "dpi".into(), value: "96".into() },
            ConsoleCommand::Pipe { name: "log".into(), value: "hi".into() },
            ConsoleCommand::ToggleMenu,
        ] {
            console.execute(&command).unwrap();
        }

        // Assert
        assert_eq!(console.toggle_menu(), Some(false));
    }

    #[test]
    fn test_settings_are_kept_as_injected() {
        let settings = ConsoleSettings {
            mimetype: "application/json".to_string(),
            blob_length: 16,
        };

        let console: DebugConsole<MockRemoteSession> = DebugConsole::new(settings.clone());

        assert_eq!(console.settings(), &settings);
    }

    #[test]
    fn test_default_settings_match_protocol_defaults() {
        let settings = ConsoleSettings::default();
        assert_eq!(settings.mimetype, "text/plain");
        assert_eq!(settings.blob_length, 6048);
    }
}
