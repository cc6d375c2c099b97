//! The key sequencer: nested [`InputItem`]s in, ordered [`KeyEvent`]s out.
//!
//! # Ordering rules
//!
//! Items are processed in order within a single call:
//!
//! - [`InputItem::Hold`] is pressed immediately and pushed on a hold stack
//!   local to the call.
//! - [`InputItem::Sequence`] runs a nested call to completion before the next
//!   item.  Its holds are released inside the nested call.
//! - [`InputItem::Text`] types each codepoint as a press followed directly by
//!   its release.
//!
//! Once every item has been processed the hold stack is released last-in,
//! first-out.  That is what turns `[L_CTRL, L_ALT, DELETE]` into
//! Ctrl+Alt+Del:
//!
//! ```text
//! press L_CTRL, press L_ALT, press DELETE,
//! release DELETE, release L_ALT, release L_CTRL
//! ```
//!
//! A hold with nothing after it is therefore pressed and released back to
//! back by the final pass; there is no separate "tap" item.
//!
//! # Failure
//!
//! An unresolvable codepoint stops the call where it is.  Keys already on
//! the hold stack stay pressed on the remote side; the caller must release
//! them if it needs a clean keyboard state.

use tracing::{debug, trace};

use super::{InputItem, KeyEvent};
use crate::keysym::{resolve, Keysym, KeysymError};

/// Receives key events in the exact order they are emitted.
///
/// Delivery is assumed to be synchronous and infallible.
pub trait EventSink {
    fn notify(&mut self, event: KeyEvent);
}

impl EventSink for Vec<KeyEvent> {
    fn notify(&mut self, event: KeyEvent) {
        self.push(event);
    }
}

impl<S: EventSink + ?Sized> EventSink for &mut S {
    fn notify(&mut self, event: KeyEvent) {
        (**self).notify(event);
    }
}

/// Emits the events for `items` to `sink`.
///
/// # Errors
///
/// Returns [`KeysymError::InvalidCodepoint`] if a text item contains a
/// codepoint with no keysym.  Events emitted before the failure are not
/// retracted and held keys are not released.
pub fn send_keys<S: EventSink + ?Sized>(
    sink: &mut S,
    items: &[InputItem],
) -> Result<(), KeysymError> {
    let mut held: Vec<Keysym> = Vec::new();

    for item in items {
        match item {
            InputItem::Hold(keysym) => {
                emit(sink, KeyEvent::press(*keysym));
                held.push(*keysym);
            }
            InputItem::Sequence(nested) => send_keys(sink, nested)?,
            InputItem::Text(text) => type_text(sink, text)?,
        }
    }

    while let Some(keysym) = held.pop() {
        emit(sink, KeyEvent::release(keysym));
    }

    debug!(items = items.len(), "key sequence sent");
    Ok(())
}

/// Collects the events for `items` into a vector.
///
/// # Errors
///
/// See [`send_keys`].  On failure the events emitted so far are discarded
/// along with the vector.
///
/// # Examples
///
/// ```rust
/// use synthkeys_core::keysym::table::{DELETE, L_ALT, L_CTRL};
/// use synthkeys_core::{sequence, KeyEvent};
///
/// let events = sequence(&[L_CTRL.into(), L_ALT.into(), DELETE.into()]).unwrap();
/// assert_eq!(events.first(), Some(&KeyEvent::press(L_CTRL)));
/// assert_eq!(events.last(), Some(&KeyEvent::release(L_CTRL)));
/// ```
pub fn sequence(items: &[InputItem]) -> Result<Vec<KeyEvent>, KeysymError> {
    let mut events = Vec::new();
    send_keys(&mut events, items)?;
    Ok(events)
}

/// Types `text` one codepoint at a time.
fn type_text<S: EventSink + ?Sized>(sink: &mut S, text: &str) -> Result<(), KeysymError> {
    for c in text.chars() {
        let keysym = resolve(i64::from(u32::from(c)))?;
        emit(sink, KeyEvent::press(keysym));
        emit(sink, KeyEvent::release(keysym));
    }
    Ok(())
}

fn emit<S: EventSink + ?Sized>(sink: &mut S, event: KeyEvent) {
    trace!(%event, "synthetic key event");
    sink.notify(event);
}
