//! Input accepted by the sequencer.

use crate::keysym::Keysym;

/// One argument of a key sequence.
///
/// Callers build these directly or through the `From` conversions:
///
/// ```rust
/// use synthkeys_core::keysym::table::{L_CTRL, L_SHIFT};
/// use synthkeys_core::InputItem;
///
/// // Ctrl held around Shift+T, then 'f'.
/// let items: Vec<InputItem> = vec![
///     L_CTRL.into(),
///     vec![L_SHIFT.into(), "T".into()].into(),
///     "f".into(),
/// ];
/// assert_eq!(items.len(), 3);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputItem {
    /// Pressed when reached and released at the end of the enclosing call,
    /// after every item that follows it.
    Hold(Keysym),
    /// Expanded by a nested call whose holds bracket only its own items.
    Sequence(Vec<InputItem>),
    /// Typed one Unicode codepoint at a time, each a press then a release.
    Text(String),
}

impl From<Keysym> for InputItem {
    fn from(keysym: Keysym) -> Self {
        InputItem::Hold(keysym)
    }
}

impl From<Vec<InputItem>> for InputItem {
    fn from(items: Vec<InputItem>) -> Self {
        InputItem::Sequence(items)
    }
}

impl From<String> for InputItem {
    fn from(text: String) -> Self {
        InputItem::Text(text)
    }
}

impl From<&str> for InputItem {
    fn from(text: &str) -> Self {
        InputItem::Text(text.to_owned())
    }
}

impl From<char> for InputItem {
    fn from(c: char) -> Self {
        InputItem::Text(c.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keysym_converts_to_hold() {
        assert_eq!(InputItem::from(Keysym(0xFFE3)), InputItem::Hold(Keysym(0xFFE3)));
    }

    #[test]
    fn test_text_conversions() {
        assert_eq!(InputItem::from("Hi"), InputItem::Text("Hi".into()));
        assert_eq!(InputItem::from(String::from("Hi")), InputItem::Text("Hi".into()));
        assert_eq!(InputItem::from('é'), InputItem::Text("é".into()));
    }

    #[test]
    fn test_vec_converts_to_nested_sequence() {
        let nested = InputItem::from(vec![InputItem::from("a")]);
        assert_eq!(nested, InputItem::Sequence(vec![InputItem::Text("a".into())]));
    }
}
