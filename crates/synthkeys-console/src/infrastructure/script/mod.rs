//! Classification of loosely-typed input into [`InputItem`]s, and the
//! line-based script format.
//!
//! # Classification rules
//!
//! | JSON value                  | Becomes                                   |
//! |-----------------------------|-------------------------------------------|
//! | integer in `0..=u32::MAX`   | `Hold(keysym)`                            |
//! | any other number            | error: not a keysym                       |
//! | array                       | `Sequence` of its classified elements     |
//! | `{"key": "NAME"}`           | `Hold` of the named key                   |
//! | string                      | `Text`                                    |
//! | anything else               | `Text` of its JSON rendering (`true`, …)  |
//!
//! Raw command-line arguments are parsed as JSON first.  An argument that is
//! not valid JSON is text, except `@NAME`, which holds the named key.
//!
//! # Script format
//!
//! ```text
//! # Ctrl+Alt+Del, then log in
//! keys [65507, 65513, 65535]
//! keys ["guest", {"key": "TAB"}, "secret", {"key": "ENTER"}]
//! argv username "guest"
//! pipe clipboard some text to paste
//! cas
//! menu
//! ```
//!
//! A `keys` line holds one JSON value.  A top-level array is the argument
//! list itself; any other value is a single argument.

use std::collections::BTreeMap;

use serde_json::Value;
use synthkeys_core::keysym::table;
use synthkeys_core::{InputItem, Keysym};
use thiserror::Error;

use crate::application::debug_console::ConsoleCommand;

/// Error type for script and argument parsing.
#[derive(Debug, Error)]
pub enum ScriptError {
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0} is not a valid keysym")]
    InvalidKeysym(String),

    #[error("unknown key name {0:?}")]
    UnknownKeyName(String),

    #[error("unknown command {0:?}")]
    UnknownCommand(String),

    #[error("{0} requires a stream name")]
    MissingName(&'static str),

    #[error("{0} takes no arguments")]
    UnexpectedArguments(&'static str),

    #[error("line {line}: {source}")]
    Line {
        line: usize,
        #[source]
        source: Box<ScriptError>,
    },
}

/// Key names available to scripts: configured aliases, then the built-in
/// table.
#[derive(Debug, Clone, Default)]
pub struct KeyNames {
    aliases: BTreeMap<String, Keysym>,
}

impl KeyNames {
    /// Creates a name resolver with extra aliases.  Alias names are matched
    /// without regard to ASCII case.
    pub fn new(aliases: BTreeMap<String, Keysym>) -> Self {
        let aliases = aliases
            .into_iter()
            .map(|(name, keysym)| (name.to_ascii_uppercase(), keysym))
            .collect();
        Self { aliases }
    }

    /// Resolves `name` to a keysym.
    pub fn resolve(&self, name: &str) -> Option<Keysym> {
        self.aliases
            .get(&name.to_ascii_uppercase())
            .copied()
            .or_else(|| table::lookup(name))
    }

    fn require(&self, name: &str) -> Result<Keysym, ScriptError> {
        self.resolve(name)
            .ok_or_else(|| ScriptError::UnknownKeyName(name.to_string()))
    }
}

/// Classifies a single JSON value.
///
/// # Errors
///
/// Returns [`ScriptError::InvalidKeysym`] for numbers that are not a `u32`
/// and [`ScriptError::UnknownKeyName`] for unresolvable `{"key": …}` objects.
pub fn classify(value: &Value, names: &KeyNames) -> Result<InputItem, ScriptError> {
    match value {
        Value::Number(number) => number
            .as_u64()
            .and_then(|n| u32::try_from(n).ok())
            .map(|n| InputItem::Hold(Keysym(n)))
            .ok_or_else(|| ScriptError::InvalidKeysym(number.to_string())),
        Value::Array(values) => values
            .iter()
            .map(|v| classify(v, names))
            .collect::<Result<Vec<_>, _>>()
            .map(InputItem::Sequence),
        Value::String(text) => Ok(InputItem::Text(text.clone())),
        Value::Object(map) => match (map.len(), map.get("key")) {
            (1, Some(Value::String(name))) => names.require(name).map(InputItem::Hold),
            _ => Ok(InputItem::Text(value.to_string())),
        },
        Value::Bool(_) | Value::Null => Ok(InputItem::Text(value.to_string())),
    }
}

/// Parses JSON text into an argument list.
///
/// A top-level array is spread into the list; any other value becomes the
/// list's only item.
///
/// # Errors
///
/// Returns [`ScriptError::Json`] for malformed JSON, otherwise as [`classify`].
pub fn parse_items(json: &str, names: &KeyNames) -> Result<Vec<InputItem>, ScriptError> {
    match serde_json::from_str::<Value>(json)? {
        Value::Array(values) => values.iter().map(|v| classify(v, names)).collect(),
        other => Ok(vec![classify(&other, names)?]),
    }
}

/// Classifies one raw command-line argument.
///
/// # Errors
///
/// Returns [`ScriptError::UnknownKeyName`] for an unresolvable `@NAME`,
/// otherwise as [`classify`].
pub fn classify_arg(arg: &str, names: &KeyNames) -> Result<InputItem, ScriptError> {
    if let Some(name) = arg.strip_prefix('@').filter(|name| !name.is_empty()) {
        return names.require(name).map(InputItem::Hold);
    }
    match serde_json::from_str::<Value>(arg) {
        Ok(value) => classify(&value, names),
        Err(_) => Ok(InputItem::Text(arg.to_string())),
    }
}

/// Parses one script line.
///
/// Returns `Ok(None)` for blank lines and `#` comments.
///
/// # Errors
///
/// Returns a [`ScriptError`] describing the first problem on the line.
pub fn parse_line(line: &str, names: &KeyNames) -> Result<Option<ConsoleCommand>, ScriptError> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }
    let (command, rest) = split_word(line);

    let parsed = match command {
        "keys" if rest.is_empty() => ConsoleCommand::SendKeys(Vec::new()),
        "keys" => ConsoleCommand::SendKeys(parse_items(rest, names)?),
        "cas" => no_arguments("cas", rest, ConsoleCommand::Cas)?,
        "menu" => no_arguments("menu", rest, ConsoleCommand::ToggleMenu)?,
        "argv" => {
            let (name, value) = stream_arguments("argv", rest)?;
            ConsoleCommand::Argv { name, value }
        }
        "pipe" => {
            let (name, value) = stream_arguments("pipe", rest)?;
            ConsoleCommand::Pipe { name, value }
        }
        other => return Err(ScriptError::UnknownCommand(other.to_string())),
    };
    Ok(Some(parsed))
}

/// Parses a whole script.
///
/// # Errors
///
/// Returns [`ScriptError::Line`] wrapping the first failing line's error.
pub fn parse_script(text: &str, names: &KeyNames) -> Result<Vec<ConsoleCommand>, ScriptError> {
    let mut commands = Vec::new();
    for (index, line) in text.lines().enumerate() {
        let parsed = parse_line(line, names).map_err(|source| ScriptError::Line {
            line: index + 1,
            source: Box::new(source),
        })?;
        commands.extend(parsed);
    }
    Ok(commands)
}

fn split_word(text: &str) -> (&str, &str) {
    match text.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim_start()),
        None => (text, ""),
    }
}

fn no_arguments(
    command: &'static str,
    rest: &str,
    parsed: ConsoleCommand,
) -> Result<ConsoleCommand, ScriptError> {
    if rest.is_empty() {
        Ok(parsed)
    } else {
        Err(ScriptError::UnexpectedArguments(command))
    }
}

/// Splits `NAME VALUE`.  A value starting with `"` is a JSON string literal.
fn stream_arguments(command: &'static str, rest: &str) -> Result<(String, String), ScriptError> {
    let (name, value) = split_word(rest);
    if name.is_empty() {
        return Err(ScriptError::MissingName(command));
    }
    let value = if value.starts_with('"') {
        serde_json::from_str::<String>(value)?
    } else {
        value.to_string()
    };
    Ok((name.to_string(), value))
}

// ── Tests ─────────────────────────────────────────────────────────────────────
