//! Synthetic key sequencing.
//!
//! - **`item`** – [`InputItem`], the tagged input accepted by the sequencer.
//! - **`event`** – [`KeyEvent`] and [`KeyPhase`], the sequencer's output.
//! - **`sequencer`** – [`send_keys`] / [`sequence`] and the [`EventSink`]
//!   boundary that receives events.

pub mod event;
pub mod item;
pub mod sequencer;

pub use event::{KeyEvent, KeyPhase};
pub use item::InputItem;
pub use sequencer::{send_keys, sequence, EventSink};
