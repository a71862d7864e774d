//! Maimemo open API
//!
//! Wire types and the typed client for the five endpoints the collector uses.

pub mod client;
pub mod types;

pub use client::{MaimemoClient, DEFAULT_BASE_URL};
pub use types::{
    BriefNotepad, Notepad, NotepadInput, NotepadStatus, NotepadType, ParsedItem, ParsedItemType,
    Vocabulary,
};
