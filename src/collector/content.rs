//! Pure helpers for notepad content
//!
//! Content is a newline-joined list of lower-cased entries. These helpers
//! never rewrite existing lines.

use crate::api::{Notepad, NotepadInput, NotepadStatus, ParsedItemType};

/// Tag attached to notepads this tool creates
pub const PROVENANCE_TAG: &str = "Pot";

/// Trim the raw input word
pub fn normalize(word: &str) -> &str {
    word.trim()
}

/// The dictionary only indexes single words
pub fn is_phrase(word: &str) -> bool {
    word.contains(' ')
}

/// Spellings to query for `word`
///
/// The dictionary lookup is case-sensitive and most entries are lower-case,
/// so a mixed-case word is looked up both lower-cased and as typed.
pub fn spellings_to_check(word: &str) -> Vec<String> {
    let lower = word.to_lowercase();
    if lower == word {
        vec![lower]
    } else {
        vec![lower, word.to_string()]
    }
}

/// True if `word` already appears in `notepad`
///
/// Compares trimmed, lower-cased content lines, and also the parsed `WORD`
/// items the service returns alongside the content.
pub fn contains_word(notepad: &Notepad, word: &str) -> bool {
    let needle = word.trim().to_lowercase();
    if content_contains(&notepad.content, &needle) {
        return true;
    }
    notepad.list.iter().any(|item| {
        item.item_type == ParsedItemType::Word
            && item
                .word
                .as_deref()
                .map_or(false, |w| w.trim().to_lowercase() == needle)
    })
}

fn content_contains(content: &str, needle: &str) -> bool {
    content
        .split('\n')
        .any(|line| line.trim().to_lowercase() == needle)
}

/// Append one lower-cased line to `content`
pub fn append_word(content: &str, word: &str) -> String {
    let entry = word.to_lowercase();
    if content.is_empty() {
        entry
    } else {
        format!("{}\n{}", content, entry)
    }
}

/// Brief written on notepads this tool creates
pub fn default_brief(title: &str) -> String {
    format!("Created by the Pot collection plugin: {}", title)
}

/// Input for a brand-new notepad holding just `word`
pub fn new_notepad(title: &str, word: &str) -> NotepadInput {
    NotepadInput {
        status: Some(NotepadStatus::Published),
        content: word.to_lowercase(),
        title: title.to_string(),
        brief: default_brief(title),
        tags: vec![PROVENANCE_TAG.to_string()],
    }
}

/// Input that appends `word` to `notepad`, keeping its other fields
pub fn appended_notepad(notepad: &Notepad, word: &str) -> NotepadInput {
    NotepadInput::from_notepad(notepad, append_word(&notepad.content, word))
}
