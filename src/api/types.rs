//! Maimemo open API wire types
//!
//! Field names follow the API's snake_case JSON. Only `id`, `title` and
//! `content` drive the collection flow; every other field decodes leniently so
//! an odd value on some unrelated notepad cannot fail a whole listing page.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Notepad publication status
///
/// Values the service adds later are kept verbatim in `Other` so an update
/// sends back exactly what was read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum NotepadStatus {
    Published,
    Unpublished,
    Deleted,
    Other(String),
}

impl NotepadStatus {
    pub fn as_str(&self) -> &str {
        match self {
            NotepadStatus::Published => "PUBLISHED",
            NotepadStatus::Unpublished => "UNPUBLISHED",
            NotepadStatus::Deleted => "DELETED",
            NotepadStatus::Other(raw) => raw,
        }
    }
}

impl From<String> for NotepadStatus {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "PUBLISHED" => NotepadStatus::Published,
            "UNPUBLISHED" => NotepadStatus::Unpublished,
            "DELETED" => NotepadStatus::Deleted,
            _ => NotepadStatus::Other(raw),
        }
    }
}

impl From<NotepadStatus> for String {
    fn from(status: NotepadStatus) -> Self {
        status.as_str().to_string()
    }
}

/// Notepad kind: the built-in favorites list or a user notepad
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NotepadType {
    Favorite,
    Notepad,
    #[serde(other)]
    Unknown,
}

/// Kind of a parsed content line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ParsedItemType {
    Chapter,
    Word,
    #[serde(other)]
    Unknown,
}

/// One parsed line of a notepad's content
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParsedItem {
    #[serde(rename = "type")]
    pub item_type: ParsedItemType,
    #[serde(default, deserialize_with = "null_as_default")]
    pub chapter: String,
    /// Only present for `WORD` items
    #[serde(default, deserialize_with = "lenient")]
    pub word: Option<String>,
}

/// Summary entry returned by the listing endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BriefNotepad {
    pub id: String,
    #[serde(rename = "type", default, deserialize_with = "lenient")]
    pub notepad_type: Option<NotepadType>,
    #[serde(default, deserialize_with = "lenient")]
    pub creator: Option<i64>,
    #[serde(default, deserialize_with = "lenient")]
    pub status: Option<NotepadStatus>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub brief: String,
    #[serde(default, deserialize_with = "lenient_vec")]
    pub tags: Vec<String>,
    #[serde(default, deserialize_with = "lenient_time")]
    pub created_time: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "lenient_time")]
    pub updated_time: Option<DateTime<Utc>>,
}

/// Full notepad detail
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notepad {
    pub id: String,
    #[serde(rename = "type", default, deserialize_with = "lenient")]
    pub notepad_type: Option<NotepadType>,
    #[serde(default, deserialize_with = "lenient")]
    pub creator: Option<i64>,
    /// `None` when the service omitted it; never invented on update
    #[serde(default, deserialize_with = "lenient")]
    pub status: Option<NotepadStatus>,
    /// Newline-separated entries; absent means empty
    #[serde(default, deserialize_with = "null_as_default")]
    pub content: String,
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub brief: String,
    #[serde(default, deserialize_with = "lenient_vec")]
    pub tags: Vec<String>,
    /// Parsed content lines
    #[serde(default, deserialize_with = "lenient_vec")]
    pub list: Vec<ParsedItem>,
    #[serde(default, deserialize_with = "lenient_time")]
    pub created_time: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "lenient_time")]
    pub updated_time: Option<DateTime<Utc>>,
}

// =============================================================================
// Lenient field decoders
// =============================================================================

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Any value that does not fit `T` becomes `None`
fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}

/// Keeps the elements that decode and drops the rest
fn lenient_vec<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let items = match Value::deserialize(deserializer)? {
        Value::Array(items) => items,
        _ => return Ok(Vec::new()),
    };
    Ok(items
        .into_iter()
        .filter_map(|item| serde_json::from_value(item).ok())
        .collect())
}

/// RFC 3339, or `YYYY-MM-DD HH:MM:SS` read as UTC; anything else is `None`
fn lenient_time<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = match Value::deserialize(deserializer)? {
        Value::String(raw) => raw,
        _ => return Ok(None),
    };
    if let Ok(time) = DateTime::parse_from_rfc3339(&raw) {
        return Ok(Some(time.with_timezone(&Utc)));
    }
    Ok(NaiveDateTime::parse_from_str(&raw, "%Y-%m-%d %H:%M:%S")
        .ok()
        .map(|naive| naive.and_utc()))
}

/// Editable fields sent on create and update
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NotepadInput {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<NotepadStatus>,
    pub content: String,
    pub title: String,
    pub brief: String,
    pub tags: Vec<String>,
}

impl NotepadInput {
    /// Copy the editable fields of an existing notepad, replacing its content
    pub fn from_notepad(notepad: &Notepad, content: String) -> Self {
        Self {
            status: notepad.status.clone(),
            content,
            title: notepad.title.clone(),
            brief: notepad.brief.clone(),
            tags: notepad.tags.clone(),
        }
    }
}

/// Request body for create and update
#[derive(Debug, Clone, Serialize)]
pub struct NotepadRequest<'a> {
    pub notepad: &'a NotepadInput,
}

/// Dictionary entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vocabulary {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub spelling: String,
}

impl Vocabulary {
    pub fn is_empty(&self) -> bool {
        self.id.is_empty() && self.spelling.is_empty()
    }
}

// =============================================================================
// Response envelopes
// =============================================================================

/// Outer `{ "data": ... }` wrapper shared by all endpoints
#[derive(Debug, Deserialize)]
pub(crate) struct Envelope<T> {
    pub data: Option<T>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct NotepadsData {
    #[serde(default)]
    pub notepads: Option<Vec<BriefNotepad>>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct NotepadData {
    #[serde(default)]
    pub notepad: Option<Notepad>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct VocabularyData {
    #[serde(default)]
    pub voc: Option<Vocabulary>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_notepad_missing_content_is_empty() {
        let notepad: Notepad = serde_json::from_value(json!({
            "id": "np-1",
            "status": "PUBLISHED",
            "title": "TestList",
            "brief": "",
            "tags": []
        }))
        .unwrap();
        assert_eq!(notepad.content, "");
        assert!(notepad.list.is_empty());
    }

    #[test]
    fn test_notepad_null_content_is_empty() {
        let notepad: Notepad = serde_json::from_value(json!({
            "id": "np-1",
            "title": "TestList",
            "content": null
        }))
        .unwrap();
        assert_eq!(notepad.content, "");
        assert!(notepad.status.is_none());
    }

    #[test]
    fn test_full_notepad_decodes() {
        let notepad: Notepad = serde_json::from_value(json!({
            "id": "np-2",
            "type": "NOTEPAD",
            "creator": 42,
            "status": "UNPUBLISHED",
            "content": "apple\nbanana",
            "title": "Fruits",
            "brief": "b",
            "tags": ["Pot"],
            "list": [
                {"type": "CHAPTER", "chapter": ""},
                {"type": "WORD", "chapter": "", "word": "apple"}
            ],
            "created_time": "2024-01-01T00:00:00Z",
            "updated_time": "2024-01-02T00:00:00.000Z"
        }))
        .unwrap();
        assert_eq!(notepad.notepad_type, Some(NotepadType::Notepad));
        assert_eq!(notepad.status, Some(NotepadStatus::Unpublished));
        assert_eq!(notepad.list.len(), 2);
        assert_eq!(notepad.list[1].word.as_deref(), Some("apple"));
        assert!(notepad.created_time.is_some());
    }

    #[test]
    fn test_input_serializes_status_uppercase() {
        let input = NotepadInput {
            status: Some(NotepadStatus::Published),
            content: "zebra".to_string(),
            title: "T".to_string(),
            brief: "B".to_string(),
            tags: vec!["Pot".to_string()],
        };
        let body = serde_json::to_value(NotepadRequest { notepad: &input }).unwrap();
        assert_eq!(body["notepad"]["status"], "PUBLISHED");
        assert_eq!(body["notepad"]["tags"][0], "Pot");
    }

    #[test]
    fn test_odd_brief_fields_do_not_fail_decoding() {
        let brief: BriefNotepad = serde_json::from_value(json!({
            "id": "a",
            "type": "SHARED",
            "creator": "someone",
            "status": "ARCHIVED",
            "title": "Other",
            "brief": null,
            "tags": null,
            "created_time": "2024-05-01 08:00:00",
            "updated_time": 1714550400
        }))
        .unwrap();
        assert_eq!(brief.title, "Other");
        assert_eq!(brief.notepad_type, Some(NotepadType::Unknown));
        assert!(brief.creator.is_none());
        assert_eq!(
            brief.status,
            Some(NotepadStatus::Other("ARCHIVED".to_string()))
        );
        assert!(brief.tags.is_empty());
        assert!(brief.created_time.is_some());
        assert!(brief.updated_time.is_none());
    }

    #[test]
    fn test_unknown_parsed_items_are_kept_or_dropped() {
        let notepad: Notepad = serde_json::from_value(json!({
            "id": "np-1",
            "title": "T",
            "list": [
                {"type": "NOTE", "chapter": "x"},
                {"chapter": "no type"},
                {"type": "WORD", "chapter": "", "word": "kiwi"}
            ]
        }))
        .unwrap();
        assert_eq!(notepad.list.len(), 2);
        assert_eq!(notepad.list[0].item_type, ParsedItemType::Unknown);
        assert_eq!(notepad.list[1].word.as_deref(), Some("kiwi"));
    }

    #[test]
    fn test_unknown_status_round_trips_verbatim() {
        let notepad: Notepad = serde_json::from_value(json!({
            "id": "np-1",
            "title": "T",
            "status": "ARCHIVED"
        }))
        .unwrap();
        let input = NotepadInput::from_notepad(&notepad, "kiwi".to_string());
        let body = serde_json::to_value(NotepadRequest { notepad: &input }).unwrap();
        assert_eq!(body["notepad"]["status"], "ARCHIVED");
    }

    #[test]
    fn test_missing_status_is_not_sent() {
        let notepad: Notepad = serde_json::from_value(json!({
            "id": "np-1",
            "title": "T"
        }))
        .unwrap();
        let input = NotepadInput::from_notepad(&notepad, "kiwi".to_string());
        let body = serde_json::to_value(NotepadRequest { notepad: &input }).unwrap();
        assert!(body["notepad"].get("status").is_none());
        assert_eq!(body["notepad"]["content"], "kiwi");
    }

    #[test]
    fn test_empty_vocabulary() {
        let voc: Vocabulary = serde_json::from_value(json!({})).unwrap();
        assert!(voc.is_empty());
        let voc: Vocabulary = serde_json::from_value(json!({"id": "v1", "spelling": "apple"})).unwrap();
        assert!(!voc.is_empty());
    }
}
