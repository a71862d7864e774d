//! Maimemo open API client
//!
//! Thin typed wrapper over an [`HttpTransport`]: builds URLs and headers,
//! maps non-2xx statuses to [`RequestFailure::Status`] and unwraps the
//! `{ "data": ... }` envelope.

use reqwest::Url;
use serde::de::DeserializeOwned;

use super::types::{
    BriefNotepad, Envelope, Notepad, NotepadData, NotepadInput, NotepadRequest, NotepadsData,
    Vocabulary, VocabularyData,
};
use crate::error::RequestFailure;
use crate::http::{HttpRequest, HttpTransport};

/// Maimemo open API base URL
pub const DEFAULT_BASE_URL: &str = "https://open.maimemo.com/open/api/v1";

/// Maimemo API client
pub struct MaimemoClient<T> {
    transport: T,
    api_token: String,
    base_url: String,
}

impl<T: HttpTransport> MaimemoClient<T> {
    /// Create a client against the public API
    pub fn new(transport: T, api_token: impl Into<String>) -> Self {
        Self::with_base_url(transport, api_token, DEFAULT_BASE_URL)
    }

    /// Create a client against a custom base URL (mock servers, proxies)
    pub fn with_base_url(
        transport: T,
        api_token: impl Into<String>,
        base_url: impl Into<String>,
    ) -> Self {
        let base_url: String = base_url.into();
        Self {
            transport,
            api_token: api_token.into(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `GET /notepads?limit=&offset=`; a missing list decodes as empty
    pub async fn list_notepads(
        &self,
        limit: usize,
        offset: usize,
    ) -> Result<Vec<BriefNotepad>, RequestFailure> {
        let limit = limit.to_string();
        let offset = offset.to_string();
        let url = self.url(
            &["notepads"],
            &[("limit", limit.as_str()), ("offset", offset.as_str())],
        )?;
        let data: Option<NotepadsData> = self.send(HttpRequest::get(url)).await?;
        Ok(data.and_then(|d| d.notepads).unwrap_or_default())
    }

    /// `GET /notepads/{id}`
    pub async fn get_notepad(&self, id: &str) -> Result<Notepad, RequestFailure> {
        let url = self.url(&["notepads", id], &[])?;
        let data: Option<NotepadData> = self.send(HttpRequest::get(url)).await?;
        data.and_then(|d| d.notepad)
            .ok_or(RequestFailure::Missing("notepad"))
    }

    /// `POST /notepads`
    pub async fn create_notepad(&self, input: &NotepadInput) -> Result<Notepad, RequestFailure> {
        let url = self.url(&["notepads"], &[])?;
        self.post_notepad(url, input).await
    }

    /// `POST /notepads/{id}`, replacing all editable fields
    pub async fn update_notepad(
        &self,
        id: &str,
        input: &NotepadInput,
    ) -> Result<Notepad, RequestFailure> {
        let url = self.url(&["notepads", id], &[])?;
        self.post_notepad(url, input).await
    }

    /// `GET /vocabulary?spelling=`; `None` when the word is not indexed
    pub async fn query_vocabulary(
        &self,
        spelling: &str,
    ) -> Result<Option<Vocabulary>, RequestFailure> {
        let url = self.url(&["vocabulary"], &[("spelling", spelling)])?;
        let data: Option<VocabularyData> = self.send(HttpRequest::get(url)).await?;
        Ok(data
            .and_then(|d| d.voc)
            .filter(|voc| !voc.is_empty()))
    }

    async fn post_notepad(&self, url: String, input: &NotepadInput) -> Result<Notepad, RequestFailure> {
        let request = HttpRequest::post(url)
            .json(&NotepadRequest { notepad: input })
            .map_err(|e| RequestFailure::Decode(e.to_string()))?;
        let data: Option<NotepadData> = self.send(request).await?;
        data.and_then(|d| d.notepad)
            .ok_or(RequestFailure::Missing("notepad"))
    }

    /// Join `segments` onto the base URL, percent-encoding each one
    fn url(&self, segments: &[&str], query: &[(&str, &str)]) -> Result<String, RequestFailure> {
        let invalid =
            |reason: String| RequestFailure::Network(format!("invalid URL {}: {}", self.base_url, reason));
        let mut url = Url::parse(&self.base_url).map_err(|e| invalid(e.to_string()))?;
        url.path_segments_mut()
            .map_err(|_| invalid("cannot be a base".to_string()))?
            .pop_if_empty()
            .extend(segments);
        if !query.is_empty() {
            url.query_pairs_mut().extend_pairs(query);
        }
        Ok(url.into())
    }

    async fn send<D: DeserializeOwned>(&self, request: HttpRequest) -> Result<Option<D>, RequestFailure> {
        let request = request
            .header("Authorization", format!("Bearer {}", self.api_token))
            .header("Accept", "application/json")
            .header("Content-Type", "application/json");

        let response = self.transport.fetch(request).await?;
        if !response.ok() {
            return Err(RequestFailure::Status(response.status));
        }

        if response.data.is_null() {
            return Ok(None);
        }
        let envelope: Envelope<D> = serde_json::from_value::<Envelope<D>>(response.data)
            .map_err(|e| RequestFailure::Decode(e.to_string()))?;
        Ok(envelope.data)
    }
}

