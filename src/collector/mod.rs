//! Word collection into a Maimemo notepad
//!
//! One [`Collector::collect`] call runs the whole flow:
//! validate config, optionally ask the dictionary, find the notepad by title,
//! then either create it or append the word to it.

pub mod content;

use crate::api::{BriefNotepad, MaimemoClient, Notepad};
use crate::config::CollectorConfig;
use crate::error::{CollectError, Operation, RequestFailure, Result};
use crate::http::{HttpTransport, ReqwestTransport};
use crate::logger::Logger;

/// Page size used when scanning the notepad list
pub const PAGE_SIZE: usize = 10;

/// What a successful run did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CollectOutcome {
    /// No notepad had the configured title; one was created
    Created { notepad_id: String, title: String },
    /// The word was appended to an existing notepad
    Appended { notepad_id: String, title: String },
}

impl CollectOutcome {
    pub fn notepad_id(&self) -> &str {
        match self {
            CollectOutcome::Created { notepad_id, .. }
            | CollectOutcome::Appended { notepad_id, .. } => notepad_id,
        }
    }
}

/// Adds words to the configured notepad
pub struct Collector<T, L> {
    config: CollectorConfig,
    client: MaimemoClient<T>,
    logger: L,
}

impl<L: Logger> Collector<ReqwestTransport, L> {
    /// Collector over the production HTTP transport
    pub fn from_config(config: CollectorConfig, logger: L) -> Self {
        let transport = ReqwestTransport::with_timeout(config.timeout());
        Self::new(config, transport, logger)
    }
}

impl<T: HttpTransport, L: Logger> Collector<T, L> {
    /// Create a collector with an injected transport and logger
    pub fn new(config: CollectorConfig, transport: T, logger: L) -> Self {
        let client =
            MaimemoClient::with_base_url(transport, config.api_token(), config.base_url());
        Self {
            config,
            client,
            logger,
        }
    }

    pub fn config(&self) -> &CollectorConfig {
        &self.config
    }

    /// Add `word` to the configured notepad
    ///
    /// `_target_language` is accepted for the host's invocation contract and
    /// ignored. Exactly one create or update request is sent on success.
    pub async fn collect(&self, word: &str, _target_language: &str) -> Result<CollectOutcome> {
        self.config.validate()?;

        let word = content::normalize(word);
        if word.is_empty() {
            return Err(CollectError::EmptyWord);
        }
        let title = self.config.word_list_title();

        let check_enabled = self.config.enable_word_check().is_enabled();
        self.logger
            .log(&format!("Word check enabled: {}", check_enabled));

        if content::is_phrase(word) {
            self.logger
                .log("Input contains multiple words, skipping dictionary check");
        } else if check_enabled {
            self.logger
                .log(&format!("Checking whether \"{}\" is in the dictionary...", word));
            self.check_vocabulary(word).await?;
        } else {
            self.logger
                .log("Word check disabled, skipping dictionary check");
        }

        match self.find_notepad_by_title(title).await? {
            Some(brief) => {
                let detail = self.get_notepad_detail(&brief.id).await?;

                if content::contains_word(&detail, word) {
                    return Err(CollectError::AlreadyInList {
                        word: word.to_string(),
                        title: title.to_string(),
                    });
                }

                self.logger.log(&format!(
                    "\"{}\" is not in notepad \"{}\" yet",
                    word, title
                ));
                let updated = self.append_to_notepad(&detail, word).await?;
                self.logger.log(&format!(
                    "Added \"{}\" to notepad \"{}\"",
                    word, title
                ));
                Ok(CollectOutcome::Appended {
                    notepad_id: updated.id,
                    title: title.to_string(),
                })
            }
            None => {
                self.logger
                    .log("No existing notepad found, creating a new one...");
                let created = self.create_notepad(title, word).await?;
                self.logger.log(&format!(
                    "Created notepad \"{}\" with \"{}\"",
                    title, word
                ));
                Ok(CollectOutcome::Created {
                    notepad_id: created.id,
                    title: title.to_string(),
                })
            }
        }
    }

    /// Ask the dictionary whether `word` exists
    ///
    /// Mixed-case words are queried lower-cased and as typed, concurrently;
    /// either hit is enough. Fails with [`CollectError::NotInDictionary`]
    /// when neither spelling is known.
    pub async fn check_vocabulary(&self, word: &str) -> Result<()> {
        let spellings = content::spellings_to_check(word);

        let results = match spellings.as_slice() {
            [only] => vec![self.client.query_vocabulary(only).await],
            [lower, original] => {
                let (a, b) = tokio::join!(
                    self.client.query_vocabulary(lower),
                    self.client.query_vocabulary(original)
                );
                vec![a, b]
            }
            _ => Vec::new(),
        };

        let mut first_failure: Option<RequestFailure> = None;
        for (spelling, result) in spellings.iter().zip(results) {
            match result {
                Ok(Some(_)) => {
                    self.logger
                        .log(&format!("\"{}\" is in the dictionary", spelling));
                    return Ok(());
                }
                Ok(None) => {}
                Err(failure) => {
                    tracing::debug!("Dictionary lookup for {:?} failed: {}", spelling, failure);
                    first_failure.get_or_insert(failure);
                }
            }
        }

        match first_failure {
            Some(failure) => Err(CollectError::request(Operation::DictionaryCheck, failure)),
            None => Err(CollectError::NotInDictionary {
                word: word.to_string(),
            }),
        }
    }

    /// Scan the notepad list page by page for an exact title match
    pub async fn find_notepad_by_title(&self, title: &str) -> Result<Option<BriefNotepad>> {
        let mut offset = 0;
        let mut total_found = 0;

        loop {
            let page = self
                .client
                .list_notepads(PAGE_SIZE, offset)
                .await
                .map_err(|e| CollectError::request(Operation::ListLookup, e))?;
            let page_len = page.len();
            total_found += page_len;

            if let Some(notepad) = page.into_iter().find(|n| n.title == title) {
                self.logger.log(&format!(
                    "Found matching notepad \"{}\" (ID: {})",
                    notepad.title, notepad.id
                ));
                return Ok(Some(notepad));
            }

            if page_len < PAGE_SIZE {
                self.logger.log(&format!(
                    "Reached the last page after scanning {} notepads",
                    total_found
                ));
                return Ok(None);
            }

            offset += PAGE_SIZE;
        }
    }

    /// Fetch full notepad detail, including its content
    pub async fn get_notepad_detail(&self, id: &str) -> Result<Notepad> {
        self.client
            .get_notepad(id)
            .await
            .map_err(|e| map_notepad_failure(Operation::DetailFetch, "detail", e))
    }

    async fn create_notepad(&self, title: &str, word: &str) -> Result<Notepad> {
        let input = content::new_notepad(title, word);
        self.client
            .create_notepad(&input)
            .await
            .map_err(|e| map_notepad_failure(Operation::Create, "create", e))
    }

    async fn append_to_notepad(&self, detail: &Notepad, word: &str) -> Result<Notepad> {
        let input = content::appended_notepad(detail, word);
        self.client
            .update_notepad(&detail.id, &input)
            .await
            .map_err(|e| map_notepad_failure(Operation::Update, "update", e))
    }
}

fn map_notepad_failure(
    operation: Operation,
    expected: &'static str,
    failure: RequestFailure,
) -> CollectError {
    match failure {
        RequestFailure::Missing(_) => CollectError::MalformedResponse {
            operation,
            expected,
        },
        other => CollectError::request(operation, other),
    }
}
