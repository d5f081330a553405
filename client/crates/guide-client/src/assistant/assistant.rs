use crate::{Client, ClientError};

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use log::debug;
use serde::Serialize;

pub const MSG_EMPTY_QUERY: &str = "Query cannot be empty.";

/// What one `ask` produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", content = "text", rename_all = "snake_case")]
pub enum AskOutcome {
    Answer(String),
    /// Text to show in place of an answer
    Failed(String),
    /// Refused locally; nothing was sent
    Rejected(String),
    /// A newer ask was issued before this reply arrived
    Stale,
}

impl AskOutcome {
    /// Text to append to the transcript, if any.
    pub fn reply(&self) -> Option<&str> {
        match self {
            Self::Answer(text) | Self::Failed(text) => Some(text),
            Self::Rejected(_) | Self::Stale => None,
        }
    }
}

/// Sends questions to `/search`; only the most recent ask gets its reply.
///
/// Clones share the sequence counter.
#[derive(Clone)]
pub struct Assistant {
    client: Arc<Client>,
    sequence: Arc<AtomicU64>,
}

impl Assistant {
    pub fn new(client: Client) -> Self {
        Self {
            client: Arc::new(client),
            sequence: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Sequence number of the latest ask.
    pub fn latest(&self) -> u64 {
        self.sequence.load(Ordering::SeqCst)
    }

    pub async fn ask(&self, query: &str, selected_text: Option<&str>) -> AskOutcome {
        let query = query.trim();
        if query.is_empty() {
            return AskOutcome::Rejected(MSG_EMPTY_QUERY.to_string());
        }

        let ticket = self.sequence.fetch_add(1, Ordering::SeqCst) + 1;
        let result = self.client.search(query, selected_text.unwrap_or("")).await;

        if ticket != self.latest() {
            debug!("Dropping reply #{ticket}; latest is #{}", self.latest());
            return AskOutcome::Stale;
        }

        match result {
            Ok(response) => AskOutcome::Answer(response.answer),
            Err(err) => {
                debug!("Search failed: {err}");
                AskOutcome::Failed(failure_text(&err))
            }
        }
    }
}

/// Reply shown in the chat for a failed search.
pub(crate) fn failure_text(err: &ClientError) -> String {
    match err {
        ClientError::Status { .. } => String::from("Error: Unknown error"),
        _ if err.is_network() => err.user_message(),
        _ => format!("Error: {}", err.user_message()),
    }
}
