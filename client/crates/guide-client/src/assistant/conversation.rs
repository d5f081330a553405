//! Chat transcript for the assistant window.

use crate::AskOutcome;

use guide_core::LanguageMode;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Sender {
    User,
    Bot,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChatMessage {
    pub sender: Sender,
    pub text: String,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct Conversation {
    messages: Vec<ChatMessage>,
    context: Option<String>,
    language: LanguageMode,
    open: bool,
    pending: bool,
}

impl Conversation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open the window with an empty transcript. A non-blank `selected_text`
    /// replaces the passage under discussion; otherwise the last one is kept.
    pub fn open(&mut self, selected_text: Option<&str>) {
        if let Some(text) = selected_text.map(str::trim).filter(|t| !t.is_empty()) {
            self.context = Some(text.to_string());
        }
        self.messages.clear();
        self.pending = false;
        self.open = true;
    }

    /// Close the window and drop the selected passage.
    pub fn close(&mut self) {
        self.open = false;
        self.pending = false;
        self.context = None;
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn context(&self) -> Option<&str> {
        self.context.as_deref()
    }

    pub fn language(&self) -> LanguageMode {
        self.language
    }

    pub fn toggle_language(&mut self) -> LanguageMode {
        self.language = self.language.toggled();
        self.language
    }

    /// Record the reader's question. Blank input is ignored and returns false.
    pub fn push_query(&mut self, query: &str) -> bool {
        let query = query.trim();
        if query.is_empty() {
            return false;
        }
        self.messages.push(ChatMessage {
            sender: Sender::User,
            text: query.to_string(),
        });
        self.pending = true;
        true
    }

    /// Append the bot's reply. Stale outcomes leave the transcript untouched.
    pub fn apply(&mut self, outcome: &AskOutcome) {
        if matches!(outcome, AskOutcome::Stale) {
            return;
        }
        self.pending = false;
        if let Some(text) = outcome.reply() {
            self.messages.push(ChatMessage {
                sender: Sender::Bot,
                text: text.to_string(),
            });
        }
    }
}
