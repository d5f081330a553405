use crate::{Session, SessionError};

use std::fmt;
use std::str::FromStr;

use guide_core::Background;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ContentKind {
    #[default]
    Refresher,
    DeepDive,
}

impl ContentKind {
    pub fn title(&self) -> &'static str {
        match self {
            Self::Refresher => "Refresher",
            Self::DeepDive => "Deep Dive",
        }
    }
}

impl fmt::Display for ContentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

impl FromStr for ContentKind {
    type Err = SessionError;

    #[track_caller]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "refresher" => Ok(Self::Refresher),
            "deep-dive" | "deep_dive" | "deepdive" => Ok(Self::DeepDive),
            _ => Err(SessionError::invalid_content_kind(s)),
        }
    }
}

/// Aside that only renders for readers of one background.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConditionalContent {
    pub audience: Background,
    pub kind: ContentKind,
}

impl ConditionalContent {
    pub fn new(audience: Background, kind: ContentKind) -> Self {
        Self { audience, kind }
    }

    pub fn is_visible(&self, session: &Session) -> bool {
        session.background() == Some(self.audience)
    }

    /// `children` wrapped in the aside heading, or `None` for other audiences and guests.
    pub fn render(&self, session: &Session, children: &str) -> Option<String> {
        if !self.is_visible(session) {
            return None;
        }
        Some(format!("{} for {}s: {children}", self.kind, self.audience))
    }
}
