use serde::{Deserialize, Serialize};

/// Reading language of the site chrome.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum LanguageMode {
    #[default]
    English,
    Urdu,
}

impl LanguageMode {
    pub fn toggled(self) -> Self {
        match self {
            Self::English => Self::Urdu,
            Self::Urdu => Self::English,
        }
    }

    /// Text direction attribute for the document root.
    pub fn direction(&self) -> &'static str {
        match self {
            Self::English => "ltr",
            Self::Urdu => "rtl",
        }
    }

    /// Short code shown in the chat header.
    pub fn code(&self) -> &'static str {
        match self {
            Self::English => "EN",
            Self::Urdu => "UR",
        }
    }

    /// Label of the toggle button: always names the language you would switch to.
    pub fn toggle_label(&self) -> &'static str {
        match self {
            Self::English => "اردو",
            Self::Urdu => "EN",
        }
    }
}
