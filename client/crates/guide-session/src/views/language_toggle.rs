use guide_core::LanguageMode;

use serde::Serialize;

/// Floating button flipping the site between English and Urdu.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct LanguageToggle {
    mode: LanguageMode,
}

impl LanguageToggle {
    pub fn new(mode: LanguageMode) -> Self {
        Self { mode }
    }

    pub fn mode(&self) -> LanguageMode {
        self.mode
    }

    pub fn toggle(&mut self) -> LanguageMode {
        self.mode = self.mode.toggled();
        self.mode
    }

    pub fn label(&self) -> &'static str {
        self.mode.toggle_label()
    }

    pub fn direction(&self) -> &'static str {
        self.mode.direction()
    }

    /// Root class applied while Urdu is active.
    pub fn root_class(&self) -> Option<&'static str> {
        match self.mode {
            LanguageMode::Urdu => Some("urdu-mode"),
            LanguageMode::English => None,
        }
    }
}
