use crate::{Background, Credentials};

use serde::{Deserialize, Serialize};

/// Fields collected by the signup form.
///
/// `background` is optional on the wire; an absent value means [`Background::Student`].
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SignupFields {
    pub name: Option<String>,
    pub email: String,
    pub password: String,
    pub background: Option<Background>,
}

impl SignupFields {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
            ..Default::default()
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_background(mut self, background: Background) -> Self {
        self.background = Some(background);
        self
    }

    pub fn background_or_default(&self) -> Background {
        self.background.unwrap_or_default()
    }

    pub fn credentials(&self) -> Credentials {
        Credentials::new(self.email.clone(), self.password.clone())
    }
}
