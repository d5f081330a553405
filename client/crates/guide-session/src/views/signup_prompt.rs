use crate::Session;

/// Decides whether the "tell us about yourself" modal opens.
pub struct SignupPrompt;

impl SignupPrompt {
    pub fn visible(session: &Session) -> bool {
        session.should_show_prompt()
    }
}
