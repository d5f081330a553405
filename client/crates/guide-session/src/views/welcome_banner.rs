use crate::Session;

/// Greeting shown above content for signed-in readers.
pub struct WelcomeBanner;

impl WelcomeBanner {
    pub fn render(session: &Session) -> Option<String> {
        let user = session.user.as_ref()?;
        let name = user.display_name()?;
        Some(format!("Welcome, {name}! Learning mode: {}", user.background))
    }
}
