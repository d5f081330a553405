use guide_config::ConfigError;
use guide_client::ClientError;
use guide_core::Background;
use guide_session::{ContentKind, SessionError, StorageError};

use clap::Subcommand;
use thiserror::Error;

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Create an account and sign in
    Signup {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
        #[arg(long)]
        name: Option<String>,
        /// student, professional or hobbyist
        #[arg(long)]
        background: Option<Background>,
    },

    /// Sign in to an existing account
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },

    /// Sign out (accounts and the skip flag are kept)
    Logout,

    /// Show the current session
    Whoami,

    /// Dismiss the signup prompt for good
    Skip,

    /// Whether the signup prompt should be shown
    Prompt,

    /// Save a name and learning background without an account
    Profile {
        #[arg(long)]
        name: String,
        #[arg(long)]
        background: Background,
    },

    /// Render the welcome banner and the navbar auth button
    Banner,

    /// Render a block that is only shown to one background
    Content {
        #[arg(long)]
        audience: Background,
        /// refresher or deep-dive
        #[arg(long, default_value = "refresher")]
        kind: ContentKind,
        text: String,
    },

    /// Ask the assistant a question
    Ask {
        query: String,
        /// Passage the question is about
        #[arg(long)]
        selected: Option<String>,
        /// Show the conversation in Urdu mode
        #[arg(long)]
        urdu: bool,
    },

    /// List stored accounts
    Accounts,
}

#[derive(Error, Debug)]
pub(crate) enum CommandError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error("{}", .0.user_message())]
    Session(#[from] SessionError),

    #[error("{}", .0.user_message())]
    Client(#[from] ClientError),

    #[error("{0}")]
    Rejected(String),

    #[error("Error serializing response: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Could not set up logging: {0}")]
    Logging(String),
}
