//! guide - reader session and assistant CLI
//!
//! Drives the same session store, auth form and assistant the site widgets
//! use, against a file-backed store under the config directory.
//!
//! # Examples
//!
//! ```bash
//! # Create an account
//! guide signup --email a@b.com --password longenough1 --background hobbyist
//!
//! # Show who is signed in
//! guide whoami --pretty
//!
//! # Ask the assistant about a passage
//! guide ask "What is a ROS node?" --selected "Nodes communicate over topics."
//! ```

mod cli;
mod commands;
mod logging;

use crate::{
    cli::Cli,
    commands::{CommandError, Commands},
};

use guide_client::{Assistant, Client, Conversation, MSG_EMPTY_QUERY, RemoteAuthBackend};
use guide_config::Config;
use guide_core::{FieldValidator, SignupFields};
use guide_session::{
    AuthBackend, AuthButton, AuthForm, ConditionalContent, FileStore, FormMode, FormState,
    LanguageToggle, LocalAuthBackend, SessionContext, SessionStore, SignupPrompt, WelcomeBanner,
};

use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use serde_json::{Value, json};
use tracing::{info, warn};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = run(cli.command, cli.backend, cli.remote).await;

    match result {
        Ok(value) => {
            let output = if cli.pretty {
                serde_json::to_string_pretty(&value)
            } else {
                serde_json::to_string(&value)
            };

            match output {
                Ok(json) => {
                    println!("{}", json);
                    ExitCode::SUCCESS
                }
                Err(e) => {
                    eprintln!("Error serializing response: {}", e);
                    ExitCode::FAILURE
                }
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(
    command: Commands,
    backend: Option<String>,
    remote: bool,
) -> Result<Value, CommandError> {
    let config = Config::load()?;
    config.validate()?;

    logging::setup_logging(&config.log_dir()?, &config.logging.level)
        .map_err(|e| CommandError::Logging(e.to_string()))?;
    config.log_summary();

    let storage = Arc::new(FileStore::open(config.storage_path()?)?);
    if let Some(backup) = storage.recover()? {
        warn!("Storage was unreadable; moved aside to {}", backup.display());
    }

    let validator = FieldValidator::new(config.validation.min_password_length);
    let context = SessionContext::new(SessionStore::with_validator(storage, validator));

    let backend_url = backend.unwrap_or_else(|| config.backend.url.clone());
    let client = Client::with_timeout(&backend_url, config.backend.timeout())?;

    match command {
        Commands::Signup {
            email,
            password,
            name,
            background,
        } => {
            let mut fields = SignupFields::new(email, password);
            fields.name = name;
            fields.background = background;
            submit(&context, client, remote, validator, FormMode::Signup, fields).await
        }

        Commands::Login { email, password } => {
            let fields = SignupFields::new(email, password);
            submit(&context, client, remote, validator, FormMode::SignIn, fields).await
        }

        Commands::Logout => {
            context.logout()?;
            Ok(serde_json::to_value(context.session())?)
        }

        Commands::Whoami => Ok(serde_json::to_value(context.session())?),

        Commands::Skip => {
            context.mark_skipped()?;
            Ok(serde_json::to_value(context.session())?)
        }

        Commands::Prompt => Ok(json!({ "visible": SignupPrompt::visible(&context.session()) })),

        Commands::Profile { name, background } => {
            let user = context.save_profile(&name, background)?;
            Ok(serde_json::to_value(user)?)
        }

        Commands::Banner => {
            let session = context.session();
            Ok(json!({
                "banner": WelcomeBanner::render(&session),
                "button": AuthButton::render(&session),
            }))
        }

        Commands::Content {
            audience,
            kind,
            text,
        } => {
            let block = ConditionalContent::new(audience, kind);
            Ok(json!({ "rendered": block.render(&context.session(), &text) }))
        }

        Commands::Ask {
            query,
            selected,
            urdu,
        } => {
            let assistant = Assistant::new(client);
            let mut conversation = Conversation::new();
            conversation.open(selected.as_deref());

            let mut toggle = LanguageToggle::default();
            if urdu {
                conversation.toggle_language();
                toggle.toggle();
            }

            if !conversation.push_query(&query) {
                return Err(CommandError::Rejected(MSG_EMPTY_QUERY.to_string()));
            }
            let outcome = assistant.ask(&query, conversation.context()).await;
            conversation.apply(&outcome);

            Ok(json!({
                "outcome": outcome,
                "conversation": conversation,
                "direction": toggle.direction(),
                "toggle_label": toggle.label(),
            }))
        }

        Commands::Accounts => Ok(serde_json::to_value(context.store().accounts())?),
    }
}

async fn submit(
    context: &SessionContext,
    client: Client,
    remote: bool,
    validator: FieldValidator,
    mode: FormMode,
    fields: SignupFields,
) -> Result<Value, CommandError> {
    if remote {
        let backend = RemoteAuthBackend::new(client, context.clone());
        run_form(backend, validator, mode, fields).await
    } else {
        let backend = LocalAuthBackend::new(context.clone());
        run_form(backend, validator, mode, fields).await
    }
}

async fn run_form<B: AuthBackend>(
    backend: B,
    validator: FieldValidator,
    mode: FormMode,
    fields: SignupFields,
) -> Result<Value, CommandError> {
    let mut form = AuthForm::builder(backend)
        .mode(mode)
        .validator(validator)
        .on_success(|success| info!("Signed in as {}", success.user.id))
        .build();

    let state = form.submit(fields).await.clone();
    match state {
        FormState::Success(message) => Ok(json!({
            "message": message,
            "user": form.last_success().map(|s| &s.user),
            "redirect_url": form.last_success().and_then(|s| s.redirect_url.as_deref()),
        })),
        other => Err(CommandError::Rejected(
            other.message().unwrap_or("Submission failed.").to_string(),
        )),
    }
}
