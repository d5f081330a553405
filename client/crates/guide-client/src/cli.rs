use crate::commands::Commands;

use clap::Parser;

#[derive(Parser)]
#[command(name = "guide")]
#[command(about = "Reader session, personalization and assistant for the guide site")]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub(crate) command: Commands,

    /// Backend URL (defaults to backend.url from config.toml)
    #[arg(long, global = true)]
    pub(crate) backend: Option<String>,

    /// Sign up and sign in through the identity backend instead of locally
    #[arg(long, global = true)]
    pub(crate) remote: bool,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub(crate) pretty: bool,
}
