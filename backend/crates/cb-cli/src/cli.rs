use crate::commands::Commands;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "cb")]
#[command(about = "Chartbuddies profile reconciliation tool")]
#[command(version)]
#[command(propagate_version = true)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub(crate) command: Commands,

    /// Session access token issued by the identity provider at sign-in
    #[arg(long, global = true, env = "CB_ACCESS_TOKEN", hide_env_values = true)]
    pub(crate) access_token: Option<String>,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub(crate) pretty: bool,
}
