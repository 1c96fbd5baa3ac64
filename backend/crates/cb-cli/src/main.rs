//! cb - Chartbuddies profile reconciliation tool
//!
//! Runs the post-sign-in profile check against the hosted profile store.
//! The access token comes from the identity provider's sign-in; this tool
//! never signs users in itself.
//!
//! # Examples
//!
//! ```bash
//! # Make sure a freshly signed-in user has a profile
//! cb ensure --user-id <uuid> --email nurse@example.com --access-token <jwt> --pretty
//!
//! # Look a profile up without creating it
//! CB_ACCESS_TOKEN=<jwt> cb resolve --user-id <uuid>
//! ```

mod cli;
mod commands;
mod error;
mod logger;


use crate::{
    cli::Cli,
    commands::Commands,
    error::{CliError, Result as CliResult},
};

use cb_auth::{ProfileReconciler, ResolutionOutcome};
use cb_config::Config;
use cb_core::{Identity, IdentityClaims};
use cb_db::SupabaseProfileStore;

use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use log::error;
use serde::Serialize;

#[tokio::main]
async fn main() -> ExitCode {
    // .env is optional; real environment variables win
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match run(cli).await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> CliResult<ExitCode> {
    let config = Config::load()?;
    config.validate()?;

    logger::initialize(
        config.logging.level,
        config.log_file_path()?,
        config.logging.colored,
    )?;
    config.log_summary();

    let reconciler = build_reconciler(&config, cli.access_token.as_deref())?;

    match cli.command {
        Commands::Ensure {
            user_id,
            email,
            full_name,
        } => {
            let identity = Identity::parse(user_id)?;
            let claims = IdentityClaims::new(email, full_name);

            match reconciler.ensure(&identity, &claims).await {
                Ok(profile) => {
                    print_json(&profile, cli.pretty)?;
                    Ok(ExitCode::SUCCESS)
                }
                Err(e) => {
                    error!("{} ({})", e, e.error_code());
                    eprintln!("{}", e.user_message());
                    Ok(ExitCode::FAILURE)
                }
            }
        }

        Commands::Resolve { user_id } => {
            let identity = Identity::parse(user_id)?;
            let outcome = reconciler.resolver().resolve(&identity).await;
            print_json(&outcome, cli.pretty)?;

            Ok(match outcome {
                ResolutionOutcome::Found { .. } => ExitCode::SUCCESS,
                ResolutionOutcome::Absent | ResolutionOutcome::TransientError { .. } => {
                    ExitCode::FAILURE
                }
            })
        }
    }
}

fn build_reconciler(config: &Config, access_token: Option<&str>) -> CliResult<ProfileReconciler> {
    let store = SupabaseProfileStore::new(&config.store, access_token)?;
    let privileged = Arc::new(store.privileged());

    Ok(ProfileReconciler::with_config(
        Arc::new(store),
        privileged,
        &config.reconciler,
    ))
}

fn print_json<T: Serialize>(value: &T, pretty: bool) -> CliResult<()> {
    let output = if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    };

    let json =
        output.map_err(|e| CliError::output(format!("Error serializing response: {}", e)))?;
    println!("{}", json);

    Ok(())
}
