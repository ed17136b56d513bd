use std::process::ExitCode;

use crate::prelude::{eprintln, *};
use clap::Parser;
use colored::Colorize;

mod client;
mod commands;
mod config;
mod error;
mod prelude;

const USAGE: &str = "Usage: meleetools <command> [tournament-id]
Available commands: participants, pairings, standings
Note: tournament-id can be set via the TOURNAMENT_ID environment variable or .env file";

#[derive(Debug, clap::Parser)]
#[command(
    author,
    version,
    about,
    long_about = "Melee.gg tournament participants, pairings and standings formatted for Discord"
)]
pub struct App {
    #[command(subcommand)]
    pub command: Option<commands::Commands>,

    #[clap(flatten)]
    global: Global,
}

#[derive(Debug, Clone, clap::Args)]
pub struct Global {
    /// Melee.gg API client id
    #[clap(long, env = "CLIENT_ID", global = true, hide_env_values = true)]
    client_id: Option<String>,

    /// Melee.gg API client secret
    #[clap(long, env = "CLIENT_SECRET", global = true, hide_env_values = true)]
    client_secret: Option<String>,

    /// Default tournament id used when a command is not given one
    #[clap(long = "tournament", env = "TOURNAMENT_ID", global = true)]
    tournament_id: Option<String>,

    /// Melee.gg API base URL
    #[clap(long, env = "MELEE_BASE_URL", global = true)]
    base_url: Option<String>,

    /// Whether to display additional information.
    #[clap(long, env = "MELEE_VERBOSE", global = true, default_value = "false")]
    verbose: bool,
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "info" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();
}

async fn run(app: App) -> Result<()> {
    // Credentials are checked before anything else so no request goes out without them.
    let config = config::Config::resolve(
        app.global.client_id,
        app.global.client_secret,
        app.global.tournament_id,
        app.global.base_url,
    )?;

    let command = app.command.ok_or_else(|| {
        Error::MissingArgument("Command is required as the first argument".to_string())
    })?;

    commands::run(command, &config).await
}

/// Whether the usage text belongs under the error message.
fn shows_usage(err: &color_eyre::Report) -> bool {
    err.downcast_ref::<Error>().is_some_and(Error::is_usage)
}

/// Print the error, if any, and map the outcome to the process exit status.
fn report(result: Result<()>) -> ExitCode {
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{} {err}", "Error:".red().bold());
            if shows_usage(&err) {
                eprintln!("{USAGE}");
            }
            ExitCode::FAILURE
        }
    }
}

/// `--help` and `--version` exit 0, usage errors exit 1.
fn parse_exit_code(err: &clap::Error) -> ExitCode {
    if err.use_stderr() {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let _ = dotenvy::dotenv();

    let app = match App::try_parse() {
        Ok(app) => app,
        Err(err) => {
            let _ = err.print();
            return parse_exit_code(&err);
        }
    };

    init_logging(app.global.verbose);
    if let Err(err) = color_eyre::install() {
        log::warn!("Failed to install error report hooks: {err}");
    }

    report(run(app).await)
}
