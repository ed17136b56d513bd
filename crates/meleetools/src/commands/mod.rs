pub mod pairings;
pub mod participants;
pub mod standings;

use crate::config::Config;
use crate::prelude::{print, println, *};

/// Report commands
#[derive(Debug, clap::Subcommand)]
pub enum Commands {
    /// List tournament participants and their decklists
    #[clap(name = "participants")]
    Participants(ReportOptions),

    /// Show the pairings of the current round
    #[clap(name = "pairings")]
    Pairings(ReportOptions),

    /// Show the current standings table
    #[clap(name = "standings")]
    Standings(ReportOptions),
}

/// Options shared by every report command
#[derive(Debug, clap::Args, Clone)]
pub struct ReportOptions {
    /// Melee.gg tournament id (falls back to --tournament / TOURNAMENT_ID)
    #[arg(value_name = "TOURNAMENT_ID")]
    pub tournament_id: Option<String>,

    /// Output the report as JSON instead of Discord text
    #[arg(long)]
    pub json: bool,
}

/// Run a report command
pub async fn run(cmd: Commands, config: &Config) -> Result<()> {
    match cmd {
        Commands::Participants(options) => participants::handler(options, config).await,
        Commands::Pairings(options) => pairings::handler(options, config).await,
        Commands::Standings(options) => standings::handler(options, config).await,
    }
}

/// Print a report either as pretty JSON or as rendered text
fn output<T: serde::Serialize>(
    report: &T,
    json: bool,
    render: impl FnOnce(&T) -> String,
) -> Result<()> {
    if json {
        let text = serde_json::to_string_pretty(report).context("Failed to serialize report")?;
        println!("{text}");
    } else {
        print!("{}", render(report));
    }
    Ok(())
}
