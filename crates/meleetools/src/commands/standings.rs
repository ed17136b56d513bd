use meleetools_core::report::standings::{
    build_standings_report, render_standings, StandingsReport,
};

use crate::client::MeleeClient;
use crate::config::Config;
use crate::prelude::*;

use super::ReportOptions;

/// Public data function: fetch standings and tournament metadata
/// concurrently and build the standings report.
pub async fn standings_data(config: &Config, tournament_id: &str) -> Result<StandingsReport> {
    let client = MeleeClient::new(config)?;

    log::info!("Fetching current standings for tournament {tournament_id}...");
    let (standings, tournament) = futures::try_join!(
        client.current_standings(tournament_id),
        client.tournament(tournament_id),
    )?;
    log::info!("Received {} standing(s)", standings.len());

    Ok(build_standings_report(&standings, &tournament))
}

/// Handle the standings command
pub async fn handler(options: ReportOptions, config: &Config) -> Result<()> {
    let tournament_id = config.tournament_id(options.tournament_id, "standings")?;
    let report = standings_data(config, &tournament_id).await?;
    super::output(&report, options.json, render_standings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::tests::test_config;

    #[tokio::test]
    async fn test_standings_data_empty_content() {
        let mut server = mockito::Server::new_async().await;
        let _standings = server
            .mock("GET", "/api/standing/list/current/9")
            .with_status(200)
            .with_body(r#"{"Content":[]}"#)
            .create_async()
            .await;
        let _tournament = server
            .mock("GET", "/api/tournament/9")
            .with_status(200)
            .with_body(r#"{"Content":{"NumberOfRounds":4}}"#)
            .create_async()
            .await;

        let report = standings_data(&test_config(&server.url()), "9")
            .await
            .unwrap();

        assert_eq!(
            render_standings(&report),
            "No current standings found for this tournament.\n"
        );
    }

    #[tokio::test]
    async fn test_standings_data_heading_uses_tournament_rounds() {
        let mut server = mockito::Server::new_async().await;
        let _standings = server
            .mock("GET", "/api/standing/list/current/9")
            .with_status(200)
            .with_body(
                r#"{"Content":[
                    {"Rank":1,"RoundNumber":2,"MatchWins":2,"Team":{"Players":[{"Username":"amy"}]}}
                ]}"#,
            )
            .create_async()
            .await;
        let _tournament = server
            .mock("GET", "/api/tournament/9")
            .with_status(200)
            .with_body(r#"{"Content":{"NumberOfRounds":4}}"#)
            .create_async()
            .await;

        let report = standings_data(&test_config(&server.url()), "9")
            .await
            .unwrap();
        let output = render_standings(&report);

        assert!(output.starts_with(
            ":loudspeaker: **Standings After Round 2 of 4** :loudspeaker:\n\n```\n"
        ));
        assert!(output.contains("@amy"));
        assert!(output.ends_with("```\n"));
    }
}
