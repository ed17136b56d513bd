use meleetools_core::identity::ParticipantDecks;
use meleetools_core::report::pairings::{build_pairings_report, render_pairings, PairingsReport};

use crate::client::MeleeClient;
use crate::config::Config;
use crate::prelude::*;

use super::ReportOptions;

/// Public data function: fetch matches, participants and tournament
/// metadata concurrently and build the pairings report.
pub async fn pairings_data(config: &Config, tournament_id: &str) -> Result<PairingsReport> {
    let client = MeleeClient::new(config)?;

    log::info!("Fetching current pairings for tournament {tournament_id}...");
    let (matches, players, tournament) = futures::try_join!(
        client.current_matches(tournament_id),
        client.participants(tournament_id),
        client.tournament(tournament_id),
    )?;

    let decks = ParticipantDecks::from_players(&players);
    log::info!(
        "Received {} match(es), {} participant decklist(s), {} phase(s)",
        matches.len(),
        decks.len(),
        tournament.phases.len()
    );

    Ok(build_pairings_report(&matches, &decks, &tournament))
}

/// Handle the pairings command
pub async fn handler(options: ReportOptions, config: &Config) -> Result<()> {
    let tournament_id = config.tournament_id(options.tournament_id, "pairings")?;
    let report = pairings_data(config, &tournament_id).await?;
    super::output(&report, options.json, render_pairings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::tests::test_config;

    async fn mock_json(server: &mut mockito::ServerGuard, path: &str, body: &str) -> mockito::Mock {
        server
            .mock("GET", path)
            .with_status(200)
            .with_body(body)
            .create_async()
            .await
    }

    #[tokio::test]
    async fn test_pairings_data_end_to_end() {
        let mut server = mockito::Server::new_async().await;
        let _matches = mock_json(
            &mut server,
            "/api/match/list/current/77",
            r#"{"Content":[
                {"RoundNumber":2,"PhaseId":10,"ByeReason":1,
                 "Competitors":[
                    {"Team":{"Players":[{"ID":1,"DiscordUsername":"Alice#0001"}]},"Decklists":[]}
                 ]},
                {"RoundNumber":2,"PhaseId":10,"ByeReason":null,
                 "Competitors":[
                    {"Team":{"Players":[{"ID":2,"Username":"Bob"}]}},
                    {"Team":{"Players":[{"ID":3,"Username":"Carol"}]}}
                 ]}
            ]}"#,
        )
        .await;
        let _players = mock_json(
            &mut server,
            "/api/player/list/77",
            r#"{"Content":[
                {"ID":1,"DiscordUsername":"Alice#0001",
                 "Decklists":[{"Guid":"red","DecklistName":"Mono Red"}]},
                {"ID":2,"Username":"Bob","Decklists":[]},
                {"ID":3,"Username":"Carol","Decklists":[]}
            ]}"#,
        )
        .await;
        let _tournament = mock_json(
            &mut server,
            "/api/tournament/77",
            r#"{"Content":{"Phases":[{"ID":10,"Rounds":[{},{},{}]},{"ID":20,"Rounds":[]}]}}"#,
        )
        .await;

        let report = pairings_data(&test_config(&server.url()), "77")
            .await
            .unwrap();

        assert_eq!(
            render_pairings(&report),
            ":loudspeaker: **Round 2 of 3 Pairings** :loudspeaker:\n\n\
             :white_check_mark: @Alice ([Mono Red](https://melee.gg/Decklist/View/red)) - BYE\n\
             :one: @Bob (No deck info) vs @Carol (No deck info)\n"
        );
    }

    #[tokio::test]
    async fn test_pairings_data_fails_when_any_fetch_fails() {
        let mut server = mockito::Server::new_async().await;
        let _matches =
            mock_json(&mut server, "/api/match/list/current/77", r#"{"Content":[]}"#).await;
        let _players = mock_json(&mut server, "/api/player/list/77", r#"{"Content":[]}"#).await;
        let _tournament = server
            .mock("GET", "/api/tournament/77")
            .with_status(500)
            .with_body("boom")
            .create_async()
            .await;

        let err = pairings_data(&test_config(&server.url()), "77")
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), "Request failed: 500 - boom");
    }
}
