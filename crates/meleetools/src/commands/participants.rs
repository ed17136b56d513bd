use meleetools_core::report::participants::{
    build_participants_report, render_participants, ParticipantsReport,
};

use crate::client::MeleeClient;
use crate::config::Config;
use crate::prelude::*;

use super::ReportOptions;

/// Public data function: fetch and normalize the participant list
pub async fn participants_data(config: &Config, tournament_id: &str) -> Result<ParticipantsReport> {
    let client = MeleeClient::new(config)?;

    log::info!("Fetching participants for tournament {tournament_id}...");
    let players = client.participants(tournament_id).await?;
    log::info!("Received {} participant(s)", players.len());

    Ok(build_participants_report(&players))
}

/// Handle the participants command
pub async fn handler(options: ReportOptions, config: &Config) -> Result<()> {
    let tournament_id = config.tournament_id(options.tournament_id, "participants")?;
    let report = participants_data(config, &tournament_id).await?;
    super::output(&report, options.json, render_participants)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::tests::test_config;

    #[tokio::test]
    async fn test_participants_data_renders_list() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/api/player/list/42")
            .with_status(200)
            .with_body(
                r#"{"Content":[
                    {"ID":1,"DiscordUsername":"Alice#0001",
                     "Decklists":[{"Guid":"abc","DecklistName":"Mono Red"}]},
                    {"ID":2,"Username":"bob","Decklists":[]}
                ]}"#,
            )
            .create_async()
            .await;

        let report = participants_data(&test_config(&server.url()), "42")
            .await
            .unwrap();

        assert_eq!(
            render_participants(&report),
            ":loudspeaker: **Tournament participants:** :loudspeaker:\n\n\
             - @Alice - [Mono Red](https://melee.gg/Decklist/View/abc)\n\
             - @bob - No decklist submitted\n"
        );
    }

    #[tokio::test]
    async fn test_participants_data_empty_is_not_an_error() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/api/player/list/42")
            .with_status(200)
            .with_body(r#"{"Content":[]}"#)
            .create_async()
            .await;

        let report = participants_data(&test_config(&server.url()), "42")
            .await
            .unwrap();

        assert_eq!(
            render_participants(&report),
            "No participants found for this tournament.\n"
        );
    }
}
