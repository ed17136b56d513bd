use serde::Serialize;

use crate::identity::{display_handle, participant_deck, DeckInfo};
use crate::report::headline;
use crate::types::Player;

pub const NO_PARTICIPANTS: &str = "No participants found for this tournament.";

#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct ParticipantEntry {
    pub handle: String,
    pub deck: Option<DeckInfo>,
}

#[derive(Debug, Serialize, Clone, PartialEq, Default)]
pub struct ParticipantsReport {
    pub participants: Vec<ParticipantEntry>,
}

/// Normalize every player, keeping API order.
pub fn build_participants_report(players: &[Player]) -> ParticipantsReport {
    ParticipantsReport {
        participants: players
            .iter()
            .map(|player| ParticipantEntry {
                handle: display_handle(Some(player)),
                deck: participant_deck(player),
            })
            .collect(),
    }
}

pub fn render_participants(report: &ParticipantsReport) -> String {
    if report.participants.is_empty() {
        return format!("{NO_PARTICIPANTS}\n");
    }

    let mut result = headline("Tournament participants:");
    for entry in &report.participants {
        match &entry.deck {
            Some(deck) => result.push_str(&format!("- @{} - {deck}\n", entry.handle)),
            None => result.push_str(&format!("- @{} - No decklist submitted\n", entry.handle)),
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn players(value: serde_json::Value) -> Vec<Player> {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_render_participants_with_and_without_decks() {
        let players = players(json!([
            {
                "ID": 1,
                "DiscordUsername": "Alice#0001",
                "Decklists": [{
                    "Guid": "abc",
                    "AdminGivenName": "Mono Red",
                    "DecklistName": "Burn"
                }]
            },
            { "ID": 2, "Username": "bob", "Decklists": [] }
        ]));

        let output = render_participants(&build_participants_report(&players));

        assert_eq!(
            output,
            ":loudspeaker: **Tournament participants:** :loudspeaker:\n\n\
             - @Alice - [Mono Red](https://melee.gg/Decklist/View/abc)\n\
             - @bob - No decklist submitted\n"
        );
    }

    #[test]
    fn test_build_participants_report_preserves_order() {
        let players = players(json!([
            { "ID": 3, "Username": "zed" },
            { "ID": 1, "Username": "amy" },
            { "ID": 2, "Username": "kim" }
        ]));

        let report = build_participants_report(&players);
        let handles: Vec<&str> = report
            .participants
            .iter()
            .map(|p| p.handle.as_str())
            .collect();

        assert_eq!(handles, vec!["zed", "amy", "kim"]);
    }

    #[test]
    fn test_render_participants_decklist_without_identifier() {
        let players = players(json!([
            { "ID": 1, "Username": "amy", "Decklists": [{ "DecklistName": "Burn" }] }
        ]));

        let output = render_participants(&build_participants_report(&players));

        assert_eq!(
            output,
            ":loudspeaker: **Tournament participants:** :loudspeaker:\n\n- @amy - Burn\n"
        );
    }

    #[test]
    fn test_render_participants_empty() {
        let output = render_participants(&build_participants_report(&[]));
        assert_eq!(output, "No participants found for this tournament.\n");
    }

    #[test]
    fn test_build_participants_report_unknown_player() {
        let players = players(json!([{ "ID": 9 }]));
        let report = build_participants_report(&players);
        assert_eq!(report.participants[0].handle, "Unknown");
        assert_eq!(report.participants[0].deck, None);
    }

    #[test]
    fn test_participants_report_json_shape() {
        let players = players(json!([
            { "ID": 1, "Username": "amy", "Decklists": [{ "Guid": "g", "DecklistName": "Burn" }] }
        ]));
        let json = serde_json::to_value(build_participants_report(&players)).unwrap();

        assert_eq!(json["participants"][0]["handle"], "amy");
        assert_eq!(json["participants"][0]["deck"]["name"], "Burn");
    }
}
