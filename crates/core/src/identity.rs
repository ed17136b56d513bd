//! Identity and deck normalization
//!
//! Resolves the handle shown for a player and the decklist shown next to it.
//! Handles fall back Discord → display name → username → `"Unknown"`. Decks
//! fall back from the match-level decklist to the participant-level one,
//! because players may register a new list for bracket play.

use std::collections::HashMap;
use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use crate::types::{ApiId, Competitor, MatchDecklist, ParticipantDecklist, Player};

pub const DECKLIST_VIEW_URL: &str = "https://melee.gg/Decklist/View";
pub const UNKNOWN_HANDLE: &str = "Unknown";
pub const UNKNOWN_DECK: &str = "Unknown Deck";

static DISCRIMINATOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"#[0-9]+$").expect("discriminator pattern is valid"));

/// Deck shown next to a player
#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct DeckInfo {
    pub name: String,
    /// `None` when the decklist carries no identifier to link to
    pub url: Option<String>,
}

impl DeckInfo {
    fn new(name: &str, id: Option<&ApiId>) -> Self {
        Self {
            name: name.to_string(),
            url: id.map(decklist_url),
        }
    }
}

/// Markdown link `[name](url)`, or the bare name without a url
impl fmt::Display for DeckInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.url {
            Some(url) => write!(f, "[{}]({url})", self.name),
            None => f.write_str(&self.name),
        }
    }
}

pub fn decklist_url(id: &ApiId) -> String {
    format!("{DECKLIST_VIEW_URL}/{id}")
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

/// Strip a trailing `#<digits>` discriminator from a Discord handle.
///
/// Only a suffix made entirely of ASCII digits up to the end of the string
/// is removed: `"Foo#1234"` becomes `"Foo"`, `"Foo#12bar"` is unchanged.
pub fn strip_discriminator(handle: &str) -> &str {
    match DISCRIMINATOR.find(handle) {
        Some(found) => &handle[..found.start()],
        None => handle,
    }
}

/// Handle shown after the `@`. Never empty.
pub fn display_handle(player: Option<&Player>) -> String {
    let Some(player) = player else {
        return UNKNOWN_HANDLE.to_string();
    };

    non_empty(player.discord_username.as_deref().map(strip_discriminator))
        .or_else(|| non_empty(player.display_name.as_deref()))
        .or_else(|| non_empty(player.username.as_deref()))
        .unwrap_or(UNKNOWN_HANDLE)
        .to_string()
}

/// A submitted decklist is always shown, linked when it has a `Guid` or `ID`.
fn participant_decklist_info(decklist: &ParticipantDecklist) -> DeckInfo {
    let id = decklist.guid.as_ref().or(decklist.id.as_ref());
    let name = non_empty(decklist.admin_given_name.as_deref())
        .or_else(|| non_empty(decklist.decklist_name.as_deref()))
        .unwrap_or(UNKNOWN_DECK);
    DeckInfo::new(name, id)
}

fn match_decklist_info(decklist: &MatchDecklist) -> Option<DeckInfo> {
    let id = decklist.decklist_id.as_ref()?;
    let name = non_empty(decklist.decklist_name.as_deref()).unwrap_or(UNKNOWN_DECK);
    Some(DeckInfo::new(name, Some(id)))
}

/// Participant-level deck: the first decklist on the player record.
pub fn participant_deck(player: &Player) -> Option<DeckInfo> {
    player.decklists.first().map(participant_decklist_info)
}

/// Match-level deck: the first decklist attached to the competitor.
pub fn match_deck(competitor: &Competitor) -> Option<DeckInfo> {
    competitor.decklists.first().and_then(match_decklist_info)
}

/// Participant-level decks keyed by player id
#[derive(Debug, Default, Clone)]
pub struct ParticipantDecks(HashMap<ApiId, DeckInfo>);

impl ParticipantDecks {
    pub fn from_players(players: &[Player]) -> Self {
        Self(
            players
                .iter()
                .filter_map(|player| Some((player.id.clone()?, participant_deck(player)?)))
                .collect(),
        )
    }

    pub fn get(&self, id: &ApiId) -> Option<&DeckInfo> {
        self.0.get(id)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Deck for a competitor in a given match. The match-level decklist wins.
pub fn resolve_deck(competitor: &Competitor, decks: &ParticipantDecks) -> Option<DeckInfo> {
    match_deck(competitor).or_else(|| {
        competitor
            .player()
            .and_then(|player| player.id.as_ref())
            .and_then(|id| decks.get(id))
            .cloned()
    })
}
