//! Wire schema for Melee.gg API responses
//!
//! Every payload is deserialized into these structs right after the HTTP
//! body is read, so the report builders work on typed optionals instead of
//! probing loosely shaped JSON. Field names follow the API's PascalCase.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Treats an explicit JSON `null` the same as a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Identifier as returned by the API.
///
/// Melee sends some ids as numbers and others as strings (guids), so both
/// are accepted and kept in their textual form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ApiId(String);

impl ApiId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ApiId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for ApiId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawId {
            Text(String),
            Unsigned(u64),
            Signed(i64),
        }

        Ok(match RawId::deserialize(deserializer)? {
            RawId::Text(text) => ApiId(text),
            RawId::Unsigned(n) => ApiId(n.to_string()),
            RawId::Signed(n) => ApiId(n.to_string()),
        })
    }
}

/// Standard response wrapper: the payload lives under `Content`
#[derive(Debug, Deserialize, Clone)]
pub struct Envelope<T> {
    #[serde(rename = "Content", default)]
    pub content: Option<T>,
}

impl<T: Default> Envelope<T> {
    /// Unwraps the payload, treating a missing `Content` as empty.
    pub fn into_content(self) -> T {
        self.content.unwrap_or_default()
    }
}

/// Tournament participant
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
#[serde(rename_all = "PascalCase")]
pub struct Player {
    #[serde(rename = "ID", default)]
    pub id: Option<ApiId>,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
    /// Raw Discord handle, possibly carrying a `#NNNN` discriminator
    #[serde(default)]
    pub discord_username: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub decklists: Vec<ParticipantDecklist>,
}

/// Decklist registered on the participant record
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
#[serde(rename_all = "PascalCase")]
pub struct ParticipantDecklist {
    #[serde(rename = "ID", default)]
    pub id: Option<ApiId>,
    #[serde(default)]
    pub guid: Option<ApiId>,
    #[serde(default)]
    pub admin_given_name: Option<String>,
    #[serde(default)]
    pub decklist_name: Option<String>,
}

/// Decklist attached to a competitor for one specific match
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
#[serde(rename_all = "PascalCase")]
pub struct MatchDecklist {
    #[serde(default)]
    pub decklist_id: Option<ApiId>,
    #[serde(default)]
    pub decklist_name: Option<String>,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
#[serde(rename_all = "PascalCase")]
pub struct Team {
    #[serde(default, deserialize_with = "null_as_default")]
    pub players: Vec<Player>,
}

/// One side of a match
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
#[serde(rename_all = "PascalCase")]
pub struct Competitor {
    #[serde(default)]
    pub team: Option<Team>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub decklists: Vec<MatchDecklist>,
}

impl Competitor {
    /// Singles only: the first player of the team.
    pub fn player(&self) -> Option<&Player> {
        self.team.as_ref().and_then(|team| team.players.first())
    }
}

/// `ByeReason` of a match.
///
/// Only an explicit `null` means "not a bye"; a match that omits the field
/// is treated like one that carries a reason.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ByeReason {
    #[default]
    Absent,
    Null,
    Given(serde_json::Value),
}

impl ByeReason {
    pub fn is_null(&self) -> bool {
        matches!(self, ByeReason::Null)
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, ByeReason::Absent)
    }
}

impl<'de> Deserialize<'de> for ByeReason {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match Option::<serde_json::Value>::deserialize(deserializer)? {
            Some(value) => ByeReason::Given(value),
            None => ByeReason::Null,
        })
    }
}

impl Serialize for ByeReason {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            ByeReason::Given(value) => value.serialize(serializer),
            ByeReason::Absent | ByeReason::Null => serializer.serialize_none(),
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
#[serde(rename_all = "PascalCase")]
pub struct Match {
    #[serde(default)]
    pub round_number: Option<u32>,
    #[serde(default)]
    pub phase_id: Option<ApiId>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub competitors: Vec<Competitor>,
    #[serde(default, skip_serializing_if = "ByeReason::is_absent")]
    pub bye_reason: ByeReason,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
#[serde(rename_all = "PascalCase")]
pub struct Phase {
    #[serde(rename = "ID", default)]
    pub id: Option<ApiId>,
    /// `None` when the phase does not declare its rounds
    #[serde(default)]
    pub rounds: Option<Vec<serde_json::Value>>,
}

/// Tournament metadata
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
#[serde(rename_all = "PascalCase")]
pub struct Tournament {
    #[serde(default, deserialize_with = "null_as_default")]
    pub phases: Vec<Phase>,
    #[serde(default)]
    pub number_of_rounds: Option<u32>,
}

/// Body of the tournament endpoint.
///
/// Accepted both wrapped in `Content` and bare.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum TournamentBody {
    Wrapped {
        #[serde(rename = "Content")]
        content: Tournament,
    },
    Bare(Tournament),
}

impl TournamentBody {
    pub fn into_tournament(self) -> Tournament {
        match self {
            TournamentBody::Wrapped { content } => content,
            TournamentBody::Bare(tournament) => tournament,
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
#[serde(rename_all = "PascalCase")]
pub struct Standing {
    #[serde(default)]
    pub rank: Option<u32>,
    #[serde(default)]
    pub position: Option<u32>,
    #[serde(default)]
    pub round_number: Option<u32>,
    #[serde(default)]
    pub team: Option<Team>,
    #[serde(default)]
    pub match_wins: Option<u32>,
    #[serde(default)]
    pub match_losses: Option<u32>,
    #[serde(default)]
    pub match_draws: Option<u32>,
    #[serde(default)]
    pub game_wins: Option<u32>,
    #[serde(default)]
    pub game_losses: Option<u32>,
    #[serde(default)]
    pub game_draws: Option<u32>,
    /// Fraction in `0..=1`
    #[serde(default)]
    pub opponent_match_win_percentage: Option<f64>,
}

impl Standing {
    pub fn player(&self) -> Option<&Player> {
        self.team.as_ref().and_then(|team| team.players.first())
    }
}
