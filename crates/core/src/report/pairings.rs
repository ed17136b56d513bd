//! Current-round pairings
//!
//! BYEs are listed first with a check mark, regular pairings follow in API
//! order numbered with keycap emoji. Matches that are neither a BYE nor a
//! two-player pairing are dropped.

use std::fmt;

use serde::{Serialize, Serializer};

use crate::identity::{display_handle, resolve_deck, DeckInfo, ParticipantDecks};
use crate::report::headline;
use crate::types::{Competitor, Match, Tournament};

pub const NO_PAIRINGS: &str = "No current pairings found for this tournament.";
pub const BYE_GLYPH: &str = ":white_check_mark:";

/// Glyphs for the first ten pairings
const PAIRING_GLYPHS: [&str; 10] = [
    ":one:",
    ":two:",
    ":three:",
    ":four:",
    ":five:",
    ":six:",
    ":seven:",
    ":eight:",
    ":nine:",
    ":keycap_ten:",
];

/// Glyph for the pairing at zero-based `index`.
pub fn pairing_glyph(index: usize) -> String {
    match PAIRING_GLYPHS.get(index) {
        Some(glyph) => glyph.to_string(),
        None => format!(":{}:", index + 1),
    }
}

/// Title of the pairings report.
///
/// The second phase of a tournament is assumed to be the elimination
/// bracket. Nothing in the API marks a phase as such, so tournaments with
/// more than two phases may be mislabeled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PairingsTitle {
    /// Phase of the match is unknown
    Round { round: u32 },
    /// Swiss-style phase; `total` is `None` when the phase declares no rounds
    RoundOf { round: u32, total: Option<usize> },
    Bracket,
}

impl fmt::Display for PairingsTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PairingsTitle::Round { round } => write!(f, "Round {round} Pairings"),
            PairingsTitle::RoundOf {
                round,
                total: Some(total),
            } => write!(f, "Round {round} of {total} Pairings"),
            PairingsTitle::RoundOf { round, total: None } => {
                write!(f, "Round {round} of ? Pairings")
            }
            PairingsTitle::Bracket => f.write_str("Double Elimination Bracket"),
        }
    }
}

impl Serialize for PairingsTitle {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Derive the title from the first match of the round.
pub fn pairings_title(first: &Match, tournament: &Tournament) -> PairingsTitle {
    let round = first.round_number.filter(|r| *r > 0).unwrap_or(1);

    let phase = first.phase_id.as_ref().and_then(|phase_id| {
        tournament
            .phases
            .iter()
            .enumerate()
            .find(|(_, phase)| phase.id.as_ref() == Some(phase_id))
    });

    match phase {
        None => PairingsTitle::Round { round },
        Some((1, _)) => PairingsTitle::Bracket,
        Some((_, phase)) => PairingsTitle::RoundOf {
            round,
            total: phase.rounds.as_ref().map(Vec::len),
        },
    }
}

/// Shape of a match record
#[derive(Debug, Clone, Copy)]
pub enum MatchKind<'a> {
    Bye(&'a Competitor),
    Pairing(&'a Competitor, &'a Competitor),
    Unsupported,
}

pub fn classify_match(m: &Match) -> MatchKind<'_> {
    match m.competitors.as_slice() {
        [only] if !m.bye_reason.is_null() => MatchKind::Bye(only),
        [first, second] => MatchKind::Pairing(first, second),
        _ => MatchKind::Unsupported,
    }
}

/// A player seated in a match along with the deck they play
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct Seat {
    pub handle: String,
    pub deck: Option<DeckInfo>,
}

impl Seat {
    fn new(competitor: &Competitor, decks: &ParticipantDecks) -> Self {
        Self {
            handle: display_handle(competitor.player()),
            deck: resolve_deck(competitor, decks),
        }
    }
}

/// `@handle ([deck](url))` or `@handle (No deck info)`
impl fmt::Display for Seat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.deck {
            Some(deck) => write!(f, "@{} ({deck})", self.handle),
            None => write!(f, "@{} (No deck info)", self.handle),
        }
    }
}

#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct Pairing {
    pub glyph: String,
    pub left: Seat,
    pub right: Seat,
}

#[derive(Debug, Serialize, Clone, PartialEq, Default)]
pub struct PairingsReport {
    /// `None` when the round has no matches
    pub title: Option<PairingsTitle>,
    pub byes: Vec<Seat>,
    pub pairings: Vec<Pairing>,
}

pub fn build_pairings_report(
    matches: &[Match],
    decks: &ParticipantDecks,
    tournament: &Tournament,
) -> PairingsReport {
    let Some(first) = matches.first() else {
        return PairingsReport::default();
    };

    let mut byes = Vec::new();
    let mut pairings = Vec::new();

    for m in matches {
        match classify_match(m) {
            MatchKind::Bye(competitor) => byes.push(Seat::new(competitor, decks)),
            MatchKind::Pairing(left, right) => pairings.push(Pairing {
                glyph: pairing_glyph(pairings.len()),
                left: Seat::new(left, decks),
                right: Seat::new(right, decks),
            }),
            MatchKind::Unsupported => {}
        }
    }

    PairingsReport {
        title: Some(pairings_title(first, tournament)),
        byes,
        pairings,
    }
}

pub fn render_pairings(report: &PairingsReport) -> String {
    let Some(title) = &report.title else {
        return format!("{NO_PAIRINGS}\n");
    };

    let mut result = headline(&title.to_string());

    for seat in &report.byes {
        result.push_str(&format!("{BYE_GLYPH} {seat} - BYE\n"));
    }

    for pairing in &report.pairings {
        result.push_str(&format!(
            "{} {} vs {}\n",
            pairing.glyph, pairing.left, pairing.right
        ));
    }

    result
}
