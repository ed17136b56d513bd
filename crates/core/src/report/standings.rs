//! Standings table
//!
//! Rendered as a fixed-width table inside a code block so columns line up
//! in Discord.

use std::fmt;

use serde::{Serialize, Serializer};

use crate::identity::display_handle;
use crate::report::headline;
use crate::types::{Standing, Tournament};

pub const NO_STANDINGS: &str = "No current standings found for this tournament.";

/// Sort key used when a standing carries neither rank nor position
pub const UNRANKED: u32 = 999;

const HEADERS: [&str; 5] = ["Rank", "Player", "Match", "Game", "OMW"];
/// Extra width added to each column
const PADDING: [usize; 5] = [1, 2, 1, 1, 1];

/// Win/loss/draw record
#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq, Default)]
pub struct Record {
    pub wins: u32,
    pub losses: u32,
    pub draws: u32,
}

/// `W-L`, or `W-L-D` when there are draws
impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.wins, self.losses)?;
        if self.draws > 0 {
            write!(f, "-{}", self.draws)?;
        }
        Ok(())
    }
}

/// How far the event has progressed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundProgress {
    After { round: u32, total: Option<u32> },
    Current,
}

impl RoundProgress {
    pub fn new(current_round: Option<u32>, total_rounds: Option<u32>) -> Self {
        match current_round.filter(|r| *r > 0) {
            Some(round) => RoundProgress::After {
                round,
                total: total_rounds.filter(|t| *t > 0),
            },
            None => RoundProgress::Current,
        }
    }
}

impl fmt::Display for RoundProgress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RoundProgress::After {
                round,
                total: Some(total),
            } => write!(f, "After Round {round} of {total}"),
            RoundProgress::After { round, total: None } => write!(f, "After Round {round}"),
            RoundProgress::Current => f.write_str("Current"),
        }
    }
}

impl Serialize for RoundProgress {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct StandingRow {
    pub rank: u32,
    pub handle: String,
    pub match_record: Record,
    pub game_record: Record,
    /// Opponent match win fraction in `0..=1`
    pub omw: f64,
}

impl StandingRow {
    fn cells(&self) -> [String; 5] {
        [
            self.rank.to_string(),
            format!("@{}", self.handle),
            self.match_record.to_string(),
            self.game_record.to_string(),
            format_omw(self.omw),
        ]
    }
}

#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct StandingsReport {
    pub progress: RoundProgress,
    pub rows: Vec<StandingRow>,
}

/// OMW as a percentage with one decimal: `0.6667` → `"66.7%"`.
///
/// Ties round away from zero, so `0.5625` is `"56.3%"`.
pub fn format_omw(fraction: f64) -> String {
    let tenths = (fraction * 1000.0).round();
    format!("{:.1}%", tenths / 10.0)
}

/// Rank, then position, then [`UNRANKED`]. Zero counts as missing.
pub fn standing_sort_key(standing: &Standing) -> u32 {
    explicit_rank(standing).unwrap_or(UNRANKED)
}

fn explicit_rank(standing: &Standing) -> Option<u32> {
    standing
        .rank
        .filter(|r| *r > 0)
        .or_else(|| standing.position.filter(|p| *p > 0))
}

pub fn build_standings_report(standings: &[Standing], tournament: &Tournament) -> StandingsReport {
    // The round is read in API order, before sorting.
    let progress = RoundProgress::new(
        standings.first().and_then(|s| s.round_number),
        tournament.number_of_rounds,
    );

    let mut sorted: Vec<&Standing> = standings.iter().collect();
    sorted.sort_by_key(|s| standing_sort_key(s));

    let rows = sorted
        .into_iter()
        .enumerate()
        .map(|(index, standing)| StandingRow {
            rank: explicit_rank(standing).unwrap_or(index as u32 + 1),
            handle: display_handle(standing.player()),
            match_record: Record {
                wins: standing.match_wins.unwrap_or(0),
                losses: standing.match_losses.unwrap_or(0),
                draws: standing.match_draws.unwrap_or(0),
            },
            game_record: Record {
                wins: standing.game_wins.unwrap_or(0),
                losses: standing.game_losses.unwrap_or(0),
                draws: standing.game_draws.unwrap_or(0),
            },
            omw: standing.opponent_match_win_percentage.unwrap_or(0.0),
        })
        .collect();

    StandingsReport { progress, rows }
}

fn column_widths(rows: &[[String; 5]]) -> [usize; 5] {
    let mut widths = HEADERS.map(|header| header.chars().count());
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }
    for (width, padding) in widths.iter_mut().zip(PADDING) {
        *width += padding;
    }
    widths
}

fn format_row<S: AsRef<str>>(cells: &[S], widths: &[usize; 5]) -> String {
    let mut line: String = cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| format!("{:<width$}", cell.as_ref(), width = *width))
        .collect();
    line.push('\n');
    line
}

/// Render the table body, fenced in a code block.
pub fn render_table(rows: &[StandingRow]) -> String {
    let cells: Vec<[String; 5]> = rows.iter().map(StandingRow::cells).collect();
    let widths = column_widths(&cells);

    let mut result = String::from("```\n");
    result.push_str(&format_row(&HEADERS, &widths));
    result.push_str(&format_row(&widths.map(|w| "-".repeat(w)), &widths));
    for row in &cells {
        result.push_str(&format_row(row, &widths));
    }
    result.push_str("```\n");
    result
}

pub fn render_standings(report: &StandingsReport) -> String {
    if report.rows.is_empty() {
        return format!("{NO_STANDINGS}\n");
    }

    let mut result = headline(&format!("Standings {}", report.progress));
    result.push_str(&render_table(&report.rows));
    result
}
