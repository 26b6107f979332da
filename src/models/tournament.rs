//! Tournament configuration, format tags, and engine errors.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use uuid::Uuid;

/// Errors that can occur while generating or advancing a schedule.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum ScheduleError {
    /// The format tag is not one of the known formats.
    #[error("Unsupported tournament format: {0}")]
    UnsupportedFormat(String),
    /// Fewer than 2 eligible teams.
    #[error("Need at least 2 active teams to generate a schedule (found {found})")]
    InsufficientTeams { found: usize },
    /// A match in the round being advanced has no recorded winner.
    #[error("No result recorded for match {match_number}")]
    MissingResult { match_number: u32 },
    /// Round number outside `1..=total_rounds`.
    #[error("Round {round_number} is not part of a {total_rounds}-round bracket")]
    InvalidRound { round_number: u32, total_rounds: u32 },
    /// Match numbering would run past `u32::MAX`.
    #[error("Match numbers exhausted")]
    MatchNumberOverflow,
    /// The round being advanced is already the final.
    #[error("Bracket is complete; the final has no next round")]
    BracketComplete,
    /// CSV serialization failed.
    #[error("Could not export schedule: {0}")]
    Export(String),
}

/// Unique identifier for a tournament.
pub type TournamentId = Uuid;

/// How a tournament is played.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", try_from = "String")]
pub enum TournamentFormat {
    /// Everyone plays everyone once ("points" league).
    RoundRobin,
    /// Single-elimination bracket.
    Elimination,
    /// Round-robin groups followed by a knockout bracket.
    Mixed,
}

impl TournamentFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            TournamentFormat::RoundRobin => "round_robin",
            TournamentFormat::Elimination => "elimination",
            TournamentFormat::Mixed => "mixed",
        }
    }
}

impl fmt::Display for TournamentFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TournamentFormat {
    type Err = ScheduleError;

    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        match tag.trim().to_ascii_lowercase().as_str() {
            "round_robin" | "points" | "liga" => Ok(TournamentFormat::RoundRobin),
            "elimination" | "single_elimination" => Ok(TournamentFormat::Elimination),
            "mixed" | "group_knockout" => Ok(TournamentFormat::Mixed),
            _ => Err(ScheduleError::UnsupportedFormat(tag.to_string())),
        }
    }
}

impl TryFrom<String> for TournamentFormat {
    type Error = ScheduleError;

    fn try_from(tag: String) -> Result<Self, Self::Error> {
        tag.parse()
    }
}

/// Immutable input describing the tournament to schedule.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct TournamentConfig {
    pub id: TournamentId,
    pub format: TournamentFormat,
    pub start_date: NaiveDate,
    #[serde(default)]
    pub location: Option<String>,
    /// Teams taken from each group into the knockout stage (mixed format only).
    #[serde(default)]
    pub qualifiers_per_group: Option<usize>,
}

impl TournamentConfig {
    pub fn new(format: TournamentFormat, start_date: NaiveDate) -> Self {
        Self {
            id: Uuid::new_v4(),
            format,
            start_date,
            location: None,
            qualifiers_per_group: None,
        }
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    pub fn with_qualifiers_per_group(mut self, qualifiers: usize) -> Self {
        self.qualifiers_per_group = Some(qualifiers);
        self
    }
}
