//! Generated matches, groups, and the schedule returned by one generation run.

use crate::models::team::{Team, TeamId};
use crate::models::tournament::TournamentId;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a group.
pub type GroupId = Uuid;

/// Phase a match belongs to.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Stage {
    Group,
    Quarter,
    Semi,
    Final,
}

impl Stage {
    /// Quarterfinal, semifinal and final matches.
    pub fn is_knockout(&self) -> bool {
        !matches!(self, Stage::Group)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Stage::Group => "GROUP",
            Stage::Quarter => "QUARTER",
            Stage::Semi => "SEMI",
            Stage::Final => "FINAL",
        }
    }
}

/// Match status. The engine only ever produces `Scheduled`.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MatchStatus {
    #[default]
    Scheduled,
}

impl MatchStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            MatchStatus::Scheduled => "SCHEDULED",
        }
    }
}

/// Which side won a match.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    Home,
    Away,
}

/// A set of teams playing a round-robin among themselves.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Group {
    pub id: GroupId,
    /// "A", "B", "C", ...
    pub label: String,
    pub teams: Vec<Team>,
}

/// One match produced by the engine, ready for bulk insertion.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct GeneratedMatch {
    pub tournament_id: TournamentId,
    pub home_team_id: TeamId,
    pub away_team_id: TeamId,
    pub match_date: NaiveDate,
    pub location: Option<String>,
    pub status: MatchStatus,
    pub round_label: String,
    /// Position in the run-wide sequence, starting at 1.
    pub match_number: u32,
    pub stage: Stage,
    pub group_id: Option<GroupId>,
}

impl GeneratedMatch {
    /// Team id of the given side.
    pub fn team(&self, side: Side) -> TeamId {
        match side {
            Side::Home => self.home_team_id,
            Side::Away => self.away_team_id,
        }
    }

    /// True if the team plays in this match.
    pub fn involves(&self, team_id: TeamId) -> bool {
        self.home_team_id == team_id || self.away_team_id == team_id
    }
}

/// Next match number and date, threaded through every sub-generator of a run.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct ScheduleCursor {
    pub next_match_number: u32,
    pub date: NaiveDate,
}

impl ScheduleCursor {
    /// Cursor for a fresh run: numbering starts at 1.
    pub fn start(date: NaiveDate) -> Self {
        Self {
            next_match_number: 1,
            date,
        }
    }

    /// Same numbering, different date.
    pub fn on(self, date: NaiveDate) -> Self {
        Self { date, ..self }
    }

    /// Take the next match number.
    pub(crate) fn take_number(&mut self) -> u32 {
        let n = self.next_match_number;
        self.next_match_number += 1;
        n
    }
}

/// Result of one generation run.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct Schedule {
    pub matches: Vec<GeneratedMatch>,
    /// Empty unless the format used a group stage.
    pub groups: Vec<Group>,
}
