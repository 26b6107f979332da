//! Data structures for schedule generation: teams, tournament config, matches, groups.

mod schedule;
mod team;
mod tournament;

pub use schedule::{
    GeneratedMatch, Group, GroupId, MatchStatus, Schedule, ScheduleCursor, Side, Stage,
};
pub use team::{Team, TeamId};
pub use tournament::{ScheduleError, TournamentConfig, TournamentFormat, TournamentId};
