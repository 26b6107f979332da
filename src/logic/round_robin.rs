//! Round-robin pairing: everyone in a scope plays everyone else once.

use crate::config::ScheduleSettings;
use crate::models::{
    GeneratedMatch, GroupId, MatchStatus, ScheduleCursor, Stage, Team, TournamentConfig,
};
use chrono::Duration;

/// Round label for a whole-tournament league.
pub const LEAGUE_LABEL: &str = "Liga";

/// Where a round-robin runs: the whole tournament, or one of several parallel groups.
#[derive(Clone, Copy, Debug)]
pub enum RoundRobinScope<'a> {
    League,
    Group {
        id: GroupId,
        label: &'a str,
        /// Number of groups playing on shared days.
        parallel_groups: u32,
    },
}

impl RoundRobinScope<'_> {
    fn round_label(&self) -> String {
        match self {
            RoundRobinScope::League => LEAGUE_LABEL.to_string(),
            RoundRobinScope::Group { label, .. } => format!("Grupo {}", label),
        }
    }

    fn parallel_groups(&self) -> u32 {
        match self {
            RoundRobinScope::League => 1,
            RoundRobinScope::Group { parallel_groups, .. } => (*parallel_groups).max(1),
        }
    }
}

/// Emit one match per unordered pair: home = `teams[i]`, away = `teams[j]` for `i < j`.
///
/// After each match numbered `m`, the date moves forward by `match_interval_days`
/// only when `m` is a multiple of the scope's parallel group count, so one group
/// in a single scope advances every match. Fewer than 2 teams produce nothing.
pub fn schedule_round_robin(
    config: &TournamentConfig,
    teams: &[Team],
    scope: RoundRobinScope<'_>,
    mut cursor: ScheduleCursor,
    settings: &ScheduleSettings,
) -> (Vec<GeneratedMatch>, ScheduleCursor) {
    let n = teams.len();
    if n < 2 {
        return (Vec::new(), cursor);
    }

    let label = scope.round_label();
    let group_id = match scope {
        RoundRobinScope::League => None,
        RoundRobinScope::Group { id, .. } => Some(id),
    };
    let parallel = scope.parallel_groups();
    let step = Duration::days(settings.match_interval_days);

    let mut matches = Vec::with_capacity(n * (n - 1) / 2);
    for i in 0..n {
        for j in (i + 1)..n {
            let match_number = cursor.take_number();
            matches.push(GeneratedMatch {
                tournament_id: config.id,
                home_team_id: teams[i].id,
                away_team_id: teams[j].id,
                match_date: cursor.date,
                location: config.location.clone(),
                status: MatchStatus::Scheduled,
                round_label: label.clone(),
                match_number,
                stage: Stage::Group,
                group_id,
            });
            if match_number % parallel == 0 {
                cursor.date += step;
            }
        }
    }
    log::debug!("{}: {} matches for {} teams", label, matches.len(), n);
    (matches, cursor)
}
