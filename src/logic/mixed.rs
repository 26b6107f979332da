//! Group stage followed by a knockout bracket, on one match-number sequence.

use crate::config::ScheduleSettings;
use crate::logic::elimination::schedule_elimination;
use crate::logic::groups::distribute_into_groups;
use crate::logic::round_robin::{schedule_round_robin, RoundRobinScope};
use crate::models::{GeneratedMatch, Group, Schedule, ScheduleCursor, Team, TournamentConfig};
use chrono::Duration;
use rand::RngCore;

/// Round-robin every group in turn, threading one cursor through all of them.
///
/// Groups share days: the date only advances every `groups.len()` matches.
pub fn schedule_group_stage(
    config: &TournamentConfig,
    groups: &[Group],
    cursor: ScheduleCursor,
    settings: &ScheduleSettings,
) -> (Vec<GeneratedMatch>, ScheduleCursor) {
    let parallel_groups = u32::try_from(groups.len()).unwrap_or(u32::MAX);
    groups
        .iter()
        .fold((Vec::new(), cursor), |(mut all, cursor), group| {
            let scope = RoundRobinScope::Group {
                id: group.id,
                label: &group.label,
                parallel_groups,
            };
            let (matches, cursor) =
                schedule_round_robin(config, &group.teams, scope, cursor, settings);
            all.extend(matches);
            (all, cursor)
        })
}

/// The first `per_group` teams of each group, in group order. Positional, not standings-based.
pub fn select_qualifiers(groups: &[Group], per_group: usize) -> Vec<Team> {
    groups
        .iter()
        .flat_map(|g| {
            if per_group > g.teams.len() {
                log::warn!(
                    "Group {} has {} team(s); all of them qualify",
                    g.label,
                    g.teams.len()
                );
            }
            g.teams.iter().take(per_group).cloned()
        })
        .collect()
}

/// Group stage, then a knockout bracket of placeholder qualifiers.
///
/// The knockout starts `group matches × match_interval_days` after the group stage start.
pub fn schedule_group_plus_knockout(
    config: &TournamentConfig,
    teams: &[Team],
    cursor: ScheduleCursor,
    settings: &ScheduleSettings,
    rng: &mut dyn RngCore,
) -> (Schedule, ScheduleCursor) {
    let groups = distribute_into_groups(teams, settings, rng);
    let group_stage_start = cursor.date;
    let (mut matches, cursor) = schedule_group_stage(config, &groups, cursor, settings);

    let knockout_start = group_stage_start
        + Duration::days(matches.len() as i64 * settings.match_interval_days);
    let per_group = config
        .qualifiers_per_group
        .unwrap_or(settings.default_qualifiers_per_group);
    let qualifiers = select_qualifiers(&groups, per_group);
    log::debug!(
        "{} group match(es); {} qualifier(s) enter the knockout on {}",
        matches.len(),
        qualifiers.len(),
        knockout_start
    );

    let (knockout, cursor) =
        schedule_elimination(config, &qualifiers, cursor.on(knockout_start), settings);
    matches.extend(knockout);
    (Schedule { matches, groups }, cursor)
}
