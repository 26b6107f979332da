//! One scheduler per tournament format, and the generation entry points.

use crate::config::ScheduleSettings;
use crate::logic::elimination::schedule_elimination;
use crate::logic::groups::distribute_into_groups;
use crate::logic::mixed::{schedule_group_plus_knockout, schedule_group_stage};
use crate::logic::round_robin::{schedule_round_robin, RoundRobinScope};
use crate::models::{
    Schedule, ScheduleCursor, ScheduleError, Team, TournamentConfig, TournamentFormat,
};
use rand::RngCore;

/// Produces the full schedule for one format. `teams` is already filtered and has ≥2 entries.
pub trait Scheduler {
    fn schedule(
        &self,
        config: &TournamentConfig,
        teams: &[Team],
        settings: &ScheduleSettings,
        rng: &mut dyn RngCore,
    ) -> Schedule;
}

/// League; split into parallel groups past the single-group limit.
#[derive(Clone, Copy, Debug, Default)]
pub struct RoundRobin;

#[derive(Clone, Copy, Debug, Default)]
pub struct SingleElimination;

#[derive(Clone, Copy, Debug, Default)]
pub struct GroupPlusKnockout;

impl Scheduler for RoundRobin {
    fn schedule(
        &self,
        config: &TournamentConfig,
        teams: &[Team],
        settings: &ScheduleSettings,
        rng: &mut dyn RngCore,
    ) -> Schedule {
        let cursor = ScheduleCursor::start(config.start_date);
        if settings.group_count_for(teams.len()) == 1 {
            let (matches, _) =
                schedule_round_robin(config, teams, RoundRobinScope::League, cursor, settings);
            return Schedule {
                matches,
                groups: Vec::new(),
            };
        }
        let groups = distribute_into_groups(teams, settings, rng);
        let (matches, _) = schedule_group_stage(config, &groups, cursor, settings);
        Schedule { matches, groups }
    }
}

impl Scheduler for SingleElimination {
    fn schedule(
        &self,
        config: &TournamentConfig,
        teams: &[Team],
        settings: &ScheduleSettings,
        _rng: &mut dyn RngCore,
    ) -> Schedule {
        let cursor = ScheduleCursor::start(config.start_date);
        let (matches, _) = schedule_elimination(config, teams, cursor, settings);
        Schedule {
            matches,
            groups: Vec::new(),
        }
    }
}

impl Scheduler for GroupPlusKnockout {
    fn schedule(
        &self,
        config: &TournamentConfig,
        teams: &[Team],
        settings: &ScheduleSettings,
        rng: &mut dyn RngCore,
    ) -> Schedule {
        let cursor = ScheduleCursor::start(config.start_date);
        let (schedule, _) = schedule_group_plus_knockout(config, teams, cursor, settings, rng);
        schedule
    }
}

impl TournamentFormat {
    /// The scheduler implementing this format.
    pub fn scheduler(&self) -> &'static dyn Scheduler {
        match self {
            TournamentFormat::RoundRobin => &RoundRobin,
            TournamentFormat::Elimination => &SingleElimination,
            TournamentFormat::Mixed => &GroupPlusKnockout,
        }
    }
}

/// Active teams, in input order.
pub fn eligible_teams(teams: &[Team]) -> Vec<Team> {
    let eligible: Vec<Team> = teams.iter().filter(|t| t.active).cloned().collect();
    let skipped = teams.len() - eligible.len();
    if skipped > 0 {
        log::warn!("Skipping {} inactive team(s)", skipped);
    }
    eligible
}

/// Generate the complete schedule, shuffling groups with the thread-local random source.
pub fn generate_schedule(
    config: &TournamentConfig,
    teams: &[Team],
    settings: &ScheduleSettings,
) -> Result<Schedule, ScheduleError> {
    generate_schedule_with_rng(config, teams, settings, &mut rand::thread_rng())
}

/// Generate the complete schedule with an explicit random source.
///
/// Fails with `InsufficientTeams` if fewer than 2 active teams remain. No partial result.
pub fn generate_schedule_with_rng(
    config: &TournamentConfig,
    teams: &[Team],
    settings: &ScheduleSettings,
    rng: &mut dyn RngCore,
) -> Result<Schedule, ScheduleError> {
    let teams = eligible_teams(teams);
    if teams.len() < 2 {
        return Err(ScheduleError::InsufficientTeams { found: teams.len() });
    }
    let schedule = config.format.scheduler().schedule(config, &teams, settings, rng);
    log::info!(
        "Generated {} match(es) in {} group(s) for {} tournament {} ({} teams)",
        schedule.matches.len(),
        schedule.groups.len(),
        config.format,
        config.id,
        teams.len()
    );
    Ok(schedule)
}

/// Parse a raw format tag, then generate.
pub fn generate_schedule_for_tag(
    tag: &str,
    config: &TournamentConfig,
    teams: &[Team],
    settings: &ScheduleSettings,
    rng: &mut dyn RngCore,
) -> Result<Schedule, ScheduleError> {
    let format = tag.parse::<TournamentFormat>()?;
    let config = TournamentConfig {
        format,
        ..config.clone()
    };
    generate_schedule_with_rng(&config, teams, settings, rng)
}
