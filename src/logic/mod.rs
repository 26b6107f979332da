//! Schedule generation: groups, round-robin, elimination bracket, mixed format, stats.

mod elimination;
mod groups;
mod mixed;
mod round_robin;
mod stats;
mod strategy;

pub use elimination::{
    advance_round_from_results, pre_schedule_full_bracket, round_name, schedule_elimination,
    total_rounds, BracketRound,
};
pub use groups::{distribute_into_groups, group_label, partition};
pub use mixed::{schedule_group_plus_knockout, schedule_group_stage, select_qualifiers};
pub use round_robin::{schedule_round_robin, RoundRobinScope, LEAGUE_LABEL};
pub use stats::ScheduleStats;
pub use strategy::{
    eligible_teams, generate_schedule, generate_schedule_for_tag, generate_schedule_with_rng,
    GroupPlusKnockout, RoundRobin, Scheduler, SingleElimination,
};
