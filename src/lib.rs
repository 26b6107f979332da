//! Volleyball league schedule engine: library with models, generators and CSV export.

pub mod config;
pub mod export;
pub mod logic;
pub mod models;

pub use config::{ScheduleSettings, ServerConfig};
pub use export::{matches_to_csv, write_matches_csv};
pub use logic::{
    advance_round_from_results, distribute_into_groups, eligible_teams, generate_schedule,
    generate_schedule_for_tag, generate_schedule_with_rng, pre_schedule_full_bracket,
    schedule_elimination, schedule_group_plus_knockout, schedule_round_robin, BracketRound,
    RoundRobinScope, ScheduleStats, Scheduler,
};
pub use models::{
    GeneratedMatch, Group, GroupId, MatchStatus, Schedule, ScheduleCursor, ScheduleError, Side,
    Stage, Team, TeamId, TournamentConfig, TournamentFormat, TournamentId,
};
