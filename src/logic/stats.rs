//! Summary numbers over a generated schedule.

use crate::config::ScheduleSettings;
use crate::models::{GeneratedMatch, Team};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct ScheduleStats {
    pub total_matches: usize,
    /// Active teams only; inactive ones are never scheduled.
    pub total_teams: usize,
    /// `ceil(total_matches / matches_per_day)`.
    pub estimated_duration_days: usize,
    pub group_stage_matches: usize,
    pub knockout_matches: usize,
    pub first_match_date: Option<NaiveDate>,
    pub last_match_date: Option<NaiveDate>,
}

impl ScheduleStats {
    pub fn compute(matches: &[GeneratedMatch], teams: &[Team], settings: &ScheduleSettings) -> Self {
        let knockout_matches = matches.iter().filter(|m| m.stage.is_knockout()).count();
        Self {
            total_matches: matches.len(),
            total_teams: teams.iter().filter(|t| t.active).count(),
            estimated_duration_days: matches.len().div_ceil(settings.matches_per_day.max(1)),
            group_stage_matches: matches.len() - knockout_matches,
            knockout_matches,
            first_match_date: matches.iter().map(|m| m.match_date).min(),
            last_match_date: matches.iter().map(|m| m.match_date).max(),
        }
    }
}
