//! Single-elimination bracket: pre-scheduled with placeholder winners, or advanced from real results.

use crate::config::ScheduleSettings;
use crate::models::{
    GeneratedMatch, MatchStatus, ScheduleCursor, ScheduleError, Side, Stage, Team, TeamId,
    TournamentConfig,
};
use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One round of a bracket: its matches plus the teams that advance without playing.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct BracketRound {
    /// 1-based.
    pub round_number: u32,
    pub total_rounds: u32,
    pub label: String,
    pub stage: Stage,
    pub date: NaiveDate,
    pub matches: Vec<GeneratedMatch>,
    /// Unpaired teams, in entry order. At most one per round.
    pub byes: Vec<TeamId>,
}

impl BracketRound {
    /// Rounds left including this one; 0 if `round_number` is past the final.
    pub fn remaining_rounds(&self) -> u32 {
        self.total_rounds.saturating_add(1).saturating_sub(self.round_number)
    }

    pub fn is_final(&self) -> bool {
        self.remaining_rounds() <= 1
    }

    /// Home team of every pairing, then the byes: the order the next round is paired in.
    pub fn placeholder_advancers(&self) -> Vec<TeamId> {
        self.matches
            .iter()
            .map(|m| m.home_team_id)
            .chain(self.byes.iter().copied())
            .collect()
    }

    /// Winner of every pairing per `results` (keyed by match number), then the byes.
    pub fn winners(&self, results: &HashMap<u32, Side>) -> Result<Vec<TeamId>, ScheduleError> {
        let mut advancing = Vec::with_capacity(self.matches.len() + self.byes.len());
        for m in &self.matches {
            let side = results
                .get(&m.match_number)
                .copied()
                .ok_or(ScheduleError::MissingResult {
                    match_number: m.match_number,
                })?;
            advancing.push(m.team(side));
        }
        advancing.extend(self.byes.iter().copied());
        Ok(advancing)
    }

    /// Cursor for the round after this one: numbering continues, date moves one round interval.
    pub fn next_cursor(
        &self,
        settings: &ScheduleSettings,
    ) -> Result<ScheduleCursor, ScheduleError> {
        let last = self
            .matches
            .iter()
            .map(|m| m.match_number)
            .max()
            .unwrap_or(0);
        Ok(ScheduleCursor {
            next_match_number: last
                .checked_add(1)
                .ok_or(ScheduleError::MatchNumberOverflow)?,
            date: self.date + Duration::days(settings.round_interval_days),
        })
    }
}

/// Rounds needed for `n` entrants: `log2` of the next power of two.
pub fn total_rounds(n: usize) -> u32 {
    if n < 2 {
        0
    } else {
        n.next_power_of_two().trailing_zeros()
    }
}

/// Label and stage from the number of rounds left including this one.
pub fn round_name(round_number: u32, total_rounds: u32) -> (String, Stage) {
    match total_rounds.saturating_add(1).saturating_sub(round_number) {
        1 => ("Final".to_string(), Stage::Final),
        2 => ("Semifinal".to_string(), Stage::Semi),
        3 => ("Cuartos de Final".to_string(), Stage::Quarter),
        4 => ("Octavos de Final".to_string(), Stage::Group),
        _ => (format!("Round {}", round_number), Stage::Group),
    }
}

/// Pair `entrants` as (0,1), (2,3), ...; a trailing odd entrant gets a bye.
fn build_round(
    config: &TournamentConfig,
    entrants: &[TeamId],
    round_number: u32,
    total_rounds: u32,
    mut cursor: ScheduleCursor,
) -> (BracketRound, ScheduleCursor) {
    let (label, stage) = round_name(round_number, total_rounds);
    let mut matches = Vec::with_capacity(entrants.len() / 2);
    let mut byes = Vec::new();
    for pair in entrants.chunks(2) {
        match *pair {
            [home, away] => matches.push(GeneratedMatch {
                tournament_id: config.id,
                home_team_id: home,
                away_team_id: away,
                match_date: cursor.date,
                location: config.location.clone(),
                status: MatchStatus::Scheduled,
                round_label: label.clone(),
                match_number: cursor.take_number(),
                stage,
                group_id: None,
            }),
            [bye] => byes.push(bye),
            _ => {}
        }
    }
    let round = BracketRound {
        round_number,
        total_rounds,
        label,
        stage,
        date: cursor.date,
        matches,
        byes,
    };
    (round, cursor)
}

/// Pre-schedule every round down to the final, assuming the home team of each pairing wins.
///
/// Dates start at `cursor.date` and move `round_interval_days` per round. The returned cursor
/// points one round interval past the final. Fewer than 2 teams produce no rounds.
pub fn pre_schedule_full_bracket(
    config: &TournamentConfig,
    teams: &[Team],
    cursor: ScheduleCursor,
    settings: &ScheduleSettings,
) -> (Vec<BracketRound>, ScheduleCursor) {
    let total = total_rounds(teams.len());
    if total == 0 {
        return (Vec::new(), cursor);
    }
    let bracket_size = teams.len().next_power_of_two();
    log::debug!(
        "Bracket for {} teams: size {}, {} bye(s), {} round(s)",
        teams.len(),
        bracket_size,
        bracket_size - teams.len(),
        total
    );

    let step = Duration::days(settings.round_interval_days);
    let mut entrants: Vec<TeamId> = teams.iter().map(|t| t.id).collect();
    let mut rounds = Vec::with_capacity(total as usize);
    let mut cursor = cursor;
    let mut round_number = 1;
    while entrants.len() > 1 {
        let (round, after) = build_round(config, &entrants, round_number, total, cursor);
        entrants = round.placeholder_advancers();
        cursor = after.on(after.date + step);
        rounds.push(round);
        round_number += 1;
    }
    (rounds, cursor)
}

/// Flattened matches of [`pre_schedule_full_bracket`].
pub fn schedule_elimination(
    config: &TournamentConfig,
    teams: &[Team],
    cursor: ScheduleCursor,
    settings: &ScheduleSettings,
) -> (Vec<GeneratedMatch>, ScheduleCursor) {
    let (rounds, cursor) = pre_schedule_full_bracket(config, teams, cursor, settings);
    let matches = rounds.into_iter().flat_map(|r| r.matches).collect();
    (matches, cursor)
}

/// Build the round after `round` from recorded winners (pairing order, then byes).
///
/// Every match of `round` needs an entry in `results`. The next round is dated and numbered
/// from `cursor`; [`BracketRound::next_cursor`] gives the usual continuation.
/// `round` may come from a client, so its numbering is checked before use.
pub fn advance_round_from_results(
    config: &TournamentConfig,
    round: &BracketRound,
    results: &HashMap<u32, Side>,
    cursor: ScheduleCursor,
) -> Result<(BracketRound, ScheduleCursor), ScheduleError> {
    if round.round_number == 0 || round.round_number > round.total_rounds {
        return Err(ScheduleError::InvalidRound {
            round_number: round.round_number,
            total_rounds: round.total_rounds,
        });
    }
    if round.is_final() {
        return Err(ScheduleError::BracketComplete);
    }
    let advancing = round.winners(results)?;
    if advancing.len() < 2 {
        return Err(ScheduleError::BracketComplete);
    }
    let fits = u32::try_from(advancing.len() / 2)
        .ok()
        .and_then(|n| cursor.next_match_number.checked_add(n))
        .is_some();
    if !fits {
        return Err(ScheduleError::MatchNumberOverflow);
    }
    let next = build_round(
        config,
        &advancing,
        round.round_number + 1,
        round.total_rounds,
        cursor,
    );
    log::debug!(
        "Advanced {} to {} with {} match(es)",
        round.label,
        next.0.label,
        next.0.matches.len()
    );
    Ok(next)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_rounds_rounds_up_to_power_of_two() {
        assert_eq!(total_rounds(0), 0);
        assert_eq!(total_rounds(1), 0);
        assert_eq!(total_rounds(2), 1);
        assert_eq!(total_rounds(5), 3);
        assert_eq!(total_rounds(8), 3);
        assert_eq!(total_rounds(9), 4);
        assert_eq!(total_rounds(40), 6);
    }

    #[test]
    fn round_names_count_back_from_the_final() {
        assert_eq!(round_name(6, 6), ("Final".to_string(), Stage::Final));
        assert_eq!(round_name(5, 6), ("Semifinal".to_string(), Stage::Semi));
        assert_eq!(round_name(4, 6), ("Cuartos de Final".to_string(), Stage::Quarter));
        assert_eq!(round_name(3, 6), ("Octavos de Final".to_string(), Stage::Group));
        assert_eq!(round_name(2, 6), ("Round 2".to_string(), Stage::Group));
    }

    #[test]
    fn round_names_past_the_final_do_not_underflow() {
        assert_eq!(round_name(5, 2), ("Round 5".to_string(), Stage::Group));
        assert_eq!(round_name(u32::MAX, u32::MAX), ("Final".to_string(), Stage::Final));
    }
}
