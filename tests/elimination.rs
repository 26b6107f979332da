//! Integration tests for single-elimination brackets: pre-scheduling and results-driven advancement.

use chrono::{Duration, NaiveDate};
use std::collections::HashMap;
use volley_schedule::{
    advance_round_from_results, generate_schedule, pre_schedule_full_bracket, BracketRound,
    ScheduleCursor, ScheduleError, ScheduleSettings, Side, Stage, Team, TournamentConfig,
    TournamentFormat,
};

fn teams(names: &[&str]) -> Vec<Team> {
    names.iter().map(|n| Team::new(*n)).collect()
}

fn start() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 4, 11).unwrap()
}

fn config() -> TournamentConfig {
    TournamentConfig::new(TournamentFormat::Elimination, start())
}

#[test]
fn five_teams_need_three_rounds_with_byes() {
    let t = teams(&["A", "B", "C", "D", "E"]);
    let (a, b, c, d, e) = (t[0].id, t[1].id, t[2].id, t[3].id, t[4].id);
    let schedule = generate_schedule(&config(), &t, &ScheduleSettings::default()).unwrap();
    let m = &schedule.matches;

    assert_eq!(m.len(), 4);
    assert_eq!((m[0].home_team_id, m[0].away_team_id), (a, b));
    assert_eq!((m[1].home_team_id, m[1].away_team_id), (c, d));
    assert_eq!((m[2].home_team_id, m[2].away_team_id), (a, c));
    assert_eq!((m[3].home_team_id, m[3].away_team_id), (a, e));

    let labels: Vec<_> = m.iter().map(|x| x.round_label.as_str()).collect();
    assert_eq!(labels, vec!["Cuartos de Final", "Cuartos de Final", "Semifinal", "Final"]);
    let stages: Vec<_> = m.iter().map(|x| x.stage).collect();
    assert_eq!(stages, vec![Stage::Quarter, Stage::Quarter, Stage::Semi, Stage::Final]);

    let offsets: Vec<_> = m.iter().map(|x| (x.match_date - start()).num_days()).collect();
    assert_eq!(offsets, vec![0, 0, 7, 14]);
    let numbers: Vec<_> = m.iter().map(|x| x.match_number).collect();
    assert_eq!(numbers, vec![1, 2, 3, 4]);
    assert!(m.iter().all(|x| x.group_id.is_none()));
}

#[test]
fn rounds_record_their_byes() {
    let t = teams(&["A", "B", "C", "D", "E"]);
    let (rounds, cursor) = pre_schedule_full_bracket(
        &config(),
        &t,
        ScheduleCursor::start(start()),
        &ScheduleSettings::default(),
    );
    assert_eq!(rounds.len(), 3);
    assert_eq!(rounds[0].byes, vec![t[4].id]);
    assert_eq!(rounds[1].byes, vec![t[4].id]);
    assert!(rounds[2].byes.is_empty());
    assert!(rounds[2].is_final());
    assert_eq!(cursor.next_match_number, 5);
    assert_eq!(cursor.date, start() + Duration::days(21));
}

#[test]
fn large_bracket_names_early_rounds() {
    let t: Vec<_> = (0..20).map(|i| Team::new(format!("T{i}"))).collect();
    let (rounds, _) = pre_schedule_full_bracket(
        &config(),
        &t,
        ScheduleCursor::start(start()),
        &ScheduleSettings::default(),
    );
    let labels: Vec<_> = rounds.iter().map(|r| r.label.as_str()).collect();
    assert_eq!(
        labels,
        vec!["Round 1", "Octavos de Final", "Cuartos de Final", "Semifinal", "Final"]
    );
    let per_round: Vec<_> = rounds.iter().map(|r| r.matches.len()).collect();
    assert_eq!(per_round, vec![10, 5, 2, 1, 1]);
}

#[test]
fn advancing_uses_recorded_winners() {
    let t = teams(&["A", "B", "C", "D"]);
    let settings = ScheduleSettings::default();
    let (rounds, _) =
        pre_schedule_full_bracket(&config(), &t, ScheduleCursor::start(start()), &settings);
    let semis = &rounds[0];
    assert_eq!(semis.label, "Semifinal");

    let results = HashMap::from([(1, Side::Away), (2, Side::Home)]);
    let cursor = semis.next_cursor(&settings).unwrap();
    let (final_round, after) =
        advance_round_from_results(&config(), semis, &results, cursor).unwrap();

    assert_eq!(final_round.label, "Final");
    assert_eq!(final_round.matches.len(), 1);
    let m = &final_round.matches[0];
    assert_eq!((m.home_team_id, m.away_team_id), (t[1].id, t[2].id));
    assert_eq!(m.match_number, 3);
    assert_eq!(m.match_date, start() + Duration::days(7));
    assert_eq!(after.next_match_number, 4);

    let err = advance_round_from_results(
        &config(),
        &final_round,
        &HashMap::from([(3, Side::Home)]),
        after,
    )
    .unwrap_err();
    assert_eq!(err, ScheduleError::BracketComplete);
}

#[test]
fn advancing_carries_byes_after_winners() {
    let t = teams(&["A", "B", "C"]);
    let settings = ScheduleSettings::default();
    let (rounds, _) =
        pre_schedule_full_bracket(&config(), &t, ScheduleCursor::start(start()), &settings);
    let first = &rounds[0];
    assert_eq!(first.byes, vec![t[2].id]);

    let results = HashMap::from([(1, Side::Away)]);
    let cursor = first.next_cursor(&settings).unwrap();
    let (next, _) = advance_round_from_results(&config(), first, &results, cursor).unwrap();
    let m = &next.matches[0];
    assert_eq!((m.home_team_id, m.away_team_id), (t[1].id, t[2].id));
    assert_eq!(next.stage, Stage::Final);
}

#[test]
fn advancing_without_all_results_fails() {
    let t = teams(&["A", "B", "C", "D"]);
    let settings = ScheduleSettings::default();
    let (rounds, _) =
        pre_schedule_full_bracket(&config(), &t, ScheduleCursor::start(start()), &settings);
    let results = HashMap::from([(1, Side::Home)]);
    let err = advance_round_from_results(
        &config(),
        &rounds[0],
        &results,
        rounds[0].next_cursor(&settings).unwrap(),
    )
    .unwrap_err();
    assert_eq!(err, ScheduleError::MissingResult { match_number: 2 });
}

#[test]
fn two_teams_play_only_the_final() {
    let t = teams(&["A", "B"]);
    let schedule = generate_schedule(&config(), &t, &ScheduleSettings::default()).unwrap();
    assert_eq!(schedule.matches.len(), 1);
    assert_eq!(schedule.matches[0].stage, Stage::Final);
    assert_eq!(schedule.matches[0].match_date, start());
}

#[test]
fn advancing_a_round_outside_the_bracket_is_rejected() {
    let t = teams(&["A", "B", "C", "D"]);
    let settings = ScheduleSettings::default();
    let (rounds, _) =
        pre_schedule_full_bracket(&config(), &t, ScheduleCursor::start(start()), &settings);
    let json = serde_json::to_string(&rounds[0]).unwrap();
    let mut round: BracketRound = serde_json::from_str(&json).unwrap();
    let results = HashMap::from([(1, Side::Home), (2, Side::Home)]);

    round.round_number = 5;
    assert_eq!(round.remaining_rounds(), 0);
    let err = advance_round_from_results(
        &config(),
        &round,
        &results,
        round.next_cursor(&settings).unwrap(),
    )
    .unwrap_err();
    assert_eq!(
        err,
        ScheduleError::InvalidRound {
            round_number: 5,
            total_rounds: 2
        }
    );

    round.round_number = 0;
    let err = advance_round_from_results(
        &config(),
        &round,
        &results,
        round.next_cursor(&settings).unwrap(),
    )
    .unwrap_err();
    assert_eq!(
        err,
        ScheduleError::InvalidRound {
            round_number: 0,
            total_rounds: 2
        }
    );
}

#[test]
fn match_numbers_near_the_limit_are_rejected() {
    let t = teams(&["A", "B", "C", "D"]);
    let settings = ScheduleSettings::default();
    let (rounds, _) =
        pre_schedule_full_bracket(&config(), &t, ScheduleCursor::start(start()), &settings);
    let mut round = rounds[0].clone();
    round.matches[1].match_number = u32::MAX;
    assert_eq!(
        round.next_cursor(&settings).unwrap_err(),
        ScheduleError::MatchNumberOverflow
    );

    let results = HashMap::from([(1, Side::Home), (u32::MAX, Side::Away)]);
    let cursor = ScheduleCursor {
        next_match_number: u32::MAX,
        date: start(),
    };
    let err = advance_round_from_results(&config(), &round, &results, cursor).unwrap_err();
    assert_eq!(err, ScheduleError::MatchNumberOverflow);
}
