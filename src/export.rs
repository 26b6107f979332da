//! CSV export of generated matches, one row per match, for bulk-insert tooling.

use crate::models::{GeneratedMatch, ScheduleError};
use serde::Serialize;

#[derive(Serialize)]
struct MatchRow<'a> {
    match_number: u32,
    stage: &'static str,
    round_label: &'a str,
    group_id: String,
    home_team_id: String,
    away_team_id: String,
    match_date: String,
    location: &'a str,
    status: &'static str,
}

impl<'a> From<&'a GeneratedMatch> for MatchRow<'a> {
    fn from(m: &'a GeneratedMatch) -> Self {
        Self {
            match_number: m.match_number,
            stage: m.stage.as_str(),
            round_label: &m.round_label,
            group_id: m.group_id.map(|id| id.to_string()).unwrap_or_default(),
            home_team_id: m.home_team_id.to_string(),
            away_team_id: m.away_team_id.to_string(),
            match_date: m.match_date.format("%Y-%m-%d").to_string(),
            location: m.location.as_deref().unwrap_or(""),
            status: m.status.as_str(),
        }
    }
}

/// Write `matches` as CSV with a header row.
pub fn write_matches_csv<W: std::io::Write>(
    matches: &[GeneratedMatch],
    writer: W,
) -> Result<(), ScheduleError> {
    let mut csv = csv::Writer::from_writer(writer);
    for m in matches {
        csv.serialize(MatchRow::from(m))
            .map_err(|e| ScheduleError::Export(e.to_string()))?;
    }
    csv.flush().map_err(|e| ScheduleError::Export(e.to_string()))
}

/// CSV text for `matches`.
pub fn matches_to_csv(matches: &[GeneratedMatch]) -> Result<String, ScheduleError> {
    let mut buf = Vec::new();
    write_matches_csv(matches, &mut buf)?;
    String::from_utf8(buf).map_err(|e| ScheduleError::Export(e.to_string()))
}
