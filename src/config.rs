//! Engine settings and web server settings, read from environment variables with defaults.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Tunable constants of the schedule engine.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScheduleSettings {
    /// Days between consecutive round-robin match dates.
    pub match_interval_days: i64,
    /// Days between elimination rounds.
    pub round_interval_days: i64,
    /// Matches played per day, for duration estimates.
    pub matches_per_day: usize,
    /// Qualifiers per group when the tournament does not set one.
    pub default_qualifiers_per_group: usize,
    /// Team counts at or below this stay in a single group.
    pub single_group_limit: usize,
}

impl Default for ScheduleSettings {
    fn default() -> Self {
        Self {
            match_interval_days: 2,
            round_interval_days: 7,
            matches_per_day: 2,
            default_qualifiers_per_group: 2,
            single_group_limit: 8,
        }
    }
}

impl ScheduleSettings {
    /// Defaults overridden by `SCHEDULE_*` env vars. Unparsable values keep the default.
    pub fn from_env() -> Self {
        let d = Self::default();
        Self {
            match_interval_days: env_or("SCHEDULE_MATCH_INTERVAL_DAYS", d.match_interval_days),
            round_interval_days: env_or("SCHEDULE_ROUND_INTERVAL_DAYS", d.round_interval_days),
            matches_per_day: env_or("SCHEDULE_MATCHES_PER_DAY", d.matches_per_day).max(1),
            default_qualifiers_per_group: env_or(
                "SCHEDULE_DEFAULT_QUALIFIERS",
                d.default_qualifiers_per_group,
            ),
            single_group_limit: d.single_group_limit,
        }
    }

    /// Number of groups for `n` teams: ≤limit → 1, up to 16 → 4, up to 24 → 6, else 8.
    pub fn group_count_for(&self, n: usize) -> usize {
        match n {
            n if n <= self.single_group_limit => 1,
            n if n <= 16 => 4,
            n if n <= 24 => 6,
            _ => 8,
        }
    }
}

/// Bind address of the web adapter.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
        }
    }
}

impl ServerConfig {
    /// Override with env: HOST (e.g. 0.0.0.0), PORT (e.g. 8080).
    pub fn from_env() -> Self {
        let d = Self::default();
        Self {
            host: std::env::var("HOST").unwrap_or(d.host),
            port: env_or("PORT", d.port),
        }
    }
}

fn env_or<T: FromStr>(key: &str, default: T) -> T {
    match std::env::var(key) {
        Ok(raw) => raw.trim().parse().unwrap_or_else(|_| {
            log::warn!("Ignoring unparsable {}={:?}", key, raw);
            default
        }),
        Err(_) => default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn group_policy_thresholds() {
        let s = ScheduleSettings::default();
        assert_eq!(s.group_count_for(0), 1);
        assert_eq!(s.group_count_for(8), 1);
        assert_eq!(s.group_count_for(9), 4);
        assert_eq!(s.group_count_for(16), 4);
        assert_eq!(s.group_count_for(17), 6);
        assert_eq!(s.group_count_for(24), 6);
        assert_eq!(s.group_count_for(25), 8);
        assert_eq!(s.group_count_for(64), 8);
    }

    #[test]
    fn partial_settings_fill_defaults() {
        let s: ScheduleSettings = serde_json::from_str(r#"{"round_interval_days":3}"#).unwrap();
        assert_eq!(s.round_interval_days, 3);
        assert_eq!(s.match_interval_days, 2);
    }
}
