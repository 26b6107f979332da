//! Group distribution: split a team list into balanced, labelled groups.

use crate::config::ScheduleSettings;
use crate::models::{Group, Team};
use rand::seq::SliceRandom;
use rand::{Rng, RngCore};
use uuid::Builder;

/// Shuffle `teams` and split them into `settings.group_count_for(n)` groups labelled A, B, C, ...
///
/// Sizes differ by at most one: the first `n % g` groups get the extra team.
/// Empty groups are dropped, so `n == 0` yields no groups.
pub fn distribute_into_groups(
    teams: &[Team],
    settings: &ScheduleSettings,
    rng: &mut dyn RngCore,
) -> Vec<Group> {
    let group_count = settings.group_count_for(teams.len());
    let mut shuffled = teams.to_vec();
    shuffled.shuffle(rng);
    let groups = partition(shuffled, group_count, rng);
    log::debug!(
        "Distributed {} teams into {} group(s): sizes {:?}",
        teams.len(),
        groups.len(),
        groups.iter().map(|g| g.teams.len()).collect::<Vec<_>>()
    );
    groups
}

/// Split an already-ordered list into `group_count` contiguous, balanced groups.
pub fn partition(teams: Vec<Team>, group_count: usize, rng: &mut dyn RngCore) -> Vec<Group> {
    let group_count = group_count.max(1);
    let base = teams.len() / group_count;
    let extra = teams.len() % group_count;

    let mut remaining = teams.into_iter();
    let mut groups = Vec::with_capacity(group_count);
    for index in 0..group_count {
        let size = base + usize::from(index < extra);
        let members: Vec<Team> = remaining.by_ref().take(size).collect();
        if members.is_empty() {
            continue;
        }
        groups.push(Group {
            id: Builder::from_random_bytes(rng.gen()).into_uuid(),
            label: group_label(index),
            teams: members,
        });
    }
    groups
}

/// "A" for 0, "B" for 1, ... then "AA", "AB" past "Z".
pub fn group_label(index: usize) -> String {
    let letter = (b'A' + (index % 26) as u8) as char;
    if index < 26 {
        letter.to_string()
    } else {
        format!("{}{}", group_label(index / 26 - 1), letter)
    }
}
