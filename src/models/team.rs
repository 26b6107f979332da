//! Team as supplied by the registration subsystem.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a team.
pub type TeamId = Uuid;

/// An approved team entered in a tournament. Read-only to the schedule engine.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Team {
    pub id: TeamId,
    pub name: String,
    /// Inactive teams are skipped when a schedule is generated.
    #[serde(default = "default_active")]
    pub active: bool,
}

fn default_active() -> bool {
    true
}

impl Team {
    /// Create an active team with a fresh id.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            active: true,
        }
    }

    /// Same team, marked inactive.
    pub fn inactive(mut self) -> Self {
        self.active = false;
        self
    }
}
