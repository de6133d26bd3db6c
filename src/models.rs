//models.rs
use std::fmt;

use chrono::{DateTime, Local};
use serde::Serialize;

/// Opaque handle for a workout, handed out by the session store.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct WorkoutId(u64);

impl WorkoutId {
    pub(crate) fn from_raw(raw: u64) -> Self {
        WorkoutId(raw)
    }
}

impl fmt::Display for WorkoutId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "workout-{}", self.0)
    }
}

/// One exercise tracked in the current session.
///
/// `sets`, `reps` and `weight` hold the text exactly as it was entered.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct WorkoutRecord {
    pub id: WorkoutId,
    pub display: String,
    pub sets: String,
    pub reps: String,
    pub weight: String,
    #[serde(skip)]
    pub added_at: DateTime<Local>,
}

impl WorkoutRecord {
    pub fn new(id: WorkoutId, display: &str, sets: &str, reps: &str, weight: &str) -> Self {
        WorkoutRecord {
            id,
            display: display.to_string(),
            sets: sets.to_string(),
            reps: reps.to_string(),
            weight: weight.to_string(),
            added_at: Local::now(),
        }
    }
}
