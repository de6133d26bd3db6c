//! In-memory store for the workouts of the current session.

use chrono::{DateTime, Local};

use crate::models::{WorkoutId, WorkoutRecord};

#[derive(Debug)]
pub struct SessionStore {
    workouts: Vec<WorkoutRecord>,
    next_id: u64,
    started_at: DateTime<Local>,
}

impl SessionStore {
    pub fn new() -> Self {
        SessionStore {
            workouts: Vec::new(),
            next_id: 1,
            started_at: Local::now(),
        }
    }

    /// Workouts in the order they were added.
    pub fn workouts(&self) -> &[WorkoutRecord] {
        &self.workouts
    }

    pub fn len(&self) -> usize {
        self.workouts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.workouts.is_empty()
    }

    pub fn started_at(&self) -> DateTime<Local> {
        self.started_at
    }

    /// Hands out a fresh id. Ids are never reused within a session.
    pub fn next_id(&mut self) -> WorkoutId {
        let id = WorkoutId::from_raw(self.next_id);
        self.next_id += 1;
        id
    }

    pub fn add_workout(&mut self, record: WorkoutRecord) {
        tracing::debug!(id = %record.id, total = self.workouts.len() + 1, "workout appended");
        self.workouts.push(record);
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}
