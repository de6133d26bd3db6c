//! What the session list shows, independent of how it is drawn.

use crate::models::WorkoutId;
use crate::session::SessionStore;

pub const EMPTY_MESSAGE: &str = "It's pretty empty in here";

#[derive(Clone, Debug, PartialEq)]
pub struct WorkoutCard {
    pub id: WorkoutId,
    pub display: String,
    pub sets: String,
    pub reps: String,
    pub weight: String,
    pub added_at: String,
}

#[derive(Clone, Debug, PartialEq)]
pub enum SessionListView {
    Cards(Vec<WorkoutCard>),
    /// No workouts yet and nothing being created.
    Empty,
    /// No workouts yet, but the new-workout form is open.
    Nothing,
}

impl SessionListView {
    pub fn project(store: &SessionStore, creating: bool) -> Self {
        if store.is_empty() {
            return if creating { SessionListView::Nothing } else { SessionListView::Empty };
        }

        let cards = store
            .workouts()
            .iter()
            .map(|workout| WorkoutCard {
                id: workout.id,
                display: workout.display.clone(),
                sets: workout.sets.clone(),
                reps: workout.reps.clone(),
                weight: workout.weight.clone(),
                added_at: workout.added_at.format("%H:%M").to_string(),
            })
            .collect();
        SessionListView::Cards(cards)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::WorkoutRecord;

    fn store_with(entries: &[(&str, &str, &str, &str)]) -> SessionStore {
        let mut store = SessionStore::new();
        for (name, sets, reps, weight) in entries {
            let id = store.next_id();
            store.add_workout(WorkoutRecord::new(id, name, sets, reps, weight));
        }
        store
    }

    #[test]
    fn empty_store_shows_message() {
        let store = SessionStore::new();
        let view = SessionListView::project(&store, false);
        assert_eq!(view, SessionListView::Empty);
    }

    #[test]
    fn empty_store_while_creating_hides_message() {
        let store = SessionStore::new();
        let view = SessionListView::project(&store, true);
        assert_eq!(view, SessionListView::Nothing);
    }

    #[test]
    fn one_card_per_workout_in_store_order() {
        let store = store_with(&[
            ("Squat", "5", "5", "225"),
            ("Bench", "3", "8", "155"),
            ("Row", "4", "10", ""),
        ]);

        for creating in [false, true] {
            let SessionListView::Cards(cards) = SessionListView::project(&store, creating) else {
                panic!("expected cards");
            };
            assert_eq!(cards.len(), store.len());
            for (card, workout) in cards.iter().zip(store.workouts()) {
                assert_eq!(card.id, workout.id);
                assert_eq!(card.display, workout.display);
                assert_eq!(card.sets, workout.sets);
                assert_eq!(card.reps, workout.reps);
                assert_eq!(card.weight, workout.weight);
            }
        }
    }

    #[test]
    fn any_workout_removes_empty_message() {
        let store = store_with(&[("Deadlift", "1", "5", "315")]);
        assert!(matches!(SessionListView::project(&store, false), SessionListView::Cards(_)));
    }
}
