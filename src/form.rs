//! Draft state and submission for the new-workout form.
//!
//! The draft holds raw input text until a single atomic commit into the
//! [`SessionStore`]. Validation only checks that every field is filled in.

use std::collections::BTreeSet;

use crate::config::FormDefaults;
use crate::models::{WorkoutId, WorkoutRecord};
use crate::session::SessionStore;

/// Form inputs, in validation order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Name,
    Sets,
    Reps,
    Weight,
}

impl Field {
    pub const ORDER: [Field; 4] = [Field::Name, Field::Sets, Field::Reps, Field::Weight];

    pub fn label(self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::Sets => "Sets",
            Field::Reps => "Reps",
            Field::Weight => "Weight",
        }
    }

    pub fn is_numeric(self) -> bool {
        !matches!(self, Field::Name)
    }

    /// Empty text, or a numeric field that is zero or not a number.
    pub fn is_blank(self, value: &str) -> bool {
        if value.is_empty() {
            return true;
        }
        self.is_numeric() && value.parse::<f64>().map_or(true, |n| n == 0.0)
    }
}

/// Keeps only what a numeric input would accept.
pub fn sanitize_numeric(input: &str) -> String {
    input.chars().filter(|c| c.is_ascii_digit() || *c == '.').collect()
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WorkoutDraft {
    pub name: String,
    pub sets: String,
    pub reps: String,
    pub weight: String,
}

impl WorkoutDraft {
    pub fn from_defaults(defaults: &FormDefaults) -> Self {
        WorkoutDraft {
            name: defaults.name.clone(),
            sets: defaults.sets.clone(),
            reps: defaults.reps.clone(),
            weight: defaults.weight.clone(),
        }
    }

    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Sets => &self.sets,
            Field::Reps => &self.reps,
            Field::Weight => &self.weight,
        }
    }

    pub fn value_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::Name => &mut self.name,
            Field::Sets => &mut self.sets,
            Field::Reps => &mut self.reps,
            Field::Weight => &mut self.weight,
        }
    }

    /// Blank fields, in validation order.
    pub fn blank_fields(&self) -> BTreeSet<Field> {
        Field::ORDER
            .into_iter()
            .filter(|field| field.is_blank(self.value(*field)))
            .collect()
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    Committed(WorkoutId),
    Rejected { focus: Field, invalid: BTreeSet<Field> },
}

#[derive(Debug)]
pub struct NewWorkoutForm {
    draft: WorkoutDraft,
    invalid: BTreeSet<Field>,
    validated: bool,
    focus_request: Option<Field>,
}

impl NewWorkoutForm {
    pub fn new(defaults: &FormDefaults) -> Self {
        NewWorkoutForm {
            draft: WorkoutDraft::from_defaults(defaults),
            invalid: BTreeSet::new(),
            validated: false,
            // weight is the one field that starts out empty
            focus_request: Some(Field::Weight),
        }
    }

    pub fn draft(&self) -> &WorkoutDraft {
        &self.draft
    }

    /// Replaces a field's text. Numeric fields drop non-numeric characters.
    ///
    /// Once a submit has been rejected, the field's error state follows its
    /// new value.
    pub fn set_field(&mut self, field: Field, value: &str) {
        let value = if field.is_numeric() { sanitize_numeric(value) } else { value.to_string() };
        *self.draft.value_mut(field) = value;
        self.revalidate(field);
    }

    fn revalidate(&mut self, field: Field) {
        if !self.validated {
            return;
        }
        if field.is_blank(self.draft.value(field)) {
            self.invalid.insert(field);
        } else {
            self.invalid.remove(&field);
        }
    }

    pub fn has_error(&self, field: Field) -> bool {
        self.invalid.contains(&field)
    }

    pub fn invalid_fields(&self) -> &BTreeSet<Field> {
        &self.invalid
    }

    /// The field that should grab keyboard focus next frame, if any.
    pub fn take_focus_request(&mut self) -> Option<Field> {
        self.focus_request.take()
    }

    /// Validates the draft and, if every field is filled in, appends exactly
    /// one record to `store`. On rejection the store is untouched and focus
    /// moves to the first blank field.
    pub fn submit(&mut self, store: &mut SessionStore) -> SubmitOutcome {
        self.validated = true;
        self.invalid = self.draft.blank_fields();

        if let Some(&focus) = self.invalid.iter().next() {
            self.focus_request = Some(focus);
            tracing::info!(?focus, invalid = ?self.invalid, "new workout rejected");
            return SubmitOutcome::Rejected { focus, invalid: self.invalid.clone() };
        }

        let id = store.next_id();
        let draft = &self.draft;
        let record = WorkoutRecord::new(id, &draft.name, &draft.sets, &draft.reps, &draft.weight);
        match serde_json::to_string(&record) {
            Ok(json) => tracing::info!(%id, record = %json, "workout added"),
            Err(e) => tracing::info!(%id, error = %e, "workout added"),
        }
        store.add_workout(record);
        SubmitOutcome::Committed(id)
    }
}
