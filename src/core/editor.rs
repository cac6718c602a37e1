//! Day-editor session.
//!
//! A small state machine over the selected day: closed until a day is
//! selected, then open with a string edit buffer seeded from the stored
//! record (or goal defaults for an empty day), and closed again on save,
//! clear, or explicit close.

use chrono::NaiveDate;

use super::record::{date_key, WellnessRecord, DEFAULT_STEPS_GOAL, DEFAULT_WATER_GOAL};
use crate::storage::WellnessStore;

/// String-valued edit fields for the open day.
///
/// Fields are coerced to numbers on save; non-numeric actuals fall back
/// to zero and non-numeric goals to the defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditBuffer {
    /// Steps walked.
    pub steps: String,
    /// Step goal.
    pub steps_goal: String,
    /// Water drunk, in liters.
    pub water: String,
    /// Water goal, in liters.
    pub water_goal: String,
}

impl EditBuffer {
    /// Seed a buffer from an existing record.
    #[must_use]
    pub fn from_record(record: &WellnessRecord) -> Self {
        Self {
            steps: record.steps.to_string(),
            steps_goal: record.steps_goal.to_string(),
            water: record.water.to_string(),
            water_goal: record.water_goal.to_string(),
        }
    }

    /// Coerce the buffer into a record.
    #[must_use]
    pub fn to_record(&self) -> WellnessRecord {
        WellnessRecord {
            steps: self.steps.trim().parse().unwrap_or(0),
            steps_goal: self.steps_goal.trim().parse().unwrap_or(DEFAULT_STEPS_GOAL),
            water: self.water.trim().parse().unwrap_or(0.0),
            water_goal: self.water_goal.trim().parse().unwrap_or(DEFAULT_WATER_GOAL),
        }
    }
}

/// Editor state: no day selected, or one day open for editing.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum EditorSession {
    /// No day selected.
    #[default]
    Closed,
    /// A day is selected and its buffer populated.
    Open {
        /// The selected day.
        date: NaiveDate,
        /// The editable field values.
        buffer: EditBuffer,
    },
}

impl EditorSession {
    /// Create a closed session.
    #[must_use]
    pub const fn new() -> Self {
        Self::Closed
    }

    /// Whether a day is currently selected.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        matches!(self, Self::Open { .. })
    }

    /// The selected day, if any.
    #[must_use]
    pub const fn selected_date(&self) -> Option<NaiveDate> {
        match self {
            Self::Open { date, .. } => Some(*date),
            Self::Closed => None,
        }
    }

    /// Select a day, seeding the buffer from the store or from the
    /// built-in goal defaults.
    pub fn select(&mut self, date: NaiveDate, store: &WellnessStore) {
        self.select_with_defaults(date, store, &WellnessRecord::default());
    }

    /// Select a day, seeding an empty day from the given defaults
    /// (typically the configured goals with zero actuals).
    pub fn select_with_defaults(
        &mut self,
        date: NaiveDate,
        store: &WellnessStore,
        defaults: &WellnessRecord,
    ) {
        let seed = store.get(&date_key(date)).unwrap_or(defaults);
        *self = Self::Open {
            date,
            buffer: EditBuffer::from_record(seed),
        };
    }

    /// Mutable access to the open buffer.
    pub fn buffer_mut(&mut self) -> Option<&mut EditBuffer> {
        match self {
            Self::Open { buffer, .. } => Some(buffer),
            Self::Closed => None,
        }
    }

    /// Read access to the open buffer.
    #[must_use]
    pub const fn buffer(&self) -> Option<&EditBuffer> {
        match self {
            Self::Open { buffer, .. } => Some(buffer),
            Self::Closed => None,
        }
    }

    /// Coerce the buffer, write the record, persist, and close.
    ///
    /// Returns the saved record, or `None` when no day was selected.
    pub fn save(&mut self, store: &mut WellnessStore) -> Option<WellnessRecord> {
        let Self::Open { date, buffer } = std::mem::take(self) else {
            return None;
        };
        let record = buffer.to_record();
        store.set(date_key(date), record.clone());
        store.persist();
        Some(record)
    }

    /// Remove any stored record for the selected day, persist, and close.
    ///
    /// Returns whether a record was removed; clearing a day with no entry
    /// is a no-op.
    pub fn clear(&mut self, store: &mut WellnessStore) -> bool {
        let Self::Open { date, .. } = std::mem::take(self) else {
            return false;
        };
        let removed = store.remove(&date_key(date));
        store.persist();
        removed
    }

    /// Close without saving.
    pub fn close(&mut self) {
        *self = Self::Closed;
    }
}
