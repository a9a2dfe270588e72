//! ==============================================================================
//! store.rs - state store
//! ==============================================================================
//!
//! purpose:
//!     client-side mirror of the backend's activities. never talks to the
//!     network; the controller patches it after a confirmed mutation.
//!
//! ==============================================================================

use crate::model::{Activity, Capacity, Snapshot};

/// the last-fetched snapshot
#[derive(Debug, Default)]
pub struct StateStore {
    snapshot: Snapshot,
}

impl StateStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// replaces the whole state
    pub fn load(&mut self, snapshot: Snapshot) {
        self.snapshot = snapshot;
    }

    /// appends `email` to the roster and returns the new capacity.
    /// `None` for an activity this snapshot has not seen yet.
    pub fn add_participant(&mut self, activity: &str, email: &str) -> Option<Capacity> {
        let entry = self.snapshot.get_mut(activity)?;
        entry.participants.push(email.to_string());
        Some(entry.capacity())
    }

    /// removes the first occurrence of `email`. `None` when either the
    /// activity or the email is absent.
    pub fn remove_participant(&mut self, activity: &str, email: &str) -> Option<Capacity> {
        let entry = self.snapshot.get_mut(activity)?;
        let index = entry.participants.iter().position(|p| p == email)?;
        entry.participants.remove(index);
        Some(entry.capacity())
    }

    pub fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }

    pub fn get(&self, activity: &str) -> Option<&Activity> {
        self.snapshot.get(activity)
    }

    pub fn capacity(&self, activity: &str) -> Option<Capacity> {
        self.snapshot.get(activity).map(Activity::capacity)
    }
}
