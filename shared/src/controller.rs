//! ==============================================================================
//! controller.rs - mutation controller
//! ==============================================================================
//!
//! purpose:
//!     owns the state store and drives the renderer. every operation either
//!     applies completely (store + view + notice) or not at all.
//!
//! flow:
//!     user action -> backend call -> on success: store patch, view patch,
//!     notice. on failure: notice only, store and view untouched.
//!
//! the store is never locked across an `.await`, so two operations started
//! back to back each see the state the other left behind. the predicted
//! patch is never reconciled against the server.
//!
//! ==============================================================================

use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::client::{ActivitiesClient, Transport};
use crate::error::{ClientError, MissingField, RenderError};
use crate::model::Snapshot;
use crate::notice::{Notice, Notifier};
use crate::render::{Renderer, LOAD_FAILED_TEXT};
use crate::store::StateStore;

pub const SIGNUP_FAILED_TEXT: &str = "Could not sign up";
pub const UNREGISTER_FAILED_TEXT: &str = "Could not unregister";

// ==============================================================================
// mutation phase
// ==============================================================================

/// idle -> in-flight -> {applied, rejected}
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MutationPhase {
    #[default]
    Idle,
    InFlight,
    Applied,
    Rejected,
}

impl MutationPhase {
    pub fn settled<T>(result: &Result<T, ClientError>) -> Self {
        match result {
            Ok(_) => MutationPhase::Applied,
            Err(_) => MutationPhase::Rejected,
        }
    }

    pub fn is_in_flight(&self) -> bool {
        matches!(self, MutationPhase::InFlight)
    }
}

// ==============================================================================
// controller
// ==============================================================================

pub struct MutationController<T, R, N> {
    client: ActivitiesClient<T>,
    store: Mutex<StateStore>,
    renderer: R,
    notifier: N,
}

impl<T, R, N> MutationController<T, R, N>
where
    T: Transport,
    R: Renderer,
    N: Notifier,
{
    pub fn new(client: ActivitiesClient<T>, renderer: R, notifier: N) -> Self {
        Self {
            client,
            store: Mutex::new(StateStore::new()),
            renderer,
            notifier,
        }
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    pub fn client(&self) -> &ActivitiesClient<T> {
        &self.client
    }

    /// copy of the current state
    pub fn snapshot(&self) -> Snapshot {
        self.store().snapshot().clone()
    }

    fn store(&self) -> MutexGuard<'_, StateStore> {
        self.store.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// fetches and renders the full list. returns the number of activities.
    pub async fn load_activities(&self) -> Result<usize, ClientError> {
        self.renderer.render_loading();

        let snapshot = match self.client.fetch_activities().await {
            Ok(snapshot) => snapshot,
            Err(err) => {
                tracing::error!(error = %err, "failed to load activities");
                self.renderer.render_load_error(LOAD_FAILED_TEXT);
                return Err(err);
            }
        };

        let mut store = self.store();
        store.load(snapshot);
        self.renderer.render_all(store.snapshot());
        let count = store.snapshot().len();
        tracing::info!(count, "activities loaded");
        Ok(count)
    }

    pub async fn signup(&self, email: &str, activity: &str) -> Result<(), ClientError> {
        let email = email.trim();
        if let Err(err) = require_input(email, activity) {
            tracing::warn!(error = %err, "signup not sent");
            self.notifier.notify(Notice::error(err.user_message(SIGNUP_FAILED_TEXT)));
            return Err(err);
        }

        if let Err(err) = self.client.signup(activity, email).await {
            tracing::warn!(error = %err, activity, email, "signup rejected");
            self.notifier.notify(Notice::error(err.user_message(SIGNUP_FAILED_TEXT)));
            return Err(err);
        }

        let capacity = self.store().add_participant(activity, email);
        match capacity {
            Some(capacity) => {
                self.report(self.renderer.append_participant(activity, email));
                self.report(self.renderer.patch_capacity(activity, capacity));
            }
            None => tracing::debug!(activity, "signed up for an activity not in the snapshot"),
        }

        tracing::info!(activity, email, "signup applied");
        self.notifier
            .notify(Notice::success(format!("Signed up {} for \"{}\"", email, activity)));
        Ok(())
    }

    pub async fn unregister(&self, email: &str, activity: &str) -> Result<(), ClientError> {
        if let Err(err) = self.client.unregister(activity, email).await {
            tracing::warn!(error = %err, activity, email, "unregister rejected");
            self.notifier.notify(Notice::error(err.user_message(UNREGISTER_FAILED_TEXT)));
            return Err(err);
        }

        let capacity = self.store().remove_participant(activity, email);
        match capacity {
            Some(capacity) => {
                self.report(self.renderer.remove_participant_row(activity, email));
                self.report(self.renderer.patch_capacity(activity, capacity));
            }
            None => tracing::debug!(activity, email, "unregistered someone not in the snapshot"),
        }

        tracing::info!(activity, email, "unregister applied");
        self.notifier
            .notify(Notice::info(format!("Unregistered {} from \"{}\"", email, activity)));
        Ok(())
    }

    fn report(&self, result: Result<(), RenderError>) {
        if let Err(err) = result {
            tracing::error!(error = %err, "view out of sync with state");
        }
    }
}

fn require_input(email: &str, activity: &str) -> Result<(), ClientError> {
    if email.is_empty() {
        return Err(ClientError::MissingInput(MissingField::Email));
    }
    if activity.is_empty() {
        return Err(ClientError::MissingInput(MissingField::Activity));
    }
    Ok(())
}

// ==============================================================================
// tests
// ==============================================================================
