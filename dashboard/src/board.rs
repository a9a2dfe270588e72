//! ==============================================================================
//! board.rs - reactive renderer and notice board
//! ==============================================================================
//!
//! purpose:
//! `BoardView` is the browser implementation of `shared::Renderer`.
//! every card carries its own capacity and participant signals, so a
//! signup or unregister only re-renders one capacity line and one row.
//!
//! `NoticeBoard` implements `shared::Notifier` on top of a NoticeSlot
//! and a dismissal timer.
//!
//! ==============================================================================

use std::sync::Arc;

use leptos::prelude::*;
use shared::{
    Activity, Capacity, MutationController, Notice, NoticeSlot, Notifier, Placeholder,
    RenderError, Renderer, Snapshot,
};

use crate::api::HttpTransport;

pub type Board = MutationController<HttpTransport, BoardView, NoticeBoard>;
pub type SharedBoard = Arc<Board>;

/// the controller provided at the app root
pub fn use_board() -> SharedBoard {
    expect_context::<SharedBoard>()
}

// ==============================================================================
// cards
// ==============================================================================

#[derive(Clone)]
pub struct CardHandle {
    /// bumped on every full render so keyed lists rebuild their cards
    pub revision: u64,
    pub name: String,
    pub description: String,
    pub schedule: String,
    pub capacity: ArcRwSignal<Capacity>,
    pub participants: ArcRwSignal<Vec<String>>,
}

impl CardHandle {
    fn new(revision: u64, activity: &Activity) -> Self {
        Self {
            revision,
            name: activity.name.clone(),
            description: activity.description.clone(),
            schedule: activity.schedule.clone(),
            capacity: ArcRwSignal::new(activity.capacity()),
            participants: ArcRwSignal::new(activity.participants.clone()),
        }
    }
}

/// `(email, nth occurrence)` per participant. a repeated email gets its own
/// key, and removing a row leaves the keys of unrelated rows unchanged.
pub fn participant_rows(participants: &[String]) -> Vec<(String, usize)> {
    participants
        .iter()
        .enumerate()
        .map(|(index, email)| {
            let seen = participants[..index].iter().filter(|p| *p == email).count();
            (email.clone(), seen)
        })
        .collect()
}

#[derive(Clone, Copy)]
pub struct BoardView {
    pub cards: RwSignal<Vec<CardHandle>>,
    pub options: RwSignal<Vec<String>>,
    pub placeholder: RwSignal<Option<Placeholder>>,
    revision: RwSignal<u64>,
}

impl BoardView {
    pub fn new() -> Self {
        Self {
            cards: RwSignal::new(Vec::new()),
            options: RwSignal::new(Vec::new()),
            placeholder: RwSignal::new(Some(Placeholder::Loading)),
            revision: RwSignal::new(0),
        }
    }

    fn card(&self, activity: &str) -> Result<CardHandle, RenderError> {
        self.cards
            .with_untracked(|cards| cards.iter().find(|c| c.name == activity).cloned())
            .ok_or_else(|| RenderError::CardNotFound(activity.to_string()))
    }
}

impl Default for BoardView {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderer for BoardView {
    fn render_all(&self, snapshot: &Snapshot) {
        let revision = self.revision.get_untracked() + 1;
        self.revision.set(revision);

        self.cards
            .set(snapshot.iter().map(|a| CardHandle::new(revision, a)).collect());
        self.options
            .set(snapshot.names().map(str::to_string).collect());
        self.placeholder
            .set(snapshot.is_empty().then_some(Placeholder::Empty));
    }

    fn render_loading(&self) {
        self.cards.set(Vec::new());
        self.placeholder.set(Some(Placeholder::Loading));
    }

    fn render_load_error(&self, message: &str) {
        self.cards.set(Vec::new());
        self.placeholder
            .set(Some(Placeholder::LoadFailed(message.to_string())));
    }

    fn patch_capacity(&self, activity: &str, capacity: Capacity) -> Result<(), RenderError> {
        self.card(activity)?.capacity.set(capacity);
        Ok(())
    }

    fn append_participant(&self, activity: &str, email: &str) -> Result<(), RenderError> {
        self.card(activity)?
            .participants
            .update(|rows| rows.push(email.to_string()));
        Ok(())
    }

    fn remove_participant_row(&self, activity: &str, email: &str) -> Result<(), RenderError> {
        let card = self.card(activity)?;
        let index = card
            .participants
            .with_untracked(|rows| rows.iter().position(|row| row == email))
            .ok_or_else(|| RenderError::RowNotFound {
                activity: activity.to_string(),
                email: email.to_string(),
            })?;
        card.participants.update(|rows| {
            rows.remove(index);
        });
        Ok(())
    }
}

// ==============================================================================
// notices
// ==============================================================================

#[derive(Clone, Copy)]
pub struct NoticeBoard {
    slot: RwSignal<NoticeSlot>,
    dismiss_ms: u32,
}

impl NoticeBoard {
    pub fn new(dismiss_ms: u32) -> Self {
        Self {
            slot: RwSignal::new(NoticeSlot::default()),
            dismiss_ms,
        }
    }

    pub fn current(&self) -> Option<Notice> {
        self.slot.with(|slot| slot.current().cloned())
    }
}

impl Notifier for NoticeBoard {
    fn notify(&self, notice: Notice) {
        let mut generation = 0;
        self.slot.update(|slot| generation = slot.show(notice));

        let slot = self.slot;
        schedule_dismiss(self.dismiss_ms, move || {
            slot.try_update(|slot| slot.dismiss(generation));
        });
    }
}

#[cfg(target_arch = "wasm32")]
fn schedule_dismiss(delay_ms: u32, dismiss: impl FnOnce() + 'static) {
    gloo_timers::callback::Timeout::new(delay_ms, dismiss).forget();
}

// no event loop to time against off the browser; notices stay up
#[cfg(not(target_arch = "wasm32"))]
fn schedule_dismiss(_delay_ms: u32, _dismiss: impl FnOnce() + 'static) {}

// ==============================================================================
// tests
// ==============================================================================
