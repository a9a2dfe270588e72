//! ==============================================================================
//! render.rs - renderer seam and the headless list view
//! ==============================================================================
//!
//! purpose:
//!     the mutation controller talks to the view only through `Renderer`.
//!     a full render happens on load; after a mutation only the capacity
//!     text and a single participant row are touched.
//!
//! relationships:
//!     - implemented by: dashboard (BoardView, leptos signals)
//!     - implemented by: ListView (plain data, used headless and in tests)
//!
//! ==============================================================================

use std::cell::RefCell;

use crate::error::RenderError;
use crate::model::{Capacity, Snapshot};

pub const LOADING_TEXT: &str = "Loading activities...";
pub const EMPTY_TEXT: &str = "No activities available.";
pub const LOAD_FAILED_TEXT: &str = "Could not load activities.";

// ==============================================================================
// renderer trait
// ==============================================================================

pub trait Renderer {
    /// rebuilds every card and the selection options
    fn render_all(&self, snapshot: &Snapshot);

    fn render_loading(&self);

    /// replaces the card area with a single error placeholder
    fn render_load_error(&self, message: &str);

    fn patch_capacity(&self, activity: &str, capacity: Capacity) -> Result<(), RenderError>;

    fn append_participant(&self, activity: &str, email: &str) -> Result<(), RenderError>;

    fn remove_participant_row(&self, activity: &str, email: &str) -> Result<(), RenderError>;
}

/// what the card area shows instead of cards
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Placeholder {
    Loading,
    Empty,
    LoadFailed(String),
}

impl Placeholder {
    pub fn text(&self) -> &str {
        match self {
            Placeholder::Loading => LOADING_TEXT,
            Placeholder::Empty => EMPTY_TEXT,
            Placeholder::LoadFailed(message) => message,
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            Placeholder::LoadFailed(_) => "error",
            _ => "placeholder",
        }
    }
}

/// badge letter for a participant row: first character, uppercased
pub fn badge_for(email: &str) -> String {
    email
        .chars()
        .next()
        .map(|c| c.to_uppercase().collect())
        .unwrap_or_default()
}

// ==============================================================================
// headless view
// ==============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParticipantRow {
    pub badge: String,
    pub email: String,
}

impl ParticipantRow {
    pub fn new(email: &str) -> Self {
        Self {
            badge: badge_for(email),
            email: email.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardView {
    pub name: String,
    pub description: String,
    pub schedule: String,
    pub capacity_text: String,
    pub rows: Vec<ParticipantRow>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListState {
    pub placeholder: Option<Placeholder>,
    pub cards: Vec<CardView>,
    pub options: Vec<String>,
}

/// plain-data renderer. every field of the real view has a counterpart
/// here, so two `ListState`s compare the way two rendered lists would.
#[derive(Debug, Default)]
pub struct ListView {
    state: RefCell<ListState>,
}

impl ListView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> ListState {
        self.state.borrow().clone()
    }

    fn with_card<R>(
        &self,
        activity: &str,
        f: impl FnOnce(&mut CardView) -> Result<R, RenderError>,
    ) -> Result<R, RenderError> {
        let mut state = self.state.borrow_mut();
        let card = state
            .cards
            .iter_mut()
            .find(|c| c.name == activity)
            .ok_or_else(|| RenderError::CardNotFound(activity.to_string()))?;
        f(card)
    }
}

impl Renderer for ListView {
    fn render_all(&self, snapshot: &Snapshot) {
        let mut state = self.state.borrow_mut();
        state.cards = snapshot
            .iter()
            .map(|activity| CardView {
                name: activity.name.clone(),
                description: activity.description.clone(),
                schedule: activity.schedule.clone(),
                capacity_text: activity.capacity().to_string(),
                rows: activity
                    .participants
                    .iter()
                    .map(|p| ParticipantRow::new(p))
                    .collect(),
            })
            .collect();
        state.options = snapshot.names().map(str::to_string).collect();
        state.placeholder = snapshot.is_empty().then_some(Placeholder::Empty);
    }

    fn render_loading(&self) {
        let mut state = self.state.borrow_mut();
        state.cards.clear();
        state.placeholder = Some(Placeholder::Loading);
    }

    fn render_load_error(&self, message: &str) {
        let mut state = self.state.borrow_mut();
        state.cards.clear();
        state.placeholder = Some(Placeholder::LoadFailed(message.to_string()));
    }

    fn patch_capacity(&self, activity: &str, capacity: Capacity) -> Result<(), RenderError> {
        self.with_card(activity, |card| {
            card.capacity_text = capacity.to_string();
            Ok(())
        })
    }

    fn append_participant(&self, activity: &str, email: &str) -> Result<(), RenderError> {
        self.with_card(activity, |card| {
            card.rows.push(ParticipantRow::new(email));
            Ok(())
        })
    }

    fn remove_participant_row(&self, activity: &str, email: &str) -> Result<(), RenderError> {
        self.with_card(activity, |card| {
            let index = card
                .rows
                .iter()
                .position(|row| row.email == email)
                .ok_or_else(|| RenderError::RowNotFound {
                    activity: activity.to_string(),
                    email: email.to_string(),
                })?;
            card.rows.remove(index);
            Ok(())
        })
    }
}

// ==============================================================================
// tests
// ==============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::chess_club;

    #[test]
    fn test_badge_is_uppercased_first_char() {
        assert_eq!(badge_for("alice@x.com"), "A");
        assert_eq!(badge_for("ñandu@x.com"), "Ñ");
        assert_eq!(badge_for(""), "");
    }

    #[test]
    fn test_render_all_builds_cards_and_options() {
        let view = ListView::new();
        view.render_all(&chess_club());

        let state = view.state();
        assert_eq!(state.placeholder, None);
        assert_eq!(state.cards.len(), 1);
        assert_eq!(state.options, vec!["Chess Club"]);

        let card = &state.cards[0];
        assert_eq!(card.capacity_text, "1 / 2");
        assert_eq!(card.schedule, "Mon");
        assert_eq!(card.rows, vec![ParticipantRow::new("a@x.com")]);
        assert_eq!(card.rows[0].badge, "A");
    }

    #[test]
    fn test_render_all_is_idempotent() {
        let view = ListView::new();
        view.render_all(&chess_club());
        let first = view.state();
        view.render_all(&chess_club());
        assert_eq!(view.state(), first);
    }

    #[test]
    fn test_render_all_empty_shows_placeholder() {
        let view = ListView::new();
        view.render_all(&chess_club());
        view.render_all(&Snapshot::new());

        let state = view.state();
        assert!(state.cards.is_empty());
        assert!(state.options.is_empty());
        assert_eq!(state.placeholder.unwrap().text(), EMPTY_TEXT);
    }

    #[test]
    fn test_load_error_replaces_cards() {
        let view = ListView::new();
        view.render_all(&chess_club());
        view.render_load_error(LOAD_FAILED_TEXT);

        let state = view.state();
        assert!(state.cards.is_empty());
        assert_eq!(
            state.placeholder,
            Some(Placeholder::LoadFailed(LOAD_FAILED_TEXT.to_string()))
        );
        assert_eq!(state.placeholder.unwrap().css_class(), "error");
    }

    #[test]
    fn test_patch_capacity_touches_only_that_card() {
        let view = ListView::new();
        view.render_all(&chess_club());

        view.patch_capacity("Chess Club", Capacity { current: 2, max: 2 })
            .unwrap();

        let card = &view.state().cards[0];
        assert_eq!(card.capacity_text, "2 / 2");
        assert_eq!(card.rows.len(), 1);
    }

    #[test]
    fn test_lookup_uses_exact_name() {
        let view = ListView::new();
        view.render_all(&chess_club());

        let err = view
            .append_participant("Chess Club\"]", "b@x.com")
            .unwrap_err();

        assert_eq!(err, RenderError::CardNotFound("Chess Club\"]".into()));
        assert_eq!(view.state().cards[0].rows.len(), 1);
    }

    #[test]
    fn test_remove_missing_row_fails() {
        let view = ListView::new();
        view.render_all(&chess_club());

        let err = view
            .remove_participant_row("Chess Club", "nobody@x.com")
            .unwrap_err();
        assert!(matches!(err, RenderError::RowNotFound { .. }));
    }
}
