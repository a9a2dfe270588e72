//! ==============================================================================
//! lib.rs - Activity Signup Dashboard
//! ==============================================================================
//!
//! purpose:
//!     leptos wasm widget that lists activities, signs students up by email
//!     and lets an organizer unregister a participant.
//!
//! architecture:
//!     - leptos csr (client-side rendering)
//!     - compiled to wasm, runs in browser
//!     - calls the activities backend via fetch (gloo-net)
//!     - state and mutation logic live in the `shared` crate; this crate
//!       supplies the transport, the reactive renderer and the notices
//!
//! ==============================================================================

use std::sync::Arc;

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_meta::{provide_meta_context, Title};
use shared::{ActivitiesClient, MutationController};
use wasm_bindgen::prelude::*;

mod api;
mod board;
mod components;
mod config;
mod logging;

use api::HttpTransport;
use board::{BoardView, NoticeBoard, SharedBoard};
use components::{ActivityList, Header, SignupForm, Toast};

// ==============================================================================
// main entry point
// ==============================================================================

#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    logging::init();
    mount_to_body(App);
}

// ==============================================================================
// app component
// ==============================================================================

#[component]
fn App() -> impl IntoView {
    provide_meta_context();

    let config = config::client_config();
    let view = BoardView::new();
    let notices = NoticeBoard::new(config.notice_dismiss_ms);

    let board: SharedBoard = Arc::new(MutationController::new(
        ActivitiesClient::new(HttpTransport, config.base_url),
        view,
        notices,
    ));
    provide_context(board.clone());

    // fetch activities on mount
    Effect::new(move || {
        let board = board.clone();
        spawn_local(async move {
            // failures already rendered inline and logged
            let _ = board.load_activities().await;
        });
    });

    view! {
        <Title text="Extracurricular Activities" />
        <Header />
        <main class="container">
            <ActivityList board=view />
            <SignupForm board_view=view />
            <Toast notices=notices />
        </main>
    }
}
