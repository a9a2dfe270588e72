//! Activity cards and participant rows

use leptos::prelude::*;
use leptos::task::spawn_local;
use shared::{badge_for, MutationPhase};

use crate::board::{participant_rows, use_board, BoardView, CardHandle};

#[component]
pub fn ActivityList(board: BoardView) -> impl IntoView {
    view! {
        <section id="activities-container" class="card">
            <h2>"Available Activities"</h2>
            <div id="activities-list">
                // loading / empty / error placeholder
                {move || board.placeholder.get().map(|placeholder| view! {
                    <p class=placeholder.css_class()>{placeholder.text().to_string()}</p>
                })}

                <For
                    each=move || board.cards.get()
                    key=|card| (card.revision, card.name.clone())
                    children=move |card| view! { <ActivityCard card=card /> }
                />
            </div>
        </section>
    }
}

#[component]
fn ActivityCard(card: CardHandle) -> impl IntoView {
    let CardHandle {
        name,
        description,
        schedule,
        capacity,
        participants,
        ..
    } = card;
    let activity = name.clone();

    view! {
        <div class="activity-card" data-activity=name.clone()>
            <h4>{name.clone()}</h4>
            <p>{description}</p>
            <p><strong>"Schedule: "</strong>{schedule}</p>
            <p class="capacity">
                <strong>"Capacity: "</strong>
                {move || capacity.get().to_string()}
            </p>

            <div class="participants-section">
                <h5>"Participants:"</h5>
                <ul class="participants-list">
                    <For
                        each=move || participant_rows(&participants.get())
                        key=|row| row.clone()
                        children=move |(email, _)| view! {
                            <ParticipantItem activity=activity.clone() email=email />
                        }
                    />
                </ul>
            </div>
        </div>
    }
}

#[component]
fn ParticipantItem(activity: String, email: String) -> impl IntoView {
    let board = use_board();
    let (phase, set_phase) = signal(MutationPhase::Idle);
    let badge = badge_for(&email);
    let title = format!("Unregister {}", email);

    let unregister = {
        let email = email.clone();
        move |_| {
            let board = board.clone();
            let email = email.clone();
            let activity = activity.clone();
            set_phase.set(MutationPhase::InFlight);

            spawn_local(async move {
                let result = board.unregister(&email, &activity).await;
                // an applied unregister disposes this row along with the signal
                set_phase.try_set(MutationPhase::settled(&result));
            });
        }
    };

    view! {
        <li>
            <span class="participant-badge">{badge}</span>
            <span class="participant-email">{email}</span>
            <button
                class="unregister-btn"
                title=title
                disabled=move || phase.get().is_in_flight()
                on:click=unregister
            >
                "✕"
            </button>
        </li>
    }
}
