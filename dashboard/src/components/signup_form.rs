//! Signup form component

use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;
use shared::MutationPhase;

use crate::board::{use_board, BoardView};

#[component]
pub fn SignupForm(board_view: BoardView) -> impl IntoView {
    let board = use_board();
    let (email, set_email) = signal(String::new());
    let (activity, set_activity) = signal(String::new());
    let (phase, set_phase) = signal(MutationPhase::Idle);

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();

        let board = board.clone();
        let email_value = email.get_untracked();
        let activity_value = activity.get_untracked();
        set_phase.set(MutationPhase::InFlight);

        spawn_local(async move {
            let result = board.signup(&email_value, &activity_value).await;
            if result.is_ok() {
                set_email.set(String::new());
                set_activity.set(String::new());
            }
            set_phase.set(MutationPhase::settled(&result));
        });
    };

    view! {
        <section id="signup-container" class="card">
            <h2>"Sign Up for an Activity"</h2>
            <form id="signup-form" on:submit=on_submit>
                <div class="form-group">
                    <label for="email">"Student Email:"</label>
                    <input
                        type="email"
                        id="email"
                        placeholder="your-email@school.edu"
                        prop:value=move || email.get()
                        on:input=move |ev| set_email.set(event_target_value(&ev))
                    />
                </div>

                <div class="form-group">
                    <label for="activity">"Select Activity:"</label>
                    <select
                        id="activity"
                        prop:value=move || activity.get()
                        on:change=move |ev| set_activity.set(event_target_value(&ev))
                    >
                        <option value="">"-- Select an activity --"</option>
                        <For
                            each=move || board_view.options.get()
                            key=|name| name.clone()
                            children=move |name| {
                                let label = name.clone();
                                view! { <option value=name>{label}</option> }
                            }
                        />
                    </select>
                </div>

                <button type="submit">
                    {move || if phase.get().is_in_flight() {
                        view! { <span class="spinner"></span> " Signing up..." }.into_any()
                    } else {
                        view! { "Sign Up" }.into_any()
                    }}
                </button>
            </form>
        </section>
    }
}
