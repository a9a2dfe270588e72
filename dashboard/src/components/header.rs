//! Header component

use leptos::prelude::*;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="header">
            <div>
                <h1>"Extracurricular Activities"</h1>
                <p class="subtitle">"Browse activities and sign up with your school email"</p>
            </div>
        </header>
    }
}
