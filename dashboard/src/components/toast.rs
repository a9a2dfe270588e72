//! Transient notification banner

use leptos::prelude::*;

use crate::board::NoticeBoard;

#[component]
pub fn Toast(notices: NoticeBoard) -> impl IntoView {
    view! {
        <div id="message-area" aria-live="polite">
            {move || notices.current().map(|notice| view! {
                <div id="message" class=notice.kind.css_class()>
                    {notice.text}
                </div>
            })}
        </div>
    }
}
