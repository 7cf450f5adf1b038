//! Page Header Component

use leptos::prelude::*;

const ORNAMENTS: &[&str] = &["🔔", "⭐", "🎁", "🦌", "🔔"];

/// Title block with Santa hat and ornaments
#[component]
pub fn PageHeader(title: String, subtitle: String) -> impl IntoView {
    view! {
        <header class="header">
            <div class="santa-hat">"🎅"</div>
            <h1 class="title">
                <span class="title-icon">"🎄"</span>
                {title}
                <span class="title-icon">"🎄"</span>
            </h1>
            <p class="subtitle">{subtitle}</p>
            <div class="ornaments">
                {ORNAMENTS
                    .iter()
                    .map(|o| view! { <span class="ornament">{*o}</span> })
                    .collect_view()}
            </div>
        </header>
    }
}
