//! Christmas Countdown Component
//!
//! Recomputes the remaining time from the wall clock on every tick.

use chrono::Local;
use gloo_timers::callback::Interval;
use leptos::prelude::*;
use wish_core::{countdown_until_christmas, Countdown};

fn time_left() -> Countdown {
    countdown_until_christmas(&Local::now())
}

/// Days/hours/minutes/seconds until Christmas
#[component]
pub fn ChristmasCountdown(tick_ms: u32) -> impl IntoView {
    let (remaining, set_remaining) = signal(time_left());

    // Dropping an Interval cancels it; the stored value is dropped with this
    // component's owner
    let interval = Interval::new(tick_ms, move || set_remaining.set(time_left()));
    let _interval = StoredValue::new_local(interval);

    view! {
        <div class="countdown-container">
            <h2 class="countdown-title">"🎄 Christmas Countdown 🎄"</h2>
            <div class="countdown-boxes">
                <CountdownBox value=Signal::derive(move || remaining.get().days) label="Days" />
                <CountdownBox value=Signal::derive(move || remaining.get().hours) label="Hours" />
                <CountdownBox value=Signal::derive(move || remaining.get().minutes) label="Minutes" />
                <CountdownBox value=Signal::derive(move || remaining.get().seconds) label="Seconds" />
            </div>
        </div>
    }
}

#[component]
fn CountdownBox(value: Signal<i64>, label: &'static str) -> impl IntoView {
    view! {
        <div class="countdown-box">
            <span class="countdown-number">{move || value.get()}</span>
            <span class="countdown-label">{label}</span>
        </div>
    }
}
