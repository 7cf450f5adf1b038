//! Decorations
//!
//! Falling snow, the flying sleigh and the blinking light string.

use leptos::prelude::*;
use wish_core::{generate_snowflakes, light_bulbs};

/// All background decorations
#[component]
pub fn Decorations(snowflake_count: usize, light_count: usize) -> impl IntoView {
    view! {
        <SnowLayer count=snowflake_count />
        <FlyingSanta />
        <LightString count=light_count />
    }
}

/// Snowflakes are scattered once per mount
#[component]
fn SnowLayer(count: usize) -> impl IntoView {
    let mut rng = js_sys::Math::random;
    let flakes = generate_snowflakes(count, &mut rng);

    view! {
        <div class="snow-container">
            {flakes
                .into_iter()
                .map(|flake| view! { <div class="snowflake" style=flake.style()>"❄"</div> })
                .collect_view()}
        </div>
    }
}

#[component]
fn FlyingSanta() -> impl IntoView {
    view! {
        <div class="flying-santa">
            <span>"🦌🦌🦌"</span>
            <span class="sleigh">"🛷🎅"</span>
        </div>
    }
}

#[component]
fn LightString(count: usize) -> impl IntoView {
    view! {
        <div class="lights-container">
            {light_bulbs(count)
                .into_iter()
                .map(|bulb| view! { <div class="light-bulb" style=bulb.style()></div> })
                .collect_view()}
        </div>
    }
}
