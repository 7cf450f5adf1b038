use leptos::prelude::*;

const FOOTER_ICONS: &[&str] = &["❄️", "🎁", "🦌", "🎅", "🎁", "❄️"];

#[component]
pub fn PageFooter() -> impl IntoView {
    view! {
        <footer class="footer">
            <p>"🎄 Merry Christmas & Happy Holidays! 🎄"</p>
            <div class="footer-icons">
                {FOOTER_ICONS.iter().map(|i| view! { <span>{*i}</span> }).collect_view()}
            </div>
        </footer>
    }
}
