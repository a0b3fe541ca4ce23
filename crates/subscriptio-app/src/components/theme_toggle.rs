use leptos::prelude::*;

use crate::context::ThemeHandle;

/// Button that flips between the light and dark themes.
#[component]
pub fn ThemeToggle(theme: ThemeHandle) -> impl IntoView {
    view! {
        <button
            type="button"
            class="theme-toggle"
            aria-label=move || theme.get().toggle_label()
            on:click=move |_| theme.toggle()
        >
            {move || if theme.get().is_dark() { "\u{2600}" } else { "\u{263e}" }}
        </button>
    }
}
