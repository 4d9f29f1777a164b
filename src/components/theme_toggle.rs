//! Dark/light theme toggle persisted in `localStorage`.

use leptos::prelude::*;

use crate::platform;
use crate::state::ThemeState;

fn stored_theme(storage_key: &str) -> ThemeState {
    match platform::read_item(storage_key) {
        Ok(value) => ThemeState::from_stored(value.as_deref()),
        Err(err) => {
            log::warn!("[theme] could not read preference: {}", err);
            ThemeState::default()
        }
    }
}

fn apply_theme(theme: ThemeState, dark_class: &str) {
    if let Err(err) = platform::set_body_class(dark_class, theme.is_dark()) {
        log::warn!("[theme] could not apply theme: {}", err);
    }
}

/// Button switching between light and dark mode.
///
/// The stored preference is applied on mount. Each click computes the
/// next state, persists it, then applies that same state.
#[component]
pub fn ThemeToggle(storage_key: &'static str, dark_class: &'static str) -> impl IntoView {
    let initial = stored_theme(storage_key);
    apply_theme(initial, dark_class);

    let (theme, set_theme) = signal(initial);

    let toggle = move |_| {
        let next = theme.get_untracked().next();
        if let Err(err) = platform::write_item(storage_key, next.stored_value()) {
            log::warn!("[theme] could not persist preference: {}", err);
        }
        apply_theme(next, dark_class);
        set_theme.set(next);
    };

    view! {
        <button id="themeToggle" class="theme-toggle" on:click=toggle>
            {move || theme.get().label()}
        </button>
    }
}
