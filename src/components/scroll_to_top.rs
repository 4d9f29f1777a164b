//! Scroll-To-Top Button

use leptos::ev;
use leptos::prelude::*;

use crate::platform;
use crate::state::ScrollToTopState;

/// Floating button shown once the page is scrolled past `threshold`
#[component]
pub fn ScrollToTop(threshold: f64) -> impl IntoView {
    let (state, set_state) = signal(ScrollToTopState::new(threshold));

    // Listener lives as long as the page
    let _ = window_event_listener(ev::scroll, move |_| match platform::scroll_offset() {
        Ok(offset) => set_state.update(|s| {
            s.on_scroll(offset);
        }),
        Err(err) => log::warn!("[scroll] could not read offset: {}", err),
    });

    let scroll_up = move |_| {
        if let Err(err) = platform::smooth_scroll_to_top() {
            log::warn!("[scroll] scroll to top failed: {}", err);
        }
    };

    view! {
        <button
            id="btn"
            class="scroll-top-btn"
            title="Back to top"
            style:display=move || state.get().display()
            on:click=scroll_up
        >
            <i class="fa-solid fa-arrow-up"></i>
        </button>
    }
}
