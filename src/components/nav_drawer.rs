//! Navigation Drawer Component
//!
//! Slide-in side panel with a backdrop overlay. The overlay closes it.

use leptos::prelude::*;

use crate::platform;
use crate::state::DrawerState;

/// Drawer trigger, overlay and panel.
///
/// `content` is the server-rendered navigation markup placed inside the panel.
#[component]
pub fn NavDrawer(#[prop(into)] content: String) -> impl IntoView {
    let (drawer, set_drawer) = signal(DrawerState::default());

    let toggle = move |explicit: Option<bool>| {
        set_drawer.update(|state| {
            state.toggle(explicit);
        });
    };

    // Lock page scroll while open
    Effect::new(move |_| {
        let overflow = drawer.get().body_overflow();
        if let Err(err) = platform::set_body_overflow(overflow) {
            log::warn!("[drawer] could not set body overflow: {}", err);
        }
    });

    view! {
        <button
            id="openDrawer"
            class="drawer-trigger"
            aria-controls="mainDrawer"
            aria-expanded=move || drawer.get().trigger_expanded()
            on:click=move |_| toggle(Some(true))
        >
            <i class="fa-solid fa-bars"></i>
        </button>
        <div
            id="drawerOverlay"
            class="drawer-overlay"
            data-hidden=move || drawer.get().overlay_hidden()
            on:click=move |_| toggle(Some(false))
        ></div>
        <nav
            id="mainDrawer"
            class="drawer"
            class:open=move || drawer.get().is_open()
            aria-hidden=move || drawer.get().panel_aria_hidden()
            inner_html=content
        ></nav>
    }
}
