//! Password Field Component
//!
//! Password input with an eye icon that reveals or hides the value.

use leptos::prelude::*;

use crate::state::PasswordVisibility;

#[component]
pub fn PasswordField(
    #[prop(into)] name: String,
    #[prop(into)] placeholder: String,
    #[prop(into)] autocomplete: String,
) -> impl IntoView {
    let (visibility, set_visibility) = signal(PasswordVisibility::default());

    view! {
        <div class="password-wrapper">
            <input
                id="password"
                name=name
                placeholder=placeholder
                type=move || visibility.get().input_type()
                autocomplete=autocomplete
                required=true
            />
            <i
                id="togglePassword"
                class=move || visibility.get().icon_class()
                style:color=move || visibility.get().icon_color()
                style:cursor="pointer"
                on:click=move |_| set_visibility.update(|v| {
                    v.toggle();
                })
            ></i>
        </div>
    }
}
