//! Share Panel Component
//!
//! Share actions for the app link: native share sheet, messaging app,
//! two social networks and a manual copy. All of them read the link from
//! the `shareLink` input.

use leptos::html::Input;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::config::ShareConfig;
use crate::platform::{self, ShareRequest};
use crate::share_links;

fn open_share_target(url: String) {
    if let Err(err) = platform::open_blank(&url) {
        log::warn!("[share] could not open {}: {}", url, err);
    }
}

#[component]
pub fn SharePanel(#[prop(into)] link: String, share: ShareConfig) -> impl IntoView {
    let input_ref = NodeRef::<Input>::new();

    let current_link = move || input_ref.get_untracked().map(|input| input.value()).unwrap_or_default();

    let copy_link = move || {
        let Some(input) = input_ref.get_untracked() else {
            return;
        };
        match platform::copy_input_text(&input) {
            Ok(()) => {
                if let Err(err) = platform::alert(share.copied_notice) {
                    log::warn!("[share] alert failed: {}", err);
                }
            }
            Err(err) => log::warn!("[share] copy failed: {}", err),
        }
    };

    let share_native = move |_| {
        if !platform::native_share_available() {
            copy_link();
            return;
        }
        let link = current_link();
        spawn_local(async move {
            let request = ShareRequest {
                title: share.title,
                text: share.text,
                url: &link,
            };
            // Rejected when the user dismisses the sheet
            if let Err(err) = platform::native_share(&request).await {
                log::debug!("[share] native share did not complete: {}", err);
            }
        });
    };

    view! {
        <div class="share-panel">
            <input id="shareLink" class="share-link" type="text" readonly=true value=link node_ref=input_ref />
            <div class="share-actions">
                <button class="share-btn native" on:click=share_native>
                    <i class="fa-solid fa-share-nodes"></i>" Share"
                </button>
                <button
                    class="share-btn whatsapp"
                    on:click=move |_| open_share_target(share_links::messaging_url(&share, &current_link()))
                >
                    <i class="fa-brands fa-whatsapp"></i>
                </button>
                <button
                    class="share-btn facebook"
                    on:click=move |_| open_share_target(share_links::facebook_url(&share, &current_link()))
                >
                    <i class="fa-brands fa-facebook"></i>
                </button>
                <button
                    class="share-btn twitter"
                    on:click=move |_| open_share_target(share_links::twitter_url(&share, &current_link()))
                >
                    <i class="fa-brands fa-x-twitter"></i>
                </button>
                <button class="share-btn copy" on:click=move |_| copy_link()>
                    <i class="fa-regular fa-copy"></i>" Copy"
                </button>
            </div>
        </div>
    }
}
