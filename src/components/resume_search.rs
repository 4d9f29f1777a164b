//! Resume Search Component
//!
//! Filters the signed-in user's resumes as the user types. The list is
//! fetched once on mount; each result row links to the resume's edit page.
//! When the browser offers speech recognition, a mic button fills the
//! query from one spoken phrase.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::config::PageConfig;
use crate::models::ResumeSummary;
use crate::platform::{self, SpeechSession};
use crate::state::{ResumeLoad, SearchView, VoiceState};

#[component]
pub fn ResumeSearch(config: PageConfig) -> impl IntoView {
    let load = RwSignal::new(ResumeLoad::Pending);
    let query = RwSignal::new(String::new());
    let voice = RwSignal::new(VoiceState::default());

    spawn_local(async move {
        let result = api::load_user_resumes(config.resumes_endpoint, config.fetch_timeout_ms).await;
        load.set(result);
    });

    let search_view = Memo::new(move |_| load.with(|l| query.with(|q| SearchView::compute(l, q))));

    // Transcript goes through the same query signal as typed input
    let speech = if platform::speech_recognition_available() {
        let session = SpeechSession::new(
            config.speech_lang,
            move |transcript| query.set(transcript),
            move || voice.update(VoiceState::finish),
        );
        match session {
            Ok(session) => Some(StoredValue::new_local(session)),
            Err(err) => {
                log::warn!("[speech] recognizer unavailable: {}", err);
                None
            }
        }
    } else {
        None
    };

    let start_listening = move |_| {
        let Some(speech) = speech else {
            return;
        };
        let mut should_start = false;
        voice.update(|v| should_start = v.request_start());
        if !should_start {
            log::debug!("[speech] already listening");
            return;
        }
        if let Err(err) = speech.with_value(|session| session.start()) {
            log::warn!("[speech] could not start recognition: {}", err);
            voice.update(VoiceState::finish);
        }
    };

    let announce_search = move |_| {
        let message = format!("Searching for: {}", query.get_untracked());
        if let Err(err) = platform::alert(&message) {
            log::warn!("[search] alert failed: {}", err);
        }
    };

    view! {
        <div class="search-box" data-state=move || load.with(ResumeLoad::state_name)>
            <input
                id="searchInput"
                type="search"
                placeholder="Search your resumes..."
                autocomplete="off"
                title=move || load.with(|l| l.error().map(|err| format!("Resumes unavailable: {}", err)))
                prop:value=move || query.get()
                on:input=move |ev| query.set(event_target_value(&ev))
            />
            {speech.map(|_| view! {
                <button
                    id="micBtn"
                    class=move || if voice.get().is_listening() { "mic-btn listening" } else { "mic-btn" }
                    title="Search by voice"
                    on:click=start_listening
                >
                    <i class="fa-solid fa-microphone"></i>
                </button>
            })}
            <button id="searchBtn" class="search-btn" on:click=announce_search>
                <i class="fa-solid fa-magnifying-glass"></i>
            </button>
            <div
                id="searchResults"
                class="search-results"
                style:display=move || if search_view.with(SearchView::panel_visible) { "block" } else { "none" }
            >
                <For
                    each=move || search_view.get().results
                    key=|resume| resume.id
                    children=move |resume: ResumeSummary| {
                        let href = config.edit_url(resume.id);
                        view! {
                            <div
                                class="search-result-item"
                                on:click=move |_| {
                                    if let Err(err) = platform::navigate(&href) {
                                        log::warn!("[search] navigation failed: {}", err);
                                    }
                                }
                            >
                                {resume.title}
                            </div>
                        }
                    }
                />
            </div>
        </div>
    }
}
