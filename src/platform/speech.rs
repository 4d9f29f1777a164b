//! Speech recognition (`webkitSpeechRecognition`).

use js_sys::{Function, Reflect};
use wasm_bindgen::prelude::*;

use crate::error::PlatformError;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_name = webkitSpeechRecognition)]
    type WebkitSpeechRecognition;

    #[wasm_bindgen(constructor, catch)]
    fn new() -> Result<WebkitSpeechRecognition, JsValue>;

    #[wasm_bindgen(method, setter)]
    fn set_continuous(this: &WebkitSpeechRecognition, value: bool);

    #[wasm_bindgen(method, setter)]
    fn set_lang(this: &WebkitSpeechRecognition, value: &str);

    #[wasm_bindgen(method, setter)]
    fn set_onresult(this: &WebkitSpeechRecognition, handler: Option<&Function>);

    #[wasm_bindgen(method, setter)]
    fn set_onend(this: &WebkitSpeechRecognition, handler: Option<&Function>);

    #[wasm_bindgen(method, setter)]
    fn set_onerror(this: &WebkitSpeechRecognition, handler: Option<&Function>);

    #[wasm_bindgen(method, catch)]
    fn start(this: &WebkitSpeechRecognition) -> Result<(), JsValue>;
}

pub fn speech_recognition_available() -> bool {
    web_sys::window()
        .map(|w| Reflect::has(&w, &JsValue::from_str("webkitSpeechRecognition")).unwrap_or(false))
        .unwrap_or(false)
}

/// `event.results[0][0].transcript`
fn first_transcript(event: &JsValue) -> Option<String> {
    let results = Reflect::get(event, &JsValue::from_str("results")).ok()?;
    let result = Reflect::get_u32(&results, 0).ok()?;
    let alternative = Reflect::get_u32(&result, 0).ok()?;
    Reflect::get(&alternative, &JsValue::from_str("transcript")).ok()?.as_string()
}

/// A one-shot recognizer with its callbacks attached.
/// Handlers stay registered for as long as the session is alive.
pub struct SpeechSession {
    recognizer: WebkitSpeechRecognition,
    _on_result: Closure<dyn FnMut(JsValue)>,
    _on_end: Closure<dyn FnMut(JsValue)>,
}

impl SpeechSession {
    /// `on_end` runs when recognition stops, including after an error
    pub fn new(
        lang: &str,
        on_transcript: impl Fn(String) + 'static,
        on_end: impl Fn() + 'static,
    ) -> Result<Self, PlatformError> {
        let recognizer = WebkitSpeechRecognition::new()?;
        recognizer.set_continuous(false);
        recognizer.set_lang(lang);

        let on_result = Closure::<dyn FnMut(JsValue)>::new(move |event: JsValue| {
            match first_transcript(&event) {
                Some(transcript) => on_transcript(transcript),
                None => log::warn!("[speech] result event without transcript"),
            }
        });
        recognizer.set_onresult(Some(on_result.as_ref().unchecked_ref()));

        let on_end = Closure::<dyn FnMut(JsValue)>::new(move |event: JsValue| {
            if Reflect::has(&event, &JsValue::from_str("error")).unwrap_or(false) {
                log::warn!("[speech] recognition error: {:?}", Reflect::get(&event, &JsValue::from_str("error")).ok());
            }
            on_end();
        });
        recognizer.set_onend(Some(on_end.as_ref().unchecked_ref()));
        recognizer.set_onerror(Some(on_end.as_ref().unchecked_ref()));

        Ok(Self {
            recognizer,
            _on_result: on_result,
            _on_end: on_end,
        })
    }

    pub fn start(&self) -> Result<(), PlatformError> {
        self.recognizer.start()?;
        Ok(())
    }
}
