//! Clipboard copy from a text input.

use wasm_bindgen::JsCast;
use web_sys::{HtmlDocument, HtmlInputElement};

use super::window::browser_window;
use crate::error::PlatformError;

/// Select the input's whole value and copy it
pub fn copy_input_text(input: &HtmlInputElement) -> Result<(), PlatformError> {
    input.select();
    let len = input.value().encode_utf16().count() as u32;
    input.set_selection_range(0, len)?;

    let document = browser_window()?
        .document()
        .and_then(|doc| doc.dyn_into::<HtmlDocument>().ok())
        .ok_or(PlatformError::Unavailable("document"))?;
    if document.exec_command("copy")? {
        Ok(())
    } else {
        Err(PlatformError::Js("copy command was rejected".to_string()))
    }
}
