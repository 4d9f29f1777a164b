//! Native share sheet (`navigator.share`).

use js_sys::{Function, Promise, Reflect};
use serde::Serialize;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;

use crate::error::PlatformError;

/// Payload passed to the share sheet
#[derive(Debug, Clone, Serialize)]
pub struct ShareRequest<'a> {
    pub title: &'a str,
    pub text: &'a str,
    pub url: &'a str,
}

fn share_function() -> Option<(JsValue, Function)> {
    let navigator: JsValue = web_sys::window()?.navigator().into();
    let share = Reflect::get(&navigator, &JsValue::from_str("share")).ok()?;
    let share = share.dyn_into::<Function>().ok()?;
    Some((navigator, share))
}

pub fn native_share_available() -> bool {
    share_function().is_some()
}

/// Open the share sheet. Resolves once the user completes or dismisses it.
pub async fn native_share(request: &ShareRequest<'_>) -> Result<(), PlatformError> {
    let (navigator, share) = share_function().ok_or(PlatformError::Unavailable("navigator.share"))?;
    let data = request.serialize(&serde_wasm_bindgen::Serializer::json_compatible())?;
    let promise = share.call1(&navigator, &data)?.dyn_into::<Promise>()?;
    JsFuture::from(promise).await?;
    Ok(())
}
