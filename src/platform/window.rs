//! Window, document and body helpers.

use web_sys::{HtmlElement, ScrollBehavior, ScrollToOptions, Window};

use crate::error::PlatformError;

pub(crate) fn browser_window() -> Result<Window, PlatformError> {
    web_sys::window().ok_or(PlatformError::Unavailable("window"))
}

pub fn body() -> Result<HtmlElement, PlatformError> {
    browser_window()?
        .document()
        .and_then(|doc| doc.body())
        .ok_or(PlatformError::Unavailable("document.body"))
}

/// Blocking informational dialog
pub fn alert(message: &str) -> Result<(), PlatformError> {
    browser_window()?.alert_with_message(message)?;
    Ok(())
}

/// Full page navigation
pub fn navigate(href: &str) -> Result<(), PlatformError> {
    browser_window()?.location().set_href(href)?;
    Ok(())
}

/// Open a URL in a new browsing context
pub fn open_blank(url: &str) -> Result<(), PlatformError> {
    browser_window()?.open_with_url_and_target(url, "_blank")?;
    Ok(())
}

pub fn location_origin() -> Result<String, PlatformError> {
    Ok(browser_window()?.location().origin()?)
}

pub fn scroll_offset() -> Result<f64, PlatformError> {
    Ok(browser_window()?.scroll_y()?)
}

pub fn smooth_scroll_to_top() -> Result<(), PlatformError> {
    let options = ScrollToOptions::new();
    options.set_top(0.0);
    options.set_behavior(ScrollBehavior::Smooth);
    browser_window()?.scroll_to_with_scroll_to_options(&options);
    Ok(())
}

/// Add or remove a class on <body>
pub fn set_body_class(class: &str, enabled: bool) -> Result<(), PlatformError> {
    body()?.class_list().toggle_with_force(class, enabled)?;
    Ok(())
}

pub fn set_body_overflow(value: &str) -> Result<(), PlatformError> {
    body()?.style().set_property("overflow", value)?;
    Ok(())
}
