//! Page Mounting
//!
//! Finds each component's host element and mounts the component into it.
//! A page without a given host does not get that component.

use leptos::mount::mount_to;
use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

use crate::components::{NavDrawer, PasswordField, ResumeSearch, ScrollToTop, SharePanel, ThemeToggle};
use crate::config::PageConfig;
use crate::platform;

fn host_element(id: &str) -> Option<HtmlElement> {
    let host = document()
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<HtmlElement>().ok());
    if host.is_none() {
        log::debug!("[app] no #{} on this page, skipping", id);
    }
    host
}

/// Attribute value, treating an empty string as absent
fn data_attr(host: &HtmlElement, name: &str) -> Option<String> {
    non_empty(host.get_attribute(name))
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

fn attr_or(value: Option<String>, default: &str) -> String {
    value.unwrap_or_else(|| default.to_string())
}

/// Mount every component whose host exists, then mark the page ready.
/// Returns the number of components mounted.
pub fn mount_page(config: PageConfig) -> usize {
    let hosts = config.hosts;
    let mut mounted = 0;

    if let Some(host) = host_element(hosts.drawer) {
        let content = host.inner_html();
        host.set_inner_html("");
        mount_to(host, move || view! { <NavDrawer content=content /> }).forget();
        mounted += 1;
    }

    if let Some(host) = host_element(hosts.scroll_top) {
        let threshold = config.scroll_threshold;
        mount_to(host, move || view! { <ScrollToTop threshold=threshold /> }).forget();
        mounted += 1;
    }

    if let Some(host) = host_element(hosts.theme_toggle) {
        mount_to(host, move || {
            view! { <ThemeToggle storage_key=config.theme_storage_key dark_class=config.dark_class /> }
        })
        .forget();
        mounted += 1;
    }

    if let Some(host) = host_element(hosts.password) {
        let name = attr_or(data_attr(&host, "data-name"), "password");
        let placeholder = attr_or(data_attr(&host, "data-placeholder"), "Password");
        let autocomplete = attr_or(data_attr(&host, "data-autocomplete"), config.password_autocomplete);
        mount_to(host, move || {
            view! { <PasswordField name=name placeholder=placeholder autocomplete=autocomplete /> }
        })
        .forget();
        mounted += 1;
    }

    if let Some(host) = host_element(hosts.share) {
        let link = data_attr(&host, "data-link")
            .or_else(|| platform::location_origin().ok())
            .unwrap_or_default();
        let share = config.share;
        mount_to(host, move || view! { <SharePanel link=link share=share /> }).forget();
        mounted += 1;
    }

    if let Some(host) = host_element(hosts.search) {
        mount_to(host, move || view! { <ResumeSearch config=config /> }).forget();
        mounted += 1;
    }

    if let Err(err) = platform::set_body_class(config.ready_class, true) {
        log::warn!("[app] could not mark page ready: {}", err);
    }
    mounted
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_empty() {
        assert_eq!(non_empty(None), None);
        assert_eq!(non_empty(Some("  ".to_string())), None);
        assert_eq!(non_empty(Some("https://cv.example".to_string())), Some("https://cv.example".to_string()));
    }

    #[test]
    fn test_password_autocomplete_override() {
        let default = PageConfig::default().password_autocomplete;
        assert_eq!(attr_or(non_empty(None), default), "current-password");
        assert_eq!(attr_or(non_empty(Some("".to_string())), default), "current-password");
        assert_eq!(attr_or(non_empty(Some("new-password".to_string())), default), "new-password");
    }
}
