//! Page Configuration
//!
//! Endpoints, thresholds, storage keys and share texts used by the page
//! components. `PageConfig::default()` is the production configuration;
//! individual hosts may override values through `data-*` attributes.

/// Element ids the components mount into
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HostIds {
    pub drawer: &'static str,
    pub scroll_top: &'static str,
    pub theme_toggle: &'static str,
    pub password: &'static str,
    pub share: &'static str,
    pub search: &'static str,
}

/// Fixed texts and URL templates for the share panel
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShareConfig {
    pub title: &'static str,
    pub text: &'static str,
    pub messaging_prefix: &'static str,
    pub messaging_url: &'static str,
    pub facebook_url: &'static str,
    pub twitter_url: &'static str,
    pub copied_notice: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageConfig {
    /// Resume list endpoint for the signed-in user
    pub resumes_endpoint: &'static str,
    /// Edit route prefix; the resume id is appended
    pub edit_route: &'static str,
    /// Fetch is abandoned after this many milliseconds
    pub fetch_timeout_ms: u32,
    /// Vertical offset above which the scroll-to-top button shows
    pub scroll_threshold: f64,
    /// localStorage key for the dark-mode flag
    pub theme_storage_key: &'static str,
    /// Class placed on <body> while dark mode is active
    pub dark_class: &'static str,
    /// Class placed on <body> once all components are mounted
    pub ready_class: &'static str,
    /// Autofill hint for the password field unless the host sets `data-autocomplete`
    pub password_autocomplete: &'static str,
    /// Speech recognition language
    pub speech_lang: &'static str,
    pub share: ShareConfig,
    pub hosts: HostIds,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            resumes_endpoint: "/api/user_resumes",
            edit_route: "/resume/edit/",
            fetch_timeout_ms: 10_000,
            scroll_threshold: 300.0,
            theme_storage_key: "darkMode",
            dark_class: "dark-mode",
            ready_class: "ready",
            password_autocomplete: "current-password",
            speech_lang: "en-US",
            share: ShareConfig {
                title: "Superior CV",
                text: "Build professional resumes easily with Superior CV",
                messaging_prefix: "Check out Superior CV Resume App: ",
                messaging_url: "https://wa.me/?text=",
                facebook_url: "https://www.facebook.com/sharer/sharer.php?u=",
                twitter_url: "https://twitter.com/intent/tweet?text=",
                copied_notice: "Link copied to clipboard!",
            },
            hosts: HostIds {
                drawer: "drawer-root",
                scroll_top: "scroll-top-root",
                theme_toggle: "theme-toggle-root",
                password: "password-root",
                share: "share-root",
                search: "search-root",
            },
        }
    }
}

impl PageConfig {
    /// Edit page URL for a resume
    pub fn edit_url(&self, id: u32) -> String {
        format!("{}{}", self.edit_route, id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edit_url() {
        let config = PageConfig::default();
        assert_eq!(config.edit_url(42), "/resume/edit/42");
    }

    #[test]
    fn test_host_ids_are_distinct() {
        let hosts = PageConfig::default().hosts;
        let ids = [hosts.drawer, hosts.scroll_top, hosts.theme_toggle, hosts.password, hosts.share, hosts.search];
        for (i, a) in ids.iter().enumerate() {
            for b in &ids[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
