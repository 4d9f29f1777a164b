//! Share Link Composition
//!
//! Builds outbound share URLs for the messaging and social targets.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::config::ShareConfig;

/// Bytes left unescaped by `encodeURIComponent`
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

pub fn encode_component(value: &str) -> String {
    utf8_percent_encode(value, URI_COMPONENT).to_string()
}

/// Messaging deep link with marketing text and the link
pub fn messaging_url(config: &ShareConfig, link: &str) -> String {
    format!(
        "{}{}",
        config.messaging_url,
        encode_component(&format!("{}{}", config.messaging_prefix, link))
    )
}

pub fn facebook_url(config: &ShareConfig, link: &str) -> String {
    format!("{}{}", config.facebook_url, encode_component(link))
}

pub fn twitter_url(config: &ShareConfig, link: &str) -> String {
    format!(
        "{}{}",
        config.twitter_url,
        encode_component(&format!("{} {}", config.text, link))
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PageConfig;

    #[test]
    fn test_encode_component_matches_js() {
        assert_eq!(encode_component("a-b_c.d!e~f*g'h(i)j"), "a-b_c.d!e~f*g'h(i)j");
        assert_eq!(encode_component("https://x.io/a?b=c&d"), "https%3A%2F%2Fx.io%2Fa%3Fb%3Dc%26d");
        assert_eq!(encode_component("a b#"), "a%20b%23");
        assert_eq!(encode_component("é"), "%C3%A9");
    }

    #[test]
    fn test_share_urls() {
        let share = PageConfig::default().share;
        let link = "https://cv.example/";
        assert_eq!(
            messaging_url(&share, link),
            "https://wa.me/?text=Check%20out%20Superior%20CV%20Resume%20App%3A%20https%3A%2F%2Fcv.example%2F"
        );
        assert_eq!(
            facebook_url(&share, link),
            "https://www.facebook.com/sharer/sharer.php?u=https%3A%2F%2Fcv.example%2F"
        );
        assert_eq!(
            twitter_url(&share, link),
            "https://twitter.com/intent/tweet?text=Build%20professional%20resumes%20easily%20with%20Superior%20CV%20https%3A%2F%2Fcv.example%2F"
        );
    }

    #[test]
    fn test_unvalidated_link_passes_through() {
        let share = PageConfig::default().share;
        assert_eq!(facebook_url(&share, ""), share.facebook_url);
    }
}
