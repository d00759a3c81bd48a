//! Share links for the three supported networks.

use std::str::FromStr;

use log::{debug, warn};
use wasm_bindgen::prelude::*;

use crate::config;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Platform {
    Twitter,
    Facebook,
    LinkedIn,
}

impl FromStr for Platform {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "twitter" => Ok(Platform::Twitter),
            "facebook" => Ok(Platform::Facebook),
            "linkedin" => Ok(Platform::LinkedIn),
            _ => Err(()),
        }
    }
}

impl Platform {
    pub fn share_url(self, url: &str, text: &str) -> String {
        let url = urlencoding::encode(url);
        match self {
            Platform::Twitter => format!(
                "https://twitter.com/intent/tweet?url={}&text={}",
                url,
                urlencoding::encode(text)
            ),
            Platform::Facebook => format!("https://www.facebook.com/sharer/sharer.php?u={}", url),
            Platform::LinkedIn => format!("https://www.linkedin.com/sharing/share-offsite/?url={}", url),
        }
    }
}

/// Opens the share dialog for `platform` in a popup. Unknown platforms are
/// ignored.
#[wasm_bindgen(js_name = shareOnSocial)]
pub fn share_on_social(platform: &str, url: &str, text: &str) {
    let Ok(platform) = platform.parse::<Platform>() else {
        debug!("Ignoring share request for unknown platform {:?}", platform);
        return;
    };
    let Some(window) = web_sys::window() else {
        return;
    };
    let share_url = platform.share_url(url, text);
    if let Err(err) = window.open_with_url_and_target_and_features(&share_url, "_blank", config::SHARE_POPUP_FEATURES) {
        warn!("Could not open share window: {:?}", err);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_platforms_only() {
        assert_eq!("twitter".parse::<Platform>(), Ok(Platform::Twitter));
        assert_eq!("facebook".parse::<Platform>(), Ok(Platform::Facebook));
        assert_eq!("linkedin".parse::<Platform>(), Ok(Platform::LinkedIn));
        assert_eq!("mastodon".parse::<Platform>(), Err(()));
        assert_eq!("Twitter".parse::<Platform>(), Err(()));
    }

    #[test]
    fn twitter_carries_url_and_text() {
        let url = Platform::Twitter.share_url("https://example.com/news?id=3", "New office & team");
        assert_eq!(
            url,
            "https://twitter.com/intent/tweet?url=https%3A%2F%2Fexample.com%2Fnews%3Fid%3D3&text=New%20office%20%26%20team"
        );
    }

    #[test]
    fn facebook_and_linkedin_ignore_text() {
        assert_eq!(
            Platform::Facebook.share_url("https://example.com/", "ignored"),
            "https://www.facebook.com/sharer/sharer.php?u=https%3A%2F%2Fexample.com%2F"
        );
        assert_eq!(
            Platform::LinkedIn.share_url("https://example.com/", "ignored"),
            "https://www.linkedin.com/sharing/share-offsite/?url=https%3A%2F%2Fexample.com%2F"
        );
    }

    #[test]
    fn encodes_non_ascii_text_as_utf8() {
        let url = Platform::Twitter.share_url("https://example.com", "お知らせ");
        assert!(url.ends_with("&text=%E3%81%8A%E7%9F%A5%E3%82%89%E3%81%9B"));
    }
}
