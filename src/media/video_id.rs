// SPDX-License-Identifier: MPL-2.0
//! Canonical video identifier extraction from share links.
//!
//! Hosted videos are referenced in the catalog by whatever link the author
//! copied (short link, watch page, embed page). Playback needs the canonical
//! 11-character identifier, which this module extracts.
//!
//! # Examples
//!
//! ```
//! use raytracer_showcase::media::video_id::extract_video_id;
//!
//! let id = extract_video_id("https://youtu.be/bKc2I06b_7U?si=xyz").unwrap();
//! assert_eq!(id.as_str(), "bKc2I06b_7U");
//! assert_eq!(id.embed_url(), "https://www.youtube.com/embed/bKc2I06b_7U");
//!
//! assert!(extract_video_id("https://example.com/not-a-video").is_none());
//! ```

use regex::Regex;
use std::fmt;
use std::sync::OnceLock;

/// Length of a canonical identifier on the target video host.
pub const VIDEO_ID_LEN: usize = 11;

const EMBED_BASE_URL: &str = "https://www.youtube.com/embed/";
const THUMBNAIL_BASE_URL: &str = "https://img.youtube.com/vi/";

// The leading `.*` is greedy, so the last marker in the link wins.
static SHARE_LINK_REGEX: OnceLock<Regex> = OnceLock::new();

fn share_link_regex() -> &'static Regex {
    SHARE_LINK_REGEX.get_or_init(|| {
        Regex::new(r"^.*(youtu.be/|v/|u/[A-Za-z0-9_]/|embed/|watch\?v=|&v=)([^#&?]*).*")
            .expect("Invalid share link Regex")
    })
}

/// A validated video identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VideoId(String);

impl VideoId {
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// URL of the embeddable player for this video.
    #[must_use]
    pub fn embed_url(&self) -> String {
        format!("{EMBED_BASE_URL}{}", self.0)
    }

    /// URL of the host-generated high resolution thumbnail.
    #[must_use]
    pub fn thumbnail_url(&self) -> String {
        format!("{THUMBNAIL_BASE_URL}{}/maxresdefault.jpg", self.0)
    }
}

impl fmt::Display for VideoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Extracts the canonical video identifier from a share link.
///
/// Accepts short links (`youtu.be/<id>`), watch pages (`watch?v=<id>`,
/// `&v=<id>`), embed pages (`embed/<id>`) and the legacy `v/` and `u/<c>/`
/// forms. The captured segment stops at the first `#`, `&` or `?`.
///
/// Returns `None` when no marker is present or the captured segment is not
/// exactly [`VIDEO_ID_LEN`] UTF-16 code units long, the length the host
/// player measures. Callers must render a
/// "video unavailable" placeholder in that case.
#[must_use]
pub fn extract_video_id(share_link: &str) -> Option<VideoId> {
    let captures = share_link_regex().captures(share_link)?;
    let segment = captures.get(2)?.as_str();

    if segment.encode_utf16().count() == VIDEO_ID_LEN {
        Some(VideoId(segment.to_string()))
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id_of(link: &str) -> Option<String> {
        extract_video_id(link).map(|id| id.as_str().to_string())
    }

    #[test]
    fn short_link_with_query_is_extracted() {
        assert_eq!(
            id_of("https://youtu.be/bKc2I06b_7U?si=xyz").as_deref(),
            Some("bKc2I06b_7U")
        );
    }

    #[test]
    fn unrelated_url_is_not_found() {
        assert_eq!(id_of("https://example.com/not-a-video"), None);
    }

    #[test]
    fn watch_page_is_extracted() {
        assert_eq!(
            id_of("https://www.youtube.com/watch?v=bKc2I06b_7U&t=42s").as_deref(),
            Some("bKc2I06b_7U")
        );
    }

    #[test]
    fn secondary_query_parameter_is_extracted() {
        assert_eq!(
            id_of("https://www.youtube.com/watch?feature=share&v=bKc2I06b_7U").as_deref(),
            Some("bKc2I06b_7U")
        );
    }

    #[test]
    fn embed_page_is_extracted() {
        assert_eq!(
            id_of("https://www.youtube.com/embed/bKc2I06b_7U").as_deref(),
            Some("bKc2I06b_7U")
        );
    }

    #[test]
    fn legacy_v_path_is_extracted() {
        assert_eq!(
            id_of("https://www.youtube.com/v/bKc2I06b_7U#t=5").as_deref(),
            Some("bKc2I06b_7U")
        );
    }

    #[test]
    fn wrong_length_segment_is_rejected() {
        assert_eq!(id_of("https://youtu.be/short"), None);
        assert_eq!(id_of("https://youtu.be/bKc2I06b_7Uextra"), None);
        assert_eq!(id_of("https://youtu.be/"), None);
    }

    #[test]
    fn user_path_marker_takes_ascii_word_only() {
        assert_eq!(
            id_of("https://www.youtube.com/u/x/bKc2I06b_7U").as_deref(),
            Some("bKc2I06b_7U")
        );
        assert_eq!(id_of("https://www.youtube.com/u/é/bKc2I06b_7U"), None);
    }

    #[test]
    fn length_counts_utf16_units() {
        // Ten ASCII characters plus one astral symbol is twelve units.
        assert_eq!(id_of("https://youtu.be/bKc2I06b_7\u{1F600}"), None);
        assert_eq!(
            id_of("https://youtu.be/bKc2I06b_7\u{e9}").as_deref(),
            Some("bKc2I06b_7\u{e9}")
        );
    }

    #[test]
    fn empty_input_is_not_found() {
        assert_eq!(id_of(""), None);
    }

    #[test]
    fn extraction_is_deterministic() {
        let link = "https://youtu.be/bKc2I06b_7U?si=C7jhQ9_PC2ws3BKU";
        assert_eq!(extract_video_id(link), extract_video_id(link));
    }

    #[test]
    fn derived_urls_use_identifier() {
        let id = extract_video_id("https://youtu.be/bKc2I06b_7U").expect("valid link");
        assert_eq!(id.embed_url(), "https://www.youtube.com/embed/bKc2I06b_7U");
        assert_eq!(
            id.thumbnail_url(),
            "https://img.youtube.com/vi/bKc2I06b_7U/maxresdefault.jpg"
        );
        assert_eq!(id.to_string(), "bKc2I06b_7U");
    }
}
