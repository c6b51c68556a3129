//! Gallery helpers: YouTube id extraction and thumbnail derivation.

use url::Url;

use crate::error::CoreError;

/// Length of a YouTube video id.
const YOUTUBE_ID_LEN: usize = 11;

/// Path prefixes that carry the video id as the next segment.
const YOUTUBE_ID_PATHS: &[&str] = &["embed", "shorts", "live", "v"];

/// Parse a URL, assuming `https://` when the scheme is missing.
fn parse_lenient(url: &str) -> Option<Url> {
    match Url::parse(url) {
        Ok(parsed) => Some(parsed),
        Err(url::ParseError::RelativeUrlWithoutBase) => Url::parse(&format!("https://{url}")).ok(),
        Err(_) => None,
    }
}

fn is_host_or_subdomain(host: &str, domain: &str) -> bool {
    host == domain
        || host
            .strip_suffix(domain)
            .is_some_and(|prefix| prefix.ends_with('.'))
}

/// Extract the 11-character video id from a YouTube URL.
///
/// Recognises `youtube.com/watch?v=`, `youtu.be/`, `/embed/`, `/shorts/`
/// and `/live/` forms on any `youtube.com` subdomain, with or without a
/// scheme or explicit port.
pub fn youtube_video_id(url: &str) -> Option<String> {
    let parsed = parse_lenient(url.trim())?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return None;
    }
    let host = parsed.host_str()?;
    let mut segments = parsed.path_segments()?.filter(|s| !s.is_empty());

    let candidate = match host {
        h if is_host_or_subdomain(h, "youtu.be") => segments.next().map(str::to_string),
        h if is_host_or_subdomain(h, "youtube.com")
            || is_host_or_subdomain(h, "youtube-nocookie.com") =>
        {
            match segments.next()? {
                "watch" => parsed
                    .query_pairs()
                    .find(|(key, _)| key == "v")
                    .map(|(_, value)| value.into_owned()),
                prefix if YOUTUBE_ID_PATHS.contains(&prefix) => {
                    segments.next().map(str::to_string)
                }
                _ => None,
            }
        }
        _ => None,
    }?;

    is_valid_video_id(&candidate).then_some(candidate)
}

fn is_valid_video_id(id: &str) -> bool {
    id.len() == YOUTUBE_ID_LEN
        && id
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

/// High-quality thumbnail URL for a YouTube video id.
pub fn youtube_thumbnail_url(video_id: &str) -> String {
    format!("https://img.youtube.com/vi/{video_id}/hqdefault.jpg")
}

/// Pick the thumbnail to store: the explicit one if given, else the
/// YouTube-derived one when the video URL is recognised.
pub fn resolve_thumbnail(explicit: Option<&str>, video_url: &str) -> Option<String> {
    explicit
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .or_else(|| youtube_video_id(video_url).map(|id| youtube_thumbnail_url(&id)))
}

/// Require an absolute http(s) video URL with a host.
pub fn validate_video_url(url: &str) -> Result<(), CoreError> {
    let url = url.trim();
    let valid = Url::parse(url).is_ok_and(|parsed| {
        matches!(parsed.scheme(), "http" | "https")
            && parsed.host_str().is_some_and(|host| !host.is_empty())
    });
    if valid {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Invalid video URL '{url}'. Must be an absolute http(s) URL"
        )))
    }
}
