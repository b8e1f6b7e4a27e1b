//! HTTP status phrases, supplemented with the DeepL-specific meanings.
//!
//! See <https://developers.deepl.com/docs/best-practices/error-handling>.

use reqwest::StatusCode;
use std::borrow::Cow;

/// Phrase used for codes that are neither standard nor documented by DeepL.
pub const UNKNOWN_STATUS_TEXT: &str = "Unknown HTTP error";

/// Service-specific descriptions keyed by status code.
const KNOWN_ERRORS: &[(u16, &str)] = &[
    (403, "Authorization failed. Please supply a valid DeepL-Auth-Key"),
    (413, "Request size exceeds the limit"),
    (414, "The request URL is too long"),
    (429, "Too many requests. Please wait and resend your request"),
    (456, "Quota exceeded. The character limit has been reached"),
    (529, "Too many requests. Please wait and resend your request"),
];

/// Returns the DeepL description for `code`, if it has one.
pub fn known_error(code: u16) -> Option<&'static str> {
    KNOWN_ERRORS
        .iter()
        .find(|(known, _)| *known == code)
        .map(|(_, description)| *description)
}

/// Returns the reason text shown for `code`.
///
/// Standard codes use their canonical phrase, followed by the DeepL
/// description when one exists. Non-standard codes fall back to the
/// description alone, or to [`UNKNOWN_STATUS_TEXT`].
pub fn status_text(code: u16) -> Cow<'static, str> {
    let canonical = StatusCode::from_u16(code)
        .ok()
        .and_then(|status| status.canonical_reason());

    match (canonical, known_error(code)) {
        (Some(reason), Some(description)) => Cow::Owned(format!("{reason}: {description}")),
        (Some(reason), None) => Cow::Borrowed(reason),
        (None, Some(description)) => Cow::Borrowed(description),
        (None, None) => Cow::Borrowed(UNKNOWN_STATUS_TEXT),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_code_uses_canonical_reason() {
        assert_eq!(status_text(404), "Not Found");
        assert_eq!(status_text(500), "Internal Server Error");
    }

    #[test]
    fn test_quota_exceeded_is_known() {
        let text = status_text(456);
        assert!(text.starts_with("Quota exceeded"));
    }

    #[test]
    fn test_standard_code_with_description() {
        let text = status_text(429);
        assert!(text.starts_with("Too Many Requests: "));
        assert!(text.contains("wait and resend"));

        let text = status_text(403);
        assert!(text.starts_with("Forbidden: "));
        assert!(text.contains("DeepL-Auth-Key"));
    }

    #[test]
    fn test_nonstandard_rate_limit_code() {
        assert_eq!(
            status_text(529),
            "Too many requests. Please wait and resend your request"
        );
    }

    #[test]
    fn test_unknown_code() {
        assert_eq!(status_text(444), UNKNOWN_STATUS_TEXT);
        assert_eq!(status_text(999), UNKNOWN_STATUS_TEXT);
        // Out of range for a status code altogether.
        assert_eq!(status_text(42), UNKNOWN_STATUS_TEXT);
    }

    #[test]
    fn test_known_error_lookup() {
        assert!(known_error(456).is_some());
        assert!(known_error(413).is_some());
        assert!(known_error(200).is_none());
    }
}
