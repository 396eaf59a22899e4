//! Weekly bulletin download helpers.
//!
//! The browser handler fetches the bulletin page, pulls out its visible text
//! and offers it as a plain-text file. Any failure along the way falls back to
//! opening the page itself in a new tab; the user never sees an error message.

#[cfg(test)]
#[path = "bulletin_test.rs"]
mod bulletin_test;

/// MIME type of the generated download.
pub const TEXT_MIME: &str = "text/plain;charset=utf-8";

/// Browsing context used by the fallback navigation.
pub const FALLBACK_TARGET: &str = "_blank";

/// Why the download path gave up.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BulletinError {
    #[error("bulletin fetch failed: {0}")]
    Fetch(String),
    #[error("bulletin fetch returned HTTP {0}")]
    Status(u16),
    #[error("bulletin page could not be parsed: {0}")]
    Parse(String),
    #[error("bulletin page has no body")]
    MissingBody,
    #[error("bulletin download failed: {0}")]
    Download(String),
}

/// Collapse every whitespace run to a single space and trim the ends.
///
/// Whitespace is the ECMAScript `\s` class, which is what the page's own
/// text normalization uses: it includes U+FEFF and excludes U+0085, unlike
/// [`char::is_whitespace`].
#[must_use]
pub fn clean_text(raw: &str) -> String {
    raw.split(is_js_whitespace).filter(|word| !word.is_empty()).collect::<Vec<_>>().join(" ")
}

/// Membership in the ECMAScript `\s` class (WhiteSpace plus LineTerminator).
#[must_use]
pub fn is_js_whitespace(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n'
            | '\u{B}'
            | '\u{C}'
            | '\r'
            | ' '
            | '\u{A0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202F}'
            | '\u{205F}'
            | '\u{3000}'
            | '\u{FEFF}'
    )
}

/// Log a failed best-effort cleanup step at debug level and carry on.
///
/// Returns whether the step succeeded.
pub fn cleanup_step<T>(step: &str, result: Result<T, String>) -> bool {
    match result {
        Ok(_) => true,
        Err(e) => {
            log::debug!("bulletin cleanup ({step}) failed: {e}");
            false
        }
    }
}

/// Map an HTTP status to an error unless it is a success code.
///
/// # Errors
///
/// Returns [`BulletinError::Status`] for anything outside `200..=299`.
pub fn check_status(status: u16) -> Result<(), BulletinError> {
    if (200..300).contains(&status) { Ok(()) } else { Err(BulletinError::Status(status)) }
}
