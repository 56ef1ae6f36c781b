/// Shareable URL composition
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use url::Url;

/// Characters left untouched by `encodeURIComponent`
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

const TEXT_DIRECTIVE: &str = "#:~:text=";

/// Build the URL to copy for a page and the user's current selection
///
/// Algorithm:
/// 1. Empty selection → the page URL, verbatim
/// 2. Otherwise drop everything from the first '#' onward
/// 3. Append `#:~:text=` followed by the percent-encoded selection
///
/// Examples:
/// - ("https://example.com/a", "") → https://example.com/a
/// - ("https://example.com/a#old", "hello world") → https://example.com/a#:~:text=hello%20world
pub fn compose_url(page_url: &str, selection: &str) -> String {
    if selection.is_empty() {
        return page_url.to_string();
    }

    let before_hash = page_url.split('#').next().unwrap_or(page_url);
    format!("{}{}{}", before_hash, TEXT_DIRECTIVE, encode_uri_component(selection))
}

/// Percent-encode text the way `encodeURIComponent` does
pub fn encode_uri_component(text: &str) -> String {
    utf8_percent_encode(text, URI_COMPONENT).to_string()
}

/// Whether a tab URL is an absolute URL the copy runner can work with
pub fn is_absolute_url(url: &str) -> bool {
    Url::parse(url).is_ok()
}
