//! Shared helpers for credential handling.

/// Minimum key length to display a partial key
const MIN_KEY_LENGTH_FOR_PARTIAL_DISPLAY: usize = 8;

/// Number of characters to show at start/end of a masked key
const KEY_MASK_VISIBLE_CHARS: usize = 4;

/// Mask an API key for safe display in logs.
///
/// Shows the first 4 and last 4 characters for keys longer than 8
/// characters, otherwise "****" to avoid exposing short keys.
///
/// # Examples
/// ```
/// use suimei_llm::util::mask_api_key;
/// assert_eq!(mask_api_key("AIzaSy1234567890"), "AIza...7890");
/// assert_eq!(mask_api_key("short"), "****");
/// ```
#[must_use]
pub fn mask_api_key(key: &str) -> String {
    if key.len() <= MIN_KEY_LENGTH_FOR_PARTIAL_DISPLAY {
        return "****".to_string();
    }
    format!(
        "{}...{}",
        &key[..KEY_MASK_VISIBLE_CHARS],
        &key[key.len() - KEY_MASK_VISIBLE_CHARS..]
    )
}
