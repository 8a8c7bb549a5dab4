//! Output length limit.
//!
//! Jira rejects issue descriptions above a configured size, so rendered
//! markup can be cut down to a maximum number of characters with a notice
//! appended for the reader.

use std::borrow::Cow;
use tracing::debug;

/// Cuts `text` to its first `max_chars` characters and appends a notice.
///
/// A limit of `0` disables truncation. Text that already fits is returned
/// unchanged. Counting is in characters, so a code point is never split.
pub fn truncate(text: &str, max_chars: usize) -> Cow<'_, str> {
    if max_chars == 0 {
        return Cow::Borrowed(text);
    }
    match text.char_indices().nth(max_chars) {
        None => Cow::Borrowed(text),
        Some((cut, _)) => {
            debug!(
                limit = max_chars,
                bytes = text.len(),
                "truncating output over the length limit"
            );
            let mut truncated = String::with_capacity(cut + 96);
            truncated.push_str(&text[..cut]);
            truncated.push_str(&notice(max_chars));
            Cow::Owned(truncated)
        }
    }
}

fn notice(max_chars: usize) -> String {
    format!(
        "\n\nNotice: The entered text is too long. It exceeds the allowed limit of {} characters.",
        group_thousands(max_chars)
    )
}

/// `30000` → `"30,000"`.
fn group_thousands(value: usize) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    grouped
}
