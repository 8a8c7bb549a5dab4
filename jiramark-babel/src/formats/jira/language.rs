//! Code block languages understood by Jira's `{code}` macro.

use tracing::debug;

/// Language tag used when the fence info is missing or not supported.
pub const FALLBACK_LANGUAGE: &str = "none";

/// Languages Jira can highlight, spelled exactly as the macro expects them.
pub const SUPPORTED_LANGUAGES: &[&str] = &[
    "actionscript",
    "ada",
    "applescript",
    "bash",
    "c",
    "c#",
    "c++",
    "cpp",
    "css",
    "erlang",
    "go",
    "groovy",
    "haskell",
    "html",
    "java",
    "javascript",
    "js",
    "json",
    "lua",
    "none",
    "nyan",
    "objc",
    "perl",
    "php",
    "python",
    "r",
    "rainbow",
    "ruby",
    "scala",
    "sh",
    "sql",
    "swift",
    "visualbasic",
    "xml",
    "yaml",
];

/// Returns `token` if Jira supports it, [`FALLBACK_LANGUAGE`] otherwise.
///
/// Matching is exact and case-sensitive: `Python` is not `python`.
pub fn validate(token: &str) -> &str {
    if SUPPORTED_LANGUAGES.contains(&token) {
        token
    } else {
        debug!(language = token, "unsupported code language");
        FALLBACK_LANGUAGE
    }
}

/// Resolves the `{code:...}` language from a fence info string such as
/// `"rust ignore"`. Only the first whitespace-delimited token counts.
pub fn code_language(fence_info: Option<&str>) -> &str {
    match fence_info.and_then(|info| info.split_whitespace().next()) {
        Some(token) => validate(token),
        None => FALLBACK_LANGUAGE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whitelist_size() {
        assert_eq!(SUPPORTED_LANGUAGES.len(), 35);
    }

    #[test]
    fn test_known_languages_pass_through() {
        assert_eq!(validate("python"), "python");
        assert_eq!(validate("c++"), "c++");
        assert_eq!(validate("cpp"), "cpp");
        assert_eq!(validate("js"), "js");
        assert_eq!(validate("javascript"), "javascript");
        assert_eq!(validate("c#"), "c#");
    }

    #[test]
    fn test_unknown_language_falls_back() {
        assert_eq!(validate("brainfuck"), "none");
        assert_eq!(validate("rust"), "none");
        assert_eq!(validate(""), "none");
    }

    #[test]
    fn test_validate_is_case_sensitive() {
        assert_eq!(validate("Python"), "none");
        assert_eq!(validate("JSON"), "none");
    }

    #[test]
    fn test_code_language_uses_first_token() {
        assert_eq!(code_language(Some("python title=x.py")), "python");
        assert_eq!(code_language(Some("rust python")), "none");
    }

    #[test]
    fn test_code_language_without_info() {
        assert_eq!(code_language(None), "none");
        assert_eq!(code_language(Some("   ")), "none");
    }
}
