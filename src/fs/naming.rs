//! Export file name generation.

use std::sync::LazyLock;

use regex::Regex;

/// Maximum length of a sanitized file name, in characters, before the extension.
pub const MAX_FILE_NAME_LENGTH: usize = 100;

static FORBIDDEN_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"[\\/:*?"<>|]"#).unwrap());

static WHITESPACE_RUNS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

/// Make a string safe to use as a file name.
///
/// Forbidden characters become spaces, whitespace runs collapse to a single
/// space, and the result is trimmed and cut to [`MAX_FILE_NAME_LENGTH`] characters.
pub fn sanitize_file_name(name: &str) -> String {
    let replaced = FORBIDDEN_CHARS.replace_all(name, " ");
    let collapsed = WHITESPACE_RUNS.replace_all(replaced.trim(), " ");

    let truncated: String = collapsed.chars().take(MAX_FILE_NAME_LENGTH).collect();
    truncated.trim_end().to_string()
}

/// Fill the file name template with a node's metadata.
pub fn render_file_name(
    template: &str,
    page_number: &str,
    content_type: &str,
    page_name: &str,
) -> String {
    template
        .replace("{page_number}", page_number)
        .replace("{content_type}", content_type)
        .replace("{page_name}", page_name)
}

/// Node number taken from the last `/`-separated segment of a link.
///
/// `/node/42` and `/?q=node/42` both yield `42`.
pub fn page_number_from_link(link: &str) -> &str {
    link.rsplit('/').next().unwrap_or(link)
}
