//! npm package name validation and normalisation

use regex::Regex;
use std::path::Path;
use std::sync::LazyLock;

static VALID_NAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:@[a-z0-9\-*~][a-z0-9\-*._~]*/)?[a-z0-9\-~][a-z0-9\-._~]*$")
        .expect("package name pattern compiles")
});
static WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("whitespace pattern compiles"));
static INVALID_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-z0-9\-~._]+").expect("invalid-run pattern compiles"));

/// Whether `name` is acceptable as the `name` field of a `package.json`
pub fn is_valid_package_name(name: &str) -> bool {
    VALID_NAME.is_match(name)
}

/// Best-effort conversion of an arbitrary string into a valid package name.
///
/// Lowercases, turns whitespace runs into `-`, drops leading `.`/`_`, collapses
/// any other disallowed run into a single `-` and trims trailing `-`. The result
/// is stable under re-application.
pub fn to_valid_package_name(name: &str) -> String {
    let lowered = name.trim().to_lowercase();
    let hyphenated = WHITESPACE.replace_all(&lowered, "-");
    let stripped = hyphenated.trim_start_matches(['.', '_']);
    let collapsed = INVALID_RUN.replace_all(stripped, "-");
    collapsed.trim_end_matches('-').to_string()
}

/// Default package name: the last segment of the resolved target directory
pub fn default_package_name(root: &Path) -> String {
    root.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default()
}
