//! Display titles for manifest entries.
//!
//! Split documents are usually named after their group, e.g.
//! `23501_a-intro.html` inside `23501/`. The group id adds nothing in
//! the viewer's navigation, so it is stripped from the title.

/// Title used when nothing is left after normalization
pub const DEFAULT_TITLE: &str = "Main";

/// Derive a display title from a file stem and its group id
///
/// Removes `_<group>` (or, failing that, `<group>`) from the stem,
/// turns dashes and underscores into spaces and trims. An empty
/// result becomes `fallback`.
pub fn normalize_title_with(stem: &str, group_id: &str, fallback: &str) -> String {
    let mut title = stem.to_string();

    if !group_id.is_empty() {
        let separated = format!("_{group_id}");
        if title.contains(&separated) {
            title = title.replace(&separated, "");
        } else if title.contains(group_id) {
            title = title.replace(group_id, "");
        }
    }

    let title = title.replace(['-', '_'], " ");
    let title = title.trim();

    if title.is_empty() {
        fallback.to_string()
    } else {
        title.to_string()
    }
}

/// [`normalize_title_with`] using [`DEFAULT_TITLE`]
pub fn normalize_title(stem: &str, group_id: &str) -> String {
    normalize_title_with(stem, group_id, DEFAULT_TITLE)
}
