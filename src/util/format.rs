//! Small display-formatting helpers for list cards.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

/// Truncate a description to `max` characters, appending an ellipsis when cut.
pub fn truncate_desc(desc: &str, max: usize) -> String {
    if desc.chars().count() <= max {
        return desc.to_owned();
    }
    let cut: String = desc.chars().take(max).collect();
    format!("{cut}...")
}

/// Placeholder shown when an optional profile field is empty.
pub fn or_placeholder(value: Option<&str>, placeholder: &str) -> String {
    match value {
        Some(v) if !v.trim().is_empty() => v.to_owned(),
        _ => placeholder.to_owned(),
    }
}
