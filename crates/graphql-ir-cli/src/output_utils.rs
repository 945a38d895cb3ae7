pub(crate) const GREEN_CHECK: &str = "\u{2705}";
pub(crate) const RED_X: &str = "\u{274C}";

/// `1 variant`, `3 variants`, etc.
pub(crate) fn pluralize(count: usize, noun: &str) -> String {
    if count == 1 {
        format!("{count} {noun}")
    } else {
        format!("{count} {noun}s")
    }
}
