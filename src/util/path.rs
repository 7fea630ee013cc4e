//! Path segment checks for ids that become file or directory names

/// Whether `name` can be joined onto a root without leaving it: non-empty,
/// no separators, and not `.` or `..`
pub fn is_plain_segment(name: &str) -> bool {
    !name.is_empty()
        && name != "."
        && name != ".."
        && !name.contains(['/', '\\', '\0'])
}
