//! Time utilities: formatting elapsed seconds for display.

/// HH:MM:SS rendering of a (non-negative) amount of whole seconds.
/// Hours grow past two digits rather than wrapping.
pub fn format_seconds(secs: i64) -> String {
    let s = secs.max(0);
    format!("{:02}:{:02}:{:02}", s / 3600, (s % 3600) / 60, s % 60)
}
