//! Formatting Helpers
//!
//! Date defaults for the view filters and the status badge palette.

use chrono::Local;

/// Placeholder shown instead of an empty table
pub const EMPTY_PLACEHOLDER: &str = "Немає записів";

/// Current month as `YYYY-MM`
pub fn current_month() -> String {
    Local::now().format("%Y-%m").to_string()
}

/// Current day as `YYYY-MM-DD`
pub fn current_day() -> String {
    Local::now().format("%Y-%m-%d").to_string()
}

/// Month query value: the bound input when set, the current month otherwise
pub fn month_or_current(input: &str) -> String {
    let input = input.trim();
    if input.is_empty() {
        current_month()
    } else {
        input.to_string()
    }
}

/// Date query value: the bound input when set, today otherwise
pub fn day_or_current(input: &str) -> String {
    let input = input.trim();
    if input.is_empty() {
        current_day()
    } else {
        input.to_string()
    }
}

/// Badge color for a person's status. "Вільний" reads as available,
/// "Відпустка" as on vacation; duty codes get the default blue.
pub fn status_color(status: &str) -> &'static str {
    if status.contains("Вільн") {
        "#2ecc71"
    } else if status.contains("Відпустк") {
        "#e67e22"
    } else {
        "#3498db"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn month_defaults_only_when_empty() {
        assert_eq!(month_or_current("2025-01"), "2025-01");
        assert_eq!(month_or_current("  2025-01  "), "2025-01");
        assert_eq!(month_or_current(""), current_month());
        assert_eq!(month_or_current("   "), current_month());
    }

    #[test]
    fn day_defaults_only_when_empty() {
        assert_eq!(day_or_current("2025-01-15"), "2025-01-15");
        assert_eq!(day_or_current(""), current_day());
    }

    #[test]
    fn current_month_is_a_prefix_of_current_day() {
        assert!(current_day().starts_with(&current_month()));
    }

    #[test]
    fn status_palette_by_substring() {
        assert_eq!(status_color("Вільний"), "#2ecc71");
        assert_eq!(status_color("Відпустка"), "#e67e22");
        assert_eq!(status_color("р"), "#3498db");
        assert_eq!(status_color("зп"), "#3498db");
    }
}
