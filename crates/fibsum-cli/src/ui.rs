//! UI helpers for CLI display.

use console::style;

/// Check if color output is disabled via `NO_COLOR` env var.
#[must_use]
pub fn is_color_disabled() -> bool {
    std::env::var_os("NO_COLOR").is_some()
}

/// Styled header line.
#[must_use]
pub fn header(text: &str) -> String {
    if is_color_disabled() {
        format!("=== {text} ===")
    } else {
        style(format!("=== {text} ===")).bold().cyan().to_string()
    }
}

/// Styled `label: value` line.
#[must_use]
pub fn field(label: &str, value: &str) -> String {
    if is_color_disabled() {
        format!("{label}: {value}")
    } else {
        format!("{} {value}", style(format!("{label}:")).bold())
    }
}

/// Print an error message to stderr.
pub fn print_error(text: &str) {
    if is_color_disabled() {
        eprintln!("Error: {text}");
    } else {
        eprintln!("{} {text}", style("Error:").red().bold());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_contains_text() {
        assert!(header("FibSum").contains("=== FibSum ==="));
    }

    #[test]
    fn field_contains_label_and_value() {
        let line = field("Sum", "4,613,732");
        assert!(line.contains("Sum:"));
        assert!(line.ends_with("4,613,732"));
    }

    #[test]
    fn print_error_does_not_panic() {
        print_error("bad limit");
        print_error("");
    }
}
