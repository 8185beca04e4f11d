//! Terminal output utilities.
//!
//! Provides padding and banner helpers for the plain-text tables.

/// Format a value as a left-aligned field of at least `width` characters.
///
/// Longer values are kept whole so table rows never lose data.
pub fn format_field<T: ToString>(value: T, width: usize) -> String {
    let value_str = value.to_string();
    format!("{value_str:<width$}")
}

/// A horizontal rule of `width` copies of `ch`.
pub fn rule(ch: char, width: usize) -> String {
    std::iter::repeat(ch).take(width).collect()
}

/// Banner: a title centered between two `=` rules, ending in a newline.
pub fn banner(title: &str, width: usize) -> String {
    let line = rule('=', width);
    format!("{line}\n{title:^width$}\n{line}\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_field_short() {
        assert_eq!(format_field("test", 10), "test      ");
    }

    #[test]
    fn test_format_field_exact() {
        assert_eq!(format_field("test", 4), "test");
    }

    #[test]
    fn test_format_field_long() {
        assert_eq!(format_field("long_value", 5), "long_value");
    }

    #[test]
    fn test_format_field_number() {
        assert_eq!(format_field(42, 6), "42    ");
    }

    #[test]
    fn test_banner() {
        assert_eq!(rule('-', 3), "---");
        assert_eq!(banner("Hi", 6), "======\n  Hi  \n======\n");
    }
}
