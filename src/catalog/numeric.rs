// SPDX-License-Identifier: MPL-2.0
//! Digit-string handling for the price and quantity fields.
//!
//! Stored values are always raw digit strings; grouping separators exist
//! only at the display layer. `normalize` is idempotent so it can be applied
//! on every keystroke without drift.

/// Strips every non-digit character from user input.
pub fn normalize(input: &str) -> String {
    input.chars().filter(char::is_ascii_digit).collect()
}

/// Formats a raw digit string with thousands separators for display.
///
/// Empty input renders as empty; leading zeros are preserved as typed.
pub fn format_grouped(digits: &str) -> String {
    debug_assert!(digits.chars().all(|c| c.is_ascii_digit()));

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    let chars: Vec<char> = digits.chars().collect();
    for (i, c) in chars.iter().enumerate() {
        if i > 0 && (chars.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(*c);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_strips_non_digits() {
        assert_eq!(normalize("35,000won"), "35000");
        assert_eq!(normalize("₩1 2 3"), "123");
        assert_eq!(normalize("abc"), "");
    }

    #[test]
    fn normalize_is_idempotent() {
        for input in ["35,000", "007", "", "1a2b3c", "   9 9 "] {
            let once = normalize(input);
            assert_eq!(normalize(&once), once);
        }
    }

    #[test]
    fn format_grouped_inserts_separators() {
        assert_eq!(format_grouped(""), "");
        assert_eq!(format_grouped("5"), "5");
        assert_eq!(format_grouped("999"), "999");
        assert_eq!(format_grouped("1000"), "1,000");
        assert_eq!(format_grouped("35000"), "35,000");
        assert_eq!(format_grouped("250000"), "250,000");
        assert_eq!(format_grouped("1234567"), "1,234,567");
    }

    #[test]
    fn format_then_normalize_round_trips() {
        let digits = "1234567";
        assert_eq!(normalize(&format_grouped(digits)), digits);
    }
}
