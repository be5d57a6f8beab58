//! Length section - two points per character, capped.

use super::SectionPoints;

/// Maximum points the length section can award (reached at 20 characters).
pub const LENGTH_POINTS_CAP: SectionPoints = 40;

const POINTS_PER_CHAR: usize = 2;

/// Scores the password by its length in characters.
///
/// Returns `min(40, chars * 2)`.
pub fn length_section(password: &str) -> SectionPoints {
    let points = password
        .chars()
        .count()
        .saturating_mul(POINTS_PER_CHAR)
        .min(LENGTH_POINTS_CAP as usize);
    points as SectionPoints
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_section_empty() {
        assert_eq!(length_section(""), 0);
    }

    #[test]
    fn test_length_section_short() {
        assert_eq!(length_section("abcdef"), 12);
    }

    #[test]
    fn test_length_section_saturates_at_twenty() {
        assert_eq!(length_section(&"a".repeat(19)), 38);
        assert_eq!(length_section(&"a".repeat(20)), 40);
        assert_eq!(length_section(&"a".repeat(50)), 40);
    }

    #[test]
    fn test_length_section_counts_chars_not_bytes() {
        // 3 chars, 9 bytes
        assert_eq!(length_section("€€€"), 6);
    }
}
