//! Character variety section - checks for uppercase, lowercase, digits, symbols.

use crate::charset::CharacterClass;
use super::SectionPoints;

/// Points for each character class present in the password.
pub const POINTS_PER_CLASS: SectionPoints = 15;

/// Returns the character classes that have at least one representative in `password`.
pub fn classes_present(password: &str) -> Vec<CharacterClass> {
    CharacterClass::ALL
        .into_iter()
        .filter(|&class| password.chars().any(|c| class.contains(c)))
        .collect()
}

/// Scores the password by how many of the four classes appear in it.
///
/// Symbols are matched against the fixed punctuation set, so spaces and
/// non-ASCII characters count toward no class.
pub fn character_variety_section(password: &str) -> SectionPoints {
    classes_present(password).len() as SectionPoints * POINTS_PER_CLASS
}
