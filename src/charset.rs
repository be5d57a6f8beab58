//! Character classes and their fixed character sets.

use std::fmt;

pub const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
pub const DIGITS: &str = "0123456789";
/// ASCII punctuation, 32 characters.
pub const SYMBOLS: &str = r##"!"#$%&'()*+,-./:;<=>?@[\]^_`{|}~"##;

/// A group of characters that can be enabled as a whole.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharacterClass {
    Upper,
    Lower,
    Digits,
    Symbols,
}

impl CharacterClass {
    /// Pool order used when concatenating enabled sets.
    pub const ALL: [CharacterClass; 4] = [
        CharacterClass::Upper,
        CharacterClass::Lower,
        CharacterClass::Digits,
        CharacterClass::Symbols,
    ];

    pub fn charset(self) -> &'static str {
        match self {
            CharacterClass::Upper => UPPERCASE,
            CharacterClass::Lower => LOWERCASE,
            CharacterClass::Digits => DIGITS,
            CharacterClass::Symbols => SYMBOLS,
        }
    }

    /// Membership test against the fixed set, not a Unicode category.
    pub fn contains(self, c: char) -> bool {
        match self {
            CharacterClass::Upper => c.is_ascii_uppercase(),
            CharacterClass::Lower => c.is_ascii_lowercase(),
            CharacterClass::Digits => c.is_ascii_digit(),
            CharacterClass::Symbols => c.is_ascii_punctuation(),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            CharacterClass::Upper => "upper",
            CharacterClass::Lower => "lower",
            CharacterClass::Digits => "digits",
            CharacterClass::Symbols => "symbols",
        }
    }

    /// Parses the names accepted in `PWD_GEN_CLASSES`.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "upper" | "uppercase" => Some(CharacterClass::Upper),
            "lower" | "lowercase" => Some(CharacterClass::Lower),
            "digits" | "numbers" => Some(CharacterClass::Digits),
            "symbols" | "special" => Some(CharacterClass::Symbols),
            _ => None,
        }
    }
}

impl fmt::Display for CharacterClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Which character classes are enabled for generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CharacterClassSelection {
    pub include_upper: bool,
    pub include_lower: bool,
    pub include_digits: bool,
    pub include_symbols: bool,
}

impl CharacterClassSelection {
    pub const NONE: CharacterClassSelection = CharacterClassSelection {
        include_upper: false,
        include_lower: false,
        include_digits: false,
        include_symbols: false,
    };

    pub fn new(upper: bool, lower: bool, digits: bool, symbols: bool) -> Self {
        Self {
            include_upper: upper,
            include_lower: lower,
            include_digits: digits,
            include_symbols: symbols,
        }
    }

    pub fn includes(&self, class: CharacterClass) -> bool {
        match class {
            CharacterClass::Upper => self.include_upper,
            CharacterClass::Lower => self.include_lower,
            CharacterClass::Digits => self.include_digits,
            CharacterClass::Symbols => self.include_symbols,
        }
    }

    pub fn set(&mut self, class: CharacterClass, enabled: bool) {
        match class {
            CharacterClass::Upper => self.include_upper = enabled,
            CharacterClass::Lower => self.include_lower = enabled,
            CharacterClass::Digits => self.include_digits = enabled,
            CharacterClass::Symbols => self.include_symbols = enabled,
        }
    }

    pub fn is_empty(&self) -> bool {
        !CharacterClass::ALL.iter().any(|&c| self.includes(c))
    }

    /// Enabled classes in pool order.
    pub fn classes(&self) -> impl Iterator<Item = CharacterClass> + '_ {
        CharacterClass::ALL.into_iter().filter(move |&c| self.includes(c))
    }

    /// Concatenates the enabled sets in the fixed order Upper, Lower, Digits, Symbols.
    pub fn pool(&self) -> Vec<char> {
        self.classes().flat_map(|c| c.charset().chars()).collect()
    }
}

impl Default for CharacterClassSelection {
    fn default() -> Self {
        Self::new(true, true, true, true)
    }
}
