//! Generation options and their environment overrides.

use crate::charset::{CharacterClass, CharacterClassSelection};
use crate::generator::{GenerateError, GeneratedPassword, Generation, generate, generate_and_score};

pub const MIN_LENGTH: usize = 6;
pub const MAX_LENGTH: usize = 50;
pub const DEFAULT_LENGTH: usize = 12;

pub const LENGTH_ENV: &str = "PWD_GEN_LENGTH";
pub const CLASSES_ENV: &str = "PWD_GEN_CLASSES";

/// Length and class selection for one generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PasswordOptions {
    pub length: usize,
    pub selection: CharacterClassSelection,
}

impl Default for PasswordOptions {
    fn default() -> Self {
        Self {
            length: DEFAULT_LENGTH,
            selection: CharacterClassSelection::default(),
        }
    }
}

impl PasswordOptions {
    /// Builds options from the environment.
    ///
    /// Priority:
    /// 1. `PWD_GEN_LENGTH`, clamped to `6..=50`
    /// 2. Default length 12
    ///
    /// `PWD_GEN_CLASSES` is a comma-separated list of `upper`, `lower`,
    /// `digits`, `symbols`. When unset, every class is enabled.
    pub fn from_env() -> Self {
        let length = std::env::var(LENGTH_ENV)
            .ok()
            .map(|raw| parse_length(&raw))
            .unwrap_or(DEFAULT_LENGTH);

        let selection = std::env::var(CLASSES_ENV)
            .ok()
            .map(|raw| parse_classes(&raw))
            .unwrap_or_default();

        Self { length, selection }
    }

    pub fn generate(&self) -> Result<GeneratedPassword, GenerateError> {
        generate(self.length, &self.selection)
    }

    pub fn generate_and_score(&self) -> Result<Generation, GenerateError> {
        generate_and_score(self.length, &self.selection)
    }
}

/// Clamps `length` into the range offered to users.
pub fn clamp_length(length: usize) -> usize {
    length.clamp(MIN_LENGTH, MAX_LENGTH)
}

fn parse_length(raw: &str) -> usize {
    match raw.trim().parse::<usize>() {
        Ok(length) => {
            let clamped = clamp_length(length);
            #[cfg(feature = "tracing")]
            {
                if clamped != length {
                    tracing::warn!("{}={} out of range, using {}", LENGTH_ENV, length, clamped);
                }
            }
            clamped
        }
        Err(_) => {
            #[cfg(feature = "tracing")]
            tracing::warn!("{}={:?} is not a number, using {}", LENGTH_ENV, raw, DEFAULT_LENGTH);
            DEFAULT_LENGTH
        }
    }
}

fn parse_classes(raw: &str) -> CharacterClassSelection {
    let mut selection = CharacterClassSelection::NONE;
    for name in raw.split(',').filter(|n| !n.trim().is_empty()) {
        match CharacterClass::from_name(name) {
            Some(class) => selection.set(class, true),
            None => {
                #[cfg(feature = "tracing")]
                tracing::warn!("{}: unknown character class {:?} ignored", CLASSES_ENV, name);
            }
        }
    }
    selection
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    /// Helper to safely set env var in tests
    fn set_env(key: &str, value: &str) {
        // SAFETY: tests touching the environment run under #[serial]
        unsafe { std::env::set_var(key, value); }
    }

    /// Helper to safely remove env var in tests
    fn remove_env(key: &str) {
        // SAFETY: tests touching the environment run under #[serial]
        unsafe { std::env::remove_var(key); }
    }

    #[test]
    fn test_default_options() {
        let options = PasswordOptions::default();
        assert_eq!(options.length, 12);
        assert_eq!(options.selection, CharacterClassSelection::new(true, true, true, true));
    }

    #[test]
    #[serial]
    fn test_from_env_unset() {
        remove_env(LENGTH_ENV);
        remove_env(CLASSES_ENV);

        assert_eq!(PasswordOptions::from_env(), PasswordOptions::default());
    }

    #[test]
    #[serial]
    fn test_from_env_length() {
        set_env(LENGTH_ENV, " 24 ");
        assert_eq!(PasswordOptions::from_env().length, 24);

        set_env(LENGTH_ENV, "2");
        assert_eq!(PasswordOptions::from_env().length, MIN_LENGTH);

        set_env(LENGTH_ENV, "500");
        assert_eq!(PasswordOptions::from_env().length, MAX_LENGTH);

        set_env(LENGTH_ENV, "twelve");
        assert_eq!(PasswordOptions::from_env().length, DEFAULT_LENGTH);

        remove_env(LENGTH_ENV);
    }

    #[test]
    #[serial]
    fn test_from_env_classes() {
        set_env(CLASSES_ENV, "lower, digits,emoji");
        let selection = PasswordOptions::from_env().selection;
        assert_eq!(selection, CharacterClassSelection::new(false, true, true, false));

        remove_env(CLASSES_ENV);
    }

    #[test]
    #[serial]
    fn test_from_env_empty_classes_fails_generation() {
        set_env(CLASSES_ENV, "");
        let options = PasswordOptions::from_env();
        assert!(options.selection.is_empty());
        assert!(matches!(
            options.generate(),
            Err(GenerateError::NoCharacterClassSelected)
        ));

        remove_env(CLASSES_ENV);
    }

    #[test]
    fn test_options_generate() {
        let options = PasswordOptions {
            length: 20,
            selection: CharacterClassSelection::new(true, false, false, false),
        };
        let generation = options.generate_and_score().unwrap();
        assert_eq!(generation.password.len(), 20);
        // 40 for length, 15 for one class
        assert_eq!(generation.strength.score, 55);
    }

    #[test]
    fn test_clamp_length() {
        assert_eq!(clamp_length(0), 6);
        assert_eq!(clamp_length(6), 6);
        assert_eq!(clamp_length(50), 50);
        assert_eq!(clamp_length(51), 50);
    }
}
