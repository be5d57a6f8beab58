//! Password generation and strength scoring library
//!
//! Generates random passwords from a selection of character classes and
//! scores any password on length and class variety.
//!
//! # Features
//!
//! - `async` (default): Enables delivery of generated passwords over a channel
//! - `tracing`: Enables logging via tracing crate
//!
//! # Environment Variables
//!
//! - `PWD_GEN_LENGTH`: Default password length, clamped to 6..=50 (default: 12)
//! - `PWD_GEN_CLASSES`: Comma-separated enabled classes
//!   (default: `upper,lower,digits,symbols`)
//!
//! # Example
//!
//! ```rust
//! use pwd_gen::{generate, score, CharacterClassSelection, StrengthLabel};
//!
//! let selection = CharacterClassSelection::new(true, true, true, false);
//! let password = generate(16, &selection).expect("a class is selected");
//! assert_eq!(password.len(), 16);
//!
//! let strength = score("Abcdefghijklmnop12!#");
//! assert_eq!(strength.score, 100);
//! assert_eq!(strength.label, StrengthLabel::Strong);
//! println!("Strength: {}", strength);
//! ```

// Internal modules
mod charset;
mod config;
mod evaluator;
mod generator;
mod sections;

// Public API
pub use charset::{CharacterClass, CharacterClassSelection, DIGITS, LOWERCASE, SYMBOLS, UPPERCASE};
pub use config::{DEFAULT_LENGTH, MAX_LENGTH, MIN_LENGTH, PasswordOptions, clamp_length};
pub use evaluator::{MEDIUM_THRESHOLD, STRONG_THRESHOLD, StrengthLabel, StrengthResult, score};
pub use generator::{
    GenerateError, GeneratedPassword, Generation, generate, generate_and_score, generate_with,
};

#[cfg(feature = "async")]
pub use generator::generate_and_score_tx;
