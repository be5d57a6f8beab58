//! Password generator - samples the combined pool of enabled classes.

use std::fmt;

use rand::Rng;
use secrecy::{ExposeSecret, SecretString};
use thiserror::Error;

#[cfg(feature = "async")]
use tokio::sync::mpsc;

use crate::charset::CharacterClassSelection;
use crate::evaluator::{StrengthResult, score};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GenerateError {
    #[error("Please select at least one character type.")]
    NoCharacterClassSelected,
    #[error("Invalid password length: {0}")]
    InvalidLength(usize),
}

/// A generated password. `Debug` never shows the characters.
pub struct GeneratedPassword(SecretString);

impl GeneratedPassword {
    pub fn expose_secret(&self) -> &str {
        self.0.expose_secret()
    }

    /// Length in characters.
    pub fn len(&self) -> usize {
        self.expose_secret().chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.expose_secret().is_empty()
    }

    pub fn strength(&self) -> StrengthResult {
        score(self.expose_secret())
    }

    pub fn into_secret(self) -> SecretString {
        self.0
    }
}

impl fmt::Debug for GeneratedPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("GeneratedPassword").field(&"[REDACTED]").finish()
    }
}

/// A password and its strength, as handed to a rendering layer.
#[derive(Debug)]
pub struct Generation {
    pub password: GeneratedPassword,
    pub strength: StrengthResult,
}

/// Generates a password of `length` characters using the thread-local RNG.
///
/// # Errors
///
/// - [`GenerateError::NoCharacterClassSelected`] if every class is disabled,
///   whatever the length
/// - [`GenerateError::InvalidLength`] if `length` is 0
pub fn generate(
    length: usize,
    selection: &CharacterClassSelection,
) -> Result<GeneratedPassword, GenerateError> {
    generate_with(&mut rand::rng(), length, selection)
}

/// Generates a password drawing from `rng`.
///
/// Each position is sampled uniformly and independently from the pool, so a
/// selected class is not guaranteed to appear. Pass a cryptographically secure
/// RNG here when the default source is not acceptable.
pub fn generate_with<R: Rng>(
    rng: &mut R,
    length: usize,
    selection: &CharacterClassSelection,
) -> Result<GeneratedPassword, GenerateError> {
    if selection.is_empty() {
        #[cfg(feature = "tracing")]
        tracing::warn!("password generation refused: no character class selected");
        return Err(GenerateError::NoCharacterClassSelected);
    }
    if length == 0 {
        #[cfg(feature = "tracing")]
        tracing::warn!("password generation refused: length 0");
        return Err(GenerateError::InvalidLength(length));
    }

    let pool = selection.pool();
    let password: String = (0..length)
        .map(|_| pool[rng.random_range(0..pool.len())])
        .collect();

    #[cfg(feature = "tracing")]
    tracing::debug!("generated {} chars from a pool of {}", length, pool.len());

    Ok(GeneratedPassword(SecretString::new(password.into())))
}

/// Generates a password and scores it.
pub fn generate_and_score(
    length: usize,
    selection: &CharacterClassSelection,
) -> Result<Generation, GenerateError> {
    let password = generate(length, selection)?;
    let strength = password.strength();
    Ok(Generation { password, strength })
}

/// Generates and scores a password, then sends the outcome on `tx`.
///
/// Errors are sent as-is so the receiver can present them.
#[cfg(feature = "async")]
pub async fn generate_and_score_tx(
    length: usize,
    selection: CharacterClassSelection,
    tx: mpsc::Sender<Result<Generation, GenerateError>>,
) {
    #[cfg(feature = "tracing")]
    tracing::info!("generation is about to start...");

    let outcome = generate_and_score(length, &selection);

    if let Err(_e) = tx.send(outcome).await {
        #[cfg(feature = "tracing")]
        tracing::error!("Failed to send generated password: receiver closed");
    }
}
