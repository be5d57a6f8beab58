//! Password strength evaluator - main scoring logic.

use std::fmt;

use crate::sections::{SectionPoints, character_variety_section, length_section};

/// Lowest score labelled [`StrengthLabel::Medium`].
pub const MEDIUM_THRESHOLD: u8 = 50;
/// Lowest score labelled [`StrengthLabel::Strong`].
pub const STRONG_THRESHOLD: u8 = 80;

/// Three-tier strength classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum StrengthLabel {
    Weak,
    Medium,
    Strong,
}

impl StrengthLabel {
    /// Classifies a score: `< 50` weak, `50..80` medium, `>= 80` strong.
    pub fn from_score(score: u8) -> Self {
        if score < MEDIUM_THRESHOLD {
            StrengthLabel::Weak
        } else if score < STRONG_THRESHOLD {
            StrengthLabel::Medium
        } else {
            StrengthLabel::Strong
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            StrengthLabel::Weak => "Weak",
            StrengthLabel::Medium => "Medium",
            StrengthLabel::Strong => "Strong",
        }
    }

    /// Indicator colour for a strength bar.
    pub fn color(self) -> &'static str {
        match self {
            StrengthLabel::Weak => "red",
            StrengthLabel::Medium => "orange",
            StrengthLabel::Strong => "green",
        }
    }
}

impl fmt::Display for StrengthLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Score in `0..=100` and its label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StrengthResult {
    pub score: u8,
    pub label: StrengthLabel,
}

impl StrengthResult {
    pub fn new(score: u8) -> Self {
        Self {
            score,
            label: StrengthLabel::from_score(score),
        }
    }
}

impl fmt::Display for StrengthResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}/100)", self.label, self.score)
    }
}

/// Scores a password on length and character variety.
///
/// The score is `min(40, 2 * chars)` plus 15 for each of the four character
/// classes present. It cannot exceed 100. Any string is accepted; the empty
/// string scores 0.
pub fn score(password: &str) -> StrengthResult {
    // Orchestrator: sum sections in sequence
    let sections: [(&str, fn(&str) -> SectionPoints); 2] = [
        ("length", length_section),
        ("variety", character_variety_section),
    ];

    let mut total: u8 = 0;
    for (_section_name, section_fn) in sections {
        let points = section_fn(password);
        #[cfg(feature = "tracing")]
        tracing::trace!("strength section {}: {} points", _section_name, points);
        total += points;
    }

    let result = StrengthResult::new(total);

    #[cfg(feature = "tracing")]
    tracing::debug!("password scored {}", result);

    result
}
