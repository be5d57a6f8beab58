//! Strength scoring sections
//!
//! Each section scores one aspect of a password and returns its points.

mod length;
mod variety;

pub use length::length_section;
pub use variety::character_variety_section;

/// Points awarded by a single section.
pub type SectionPoints = u8;
