use std::fmt;
use std::str::FromStr;

use crate::model::LessonError;

/// Pink used for cells when no color was chosen.
pub const DEFAULT_LESSON_COLOR: &str = "#FFB3C8";

/// Validated hex color (`#RRGGBB` or `#RGB`) for a grid cell.
///
/// Only hex digits are accepted, so the value is always safe to place in an
/// inline `style` attribute.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LessonColor(String);

impl LessonColor {
    /// Parse a hex color.
    ///
    /// # Errors
    ///
    /// Returns `LessonError::InvalidColor` if `raw` is not `#RRGGBB` or `#RGB`.
    pub fn parse(raw: &str) -> Result<Self, LessonError> {
        let trimmed = raw.trim();
        let digits = trimmed
            .strip_prefix('#')
            .ok_or_else(|| LessonError::InvalidColor(raw.to_string()))?;
        let valid_len = matches!(digits.len(), 3 | 6);
        if !valid_len || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(LessonError::InvalidColor(raw.to_string()));
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Parse a color, treating a blank value as the default pink.
    ///
    /// # Errors
    ///
    /// Returns `LessonError::InvalidColor` for non-blank, non-hex input.
    pub fn parse_or_default(raw: &str) -> Result<Self, LessonError> {
        if raw.trim().is_empty() {
            Ok(Self::default())
        } else {
            Self::parse(raw)
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for LessonColor {
    fn default() -> Self {
        Self(DEFAULT_LESSON_COLOR.to_string())
    }
}

impl fmt::Display for LessonColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for LessonColor {
    type Err = LessonError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
