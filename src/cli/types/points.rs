//! Point value type for player costs.

use crate::error::{FantasyError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Type-safe wrapper for the cost of drafting a player.
///
/// Keeps player costs from being mixed up with scores or other counts.
///
/// # Examples
///
/// ```rust
/// use fantasy_cricket::PointValue;
///
/// let value = PointValue::new(9);
/// assert_eq!(value.as_u32(), 9);
/// assert_eq!(value.to_string(), "9");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PointValue(pub u32);

impl PointValue {
    pub fn new(value: u32) -> Self {
        Self(value)
    }

    pub fn as_u32(&self) -> u32 {
        self.0
    }

    /// Listed players always cost at least one point.
    pub fn is_positive(&self) -> bool {
        self.0 > 0
    }
}

impl fmt::Display for PointValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl FromStr for PointValue {
    type Err = FantasyError;

    fn from_str(s: &str) -> Result<Self> {
        let value = Self(s.trim().parse()?);
        if !value.is_positive() {
            return Err(FantasyError::InvalidPointValue {
                value: s.trim().to_string(),
            });
        }
        Ok(value)
    }
}

impl From<u32> for PointValue {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_point_value() {
        assert_eq!(" 8 ".parse::<PointValue>().unwrap(), PointValue::new(8));
        assert!("eight".parse::<PointValue>().is_err());
    }

    #[test]
    fn test_zero_point_value_rejected() {
        assert!(matches!(
            "0".parse::<PointValue>(),
            Err(FantasyError::InvalidPointValue { .. })
        ));
        assert!(!PointValue::default().is_positive());
    }

    #[test]
    fn test_display_respects_width() {
        assert_eq!(format!("{:>3}", PointValue::from(7)), "  7");
    }
}
