use std::fmt;

use crate::error::{UiTagError, UiTagResult};

/// A "W:H" aspect ratio as written in configuration or a tag attribute.
///
/// The carousel turns this into a height percentage used for
/// `padding-bottom` and spacer sizing. Both components must be finite
/// and positive; anything else is rejected so callers can substitute a
/// known-good default instead of dividing by zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AspectRatio {
    pub width: f64,
    pub height: f64,
}

impl AspectRatio {
    /// Parse a `"W:H"` string such as `"2.35:1"`.
    pub fn parse(value: &str) -> UiTagResult<Self> {
        let (w, h) = value
            .split_once(':')
            .ok_or_else(|| invalid(value, "expected a 'W:H' pair"))?;
        let width: f64 = w
            .trim()
            .parse()
            .map_err(|_| invalid(value, "width is not a number"))?;
        let height: f64 = h
            .trim()
            .parse()
            .map_err(|_| invalid(value, "height is not a number"))?;
        if !width.is_finite() || !height.is_finite() {
            return Err(invalid(value, "components must be finite"));
        }
        if width <= 0.0 || height <= 0.0 {
            return Err(invalid(value, "components must be positive"));
        }
        Ok(Self { width, height })
    }

    /// Parse leniently: an invalid string logs a warning and yields `fallback`.
    pub fn parse_or_default(value: &str, fallback: AspectRatio) -> AspectRatio {
        match Self::parse(value) {
            Ok(ratio) => ratio,
            Err(err) => {
                tracing::warn!(ratio = value, %err, "falling back to default aspect ratio");
                fallback
            }
        }
    }

    /// Height as a percentage of width, with the height/width quotient
    /// clamped to `[0.01, 10]` before scaling. `1:1` gives 100, `1:20`
    /// hits the 1000 cap, `20:1` gives 5.
    pub fn height_percent(&self) -> f64 {
        (self.height / self.width).clamp(0.01, 10.0) * 100.0
    }
}

/// The widescreen ratio applied when neither the page nor the tag names one.
impl Default for AspectRatio {
    fn default() -> Self {
        Self {
            width: 2.35,
            height: 1.0,
        }
    }
}

impl fmt::Display for AspectRatio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.width, self.height)
    }
}

fn invalid(value: &str, reason: &str) -> UiTagError {
    UiTagError::InvalidRatio {
        value: value.to_string(),
        reason: reason.to_string(),
    }
}
