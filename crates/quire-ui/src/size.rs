//! Dimension specs: fixed pixels, a percentage of the parent, or auto.

use std::fmt;
use std::str::FromStr;

/// Error returned when a dimension string cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SizeError(pub String);

impl fmt::Display for SizeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid size spec: {:?}", self.0)
    }
}

impl std::error::Error for SizeError {}

/// One dimension of a layout: `"50%"`, `"120px"`, `"120"`, `""` or `"auto"`.
///
/// Percentages are stored as fractions (`"50%"` gives `value == 0.5`).
/// `min` and `max` are set independently from the declared value; a text
/// widget declares `"auto"` and raises `min` to its measured width each frame.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Size {
    pub value: f32,
    pub percent: bool,
    pub min: f32,
    pub max: f32,
}

impl Size {
    /// No declared value: resolves to `min`.
    pub const AUTO: Size = Size { value: 0.0, percent: false, min: 0.0, max: f32::INFINITY };

    #[inline]
    pub const fn px(value: f32) -> Self {
        Size { value, ..Size::AUTO }
    }

    /// `pct` is given in percent, e.g. `Size::percent(50.0)`.
    #[inline]
    pub const fn percent(pct: f32) -> Self {
        Size { value: pct / 100.0, percent: true, ..Size::AUTO }
    }

    /// Parses `spec`, logging and falling back to [`Size::AUTO`] when malformed.
    pub fn parse_or_auto(spec: &str) -> Self {
        spec.parse().unwrap_or_else(|e: SizeError| {
            log::warn!("{e}; using auto");
            Size::AUTO
        })
    }

    /// True when the spec carries a declared, non-zero value.
    #[inline]
    pub fn is_declared(&self) -> bool {
        self.value > 0.0
    }

    /// Offset along the parent axis, without any clamping.
    #[inline]
    pub fn offset(&self, parent: f32) -> f32 {
        if self.percent { self.value * parent } else { self.value }
    }

    /// Resolves against the parent's content extent.
    ///
    /// The result is clamped to `[min, min(parent, max)]`; when `min` exceeds
    /// that upper bound the upper bound wins.
    pub fn resolve(&self, parent: f32) -> f32 {
        let upper = parent.max(0.0).min(self.max);
        self.offset(parent).max(self.min).min(upper)
    }
}

impl Default for Size {
    fn default() -> Self {
        Size::AUTO
    }
}

impl FromStr for Size {
    type Err = SizeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let spec = s.trim();
        if spec.is_empty() || spec == "auto" {
            return Ok(Size::AUTO);
        }

        let (number, percent) = match spec.strip_suffix('%') {
            Some(n) => (n, true),
            None => (spec.strip_suffix("px").unwrap_or(spec), false),
        };

        let value: f32 = number.trim().parse().map_err(|_| SizeError(s.to_string()))?;
        if !value.is_finite() {
            return Err(SizeError(s.to_string()));
        }

        Ok(if percent { Size::percent(value) } else { Size::px(value) })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── parsing ───────────────────────────────────────────────────────────

    #[test]
    fn parses_all_spellings() {
        assert_eq!("".parse::<Size>(), Ok(Size::AUTO));
        assert_eq!("auto".parse::<Size>(), Ok(Size::AUTO));
        assert_eq!("50%".parse::<Size>(), Ok(Size::percent(50.0)));
        assert_eq!("120px".parse::<Size>(), Ok(Size::px(120.0)));
        assert_eq!("7.5".parse::<Size>(), Ok(Size::px(7.5)));
    }

    #[test]
    fn percent_is_stored_as_fraction() {
        let s: Size = "25%".parse().unwrap();
        assert!(s.percent);
        assert_eq!(s.value, 0.25);
    }

    #[test]
    fn malformed_spec_is_an_error_and_falls_back_to_auto() {
        assert!("abc".parse::<Size>().is_err());
        assert!("10%px".parse::<Size>().is_err());
        assert_eq!(Size::parse_or_auto("wide"), Size::AUTO);
    }

    // ── resolution ────────────────────────────────────────────────────────

    #[test]
    fn percent_resolution_is_monotonic_and_bounded() {
        let s = Size { min: 10.0, ..Size::percent(40.0) };
        let mut prev = f32::MIN;
        for parent in [0.0, 10.0, 25.0, 50.0, 100.0, 400.0, 1000.0] {
            let r = s.resolve(parent);
            assert!(r >= prev, "not monotonic at {parent}");
            assert!(r <= parent.max(0.0));
            if parent >= s.min {
                assert!(r >= s.min);
            }
            prev = r;
        }
    }

    #[test]
    fn pixel_resolution_is_constant_until_clamped_by_parent() {
        let s = Size::px(80.0);
        assert_eq!(s.resolve(200.0), 80.0);
        assert_eq!(s.resolve(1000.0), 80.0);
        assert_eq!(s.resolve(50.0), 50.0);
    }

    #[test]
    fn auto_resolves_to_min() {
        let s = Size { min: 33.0, ..Size::AUTO };
        assert_eq!(s.resolve(500.0), 33.0);
        assert_eq!(Size::AUTO.resolve(500.0), 0.0);
    }

    #[test]
    fn max_caps_resolution() {
        let s = Size { max: 120.0, ..Size::percent(100.0) };
        assert_eq!(s.resolve(800.0), 120.0);
    }
}
