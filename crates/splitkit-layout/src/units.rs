//! Pure conversions between pixel and flex-fraction sizes.
//!
//! The px/fr duality is normalized here, once, before any resize
//! arithmetic — callers never divide by the container extent themselves.

use splitkit_common::types::Unit;

/// Numeric value of a flex-fraction size.
pub fn fr_to_number(fr: f64) -> f64 {
    fr
}

/// Numeric value of a pixel size.
pub fn px_to_number(px: f64) -> f64 {
    px
}

/// Convert a pixel size to a fraction of the container extent.
///
/// A zero or negative extent yields `0.0`; NaN/Infinity never escape.
pub fn px_to_fr(px: f64, container: f64) -> f64 {
    if container <= 0.0 {
        return 0.0;
    }
    px / container
}

/// Normalize any unit to a flex fraction against the container extent.
/// Identity for fractions, pixel conversion otherwise.
pub fn to_fr(value: Unit, container: f64) -> f64 {
    match value {
        Unit::Fr(fr) => fr_to_number(fr),
        Unit::Px(px) => px_to_fr(px, container),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fr_is_identity() {
        assert_eq!(fr_to_number(0.25), 0.25);
    }

    #[test]
    fn px_is_identity() {
        assert_eq!(px_to_number(120.0), 120.0);
    }

    #[test]
    fn px_to_fr_divides_by_container() {
        assert!((px_to_fr(200.0, 800.0) - 0.25).abs() < 1e-9);
    }

    #[test]
    fn px_to_fr_zero_container_is_zero() {
        assert_eq!(px_to_fr(200.0, 0.0), 0.0);
    }

    #[test]
    fn px_to_fr_negative_container_is_zero() {
        assert_eq!(px_to_fr(200.0, -10.0), 0.0);
    }

    #[test]
    fn px_to_fr_never_non_finite() {
        assert!(px_to_fr(f64::MAX, 0.0).is_finite());
        assert!(px_to_fr(100.0, 0.0).is_finite());
    }

    #[test]
    fn to_fr_fraction_identity() {
        assert_eq!(to_fr(Unit::Fr(0.4), 800.0), 0.4);
    }

    #[test]
    fn to_fr_converts_pixels() {
        assert!((to_fr(Unit::Px(80.0), 800.0) - 0.1).abs() < 1e-9);
    }

    #[test]
    fn to_fr_pixels_with_degenerate_container() {
        assert_eq!(to_fr(Unit::Px(80.0), 0.0), 0.0);
    }
}
