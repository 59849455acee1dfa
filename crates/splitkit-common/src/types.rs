use serde::{Deserialize, Serialize};

/// A sizing value along the active axis.
///
/// Panes and splitters mix two unit systems: fixed pixel sizes and
/// proportional flex-fraction sizes. Arithmetic never mixes them directly;
/// the unit converter normalizes to fractions first.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    /// Fixed size in pixels.
    Px(f64),
    /// Flex fraction of the available space.
    Fr(f64),
}

impl Unit {
    pub fn is_px(&self) -> bool {
        matches!(self, Unit::Px(_))
    }

    pub fn is_fr(&self) -> bool {
        matches!(self, Unit::Fr(_))
    }

    /// The raw numeric value, regardless of unit.
    pub fn value(&self) -> f64 {
        match self {
            Unit::Px(v) | Unit::Fr(v) => *v,
        }
    }
}
