//! # Units
//!
//! The engine works in one fixed unit system, matching the AISC imperial
//! convention used by member check reports:
//!
//! - Length: inches (in)
//! - Force: kips
//! - Stress: kips per square inch (ksi)
//! - Moment: kip-inches (kip-in)
//!
//! No unit conversion is performed anywhere in the engine. [`Unit`] only tags
//! reported intermediate quantities so a renderer can print them.
//!
//! ## Example
//!
//! ```rust
//! use steel_core::units::Unit;
//!
//! assert_eq!(Unit::KipIn.symbol(), "kip-in");
//! assert_eq!(Unit::Ksi.to_string(), "ksi");
//! ```

use serde::{Deserialize, Serialize};

/// Unit tag for a reported quantity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Unit {
    /// Force in kips
    Kip,
    /// Stress in kips per square inch
    Ksi,
    /// Moment in kip-inches
    KipIn,
    /// Length in inches
    Inch,
    /// Area in square inches
    SqIn,
    /// Ratio or coefficient (Cv, Cb, KL/r, ...)
    Dimensionless,
}

impl Unit {
    /// Symbol as printed in member check reports
    pub fn symbol(&self) -> &'static str {
        match self {
            Unit::Kip => "kip",
            Unit::Ksi => "ksi",
            Unit::KipIn => "kip-in",
            Unit::Inch => "in",
            Unit::SqIn => "in2",
            Unit::Dimensionless => "",
        }
    }
}

impl std::fmt::Display for Unit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_symbols() {
        assert_eq!(Unit::Kip.symbol(), "kip");
        assert_eq!(Unit::SqIn.symbol(), "in2");
        assert_eq!(Unit::Dimensionless.symbol(), "");
    }
}
