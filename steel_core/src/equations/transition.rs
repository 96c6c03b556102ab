//! Linear interpolation between a plastic and an elastic limit.
//!
//! Inelastic LTB (Eq.F2-2) interpolates on unbraced length; noncompact flange
//! local buckling (Eqs. F3-1, F6-2) interpolates on slenderness. Both are
//! the same straight line.

use crate::errors::{CalcError, CalcResult};

/// upper − (upper − lower)·(x − x_p)/(x_r − x_p)
///
/// # Example
/// ```rust
/// use steel_core::equations::transition::linear_transition;
///
/// let mid = linear_transition(100.0, 70.0, 15.0, 10.0, 20.0).unwrap();
/// assert!((mid - 85.0).abs() < 1e-12);
/// ```
pub fn linear_transition(upper: f64, lower: f64, x: f64, x_p: f64, x_r: f64) -> CalcResult<f64> {
    if !(x_r > x_p) {
        return Err(CalcError::domain(
            "linear transition",
            format!("upper limit {} must exceed lower limit {}", x_r, x_p),
        ));
    }
    Ok(upper - (upper - lower) * (x - x_p) / (x_r - x_p))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoints() {
        assert_eq!(linear_transition(1520.0, 962.5, 85.44, 85.44, 297.35).unwrap(), 1520.0);
        let at_r = linear_transition(1520.0, 962.5, 297.35, 85.44, 297.35).unwrap();
        assert!((at_r - 962.5).abs() < 1e-9);
    }

    #[test]
    fn test_degenerate_limits() {
        assert!(linear_transition(1.0, 0.5, 1.0, 2.0, 2.0).is_err());
        assert!(linear_transition(1.0, 0.5, 1.0, 3.0, 2.0).is_err());
    }
}
