//! # Derived Section Properties
//!
//! Properties of doubly symmetric I-shapes derived from the tabulated ones.
//!
//! ## Notation
//!
//! - `r` = radius of gyration √(I/A)
//! - `ro²` = polar radius of gyration about the shear center
//! - `rts` = effective radius of gyration for LTB
//! - `h0` = distance between flange centroids

use crate::errors::{CalcError, CalcResult};

fn positive(quantity: &str, name: &str, value: f64) -> CalcResult<()> {
    if !(value > 0.0) {
        return Err(CalcError::domain(quantity, format!("{} must be positive, got {}", name, value)));
    }
    Ok(())
}

/// r = √(I/A)
///
/// # Example
/// ```rust
/// use steel_core::equations::section::radius_of_gyration;
///
/// let ry = radius_of_gyration(37.1, 9.13).unwrap();
/// assert!((ry - 2.0158).abs() < 1e-4);
/// ```
pub fn radius_of_gyration(i_in4: f64, a_in2: f64) -> CalcResult<f64> {
    positive("r", "area", a_in2)?;
    positive("r", "moment of inertia", i_in4)?;
    Ok((i_in4 / a_in2).sqrt())
}

/// ro² = (Ixx + Iyy) / Ag, shear center at the centroid
pub fn polar_radius_squared(ixx_in4: f64, iyy_in4: f64, ag_in2: f64) -> CalcResult<f64> {
    positive("ro", "area", ag_in2)?;
    let ro2 = (ixx_in4 + iyy_in4) / ag_in2;
    positive("ro", "Ixx + Iyy", ro2)?;
    Ok(ro2)
}

/// rts = √(√(Iyy·Cw) / Sxx) (Eq.F2-7)
pub fn effective_radius_torsional(iyy_in4: f64, cw_in6: f64, sxx_in3: f64) -> CalcResult<f64> {
    positive("rts", "Sxx", sxx_in3)?;
    let rts = ((iyy_in4 * cw_in6).sqrt() / sxx_in3).sqrt();
    positive("rts", "rts", rts)?;
    Ok(rts)
}

/// h0 = √(4·Cw / Iyy)
pub fn flange_distance(cw_in6: f64, iyy_in4: f64) -> CalcResult<f64> {
    positive("h0", "Iyy", iyy_in4)?;
    let h0 = (4.0 * cw_in6 / iyy_in4).sqrt();
    positive("h0", "h0", h0)?;
    Ok(h0)
}
