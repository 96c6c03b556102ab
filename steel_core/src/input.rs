//! # Member Input
//!
//! The validated input record for one member check: section properties,
//! material, geometry, net-area data, factored demands and optional element
//! classification.
//!
//! Only `ag_in2` is required among the section properties. Every other
//! property is optional; a missing one skips just the limit states that
//! need it (recorded as `MissingField`).
//!
//! ## JSON Example
//!
//! ```json
//! {
//!   "label": "Member 3 / W8X31",
//!   "section": { "ag_in2": 9.13, "iyy_in4": 37.1, "zxx_in3": 30.4, "bf_2tf": 9.2 },
//!   "material": { "fy_ksi": 50.0, "fu_ksi": 62.0 },
//!   "geometry": { "length_in": 121.0, "kx": 2.0, "ky": 2.0 },
//!   "demand": { "pu_kip": 6.83, "mux_kip_in": 243.2 }
//! }
//! ```

use serde::{Deserialize, Serialize};

use crate::classification::{ElementPair, SectionClassification};
use crate::errors::{CalcError, CalcResult};

fn one() -> f64 {
    1.0
}

/// Return the value or a `MissingField` error naming it.
pub fn require(value: Option<f64>, field: &str) -> CalcResult<f64> {
    value.ok_or_else(|| CalcError::missing_field(field))
}

fn check_finite(field: &str, value: f64) -> CalcResult<()> {
    if !value.is_finite() {
        return Err(CalcError::invalid_input(field, value.to_string(), "Value must be finite"));
    }
    Ok(())
}

fn check_positive(field: &str, value: f64) -> CalcResult<()> {
    check_finite(field, value)?;
    if value <= 0.0 {
        return Err(CalcError::invalid_input(field, value.to_string(), "Value must be positive"));
    }
    Ok(())
}

fn check_positive_opt(field: &str, value: Option<f64>) -> CalcResult<()> {
    value.map_or(Ok(()), |v| check_positive(field, v))
}

fn check_non_negative_opt(field: &str, value: Option<f64>) -> CalcResult<()> {
    if let Some(v) = value {
        check_finite(field, v)?;
        if v < 0.0 {
            return Err(CalcError::invalid_input(field, v.to_string(), "Length cannot be negative"));
        }
    }
    Ok(())
}

// ============================================================================
// Section
// ============================================================================

/// Cross-section properties of a W-shape.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SectionProperties {
    /// Gross area Ag (in²)
    pub ag_in2: f64,
    /// Shear area along X (flanges, 2·bf·tf)
    #[serde(default)]
    pub axx_in2: Option<f64>,
    /// Shear area along Y (web, d·tw)
    #[serde(default)]
    pub ayy_in2: Option<f64>,
    #[serde(default)]
    pub ixx_in4: Option<f64>,
    #[serde(default)]
    pub iyy_in4: Option<f64>,
    /// Torsional constant J
    #[serde(default)]
    pub j_in4: Option<f64>,
    /// Warping constant Cw
    #[serde(default)]
    pub cw_in6: Option<f64>,
    #[serde(default)]
    pub sxx_in3: Option<f64>,
    #[serde(default)]
    pub syy_in3: Option<f64>,
    #[serde(default)]
    pub zxx_in3: Option<f64>,
    #[serde(default)]
    pub zyy_in3: Option<f64>,
    /// Shear center offsets from the centroid
    #[serde(default)]
    pub x0_in: f64,
    #[serde(default)]
    pub y0_in: f64,
    /// Flange width-thickness ratio bf/2tf
    #[serde(default)]
    pub bf_2tf: Option<f64>,
    /// Web width-thickness ratio h/tw
    #[serde(default)]
    pub h_tw: Option<f64>,
}

impl SectionProperties {
    pub fn validate(&self) -> CalcResult<()> {
        check_positive("section.ag_in2", self.ag_in2)?;

        let optional = [
            ("section.axx_in2", self.axx_in2),
            ("section.ayy_in2", self.ayy_in2),
            ("section.ixx_in4", self.ixx_in4),
            ("section.iyy_in4", self.iyy_in4),
            ("section.j_in4", self.j_in4),
            ("section.cw_in6", self.cw_in6),
            ("section.sxx_in3", self.sxx_in3),
            ("section.syy_in3", self.syy_in3),
            ("section.zxx_in3", self.zxx_in3),
            ("section.zyy_in3", self.zyy_in3),
            ("section.bf_2tf", self.bf_2tf),
            ("section.h_tw", self.h_tw),
        ];
        for (field, value) in optional {
            check_positive_opt(field, value)?;
        }

        check_finite("section.x0_in", self.x0_in)?;
        check_finite("section.y0_in", self.y0_in)?;
        Ok(())
    }
}

// ============================================================================
// Material
// ============================================================================

/// Steel strengths.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SteelMaterial {
    /// Specified minimum yield stress Fy (ksi)
    pub fy_ksi: f64,
    /// Specified minimum tensile strength Fu (ksi)
    pub fu_ksi: f64,
}

impl SteelMaterial {
    pub fn validate(&self) -> CalcResult<()> {
        check_positive("material.fy_ksi", self.fy_ksi)?;
        check_positive("material.fu_ksi", self.fu_ksi)
    }
}

// ============================================================================
// Geometry
// ============================================================================

/// Member length, effective length factors and bracing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MemberGeometry {
    /// Member length L (in)
    pub length_in: f64,
    #[serde(default = "one")]
    pub kx: f64,
    #[serde(default = "one")]
    pub ky: f64,
    #[serde(default = "one")]
    pub kz: f64,
    /// Unbraced length for buckling about x, defaults to L
    #[serde(default)]
    pub length_x_in: Option<f64>,
    /// Unbraced length for buckling about y, defaults to L
    #[serde(default)]
    pub length_y_in: Option<f64>,
    /// Unbraced length for torsional buckling, defaults to L
    #[serde(default)]
    pub length_z_in: Option<f64>,
    /// Lateral-torsional unbraced length Lb, defaults to L
    #[serde(default)]
    pub unbraced_length_in: Option<f64>,
    /// Lateral-torsional buckling modification factor
    #[serde(default)]
    pub cb: Option<f64>,
}

impl MemberGeometry {
    /// Pinned member of length L with every unbraced length equal to L
    pub fn pinned(length_in: f64) -> Self {
        Self {
            length_in,
            kx: 1.0,
            ky: 1.0,
            kz: 1.0,
            length_x_in: None,
            length_y_in: None,
            length_z_in: None,
            unbraced_length_in: None,
            cb: None,
        }
    }

    pub fn validate(&self) -> CalcResult<()> {
        check_non_negative_opt("geometry.length_in", Some(self.length_in))?;
        check_positive("geometry.kx", self.kx)?;
        check_positive("geometry.ky", self.ky)?;
        check_positive("geometry.kz", self.kz)?;
        check_non_negative_opt("geometry.length_x_in", self.length_x_in)?;
        check_non_negative_opt("geometry.length_y_in", self.length_y_in)?;
        check_non_negative_opt("geometry.length_z_in", self.length_z_in)?;
        check_non_negative_opt("geometry.unbraced_length_in", self.unbraced_length_in)?;
        check_positive_opt("geometry.cb", self.cb)
    }

    pub fn length_x(&self) -> f64 {
        self.length_x_in.unwrap_or(self.length_in)
    }

    pub fn length_y(&self) -> f64 {
        self.length_y_in.unwrap_or(self.length_in)
    }

    pub fn length_z(&self) -> f64 {
        self.length_z_in.unwrap_or(self.length_in)
    }

    pub fn unbraced_length(&self) -> f64 {
        self.unbraced_length_in.unwrap_or(self.length_in)
    }
}

// ============================================================================
// Net Area
// ============================================================================

/// Data for the effective net area Ae of tensile rupture.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NetAreaInput {
    /// Effective net area Ae when known from the connection design
    #[serde(default)]
    pub effective_area_in2: Option<f64>,
    /// Net section factor An / Ag
    #[serde(default = "one")]
    pub net_section_factor: f64,
    /// Shear lag factor U
    #[serde(default = "one")]
    pub shear_lag_factor: f64,
}

impl Default for NetAreaInput {
    fn default() -> Self {
        Self {
            effective_area_in2: None,
            net_section_factor: 1.0,
            shear_lag_factor: 1.0,
        }
    }
}

impl NetAreaInput {
    pub fn validate(&self) -> CalcResult<()> {
        check_positive_opt("net_area.effective_area_in2", self.effective_area_in2)?;
        for (field, factor) in [
            ("net_area.net_section_factor", self.net_section_factor),
            ("net_area.shear_lag_factor", self.shear_lag_factor),
        ] {
            check_positive(field, factor)?;
            if factor > 1.0 {
                return Err(CalcError::invalid_input(field, factor.to_string(), "Factor cannot exceed 1.0"));
            }
        }
        Ok(())
    }
}

// ============================================================================
// Demand
// ============================================================================

/// Factored demands from the analysis.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct FactoredDemand {
    /// Axial force, positive in compression
    #[serde(default)]
    pub pu_kip: f64,
    #[serde(default)]
    pub vux_kip: f64,
    #[serde(default)]
    pub vuy_kip: f64,
    #[serde(default)]
    pub mux_kip_in: f64,
    #[serde(default)]
    pub muy_kip_in: f64,
}

impl FactoredDemand {
    pub fn validate(&self) -> CalcResult<()> {
        check_finite("demand.pu_kip", self.pu_kip)?;
        check_finite("demand.vux_kip", self.vux_kip)?;
        check_finite("demand.vuy_kip", self.vuy_kip)?;
        check_finite("demand.mux_kip_in", self.mux_kip_in)?;
        check_finite("demand.muy_kip_in", self.muy_kip_in)
    }

    /// Compressive part of Pu
    pub fn compression_kip(&self) -> f64 {
        self.pu_kip.max(0.0)
    }

    /// Tensile part of Pu
    pub fn tension_kip(&self) -> f64 {
        (-self.pu_kip).max(0.0)
    }

    pub fn is_tension(&self) -> bool {
        self.pu_kip < 0.0
    }
}

// ============================================================================
// Member Input
// ============================================================================

/// Complete input for one member check.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MemberInput {
    /// Member number and profile as reported (e.g., "3 / W8X31")
    pub label: String,
    pub section: SectionProperties,
    pub material: SteelMaterial,
    pub geometry: MemberGeometry,
    #[serde(default)]
    pub net_area: NetAreaInput,
    #[serde(default)]
    pub demand: FactoredDemand,
    /// Element classification as printed in the report, overriding derivation
    #[serde(default)]
    pub classification: Option<SectionClassification>,
}

impl MemberInput {
    /// Parse one member record.
    pub fn from_json(json: &str) -> CalcResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Parse a JSON array of member records, or a single record as a batch of one.
    pub fn batch_from_json(json: &str) -> CalcResult<Vec<Self>> {
        if json.trim_start().starts_with('[') {
            Ok(serde_json::from_str(json)?)
        } else {
            Self::from_json(json).map(|m| vec![m])
        }
    }

    /// Validate every part of the input.
    pub fn validate(&self) -> CalcResult<()> {
        self.section.validate()?;
        self.material.validate()?;
        self.geometry.validate()?;
        self.net_area.validate()?;
        self.demand.validate()?;

        if let Some(classification) = &self.classification {
            validate_pair("classification.compression", &classification.compression)?;
            validate_pair("classification.flexure", &classification.flexure)?;
        }
        Ok(())
    }
}

fn validate_pair(prefix: &str, pair: &ElementPair) -> CalcResult<()> {
    if let Some(flange) = &pair.flange {
        flange.validate(&format!("{}.flange", prefix))?;
    }
    if let Some(web) = &pair.web {
        web.validate(&format!("{}.web", prefix))?;
    }
    Ok(())
}
