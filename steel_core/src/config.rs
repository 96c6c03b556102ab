//! # Design Configuration
//!
//! Every default the engine relies on lives here as an explicit field:
//! material moduli, resistance factors, the LTB coefficient `c`, the Cb
//! fallback, the web shear coefficient model and the advisory slenderness
//! limit. Nothing is hidden inside the limit-state functions.
//!
//! All fields carry `#[serde(default)]`, so a partial TOML or JSON file only
//! needs the values it overrides.
//!
//! ## Example
//!
//! ```rust
//! use steel_core::config::DesignConfig;
//!
//! let config: DesignConfig = serde_json::from_str(r#"{ "default_cb": 1.14 }"#).unwrap();
//! assert_eq!(config.default_cb, 1.14);
//! assert_eq!(config.elastic_modulus_ksi, 29000.0);
//! assert!(config.validate().is_ok());
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// Modulus of elasticity of structural steel (ksi)
pub const STEEL_E_KSI: f64 = 29000.0;

/// Ratio E/G used for the shear modulus, G = E / 2.6
pub const E_OVER_G: f64 = 2.6;

/// LRFD resistance factors (φ) per limit-state family.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResistanceFactors {
    pub tension_yielding: f64,
    pub tension_rupture: f64,
    pub compression: f64,
    pub flexure: f64,
    pub shear: f64,
}

impl Default for ResistanceFactors {
    fn default() -> Self {
        Self {
            tension_yielding: 0.90,
            tension_rupture: 0.75,
            compression: 0.90,
            flexure: 0.90,
            shear: 0.90,
        }
    }
}

impl ResistanceFactors {
    fn entries(&self) -> [(&'static str, f64); 5] {
        [
            ("resistance.tension_yielding", self.tension_yielding),
            ("resistance.tension_rupture", self.tension_rupture),
            ("resistance.compression", self.compression),
            ("resistance.flexure", self.flexure),
            ("resistance.shear", self.shear),
        ]
    }
}

/// Which web shear coefficient provider the shear checks use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShearCoefficientModel {
    /// Cv = 1.0, the value member check reports print for rolled shapes
    #[default]
    Unity,
    /// AISC G2.1(b) from h/tw, falling back to unity when h/tw is absent
    WebSlenderness,
}

/// Engine-wide design defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DesignConfig {
    /// Modulus of elasticity E (ksi)
    pub elastic_modulus_ksi: f64,

    /// Shear modulus G (ksi). Absent means E / 2.6, following E.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shear_modulus_ksi: Option<f64>,

    pub resistance: ResistanceFactors,

    /// Coefficient c of Eq.F2-8a (1.0 for doubly symmetric I-shapes)
    pub ltb_coefficient_c: f64,

    /// Cb used when the input does not supply one
    pub default_cb: f64,

    pub shear_coefficient: ShearCoefficientModel,

    /// Advisory KL/r limit (AISC E2 user note)
    pub slenderness_limit: f64,
}

impl Default for DesignConfig {
    fn default() -> Self {
        Self {
            elastic_modulus_ksi: STEEL_E_KSI,
            shear_modulus_ksi: None,
            resistance: ResistanceFactors::default(),
            ltb_coefficient_c: 1.0,
            default_cb: 1.0,
            shear_coefficient: ShearCoefficientModel::default(),
            slenderness_limit: 200.0,
        }
    }
}

impl DesignConfig {
    /// Validate configuration values.
    pub fn validate(&self) -> CalcResult<()> {
        let positives = [
            ("elastic_modulus_ksi", self.elastic_modulus_ksi),
            ("shear_modulus_ksi", self.shear_modulus()),
            ("ltb_coefficient_c", self.ltb_coefficient_c),
            ("default_cb", self.default_cb),
            ("slenderness_limit", self.slenderness_limit),
        ];
        for (field, value) in positives {
            if !value.is_finite() || value <= 0.0 {
                return Err(CalcError::invalid_input(field, value.to_string(), "Must be a positive finite number"));
            }
        }

        for (field, phi) in self.resistance.entries() {
            if !phi.is_finite() || phi <= 0.0 || phi > 1.0 {
                return Err(CalcError::invalid_input(
                    field,
                    phi.to_string(),
                    "Resistance factor must be in (0, 1]",
                ));
            }
        }
        Ok(())
    }

    /// G as configured, else E / 2.6
    pub fn shear_modulus(&self) -> f64 {
        self.shear_modulus_ksi
            .unwrap_or(self.elastic_modulus_ksi / E_OVER_G)
    }

    /// sqrt(E / Fy), the common factor of every Table B4.1 limit and of Lp
    pub fn root_e_over_fy(&self, fy_ksi: f64) -> f64 {
        (self.elastic_modulus_ksi / fy_ksi).sqrt()
    }
}
