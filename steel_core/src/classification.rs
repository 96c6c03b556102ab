//! # Element Classification
//!
//! Width-to-thickness classification of W-shape flanges and webs per
//! AISC 360-16 Table B4.1a (members in axial compression) and Table B4.1b
//! (members in flexure).
//!
//! Compression elements are either nonslender or slender; they are reported
//! as [`ElementClass::Compact`] / [`ElementClass::Slender`] with no `λp`.
//!
//! | Element | Table | Case | λp | λr |
//! |---|---|---|---|---|
//! | Flange, compression | B4.1a | 1 | - | 0.56 √(E/Fy) |
//! | Web, compression | B4.1a | 5 | - | 1.49 √(E/Fy) |
//! | Flange, flexure | B4.1b | 10 | 0.38 √(E/Fy) | 1.0 √(E/Fy) |
//! | Web, flexure | B4.1b | 15 | 3.76 √(E/Fy) | 5.70 √(E/Fy) |

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// Local buckling state of a plate element
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ElementClass {
    Compact,
    NonCompact,
    Slender,
}

impl ElementClass {
    pub fn display_name(&self) -> &'static str {
        match self {
            ElementClass::Compact => "Compact",
            ElementClass::NonCompact => "Noncompact",
            ElementClass::Slender => "Slender",
        }
    }
}

/// Classification of one element with the limits it was judged against.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ElementClassification {
    /// Width-to-thickness ratio λ
    pub lambda: f64,
    /// Compact limit, absent for compression elements
    #[serde(default)]
    pub lambda_p: Option<f64>,
    /// Noncompact (or nonslender) limit
    pub lambda_r: f64,
    pub class: ElementClass,
}

impl ElementClassification {
    /// Classify λ against its limits.
    pub fn new(lambda: f64, lambda_p: Option<f64>, lambda_r: f64) -> Self {
        Self {
            lambda,
            lambda_p,
            lambda_r,
            class: classify(lambda, lambda_p, lambda_r),
        }
    }

    /// Check the record is usable by a local buckling formula.
    pub fn validate(&self, field: &str) -> CalcResult<()> {
        for (name, value) in [("lambda", Some(self.lambda)), ("lambda_p", self.lambda_p), ("lambda_r", Some(self.lambda_r))] {
            if let Some(v) = value {
                if !v.is_finite() || v <= 0.0 {
                    return Err(CalcError::invalid_input(
                        format!("{}.{}", field, name),
                        v.to_string(),
                        "Slenderness values must be positive",
                    ));
                }
            }
        }
        Ok(())
    }
}

/// Flange and web classification for one check family.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ElementPair {
    #[serde(default)]
    pub flange: Option<ElementClassification>,
    #[serde(default)]
    pub web: Option<ElementClassification>,
}

impl ElementPair {
    /// True when any known element is slender
    pub fn has_slender(&self) -> bool {
        [self.flange, self.web]
            .iter()
            .flatten()
            .any(|e| e.class == ElementClass::Slender)
    }
}

/// Classification per check family, as printed in the report.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SectionClassification {
    #[serde(default)]
    pub compression: ElementPair,
    #[serde(default)]
    pub flexure: ElementPair,
}

/// Compact / NonCompact / Slender for λ against λp and λr.
///
/// With no λp the element is either nonslender (`Compact`) or `Slender`.
pub fn classify(lambda: f64, lambda_p: Option<f64>, lambda_r: f64) -> ElementClass {
    match lambda_p {
        Some(lp) if lambda <= lp => ElementClass::Compact,
        Some(_) if lambda <= lambda_r => ElementClass::NonCompact,
        None if lambda <= lambda_r => ElementClass::Compact,
        _ => ElementClass::Slender,
    }
}

// ============================================================================
// W-shape limits
// ============================================================================

/// Table B4.1a Case 1: flange of a rolled I-shape in compression
pub fn compression_flange(bf_2tf: f64, root_e_fy: f64) -> ElementClassification {
    ElementClassification::new(bf_2tf, None, 0.56 * root_e_fy)
}

/// Table B4.1a Case 5: web of a doubly symmetric I-shape in compression
pub fn compression_web(h_tw: f64, root_e_fy: f64) -> ElementClassification {
    ElementClassification::new(h_tw, None, 1.49 * root_e_fy)
}

/// Table B4.1b Case 10: flange of a rolled I-shape in flexure
pub fn flexure_flange(bf_2tf: f64, root_e_fy: f64) -> ElementClassification {
    ElementClassification::new(bf_2tf, Some(0.38 * root_e_fy), 1.0 * root_e_fy)
}

/// Table B4.1b Case 15: web of a doubly symmetric I-shape in flexure
pub fn flexure_web(h_tw: f64, root_e_fy: f64) -> ElementClassification {
    ElementClassification::new(h_tw, Some(3.76 * root_e_fy), 5.70 * root_e_fy)
}

/// Merge supplied classification with values derived from bf/2tf and h/tw.
///
/// A supplied element always wins; otherwise it is derived when its ratio is known.
pub fn resolve(
    supplied: Option<&SectionClassification>,
    bf_2tf: Option<f64>,
    h_tw: Option<f64>,
    root_e_fy: f64,
) -> SectionClassification {
    let given = supplied.copied().unwrap_or_default();
    SectionClassification {
        compression: ElementPair {
            flange: given
                .compression
                .flange
                .or_else(|| bf_2tf.map(|l| compression_flange(l, root_e_fy))),
            web: given
                .compression
                .web
                .or_else(|| h_tw.map(|l| compression_web(l, root_e_fy))),
        },
        flexure: ElementPair {
            flange: given
                .flexure
                .flange
                .or_else(|| bf_2tf.map(|l| flexure_flange(l, root_e_fy))),
            web: given.flexure.web.or_else(|| h_tw.map(|l| flexure_web(l, root_e_fy))),
        },
    }
}
