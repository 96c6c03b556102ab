//! # Equation Registry
//!
//! Central registry of the AISC 360-16 clauses and equations the engine uses.
//! Each equation has metadata including its code section, plain-text formula
//! and variable definitions.
//!
//! ## Architecture
//!
//! - [`Clause`] - a governing clause reference such as `Cl.F2.2`
//! - [`Equation`] - a numbered equation such as `Eq.E3-2`
//! - [`Reference`] - either of the two; serializes as the report string
//!
//! The reference strings are part of the output contract: they match the
//! nomenclature printed by the source design reports.
//!
//! ## Usage
//!
//! ```rust
//! use steel_core::equations::registry::{Equation, Reference};
//!
//! assert_eq!(Equation::E3_2.label(), "Eq.E3-2");
//!
//! let parsed: Reference = "Cl.F2.2".parse().unwrap();
//! assert_eq!(parsed.to_string(), "Cl.F2.2");
//!
//! let meta = Equation::F2_6.metadata();
//! println!("Formula: {}", meta.formula_plain);
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::errors::CalcError;

// ============================================================================
// Code Reference
// ============================================================================

/// Edition of AISC 360 the engine implements
pub const AISC_360_YEAR: u16 = 2016;

/// Section reference into AISC 360.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CodeReference {
    pub year: u16,
    pub section: &'static str,
}

impl CodeReference {
    pub const fn aisc(section: &'static str) -> Self {
        Self {
            year: AISC_360_YEAR,
            section,
        }
    }

    /// Format the reference for display in reports
    pub fn citation(&self) -> String {
        format!("AISC 360-{} Section {}", self.year % 100, self.section)
    }
}

// ============================================================================
// Equation Categories
// ============================================================================

/// Categories for grouping equations in the reference document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EquationCategory {
    /// Derived section properties (rts, ro, ...)
    SectionProperties,
    /// Chapter D
    Tension,
    /// Chapter E
    Compression,
    /// Chapter G
    Shear,
    /// Chapter F
    Flexure,
    /// Chapter H
    Interaction,
}

impl EquationCategory {
    pub const ALL: [EquationCategory; 6] = [
        EquationCategory::SectionProperties,
        EquationCategory::Tension,
        EquationCategory::Compression,
        EquationCategory::Shear,
        EquationCategory::Flexure,
        EquationCategory::Interaction,
    ];

    /// Display name for the category
    pub fn display_name(&self) -> &'static str {
        match self {
            EquationCategory::SectionProperties => "Section Properties",
            EquationCategory::Tension => "Axial Tension (Chapter D)",
            EquationCategory::Compression => "Axial Compression (Chapter E)",
            EquationCategory::Shear => "Shear (Chapter G)",
            EquationCategory::Flexure => "Flexure (Chapter F)",
            EquationCategory::Interaction => "Combined Forces (Chapter H)",
        }
    }
}

// ============================================================================
// Variable Definition
// ============================================================================

/// Definition of a variable used in an equation.
#[derive(Debug, Clone)]
pub struct Variable {
    /// Symbol (e.g., "Fy", "Lb", "rts")
    pub symbol: &'static str,
    /// Description
    pub description: &'static str,
    /// Units (e.g., "ksi", "in", "kip")
    pub units: &'static str,
}

impl Variable {
    pub const fn new(symbol: &'static str, description: &'static str, units: &'static str) -> Self {
        Self { symbol, description, units }
    }
}

// ============================================================================
// Equation Metadata
// ============================================================================

/// Complete metadata for an AISC equation.
#[derive(Debug, Clone)]
pub struct EquationMetadata {
    /// Human-readable name (e.g., "Critical Stress, Inelastic Buckling")
    pub name: &'static str,
    /// The formula in plain text
    pub formula_plain: &'static str,
    /// Code section the equation belongs to
    pub reference: CodeReference,
    pub variables: Vec<Variable>,
    pub category: EquationCategory,
    /// Source module where the equation implementation lives
    pub source_module: &'static str,
}

// ============================================================================
// Clauses
// ============================================================================

/// Governing clause of a limit state, printed in the REFERENCE column of a report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(non_camel_case_types)]
pub enum Clause {
    /// Tensile yielding and rupture
    D2,
    /// Effective length and slenderness
    E2,
    /// Flexural buckling
    E3,
    /// Torsional and flexural-torsional buckling
    E4,
    /// Shear, general provisions
    G1,
    /// Weak-axis shear in doubly symmetric shapes
    G6,
    /// Strong-axis yielding
    F2_1,
    /// Lateral-torsional buckling
    F2_2,
    /// Compression flange local buckling (strong axis)
    F3_1,
    /// Weak-axis yielding
    F6_1,
    /// Flange local buckling (weak axis)
    F6_2,
    /// Doubly symmetric members in flexure and compression
    H1_1,
    /// Doubly symmetric members in flexure and tension
    H1_2,
}

impl Clause {
    pub const ALL: [Clause; 13] = [
        Clause::D2,
        Clause::E2,
        Clause::E3,
        Clause::E4,
        Clause::G1,
        Clause::G6,
        Clause::F2_1,
        Clause::F2_2,
        Clause::F3_1,
        Clause::F6_1,
        Clause::F6_2,
        Clause::H1_1,
        Clause::H1_2,
    ];

    /// Report label, e.g. `Cl.F2.2`
    pub fn label(&self) -> &'static str {
        match self {
            Clause::D2 => "Cl.D2",
            Clause::E2 => "Cl.E2",
            Clause::E3 => "Cl.E3",
            Clause::E4 => "Cl.E4",
            Clause::G1 => "Cl.G1",
            Clause::G6 => "Cl.G6",
            Clause::F2_1 => "Cl.F2.1",
            Clause::F2_2 => "Cl.F2.2",
            Clause::F3_1 => "Cl.F3.1",
            Clause::F6_1 => "Cl.F6.1",
            Clause::F6_2 => "Cl.F6.2",
            Clause::H1_1 => "Cl.H1.1",
            Clause::H1_2 => "Cl.H1.2",
        }
    }
}

// ============================================================================
// Equation Enum
// ============================================================================

/// AISC 360-16 equations used by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(non_camel_case_types)]
pub enum Equation {
    /// Pn = Fy Ag
    D2_1,
    /// Pn = Fu Ae
    D2_2,
    /// Ae = An U
    D3_1,
    /// Pn = Fcr Ag
    E3_1,
    /// Fcr = 0.658^(Fy/Fe) Fy
    E3_2,
    /// Fcr = 0.877 Fe
    E3_3,
    /// Fe = pi^2 E / (Lc/r)^2
    E3_4,
    /// Pn = Fcr Ag (torsional)
    E4_1,
    /// Fe, doubly symmetric torsional buckling
    E4_2,
    /// Vn = 0.6 Fy Aw Cv1
    G2_1,
    /// Cv1 = 1.0
    G2_3,
    /// Cv1 = 1.10 sqrt(kv E / Fy) / (h/tw)
    G2_4,
    /// kv for unstiffened webs
    G2_5,
    /// Cv2 = 1.0
    G2_9,
    /// Cv2 = 1.10 sqrt(kv E / Fy) / (h/tw)
    G2_10,
    /// Cv2 = 1.51 kv E / ((h/tw)^2 Fy)
    G2_11,
    /// Vn = 0.6 Fy bf tf Cv2 (weak axis)
    G6_1,
    /// Mn = Mp = Fy Zx
    F2_1,
    /// Inelastic LTB
    F2_2,
    /// Mn = Fcr Sx <= Mp
    F2_3,
    /// Elastic LTB critical stress
    F2_4,
    /// Lp
    F2_5,
    /// Lr
    F2_6,
    /// rts
    F2_7,
    /// c = 1 for doubly symmetric I-shapes
    F2_8a,
    /// Noncompact flange local buckling, strong axis
    F3_1,
    /// Weak-axis yielding
    F6_1,
    /// Noncompact flange local buckling, weak axis
    F6_2,
    /// Pr/Pc >= 0.2
    H1_1a,
    /// Pr/Pc < 0.2
    H1_1b,
}

/// All equations in registry order
pub static ALL_EQUATIONS: &[Equation] = &[
    Equation::D2_1,
    Equation::D2_2,
    Equation::D3_1,
    Equation::E3_1,
    Equation::E3_2,
    Equation::E3_3,
    Equation::E3_4,
    Equation::E4_1,
    Equation::E4_2,
    Equation::G2_1,
    Equation::G2_3,
    Equation::G2_4,
    Equation::G2_5,
    Equation::G2_9,
    Equation::G2_10,
    Equation::G2_11,
    Equation::G6_1,
    Equation::F2_1,
    Equation::F2_2,
    Equation::F2_3,
    Equation::F2_4,
    Equation::F2_5,
    Equation::F2_6,
    Equation::F2_7,
    Equation::F2_8a,
    Equation::F3_1,
    Equation::F6_1,
    Equation::F6_2,
    Equation::H1_1a,
    Equation::H1_1b,
];

impl Equation {
    /// Report label, e.g. `Eq.E3-2`
    pub fn label(&self) -> &'static str {
        match self {
            Equation::D2_1 => "Eq.D2-1",
            Equation::D2_2 => "Eq.D2-2",
            Equation::D3_1 => "Eq.D3-1",
            Equation::E3_1 => "Eq.E3-1",
            Equation::E3_2 => "Eq.E3-2",
            Equation::E3_3 => "Eq.E3-3",
            Equation::E3_4 => "Eq.E3-4",
            Equation::E4_1 => "Eq.E4-1",
            Equation::E4_2 => "Eq.E4-2",
            Equation::G2_1 => "Eq.G2-1",
            Equation::G2_3 => "Eq.G2-3",
            Equation::G2_4 => "Eq.G2-4",
            Equation::G2_5 => "Eq.G2-5",
            Equation::G2_9 => "Eq.G2-9",
            Equation::G2_10 => "Eq.G2-10",
            Equation::G2_11 => "Eq.G2-11",
            Equation::G6_1 => "Eq.G6-1",
            Equation::F2_1 => "Eq.F2-1",
            Equation::F2_2 => "Eq.F2-2",
            Equation::F2_3 => "Eq.F2-3",
            Equation::F2_4 => "Eq.F2-4",
            Equation::F2_5 => "Eq.F2-5",
            Equation::F2_6 => "Eq.F2-6",
            Equation::F2_7 => "Eq.F2-7",
            Equation::F2_8a => "Eq.F2-8a",
            Equation::F3_1 => "Eq.F3-1",
            Equation::F6_1 => "Eq.F6-1",
            Equation::F6_2 => "Eq.F6-2",
            Equation::H1_1a => "Eq.H1-1a",
            Equation::H1_1b => "Eq.H1-1b",
        }
    }

    /// Get the full metadata for this equation
    pub fn metadata(&self) -> EquationMetadata {
        use EquationCategory as Cat;

        let (name, formula_plain, section, variables, category, source_module) = match self {
            Equation::D2_1 => (
                "Nominal Tensile Yielding Strength",
                "Pn = Fy * Ag",
                "D2",
                vec![
                    Variable::new("Fy", "Specified minimum yield stress", "ksi"),
                    Variable::new("Ag", "Gross area", "in2"),
                ],
                Cat::Tension,
                "calculations/tension.rs",
            ),
            Equation::D2_2 => (
                "Nominal Tensile Rupture Strength",
                "Pn = Fu * Ae",
                "D2",
                vec![
                    Variable::new("Fu", "Specified minimum tensile strength", "ksi"),
                    Variable::new("Ae", "Effective net area", "in2"),
                ],
                Cat::Tension,
                "calculations/tension.rs",
            ),
            Equation::D3_1 => (
                "Effective Net Area",
                "Ae = An * U",
                "D3",
                vec![
                    Variable::new("An", "Net area (Ag * NSF)", "in2"),
                    Variable::new("U", "Shear lag factor", ""),
                ],
                Cat::Tension,
                "calculations/tension.rs",
            ),
            Equation::E3_1 => (
                "Nominal Flexural Buckling Strength",
                "Pn = Fcr * Ag",
                "E3",
                vec![
                    Variable::new("Fcr", "Critical stress", "ksi"),
                    Variable::new("Ag", "Gross area", "in2"),
                ],
                Cat::Compression,
                "calculations/compression.rs",
            ),
            Equation::E3_2 => (
                "Critical Stress, Inelastic Buckling",
                "Fcr = 0.658^(Fy/Fe) * Fy  when Fy/Fe <= 2.25",
                "E3",
                vec![
                    Variable::new("Fy", "Specified minimum yield stress", "ksi"),
                    Variable::new("Fe", "Elastic buckling stress", "ksi"),
                ],
                Cat::Compression,
                "equations/buckling.rs",
            ),
            Equation::E3_3 => (
                "Critical Stress, Elastic Buckling",
                "Fcr = 0.877 * Fe  when Fy/Fe > 2.25",
                "E3",
                vec![Variable::new("Fe", "Elastic buckling stress", "ksi")],
                Cat::Compression,
                "equations/buckling.rs",
            ),
            Equation::E3_4 => (
                "Elastic Buckling Stress",
                "Fe = pi^2 * E / (Lc/r)^2",
                "E3",
                vec![
                    Variable::new("E", "Modulus of elasticity", "ksi"),
                    Variable::new("Lc", "Effective length K*L", "in"),
                    Variable::new("r", "Radius of gyration", "in"),
                ],
                Cat::Compression,
                "equations/buckling.rs",
            ),
            Equation::E4_1 => (
                "Nominal Torsional Buckling Strength",
                "Pn = Fcr * Ag",
                "E4",
                vec![
                    Variable::new("Fcr", "Critical stress from Fe of E4", "ksi"),
                    Variable::new("Ag", "Gross area", "in2"),
                ],
                Cat::Compression,
                "calculations/compression.rs",
            ),
            Equation::E4_2 => (
                "Elastic Torsional Buckling Stress, Doubly Symmetric",
                "Fe = (pi^2 * E * Cw / Lcz^2 + G * J) / (Ag * ro^2)",
                "E4",
                vec![
                    Variable::new("Cw", "Warping constant", "in6"),
                    Variable::new("Lcz", "Effective length for torsion", "in"),
                    Variable::new("G", "Shear modulus", "ksi"),
                    Variable::new("J", "Torsional constant", "in4"),
                    Variable::new("ro^2", "Polar radius of gyration squared", "in2"),
                ],
                Cat::Compression,
                "calculations/compression.rs",
            ),
            Equation::G2_1 => (
                "Nominal Shear Strength",
                "Vn = 0.6 * Fy * Aw * Cv1",
                "G2.1",
                vec![
                    Variable::new("Aw", "Web shear area", "in2"),
                    Variable::new("Cv1", "Web shear strength coefficient", ""),
                ],
                Cat::Shear,
                "calculations/shear.rs",
            ),
            Equation::G2_3 => (
                "Web Shear Coefficient, Stocky Web",
                "Cv1 = 1.0  when h/tw <= 1.10 * sqrt(kv * E / Fy)",
                "G2.1",
                vec![
                    Variable::new("h/tw", "Web slenderness", ""),
                    Variable::new("kv", "Web plate shear buckling coefficient", ""),
                ],
                Cat::Shear,
                "calculations/shear.rs",
            ),
            Equation::G2_4 => (
                "Web Shear Coefficient, Slender Web",
                "Cv1 = 1.10 * sqrt(kv * E / Fy) / (h/tw)",
                "G2.1",
                vec![
                    Variable::new("h/tw", "Web slenderness", ""),
                    Variable::new("kv", "Web plate shear buckling coefficient", ""),
                ],
                Cat::Shear,
                "calculations/shear.rs",
            ),
            Equation::G2_5 => (
                "Web Plate Shear Buckling Coefficient",
                "kv = 5.34 for webs without transverse stiffeners",
                "G2.1",
                vec![Variable::new("kv", "Web plate shear buckling coefficient", "")],
                Cat::Shear,
                "calculations/shear.rs",
            ),
            Equation::G2_9 => (
                "Shear Buckling Coefficient, Stocky Plate",
                "Cv2 = 1.0  when h/tw <= 1.10 * sqrt(kv * E / Fy)",
                "G2.2",
                vec![
                    Variable::new("h/tw", "Plate slenderness (bf/2tf for flanges)", ""),
                    Variable::new("kv", "Plate shear buckling coefficient", ""),
                ],
                Cat::Shear,
                "calculations/shear.rs",
            ),
            Equation::G2_10 => (
                "Shear Buckling Coefficient, Inelastic",
                "Cv2 = 1.10 * sqrt(kv * E / Fy) / (h/tw)  when h/tw <= 1.37 * sqrt(kv * E / Fy)",
                "G2.2",
                vec![
                    Variable::new("h/tw", "Plate slenderness (bf/2tf for flanges)", ""),
                    Variable::new("kv", "Plate shear buckling coefficient", ""),
                ],
                Cat::Shear,
                "calculations/shear.rs",
            ),
            Equation::G2_11 => (
                "Shear Buckling Coefficient, Elastic",
                "Cv2 = 1.51 * kv * E / ((h/tw)^2 * Fy)",
                "G2.2",
                vec![
                    Variable::new("h/tw", "Plate slenderness (bf/2tf for flanges)", ""),
                    Variable::new("kv", "Plate shear buckling coefficient", ""),
                ],
                Cat::Shear,
                "calculations/shear.rs",
            ),
            Equation::G6_1 => (
                "Nominal Weak-Axis Shear Strength",
                "Vn = 0.6 * Fy * Aw * Cv2 (Aw = 2 * bf * tf), kv = 1.2",
                "G6",
                vec![
                    Variable::new("Aw", "Flange shear area", "in2"),
                    Variable::new("Cv2", "Flange shear buckling coefficient", ""),
                ],
                Cat::Shear,
                "calculations/shear.rs",
            ),
            Equation::F2_1 => (
                "Plastic Moment, Strong Axis",
                "Mn = Mp = Fy * Zx",
                "F2.1",
                vec![
                    Variable::new("Fy", "Specified minimum yield stress", "ksi"),
                    Variable::new("Zx", "Plastic section modulus about x", "in3"),
                ],
                Cat::Flexure,
                "calculations/flexure.rs",
            ),
            Equation::F2_2 => (
                "Inelastic Lateral-Torsional Buckling",
                "Mn = Cb * [Mp - (Mp - 0.7 * Fy * Sx) * (Lb - Lp) / (Lr - Lp)] <= Mp",
                "F2.2",
                vec![
                    Variable::new("Cb", "Lateral-torsional buckling modification factor", ""),
                    Variable::new("Lb", "Unbraced length", "in"),
                    Variable::new("Lp", "Limiting length, yielding", "in"),
                    Variable::new("Lr", "Limiting length, inelastic LTB", "in"),
                ],
                Cat::Flexure,
                "calculations/flexure.rs",
            ),
            Equation::F2_3 => (
                "Elastic Lateral-Torsional Buckling",
                "Mn = Fcr * Sx <= Mp",
                "F2.2",
                vec![
                    Variable::new("Fcr", "LTB critical stress", "ksi"),
                    Variable::new("Sx", "Elastic section modulus about x", "in3"),
                ],
                Cat::Flexure,
                "calculations/flexure.rs",
            ),
            Equation::F2_4 => (
                "LTB Critical Stress",
                "Fcr = Cb * pi^2 * E / (Lb/rts)^2 * sqrt(1 + 0.078 * J * c / (Sx * ho) * (Lb/rts)^2)",
                "F2.2",
                vec![
                    Variable::new("rts", "Effective radius of gyration", "in"),
                    Variable::new("ho", "Distance between flange centroids", "in"),
                    Variable::new("c", "Coefficient c", ""),
                ],
                Cat::Flexure,
                "calculations/flexure.rs",
            ),
            Equation::F2_5 => (
                "Limiting Unbraced Length for Yielding",
                "Lp = 1.76 * ry * sqrt(E / Fy)",
                "F2.2",
                vec![Variable::new("ry", "Radius of gyration about y", "in")],
                Cat::Flexure,
                "calculations/flexure.rs",
            ),
            Equation::F2_6 => (
                "Limiting Unbraced Length for Inelastic LTB",
                "Lr = 1.95 * rts * E / (0.7 * Fy) * sqrt(J * c / (Sx * ho) + sqrt((J * c / (Sx * ho))^2 + 6.76 * (0.7 * Fy / E)^2))",
                "F2.2",
                vec![
                    Variable::new("rts", "Effective radius of gyration", "in"),
                    Variable::new("J", "Torsional constant", "in4"),
                    Variable::new("ho", "Distance between flange centroids", "in"),
                ],
                Cat::Flexure,
                "calculations/flexure.rs",
            ),
            Equation::F2_7 => (
                "Effective Radius of Gyration",
                "rts^2 = sqrt(Iy * Cw) / Sx",
                "F2.2",
                vec![
                    Variable::new("Iy", "Moment of inertia about y", "in4"),
                    Variable::new("Cw", "Warping constant", "in6"),
                ],
                Cat::SectionProperties,
                "equations/section.rs",
            ),
            Equation::F2_8a => (
                "Coefficient c, Doubly Symmetric I-Shape",
                "c = 1",
                "F2.2",
                vec![Variable::new("c", "Coefficient c", "")],
                Cat::SectionProperties,
                "config.rs",
            ),
            Equation::F3_1 => (
                "Noncompact Flange Local Buckling, Strong Axis",
                "Mn = Mp - (Mp - 0.7 * Fy * Sx) * (lambda - lambda_pf) / (lambda_rf - lambda_pf)",
                "F3.1",
                vec![
                    Variable::new("lambda", "Flange slenderness bf/2tf", ""),
                    Variable::new("lambda_pf", "Compact limit", ""),
                    Variable::new("lambda_rf", "Noncompact limit", ""),
                ],
                Cat::Flexure,
                "calculations/flexure.rs",
            ),
            Equation::F6_1 => (
                "Weak-Axis Yielding",
                "Mn = Mp = min(Fy * Zy, 1.6 * Fy * Sy)",
                "F6.1",
                vec![
                    Variable::new("Zy", "Plastic section modulus about y", "in3"),
                    Variable::new("Sy", "Elastic section modulus about y", "in3"),
                ],
                Cat::Flexure,
                "calculations/flexure.rs",
            ),
            Equation::F6_2 => (
                "Noncompact Flange Local Buckling, Weak Axis",
                "Mn = Mp - (Mp - 0.7 * Fy * Sy) * (lambda - lambda_pf) / (lambda_rf - lambda_pf)",
                "F6.2",
                vec![
                    Variable::new("lambda", "Flange slenderness bf/2tf", ""),
                    Variable::new("Sy", "Elastic section modulus about y", "in3"),
                ],
                Cat::Flexure,
                "calculations/flexure.rs",
            ),
            Equation::H1_1a => (
                "Combined Forces, High Axial",
                "Pr/Pc + 8/9 * (Mrx/Mcx + Mry/Mcy) <= 1.0  when Pr/Pc >= 0.2",
                "H1.1",
                vec![
                    Variable::new("Pr", "Required axial strength", "kip"),
                    Variable::new("Pc", "Available axial strength", "kip"),
                    Variable::new("Mc", "Available flexural strength", "kip-in"),
                ],
                Cat::Interaction,
                "calculations/interaction.rs",
            ),
            Equation::H1_1b => (
                "Combined Forces, Low Axial",
                "Pr/(2 * Pc) + (Mrx/Mcx + Mry/Mcy) <= 1.0  when Pr/Pc < 0.2",
                "H1.1",
                vec![
                    Variable::new("Pr", "Required axial strength", "kip"),
                    Variable::new("Pc", "Available axial strength", "kip"),
                    Variable::new("Mc", "Available flexural strength", "kip-in"),
                ],
                Cat::Interaction,
                "calculations/interaction.rs",
            ),
        };

        EquationMetadata {
            name,
            formula_plain,
            reference: CodeReference::aisc(section),
            variables,
            category,
            source_module,
        }
    }

    /// Get all equations in a category
    pub fn in_category(category: EquationCategory) -> Vec<Equation> {
        ALL_EQUATIONS
            .iter()
            .filter(|eq| eq.metadata().category == category)
            .copied()
            .collect()
    }
}

// ============================================================================
// Reference (clause or equation)
// ============================================================================

/// A clause or equation reference. Serializes as its report label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Reference {
    Clause(Clause),
    Equation(Equation),
}

impl Reference {
    pub fn label(&self) -> &'static str {
        match self {
            Reference::Clause(c) => c.label(),
            Reference::Equation(e) => e.label(),
        }
    }
}

impl From<Clause> for Reference {
    fn from(c: Clause) -> Self {
        Reference::Clause(c)
    }
}

impl From<Equation> for Reference {
    fn from(e: Equation) -> Self {
        Reference::Equation(e)
    }
}

impl fmt::Display for Clause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl fmt::Display for Equation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl fmt::Display for Reference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for Reference {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Some(c) = Clause::ALL.iter().find(|c| c.label() == trimmed) {
            return Ok(Reference::Clause(*c));
        }
        if let Some(e) = ALL_EQUATIONS.iter().find(|e| e.label() == trimmed) {
            return Ok(Reference::Equation(*e));
        }
        Err(CalcError::invalid_input(
            "reference",
            trimmed,
            "Not a known AISC 360-16 clause or equation label",
        ))
    }
}

macro_rules! impl_label_serde {
    ($type:ty, $parse:expr) => {
        impl Serialize for $type {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.label())
            }
        }

        impl<'de> Deserialize<'de> for $type {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let s = String::deserialize(deserializer)?;
                let parse: fn(&str) -> Option<$type> = $parse;
                parse(&s).ok_or_else(|| serde::de::Error::custom(format!("unknown reference '{}'", s)))
            }
        }
    };
}

impl_label_serde!(Reference, |s| s.parse().ok());
impl_label_serde!(Clause, |s| Clause::ALL.iter().find(|c| c.label() == s).copied());
impl_label_serde!(Equation, |s| ALL_EQUATIONS.iter().find(|e| e.label() == s).copied());

// ============================================================================
// Reference Document
// ============================================================================

/// Generate a Markdown reference of every registered equation, grouped by category.
pub fn generate_equations_markdown() -> String {
    let mut md = String::new();
    md.push_str("# AISC 360-16 Equations Reference\n\n");
    md.push_str("Auto-generated from the steel_core equation registry.\n\n");

    for category in EquationCategory::ALL {
        let equations = Equation::in_category(category);
        if equations.is_empty() {
            continue;
        }
        md.push_str(&format!("## {}\n\n", category.display_name()));
        for eq in equations {
            let meta = eq.metadata();
            md.push_str(&format!("### {} ({})\n\n", meta.name, eq.label()));
            md.push_str(&format!("`{}`\n\n", meta.formula_plain));
            md.push_str(&format!("**Reference:** {}\n\n", meta.reference.citation()));
            md.push_str("| Symbol | Description | Units |\n|---|---|---|\n");
            for var in &meta.variables {
                md.push_str(&format!("| {} | {} | {} |\n", var.symbol, var.description, var.units));
            }
            md.push_str(&format!("\n**Source:** `{}`\n\n", meta.source_module));
        }
    }

    md.push_str(&format!("---\n\n**Total Equations:** {}\n", ALL_EQUATIONS.len()));
    md
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_equations_have_metadata() {
        assert_eq!(ALL_EQUATIONS.len(), 30);
        for eq in ALL_EQUATIONS {
            let meta = eq.metadata();
            assert!(!meta.name.is_empty(), "Equation {:?} has no name", eq);
            assert!(!meta.formula_plain.is_empty(), "Equation {:?} has no formula", eq);
            assert!(!meta.variables.is_empty(), "Equation {:?} has no variables", eq);
            assert!(eq.label().starts_with("Eq."));
        }
    }

    #[test]
    fn test_report_labels() {
        assert_eq!(Equation::E3_4.label(), "Eq.E3-4");
        assert_eq!(Equation::F2_8a.label(), "Eq.F2-8a");
        assert_eq!(Equation::H1_1b.label(), "Eq.H1-1b");
        assert_eq!(Clause::F2_2.label(), "Cl.F2.2");
        assert_eq!(Clause::D2.label(), "Cl.D2");
    }

    #[test]
    fn test_labels_are_unique() {
        let mut labels: Vec<&str> = ALL_EQUATIONS.iter().map(|e| e.label()).collect();
        labels.extend(Clause::ALL.iter().map(|c| c.label()));
        let count = labels.len();
        labels.sort();
        labels.dedup();
        assert_eq!(labels.len(), count);
    }

    #[test]
    fn test_reference_parse() {
        assert_eq!("Eq.E3-2".parse::<Reference>().unwrap(), Reference::Equation(Equation::E3_2));
        assert_eq!(" Cl.G1 ".parse::<Reference>().unwrap(), Reference::Clause(Clause::G1));
        assert!("Eq.Z9-9".parse::<Reference>().is_err());
    }

    #[test]
    fn test_reference_serializes_as_label() {
        let r = Reference::Equation(Equation::H1_1b);
        assert_eq!(serde_json::to_string(&r).unwrap(), "\"Eq.H1-1b\"");

        let back: Reference = serde_json::from_str("\"Cl.F6.2\"").unwrap();
        assert_eq!(back, Reference::Clause(Clause::F6_2));

        assert!(serde_json::from_str::<Clause>("\"Eq.E3-1\"").is_err());
    }

    #[test]
    fn test_code_reference_citation() {
        assert_eq!(CodeReference::aisc("E3").citation(), "AISC 360-16 Section E3");
        assert_eq!(Equation::F2_6.metadata().reference.section, "F2.2");
    }

    #[test]
    fn test_generate_equations_markdown() {
        let md = generate_equations_markdown();
        assert!(md.contains("# AISC 360-16 Equations Reference"));
        assert!(md.contains("## Axial Compression (Chapter E)"));
        assert!(md.contains("### Elastic Buckling Stress (Eq.E3-4)"));
        assert!(md.contains("**Total Equations:** 30"));
    }
}
