//! # Limit-State Calculations
//!
//! Each limit-state module exposes pure functions that take section,
//! material and demand values and return a [`CapacityResult`]:
//!
//! - [`tension`] - Tensile yielding and rupture (Chapter D)
//! - [`compression`] - Flexural and torsional buckling (Chapter E)
//! - [`shear`] - Shear with a pluggable web shear coefficient (Chapter G)
//! - [`flexure`] - Yielding, LTB and flange local buckling (Chapter F)
//! - [`interaction`] - Combined axial force and flexure (Chapter H)
//! - [`check`] - Runs every limit state for one member and finds the governing ratio
//!
//! Modules do not call each other; only [`check`] composes them.

pub mod check;
pub mod compression;
pub mod flexure;
pub mod interaction;
pub mod result;
pub mod shear;
pub mod tension;

use serde::{Deserialize, Serialize};

pub use check::{check_member, check_members, CheckResults, Evaluation, Governing, LimitStateCheck, Outcome, Status};
pub use interaction::{InteractionInput, InteractionResult};
pub use result::{CapacityDetail, CapacityResult, Intermediate};

/// Principal axis of the cross-section
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axis {
    /// Strong axis
    X,
    /// Weak axis
    Y,
}

impl Axis {
    /// Lower-case subscript used in symbols (Lcx, ry, ...)
    pub fn suffix(&self) -> &'static str {
        match self {
            Axis::X => "x",
            Axis::Y => "y",
        }
    }
}

/// Every limit state the engine evaluates, in report order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LimitState {
    TensileYielding,
    TensileRupture,
    FlexuralBucklingX,
    FlexuralBucklingY,
    FlexuralTorsionalBuckling,
    ShearX,
    ShearY,
    FlexuralYieldingY,
    LateralTorsionalBucklingX,
    FlangeLocalBucklingX,
    FlangeLocalBucklingY,
    Interaction,
}

impl LimitState {
    pub const ALL: [LimitState; 12] = [
        LimitState::TensileYielding,
        LimitState::TensileRupture,
        LimitState::FlexuralBucklingX,
        LimitState::FlexuralBucklingY,
        LimitState::FlexuralTorsionalBuckling,
        LimitState::ShearX,
        LimitState::ShearY,
        LimitState::FlexuralYieldingY,
        LimitState::LateralTorsionalBucklingX,
        LimitState::FlangeLocalBucklingX,
        LimitState::FlangeLocalBucklingY,
        LimitState::Interaction,
    ];

    /// Name as printed in the report summary
    pub fn display_name(&self) -> &'static str {
        match self {
            LimitState::TensileYielding => "Tensile Yielding",
            LimitState::TensileRupture => "Tensile Rupture",
            LimitState::FlexuralBucklingX => "Flexural Buckling X",
            LimitState::FlexuralBucklingY => "Flexural Buckling Y",
            LimitState::FlexuralTorsionalBuckling => "Flexural-Torsional Buckling",
            LimitState::ShearX => "Shear X",
            LimitState::ShearY => "Shear Y",
            LimitState::FlexuralYieldingY => "Flexural Yielding Y",
            LimitState::LateralTorsionalBucklingX => "Lateral-Torsional Buckling X",
            LimitState::FlangeLocalBucklingX => "Flange Local Buckling X",
            LimitState::FlangeLocalBucklingY => "Flange Local Buckling Y",
            LimitState::Interaction => "Interaction of Combined Forces",
        }
    }

    pub fn is_compression(&self) -> bool {
        matches!(
            self,
            LimitState::FlexuralBucklingX | LimitState::FlexuralBucklingY | LimitState::FlexuralTorsionalBuckling
        )
    }

    pub fn is_tension(&self) -> bool {
        matches!(self, LimitState::TensileYielding | LimitState::TensileRupture)
    }

    /// Flexural limit states about the given axis
    pub fn flexure_about(axis: Axis) -> &'static [LimitState] {
        match axis {
            Axis::X => &[LimitState::LateralTorsionalBucklingX, LimitState::FlangeLocalBucklingX],
            Axis::Y => &[LimitState::FlexuralYieldingY, LimitState::FlangeLocalBucklingY],
        }
    }
}

impl std::fmt::Display for LimitState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}
