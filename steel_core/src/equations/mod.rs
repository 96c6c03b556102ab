//! # AISC Equations
//!
//! Numeric primitives shared by the limit-state modules, plus the registry
//! of every clause and equation the engine can cite.
//!
//! ## Modules
//!
//! - [`buckling`] - Elastic buckling stress and the critical stress curve
//! - [`section`] - Derived section properties (r, ro², rts, h0)
//! - [`transition`] - Linear plastic-to-elastic transition
//! - [`registry`] - Clause/equation references and metadata
//!
//! ## Units
//!
//! Inputs and outputs are kips, inches and ksi throughout.
//!
//! ## References
//!
//! - AISC 360-16: Specification for Structural Steel Buildings

pub mod buckling;
pub mod registry;
pub mod section;
pub mod transition;

pub use buckling::{critical_stress, elastic_buckling_stress, BucklingRegime, CriticalStress};

pub use section::{
    effective_radius_torsional,
    flange_distance,
    polar_radius_squared,
    radius_of_gyration,
};

pub use transition::linear_transition;

pub use registry::{
    Clause,
    CodeReference,
    Equation,
    EquationCategory,
    EquationMetadata,
    Reference,
    Variable,
    ALL_EQUATIONS,
    generate_equations_markdown,
};
