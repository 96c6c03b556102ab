//! # Combined Forces (AISC 360-16 Chapter H)
//!
//! Doubly symmetric members under axial force and biaxial flexure:
//!
//! ```text
//! Pr/Pc >= 0.2 :  Pr/Pc + 8/9 (Mrx/Mcx + Mry/Mcy)      (Eq.H1-1a)
//! Pr/Pc <  0.2 :  Pr/(2 Pc) + (Mrx/Mcx + Mry/Mcy)      (Eq.H1-1b)
//! ```
//!
//! `Pc`, `Mcx`, `Mcy` are the lowest design capacities among the computed
//! limit states of each family. The axial family is compression (Cl.H1.1)
//! unless the member is in tension (Cl.H1.2).
//!
//! A missing capacity is tolerated when its demand is zero. A missing
//! capacity with nonzero demand is a `Domain` error, and the interaction
//! entry is skipped.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::calculations::result::Intermediate;
use crate::calculations::LimitState;
use crate::equations::registry::{Clause, Equation, Reference};
use crate::errors::{CalcError, CalcResult};
use crate::units::Unit;

/// Pr/Pc at which Eq.H1-1a takes over from Eq.H1-1b
pub const HIGH_AXIAL_LIMIT: f64 = 0.2;

/// The lowest design capacity of a family and the limit state it came from.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GoverningCapacity {
    pub limit_state: LimitState,
    pub design_capacity: f64,
}

impl GoverningCapacity {
    /// Pick the smallest design capacity from (limit state, capacity) pairs.
    pub fn minimum<I>(candidates: I) -> Option<Self>
    where
        I: IntoIterator<Item = (LimitState, f64)>,
    {
        candidates
            .into_iter()
            .fold(None, |best: Option<Self>, (limit_state, design_capacity)| match best {
                Some(b) if b.design_capacity <= design_capacity => Some(b),
                _ => Some(Self {
                    limit_state,
                    design_capacity,
                }),
            })
    }
}

/// Demands and governing capacities for the interaction check.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InteractionInput {
    pub pr_kip: f64,
    /// Cl.H1.1 for compression, Cl.H1.2 for tension
    pub axial_clause: Clause,
    pub pc: Option<GoverningCapacity>,
    pub mrx_kip_in: f64,
    pub mcx: Option<GoverningCapacity>,
    pub mry_kip_in: f64,
    pub mcy: Option<GoverningCapacity>,
}

/// Outcome of the interaction check.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InteractionResult {
    pub pr_kip: f64,
    pub pc: Option<GoverningCapacity>,
    pub mrx_kip_in: f64,
    pub mcx: Option<GoverningCapacity>,
    pub mry_kip_in: f64,
    pub mcy: Option<GoverningCapacity>,
    /// Pr/Pc
    pub axial_ratio: f64,
    /// Mrx/Mcx + Mry/Mcy
    pub flexure_ratio: f64,
    pub ratio: f64,
    pub clause: Clause,
    pub equation: Equation,
}

impl InteractionResult {
    pub fn intermediates(&self) -> Vec<Intermediate> {
        let row = |label: &str, symbol: &str, value: f64, unit: Unit| Intermediate {
            label: label.to_string(),
            symbol: symbol.to_string(),
            value,
            unit,
            reference: None,
        };

        let mut rows = vec![row("Required axial strength", "Pr", self.pr_kip, Unit::Kip)];
        if let Some(pc) = self.pc {
            rows.push(row("Available axial strength", "Pc", pc.design_capacity, Unit::Kip));
        }
        rows.push(row("Required flexural strength, x", "Mrx", self.mrx_kip_in, Unit::KipIn));
        if let Some(mc) = self.mcx {
            rows.push(row("Available flexural strength, x", "Mcx", mc.design_capacity, Unit::KipIn));
        }
        rows.push(row("Required flexural strength, y", "Mry", self.mry_kip_in, Unit::KipIn));
        if let Some(mc) = self.mcy {
            rows.push(row("Available flexural strength, y", "Mcy", mc.design_capacity, Unit::KipIn));
        }
        rows.push(Intermediate {
            reference: Some(Reference::Clause(self.clause)),
            ..row("Axial ratio", "Pr/Pc", self.axial_ratio, Unit::Dimensionless)
        });
        rows
    }
}

fn term(demand: f64, capacity: Option<GoverningCapacity>, symbol: &str) -> CalcResult<f64> {
    let demand = demand.abs();
    if demand == 0.0 {
        return Ok(0.0);
    }
    match capacity {
        Some(c) => Ok(demand / c.design_capacity),
        None => Err(CalcError::domain(
            symbol,
            format!("no computed limit state provides {} for a nonzero demand", symbol),
        )),
    }
}

/// Combined axial force and flexure (Eqs. H1-1a / H1-1b)
///
/// # Example
/// ```rust
/// use steel_core::calculations::interaction::*;
/// use steel_core::calculations::LimitState;
/// use steel_core::equations::registry::{Clause, Equation};
///
/// let cap = |ls, c| Some(GoverningCapacity { limit_state: ls, design_capacity: c });
/// let r = combined_forces(&InteractionInput {
///     pr_kip: 20.0,
///     axial_clause: Clause::H1_1,
///     pc: cap(LimitState::FlexuralBucklingY, 100.0),
///     mrx_kip_in: 0.0,
///     mcx: None,
///     mry_kip_in: 0.0,
///     mcy: None,
/// })
/// .unwrap();
/// assert_eq!(r.equation, Equation::H1_1a);
/// ```
pub fn combined_forces(input: &InteractionInput) -> CalcResult<InteractionResult> {
    let axial_ratio = term(input.pr_kip, input.pc, "Pc")?;
    let flexure_ratio = term(input.mrx_kip_in, input.mcx, "Mcx")? + term(input.mry_kip_in, input.mcy, "Mcy")?;

    let (ratio, equation) = if axial_ratio >= HIGH_AXIAL_LIMIT {
        (axial_ratio + 8.0 / 9.0 * flexure_ratio, Equation::H1_1a)
    } else {
        (axial_ratio / 2.0 + flexure_ratio, Equation::H1_1b)
    };
    debug!(axial_ratio, flexure_ratio, ratio, equation = %equation, "interaction");

    Ok(InteractionResult {
        pr_kip: input.pr_kip.abs(),
        pc: input.pc,
        mrx_kip_in: input.mrx_kip_in.abs(),
        mcx: input.mcx,
        mry_kip_in: input.mry_kip_in.abs(),
        mcy: input.mcy,
        axial_ratio,
        flexure_ratio,
        ratio,
        clause: input.axial_clause,
        equation,
    })
}
