//! # steel_core - AISC 360-16 Steel Member Check Engine
//!
//! `steel_core` re-derives the LRFD code check of a single W-shape member:
//! every intermediate quantity, every limit-state ratio and the governing
//! pass/fail verdict. All inputs and outputs are JSON-serializable.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions that take input and return results
//! - **JSON-First**: All types implement Serialize/Deserialize
//! - **Rich Errors**: Structured error types, not just strings
//! - **Traceable**: Every result cites the AISC clause and equation it used
//!
//! ## Quick Start
//!
//! ```rust
//! use steel_core::{check_member, DesignConfig, MemberInput};
//!
//! let json = r#"{
//!     "label": "3 / W8X31",
//!     "section": {
//!         "ag_in2": 9.13, "ixx_in4": 110.0, "iyy_in4": 37.1, "j_in4": 0.536,
//!         "cw_in6": 531.1, "sxx_in3": 27.5, "syy_in3": 9.275,
//!         "zxx_in3": 30.4, "zyy_in3": 14.1, "bf_2tf": 9.2, "h_tw": 22.25
//!     },
//!     "material": { "fy_ksi": 50.0, "fu_ksi": 62.0 },
//!     "geometry": { "length_in": 121.0, "kx": 2.0, "ky": 2.0, "length_x_in": 102.0, "length_y_in": 88.0 },
//!     "demand": { "pu_kip": 6.83, "mux_kip_in": 243.2, "muy_kip_in": 9.13 }
//! }"#;
//!
//! let input: MemberInput = serde_json::from_str(json).unwrap();
//! let results = check_member(&input, &DesignConfig::default()).unwrap();
//! let governing = results.governing.unwrap();
//! assert_eq!(governing.reference.to_string(), "Eq.H1-1b");
//! assert!((governing.ratio - 0.218).abs() < 1e-3);
//! ```
//!
//! ## Modules
//!
//! - [`input`] - Member input record and validation
//! - [`config`] - Design defaults (E, G, φ, Cb, shear coefficient model)
//! - [`classification`] - Table B4.1 element classification
//! - [`equations`] - Numeric primitives and the equation registry
//! - [`calculations`] - Limit-state modules and the member check
//! - [`units`] - Unit tags for reported quantities
//! - [`errors`] - Structured error types

pub mod calculations;
pub mod classification;
pub mod config;
pub mod equations;
pub mod errors;
pub mod input;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use calculations::{check_member, check_members, CheckResults, LimitState, Status};
pub use config::DesignConfig;
pub use errors::{CalcError, CalcResult};
pub use input::MemberInput;
