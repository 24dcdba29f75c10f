//! Output-to-input delta mapping for the arm's 4-input/3-output differential.
//!
//! The differential couples four actuator shafts to three independent output
//! motions, leaving one redundant internal degree of freedom. Both solvers in
//! this module answer the same question: given a desired change on the three
//! output axes, what change on each of the four actuators produces it?
//!
//! [`solver::DifferentialSolver`] is the production path, a single fixed
//! matrix multiply. [`modality::ModalityDecomposer`] is an older table-driven
//! derivation of the same mapping, kept so the two can be validated against
//! each other.

pub mod modality;
pub mod solver;

pub use modality::{LookupInconsistency, ModalityDecomposer};
pub use solver::DifferentialSolver;
