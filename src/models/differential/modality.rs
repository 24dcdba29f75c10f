//! Legacy table-driven derivation of the differential inverse mapping.
//!
//! This predates the matrix formulation in [`solver`](super::solver). Each
//! output axis delta is classified by sign against a table of base output
//! modalities (the zero vector plus the positive and negative unit vector of
//! each axis), the matching base input sign pattern is scaled by the delta's
//! magnitude, and the three scaled patterns are summed.
//!
//! The result is identical to [`DifferentialSolver`](super::DifferentialSolver)
//! for every finite input. The decomposer is retained only so the two
//! independent derivations can be checked against each other; new callers
//! should use the solver.

use thiserror::Error;
use uom::si::{angle::radian, f64::Angle};

/// Base output modalities: rest plus the signed unit direction of each axis.
const BASE_OUTPUT_MODALITIES: [[f64; 3]; 7] = [
    [0.0, 0.0, 0.0],
    [1.0, 0.0, 0.0],
    [-1.0, 0.0, 0.0],
    [0.0, 1.0, 0.0],
    [0.0, -1.0, 0.0],
    [0.0, 0.0, 1.0],
    [0.0, 0.0, -1.0],
];

/// Actuator sign patterns paired 1:1 with [`BASE_OUTPUT_MODALITIES`].
const BASE_INPUT_MODALITIES: [[f64; 4]; 7] = [
    [0.0, 0.0, 0.0, 0.0],
    [1.0, 1.0, 1.0, 1.0],
    [-1.0, -1.0, -1.0, -1.0],
    [-1.0, 1.0, 1.0, -1.0],
    [1.0, -1.0, -1.0, 1.0],
    [-1.0, -1.0, 1.0, 1.0],
    [1.0, 1.0, -1.0, -1.0],
];

/// An error returned when a computed sign matches no base output modality.
///
/// The tables cover every sign in {-1, 0, 1} on every axis, so this indicates
/// an internal inconsistency (for example a non-finite input delta), not bad
/// caller data. The failing call produces no partial result.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
#[error("no base output modality has sign {sign} on axis {axis}")]
pub struct LookupInconsistency {
    /// Output axis being classified (0..3).
    pub axis: usize,
    /// Sign value that matched no table row.
    pub sign: f64,
}

/// Legacy modality-table solver for the 4-input/3-output differential.
///
/// See the [module docs](self) for the algorithm and its status.
#[derive(Debug, Clone, Copy, Default)]
pub struct ModalityDecomposer;

impl ModalityDecomposer {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Computes the four actuator deltas that produce the requested output
    /// deltas, by modality decomposition.
    ///
    /// # Errors
    ///
    /// Returns a [`LookupInconsistency`] if an axis classifies to a sign
    /// outside the modality tables.
    pub fn solve(
        &self,
        output_1: Angle,
        output_2: Angle,
        output_3: Angle,
    ) -> Result<[Angle; 4], LookupInconsistency> {
        let outputs = [output_1, output_2, output_3].map(|output| output.get::<radian>());
        let mut input_deltas = [0.0_f64; 4];

        for (axis, &output) in outputs.iter().enumerate() {
            let pattern = input_modality_for(signum_or_zero(output), axis)?;
            for (input_delta, component) in input_deltas.iter_mut().zip(pattern) {
                *input_delta += component * output.abs();
            }
        }

        Ok(input_deltas.map(Angle::new::<radian>))
    }
}

/// Sign of `value` as `value / |value|`, with zero mapped to zero.
///
/// The zero case is an explicit override of the undefined division; it
/// selects the rest modality. `f64::signum` is unsuitable here because it
/// maps zero to one.
fn signum_or_zero(value: f64) -> f64 {
    if value == 0.0 { 0.0 } else { value / value.abs() }
}

/// Looks up the base input sign pattern whose output modality carries `sign`
/// on `axis`.
fn input_modality_for(sign: f64, axis: usize) -> Result<[f64; 4], LookupInconsistency> {
    BASE_OUTPUT_MODALITIES
        .iter()
        .position(|modality| modality[axis] == sign)
        .map(|row| BASE_INPUT_MODALITIES[row])
        .ok_or(LookupInconsistency { axis, sign })
}
