use nalgebra::{SMatrix, Vector3};
use uom::si::{angle::radian, f64::Angle};

/// Inverse delta transform for the 4-input/3-output differential.
///
/// Applying the fixed 4×3 transform to a desired output delta yields one
/// valid set of actuator deltas. The mechanism's redundant internal degree of
/// freedom is resolved by the transform's fixed sign structure, not by any
/// least-squares or null-space criterion.
///
/// The solver is stateless aside from the constant matrix, accepts any finite
/// deltas, and cannot fail.
///
/// # Examples
///
/// ```
/// use transmission_models::models::differential::DifferentialSolver;
/// use uom::si::{angle::radian, f64::Angle};
///
/// let solver = DifferentialSolver::new();
/// let deltas = solver.compute_inverse_deltas(
///     Angle::new::<radian>(1.0),
///     Angle::new::<radian>(0.0),
///     Angle::new::<radian>(0.0),
/// );
/// // Driving only the first output axis turns all four actuators equally.
/// for delta in deltas {
///     assert_eq!(delta.get::<radian>(), 1.0);
/// }
/// ```
#[derive(Debug, Clone)]
pub struct DifferentialSolver {
    inverse_transform: SMatrix<f64, 4, 3>,
}

impl DifferentialSolver {
    #[must_use]
    pub fn new() -> Self {
        Self {
            inverse_transform: SMatrix::from_row_slice(&[
                1.0, -1.0, -1.0, //
                1.0, 1.0, -1.0, //
                1.0, 1.0, 1.0, //
                1.0, -1.0, 1.0, //
            ]),
        }
    }

    /// Computes the four actuator deltas that produce the requested output
    /// deltas.
    #[must_use]
    pub fn compute_inverse_deltas(
        &self,
        output_1: Angle,
        output_2: Angle,
        output_3: Angle,
    ) -> [Angle; 4] {
        let output_vector = Vector3::new(
            output_1.get::<radian>(),
            output_2.get::<radian>(),
            output_3.get::<radian>(),
        );
        let input_vector = self.inverse_transform * output_vector;

        [
            Angle::new::<radian>(input_vector.x),
            Angle::new::<radian>(input_vector.y),
            Angle::new::<radian>(input_vector.z),
            Angle::new::<radian>(input_vector.w),
        ]
    }
}

impl Default for DifferentialSolver {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    fn radians(deltas: [Angle; 4]) -> [f64; 4] {
        deltas.map(|delta| delta.get::<radian>())
    }

    fn solve(output_1: f64, output_2: f64, output_3: f64) -> [f64; 4] {
        let solver = DifferentialSolver::new();
        radians(solver.compute_inverse_deltas(
            Angle::new::<radian>(output_1),
            Angle::new::<radian>(output_2),
            Angle::new::<radian>(output_3),
        ))
    }

    #[test]
    fn zero_output_needs_zero_input() {
        assert_eq!(solve(0.0, 0.0, 0.0), [0.0, 0.0, 0.0, 0.0]);
    }

    #[test]
    fn unit_outputs_match_transform_columns() {
        assert_eq!(solve(1.0, 0.0, 0.0), [1.0, 1.0, 1.0, 1.0]);
        assert_eq!(solve(0.0, 1.0, 0.0), [-1.0, 1.0, 1.0, -1.0]);
        assert_eq!(solve(0.0, 0.0, 1.0), [-1.0, -1.0, 1.0, 1.0]);
    }

    #[test]
    fn mixed_output_is_the_sum_of_scaled_columns() {
        let deltas = solve(2.0, -0.5, 3.0);
        let expected = [
            2.0 - (-0.5) - 3.0,
            2.0 + (-0.5) - 3.0,
            2.0 + (-0.5) + 3.0,
            2.0 - (-0.5) + 3.0,
        ];
        for (actual, expected) in deltas.into_iter().zip(expected) {
            assert_relative_eq!(actual, expected);
        }
    }

    #[test]
    fn mapping_is_linear() {
        let doubled = solve(0.4, -1.2, 2.6);
        let single = solve(0.2, -0.6, 1.3);
        for (doubled, single) in doubled.into_iter().zip(single) {
            assert_relative_eq!(doubled, 2.0 * single);
        }
    }
}
