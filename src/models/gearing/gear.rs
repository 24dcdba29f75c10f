use std::{
    cell::RefCell,
    collections::HashMap,
    sync::atomic::{AtomicU64, Ordering},
};

use thiserror::Error;
use uom::si::{
    f64::{Angle, Ratio},
    ratio::ratio,
};

use crate::support::constraint::{Positive, PositivityError};

/// Identity of a gear.
///
/// Gear equality and every ratio-cache lookup go through this identifier,
/// never through structural comparison of the gears themselves. Identifiers
/// can be assigned by the caller ([`GearId::new`]) or generated from a
/// process-wide counter ([`GearId::generate`]). Generated identifiers are
/// unique among themselves; a caller mixing assigned and generated ids in one
/// train is responsible for keeping them distinct.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GearId(u64);

impl GearId {
    /// A caller-assigned identifier.
    #[must_use]
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// The next identifier from the process-wide generator.
    #[must_use]
    pub fn generate() -> Self {
        static NEXT: AtomicU64 = AtomicU64::new(0);
        Self(NEXT.fetch_add(1, Ordering::Relaxed))
    }

    /// The raw identifier value.
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

/// An error returned when a gear is constructed with an unusable tooth count.
///
/// Raised at construction time so that downstream ratio math never has to
/// guard against division by zero.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
#[error("tooth count {num_teeth} is not a valid gear size")]
pub struct InvalidGearError {
    /// The rejected tooth count.
    pub num_teeth: f64,
    /// Why the tooth count was rejected.
    #[source]
    pub reason: PositivityError,
}

/// A gear: an identity plus a positive tooth count.
///
/// Gears are immutable once constructed. Each gear privately memoizes the
/// ratios it computes toward other gears, keyed by the peer's [`GearId`]; the
/// memo is never invalidated and is not observable from outside.
///
/// The memo lives in a [`RefCell`], so a `Gear` is not `Sync`. Trains and
/// their gears follow a single-writer model; sharing across threads requires
/// external synchronization.
///
/// # Examples
///
/// ```
/// use transmission_models::models::gearing::Gear;
/// use uom::si::ratio::ratio;
///
/// let driver = Gear::new(10.0).unwrap();
/// let driven = Gear::new(40.0).unwrap();
/// assert_eq!(driver.ratio_to(&driven).get::<ratio>(), 4.0);
/// ```
#[derive(Debug, Clone)]
pub struct Gear {
    id: GearId,
    num_teeth: Positive<f64>,
    ratios: RefCell<HashMap<GearId, Ratio>>,
}

impl Gear {
    /// Constructs a gear with a generated identifier.
    ///
    /// # Errors
    ///
    /// Returns an [`InvalidGearError`] if `num_teeth` is zero, negative, or
    /// not a number.
    pub fn new(num_teeth: f64) -> Result<Self, InvalidGearError> {
        Self::with_id(num_teeth, GearId::generate())
    }

    /// Constructs a gear with a caller-assigned identifier.
    ///
    /// # Errors
    ///
    /// Returns an [`InvalidGearError`] if `num_teeth` is zero, negative, or
    /// not a number.
    pub fn with_id(num_teeth: f64, id: GearId) -> Result<Self, InvalidGearError> {
        let teeth =
            Positive::new(num_teeth).map_err(|reason| InvalidGearError { num_teeth, reason })?;
        Ok(Self {
            id,
            num_teeth: teeth,
            ratios: RefCell::new(HashMap::new()),
        })
    }

    #[must_use]
    pub fn id(&self) -> GearId {
        self.id
    }

    #[must_use]
    pub fn num_teeth(&self) -> f64 {
        self.num_teeth.into_inner()
    }

    /// The speed ratio from this gear to `driven`: teeth(driven) over
    /// teeth(self).
    ///
    /// The first query per peer computes and memoizes the ratio; later
    /// queries return the memo.
    #[must_use]
    pub fn ratio_to(&self, driven: &Gear) -> Ratio {
        *self
            .ratios
            .borrow_mut()
            .entry(driven.id)
            .or_insert_with(|| Ratio::new::<ratio>(driven.num_teeth() / self.num_teeth()))
    }

    /// The delta seen at `driven` when this gear moves by `input_delta`.
    #[must_use]
    pub fn output_delta_for(&self, input_delta: Angle, driven: &Gear) -> Angle {
        (input_delta / self.ratio_to(driven)).into()
    }

    /// The delta this gear must move by for `driven` to move by
    /// `output_delta`.
    #[must_use]
    pub fn input_delta_for(&self, output_delta: Angle, driven: &Gear) -> Angle {
        (output_delta * self.ratio_to(driven)).into()
    }
}

/// Gear equality is identity equality: two gears are the same gear exactly
/// when their identifiers match.
impl PartialEq for Gear {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Gear {}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::angle::radian;

    #[test]
    fn rejects_unusable_tooth_counts() {
        let err = Gear::new(0.0).unwrap_err();
        assert_eq!(err.reason, PositivityError::Zero);

        let err = Gear::new(-12.0).unwrap_err();
        assert_eq!(err.num_teeth, -12.0);
        assert_eq!(err.reason, PositivityError::Negative);

        let err = Gear::new(f64::NAN).unwrap_err();
        assert_eq!(err.reason, PositivityError::NotANumber);
    }

    #[test]
    fn ratio_is_driven_teeth_over_driver_teeth() {
        let driver = Gear::new(10.0).unwrap();
        let driven = Gear::new(25.0).unwrap();
        assert_relative_eq!(driver.ratio_to(&driven).get::<ratio>(), 2.5);
    }

    #[test]
    fn ratio_is_inverse_symmetric() {
        let a = Gear::new(12.0).unwrap();
        let b = Gear::new(54.0).unwrap();
        assert_relative_eq!(
            a.ratio_to(&b).get::<ratio>(),
            1.0 / b.ratio_to(&a).get::<ratio>(),
        );
    }

    #[test]
    fn repeated_queries_return_the_memoized_ratio() {
        let driver = Gear::new(8.0).unwrap();
        let driven = Gear::new(56.0).unwrap();
        let first = driver.ratio_to(&driven);
        let second = driver.ratio_to(&driven);
        assert_eq!(first, second);
        assert_relative_eq!(second.get::<ratio>(), 7.0);
    }

    #[test]
    fn delta_helpers_invert_each_other() {
        let driver = Gear::new(10.0).unwrap();
        let driven = Gear::new(40.0).unwrap();

        let output = Angle::new::<radian>(2.0);
        let input = driver.input_delta_for(output, &driven);
        assert_relative_eq!(input.get::<radian>(), 8.0);
        assert_relative_eq!(
            driver.output_delta_for(input, &driven).get::<radian>(),
            2.0,
        );
    }

    #[test]
    fn equality_is_by_identifier() {
        let a = Gear::with_id(10.0, GearId::new(7)).unwrap();
        let b = Gear::with_id(99.0, GearId::new(7)).unwrap();
        let c = Gear::with_id(10.0, GearId::new(8)).unwrap();

        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn generated_identifiers_are_distinct() {
        let a = Gear::new(10.0).unwrap();
        let b = Gear::new(10.0).unwrap();
        assert_ne!(a.id(), b.id());
    }
}
