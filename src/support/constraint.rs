//! Numeric positivity enforced at construction time.
//!
//! [`Positive<T>`] wraps a value that has been checked to be strictly greater
//! than zero. After construction the wrapper costs nothing: the invariant is
//! established once and every later read can rely on it.
//!
//! The check is performed with `partial_cmp` against `T::zero()`, so for
//! floating-point types a `NaN` input is rejected explicitly rather than
//! slipping through a `<=` comparison.

use std::cmp::Ordering;

use num_traits::Zero;
use thiserror::Error;

/// An error returned when a value fails the positivity check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PositivityError {
    #[error("value must not be zero")]
    Zero,
    #[error("value must not be negative")]
    Negative,
    #[error("value is not a number")]
    NotANumber,
}

/// A value known to be strictly greater than zero.
///
/// # Examples
///
/// ```
/// use transmission_models::support::constraint::Positive;
///
/// let teeth = Positive::new(24.0).unwrap();
/// assert_eq!(teeth.into_inner(), 24.0);
///
/// assert!(Positive::new(0.0).is_err());
/// assert!(Positive::new(-3.0).is_err());
/// assert!(Positive::new(f64::NAN).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Positive<T>(T);

impl<T: PartialOrd + Zero> Positive<T> {
    /// Constructs a positive value.
    ///
    /// # Errors
    ///
    /// Returns a [`PositivityError`] if the value is zero, negative, or not
    /// a number.
    pub fn new(value: T) -> Result<Self, PositivityError> {
        match value.partial_cmp(&T::zero()) {
            Some(Ordering::Greater) => Ok(Self(value)),
            Some(Ordering::Equal) => Err(PositivityError::Zero),
            Some(Ordering::Less) => Err(PositivityError::Negative),
            None => Err(PositivityError::NotANumber),
        }
    }
}

impl<T> Positive<T> {
    /// Consumes the wrapper and returns the inner value.
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> AsRef<T> for Positive<T> {
    fn as_ref(&self) -> &T {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integers() {
        let x = Positive::new(1).unwrap();
        assert_eq!(x.into_inner(), 1);

        assert_eq!(Positive::new(0), Err(PositivityError::Zero));
        assert_eq!(Positive::new(-2), Err(PositivityError::Negative));
    }

    #[test]
    fn floats() {
        assert!(Positive::new(0.1).is_ok());
        assert_eq!(Positive::new(0.0), Err(PositivityError::Zero));
        assert_eq!(Positive::new(-5.0), Err(PositivityError::Negative));
        assert_eq!(Positive::new(f64::NAN), Err(PositivityError::NotANumber));
    }

    #[test]
    fn as_ref_borrows_inner() {
        let x = Positive::new(40.0).unwrap();
        assert_eq!(x.as_ref(), &40.0);
    }
}
