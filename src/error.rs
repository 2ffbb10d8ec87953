//! Guarded division.
//!
//! Every operation that divides by a computed magnitude (`inv`, `unitize`, `normalize`
//! and scalar division) routes its divisor through [`guarded`]. Whether the guard is
//! active is fixed at build time by the `checked-division` cargo feature.

use num_traits::Float;
use thiserror::Error;

/// `true` when the crate was built with the `checked-division` feature.
pub const CHECKED_DIVISION: bool = cfg!(feature = "checked-division");

/// The divisor of an operation was too close to zero.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
#[error("{operation}: divisor magnitude {magnitude:e} is too small")]
pub struct DivisionError {
    pub operation: &'static str,
    pub magnitude: f64,
}

/// Checks `divisor` against the machine epsilon of `T`.
///
/// Always performs the check, independent of [`CHECKED_DIVISION`].
pub fn checked<T: Float>(operation: &'static str, divisor: T) -> Result<T, DivisionError> {
    let magnitude = divisor.abs();
    if magnitude < T::epsilon() || magnitude.is_nan() {
        let magnitude = magnitude.to_f64().unwrap_or(f64::NAN);
        log::debug!("{operation}: rejected divisor {magnitude:e}");
        return Err(DivisionError {
            operation,
            magnitude,
        });
    }
    Ok(divisor)
}

/// Returns `divisor` unchanged, panicking first if the guard is enabled and the
/// divisor is too small.
#[inline]
pub fn guarded<T: Float>(operation: &'static str, divisor: T) -> T {
    if CHECKED_DIVISION {
        if let Err(err) = checked(operation, divisor) {
            panic!("{err}");
        }
    }
    divisor
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn small_divisor_is_rejected() {
        let err = checked("unitize", 1e-20_f64).unwrap_err();
        assert_eq!("unitize", err.operation);
        assert_eq!(1e-20, err.magnitude);
    }

    #[test]
    fn negative_divisor_passes() {
        assert_eq!(Ok(-2.0_f32), checked("inv", -2.0_f32));
    }

    #[test]
    fn nan_divisor_is_rejected() {
        assert!(checked("normalize", f64::NAN).is_err());
    }

    #[test]
    fn error_message_names_the_operation() {
        let err = checked("inv", 0.0_f64).unwrap_err();
        assert!(err.to_string().starts_with("inv:"));
    }

    #[cfg(not(feature = "checked-division"))]
    #[test]
    fn unchecked_guard_passes_zero_through() {
        assert_eq!(0.0, guarded("div", 0.0_f64));
    }

    #[cfg(feature = "checked-division")]
    #[test]
    #[should_panic(expected = "div:")]
    fn checked_guard_panics_on_zero() {
        guarded("div", 0.0_f64);
    }
}
