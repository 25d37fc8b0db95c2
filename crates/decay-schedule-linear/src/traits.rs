//! Traits that we use.

use core::marker::PhantomData;

/// An error that can happen at [`FracScale`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(thiserror::Error))]
pub enum FracScaleError {
    /// An overflow occured.
    #[cfg_attr(feature = "std", error("overflow"))]
    Overflow,
    /// A division by zero occured.
    #[cfg_attr(feature = "std", error("division by zero"))]
    DivisionByZero,
    /// Convertion from the internal computations type to the value type failed.
    #[cfg_attr(feature = "std", error("type conversion"))]
    Conversion,
}

/// Fractional scaler.
///
/// Effectively represent multiplication of the value to a fraction operation: x * (a/b).
pub trait FracScale {
    /// The value type to scale.
    type Value;
    /// The type used for the fraction nominator and denominator.
    type FracPart;

    /// Compute `value` * (`nom` / `denom`).
    fn frac_scale(
        value: &Self::Value,
        nom: &Self::FracPart,
        denom: &Self::FracPart,
    ) -> Result<Self::Value, FracScaleError>;
}

/// A scaler that rounds the result to the nearest integer, with halves rounded up.
///
/// The computations are carried out in `T`, so pick a type wide enough to hold
/// `value * nom` without an overflow.
pub struct RoundHalfUpFracScaler<T, Value, FracPart>(PhantomData<(T, Value, FracPart)>);

impl<T, Value, FracPart> FracScale for RoundHalfUpFracScaler<T, Value, FracPart>
where
    T: num_traits::CheckedMul
        + num_traits::CheckedDiv
        + num_traits::CheckedSub
        + num_traits::CheckedAdd
        + num_traits::Zero
        + num_traits::One
        + PartialOrd,
    Value: Into<T> + Copy + num_traits::Zero,
    FracPart: Into<T> + Copy,
    T: TryInto<Value>,
{
    type Value = Value;
    type FracPart = FracPart;

    fn frac_scale(
        value: &Self::Value,
        nom: &Self::FracPart,
        denom: &Self::FracPart,
    ) -> Result<Self::Value, FracScaleError> {
        let value: T = (*value).into();
        let nom: T = (*nom).into();

        let upscaled = value.checked_mul(&nom).ok_or(FracScaleError::Overflow)?;
        if upscaled.is_zero() {
            return Ok(num_traits::Zero::zero());
        }

        let denom: T = (*denom).into();
        let quotient = upscaled
            .checked_div(&denom)
            .ok_or(FracScaleError::DivisionByZero)?;

        // `quotient * denom <= upscaled`, so neither of these can fail.
        let truncated = quotient
            .checked_mul(&denom)
            .ok_or(FracScaleError::Overflow)?;
        let remainder = upscaled
            .checked_sub(&truncated)
            .ok_or(FracScaleError::Overflow)?;
        let complement = denom
            .checked_sub(&remainder)
            .ok_or(FracScaleError::Overflow)?;

        // The fractional part is `remainder / denom`, it is at least a half when
        // `remainder >= denom - remainder`.
        let rounded = if remainder >= complement {
            quotient
                .checked_add(&T::one())
                .ok_or(FracScaleError::Overflow)?
        } else {
            quotient
        };

        rounded.try_into().map_err(|_| FracScaleError::Conversion)
    }
}
