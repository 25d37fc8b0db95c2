//! The linear schedule for decaying claimable amounts.

#![cfg_attr(not(feature = "std"), no_std)]

use num_traits::{CheckedSub, Unsigned, Zero};

pub mod traits;

use traits::{FracScale, FracScaleError};

/// The linear decay schedule.
///
/// The full amount is available until `until_decay` passes, then it shrinks linearly and
/// reaches zero once `decay` passes on top of that.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    codec::Encode,
    codec::Decode,
    codec::MaxEncodedLen,
    scale_info::TypeInfo,
)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "std", serde(deny_unknown_fields))]
pub struct LinearDecay<Duration> {
    /// The duration during which nothing decays (counting from the starting point).
    pub until_decay: Duration,
    /// The decay duration (counting from after the `until_decay` period).
    pub decay: Duration,
}

impl<Duration> LinearDecay<Duration>
where
    Duration: PartialOrd + Unsigned + CheckedSub + Copy,
{
    /// Compute the part of the `full` balance still available at the point in the schedule
    /// specified by `duration_since_starting_point`.
    pub fn compute_available_balance<Balance, S>(
        &self,
        full: Balance,
        duration_since_starting_point: Duration,
    ) -> Result<Balance, FracScaleError>
    where
        Balance: Unsigned + Copy,
        S: FracScale<Value = Balance, FracPart = Duration>,
    {
        let progress = match duration_since_starting_point.checked_sub(&self.until_decay) {
            // The decay did not start yet.
            None => return Ok(full),
            Some(v) => v,
        };

        if progress.is_zero() {
            return Ok(full);
        }

        let remaining_fraction = match self.decay.checked_sub(&progress) {
            // The decay period is already over, nothing is left.
            None => return Ok(Zero::zero()),
            Some(v) => v,
        };

        S::frac_scale(&full, &remaining_fraction, &self.decay)
    }
}
