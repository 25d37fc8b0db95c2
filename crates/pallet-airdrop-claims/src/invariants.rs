//! The escrow invariant.

use frame_support::{
    dispatch::DispatchResult,
    log::error,
    sp_runtime::{
        traits::{CheckedAdd, Zero},
        ArithmeticError,
    },
};

use crate::{BalanceOf, Claims, Config, Error, Pallet};

impl<T: Config> Pallet<T> {
    /// The escrow balance the records require: the face value of every incomplete action.
    pub fn expected_escrow_balance() -> Result<BalanceOf<T>, ArithmeticError> {
        <Claims<T>>::iter_values().try_fold(Zero::zero(), |total: BalanceOf<T>, record| {
            total
                .checked_add(&record.unclaimed_face_value())
                .ok_or(ArithmeticError::Overflow)
        })
    }

    /// The expected and the actual escrow balances.
    pub fn escrow_invariant() -> Result<(BalanceOf<T>, BalanceOf<T>), ArithmeticError> {
        Ok((Self::expected_escrow_balance()?, Self::total_unclaimed()))
    }

    /// Verify the escrow holds exactly what the records require.
    pub fn is_escrow_consistent() -> Result<bool, ArithmeticError> {
        let (expected, actual) = Self::escrow_invariant()?;
        Ok(expected == actual)
    }

    /// Check the escrow invariant, reporting the violation.
    pub fn check_escrow_invariant() -> DispatchResult {
        let (expected, actual) = Self::escrow_invariant()?;

        if expected != actual {
            error!(
                "airdrop claims: escrow invariant violated, expected {expected:?}, actual {actual:?}"
            );
            return Err(Error::<T>::InvariantViolation.into());
        }

        Ok(())
    }
}
