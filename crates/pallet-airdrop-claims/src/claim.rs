//! The decay calculator and the claim processor.

use decay_schedule_linear::traits::FracScaleError;
use frame_support::{
    dispatch::DispatchResult,
    ensure,
    log::debug,
    sp_runtime::{
        traits::{Get, Saturating, Zero},
        ArithmeticError, DispatchError,
    },
    storage::with_storage_layer,
    traits::{
        fungible,
        tokens::{Fortitude, Preservation},
        Time,
    },
};

use crate::{
    types::{Action, ClaimSplit},
    BalanceOf, Claims, ClaimsRecordOf, Config, Error, Event, Pallet, ParamsOf,
};

/// The error we return when there is an overflow in the decay calculations.
const OVERFLOW_ERROR: DispatchError = DispatchError::Arithmetic(ArithmeticError::Overflow);
/// The error we return when there is a division by zero in the decay calculations.
const DIVISION_BY_ZERO_ERROR: DispatchError =
    DispatchError::Arithmetic(ArithmeticError::DivisionByZero);

/// Convert the `FracScaleError` to our error types.
fn convert_frac_scale_error(err: FracScaleError) -> DispatchError {
    match err {
        FracScaleError::Overflow | FracScaleError::Conversion => OVERFLOW_ERROR,
        FracScaleError::DivisionByZero => DIVISION_BY_ZERO_ERROR,
    }
}

impl<T: Config> Pallet<T> {
    /// The amount claiming the given action would pay out at the given moment.
    pub fn claimable_amount(
        record: &ClaimsRecordOf<T>,
        action: Action,
        now: T::Moment,
        params: &ParamsOf<T>,
    ) -> Result<BalanceOf<T>, DispatchError> {
        Ok(Self::claim_split(record, action, now, params)?.claimable)
    }

    /// Split the face value of the given action into the claimable part and the decayed
    /// remainder.
    pub(crate) fn claim_split(
        record: &ClaimsRecordOf<T>,
        action: Action,
        now: T::Moment,
        params: &ParamsOf<T>,
    ) -> Result<ClaimSplit<BalanceOf<T>>, DispatchError> {
        if record.initial_claimable_amount.is_zero()
            || now > params.airdrop_end_time()
            || action.index().is_none()
            || record.has_claimed(action)
        {
            return Ok(ClaimSplit::default());
        }

        let per_action = record.per_action_amount();
        let duration_since_start = now.saturating_sub(params.airdrop_start_time);

        let claimable = params
            .decay_schedule()
            .compute_available_balance::<_, T::DecayScale>(per_action, duration_since_start)
            .map_err(convert_frac_scale_error)?;

        Ok(ClaimSplit {
            claimable,
            remainder: per_action.saturating_sub(claimable),
        })
    }

    /// Claim the share of the given action for the given account.
    ///
    /// Returns zero without failing when there is nothing to claim.
    pub fn claim_for_action(
        who: &T::AccountId,
        action: Action,
        params: &ParamsOf<T>,
    ) -> Result<BalanceOf<T>, DispatchError> {
        with_storage_layer(|| {
            ensure!(action.index().is_some(), Error::<T>::InvalidAction);

            let now = T::Time::now();
            if !params.is_claims_active(now) {
                return Ok(Zero::zero());
            }

            let record = match <Claims<T>>::get(who) {
                Some(record) => record,
                None => return Ok(Zero::zero()),
            };

            Self::claim_with_record(who, record, action, params, now)
        })
    }

    /// Claim the action against the given record and store the outcome.
    pub(crate) fn claim_with_record(
        who: &T::AccountId,
        mut record: ClaimsRecordOf<T>,
        action: Action,
        params: &ParamsOf<T>,
        now: T::Moment,
    ) -> Result<BalanceOf<T>, DispatchError> {
        if record.has_claimed(action) {
            return Ok(Zero::zero());
        }

        let split = Self::claim_split(&record, action, now, params)?;
        if split.claimable.is_zero() {
            return Ok(Zero::zero());
        }

        Self::pay_out(who, split)?;

        record.mark_claimed(action);
        Self::store_claims_record(who, record);

        debug!(
            "airdrop claims: {who:?} claimed {:?} for {action:?}",
            split.claimable
        );

        Self::deposit_event(Event::Claimed {
            who: who.clone(),
            action,
            amount: split.claimable,
            remainder: split.remainder,
        });

        Ok(split.claimable)
    }

    /// Move the split out of the escrow: the claimable part to the claimer, the remainder to
    /// the treasury.
    pub(crate) fn pay_out(who: &T::AccountId, split: ClaimSplit<BalanceOf<T>>) -> DispatchResult {
        let escrow = Self::escrow_account_id();

        let available = <T::Currency as fungible::Inspect<_>>::reducible_balance(
            &escrow,
            Preservation::Expendable,
            Fortitude::Polite,
        );
        ensure!(available >= split.total(), Error::<T>::InsufficientEscrow);

        if !split.claimable.is_zero() {
            <T::Currency as fungible::Mutate<_>>::transfer(
                &escrow,
                who,
                split.claimable,
                Preservation::Expendable,
            )?;
        }

        if !split.remainder.is_zero() {
            <T::Currency as fungible::Mutate<_>>::transfer(
                &escrow,
                &T::TreasuryAccount::get(),
                split.remainder,
                Preservation::Expendable,
            )?;
        }

        Ok(())
    }

    /// Persist the record, or drop it once every action is completed.
    pub(crate) fn store_claims_record(who: &T::AccountId, record: ClaimsRecordOf<T>) {
        if record.has_claimed_all() {
            <Claims<T>>::remove(who);
        } else {
            <Claims<T>>::insert(who, record);
        }
    }
}
