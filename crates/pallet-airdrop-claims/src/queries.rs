//! The read-only queries.

use frame_support::{sp_runtime::DispatchError, traits::fungible, traits::Time};
use sp_std::vec::Vec;

use crate::{
    types::{Action, ActionClaim, ClaimsRecordDetail},
    BalanceOf, Claims, ClaimsRecordOf, Config, CurrentParams, Pallet,
};

impl<T: Config> Pallet<T> {
    /// The balance still held by the escrow.
    pub fn total_unclaimed() -> BalanceOf<T> {
        <T::Currency as fungible::Inspect<_>>::balance(&Self::escrow_account_id())
    }

    /// A page of the claims records.
    pub fn claims_records(offset: u32, limit: u32) -> Vec<(T::AccountId, ClaimsRecordOf<T>)> {
        <Claims<T>>::iter()
            .skip(offset as usize)
            .take(limit as usize)
            .collect()
    }

    /// The claims record of the account with the per-action breakdown, `None` if the account
    /// has no record.
    pub fn claims_record_detail(
        who: &T::AccountId,
    ) -> Result<Option<ClaimsRecordDetail<BalanceOf<T>>>, DispatchError> {
        let record = match <Claims<T>>::get(who) {
            Some(record) => record,
            None => return Ok(None),
        };

        let params = <CurrentParams<T>>::get();
        let now = T::Time::now();

        let claims = Action::CLAIMABLE
            .into_iter()
            .map(|action| {
                Ok(ActionClaim {
                    action,
                    completed: record.has_claimed(action),
                    claimable: Self::claimable_amount(&record, action, now, &params)?,
                })
            })
            .collect::<Result<Vec<_>, DispatchError>>()?;

        Ok(Some(ClaimsRecordDetail {
            initial_claimable_amount: record.initial_claimable_amount,
            claims,
        }))
    }
}
