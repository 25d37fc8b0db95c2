//! The action hooks the other subsystems call into.

use frame_support::{dispatch::DispatchResult, log::error};

use crate::{traits::ActionHooks, types::Action, Config, CurrentParams, Pallet};

impl<T: Config> Pallet<T> {
    /// Claim the action, logging instead of failing.
    fn claim_or_log(who: &T::AccountId, action: Action) {
        let params = <CurrentParams<T>>::get();
        if let Err(err) = Self::claim_for_action(who, action, &params) {
            error!("airdrop claims: unable to claim {action:?} for {who:?}: {err:?}");
        }
    }
}

impl<T: Config> ActionHooks<T::AccountId> for Pallet<T> {
    fn on_vote_cast(who: &T::AccountId) {
        Self::claim_or_log(who, Action::Vote);
    }

    fn on_delegation_modified(who: &T::AccountId) {
        Self::claim_or_log(who, Action::Delegate);
    }

    fn on_evm_transaction_executed(who: &T::AccountId) -> DispatchResult {
        let params = <CurrentParams<T>>::get();
        Self::claim_for_action(who, Action::Evm, &params)?;
        Ok(())
    }
}
