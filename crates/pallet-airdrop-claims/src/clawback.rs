//! The end of the airdrop: the escrow sweep and the clawback from the unused accounts.

use frame_support::{
    dispatch::DispatchResult,
    log::{error, info},
    sp_runtime::{
        traits::{Get, Zero},
        DispatchError,
    },
    storage::with_storage_layer,
    traits::{fungible, tokens::Preservation, Time},
    weights::Weight,
};
use sp_std::vec::Vec;

use crate::{
    traits::{AccountKind, AccountRegistry},
    BalanceOf, Claims, Config, CurrentParams, Event, Pallet, ParamsOf, WeightInfo,
};

impl<T: Config> Pallet<T> {
    /// End the airdrop if its time has come.
    pub(crate) fn clawback_if_due() -> Weight {
        let mut weight = T::DbWeight::get().reads(2);

        let params = <CurrentParams<T>>::get();
        if !params.is_clawback_due(T::Time::now()) {
            return weight;
        }

        match Self::end_airdrop(params) {
            Ok(records_removed) => {
                weight.saturating_accrue(T::WeightInfo::end_airdrop(records_removed));
            }
            Err(err) => error!("airdrop claims: unable to end the airdrop: {err:?}"),
        }

        weight
    }

    /// Sweep the escrow, claw back from the unused accounts, drop every record and disable the
    /// claims, all as a single unit.
    ///
    /// Returns the number of the removed records.
    pub fn end_airdrop(mut params: ParamsOf<T>) -> Result<u32, DispatchError> {
        with_storage_layer(move || {
            Self::sweep_escrow()?;

            let records_removed = Self::clawback_unused_accounts();

            params.enable_claims = false;
            <CurrentParams<T>>::put(params);

            info!("airdrop claims: airdrop ended, {records_removed} records removed");
            Self::deposit_event(Event::AirdropEnded { records_removed });

            Ok(records_removed)
        })
    }

    /// Move whatever is left in the escrow to the treasury.
    fn sweep_escrow() -> DispatchResult {
        let escrow = Self::escrow_account_id();
        let amount = <T::Currency as fungible::Inspect<_>>::balance(&escrow);
        if amount.is_zero() {
            return Ok(());
        }

        <T::Currency as fungible::Mutate<_>>::transfer(
            &escrow,
            &T::TreasuryAccount::get(),
            amount,
            Preservation::Expendable,
        )?;

        Self::deposit_event(Event::EscrowSwept { amount });

        Ok(())
    }

    /// Claw back from every account holding a record, then drop all the records.
    ///
    /// The per-account failures are logged and skipped over. Every iterated record is dropped,
    /// whatever happened to the account.
    fn clawback_unused_accounts() -> u32 {
        let dust = T::GenesisDust::get();
        let mut processed = Vec::new();

        for who in <Claims<T>>::iter_keys() {
            if let Err(err) = with_storage_layer(|| Self::clawback_account(&who, dust)) {
                error!("airdrop claims: unable to claw back from {who:?}: {err:?}");
            }
            processed.push(who);
        }

        let records_removed = u32::try_from(processed.len()).unwrap_or(u32::MAX);
        for who in processed {
            <Claims<T>>::remove(who);
        }

        records_removed
    }

    /// Claw back from a single account if it was never used.
    fn clawback_account(who: &T::AccountId, dust: BalanceOf<T>) -> DispatchResult {
        if T::AccountRegistry::account_kind(who) != Some(AccountKind::Standard) {
            return Ok(());
        }

        if !<frame_system::Pallet<T>>::account_nonce(who).is_zero() {
            return Ok(());
        }

        let total = <T::Currency as fungible::Inspect<_>>::total_balance(who);

        if total.is_zero() && !T::AccountRegistry::holds_other_assets(who) {
            T::AccountRegistry::remove_account(who)?;
            Self::deposit_event(Event::AccountPruned { who: who.clone() });
            return Ok(());
        }

        if !dust.is_zero() && total == dust {
            <T::Currency as fungible::Mutate<_>>::transfer(
                who,
                &T::TreasuryAccount::get(),
                dust,
                Preservation::Expendable,
            )?;
            Self::deposit_event(Event::DustClawedBack {
                who: who.clone(),
                amount: dust,
            });
        }

        Ok(())
    }
}
