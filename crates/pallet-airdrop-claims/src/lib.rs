//! Airdrop claims: per-account allocations unlocked by on-chain actions, with a linear decay,
//! cross-chain address reconciliation and an end-of-airdrop clawback.

#![cfg_attr(not(feature = "std"), no_std)]

use frame_support::{
    sp_runtime::{
        traits::{AccountIdConversion, CheckedAdd, Get, Zero},
        ArithmeticError, DispatchError,
    },
    traits::{Currency, StorageVersion},
};
pub use pallet::*;
pub use weights::*;

pub mod api;
mod claim;
mod clawback;
mod hooks;
mod invariants;
pub mod packet;
pub mod params;
mod queries;
mod reconcile;
pub mod traits;
pub mod types;
pub mod weights;

#[cfg(feature = "runtime-benchmarks")]
pub mod benchmarking;

#[cfg(test)]
mod mock;

#[cfg(test)]
mod tests;

/// The current storage version.
const STORAGE_VERSION: StorageVersion = StorageVersion::new(0);

/// The currency from a given config.
type CurrencyOf<T> = <T as Config>::Currency;
/// The balance from a given config.
pub type BalanceOf<T> =
    <CurrencyOf<T> as Currency<<T as frame_system::Config>::AccountId>>::Balance;
/// The params from a given config.
pub type ParamsOf<T> = params::Params<<T as Config>::Moment>;
/// The claims record from a given config.
pub type ClaimsRecordOf<T> = types::ClaimsRecord<BalanceOf<T>>;

// We have to temporarily allow some clippy lints. Later on we'll send patches to substrate to
// fix them at their end.
#[allow(clippy::missing_docs_in_private_items)]
#[frame_support::pallet]
pub mod pallet {
    use frame_support::{
        pallet_prelude::*,
        sp_runtime::traits::{AtLeast32BitUnsigned, MaybeSerializeDeserialize},
        traits::{fungible, Contains, Time},
        PalletId,
    };
    use frame_system::pallet_prelude::*;
    use sp_std::vec::Vec;

    use super::*;
    use crate::{
        params::ParamsError,
        traits::{AccountRegistry, AddressParser},
        types::Action,
    };

    #[pallet::pallet]
    #[pallet::storage_version(STORAGE_VERSION)]
    pub struct Pallet<T>(_);

    #[pallet::config]
    pub trait Config: frame_system::Config {
        /// Overarching event type.
        type RuntimeEvent: From<Event<Self>> + IsType<<Self as frame_system::Config>::RuntimeEvent>;

        /// The claimed currency.
        type Currency: Currency<Self::AccountId>
            + fungible::Inspect<Self::AccountId, Balance = BalanceOf<Self>>
            + fungible::Mutate<Self::AccountId>;

        /// The moment type the airdrop schedule is expressed in.
        type Moment: Parameter
            + Member
            + AtLeast32BitUnsigned
            + Copy
            + Default
            + MaxEncodedLen
            + MaybeSerializeDeserialize;

        /// The current time provider.
        type Time: Time<Moment = Self::Moment>;

        /// The fractional scaler for the decay computations.
        type DecayScale: decay_schedule_linear::traits::FracScale<
            Value = BalanceOf<Self>,
            FracPart = Self::Moment,
        >;

        /// The escrow pallet id, used for deriving the escrow account.
        #[pallet::constant]
        type EscrowPalletId: Get<PalletId>;

        /// The treasury account the decayed and clawed back funds go to.
        type TreasuryAccount: Get<Self::AccountId>;

        /// The dust amount every eligible account was seeded with.
        #[pallet::constant]
        type GenesisDust: Get<BalanceOf<Self>>;

        /// The transfer amount that signals a cross-chain address migration.
        #[pallet::constant]
        type TriggerAmount: Get<u128>;

        /// The interface into the account registry.
        type AccountRegistry: AccountRegistry<AccountId = Self::AccountId>;

        /// The accounts cross-chain transfers are not accepted for.
        type BlockedAccounts: Contains<Self::AccountId>;

        /// The parser for the packet addresses.
        type AddressParser: AddressParser<AccountId = Self::AccountId>;

        /// The origin allowed to update the params.
        type UpdateParamsOrigin: EnsureOrigin<Self::RuntimeOrigin>;

        /// Weight information for extrinsics in this pallet.
        type WeightInfo: WeightInfo;
    }

    /// The params used until configured otherwise: everything disabled.
    #[pallet::type_value]
    pub fn DefaultParams<T: Config>() -> ParamsOf<T> {
        ParamsOf::<T> {
            enable_claims: false,
            ..Default::default()
        }
    }

    /// The current airdrop params.
    #[pallet::storage]
    #[pallet::getter(fn params)]
    pub type CurrentParams<T: Config> =
        StorageValue<_, ParamsOf<T>, ValueQuery, DefaultParams<T>>;

    /// The claims records.
    #[pallet::storage]
    #[pallet::getter(fn claims_record)]
    pub type Claims<T: Config> =
        StorageMap<_, Twox64Concat, T::AccountId, ClaimsRecordOf<T>, OptionQuery>;

    #[pallet::genesis_config]
    pub struct GenesisConfig<T: Config> {
        /// The airdrop params.
        pub params: ParamsOf<T>,
        /// The claims records to start with.
        pub claims_records: Vec<(T::AccountId, ClaimsRecordOf<T>)>,
    }

    #[cfg(feature = "std")]
    impl<T: Config> Default for GenesisConfig<T> {
        fn default() -> Self {
            Self {
                params: Default::default(),
                claims_records: Default::default(),
            }
        }
    }

    #[pallet::genesis_build]
    impl<T: Config> GenesisBuild<T> for GenesisConfig<T> {
        fn build(&self) {
            if let Err(err) = Pallet::<T>::import_genesis(&self.params, &self.claims_records) {
                panic!("error during airdrop claims genesis: {err:?}");
            }
        }
    }

    #[pallet::event]
    #[pallet::generate_deposit(pub(super) fn deposit_event)]
    pub enum Event<T: Config> {
        /// An action share was claimed.
        Claimed {
            /// Who claimed.
            who: T::AccountId,
            /// The completed action.
            action: Action,
            /// The amount paid out.
            amount: BalanceOf<T>,
            /// The decayed part, returned to the treasury.
            remainder: BalanceOf<T>,
        },
        /// The sender record was merged into the recipient record.
        ClaimsRecordsMerged {
            /// The merged away account.
            sender: T::AccountId,
            /// The account holding the merged record.
            recipient: T::AccountId,
            /// The amount paid out to the recipient.
            claimed: BalanceOf<T>,
            /// The decayed part, returned to the treasury.
            remainder: BalanceOf<T>,
        },
        /// A record was moved to another account.
        ClaimsRecordMigrated {
            /// The previous owner.
            from: T::AccountId,
            /// The new owner.
            to: T::AccountId,
        },
        /// The escrow leftovers were moved to the treasury.
        EscrowSwept {
            /// The swept amount.
            amount: BalanceOf<T>,
        },
        /// The genesis dust of an unused account was moved to the treasury.
        DustClawedBack {
            /// The unused account.
            who: T::AccountId,
            /// The clawed back amount.
            amount: BalanceOf<T>,
        },
        /// An empty unused account was removed.
        AccountPruned {
            /// The removed account.
            who: T::AccountId,
        },
        /// The airdrop has ended and the claims are disabled.
        AirdropEnded {
            /// The number of removed records.
            records_removed: u32,
        },
        /// The params were updated.
        ParamsUpdated {
            /// The new params.
            params: ParamsOf<T>,
        },
    }

    #[pallet::error]
    pub enum Error<T> {
        /// The action can not be claimed.
        InvalidAction,
        /// The address could not be parsed.
        MalformedAddress,
        /// The escrow can not cover the payout.
        InsufficientEscrow,
        /// The escrow balance does not match the records.
        InvariantViolation,
        /// One of the durations is zero.
        InvalidDuration,
        /// The claims denomination is malformed.
        InvalidDenom,
        /// One of the channel identifiers is malformed.
        InvalidChannel,
        /// The transfer amount could not be parsed.
        InvalidTransferAmount,
        /// The address is blocked.
        BlockedAddress,
        /// The channel is not authorized for the operation.
        UnauthorizedChannel,
        /// The recipient address can not receive transfers from a non-EVM chain.
        UnsupportedRecipient,
        /// The sender record can not be merged as some of its actions were completed.
        SenderHasCompletedActions,
        /// The claims record is not valid.
        InvalidClaimsRecord,
        /// The account has more than one claims record.
        DuplicateClaimsRecord,
        /// The escrow balance does not match the allocations.
        EscrowBalanceMismatch,
    }

    impl<T> From<ParamsError> for Error<T> {
        fn from(err: ParamsError) -> Self {
            match err {
                ParamsError::InvalidDuration => Error::InvalidDuration,
                ParamsError::InvalidDenom => Error::InvalidDenom,
                ParamsError::InvalidChannel => Error::InvalidChannel,
            }
        }
    }

    #[pallet::hooks]
    impl<T: Config> Hooks<BlockNumberFor<T>> for Pallet<T> {
        fn on_initialize(_n: BlockNumberFor<T>) -> Weight {
            Self::clawback_if_due()
        }

        #[cfg(feature = "try-runtime")]
        fn try_state(_n: BlockNumberFor<T>) -> Result<(), &'static str> {
            Self::check_escrow_invariant().map_err(|_| "escrow invariant violated")
        }
    }

    #[pallet::call(weight(T::WeightInfo))]
    impl<T: Config> Pallet<T> {
        /// Replace the airdrop params.
        #[pallet::call_index(0)]
        pub fn update_params(origin: OriginFor<T>, params: ParamsOf<T>) -> DispatchResult {
            T::UpdateParamsOrigin::ensure_origin(origin)?;

            params.validate().map_err(Error::<T>::from)?;

            <CurrentParams<T>>::put(&params);
            Self::deposit_event(Event::ParamsUpdated { params });

            Ok(())
        }

        /// Verify the escrow holds exactly the unclaimed allocations.
        #[pallet::call_index(1)]
        pub fn verify_escrow_invariant(_origin: OriginFor<T>) -> DispatchResult {
            Self::check_escrow_invariant()
        }
    }
}

impl<T: Config> Pallet<T> {
    /// The escrow account holding the unclaimed allocations.
    pub fn escrow_account_id() -> T::AccountId {
        T::EscrowPalletId::get().into_account_truncating()
    }

    /// Validate and store the genesis params and records.
    pub fn import_genesis(
        params: &ParamsOf<T>,
        claims_records: &[(T::AccountId, ClaimsRecordOf<T>)],
    ) -> Result<(), DispatchError> {
        params.validate().map_err(Error::<T>::from)?;

        let mut total: BalanceOf<T> = Zero::zero();
        for (who, record) in claims_records {
            if record.initial_claimable_amount.is_zero() || record.has_claimed_all() {
                return Err(Error::<T>::InvalidClaimsRecord.into());
            }
            if <Claims<T>>::contains_key(who) {
                return Err(Error::<T>::DuplicateClaimsRecord.into());
            }

            total = total
                .checked_add(&record.unclaimed_face_value())
                .ok_or(ArithmeticError::Overflow)?;
            <Claims<T>>::insert(who, record);
        }

        if total != Self::total_unclaimed() {
            return Err(Error::<T>::EscrowBalanceMismatch.into());
        }

        <CurrentParams<T>>::put(params);

        Ok(())
    }

    /// Export the current state in the genesis form.
    #[cfg(feature = "std")]
    pub fn export_genesis() -> GenesisConfig<T> {
        GenesisConfig {
            params: <CurrentParams<T>>::get(),
            claims_records: <Claims<T>>::iter().collect(),
        }
    }
}
