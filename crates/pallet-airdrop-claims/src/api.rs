//! The runtime APIs.

use codec::Codec;
use frame_support::sp_runtime::DispatchError;
use sp_std::vec::Vec;

use crate::{
    params::Params,
    types::{ClaimsRecord, ClaimsRecordDetail},
};

sp_api::decl_runtime_apis! {
    /// A runtime API for inspecting the airdrop claims.
    pub trait AirdropClaimsApi<AccountId, Balance, Moment>
    where
        AccountId: Codec,
        Balance: Codec,
        Moment: Codec,
    {
        /// The balance still held by the escrow.
        fn total_unclaimed() -> Balance;

        /// The current params.
        fn params() -> Params<Moment>;

        /// A page of the claims records.
        fn claims_records(offset: u32, limit: u32) -> Vec<(AccountId, ClaimsRecord<Balance>)>;

        /// The claims record of the account with the per-action breakdown.
        fn claims_record(account: AccountId) -> Result<Option<ClaimsRecordDetail<Balance>>, DispatchError>;
    }
}
