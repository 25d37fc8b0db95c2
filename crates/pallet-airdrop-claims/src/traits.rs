//! Traits we use and expose.

use frame_support::dispatch::DispatchResult;

/// The kind of an account, as classified by the account registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountKind {
    /// An ordinary externally owned account.
    Standard,
    /// An account under a vesting lock.
    Vesting,
    /// An account owned by a runtime module.
    Module,
    /// Anything else.
    Other,
}

/// The interface into the account registry.
pub trait AccountRegistry {
    /// The account ID.
    type AccountId;

    /// Classify the account, `None` if the account does not exist.
    fn account_kind(who: &Self::AccountId) -> Option<AccountKind>;

    /// Whether the account holds any assets besides the claims currency.
    fn holds_other_assets(who: &Self::AccountId) -> bool;

    /// Remove the account from the registry.
    fn remove_account(who: &Self::AccountId) -> DispatchResult;
}

/// The parser for the addresses carried by the cross-chain packets.
pub trait AddressParser {
    /// The account ID.
    type AccountId;

    /// Parse the raw address, `None` if it is malformed.
    fn parse(raw: &[u8]) -> Option<Self::AccountId>;
}

/// The callbacks the subsystems performing the claimable actions invoke.
pub trait ActionHooks<AccountId> {
    /// A governance vote was cast.
    ///
    /// Claims failures are logged and never surface to the caller.
    fn on_vote_cast(who: &AccountId);

    /// A delegation was created or modified.
    ///
    /// Claims failures are logged and never surface to the caller.
    fn on_delegation_modified(who: &AccountId);

    /// An EVM transaction was executed.
    fn on_evm_transaction_executed(who: &AccountId) -> DispatchResult;
}
