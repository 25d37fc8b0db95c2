//! Custom types we use.

use codec::{Decode, Encode, MaxEncodedLen};
use frame_support::{
    sp_runtime::traits::{AtLeast32BitUnsigned, CheckedDiv, Saturating, Zero},
    RuntimeDebug,
};
#[cfg(feature = "std")]
use frame_support::{Deserialize, Serialize};
use scale_info::TypeInfo;

/// The number of claimable actions.
pub const ACTIONS_COUNT: usize = 4;

/// An on-chain action that unlocks a part of the airdrop allocation.
#[derive(Clone, Copy, PartialEq, Eq, Encode, Decode, RuntimeDebug, TypeInfo, MaxEncodedLen)]
#[cfg_attr(feature = "std", derive(Serialize, Deserialize))]
pub enum Action {
    /// Placeholder value, never claimable.
    #[codec(index = 0)]
    Unspecified,
    /// Casting a governance vote.
    #[codec(index = 1)]
    Vote,
    /// Delegating stake.
    #[codec(index = 2)]
    Delegate,
    /// Executing an EVM transaction.
    #[codec(index = 3)]
    Evm,
    /// Performing a cross-chain transfer.
    #[codec(index = 4)]
    IbcTransfer,
}

impl Action {
    /// All the claimable actions, in their index order.
    pub const CLAIMABLE: [Action; ACTIONS_COUNT] = [
        Action::Vote,
        Action::Delegate,
        Action::Evm,
        Action::IbcTransfer,
    ];

    /// The position of the action in the completion flags, `None` for
    /// [`Action::Unspecified`].
    pub fn index(self) -> Option<usize> {
        match self {
            Action::Unspecified => None,
            Action::Vote => Some(0),
            Action::Delegate => Some(1),
            Action::Evm => Some(2),
            Action::IbcTransfer => Some(3),
        }
    }
}

/// The airdrop allocation of a single account.
#[derive(
    Clone, Copy, PartialEq, Eq, Encode, Decode, Default, RuntimeDebug, TypeInfo, MaxEncodedLen,
)]
#[cfg_attr(feature = "std", derive(Serialize, Deserialize))]
pub struct ClaimsRecord<Balance> {
    /// The total allocation, split evenly between the actions.
    pub initial_claimable_amount: Balance,
    /// The completion flags, indexed by [`Action::index`].
    pub actions_completed: [bool; ACTIONS_COUNT],
}

impl<Balance> ClaimsRecord<Balance>
where
    Balance: AtLeast32BitUnsigned + Copy,
{
    /// A fresh record with no actions completed.
    pub fn new(initial_claimable_amount: Balance) -> Self {
        Self {
            initial_claimable_amount,
            actions_completed: [false; ACTIONS_COUNT],
        }
    }

    /// Whether the given action was already completed.
    pub fn has_claimed(&self, action: Action) -> bool {
        action
            .index()
            .map(|index| self.actions_completed[index])
            .unwrap_or_default()
    }

    /// Whether any of the actions was already completed.
    pub fn has_claimed_any(&self) -> bool {
        self.actions_completed.iter().any(|completed| *completed)
    }

    /// Whether all of the actions were completed.
    pub fn has_claimed_all(&self) -> bool {
        self.actions_completed.iter().all(|completed| *completed)
    }

    /// Mark the given action as completed.
    pub fn mark_claimed(&mut self, action: Action) {
        if let Some(index) = action.index() {
            self.actions_completed[index] = true;
        }
    }

    /// The number of actions not yet completed.
    pub fn incomplete_actions(&self) -> u32 {
        let completed = self
            .actions_completed
            .iter()
            .filter(|completed| **completed)
            .count();
        // ACTIONS_COUNT fits into u32 trivially.
        ACTIONS_COUNT.saturating_sub(completed) as u32
    }

    /// The face value of a single action, the remainder of the division is never paid out.
    pub fn per_action_amount(&self) -> Balance {
        self.initial_claimable_amount
            .checked_div(&Balance::from(ACTIONS_COUNT as u32))
            .unwrap_or_else(Zero::zero)
    }

    /// The part of the allocation the escrow has to hold for this record.
    pub fn unclaimed_face_value(&self) -> Balance {
        self.per_action_amount()
            .saturating_mul(Balance::from(self.incomplete_actions()))
    }
}

/// The split of an action's face value at a given moment.
#[derive(Clone, Copy, PartialEq, Eq, Default, RuntimeDebug)]
pub struct ClaimSplit<Balance> {
    /// The part to pay out to the claimer.
    pub claimable: Balance,
    /// The decayed part, to return to the treasury.
    pub remainder: Balance,
}

impl<Balance: Saturating + Copy> ClaimSplit<Balance> {
    /// The total amount leaving the escrow.
    pub fn total(&self) -> Balance {
        self.claimable.saturating_add(self.remainder)
    }

    /// Add another split to this one.
    pub fn accrue(&mut self, other: Self) {
        self.claimable = self.claimable.saturating_add(other.claimable);
        self.remainder = self.remainder.saturating_add(other.remainder);
    }
}

/// The state of a single action, as reported to the queries.
#[derive(Clone, PartialEq, Eq, Encode, Decode, RuntimeDebug, TypeInfo)]
#[cfg_attr(feature = "std", derive(Serialize, Deserialize))]
pub struct ActionClaim<Balance> {
    /// The action.
    pub action: Action,
    /// Whether the action was completed.
    pub completed: bool,
    /// What completing the action would pay out right now.
    pub claimable: Balance,
}

/// A claims record along with the per-action breakdown.
#[derive(Clone, PartialEq, Eq, Encode, Decode, RuntimeDebug, TypeInfo)]
#[cfg_attr(feature = "std", derive(Serialize, Deserialize))]
pub struct ClaimsRecordDetail<Balance> {
    /// The total allocation.
    pub initial_claimable_amount: Balance,
    /// The per-action breakdown, in [`Action::CLAIMABLE`] order.
    pub claims: sp_std::vec::Vec<ActionClaim<Balance>>,
}
