//! The weights.

use frame_support::dispatch::Weight;

/// The weight information trait, to be implemented in from the benches.
pub trait WeightInfo {
    /// Weight for `update_params` call.
    fn update_params() -> Weight;

    /// Weight for `verify_escrow_invariant` call.
    fn verify_escrow_invariant() -> Weight;

    /// Weight for ending the airdrop with the given number of records.
    fn end_airdrop(records: u32) -> Weight;
}

impl WeightInfo for () {
    fn update_params() -> Weight {
        Weight::zero()
    }

    fn verify_escrow_invariant() -> Weight {
        Weight::zero()
    }

    fn end_airdrop(_records: u32) -> Weight {
        Weight::zero()
    }
}
