//! The tests for the pallet.

use frame_support::traits::fungible::Inspect;

use crate::{mock::*, types::ClaimsRecord, *};

mod claim;

fn balance(who: u64) -> BalanceOf<Test> {
    <Balances as Inspect<u64>>::balance(&who)
}

fn escrow_balance() -> BalanceOf<Test> {
    balance(escrow())
}

fn total_issuance() -> BalanceOf<Test> {
    <Balances as Inspect<u64>>::total_issuance()
}

fn record(who: u64) -> Option<ClaimsRecord<u64>> {
    <Claims<Test>>::get(who)
}

fn record_with(initial_claimable_amount: u64, actions_completed: [bool; 4]) -> ClaimsRecord<u64> {
    ClaimsRecord {
        initial_claimable_amount,
        actions_completed,
    }
}

fn last_event() -> RuntimeEvent {
    System::events()
        .pop()
        .expect("at least one event expected")
        .event
}

/// This test verifies that the genesis builder correctly sets up the records and the escrow.
#[test]
fn basic_setup_works() {
    new_test_ext().execute_with_ext(|_| {
        // Check the records.
        assert_eq!(record(ALICE), Some(ClaimsRecord::new(1000)));
        assert_eq!(record(BOB), Some(ClaimsRecord::new(1000)));
        assert_eq!(record(CAROL), None);

        // Check the balances.
        assert_eq!(escrow_balance(), 2000);
        assert_eq!(balance(ALICE), GENESIS_DUST);
        assert_eq!(balance(TREASURY), TREASURY_INITIAL_BALANCE);

        // Check the params.
        assert_eq!(AirdropClaims::params(), test_params());
        assert_eq!(Pallet::<Test>::is_escrow_consistent(), Ok(true));
    });
}
