use frame_support::{
    assert_noop, assert_ok, assert_storage_noop,
    traits::{fungible::Mutate, tokens::Preservation},
};

use super::*;
use crate::types::Action;

/// This test verifies that claiming at the decay start pays out the full action share.
#[test]
fn claim_at_decay_start_pays_full_share() {
    new_test_ext().execute_with_ext(|_| {
        // Check test preconditions.
        set_now(DECAY_START);
        let escrow_before = escrow_balance();
        let treasury_before = balance(TREASURY);
        let total_issuance_before = total_issuance();

        // Invoke the function under test.
        assert_eq!(
            AirdropClaims::claim_for_action(&ALICE, Action::Evm, &test_params()),
            Ok(250)
        );

        // Assert state changes.
        assert_eq!(balance(ALICE), GENESIS_DUST + 250);
        assert_eq!(escrow_before - escrow_balance(), 250);
        assert_eq!(balance(TREASURY), treasury_before);
        assert_eq!(total_issuance(), total_issuance_before);
        assert_eq!(
            record(ALICE),
            Some(record_with(1000, [false, false, true, false]))
        );
        assert_eq!(
            last_event(),
            RuntimeEvent::AirdropClaims(Event::Claimed {
                who: ALICE,
                action: Action::Evm,
                amount: 250,
                remainder: 0,
            })
        );
    });
}

/// This test verifies that claiming halfway through the decay pays out half the share, and
/// returns the other half to the treasury.
#[test]
fn claim_halfway_through_decay_pays_half_share() {
    new_test_ext().execute_with_ext(|_| {
        // Check test preconditions.
        set_now(DECAY_START + DURATION_OF_DECAY / 2);
        let escrow_before = escrow_balance();
        let treasury_before = balance(TREASURY);

        // Invoke the function under test.
        assert_eq!(
            AirdropClaims::claim_for_action(&ALICE, Action::Vote, &test_params()),
            Ok(125)
        );

        // Assert state changes.
        assert_eq!(balance(ALICE), GENESIS_DUST + 125);
        assert_eq!(balance(TREASURY) - treasury_before, 125);
        assert_eq!(escrow_before - escrow_balance(), 250);
        assert_eq!(
            record(ALICE),
            Some(record_with(1000, [true, false, false, false]))
        );
        assert_eq!(Pallet::<Test>::is_escrow_consistent(), Ok(true));
    });
}

/// This test verifies that nothing can be claimed once the airdrop is over.
#[test]
fn claim_after_airdrop_end_is_noop() {
    new_test_ext().execute_with_ext(|_| {
        set_now(AIRDROP_END + 1);

        assert_storage_noop!(assert_eq!(
            AirdropClaims::claim_for_action(&ALICE, Action::Evm, &test_params()),
            Ok(0)
        ));
    });
}

/// This test verifies that nothing can be claimed before the airdrop starts.
#[test]
fn claim_before_airdrop_start_is_noop() {
    new_test_ext().execute_with_ext(|_| {
        set_now(AIRDROP_START - 1);

        assert_storage_noop!(assert_eq!(
            AirdropClaims::claim_for_action(&ALICE, Action::Vote, &test_params()),
            Ok(0)
        ));
    });
}

/// This test verifies that nothing can be claimed while the claims are disabled.
#[test]
fn claim_with_claims_disabled_is_noop() {
    new_test_ext().execute_with_ext(|_| {
        set_now(DECAY_START);
        let params = crate::params::Params {
            enable_claims: false,
            ..test_params()
        };

        assert_storage_noop!(assert_eq!(
            AirdropClaims::claim_for_action(&ALICE, Action::Vote, &params),
            Ok(0)
        ));
    });
}

/// This test verifies that claiming without a record is a no-op.
#[test]
fn claim_without_record_is_noop() {
    new_test_ext().execute_with_ext(|_| {
        set_now(DECAY_START);

        assert_storage_noop!(assert_eq!(
            AirdropClaims::claim_for_action(&CAROL, Action::Vote, &test_params()),
            Ok(0)
        ));
    });
}

/// This test verifies that the unspecified action is rejected.
#[test]
fn claim_unspecified_action_fails() {
    new_test_ext().execute_with_ext(|_| {
        set_now(DECAY_START);

        assert_noop!(
            AirdropClaims::claim_for_action(&ALICE, Action::Unspecified, &test_params()),
            Error::<Test>::InvalidAction
        );
    });
}

/// This test verifies that claiming the same action twice does not pay out twice.
#[test]
fn claim_is_idempotent() {
    new_test_ext().execute_with_ext(|_| {
        set_now(DECAY_START);

        assert_eq!(
            AirdropClaims::claim_for_action(&ALICE, Action::Delegate, &test_params()),
            Ok(250)
        );

        assert_storage_noop!(assert_eq!(
            AirdropClaims::claim_for_action(&ALICE, Action::Delegate, &test_params()),
            Ok(0)
        ));
        assert_eq!(balance(ALICE), GENESIS_DUST + 250);
    });
}

/// This test verifies that the record is dropped once every action is claimed.
#[test]
fn claiming_all_actions_drops_record() {
    new_test_ext().execute_with_ext(|_| {
        set_now(AIRDROP_START);

        for action in Action::CLAIMABLE {
            assert_eq!(
                AirdropClaims::claim_for_action(&ALICE, action, &test_params()),
                Ok(250)
            );
        }

        assert_eq!(record(ALICE), None);
        assert_eq!(balance(ALICE), GENESIS_DUST + 1000);
        assert_eq!(escrow_balance(), 1000);
        assert_eq!(Pallet::<Test>::is_escrow_consistent(), Ok(true));
    });
}

/// This test verifies that a claim the escrow can not cover changes nothing.
#[test]
fn claim_with_insufficient_escrow_rolls_back() {
    new_test_ext().execute_with_ext(|_| {
        set_now(DECAY_START);
        assert_ok!(<Balances as Mutate<u64>>::transfer(
            &escrow(),
            &CAROL,
            1900,
            Preservation::Expendable
        ));

        assert_noop!(
            AirdropClaims::claim_for_action(&ALICE, Action::Vote, &test_params()),
            Error::<Test>::InsufficientEscrow
        );
        assert_eq!(record(ALICE), Some(ClaimsRecord::new(1000)));
    });
}
