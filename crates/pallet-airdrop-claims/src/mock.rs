//! The mock for the pallet.

// Allow simple integer_arithmetic in tests.
#![allow(clippy::arithmetic_side_effects)]

use decay_schedule_linear::traits::RoundHalfUpFracScaler;
use frame_support::{
    parameter_types, sp_io,
    traits::{ConstU128, ConstU32, ConstU64, Contains},
    PalletId,
};
use frame_system::EnsureRoot;
use sp_core::H256;
use sp_runtime::{
    testing::Header,
    traits::{BlakeTwo256, IdentityLookup},
    BuildStorage,
};

use crate::{self as pallet_airdrop_claims, params::channel_ids, types::ClaimsRecord};

mod utils;
pub use self::utils::*;

type UncheckedExtrinsic = frame_system::mocking::MockUncheckedExtrinsic<Test>;
type Block = frame_system::mocking::MockBlock<Test>;

frame_support::construct_runtime!(
    pub struct Test where
        Block = Block,
        NodeBlock = Block,
        UncheckedExtrinsic = UncheckedExtrinsic,
    {
        System: frame_system::{Pallet, Call, Config, Storage, Event<T>},
        Timestamp: pallet_timestamp::{Pallet, Call, Storage, Inherent},
        Balances: pallet_balances::{Pallet, Call, Storage, Config<T>, Event<T>},
        AirdropClaims: pallet_airdrop_claims::{Pallet, Call, Storage, Config<T>, Event<T>},
    }
);

impl frame_system::Config for Test {
    type BaseCallFilter = frame_support::traits::Everything;
    type BlockWeights = ();
    type BlockLength = ();
    type DbWeight = ();
    type RuntimeOrigin = RuntimeOrigin;
    type RuntimeCall = RuntimeCall;
    type Index = u64;
    type BlockNumber = u64;
    type Hash = H256;
    type Hashing = BlakeTwo256;
    type AccountId = u64;
    type Lookup = IdentityLookup<u64>;
    type Header = Header;
    type RuntimeEvent = RuntimeEvent;
    type BlockHashCount = ConstU64<250>;
    type Version = ();
    type PalletInfo = PalletInfo;
    type AccountData = pallet_balances::AccountData<u64>;
    type OnNewAccount = ();
    type OnKilledAccount = ();
    type SystemWeightInfo = ();
    type SS58Prefix = ();
    type OnSetCode = ();
    type MaxConsumers = ConstU32<16>;
}

impl pallet_timestamp::Config for Test {
    type Moment = u64;
    type OnTimestampSet = ();
    type MinimumPeriod = ConstU64<1>;
    type WeightInfo = ();
}

impl pallet_balances::Config for Test {
    type Balance = u64;
    type RuntimeEvent = RuntimeEvent;
    type DustRemoval = ();
    type ExistentialDeposit = ConstU64<1>;
    type AccountStore = System;
    type MaxLocks = ();
    type HoldIdentifier = ();
    type FreezeIdentifier = ();
    type MaxReserves = ();
    type MaxHolds = ConstU32<0>;
    type MaxFreezes = ConstU32<0>;
    type ReserveIdentifier = [u8; 8];
    type WeightInfo = ();
}

pub const ALICE: u64 = 1;
pub const BOB: u64 = 2;
pub const CAROL: u64 = 3;
pub const DAVE: u64 = 4;
pub const BLOCKED: u64 = 666;
pub const TREASURY: u64 = 1001;

pub const TREASURY_INITIAL_BALANCE: u64 = 1000;
pub const GENESIS_DUST: u64 = 10;
pub const TRIGGER_AMOUNT: u128 = 10000;

pub const AIRDROP_START: u64 = 1000;
pub const DURATION_UNTIL_DECAY: u64 = 1000;
pub const DURATION_OF_DECAY: u64 = 1000;
pub const DECAY_START: u64 = AIRDROP_START + DURATION_UNTIL_DECAY;
pub const AIRDROP_END: u64 = DECAY_START + DURATION_OF_DECAY;

parameter_types! {
    pub const EscrowPalletId: PalletId = PalletId(*b"airdrop0");
    pub const TreasuryAccount: u64 = TREASURY;
}

/// Blocks the [`BLOCKED`] account.
pub struct BlockedAccounts;

impl Contains<u64> for BlockedAccounts {
    fn contains(who: &u64) -> bool {
        *who == BLOCKED
    }
}

/// Parses the decimal account ids.
pub struct DecimalAddressParser;

impl crate::traits::AddressParser for DecimalAddressParser {
    type AccountId = u64;

    fn parse(raw: &[u8]) -> Option<u64> {
        core::str::from_utf8(raw).ok()?.parse().ok()
    }
}

impl pallet_airdrop_claims::Config for Test {
    type RuntimeEvent = RuntimeEvent;
    type Currency = Balances;
    type Moment = u64;
    type Time = Timestamp;
    type DecayScale = RoundHalfUpFracScaler<u128, u64, u64>;
    type EscrowPalletId = EscrowPalletId;
    type TreasuryAccount = TreasuryAccount;
    type GenesisDust = ConstU64<GENESIS_DUST>;
    type TriggerAmount = ConstU128<TRIGGER_AMOUNT>;
    type AccountRegistry = MockAccountRegistry;
    type BlockedAccounts = BlockedAccounts;
    type AddressParser = DecimalAddressParser;
    type UpdateParamsOrigin = EnsureRoot<u64>;
    type WeightInfo = ();
}

/// The escrow account of the mock runtime.
pub fn escrow() -> u64 {
    AirdropClaims::escrow_account_id()
}

/// The params the tests run with.
pub fn test_params() -> crate::ParamsOf<Test> {
    crate::params::Params {
        enable_claims: true,
        airdrop_start_time: AIRDROP_START,
        duration_until_decay: DURATION_UNTIL_DECAY,
        duration_of_decay: DURATION_OF_DECAY,
        claims_denom: crate::params::Denom::truncate_from(b"aclaims".to_vec()),
        authorized_channels: channel_ids(&["channel-0", "channel-3"]),
        evm_channels: channel_ids(&["channel-2"]),
    }
}

/// The genesis with the given records, the escrow funded with their unclaimed face value and
/// every record holder seeded with the genesis dust.
pub fn genesis_with_records(claims_records: Vec<(u64, ClaimsRecord<u64>)>) -> GenesisConfig {
    let escrow_funds: u64 = claims_records
        .iter()
        .map(|(_, record)| record.unclaimed_face_value())
        .sum();

    let mut balances = vec![(TREASURY, TREASURY_INITIAL_BALANCE)];
    if escrow_funds > 0 {
        balances.push((escrow(), escrow_funds));
    }
    balances.extend(claims_records.iter().map(|(who, _)| (*who, GENESIS_DUST)));

    GenesisConfig {
        system: Default::default(),
        balances: BalancesConfig { balances },
        airdrop_claims: AirdropClaimsConfig {
            params: test_params(),
            claims_records,
        },
    }
}

pub fn new_test_ext() -> sp_io::TestExternalities {
    new_test_ext_with(genesis_with_records(vec![
        (ALICE, ClaimsRecord::new(1000)),
        (BOB, ClaimsRecord::new(1000)),
    ]))
}

// This function basically just builds a genesis storage key/value store according to
// our desired mockup.
pub fn new_test_ext_with(genesis_config: GenesisConfig) -> sp_io::TestExternalities {
    let storage = genesis_config.build_storage().unwrap();
    storage.into()
}
