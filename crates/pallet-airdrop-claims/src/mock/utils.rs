//! Mock utils.

use mockall::mock;

use super::*;
use crate::traits;

type AccountId = <Test as frame_system::Config>::AccountId;

mock! {
    #[derive(Debug)]
    pub AccountRegistry {}
    impl traits::AccountRegistry for AccountRegistry {
        type AccountId = AccountId;

        fn account_kind(who: &AccountId) -> Option<traits::AccountKind>;
        fn holds_other_assets(who: &AccountId) -> bool;
        fn remove_account(who: &AccountId) -> frame_support::dispatch::DispatchResult;
    }
}

/// Set the current moment, at the first block so that the events are recorded.
pub fn set_now(now: u64) {
    System::set_block_number(1);
    Timestamp::set_timestamp(now);
}

/// Encode the account id the way the packets carry it.
pub fn address(who: u64) -> Vec<u8> {
    who.to_string().into_bytes()
}

pub fn runtime_lock() -> std::sync::MutexGuard<'static, ()> {
    static MOCK_RUNTIME_MUTEX: std::sync::Mutex<()> = std::sync::Mutex::new(());

    // Ignore the poisoning for the tests that panic.
    // We only care about concurrency here, not about the poisoning.
    match MOCK_RUNTIME_MUTEX.lock() {
        Ok(guard) => guard,
        Err(poisoned) => poisoned.into_inner(),
    }
}

pub trait TestExternalitiesExt {
    fn execute_with_ext<R, E>(&mut self, execute: E) -> R
    where
        E: for<'e> FnOnce(&'e ()) -> R;
}

impl TestExternalitiesExt for frame_support::sp_io::TestExternalities {
    fn execute_with_ext<R, E>(&mut self, execute: E) -> R
    where
        E: for<'e> FnOnce(&'e ()) -> R,
    {
        let guard = runtime_lock();
        let result = self.execute_with(|| execute(&guard));
        drop(guard);
        result
    }
}
