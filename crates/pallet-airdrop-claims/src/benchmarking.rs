//! The benchmarks for the pallet.

use frame_benchmarking::benchmarks;
use frame_support::{assert_ok, dispatch::DispatchResult};
use frame_system::RawOrigin;

use crate::*;

/// The benchmark interface into the environment.
pub trait Interface {
    type Config: super::Config;

    /// The data to be passed from `prepare_end_airdrop` to `verify_end_airdrop`.
    type Data;

    fn update_params_origin() -> <Self::Config as frame_system::Config>::RuntimeOrigin;
    fn create_params() -> super::ParamsOf<Self::Config>;
    fn create_account_id() -> <Self::Config as frame_system::Config>::AccountId;

    /// Obtain the account id of the claimant with the given index.
    fn create_claimant(index: u32) -> <Self::Config as frame_system::Config>::AccountId;

    /// Prepare the environment for ending the airdrop.
    fn prepare_end_airdrop() -> Self::Data;

    /// Verify the environment after ending the airdrop.
    fn verify_end_airdrop(data: Self::Data) -> DispatchResult;
}

benchmarks! {
    where_clause {
        where
            T: Interface<Config = T>
    }

    update_params {
        let origin = <T as Interface>::update_params_origin();
        let params = <T as Interface>::create_params();
    }: _<T::RuntimeOrigin>(origin, params.clone())
    verify {
        assert_eq!(CurrentParams::<T>::get(), params);
    }

    verify_escrow_invariant {
        let account_id = <T as Interface>::create_account_id();
    }: _(RawOrigin::Signed(account_id))
    verify {
        assert_eq!(Pallet::<T>::is_escrow_consistent(), Ok(true));
    }

    end_airdrop {
        let r in 0 .. 1000;

        for index in 0..r {
            let who = <T as Interface>::create_claimant(index);
            <Claims<T>>::insert(who, ClaimsRecordOf::<T>::new(100u32.into()));
        }

        let params = <T as Interface>::create_params();
        let end_airdrop = <T as Interface>::prepare_end_airdrop();
    }: {
        Pallet::<T>::end_airdrop(params)?;
    }
    verify {
        assert_eq!(<Claims<T>>::iter_keys().count(), 0);
        assert!(!CurrentParams::<T>::get().enable_claims);
        assert_ok!(<T as Interface>::verify_end_airdrop(end_airdrop));
    }

    impl_benchmark_test_suite!(
        Pallet,
        crate::mock::new_test_ext(),
        crate::mock::Test,
    );
}

#[cfg(test)]
impl Interface for crate::mock::Test {
    type Config = Self;
    type Data = (std::sync::MutexGuard<'static, ()>, Box<dyn std::any::Any>);

    fn update_params_origin() -> crate::mock::RuntimeOrigin {
        crate::mock::RuntimeOrigin::root()
    }

    fn create_params() -> crate::ParamsOf<Self::Config> {
        crate::params::Params {
            airdrop_start_time: 42,
            ..crate::mock::test_params()
        }
    }

    fn create_account_id() -> <Self::Config as frame_system::Config>::AccountId {
        0
    }

    fn create_claimant(index: u32) -> <Self::Config as frame_system::Config>::AccountId {
        10_000 + u64::from(index)
    }

    fn prepare_end_airdrop() -> Self::Data {
        use crate::{mock::MockAccountRegistry, traits::AccountKind};

        let mock_runtime_guard = crate::mock::runtime_lock();

        let account_kind_ctx = MockAccountRegistry::account_kind_context();
        let holds_other_assets_ctx = MockAccountRegistry::holds_other_assets_context();
        let remove_account_ctx = MockAccountRegistry::remove_account_context();
        account_kind_ctx
            .expect()
            .return_const(Some(AccountKind::Standard));
        holds_other_assets_ctx.expect().return_const(false);
        remove_account_ctx.expect().returning(|_| Ok(()));

        (
            mock_runtime_guard,
            Box::new((account_kind_ctx, holds_other_assets_ctx, remove_account_ctx)),
        )
    }

    fn verify_end_airdrop(data: Self::Data) -> DispatchResult {
        let (mock_runtime_guard, registry_ctx) = data;
        drop(registry_ctx);
        drop(mock_runtime_guard);
        Ok(())
    }
}
