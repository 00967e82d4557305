//! Benchmarking setup for pallet-meridian-token

use super::*;

#[allow(unused)]
use crate::Pallet as MeridianToken;
use frame_benchmarking::v2::*;
use frame_system::RawOrigin;

const SEED: u32 = 0;
const ASSET: u32 = 7;

#[benchmarks]
mod benchmarks {
    use super::*;

    #[benchmark]
    fn transfer() {
        let caller: T::AccountId = whitelisted_caller();
        let recipient: T::AccountId = account("recipient", 0, SEED);
        Balances::<T>::insert(&caller, 10_000_000u128);

        #[extrinsic_call]
        _(RawOrigin::Signed(caller), recipient.clone(), 1_000_000u128);

        assert_eq!(Balances::<T>::get(&recipient), 1_000_000);
    }

    #[benchmark]
    fn approve() {
        let caller: T::AccountId = whitelisted_caller();
        let spender: T::AccountId = account("spender", 0, SEED);

        #[extrinsic_call]
        _(RawOrigin::Signed(caller.clone()), spender.clone(), 1_000_000u128);

        assert_eq!(Allowances::<T>::get(&caller, &spender), 1_000_000);
    }

    #[benchmark]
    fn transfer_from() {
        let owner: T::AccountId = account("owner", 0, SEED);
        let spender: T::AccountId = whitelisted_caller();
        let recipient: T::AccountId = account("recipient", 0, SEED);
        Balances::<T>::insert(&owner, 10_000_000u128);
        Allowances::<T>::insert(&owner, &spender, 5_000_000u128);

        #[extrinsic_call]
        _(RawOrigin::Signed(spender.clone()), owner.clone(), recipient.clone(), 1_000_000u128);

        assert_eq!(Balances::<T>::get(&recipient), 1_000_000);
        assert_eq!(Allowances::<T>::get(&owner, &spender), 4_000_000);
    }

    #[benchmark]
    fn execute_scheduled_mint() {
        let caller: T::AccountId = whitelisted_caller();
        Minters::<T>::insert(&caller, true);
        Beneficiary::<T>::put(&caller);
        T::BenchmarkHelper::advance_to(MINT_SCHEDULE[0]);
        let cursor_before = ScheduleCursor::<T>::get();

        #[extrinsic_call]
        _(RawOrigin::Signed(caller));

        assert_eq!(ScheduleCursor::<T>::get(), cursor_before + 1);
    }

    #[benchmark]
    fn bridge_mint() {
        let caller: T::AccountId = whitelisted_caller();
        let recipient: T::AccountId = account("recipient", 0, SEED);
        Bridges::<T>::insert(&caller, true);

        #[extrinsic_call]
        _(RawOrigin::Signed(caller), recipient.clone(), 1_000_000u128);

        assert_eq!(Balances::<T>::get(&recipient), 1_000_000);
    }

    #[benchmark]
    fn bridge_burn() {
        let caller: T::AccountId = whitelisted_caller();
        let holder: T::AccountId = account("holder", 0, SEED);
        Bridges::<T>::insert(&caller, true);
        Balances::<T>::insert(&holder, 10_000_000u128);
        TotalSupply::<T>::put(10_000_000u128);

        #[extrinsic_call]
        _(RawOrigin::Signed(caller), holder.clone(), 1_000_000u128);

        assert_eq!(Balances::<T>::get(&holder), 9_000_000);
    }

    #[benchmark]
    fn emergency_stop() {
        let origin = T::AdminOrigin::try_successful_origin().expect("Admin origin");

        #[extrinsic_call]
        _(origin as T::RuntimeOrigin);

        assert_eq!(Halted::<T>::get(), true);
    }

    #[benchmark]
    fn lift_emergency_stop() {
        Halted::<T>::put(true);

        let origin = T::AdminOrigin::try_successful_origin().expect("Admin origin");

        #[extrinsic_call]
        _(origin as T::RuntimeOrigin);

        assert_eq!(Halted::<T>::get(), false);
    }

    #[benchmark]
    fn grant_minter() {
        let target: T::AccountId = account("minter", 0, SEED);

        let origin = T::AdminOrigin::try_successful_origin().expect("Admin origin");

        #[extrinsic_call]
        _(origin as T::RuntimeOrigin, target.clone());

        assert_eq!(Minters::<T>::get(&target), true);
    }

    #[benchmark]
    fn revoke_minter() {
        let target: T::AccountId = account("minter", 0, SEED);
        Minters::<T>::insert(&target, true);

        let origin = T::AdminOrigin::try_successful_origin().expect("Admin origin");

        #[extrinsic_call]
        _(origin as T::RuntimeOrigin, target.clone());

        assert_eq!(Minters::<T>::get(&target), false);
    }

    #[benchmark]
    fn grant_bridge() {
        let target: T::AccountId = account("bridge", 0, SEED);

        let origin = T::AdminOrigin::try_successful_origin().expect("Admin origin");

        #[extrinsic_call]
        _(origin as T::RuntimeOrigin, target.clone());

        assert_eq!(Bridges::<T>::get(&target), true);
    }

    #[benchmark]
    fn revoke_bridge() {
        let target: T::AccountId = account("bridge", 0, SEED);
        Bridges::<T>::insert(&target, true);

        let origin = T::AdminOrigin::try_successful_origin().expect("Admin origin");

        #[extrinsic_call]
        _(origin as T::RuntimeOrigin, target.clone());

        assert_eq!(Bridges::<T>::get(&target), false);
    }

    #[benchmark]
    fn rescue_asset() {
        let recipient: T::AccountId = account("recipient", 0, SEED);
        T::BenchmarkHelper::endow_asset(ASSET, &MeridianToken::<T>::account_id(), 1_000_000);

        let origin = T::AdminOrigin::try_successful_origin().expect("Admin origin");

        #[extrinsic_call]
        _(origin as T::RuntimeOrigin, ASSET, recipient.clone(), 400_000u128);

        assert_eq!(T::Assets::balance(ASSET, &recipient), 400_000);
    }

    #[benchmark]
    fn rescue_all_asset() {
        let recipient: T::AccountId = account("recipient", 0, SEED);
        T::BenchmarkHelper::endow_asset(ASSET, &MeridianToken::<T>::account_id(), 1_000_000);

        let origin = T::AdminOrigin::try_successful_origin().expect("Admin origin");

        #[extrinsic_call]
        _(origin as T::RuntimeOrigin, ASSET, recipient.clone());

        assert_eq!(T::Assets::balance(ASSET, &recipient), 1_000_000);
    }

    #[benchmark]
    fn rescue_native() {
        let recipient: T::AccountId = account("recipient", 0, SEED);
        T::NativeCurrency::mint_into(&MeridianToken::<T>::account_id(), 1_000_000_000u128)
            .expect("funding the pallet account");

        let origin = T::AdminOrigin::try_successful_origin().expect("Admin origin");

        #[extrinsic_call]
        _(origin as T::RuntimeOrigin, recipient.clone(), 400_000_000u128);

        assert_eq!(T::NativeCurrency::balance(&recipient), 400_000_000);
    }

    #[benchmark]
    fn rescue_all_native() {
        let recipient: T::AccountId = account("recipient", 0, SEED);
        T::NativeCurrency::mint_into(&MeridianToken::<T>::account_id(), 1_000_000_000u128)
            .expect("funding the pallet account");

        let origin = T::AdminOrigin::try_successful_origin().expect("Admin origin");

        #[extrinsic_call]
        _(origin as T::RuntimeOrigin, recipient.clone());

        assert_eq!(T::NativeCurrency::balance(&recipient), 1_000_000_000);
    }

    #[benchmark]
    fn set_beneficiary() {
        let target: T::AccountId = account("beneficiary", 0, SEED);

        let origin = T::AdminOrigin::try_successful_origin().expect("Admin origin");

        #[extrinsic_call]
        _(origin as T::RuntimeOrigin, target.clone());

        assert_eq!(Beneficiary::<T>::get(), Some(target));
    }

    impl_benchmark_test_suite!(MeridianToken, crate::mock::new_test_ext(), crate::mock::Test);
}
