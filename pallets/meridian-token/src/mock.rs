use crate as pallet_meridian_token;
use frame_support::{
    derive_impl, parameter_types,
    traits::{AsEnsureOriginWithArg, ConstU128, ConstU32, ConstU64},
    PalletId,
};
use sp_core::H256;
use sp_runtime::{
    traits::{BlakeTwo256, IdentityLookup},
    BuildStorage,
};

type Block = frame_system::mocking::MockBlock<Test>;

// Configure a mock runtime to test the pallet.
frame_support::construct_runtime!(
    pub enum Test {
        System: frame_system,
        Timestamp: pallet_timestamp,
        Balances: pallet_balances,
        Assets: pallet_assets,
        MeridianToken: pallet_meridian_token,
    }
);

#[derive_impl(frame_system::config_preludes::TestDefaultConfig)]
impl frame_system::Config for Test {
    type BaseCallFilter = frame_support::traits::Everything;
    type BlockWeights = ();
    type BlockLength = ();
    type DbWeight = ();
    type RuntimeOrigin = RuntimeOrigin;
    type RuntimeCall = RuntimeCall;
    type Nonce = u64;
    type Hash = H256;
    type Hashing = BlakeTwo256;
    type AccountId = u64;
    type Lookup = IdentityLookup<Self::AccountId>;
    type Block = Block;
    type RuntimeEvent = RuntimeEvent;
    type BlockHashCount = ConstU64<250>;
    type Version = ();
    type PalletInfo = PalletInfo;
    type AccountData = pallet_balances::AccountData<u128>;
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
    type MaxLocks = ();
    type MaxReserves = ();
    type ReserveIdentifier = [u8; 8];
    type Balance = u128;
    type DustRemoval = ();
    type RuntimeEvent = RuntimeEvent;
    type ExistentialDeposit = ConstU128<1>;
    type AccountStore = System;
    type WeightInfo = ();
    type FreezeIdentifier = ();
    type MaxFreezes = ();
    type RuntimeHoldReason = ();
    type RuntimeFreezeReason = ();
    type DoneSlashHandler = ();
}

impl pallet_assets::Config for Test {
    type RuntimeEvent = RuntimeEvent;
    type Balance = u128;
    type AssetId = u32;
    type AssetIdParameter = u32;
    type Currency = Balances;
    type CreateOrigin = AsEnsureOriginWithArg<frame_system::EnsureSigned<Self::AccountId>>;
    type ForceOrigin = frame_system::EnsureRoot<Self::AccountId>;
    type AssetDeposit = ConstU128<1>;
    type AssetAccountDeposit = ConstU128<1>;
    type MetadataDepositBase = ConstU128<1>;
    type MetadataDepositPerByte = ConstU128<1>;
    type ApprovalDeposit = ConstU128<1>;
    type StringLimit = ConstU32<50>;
    type Freezer = ();
    type Extra = ();
    type CallbackHandle = ();
    type WeightInfo = ();
    type RemoveItemsLimit = ConstU32<5>;
    type Holder = ();
    #[cfg(feature = "runtime-benchmarks")]
    type BenchmarkHelper = AssetsBenchmarkHelper;
}

#[cfg(feature = "runtime-benchmarks")]
pub struct AssetsBenchmarkHelper;

#[cfg(feature = "runtime-benchmarks")]
impl pallet_assets::BenchmarkHelper<u32, ()> for AssetsBenchmarkHelper {
    fn create_asset_id_parameter(id: u32) -> u32 {
        id
    }
    fn create_reserve_id_parameter(_id: u32) -> () {}
}

parameter_types! {
    pub const AdminAccount: u64 = 1;
    pub const TokenPalletId: PalletId = PalletId(*b"mrd/tokn");
}

pub struct EnsureAdmin;
impl frame_support::traits::EnsureOrigin<RuntimeOrigin> for EnsureAdmin {
    type Success = u64;

    fn try_origin(o: RuntimeOrigin) -> Result<Self::Success, RuntimeOrigin> {
        match o.clone().into() {
            Ok(frame_system::RawOrigin::Signed(account)) if account == AdminAccount::get() => {
                Ok(account)
            }
            _ => Err(o),
        }
    }

    #[cfg(feature = "runtime-benchmarks")]
    fn try_successful_origin() -> Result<RuntimeOrigin, ()> {
        Ok(RuntimeOrigin::signed(AdminAccount::get()))
    }
}

impl pallet_meridian_token::Config for Test {
    type AdminOrigin = EnsureAdmin;
    type Time = Timestamp;
    type NativeCurrency = Balances;
    type Assets = Assets;
    type PalletId = TokenPalletId;
    #[cfg(feature = "runtime-benchmarks")]
    type BenchmarkHelper = TokenBenchmarkHelper;
}

#[cfg(feature = "runtime-benchmarks")]
pub struct TokenBenchmarkHelper;

#[cfg(feature = "runtime-benchmarks")]
impl pallet_meridian_token::BenchmarkHelper<u64> for TokenBenchmarkHelper {
    fn advance_to(unix_secs: u64) {
        Timestamp::set_timestamp(unix_secs * 1_000);
    }

    fn endow_asset(asset: u32, who: &u64, amount: u128) {
        use frame_support::traits::fungibles::{Create, Mutate};
        <Assets as Create<u64>>::create(asset, AdminAccount::get(), true, 1).unwrap();
        <Assets as Mutate<u64>>::mint_into(asset, who, amount).unwrap();
    }
}

// Build genesis storage according to the mock runtime.
//
// Account 1 is the admin origin and genesis beneficiary (so it carries the
// minter and bridge roles too), 4 is a plain minter, 5 is a plain bridge,
// 2 and 3 are ordinary holders.
pub fn new_test_ext() -> sp_io::TestExternalities {
    let mut t = frame_system::GenesisConfig::<Test>::default().build_storage().unwrap();

    pallet_balances::GenesisConfig::<Test> {
        balances: vec![(AdminAccount::get(), 1_000_000_000), (2, 1_000_000)],
        dev_accounts: None,
    }
    .assimilate_storage(&mut t)
    .unwrap();

    pallet_meridian_token::GenesisConfig::<Test> {
        token_name: b"Meridian".to_vec(),
        token_symbol: b"MRD".to_vec(),
        beneficiary: Some(AdminAccount::get()),
        minters: vec![4],
        bridges: vec![5],
    }
    .assimilate_storage(&mut t)
    .unwrap();

    t.into()
}
