#![cfg_attr(not(feature = "std"), no_std)]
// Allow deprecated weight constants for MVP (will be replaced by benchmarks)
#![allow(deprecated)]

use frame_support::{
    dispatch::DispatchResult,
    ensure,
    pallet_prelude::*,
    traits::{
        fungible::{Inspect as NativeInspect, Mutate as NativeMutate},
        fungibles::{Inspect, Mutate},
        tokens::Preservation,
        EnsureOrigin, UnixTime,
    },
    PalletId,
};
use frame_system::{ensure_signed, pallet_prelude::*};
use sp_runtime::traits::{AccountIdConversion, TrailingZeroInput};
use sp_std::prelude::*;

pub use pallet::*;

pub mod migrations;

#[cfg(test)]
mod mock;


#[cfg(feature = "runtime-benchmarks")]
mod benchmarking;

/// The current storage version.
const STORAGE_VERSION: StorageVersion = StorageVersion::new(1);

/// Display decimals. Fixed; one token is `10^18` base units.
pub const DECIMALS: u8 = 18;

/// One whole token in base units.
pub const UNIT: u128 = 1_000_000_000_000_000_000;

/// Supply credited to the beneficiary at genesis: 1B tokens.
pub const INITIAL_SUPPLY: u128 = 1_000_000_000 * UNIT;

/// Size of a single scheduled tranche: 1B tokens.
pub const TRANCHE_AMOUNT: u128 = 1_000_000_000 * UNIT;

/// Hard supply ceiling across every mint path: 10B tokens.
/// `INITIAL_SUPPLY + 9 * TRANCHE_AMOUNT == MAX_SUPPLY`, so a fully executed
/// schedule with no bridge activity lands exactly on the cap.
pub const MAX_SUPPLY: u128 = 10_000_000_000 * UNIT;

/// Tranche unlock times: 00:00:00 UTC, Sep 30 of 2030 through 2070 at
/// five-year intervals. A tranche at index `i` becomes mintable once block
/// time reaches `MINT_SCHEDULE[i]` and all earlier tranches have executed.
pub const MINT_SCHEDULE: [u64; 9] = [
    1_916_956_800, // 2030
    2_074_723_200, // 2035
    2_232_576_000, // 2040
    2_390_342_400, // 2045
    2_548_108_800, // 2050
    2_705_875_200, // 2055
    2_863_728_000, // 2060
    3_021_494_400, // 2065
    3_179_260_800, // 2070
];

#[frame_support::pallet]
pub mod pallet {
    use super::*;

    #[pallet::config]
    pub trait Config: frame_system::Config {
        /// Origin holding the owner privilege: emergency control, role
        /// administration, asset rescue, beneficiary rotation.
        type AdminOrigin: EnsureOrigin<Self::RuntimeOrigin>;

        /// On-chain clock, unix seconds. Tranche unlocks compare against it.
        type Time: UnixTime;

        /// The chain's native currency. Only touched by the rescue path; the
        /// token ledger itself lives in this pallet's storage.
        type NativeCurrency: NativeInspect<Self::AccountId, Balance = u128>
            + NativeMutate<Self::AccountId>;

        /// Foreign fungibles incidentally held by the pallet account,
        /// recoverable through the rescue path.
        type Assets: Inspect<Self::AccountId, AssetId = u32, Balance = u128>
            + Mutate<Self::AccountId>;

        /// Derives the sovereign account that holds rescuable assets and
        /// accepts incoming native-currency deposits.
        #[pallet::constant]
        type PalletId: Get<PalletId>;

        /// Clock and asset setup hooks for benchmarks.
        #[cfg(feature = "runtime-benchmarks")]
        type BenchmarkHelper: BenchmarkHelper<Self::AccountId>;
    }

    #[pallet::pallet]
    #[pallet::storage_version(STORAGE_VERSION)]
    pub struct Pallet<T>(_);

    /// Token name (e.g., "Meridian")
    #[pallet::storage]
    #[pallet::getter(fn token_name)]
    pub type TokenName<T> = StorageValue<_, BoundedVec<u8, ConstU32<64>>, ValueQuery>;

    /// Token symbol (e.g., "MRD")
    #[pallet::storage]
    #[pallet::getter(fn token_symbol)]
    pub type TokenSymbol<T> = StorageValue<_, BoundedVec<u8, ConstU32<16>>, ValueQuery>;

    /// Total token supply. Never exceeds `MAX_SUPPLY`.
    #[pallet::storage]
    #[pallet::getter(fn total_supply)]
    pub type TotalSupply<T> = StorageValue<_, u128, ValueQuery>;

    /// Account balances
    #[pallet::storage]
    #[pallet::getter(fn balance_of)]
    pub type Balances<T: Config> = StorageMap<_, Blake2_128Concat, T::AccountId, u128, ValueQuery>;

    /// Spending allowances: (owner, spender) -> amount
    #[pallet::storage]
    #[pallet::getter(fn allowance)]
    pub type Allowances<T: Config> = StorageDoubleMap<
        _,
        Blake2_128Concat,
        T::AccountId,
        Blake2_128Concat,
        T::AccountId,
        u128,
        ValueQuery,
    >;

    /// Accounts holding the minter role (may execute scheduled tranches)
    #[pallet::storage]
    #[pallet::getter(fn is_minter)]
    pub type Minters<T: Config> = StorageMap<_, Blake2_128Concat, T::AccountId, bool, ValueQuery>;

    /// Accounts holding the bridge role (may mint/burn outside the schedule)
    #[pallet::storage]
    #[pallet::getter(fn is_bridge)]
    pub type Bridges<T: Config> = StorageMap<_, Blake2_128Concat, T::AccountId, bool, ValueQuery>;

    /// Emergency circuit breaker. While set, every balance-mutating path fails.
    #[pallet::storage]
    #[pallet::getter(fn is_halted)]
    pub type Halted<T> = StorageValue<_, bool, ValueQuery>;

    /// Index of the next unexecuted tranche in `MINT_SCHEDULE`. Forward-only.
    #[pallet::storage]
    #[pallet::getter(fn schedule_cursor)]
    pub type ScheduleCursor<T> = StorageValue<_, u32, ValueQuery>;

    /// Recipient of the initial supply and of every scheduled tranche.
    #[pallet::storage]
    #[pallet::getter(fn beneficiary)]
    pub type Beneficiary<T: Config> = StorageValue<_, T::AccountId, OptionQuery>;

    #[pallet::event]
    #[pallet::generate_deposit(pub(super) fn deposit_event)]
    pub enum Event<T: Config> {
        /// Tokens moved between two accounts
        Transferred { from: T::AccountId, to: T::AccountId, amount: u128 },
        /// Allowance set by `owner` for `spender`
        Approved { owner: T::AccountId, spender: T::AccountId, amount: u128 },
        /// A scheduled tranche was released to the beneficiary
        TrancheMinted { index: u32, to: T::AccountId, amount: u128, at: u64, supply: u128 },
        /// Tokens minted by a bridge account outside the schedule
        BridgeMinted { to: T::AccountId, amount: u128, by: T::AccountId },
        /// Tokens burned by a bridge account
        BridgeBurned { from: T::AccountId, amount: u128, by: T::AccountId },
        /// All balance-mutating operations disabled
        EmergencyStopped { at: u64 },
        /// Balance-mutating operations re-enabled
        EmergencyLifted { at: u64 },
        /// Minter role granted
        MinterGranted { account: T::AccountId },
        /// Minter role revoked
        MinterRevoked { account: T::AccountId },
        /// Bridge role granted
        BridgeGranted { account: T::AccountId },
        /// Bridge role revoked
        BridgeRevoked { account: T::AccountId },
        /// A foreign asset held by the pallet account was swept out
        AssetRescued { asset: u32, to: T::AccountId, amount: u128 },
        /// Native currency held by the pallet account was swept out
        NativeRescued { to: T::AccountId, amount: u128 },
        /// Tranche recipient changed
        BeneficiaryChanged { old: Option<T::AccountId>, new: T::AccountId },
    }

    #[pallet::error]
    pub enum Error<T> {
        /// The emergency flag is set
        Halted,
        /// Caller does not hold the minter role
        NotMinter,
        /// Caller does not hold the bridge role
        NotBridge,
        /// All scheduled tranches have been executed
        ScheduleExhausted,
        /// Block time has not reached the next tranche's unlock timestamp
        TrancheNotUnlocked,
        /// Minting would push total supply past `MAX_SUPPLY`
        ExceedsMaxSupply,
        InsufficientBalance,
        InsufficientAllowance,
        /// The all-zero account is not a valid counterparty
        NullAddress,
        /// Full-balance rescue of an empty holding
        NothingToRescue,
        /// No beneficiary configured to receive the tranche
        NoBeneficiary,
        Overflow,
    }

    #[pallet::call]
    impl<T: Config> Pallet<T> {
        #[pallet::call_index(0)]
        #[pallet::weight(10_000)]
        pub fn transfer(origin: OriginFor<T>, to: T::AccountId, amount: u128) -> DispatchResult {
            let sender = ensure_signed(origin)?;
            Self::settle_transfer(&sender, &to, amount)?;
            Self::deposit_event(Event::Transferred { from: sender, to, amount });
            Ok(())
        }

        /// Set `spender`'s allowance over the caller's balance. Not a balance
        /// mutation, so it stays live during an emergency stop.
        #[pallet::call_index(1)]
        #[pallet::weight(10_000)]
        pub fn approve(
            origin: OriginFor<T>,
            spender: T::AccountId,
            amount: u128,
        ) -> DispatchResult {
            let owner = ensure_signed(origin)?;
            Allowances::<T>::insert(&owner, &spender, amount);
            Self::deposit_event(Event::Approved { owner, spender, amount });
            Ok(())
        }

        /// Spend part of `from`'s balance under a previously set allowance.
        #[pallet::call_index(2)]
        #[pallet::weight(10_000)]
        pub fn transfer_from(
            origin: OriginFor<T>,
            from: T::AccountId,
            to: T::AccountId,
            amount: u128,
        ) -> DispatchResult {
            let spender = ensure_signed(origin)?;
            let remaining = Allowances::<T>::get(&from, &spender)
                .checked_sub(amount)
                .ok_or(Error::<T>::InsufficientAllowance)?;
            Self::settle_transfer(&from, &to, amount)?;
            Allowances::<T>::insert(&from, &spender, remaining);
            Self::deposit_event(Event::Transferred { from, to, amount });
            Ok(())
        }

        /// Release the next unexecuted tranche to the beneficiary. One tranche
        /// per call; catching up after several unlock times have passed takes
        /// one call per tranche.
        #[pallet::call_index(3)]
        #[pallet::weight(10_000)]
        pub fn execute_scheduled_mint(origin: OriginFor<T>) -> DispatchResult {
            let who = ensure_signed(origin)?;
            ensure!(Minters::<T>::get(&who), Error::<T>::NotMinter);
            Self::ensure_live()?;

            let cursor = ScheduleCursor::<T>::get();
            ensure!((cursor as usize) < MINT_SCHEDULE.len(), Error::<T>::ScheduleExhausted);
            let now = Self::now();
            ensure!(now >= MINT_SCHEDULE[cursor as usize], Error::<T>::TrancheNotUnlocked);

            let to = Beneficiary::<T>::get().ok_or(Error::<T>::NoBeneficiary)?;
            Self::settle_mint(&to, TRANCHE_AMOUNT)?;
            ScheduleCursor::<T>::put(cursor + 1);

            Self::deposit_event(Event::TrancheMinted {
                index: cursor,
                to,
                amount: TRANCHE_AMOUNT,
                at: now,
                supply: TotalSupply::<T>::get(),
            });
            Ok(())
        }

        /// Mint outside the schedule, mirroring an inbound cross-chain
        /// transfer. Still bounded by `MAX_SUPPLY`.
        #[pallet::call_index(4)]
        #[pallet::weight(10_000)]
        pub fn bridge_mint(
            origin: OriginFor<T>,
            to: T::AccountId,
            amount: u128,
        ) -> DispatchResult {
            let by = ensure_signed(origin)?;
            ensure!(Bridges::<T>::get(&by), Error::<T>::NotBridge);
            Self::ensure_live()?;
            ensure!(to != Self::null_account(), Error::<T>::NullAddress);
            Self::settle_mint(&to, amount)?;
            Self::deposit_event(Event::BridgeMinted { to, amount, by });
            Ok(())
        }

        /// Burn from `from`, mirroring an outbound cross-chain transfer.
        #[pallet::call_index(5)]
        #[pallet::weight(10_000)]
        pub fn bridge_burn(
            origin: OriginFor<T>,
            from: T::AccountId,
            amount: u128,
        ) -> DispatchResult {
            let by = ensure_signed(origin)?;
            ensure!(Bridges::<T>::get(&by), Error::<T>::NotBridge);
            Self::ensure_live()?;
            ensure!(from != Self::null_account(), Error::<T>::NullAddress);
            Self::settle_burn(&from, amount)?;
            Self::deposit_event(Event::BridgeBurned { from, amount, by });
            Ok(())
        }

        /// Set the emergency flag. Succeeds (and emits) even when already set.
        #[pallet::call_index(6)]
        #[pallet::weight(10_000)]
        pub fn emergency_stop(origin: OriginFor<T>) -> DispatchResult {
            T::AdminOrigin::ensure_origin(origin)?;
            Halted::<T>::put(true);
            Self::deposit_event(Event::EmergencyStopped { at: Self::now() });
            Ok(())
        }

        /// Clear the emergency flag. Succeeds (and emits) even when not set.
        #[pallet::call_index(7)]
        #[pallet::weight(10_000)]
        pub fn lift_emergency_stop(origin: OriginFor<T>) -> DispatchResult {
            T::AdminOrigin::ensure_origin(origin)?;
            Halted::<T>::put(false);
            Self::deposit_event(Event::EmergencyLifted { at: Self::now() });
            Ok(())
        }

        #[pallet::call_index(8)]
        #[pallet::weight(10_000)]
        pub fn grant_minter(origin: OriginFor<T>, account: T::AccountId) -> DispatchResult {
            T::AdminOrigin::ensure_origin(origin)?;
            Minters::<T>::insert(&account, true);
            Self::deposit_event(Event::MinterGranted { account });
            Ok(())
        }

        #[pallet::call_index(9)]
        #[pallet::weight(10_000)]
        pub fn revoke_minter(origin: OriginFor<T>, account: T::AccountId) -> DispatchResult {
            T::AdminOrigin::ensure_origin(origin)?;
            Minters::<T>::remove(&account);
            Self::deposit_event(Event::MinterRevoked { account });
            Ok(())
        }

        #[pallet::call_index(10)]
        #[pallet::weight(10_000)]
        pub fn grant_bridge(origin: OriginFor<T>, account: T::AccountId) -> DispatchResult {
            T::AdminOrigin::ensure_origin(origin)?;
            Bridges::<T>::insert(&account, true);
            Self::deposit_event(Event::BridgeGranted { account });
            Ok(())
        }

        #[pallet::call_index(11)]
        #[pallet::weight(10_000)]
        pub fn revoke_bridge(origin: OriginFor<T>, account: T::AccountId) -> DispatchResult {
            T::AdminOrigin::ensure_origin(origin)?;
            Bridges::<T>::remove(&account);
            Self::deposit_event(Event::BridgeRevoked { account });
            Ok(())
        }

        /// Sweep `amount` of a foreign asset held by the pallet account to
        /// `to`. Operates on incidental holdings only; the token's own ledger
        /// and cap are untouched.
        #[pallet::call_index(12)]
        #[pallet::weight(10_000)]
        pub fn rescue_asset(
            origin: OriginFor<T>,
            asset: u32,
            to: T::AccountId,
            amount: u128,
        ) -> DispatchResult {
            T::AdminOrigin::ensure_origin(origin)?;
            ensure!(to != Self::null_account(), Error::<T>::NullAddress);
            T::Assets::transfer(asset, &Self::account_id(), &to, amount, Preservation::Expendable)?;
            Self::deposit_event(Event::AssetRescued { asset, to, amount });
            Ok(())
        }

        /// Sweep the full held balance of a foreign asset.
        #[pallet::call_index(13)]
        #[pallet::weight(10_000)]
        pub fn rescue_all_asset(
            origin: OriginFor<T>,
            asset: u32,
            to: T::AccountId,
        ) -> DispatchResult {
            T::AdminOrigin::ensure_origin(origin)?;
            ensure!(to != Self::null_account(), Error::<T>::NullAddress);
            let held = T::Assets::balance(asset, &Self::account_id());
            ensure!(held > 0, Error::<T>::NothingToRescue);
            T::Assets::transfer(asset, &Self::account_id(), &to, held, Preservation::Expendable)?;
            Self::deposit_event(Event::AssetRescued { asset, to, amount: held });
            Ok(())
        }

        /// Sweep `amount` of native currency held by the pallet account.
        #[pallet::call_index(14)]
        #[pallet::weight(10_000)]
        pub fn rescue_native(
            origin: OriginFor<T>,
            to: T::AccountId,
            amount: u128,
        ) -> DispatchResult {
            T::AdminOrigin::ensure_origin(origin)?;
            ensure!(to != Self::null_account(), Error::<T>::NullAddress);
            T::NativeCurrency::transfer(
                &Self::account_id(),
                &to,
                amount,
                Preservation::Expendable,
            )?;
            Self::deposit_event(Event::NativeRescued { to, amount });
            Ok(())
        }

        /// Sweep the full native-currency balance of the pallet account.
        #[pallet::call_index(15)]
        #[pallet::weight(10_000)]
        pub fn rescue_all_native(origin: OriginFor<T>, to: T::AccountId) -> DispatchResult {
            T::AdminOrigin::ensure_origin(origin)?;
            ensure!(to != Self::null_account(), Error::<T>::NullAddress);
            let held = T::NativeCurrency::balance(&Self::account_id());
            ensure!(held > 0, Error::<T>::NothingToRescue);
            T::NativeCurrency::transfer(&Self::account_id(), &to, held, Preservation::Expendable)?;
            Self::deposit_event(Event::NativeRescued { to, amount: held });
            Ok(())
        }

        /// Repoint the tranche recipient. Pending tranches go to the new
        /// beneficiary from the next execution onward.
        #[pallet::call_index(16)]
        #[pallet::weight(10_000)]
        pub fn set_beneficiary(origin: OriginFor<T>, who: T::AccountId) -> DispatchResult {
            T::AdminOrigin::ensure_origin(origin)?;
            let old = Beneficiary::<T>::get();
            Beneficiary::<T>::put(&who);
            Self::deposit_event(Event::BeneficiaryChanged { old, new: who });
            Ok(())
        }
    }

    impl<T: Config> Pallet<T> {
        /// The sovereign account holding rescuable assets and incoming
        /// native-currency deposits.
        pub fn account_id() -> T::AccountId {
            T::PalletId::get().into_account_truncating()
        }

        /// Display decimals of the token.
        pub fn decimals() -> u8 {
            DECIMALS
        }

        /// Count of tranches not yet executed.
        pub fn scheduled_mints_remaining() -> u32 {
            (MINT_SCHEDULE.len() as u32).saturating_sub(ScheduleCursor::<T>::get())
        }

        fn now() -> u64 {
            T::Time::now().as_secs()
        }

        fn null_account() -> T::AccountId {
            T::AccountId::decode(&mut TrailingZeroInput::zeroes())
                .expect("infinite length input; no invalid inputs for type; qed")
        }

        fn ensure_live() -> DispatchResult {
            ensure!(!Halted::<T>::get(), Error::<T>::Halted);
            Ok(())
        }

        // The three primitives below are the only writers of `Balances` and
        // `TotalSupply` outside genesis. The halt check at the top of each is
        // the whole circuit breaker: no mutating path bypasses it. All
        // validation happens before the first write.

        fn settle_transfer(from: &T::AccountId, to: &T::AccountId, amount: u128) -> DispatchResult {
            Self::ensure_live()?;
            ensure!(Balances::<T>::get(from) >= amount, Error::<T>::InsufficientBalance);
            if from != to {
                Balances::<T>::get(to).checked_add(amount).ok_or(Error::<T>::Overflow)?;
            }
            Balances::<T>::mutate(from, |bal| *bal -= amount);
            Balances::<T>::mutate(to, |bal| *bal += amount);
            Ok(())
        }

        fn settle_mint(to: &T::AccountId, amount: u128) -> DispatchResult {
            Self::ensure_live()?;
            let supply = TotalSupply::<T>::get().checked_add(amount).ok_or(Error::<T>::Overflow)?;
            ensure!(supply <= MAX_SUPPLY, Error::<T>::ExceedsMaxSupply);
            Balances::<T>::get(to).checked_add(amount).ok_or(Error::<T>::Overflow)?;
            TotalSupply::<T>::put(supply);
            Balances::<T>::mutate(to, |bal| *bal += amount);
            Ok(())
        }

        fn settle_burn(from: &T::AccountId, amount: u128) -> DispatchResult {
            Self::ensure_live()?;
            let balance = Balances::<T>::get(from);
            ensure!(balance >= amount, Error::<T>::InsufficientBalance);
            Balances::<T>::insert(from, balance - amount);
            TotalSupply::<T>::mutate(|supply| *supply -= amount);
            Ok(())
        }
    }

    /// Clock and asset setup hooks the benchmarks need from the runtime.
    #[cfg(feature = "runtime-benchmarks")]
    pub trait BenchmarkHelper<AccountId> {
        /// Move the `UnixTime` clock to `unix_secs`.
        fn advance_to(unix_secs: u64);
        /// Create `asset` and credit `amount` of it to `who`.
        fn endow_asset(asset: u32, who: &AccountId, amount: u128);
    }

    #[pallet::genesis_config]
    #[derive(frame_support::DefaultNoBound)]
    pub struct GenesisConfig<T: Config> {
        /// Token name
        pub token_name: Vec<u8>,
        /// Token symbol
        pub token_symbol: Vec<u8>,
        /// Receives `INITIAL_SUPPLY` and every tranche; granted the minter
        /// and bridge roles at genesis.
        pub beneficiary: Option<T::AccountId>,
        /// Additional accounts granted the minter role at genesis
        pub minters: Vec<T::AccountId>,
        /// Additional accounts granted the bridge role at genesis
        pub bridges: Vec<T::AccountId>,
    }

    #[pallet::genesis_build]
    impl<T: Config> BuildGenesisConfig for GenesisConfig<T> {
        fn build(&self) {
            let name: BoundedVec<u8, ConstU32<64>> =
                self.token_name.clone().try_into().expect("Token name too long (max 64 bytes)");
            TokenName::<T>::put(name);

            let symbol: BoundedVec<u8, ConstU32<16>> =
                self.token_symbol.clone().try_into().expect("Token symbol too long (max 16 bytes)");
            TokenSymbol::<T>::put(symbol);

            if let Some(ref beneficiary) = self.beneficiary {
                Beneficiary::<T>::put(beneficiary);
                Balances::<T>::insert(beneficiary, INITIAL_SUPPLY);
                TotalSupply::<T>::put(INITIAL_SUPPLY);
                Minters::<T>::insert(beneficiary, true);
                Bridges::<T>::insert(beneficiary, true);
            }

            for account in &self.minters {
                Minters::<T>::insert(account, true);
            }
            for account in &self.bridges {
                Bridges::<T>::insert(account, true);
            }
        }
    }
}
