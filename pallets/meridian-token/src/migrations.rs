//! Storage migrations for pallet-meridian-token.
//!
//! Migrations are versioned against `STORAGE_VERSION` in `lib.rs` and run
//! exactly once each: bump the constant, add a `vN` module implementing
//! `OnRuntimeUpgrade`, wire it into the runtime `Executive` migration tuple,
//! and test it here. Never skip versions; always check the on-chain version
//! before touching storage so re-runs are harmless.

use frame_support::{pallet_prelude::*, traits::OnRuntimeUpgrade};
use sp_std::marker::PhantomData;

use crate::{Config, Pallet};

/// Migration to version 1 (initial release).
///
/// A no-op that stamps the storage version. It exists so the version check,
/// try-runtime hooks, and Executive wiring are exercised from day one; later
/// schema changes (say, widening the schedule table or splitting the role
/// maps) follow the same shape with real storage transformations inside.
pub mod v1 {
    use super::*;

    pub struct MigrateToV1<T>(PhantomData<T>);

    impl<T: Config> OnRuntimeUpgrade for MigrateToV1<T> {
        fn on_runtime_upgrade() -> Weight {
            let on_chain_version = Pallet::<T>::on_chain_storage_version();

            if on_chain_version < 1 {
                log::info!(
                    target: "pallet-meridian-token",
                    "Running migration v0 -> v1 (no-op for initial release)"
                );

                StorageVersion::new(1).put::<Pallet<T>>();

                // 1 read (version check) + 1 write (version update)
                T::DbWeight::get().reads_writes(1, 1)
            } else {
                log::info!(
                    target: "pallet-meridian-token",
                    "Storage already at v{on_chain_version:?}, skipping v1 migration"
                );

                T::DbWeight::get().reads(1)
            }
        }

        #[cfg(feature = "try-runtime")]
        fn pre_upgrade() -> Result<sp_std::vec::Vec<u8>, sp_runtime::TryRuntimeError> {
            let on_chain_version = Pallet::<T>::on_chain_storage_version();
            log::info!(
                target: "pallet-meridian-token",
                "Pre-upgrade: on-chain storage version is {:?}",
                on_chain_version
            );

            Ok(on_chain_version.encode())
        }

        #[cfg(feature = "try-runtime")]
        fn post_upgrade(state: sp_std::vec::Vec<u8>) -> Result<(), sp_runtime::TryRuntimeError> {
            let pre_version: u16 = Decode::decode(&mut &state[..])
                .map_err(|_| sp_runtime::TryRuntimeError::Other("Failed to decode pre-state"))?;

            let post_version = Pallet::<T>::on_chain_storage_version();

            if pre_version < 1 {
                frame_support::ensure!(
                    post_version >= 1,
                    sp_runtime::TryRuntimeError::Other("Migration to v1 did not complete")
                );
            }

            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::{new_test_ext, Test};
    use frame_support::traits::StorageVersion;

    #[test]
    fn migration_v1_from_v0_works() {
        new_test_ext().execute_with(|| {
            StorageVersion::new(0).put::<Pallet<Test>>();
            assert_eq!(Pallet::<Test>::on_chain_storage_version(), 0);

            let _weight = v1::MigrateToV1::<Test>::on_runtime_upgrade();

            assert_eq!(Pallet::<Test>::on_chain_storage_version(), 1);
        });
    }

    /// Safe to run twice; the second run only reads the version.
    #[test]
    fn migration_v1_idempotent() {
        new_test_ext().execute_with(|| {
            StorageVersion::new(1).put::<Pallet<Test>>();

            let _weight = v1::MigrateToV1::<Test>::on_runtime_upgrade();

            assert_eq!(Pallet::<Test>::on_chain_storage_version(), 1);
        });
    }

    /// A v1 migration encountering a future version leaves it alone.
    #[test]
    fn migration_v1_skipped_on_higher_version() {
        new_test_ext().execute_with(|| {
            StorageVersion::new(3).put::<Pallet<Test>>();

            let _weight = v1::MigrateToV1::<Test>::on_runtime_upgrade();

            assert_eq!(Pallet::<Test>::on_chain_storage_version(), 3);
        });
    }

    /// Migrations never touch the ledger itself.
    #[test]
    fn migration_v1_preserves_ledger_state() {
        new_test_ext().execute_with(|| {
            let supply_before = Pallet::<Test>::total_supply();
            StorageVersion::new(0).put::<Pallet<Test>>();

            v1::MigrateToV1::<Test>::on_runtime_upgrade();

            assert_eq!(Pallet::<Test>::total_supply(), supply_before);
            assert_eq!(Pallet::<Test>::schedule_cursor(), 0);
        });
    }
}
