//! Checked, all-or-nothing transfers of items between slot-based inventories.
//!
//! An inventory is a fixed-size sequence of slots, each holding zero or one item.
//! This crate moves a single item from a source inventory to a destination inventory,
//! choosing the item either by identity or by the index of the slot it is in, and placing
//! it either in whatever slot the destination picks or in one specific slot.
//!
//! Every transfer checks all of its preconditions before touching either inventory, so a
//! failed transfer has no effect at all. Items are never duplicated, never lost, and never
//! placed into an occupied slot.
//!
//! ## Structure
//!
//! * [`inv`] defines the [`Container`](inv::Container) contract that inventories must
//!   implement, and a reference implementation, [`Inventory`](inv::Inventory).
//! * [`transfer`] contains the four transfer operations, their validators, and
//!   [`TransferError`](transfer::TransferError).
//!
//! ## Example
//!
//! ```
//! use inventory_transfer::inv::{Container, Inventory, Slot};
//! use inventory_transfer::transfer;
//!
//! let mut chest = Inventory::<&str>::from_slots(vec![Slot::from("apple"), Slot::from("pear")]);
//! let mut pack = Inventory::<&str>::new(2);
//!
//! let report = transfer::transfer_by_item(Some(&mut chest), Some(&mut pack), Some(&"apple"))?;
//!
//! assert_eq!(pack.get(report.destination_slot), Some(&Slot::from("apple")));
//! assert!(!chest.contains(&"apple"));
//! # Ok::<(), transfer::TransferError>(())
//! ```
//!
//! ## Crate features
//!
//! This crate, `inventory_transfer`, defines the following feature flags:
//!
//! * `std` (default):
//!   Links the standard library. Without it, the crate requires only `alloc`, and that
//!   only for [`Inventory`](inv::Inventory).
//! * `serde`:
//!   Enable [`serde`] serialization of [`Inventory`](inv::Inventory) and
//!   [`Slot`](inv::Slot).
//! * `arbitrary`: Adds implementations of the [`arbitrary::Arbitrary`] trait for
//!   fuzzing / property testing on types defined by this crate.
//!
//! ## Dependencies and global state
//!
//! `inventory_transfer` has no global state. However, it does write log messages using the
//! [`log`] crate and is therefore subject to that global configuration.
#![cfg_attr(
    not(feature = "arbitrary"),
    doc = "[`arbitrary::Arbitrary`]: https://docs.rs/arbitrary/1/arbitrary/trait.Arbitrary.html"
)]
#![cfg_attr(not(feature = "serde"), doc = "[`serde`]: https://docs.rs/serde/")]
#![no_std]
// Crate-specific lint settings. (General settings can be found in the workspace manifest.)
#![cfg_attr(
    not(any(test, feature = "arbitrary")),
    warn(clippy::std_instead_of_core, clippy::std_instead_of_alloc)
)]
// Lenience for tests.
#![cfg_attr(test,
    allow(clippy::redundant_clone), // prefer regularity over efficiency
)]

#[cfg(any(feature = "std", test))]
#[cfg_attr(test, macro_use)]
extern crate std;
#[allow(unused_imports)] // false positive unused macro_use
#[macro_use]
extern crate alloc;

pub mod inv;
pub mod transfer;
