//! Moving one item at a time between two [`Container`](crate::inv::Container)s.
//!
//! There are four operations, differing in how the item is chosen and where it goes:
//!
//! | | into any open slot | into a specific slot |
//! |-|-|-|
//! | **item chosen by equality** | [`transfer_by_item()`] | [`transfer_by_item_to_index()`] |
//! | **item chosen by slot index** | [`transfer_from_index()`] | [`transfer_from_index_to_index()`] |
//!
//! Each operation first runs all of its checks, in a fixed order (absent arguments, then
//! index ranges, then inventory state), and only then moves the item. Source and
//! destination may be different container types as long as they hold the same kind of item.
//!
//! Inventory arguments are `Option`s so that callers holding optional inventories can pass
//! them straight through and get a [`TransferError::NullReference`] instead of having to
//! check first.

use crate::inv::Ix;

mod by_item;
pub use by_item::*;

mod commit;

mod error;
pub use error::*;

mod from_index;
pub use from_index::*;

pub mod validate;

#[cfg(test)]
mod tester;
#[cfg(test)]
pub(crate) use tester::*;

/// Where a successful transfer took its item from and put it.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[non_exhaustive]
pub struct Transferred {
    /// Index of the source slot the item was taken from. That slot is now empty.
    pub source_slot: Ix,
    /// Index of the destination slot the item was put in.
    pub destination_slot: Ix,
}
