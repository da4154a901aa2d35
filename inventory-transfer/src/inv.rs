//! Slot-based inventories: the [`Container`] contract that transfers operate on, and
//! [`Inventory`], a plain implementation of it.

mod container;
pub use container::*;
mod inventory;
pub use inventory::*;

/// Index/address of an inventory slot, or the maximum size of an inventory.
///
/// This is currently a type alias, but future versions may make it a struct.
/// It will always be convertible to [`usize`].
//---
// Design note: u16 keeps every valid index representable in the `i32` that callers use
// to request a slot, so the conversion in `transfer::validate::index` is lossless.
pub type Ix = u16;
