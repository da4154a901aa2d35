//! The traits an inventory must implement to take part in transfers.

use crate::inv::Ix;

/// A single storage unit of a [`Container`], holding zero or one item.
pub trait SlotState {
    /// Returns whether this slot holds no item.
    fn is_empty(&self) -> bool;

    /// Returns whether this slot holds an item and therefore cannot accept another.
    ///
    /// For slots that hold at most one item this is always `!self.is_empty()`, which is
    /// the provided implementation.
    fn is_full(&self) -> bool {
        !self.is_empty()
    }
}

/// A fixed-size, indexed collection of slots that items can be taken from and added to.
///
/// The transfer operations in [`crate::transfer`] use only this interface, and they never
/// call a mutating method without first checking the matching precondition:
///
/// * [`take_item()`](Self::take_item) only after [`contains()`](Self::contains) returned
///   true for the same item,
/// * [`take_at()`](Self::take_at) only on a slot whose [`SlotState::is_empty()`] is false,
/// * [`add()`](Self::add) only when [`is_full()`](Self::is_full) is false,
/// * [`add_at()`](Self::add_at) only on a slot whose [`SlotState::is_full()`] is false.
///
/// An implementation that nevertheless fails one of those calls is violating this
/// contract; transfers detect that, undo their extraction, and report
/// [`TransferError::ContractViolation`](crate::transfer::TransferError::ContractViolation).
///
/// Note that [`is_full()`](Self::is_full) is a separate predicate, rather than being
/// derived from the slots, so that implementations with slots that are not usable by
/// [`add()`](Self::add) (reserved slots, for example) can say so.
pub trait Container {
    /// The kind of item stored. Items are located by equality.
    type Item: PartialEq;

    /// The slot type exposed by [`Self::slot()`].
    type Slot: SlotState;

    /// Returns the number of slots. This never changes during a transfer.
    fn size(&self) -> Ix;

    /// Returns the slot at `index`, or [`None`] if and only if `index >= self.size()`.
    fn slot(&self, index: Ix) -> Option<&Self::Slot>;

    /// Returns whether [`add()`](Self::add) has no open slot to use.
    fn is_full(&self) -> bool;

    /// Returns whether some slot holds an item equal to `item`.
    fn contains(&self, item: &Self::Item) -> bool;

    /// Removes an item equal to `item` and returns it together with the index of the slot
    /// it was removed from, or returns [`None`] if there is no such item.
    fn take_item(&mut self, item: &Self::Item) -> Option<(Ix, Self::Item)>;

    /// Removes and returns the item at `index`, or returns [`None`] if that slot is empty
    /// or does not exist.
    fn take_at(&mut self, index: Ix) -> Option<Self::Item>;

    /// Puts `item` into an open slot of the container's choosing and returns that slot's
    /// index. If there is no open slot, returns the item unchanged.
    fn add(&mut self, item: Self::Item) -> Result<Ix, Self::Item>;

    /// Puts `item` into the slot at `index`. If that slot is occupied or does not exist,
    /// returns the item unchanged.
    fn add_at(&mut self, item: Self::Item, index: Ix) -> Result<(), Self::Item>;
}
