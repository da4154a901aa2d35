use crate::inv::{Container, SlotState as _};
use crate::transfer::commit::{self, Placement};
use crate::transfer::{Argument, InvalidState, TransferError, Transferred, validate};

/// Moves an item equal to `item` from `source` into any open slot of `destination`.
///
/// The destination decides which slot to use; the returned [`Transferred`] says which.
///
/// # Errors
///
/// Checked in this order:
///
/// * [`TransferError::NullReference`] if `source`, `destination`, or `item` is [`None`].
/// * [`InvalidState::SourceLacksItem`] if `source` holds no item equal to `item`.
/// * [`InvalidState::DestinationFull`] if `destination` has no open slot.
pub fn transfer_by_item<S, D>(
    source: Option<&mut S>,
    destination: Option<&mut D>,
    item: Option<&S::Item>,
) -> Result<Transferred, TransferError>
where
    S: Container + ?Sized,
    D: Container<Item = S::Item> + ?Sized,
{
    let (source, destination) = validate::arguments(source, destination)?;
    let item = item.ok_or(TransferError::NullReference(Argument::Item))?;

    if !source.contains(item) {
        return Err(TransferError::InvalidState(InvalidState::SourceLacksItem));
    }
    if destination.is_full() {
        return Err(TransferError::InvalidState(InvalidState::DestinationFull));
    }

    let Some((source_slot, taken)) = source.take_item(item) else {
        return Err(commit::extraction_failed(None));
    };
    commit::place(source, source_slot, destination, Placement::Any, taken)
}

/// Moves an item equal to `item` from `source` into the slot of `destination` at
/// `target_index`.
///
/// # Errors
///
/// Checked in this order:
///
/// * [`TransferError::NullReference`] if `source` or `destination` is [`None`].
/// * [`TransferError::OutOfRange`] if `target_index` is not a slot of `destination`.
/// * [`TransferError::NullReference`] if `item` is [`None`].
/// * [`InvalidState::SourceLacksItem`] if `source` holds no item equal to `item`.
/// * [`InvalidState::DestinationSlotFull`] if the target slot already holds an item.
pub fn transfer_by_item_to_index<S, D>(
    source: Option<&mut S>,
    item: Option<&S::Item>,
    destination: Option<&mut D>,
    target_index: i32,
) -> Result<Transferred, TransferError>
where
    S: Container + ?Sized,
    D: Container<Item = S::Item> + ?Sized,
{
    let (source, destination) = validate::arguments(source, destination)?;
    let target_index = validate::index(Some(&*destination), Argument::Destination, target_index)?;
    let item = item.ok_or(TransferError::NullReference(Argument::Item))?;

    if !source.contains(item) {
        return Err(TransferError::InvalidState(InvalidState::SourceLacksItem));
    }
    if validate::slot(&*destination, Argument::Destination, target_index)?.is_full() {
        return Err(TransferError::InvalidState(InvalidState::DestinationSlotFull));
    }

    let Some((source_slot, taken)) = source.take_item(item) else {
        return Err(commit::extraction_failed(None));
    };
    commit::place(
        source,
        source_slot,
        destination,
        Placement::At(target_index),
        taken,
    )
}
