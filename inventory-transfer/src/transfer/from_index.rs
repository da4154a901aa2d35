use crate::inv::{Container, SlotState as _};
use crate::transfer::commit::{self, Placement};
use crate::transfer::{Argument, InvalidState, TransferError, Transferred, validate};

/// Moves the item in slot `source_index` of `source` into any open slot of `destination`.
///
/// The destination decides which slot to use; the returned [`Transferred`] says which.
///
/// # Errors
///
/// Checked in this order:
///
/// * [`TransferError::NullReference`] if `source` or `destination` is [`None`].
/// * [`TransferError::OutOfRange`] if `source_index` is not a slot of `source`.
/// * [`InvalidState::SourceSlotEmpty`] if that slot holds no item.
/// * [`InvalidState::DestinationFull`] if `destination` has no open slot.
pub fn transfer_from_index<S, D>(
    source: Option<&mut S>,
    source_index: i32,
    destination: Option<&mut D>,
) -> Result<Transferred, TransferError>
where
    S: Container + ?Sized,
    D: Container<Item = S::Item> + ?Sized,
{
    let (source, destination) = validate::arguments(source, destination)?;
    let source_index = validate::index(Some(&*source), Argument::Source, source_index)?;

    if validate::slot(&*source, Argument::Source, source_index)?.is_empty() {
        return Err(TransferError::InvalidState(InvalidState::SourceSlotEmpty));
    }
    if destination.is_full() {
        return Err(TransferError::InvalidState(InvalidState::DestinationFull));
    }

    let Some(taken) = source.take_at(source_index) else {
        return Err(commit::extraction_failed(Some(source_index)));
    };
    commit::place(source, source_index, destination, Placement::Any, taken)
}

/// Moves the item in slot `source_index` of `source` into slot `destination_index` of
/// `destination`.
///
/// # Errors
///
/// Checked in this order:
///
/// * [`TransferError::NullReference`] if `source` or `destination` is [`None`].
/// * [`TransferError::OutOfRange`] if `source_index` is not a slot of `source`, then
///   if `destination_index` is not a slot of `destination`.
/// * [`InvalidState::SourceSlotEmpty`] if the source slot holds no item.
/// * [`InvalidState::DestinationSlotFull`] if the destination slot already holds an item.
pub fn transfer_from_index_to_index<S, D>(
    source: Option<&mut S>,
    source_index: i32,
    destination: Option<&mut D>,
    destination_index: i32,
) -> Result<Transferred, TransferError>
where
    S: Container + ?Sized,
    D: Container<Item = S::Item> + ?Sized,
{
    let (source, destination) = validate::arguments(source, destination)?;
    let source_index = validate::index(Some(&*source), Argument::Source, source_index)?;
    let destination_index = validate::index(
        Some(&*destination),
        Argument::Destination,
        destination_index,
    )?;

    if validate::slot(&*source, Argument::Source, source_index)?.is_empty() {
        return Err(TransferError::InvalidState(InvalidState::SourceSlotEmpty));
    }
    if validate::slot(&*destination, Argument::Destination, destination_index)?.is_full() {
        return Err(TransferError::InvalidState(InvalidState::DestinationSlotFull));
    }

    let Some(taken) = source.take_at(source_index) else {
        return Err(commit::extraction_failed(Some(source_index)));
    };
    commit::place(
        source,
        source_index,
        destination,
        Placement::At(destination_index),
        taken,
    )
}
