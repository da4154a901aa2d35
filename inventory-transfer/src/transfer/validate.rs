//! Argument checks shared by all transfer operations.
//!
//! These have no side effects. Each returns its input in a more useful form when the check
//! passes, so that the operations cannot forget to apply them.

use crate::inv::{Container, Ix};
use crate::transfer::{Argument, TransferError};

/// Checks that both inventories were given.
///
/// Fails with [`TransferError::NullReference`], naming the source if both are absent.
pub fn arguments<'s, 'd, S, D>(
    source: Option<&'s mut S>,
    destination: Option<&'d mut D>,
) -> Result<(&'s mut S, &'d mut D), TransferError>
where
    S: ?Sized,
    D: ?Sized,
{
    let source = source.ok_or(TransferError::NullReference(Argument::Source))?;
    let destination = destination.ok_or(TransferError::NullReference(Argument::Destination))?;
    Ok((source, destination))
}

/// Checks that `inventory` was given and that `index` addresses one of its slots.
///
/// `which` says which argument `inventory` is, and is used only for error reporting.
///
/// Fails with [`TransferError::NullReference`] if `inventory` is absent, and
/// [`TransferError::OutOfRange`] if `index < 0 || index >= inventory.size()`.
pub fn index<C>(inventory: Option<&C>, which: Argument, index: i32) -> Result<Ix, TransferError>
where
    C: Container + ?Sized,
{
    let inventory = inventory.ok_or(TransferError::NullReference(which))?;
    let size = inventory.size();
    match Ix::try_from(index) {
        Ok(ix) if ix < size => Ok(ix),
        _ => Err(TransferError::OutOfRange {
            inventory: which,
            index,
            size,
        }),
    }
}

/// Fetches a slot whose index already passed [`index()`].
///
/// A container that has no slot at an index below its own size is reported the same way as
/// an out-of-range request, since there is no slot to act on either way.
pub(crate) fn slot<C>(inventory: &C, which: Argument, index: Ix) -> Result<&C::Slot, TransferError>
where
    C: Container + ?Sized,
{
    inventory.slot(index).ok_or(TransferError::OutOfRange {
        inventory: which,
        index: i32::from(index),
        size: inventory.size(),
    })
}
