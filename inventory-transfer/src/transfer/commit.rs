//! The mutating half of a transfer, run only after every check has passed.

use crate::inv::{Container, Ix};
use crate::transfer::{ContractViolation, TransferError, Transferred};

/// Where in the destination an item should go.
#[derive(Clone, Copy, Debug)]
pub(super) enum Placement {
    /// Any open slot, as chosen by [`Container::add()`].
    Any,
    /// Exactly this slot, via [`Container::add_at()`].
    At(Ix),
}

/// Reports that the source did not hand over the item that the checks said it had.
///
/// Nothing has been mutated at this point, so there is nothing to undo.
pub(super) fn extraction_failed(source_slot: Option<Ix>) -> TransferError {
    match source_slot {
        Some(index) => {
            log::warn!("source inventory reported an item in slot {index} but did not yield it");
        }
        None => log::warn!("source inventory reported containing an item but did not yield it"),
    }
    ContractViolation::ExtractFailed.into()
}

/// Puts `item`, just taken from `source_slot` of `source`, into `destination`.
///
/// If the destination refuses it despite the checks, the item goes back where it came from
/// and the transfer fails as if it had never started.
///
/// Panics if the source then refuses to take the item back: at that point neither
/// inventory will hold it and there is no way to report the loss that keeps it.
pub(super) fn place<S, D>(
    source: &mut S,
    source_slot: Ix,
    destination: &mut D,
    placement: Placement,
    item: S::Item,
) -> Result<Transferred, TransferError>
where
    S: Container + ?Sized,
    D: Container<Item = S::Item> + ?Sized,
{
    let inserted = match placement {
        Placement::Any => destination.add(item),
        Placement::At(index) => destination.add_at(item, index).map(|()| index),
    };

    match inserted {
        Ok(destination_slot) => {
            log::trace!(
                "moved item from source slot {source_slot} to destination slot {destination_slot}"
            );
            Ok(Transferred {
                source_slot,
                destination_slot,
            })
        }
        Err(refused) => {
            log::warn!(
                "destination inventory refused an item ({placement:?}); \
                returning it to source slot {source_slot}"
            );
            let restored = source.add_at(refused, source_slot);
            assert!(
                restored.is_ok(),
                "source inventory refused to take back an item into slot {source_slot}, \
                which it had just vacated"
            );
            Err(ContractViolation::InsertRejected.into())
        }
    }
}
