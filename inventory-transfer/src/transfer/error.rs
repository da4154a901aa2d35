use crate::inv::Ix;

/// Ways that a transfer can fail.
///
/// Every failure is detected before either inventory is modified, so a transfer which
/// returns an error has had no effect. When several preconditions are unmet, the one
/// reported is the first in this order: absent arguments, then out-of-range indices, then
/// inventory state.
#[derive(Clone, Debug, Eq, Hash, PartialEq, displaydoc::Display)]
#[non_exhaustive]
pub enum TransferError {
    /// A required argument was [`None`].
    #[displaydoc("no {0} was given")]
    NullReference(Argument),

    /// A slot index was negative, or not less than the size of its inventory.
    #[displaydoc("index {index} is out of range for the {inventory} of size {size}")]
    #[non_exhaustive]
    OutOfRange {
        /// Which inventory the index was meant for.
        inventory: Argument,
        /// The index as requested.
        index: i32,
        /// The size of the inventory it was checked against.
        size: Ix,
    },

    /// The inventories are not in a state that permits the transfer.
    #[displaydoc("cannot transfer: {0}")]
    InvalidState(InvalidState),

    /// An inventory failed an operation whose preconditions it had reported as met.
    /// See [`Container`](crate::inv::Container) for the contract.
    #[displaydoc("inventory misbehaved during transfer: {0}")]
    ContractViolation(ContractViolation),
}

impl TransferError {
    /// Returns the general category of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            TransferError::NullReference(_) => ErrorKind::NullReference,
            TransferError::OutOfRange { .. } => ErrorKind::OutOfRange,
            TransferError::InvalidState(_) => ErrorKind::InvalidState,
            TransferError::ContractViolation(_) => ErrorKind::ContractViolation,
        }
    }
}

impl core::error::Error for TransferError {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            TransferError::NullReference(_) => None,
            TransferError::OutOfRange { .. } => None,
            TransferError::InvalidState(e) => Some(e),
            TransferError::ContractViolation(e) => Some(e),
        }
    }
}

impl From<InvalidState> for TransferError {
    fn from(value: InvalidState) -> Self {
        TransferError::InvalidState(value)
    }
}

impl From<ContractViolation> for TransferError {
    fn from(value: ContractViolation) -> Self {
        TransferError::ContractViolation(value)
    }
}

/// General category of a [`TransferError`].
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[non_exhaustive]
pub enum ErrorKind {
    /// See [`TransferError::NullReference`].
    NullReference,
    /// See [`TransferError::OutOfRange`].
    OutOfRange,
    /// See [`TransferError::InvalidState`].
    InvalidState,
    /// See [`TransferError::ContractViolation`].
    ContractViolation,
}

/// Names an argument of a transfer operation, for error reporting.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, displaydoc::Display)]
#[non_exhaustive]
pub enum Argument {
    /// source inventory
    Source,
    /// destination inventory
    Destination,
    /// item
    Item,
}

/// A precondition on the contents of the inventories that was not met.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, displaydoc::Display)]
#[non_exhaustive]
pub enum InvalidState {
    /// the source inventory does not contain the item
    SourceLacksItem,

    /// the source slot is empty
    SourceSlotEmpty,

    /// the destination inventory is full
    DestinationFull,

    /// the destination slot is full
    DestinationSlotFull,
}

/// How an inventory failed to honor the [`Container`](crate::inv::Container) contract.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, displaydoc::Display)]
#[non_exhaustive]
pub enum ContractViolation {
    /// the source inventory did not give up an item it reported having
    ExtractFailed,

    /// the destination inventory refused an item it reported having room for
    InsertRejected,
}

impl core::error::Error for InvalidState {}
impl core::error::Error for ContractViolation {}
