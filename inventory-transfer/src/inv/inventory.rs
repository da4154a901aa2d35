//! [`Inventory`] for storing items.

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt;

use crate::inv::{Container, Ix, SlotState};

/// A fixed-size collection of [`Slot`]s, each holding zero or one item.
///
/// This is the reference implementation of [`Container`]. Its
/// [`add()`](Container::add) uses the lowest-indexed empty slot, and its
/// [`take_item()`](Container::take_item) takes the lowest-indexed matching item.
///
/// With the `serde` feature, an `Inventory` serializes as a sequence of its slots.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Inventory<T> {
    // Boxed slice, not Vec: the length is fixed at construction and must stay <= Ix::MAX.
    pub(crate) slots: Box<[Slot<T>]>,
}

impl<T> Inventory<T> {
    /// Construct an [`Inventory`] with the specified number of slots, all empty.
    pub fn new(size: Ix) -> Self {
        Inventory {
            slots: (0..size).map(|_| Slot::Empty).collect(),
        }
    }

    /// Construct an [`Inventory`] with the given slots.
    ///
    /// Panics if there are more than [`Ix::MAX`] slots; use [`Inventory::try_from`] to
    /// handle that case instead.
    #[track_caller]
    pub fn from_slots(items: impl Into<Box<[Slot<T>]>>) -> Self {
        let slots = items.into();
        Ix::try_from(slots.len())
            .expect("input has more slots than an inventory is allowed to have");
        Inventory { slots }
    }

    /// Returns whether all slots in this inventory are empty.
    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(|slot| matches!(slot, Slot::Empty))
    }

    /// Returns a view of all slots in this inventory.
    pub fn slots(&self) -> &[Slot<T>] {
        &self.slots
    }

    /// Returns the number of slots in the inventory.
    ///
    /// This is equal in value to `self.slots().len()`.
    pub fn size(&self) -> Ix {
        // cannot overflow because we checked on construction
        self.slots.len() as Ix
    }

    /// Returns the slot in this inventory with the given index.
    ///
    /// Returns `None` if, and only if, `slot_index >= self.size()`.
    pub fn get(&self, slot_index: Ix) -> Option<&Slot<T>> {
        self.slots.get(usize::from(slot_index))
    }

    /// Returns the number of slots which hold an item.
    pub fn count(&self) -> Ix {
        // cannot overflow because there are no more than Ix::MAX slots
        self.slots.iter().filter(|slot| slot.is_full()).count() as Ix
    }

    fn first_empty_slot(&self) -> Option<Ix> {
        self.slots
            .iter()
            .zip(0..)
            .find_map(|(slot, index)| slot.is_empty().then_some(index))
    }
}

impl<T> TryFrom<Vec<Slot<T>>> for Inventory<T> {
    type Error = TooManySlots;

    fn try_from(slots: Vec<Slot<T>>) -> Result<Self, Self::Error> {
        if Ix::try_from(slots.len()).is_err() {
            return Err(TooManySlots { len: slots.len() });
        }
        Ok(Inventory {
            slots: slots.into_boxed_slice(),
        })
    }
}

impl<T: PartialEq> Container for Inventory<T> {
    type Item = T;
    type Slot = Slot<T>;

    fn size(&self) -> Ix {
        Inventory::size(self)
    }

    fn slot(&self, index: Ix) -> Option<&Slot<T>> {
        self.get(index)
    }

    fn is_full(&self) -> bool {
        self.slots.iter().all(|slot| slot.is_full())
    }

    fn contains(&self, item: &T) -> bool {
        self.slots.iter().any(|slot| slot.item() == Some(item))
    }

    fn take_item(&mut self, item: &T) -> Option<(Ix, T)> {
        let (slot, index) = self
            .slots
            .iter_mut()
            .zip(0..)
            .find(|(slot, _)| slot.item() == Some(item))?;
        Some((index, slot.take()?))
    }

    fn take_at(&mut self, index: Ix) -> Option<T> {
        self.slots.get_mut(usize::from(index))?.take()
    }

    fn add(&mut self, item: T) -> Result<Ix, T> {
        let Some(index) = self.first_empty_slot() else {
            return Err(item);
        };
        self.slots[usize::from(index)] = Slot::Occupied(item);
        Ok(index)
    }

    fn add_at(&mut self, item: T, index: Ix) -> Result<(), T> {
        match self.slots.get_mut(usize::from(index)) {
            Some(slot @ Slot::Empty) => {
                *slot = Slot::Occupied(item);
                Ok(())
            }
            Some(Slot::Occupied(_)) | None => Err(item),
        }
    }
}

#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for Inventory<T> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.slots.serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de, T: serde::Deserialize<'de>> serde::Deserialize<'de> for Inventory<T> {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let slots = <Vec<Slot<T>> as serde::Deserialize<'de>>::deserialize(deserializer)?;
        Inventory::try_from(slots).map_err(serde::de::Error::custom)
    }
}

#[cfg(feature = "arbitrary")]
#[mutants::skip]
impl<'a, T: arbitrary::Arbitrary<'a>> arbitrary::Arbitrary<'a> for Inventory<T> {
    fn arbitrary(u: &mut arbitrary::Unstructured<'a>) -> arbitrary::Result<Self> {
        let len = u.arbitrary_len::<Slot<T>>()?.min(usize::from(Ix::MAX));
        let slots = (0..len)
            .map(|_| u.arbitrary())
            .collect::<arbitrary::Result<Box<[Slot<T>]>>>()?;
        Ok(Inventory { slots })
    }
}

/// Error returned when constructing an [`Inventory`] with more than [`Ix::MAX`] slots.
#[derive(Clone, Copy, Debug, Eq, PartialEq, displaydoc::Display)]
#[displaydoc("an inventory may have at most 65535 slots, but {len} were given")]
#[non_exhaustive]
pub struct TooManySlots {
    /// Number of slots that were given.
    pub len: usize,
}

impl core::error::Error for TooManySlots {}

/// The direct child of [`Inventory`]; a container for zero or one item.
#[derive(Clone, Default, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[non_exhaustive]
pub enum Slot<T> {
    /// Slot contains nothing.
    #[default]
    Empty,
    /// Slot contains the given item.
    Occupied(T),
}

impl<T> Slot<T> {
    /// Returns the item in this slot, if any.
    pub fn item(&self) -> Option<&T> {
        match self {
            Slot::Empty => None,
            Slot::Occupied(item) => Some(item),
        }
    }

    /// Removes the item from this slot, leaving it [`Slot::Empty`].
    pub fn take(&mut self) -> Option<T> {
        match core::mem::replace(self, Slot::Empty) {
            Slot::Empty => None,
            Slot::Occupied(item) => Some(item),
        }
    }
}

impl<T> SlotState for Slot<T> {
    fn is_empty(&self) -> bool {
        matches!(self, Slot::Empty)
    }
}

impl<T: fmt::Debug> fmt::Debug for Slot<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Empty"),
            Self::Occupied(item) => item.fmt(f), // pass through formatter options
        }
    }
}

impl<T> From<T> for Slot<T> {
    fn from(item: T) -> Self {
        Self::Occupied(item)
    }
}

impl<T> From<Option<T>> for Slot<T> {
    fn from(item: Option<T>) -> Self {
        match item {
            Some(item) => Self::Occupied(item),
            None => Self::Empty,
        }
    }
}
