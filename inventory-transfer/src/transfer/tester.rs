use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt::Debug;

use itertools::Itertools as _;

use crate::inv::{Container, Inventory, Ix, Slot};
use crate::transfer::{TransferError, Transferred};

type Operation<'a, T> =
    Box<dyn Fn(&mut Inventory<T>, &mut Inventory<T>) -> Result<Transferred, TransferError> + 'a>;

type TargetFactory<'a, T> = Box<dyn Fn() -> (Inventory<T>, Inventory<T>) + 'a>;

/// Tool for testing that transfer operations obey the rules:
///
/// * A successful transfer empties exactly the reported source slot, fills exactly the
///   reported destination slot with the item that was there, and changes nothing else.
/// * A failed transfer changes nothing, and failing again fails the same way.
///
/// This test utility follows the builder pattern: call methods to add test data, then
/// finish with [`Self::test`].
#[must_use]
pub(crate) struct TransferTester<'a, T> {
    operations: Vec<Operation<'a, T>>,
    target_factories: Vec<TargetFactory<'a, T>>,
}

impl<'a, T> TransferTester<'a, T>
where
    T: Clone + Debug + PartialEq + 'a,
{
    pub fn new() -> Self {
        Self {
            operations: Vec::new(),
            target_factories: Vec::new(),
        }
    }

    /// Add an operation to be checked against every target.
    ///
    /// It is given the source and destination inventory, in that order.
    pub fn operation<F>(mut self, operation: F) -> Self
    where
        F: Fn(&mut Inventory<T>, &mut Inventory<T>) -> Result<Transferred, TransferError> + 'a,
    {
        self.operations.push(Box::new(operation));
        self
    }

    /// Add a (source, destination) pair to apply the tested operations to.
    ///
    /// To avoid requiring the inventories to be shared between runs, a factory function is
    /// required here.
    pub fn target(mut self, factory: impl Fn() -> (Inventory<T>, Inventory<T>) + 'a) -> Self {
        self.target_factories.push(Box::new(factory));
        self
    }

    /// Executes the tests and panics on failure.
    ///
    /// Also panics if no combination succeeded or no combination failed, since that
    /// probably means the test data does not exercise what it was meant to.
    pub fn test(self) {
        assert!(!self.operations.is_empty());
        assert!(!self.target_factories.is_empty());
        let mut succeeded = 0usize;
        let mut failed = 0usize;

        for (op_index, operation) in self.operations.iter().enumerate() {
            for target_factory in self.target_factories.iter() {
                let (before_source, before_destination) = target_factory();
                let (mut source, mut destination) = target_factory();

                match operation(&mut source, &mut destination) {
                    Ok(report) => {
                        succeeded += 1;
                        if let Err(e) = check_success(
                            report,
                            (&before_source, &before_destination),
                            (&source, &destination),
                        ) {
                            panic!(
                                "Successful transfer broke a rule: {e}\n\
                                Operation: #{op_index}, reporting {report:?}\n\
                                Before: {before_source:?} -> {before_destination:?}\n\
                                After: {source:?} -> {destination:?}"
                            );
                        }
                    }
                    Err(error) => {
                        failed += 1;
                        assert_eq!(
                            (&source, &destination),
                            (&before_source, &before_destination),
                            "Failed transfer #{op_index} ({error}) had an effect"
                        );
                        let again = operation(&mut source, &mut destination);
                        assert_eq!(
                            again,
                            Err(error.clone()),
                            "Transfer #{op_index} did not fail the same way twice on \
                            {before_source:?} -> {before_destination:?}"
                        );
                        assert_eq!(
                            (&source, &destination),
                            (&before_source, &before_destination),
                            "Repeated failed transfer #{op_index} ({error}) had an effect"
                        );
                    }
                }
            }
        }

        assert!(succeeded > 0, "No operation succeeded on any target");
        assert!(failed > 0, "No operation failed on any target");
    }
}

type PredicateRes = Result<(), &'static str>;

fn check_success<T: PartialEq>(
    report: Transferred,
    (before_source, before_destination): (&Inventory<T>, &Inventory<T>),
    (source, destination): (&Inventory<T>, &Inventory<T>),
) -> PredicateRes {
    let moved = before_source
        .get(report.source_slot)
        .and_then(Slot::item)
        .ok_or("reported source slot was not occupied before")?;
    if source.get(report.source_slot) != Some(&Slot::Empty) {
        return Err("reported source slot is not empty after");
    }
    if before_destination.get(report.destination_slot) != Some(&Slot::Empty) {
        return Err("reported destination slot was not empty before");
    }
    let placed = destination.get(report.destination_slot);
    if placed.and_then(Slot::item) != Some(moved) {
        return Err("reported destination slot does not hold the moved item");
    }
    if !others_unchanged(before_source, source, report.source_slot)
        || !others_unchanged(before_destination, destination, report.destination_slot)
    {
        return Err("a slot other than the reported ones changed");
    }
    let count_before = u32::from(before_source.count()) + u32::from(before_destination.count());
    let count_after = u32::from(source.count()) + u32::from(destination.count());
    if count_before != count_after {
        return Err("item count not conserved");
    }
    Ok(())
}

fn others_unchanged<T: PartialEq>(before: &Inventory<T>, after: &Inventory<T>, skip: Ix) -> bool {
    before.size() == after.size()
        && before
            .slots()
            .iter()
            .zip(after.slots())
            .zip(0..)
            .all(|((b, a), index)| index == skip || b == a)
}

/// A source and a destination inventory.
type Layout = (Inventory<char>, Inventory<char>);

fn inventory(slots: Vec<Option<char>>) -> Inventory<char> {
    let slots: Vec<Slot<char>> = slots.into_iter().map(Slot::<char>::from).collect();
    Inventory::from_slots(slots)
}

/// Every pair of inventories of up to `max_size` slots whose slots each hold nothing,
/// `'a'`, or `'b'`.
pub(crate) fn layouts(max_size: usize) -> impl Iterator<Item = Layout> {
    let contents = [None, Some('a'), Some('b')];
    let singles: Vec<Inventory<char>> = core::iter::once(Inventory::new(0))
        .chain((1..=max_size).flat_map(|size| {
            core::iter::repeat_n(contents, size)
                .multi_cartesian_product()
                .map(inventory)
        }))
        .collect();
    singles
        .iter()
        .cartesian_product(singles.iter())
        .map(|(source, destination)| (source.clone(), destination.clone()))
        .collect::<Vec<_>>()
        .into_iter()
}

/// An [`Inventory`] wrapper which can be told to break the [`Container`] contract by
/// refusing to give up or accept items.
#[derive(Debug)]
pub(crate) struct Grudging<T> {
    pub inner: Inventory<T>,
    pub refuse_take: bool,
    pub refuse_add: bool,
}

impl<T> Grudging<T> {
    pub fn new(inner: Inventory<T>) -> Self {
        Self {
            inner,
            refuse_take: false,
            refuse_add: false,
        }
    }
}

impl<T: PartialEq> Container for Grudging<T> {
    type Item = T;
    type Slot = Slot<T>;

    fn size(&self) -> Ix {
        self.inner.size()
    }
    fn slot(&self, index: Ix) -> Option<&Slot<T>> {
        self.inner.slot(index)
    }
    fn is_full(&self) -> bool {
        self.inner.is_full()
    }
    fn contains(&self, item: &T) -> bool {
        self.inner.contains(item)
    }
    fn take_item(&mut self, item: &T) -> Option<(Ix, T)> {
        if self.refuse_take {
            None
        } else {
            self.inner.take_item(item)
        }
    }
    fn take_at(&mut self, index: Ix) -> Option<T> {
        if self.refuse_take {
            None
        } else {
            self.inner.take_at(index)
        }
    }
    fn add(&mut self, item: T) -> Result<Ix, T> {
        if self.refuse_add {
            Err(item)
        } else {
            self.inner.add(item)
        }
    }
    fn add_at(&mut self, item: T, index: Ix) -> Result<(), T> {
        if self.refuse_add {
            Err(item)
        } else {
            self.inner.add_at(item, index)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layouts_count() {
        // (1 + 3 + 9)^2
        assert_eq!(layouts(2).count(), 169);
    }

    #[test]
    #[should_panic(expected = "had an effect")]
    fn tester_catches_mutation_on_failure() {
        TransferTester::<char>::new()
            .operation(|source, _| {
                let _ = source.take_at(0);
                Err(TransferError::NullReference(crate::transfer::Argument::Item))
            })
            .operation(|_, _| {
                Ok(Transferred {
                    source_slot: 0,
                    destination_slot: 0,
                })
            })
            .target(|| (inventory(vec![Some('a')]), Inventory::new(1)))
            .test();
    }
}
