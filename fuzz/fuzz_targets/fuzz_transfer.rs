#![no_main]
extern crate inventory_transfer;

use inventory_transfer::inv::{Inventory, Slot};
use inventory_transfer::transfer::{self, TransferError, Transferred};

use libfuzzer_sys::fuzz_target;
use pretty_assertions::assert_eq;

#[derive(Clone, Copy, Debug, arbitrary::Arbitrary)]
enum Op {
    ByItem(u8),
    ByItemToIndex(u8, i32),
    FromIndex(i32),
    FromIndexToIndex(i32, i32),
}

/// Which way the item goes.
#[derive(Clone, Copy, Debug, arbitrary::Arbitrary)]
enum Direction {
    LeftToRight,
    RightToLeft,
}

fn apply(
    op: Op,
    source: &mut Inventory<u8>,
    destination: &mut Inventory<u8>,
) -> Result<Transferred, TransferError> {
    match op {
        Op::ByItem(item) => {
            transfer::transfer_by_item(Some(source), Some(destination), Some(&item))
        }
        Op::ByItemToIndex(item, to) => {
            transfer::transfer_by_item_to_index(Some(source), Some(&item), Some(destination), to)
        }
        Op::FromIndex(at) => transfer::transfer_from_index(Some(source), at, Some(destination)),
        Op::FromIndexToIndex(from, to) => {
            transfer::transfer_from_index_to_index(Some(source), from, Some(destination), to)
        }
    }
}

fn total(a: &Inventory<u8>, b: &Inventory<u8>) -> u32 {
    u32::from(a.count()) + u32::from(b.count())
}

fuzz_target!(|input: (Inventory<u8>, Inventory<u8>, Vec<(Direction, Op)>)| {
    let (mut left, mut right, ops) = input;
    let initial_total = total(&left, &right);

    for (direction, op) in ops {
        let before = (left.clone(), right.clone());
        let (source, destination) = match direction {
            Direction::LeftToRight => (&mut left, &mut right),
            Direction::RightToLeft => (&mut right, &mut left),
        };
        let source_before = source.clone();

        match apply(op, source, destination) {
            Ok(report) => {
                let moved = source_before.get(report.source_slot).and_then(Slot::item);
                assert!(moved.is_some(), "{op:?} moved from an empty slot");
                assert_eq!(source.get(report.source_slot), Some(&Slot::Empty));
                let placed = destination.get(report.destination_slot);
                assert_eq!(placed.and_then(Slot::item), moved);
            }
            Err(_) => {
                assert_eq!(
                    (&left, &right),
                    (&before.0, &before.1),
                    "{op:?} failed with effect"
                );
            }
        }

        assert_eq!(total(&left, &right), initial_total);
    }
});
