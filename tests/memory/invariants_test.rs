/*!
 * Property tests: structural invariants under random operation streams
 */

use contig_allocator::memory::{AddressSpace, FitStrategy};
use proptest::prelude::*;
use std::collections::HashMap;

const TOTAL: usize = 1024;

#[derive(Debug, Clone)]
enum Op {
    Request {
        owner: usize,
        size: usize,
        strategy: FitStrategy,
    },
    Release {
        owner: usize,
    },
    Compact,
}

fn op_strategy() -> impl Strategy<Value = Op> {
    let fit = prop_oneof![
        Just(FitStrategy::FirstFit),
        Just(FitStrategy::BestFit),
        Just(FitStrategy::WorstFit),
    ];
    prop_oneof![
        4 => (0usize..8, 1usize..400, fit).prop_map(|(owner, size, strategy)| Op::Request {
            owner,
            size,
            strategy,
        }),
        3 => (0usize..8).prop_map(|owner| Op::Release { owner }),
        1 => Just(Op::Compact),
    ]
}

fn owner_name(owner: usize) -> String {
    format!("P{}", owner)
}

fn apply(space: &mut AddressSpace, op: &Op) {
    match op {
        Op::Request {
            owner,
            size,
            strategy,
        } => {
            let _ = space.allocate(&owner_name(*owner), *size, *strategy);
        }
        Op::Release { owner } => {
            let _ = space.release(&owner_name(*owner));
        }
        Op::Compact => {
            space.compact();
        }
    }
}

proptest! {
    #[test]
    fn prop_blocks_always_partition_the_range(ops in prop::collection::vec(op_strategy(), 1..64)) {
        let mut space = AddressSpace::with_capacity(TOTAL).unwrap();
        for op in &ops {
            apply(&mut space, op);

            let snapshot = space.snapshot();
            prop_assert_eq!(snapshot.regions.first().map(|r| r.low), Some(0));
            prop_assert_eq!(snapshot.regions.last().map(|r| r.high), Some(TOTAL - 1));
            for pair in snapshot.regions.windows(2) {
                prop_assert_eq!(pair[1].low, pair[0].high + 1);
            }
        }
    }

    #[test]
    fn prop_no_adjacent_holes_survive_any_operation(ops in prop::collection::vec(op_strategy(), 1..64)) {
        let mut space = AddressSpace::with_capacity(TOTAL).unwrap();
        for op in &ops {
            apply(&mut space, op);

            let snapshot = space.snapshot();
            for pair in snapshot.regions.windows(2) {
                prop_assert!(!(pair[0].is_free() && pair[1].is_free()));
            }
        }
    }

    #[test]
    fn prop_ledger_matches_layout(ops in prop::collection::vec(op_strategy(), 1..64)) {
        let mut space = AddressSpace::with_capacity(TOTAL).unwrap();
        let mut ledger: HashMap<String, usize> = HashMap::new();

        for op in &ops {
            match op {
                Op::Request { owner, size, strategy } => {
                    let name = owner_name(*owner);
                    if space.allocate(&name, *size, *strategy).is_ok() {
                        ledger.insert(name, *size);
                    }
                }
                Op::Release { owner } => {
                    let name = owner_name(*owner);
                    match space.release(&name) {
                        Ok(freed) => prop_assert_eq!(Some(freed), ledger.remove(&name)),
                        Err(_) => prop_assert!(!ledger.contains_key(&name)),
                    }
                }
                Op::Compact => {
                    space.compact();
                }
            }
        }

        let mut seen: HashMap<String, usize> = HashMap::new();
        for region in &space.snapshot().regions {
            if let Some(owner) = &region.owner {
                *seen.entry(owner.to_string()).or_insert(0) += region.size();
            }
        }
        prop_assert_eq!(seen, ledger);
    }

    #[test]
    fn prop_compact_packs_and_stays_packed(ops in prop::collection::vec(op_strategy(), 0..48)) {
        let mut space = AddressSpace::with_capacity(TOTAL).unwrap();
        for op in &ops {
            apply(&mut space, op);
        }

        space.compact();
        let packed = space.snapshot();

        // at most one hole, and only at the very top
        let holes = packed.regions.iter().filter(|r| r.is_free()).count();
        prop_assert!(holes <= 1);
        if holes == 1 {
            prop_assert!(packed.regions.last().unwrap().is_free());
        }

        // a second pass finds nothing to do
        prop_assert_eq!(space.compact(), 0);
        prop_assert_eq!(&space.snapshot(), &packed);
    }

    #[test]
    fn prop_allocate_then_release_round_trips(
        ops in prop::collection::vec(op_strategy(), 0..48),
        size in 1usize..512,
    ) {
        let mut space = AddressSpace::with_capacity(TOTAL).unwrap();
        for op in &ops {
            apply(&mut space, op);
        }

        let before = space.snapshot();
        if space.allocate("probe", size, FitStrategy::FirstFit).is_ok() {
            space.release("probe").unwrap();
        }
        prop_assert_eq!(&space.snapshot(), &before);
    }
}
