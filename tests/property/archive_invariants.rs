//! Property-based tests for planner invariants.
//!
//! Uses proptest to verify, for arbitrary sequences of operations:
//! 1. A task survives archive iff it was open before the call.
//! 2. Survivors keep their relative order.
//! 3. Completion never changes any other task.

#![allow(clippy::unwrap_used)]

use proptest::prelude::*;
use taskcal::planner::Planner;
use taskcal_core::task::Task;

/// One step applied to a planner.
#[derive(Debug, Clone)]
enum Op {
    Add(String),
    /// Complete the task at `index % len`, if any.
    Complete(usize),
}

/// Strategy for generating planner operations.
fn arb_op() -> impl Strategy<Value = Op> {
    prop_oneof![
        "[a-z]{1,12}".prop_map(Op::Add),
        any::<usize>().prop_map(Op::Complete),
    ]
}

fn apply(planner: &mut Planner, op: &Op) {
    match op {
        Op::Add(content) => {
            planner.add_task(content).unwrap();
        }
        Op::Complete(index) => {
            let len = planner.tasks().len();
            if len > 0 {
                let id = planner.tasks()[index % len].id.clone();
                planner.complete_task(&id).unwrap();
            }
        }
    }
}

proptest! {
    #[test]
    fn archive_keeps_exactly_open_tasks(ops in prop::collection::vec(arb_op(), 0..64)) {
        let mut planner = Planner::new();
        for op in &ops {
            apply(&mut planner, op);
        }

        let before: Vec<Task> = planner.tasks().to_vec();
        let expected: Vec<Task> = before.iter().filter(|t| !t.completed).cloned().collect();

        let archived = planner.archive_completed();

        prop_assert_eq!(planner.tasks(), expected.as_slice());
        prop_assert_eq!(archived, before.len() - expected.len());
        prop_assert_eq!(planner.completed_count(), 0);
    }

    #[test]
    fn completion_touches_only_its_target(
        ops in prop::collection::vec(arb_op(), 1..32),
        pick in any::<usize>(),
    ) {
        let mut planner = Planner::new();
        planner.add_task("anchor").unwrap();
        for op in &ops {
            apply(&mut planner, op);
        }

        let before: Vec<Task> = planner.tasks().to_vec();
        let target = pick % before.len();
        planner.complete_task(&before[target].id).unwrap();

        for (i, (old, new)) in before.iter().zip(planner.tasks()).enumerate() {
            if i == target {
                prop_assert!(new.completed);
                prop_assert_eq!(&old.id, &new.id);
                prop_assert_eq!(&old.content, &new.content);
            } else {
                prop_assert_eq!(old, new);
            }
        }
    }
}
