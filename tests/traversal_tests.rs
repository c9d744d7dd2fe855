//! Integration tests for the six traversal orders.
//!
//! Each order is driven through the begin/end cursor protocol, the tagged
//! `OrderCursor` and the `Traversal` iterator adapter.

use std::cell::Cell;
use std::cmp::Ordering;

use orderly::{
    ContainerError, Cursor, OrderedContainer, Position, SideCrossCursor, TraversalOrder,
};
use rstest::rstest;

/// Walks `order` with the begin/end protocol and collects every element.
fn walk(container: &OrderedContainer<i32>, order: TraversalOrder) -> Vec<i32> {
    let mut cursor = container.begin(order);
    let end = container.end(order);
    let mut visited = Vec::new();
    while cursor != end {
        visited.push(*cursor.current().unwrap());
        cursor.advance().unwrap();
    }
    visited
}

fn container_of(elements: &[i32]) -> OrderedContainer<i32> {
    elements.iter().copied().collect()
}

// =============================================================================
// Literal scenarios
// =============================================================================

#[rstest]
#[case(&[5, 1, 8, 3], TraversalOrder::Ascending, vec![1, 3, 5, 8])]
#[case(&[5, 1, 8, 3], TraversalOrder::Descending, vec![8, 5, 3, 1])]
#[case(&[1, 3, 7, 10], TraversalOrder::SideCross, vec![1, 10, 3, 7])]
#[case(&[1, 2, 5, 7, 9], TraversalOrder::SideCross, vec![1, 9, 2, 7, 5])]
#[case(&[1, 2, 3], TraversalOrder::Reverse, vec![3, 2, 1])]
#[case(&[1, 2, 3], TraversalOrder::Insertion, vec![1, 2, 3])]
#[case(&[1, 2, 3, 4, 5], TraversalOrder::MiddleOut, vec![3, 2, 4, 1, 5])]
#[case(&[10, 20, 30, 40], TraversalOrder::MiddleOut, vec![30, 20, 40, 10])]
fn test_order_scenarios(
    #[case] elements: &[i32],
    #[case] order: TraversalOrder,
    #[case] expected: Vec<i32>,
) {
    let container = container_of(elements);
    assert_eq!(walk(&container, order), expected);
    let via_iterator: Vec<i32> = container.traverse(order).collect();
    assert_eq!(via_iterator, expected);
}

#[rstest]
fn test_typed_cursors_match_demo_output() {
    let container = container_of(&[7, 15, 6, 1, 2]);

    let ascending: Vec<i32> = container.begin_ascending().into_traversal().collect();
    let descending: Vec<i32> = container.begin_descending().into_traversal().collect();
    let side_cross: Vec<i32> = container.begin_side_cross().into_traversal().collect();
    let reverse: Vec<i32> = container.begin_reverse().into_traversal().collect();
    let insertion: Vec<i32> = container.begin_insertion().into_traversal().collect();
    let middle_out: Vec<i32> = container.begin_middle_out().into_traversal().collect();

    assert_eq!(ascending, vec![1, 2, 6, 7, 15]);
    assert_eq!(descending, vec![15, 7, 6, 2, 1]);
    assert_eq!(side_cross, vec![1, 15, 2, 7, 6]);
    assert_eq!(reverse, vec![2, 1, 6, 15, 7]);
    assert_eq!(insertion, vec![7, 15, 6, 1, 2]);
    assert_eq!(middle_out, vec![6, 15, 1, 7, 2]);
}

#[rstest]
fn test_typed_begin_end_pairs_terminate() {
    let container = container_of(&[4, 9, 2]);

    let mut ascending = container.begin_ascending();
    let ascending_end = container.end_ascending();
    let mut steps = 0;
    while ascending != ascending_end {
        ascending.advance().unwrap();
        steps += 1;
    }
    assert_eq!(steps, 3);

    let mut side_cross = container.begin_side_cross();
    let side_cross_end = container.end_side_cross();
    steps = 0;
    while side_cross != side_cross_end {
        side_cross.advance().unwrap();
        steps += 1;
    }
    assert_eq!(steps, 3);

    let mut middle_out = container.begin_middle_out();
    let middle_out_end = container.end_middle_out();
    steps = 0;
    while middle_out != middle_out_end {
        middle_out.advance().unwrap();
        steps += 1;
    }
    assert_eq!(steps, 3);

    assert_eq!(container.begin_reverse().position(), Position::Active(2));
    assert_eq!(container.end_reverse().position(), Position::Exhausted);
    assert_eq!(container.begin_insertion().position(), Position::Active(0));
    assert_eq!(container.end_insertion().position(), Position::Exhausted);
    assert_eq!(container.begin_descending().position(), Position::Active(0));
    assert_eq!(container.end_descending().position(), Position::Exhausted);
}

#[rstest]
fn test_string_orders() {
    let container: OrderedContainer<String> = ["zebra", "apple", "dog", "cat", "bird"]
        .into_iter()
        .map(String::from)
        .collect();

    let collect = |order| -> Vec<String> { container.traverse(order).collect() };
    assert_eq!(
        collect(TraversalOrder::Ascending),
        vec!["apple", "bird", "cat", "dog", "zebra"]
    );
    assert_eq!(
        collect(TraversalOrder::SideCross),
        vec!["apple", "zebra", "bird", "dog", "cat"]
    );
    assert_eq!(
        collect(TraversalOrder::Reverse),
        vec!["bird", "cat", "dog", "apple", "zebra"]
    );
    assert_eq!(
        collect(TraversalOrder::MiddleOut),
        vec!["dog", "apple", "cat", "zebra", "bird"]
    );
}

// =============================================================================
// Empty and single-element containers
// =============================================================================

#[rstest]
fn test_empty_container_every_order_begin_equals_end() {
    let container: OrderedContainer<i32> = OrderedContainer::new();
    for order in TraversalOrder::ALL {
        let begin = container.begin(order);
        assert_eq!(begin, container.end(order));
        assert!(begin.is_exhausted());
        assert_eq!(container.traverse(order).count(), 0);
        assert_eq!(
            begin.current(),
            Err(ContainerError::end_of_sequence(order))
        );
    }
}

#[rstest]
fn test_single_element_every_order() {
    let container = container_of(&[99]);
    for order in TraversalOrder::ALL {
        let mut cursor = container.begin(order);
        assert_eq!(cursor.current(), Ok(&99));
        cursor.advance().unwrap();
        assert!(cursor.is_exhausted());
        assert_eq!(cursor, container.end(order));
        assert_eq!(cursor.current(), Err(ContainerError::end_of_sequence(order)));
        assert_eq!(cursor.advance(), Err(ContainerError::end_of_sequence(order)));
    }
}

// =============================================================================
// Exhaustion
// =============================================================================

#[rstest]
fn test_every_order_fails_past_the_end() {
    let container = container_of(&[3, 1, 4, 1, 5, 9]);
    for order in TraversalOrder::ALL {
        let mut cursor = container.begin(order);
        for _ in 0..container.size() {
            cursor.advance().unwrap();
        }
        assert_eq!(cursor.remaining(), 0);
        assert_eq!(cursor.advance(), Err(ContainerError::end_of_sequence(order)));
        assert_eq!(cursor.current(), Err(ContainerError::end_of_sequence(order)));
    }
}

#[rstest]
fn test_end_cursor_is_already_exhausted() {
    let container = container_of(&[1, 2, 3]);
    for order in TraversalOrder::ALL {
        let mut end = container.end(order);
        assert!(end.is_exhausted());
        assert_eq!(end.advance(), Err(ContainerError::end_of_sequence(order)));
    }
}

#[rstest]
fn test_side_cross_end_windows() {
    let even = SideCrossCursor::end(&[1, 3, 7, 10]);
    let odd = SideCrossCursor::end(&[1, 2, 5, 7, 9]);
    assert_eq!(even.window(), (2, 2));
    assert_eq!(odd.window(), (3, 3));
}

// =============================================================================
// Idempotence and snapshot isolation
// =============================================================================

#[rstest]
fn test_begin_twice_yields_identical_traversals() {
    let container = container_of(&[8, 3, 3, 6, 1, 7]);
    for order in TraversalOrder::ALL {
        let first: Vec<i32> = container.traverse(order).collect();
        let second: Vec<i32> = container.traverse(order).collect();
        assert_eq!(first, second);
        assert_eq!(container.begin(order), container.begin(order));
    }
}

#[rstest]
fn test_mutation_after_begin_is_not_observed() {
    let mut container = container_of(&[5, 1, 8, 3]);
    let cursors: Vec<_> = TraversalOrder::ALL
        .into_iter()
        .map(|order| (order, container.begin(order)))
        .collect();
    let expected: Vec<Vec<i32>> = TraversalOrder::ALL
        .into_iter()
        .map(|order| container.traverse(order).collect())
        .collect();

    container.add(100);
    container.remove(&5).unwrap();
    container.add(-4);

    for ((order, cursor), expected) in cursors.into_iter().zip(expected) {
        let seen: Vec<i32> = cursor.into_traversal().collect();
        assert_eq!(seen, expected, "order {order} observed a mutation");
    }
}

#[rstest]
fn test_cloned_cursor_advances_independently() {
    let container = container_of(&[1, 2, 3]);
    let mut cursor = container.begin_insertion();
    let snapshot_holder = cursor.clone();
    cursor.advance().unwrap();
    assert_eq!(cursor.current(), Ok(&2));
    assert_eq!(snapshot_holder.current(), Ok(&1));
    assert!(cursor.snapshot().shares_storage_with(snapshot_holder.snapshot()));
}

#[rstest]
fn test_traversal_size_hint_tracks_remaining() {
    let container = container_of(&[1, 2, 3, 4, 5]);
    for order in TraversalOrder::ALL {
        let mut traversal = container.traverse(order);
        assert_eq!(traversal.len(), 5);
        traversal.next();
        traversal.next();
        assert_eq!(traversal.size_hint(), (3, Some(3)));
    }
}

// =============================================================================
// Cursor comparison cost
// =============================================================================

thread_local! {
    static EQUALITY_CHECKS: Cell<usize> = const { Cell::new(0) };
}

/// Element that counts how often it is compared for equality.
#[derive(Clone, Debug)]
struct Counted(u32);

impl PartialEq for Counted {
    fn eq(&self, other: &Self) -> bool {
        EQUALITY_CHECKS.with(|checks| checks.set(checks.get() + 1));
        self.0 == other.0
    }
}

impl Eq for Counted {}

impl PartialOrd for Counted {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Counted {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.cmp(&other.0)
    }
}

#[rstest]
#[case(TraversalOrder::Ascending)]
#[case(TraversalOrder::Descending)]
#[case(TraversalOrder::SideCross)]
#[case(TraversalOrder::Reverse)]
#[case(TraversalOrder::Insertion)]
#[case(TraversalOrder::MiddleOut)]
fn test_begin_end_loop_compares_elements_once(#[case] order: TraversalOrder) {
    const LENGTH: u32 = 1000;
    let container: OrderedContainer<Counted> =
        (0..LENGTH).map(|value| Counted(value * 7 % LENGTH)).collect();

    let mut cursor = container.begin(order);
    let end = container.end(order);
    EQUALITY_CHECKS.with(|checks| checks.set(0));

    let mut steps = 0;
    while cursor != end {
        cursor.advance().unwrap();
        steps += 1;
    }

    assert_eq!(steps, LENGTH);
    let checks = EQUALITY_CHECKS.with(Cell::get);
    assert!(
        checks <= LENGTH as usize,
        "{order}: {checks} element comparisons for {LENGTH} elements"
    );
}
