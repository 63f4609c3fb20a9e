// SlotList integration suite.
//
// Each test documents what behavior is being verified and which
// invariants are assumed or asserted. The core invariants exercised:
// - Structure: head is None iff the list is empty iff tail is None;
//   walking next from head visits exactly len() nodes.
// - Accounting: len equals successful pushes/inserts minus successful
//   pops/removals and never underflows.
// - Boundaries: single-element lists keep head and tail consistent
//   through every op; empty pops are idempotent.
// - Teardown: dispose runs the cleanup exactly once per remaining
//   value, head to tail.
use slotchain::SlotList;

// Test: size accounting across mixed successful and failed ops.
// Assumes: out-of-range insert/remove are rejected without mutation.
// Verifies: len tracks successes only and never goes negative.
#[test]
fn len_tracks_successes_only() {
    let mut l: SlotList<i32> = SlotList::new();
    assert_eq!(l.pop_front(), None);
    assert_eq!(l.pop_back(), None);
    assert_eq!(l.len(), 0);

    l.push_front(1);
    l.push_back(2);
    l.insert(1, 3).unwrap(); // [1, 3, 2]
    assert_eq!(l.insert(9, 4), Err(4));
    assert_eq!(l.len(), 3);

    assert_eq!(l.remove(5), None);
    assert_eq!(l.remove(1), Some(3));
    assert_eq!(l.pop_back(), Some(2));
    assert_eq!(l.pop_back(), Some(1));
    assert_eq!(l.pop_back(), None);
    assert_eq!(l.len(), 0);
}

// Test: ordering of mixed front/back pushes.
// Assumes: push_front prepends, push_back appends.
// Verifies: pushFront(first), pushBack(second), pushFront(third) reads
// back as [third, first, second] via indexed lookup.
#[test]
fn push_order_reads_back_by_index() {
    let mut l = SlotList::new();
    l.push_front("first");
    l.push_back("second");
    l.push_front("third");

    assert_eq!(l.get(0), Some(&"third"));
    assert_eq!(l.get(1), Some(&"first"));
    assert_eq!(l.get(2), Some(&"second"));
    assert_eq!(l.get(3), None);
    assert_eq!(l.iter().copied().collect::<Vec<_>>(), vec!["third", "first", "second"]);
}

// Test: the four-element removal scenario.
// Assumes: [1,2,3,4] built by four push_back calls.
// Verifies: remove(1) yields 2 and size 3 with order [1,3,4];
// remove(0) yields 1; remove(1) (now the last index) yields 4; the
// final list is [3] with head and tail agreeing.
#[test]
fn four_element_removal_scenario() {
    let mut l = SlotList::new();
    for v in [1, 2, 3, 4] {
        l.push_back(v);
    }

    assert_eq!(l.remove(1), Some(2));
    assert_eq!(l.len(), 3);
    assert_eq!(l.iter().copied().collect::<Vec<_>>(), vec![1, 3, 4]);

    assert_eq!(l.remove(0), Some(1));
    assert_eq!(l.remove(1), Some(4));

    assert_eq!(l.len(), 1);
    assert_eq!(l.front(), Some(&3));
    assert_eq!(l.back(), Some(&3));
}

// Test: insert-then-lookup at every valid index.
// Assumes: insert's valid range is [0, len] inclusive.
// Verifies: insert(index, v) followed by get(index) returns v for each
// valid index at call time, growing the list each round.
#[test]
fn insert_then_lookup_every_valid_index() {
    let mut l: SlotList<u32> = SlotList::new();
    for round in 0u32..6 {
        let upper = l.len();
        let index = (round as usize * 7) % (upper + 1);
        l.insert(index, round).unwrap();
        assert_eq!(l.get(index), Some(&round));
        assert_eq!(l.len(), round as usize + 1);
    }
}

// Test: peeks never mutate.
// Assumes: front/back are read-only.
// Verifies: repeated peeks leave len and order unchanged; peeks on an
// empty list return None.
#[test]
fn peeks_are_read_only() {
    let mut l = SlotList::new();
    assert_eq!(l.front(), None);
    assert_eq!(l.back(), None);

    l.push_back(10);
    l.push_back(20);
    for _ in 0..3 {
        assert_eq!(l.front(), Some(&10));
        assert_eq!(l.back(), Some(&20));
        assert_eq!(l.len(), 2);
    }
}

// Test: pop_back walks forward to the penultimate node.
// Assumes: no backward links exist.
// Verifies: repeated pop_back drains the list in reverse push order and
// the one-element case clears both ends.
#[test]
fn pop_back_drains_in_reverse() {
    let mut l = SlotList::new();
    for v in 1..=5 {
        l.push_back(v);
    }
    let mut drained = Vec::new();
    while let Some(v) = l.pop_back() {
        drained.push(v);
    }
    assert_eq!(drained, vec![5, 4, 3, 2, 1]);
    assert!(l.is_empty());
    assert_eq!(l.front(), None);
    assert_eq!(l.back(), None);

    // Idempotent once empty.
    assert_eq!(l.pop_back(), None);
    assert_eq!(l.pop_back(), None);
}

// Test: dispose invokes the cleanup once per remaining value, in order.
// Assumes: earlier pops removed their values from the list.
// Verifies: the cleanup sees exactly the remaining values head to tail,
// and owned payloads are consumed by the callback.
#[test]
fn dispose_cleanup_order_and_count() {
    let mut l = SlotList::new();
    for name in ["a", "b", "c", "d"] {
        l.push_back(name.to_string());
    }
    assert_eq!(l.pop_front().as_deref(), Some("a"));

    let mut cleaned: Vec<String> = Vec::new();
    l.dispose(|v| cleaned.push(v));
    assert_eq!(cleaned, vec!["b", "c", "d"]);
}

// Test: interleaved ends on a two-element list.
// Assumes: head/tail updates stay consistent when the list shrinks to
// one element from either end.
// Verifies: alternating front/back pops from both orders.
#[test]
fn two_element_end_interleaving() {
    let mut l = SlotList::new();
    l.push_back(1);
    l.push_back(2);
    assert_eq!(l.pop_back(), Some(2));
    assert_eq!(l.pop_front(), Some(1));
    assert!(l.is_empty());

    l.push_front(3);
    l.push_front(4);
    assert_eq!(l.pop_front(), Some(4));
    assert_eq!(l.pop_back(), Some(3));
    assert!(l.is_empty());
}
