#![cfg(test)]

// Property tests for SlotList: state-machine equivalence against Vec.
//
// Invariants exercised across random operation sequences:
// - Push/pop/insert/remove mirror the model at every index, including
//   the inclusive upper bound for insert and the strict bound for
//   remove; out-of-range ops leave the list untouched.
// - front/back/get parity with the model; iteration order matches.
// - len equals pushes minus pops and never underflows.

use crate::slot_list::SlotList;
use proptest::prelude::*;

#[derive(Clone, Debug)]
enum Op {
    PushFront(i32),
    PushBack(i32),
    PopFront,
    PopBack,
    Insert(usize, i32),
    Remove(usize),
    Get(usize),
    Iterate,
}

fn arb_ops() -> impl Strategy<Value = Vec<Op>> {
    // Raw indices up to 12 so out-of-range paths are hit regularly.
    let op = prop_oneof![
        any::<i32>().prop_map(Op::PushFront),
        any::<i32>().prop_map(Op::PushBack),
        Just(Op::PopFront),
        Just(Op::PopBack),
        (0usize..12, any::<i32>()).prop_map(|(i, v)| Op::Insert(i, v)),
        (0usize..12).prop_map(Op::Remove),
        (0usize..12).prop_map(Op::Get),
        Just(Op::Iterate),
    ];
    proptest::collection::vec(op, 1..80)
}

proptest! {
    #![proptest_config(ProptestConfig { cases: 64, .. ProptestConfig::default() })]
    #[test]
    fn prop_state_machine(ops in arb_ops()) {
        let mut sut: SlotList<i32> = SlotList::new();
        let mut model: Vec<i32> = Vec::new();

        for op in ops {
            match op {
                Op::PushFront(v) => {
                    sut.push_front(v);
                    model.insert(0, v);
                }
                Op::PushBack(v) => {
                    sut.push_back(v);
                    model.push(v);
                }
                Op::PopFront => {
                    let expected = if model.is_empty() { None } else { Some(model.remove(0)) };
                    prop_assert_eq!(sut.pop_front(), expected);
                }
                Op::PopBack => {
                    prop_assert_eq!(sut.pop_back(), model.pop());
                }
                Op::Insert(i, v) => {
                    if i <= model.len() {
                        prop_assert_eq!(sut.insert(i, v), Ok(()));
                        model.insert(i, v);
                        prop_assert_eq!(sut.get(i), Some(&v), "insert then lookup at {}", i);
                    } else {
                        prop_assert_eq!(sut.insert(i, v), Err(v), "out of range hands value back");
                    }
                }
                Op::Remove(i) => {
                    let expected = if i < model.len() { Some(model.remove(i)) } else { None };
                    prop_assert_eq!(sut.remove(i), expected);
                }
                Op::Get(i) => {
                    prop_assert_eq!(sut.get(i), model.get(i));
                }
                Op::Iterate => {
                    let got: Vec<i32> = sut.iter().copied().collect();
                    prop_assert_eq!(&got, &model);
                }
            }

            // Post-conditions after each op
            prop_assert_eq!(sut.len(), model.len());
            prop_assert_eq!(sut.is_empty(), model.is_empty());
            prop_assert_eq!(sut.front(), model.first());
            prop_assert_eq!(sut.back(), model.last());
        }
    }
}
