#![cfg(test)]
use crate::{ArrayError, DynamicArray, ErrorKind};
use proptest::prelude::*;
use proptest::sample::Index;
use proptest_derive::Arbitrary;

/// One mutation, applied both to a `DynamicArray` and to a `Vec` standing in as the model.
/// Positions deliberately overshoot the lengths reached so that refusals get exercised too.
#[derive(Debug, Clone, Arbitrary)]
enum Op {
    #[proptest(weight = 4)]
    Push(#[proptest(strategy = "0..8i8")] i8),
    #[proptest(weight = 2)]
    Insert(
        #[proptest(strategy = "0..24usize")] usize,
        #[proptest(strategy = "0..8i8")] i8,
    ),
    Set(
        #[proptest(strategy = "0..24usize")] usize,
        #[proptest(strategy = "0..8i8")] i8,
    ),
    Remove(#[proptest(strategy = "0..24usize")] usize),
    RemoveItem(#[proptest(strategy = "0..8i8")] i8),
    RemoveFirst,
    RemoveLast,
    AddAll(#[proptest(strategy = "prop::collection::vec(0..8i8, 0..8)")] Vec<i8>),
    EnsureCapacity(#[proptest(strategy = "0..64usize")] usize),
    TrimToSize,
    Clear,
}

fn apply(op: Op, array: &mut DynamicArray<i8>, model: &mut Vec<i8>) {
    let len = model.len();
    match op {
        Op::Push(v) => {
            assert!(array.push(v));
            model.push(v);
        }
        Op::Insert(index, v) => {
            if index <= len {
                assert_eq!(array.insert(index, v), Ok(()));
                model.insert(index, v);
            } else {
                assert_eq!(
                    array.insert(index, v),
                    Err(ArrayError::IndexOutOfRange { index, len })
                );
            }
        }
        Op::Set(index, v) => match model.get_mut(index) {
            Some(slot) => assert_eq!(array.set(index, v), Ok(std::mem::replace(slot, v))),
            None => assert_eq!(
                array.set(index, v),
                Err(ArrayError::IndexOutOfRange { index, len })
            ),
        },
        Op::Remove(index) => {
            if index < len {
                assert_eq!(array.remove(index), Ok(model.remove(index)));
            } else {
                assert_eq!(
                    array.remove(index),
                    Err(ArrayError::IndexOutOfRange { index, len })
                );
            }
        }
        Op::RemoveItem(v) => {
            let found = model.iter().position(|item| *item == v);
            if let Some(position) = found {
                model.remove(position);
            }
            assert_eq!(array.remove_item(&v), found.is_some());
        }
        Op::RemoveFirst => {
            if model.is_empty() {
                let err = array.remove_first().unwrap_err();
                assert_eq!(err.kind(), ErrorKind::EmptyContainer);
            } else {
                assert_eq!(array.remove_first(), Ok(model.remove(0)));
            }
        }
        Op::RemoveLast => assert_eq!(array.remove_last().ok(), model.pop()),
        Op::AddAll(values) => {
            let expected_capacity = array.capacity().max(len + values.len());
            assert_eq!(array.add_all(values.iter().copied()), !values.is_empty());
            assert_eq!(array.capacity(), expected_capacity);
            model.extend(values);
        }
        Op::EnsureCapacity(n) => {
            let before = array.capacity();
            array.ensure_capacity(n);
            assert_eq!(array.capacity(), before.max(n));
        }
        Op::TrimToSize => {
            array.trim_to_size();
            assert_eq!(array.capacity(), len);
        }
        Op::Clear => {
            let before = array.capacity();
            array.clear();
            model.clear();
            assert_eq!(array.capacity(), before);
        }
    }
}

proptest! {
    #[test]
    fn behaves_like_vec(ops in prop::collection::vec(any::<Op>(), 0..64)) {
        let mut array = DynamicArray::new();
        let mut model = Vec::new();

        for op in ops {
            apply(op, &mut array, &mut model);
            prop_assert!(array.capacity() >= array.len());
            prop_assert_eq!(array.as_slice(), model.as_slice());
        }
    }

    #[test]
    fn pushes_are_retrievable_in_order(values in prop::collection::vec(any::<i32>(), 0..100)) {
        let mut array = DynamicArray::new();
        for v in &values {
            array.push(*v);
        }
        prop_assert_eq!(array.len(), values.len());
        for (i, v) in values.iter().enumerate() {
            prop_assert_eq!(array.get(i), Ok(v));
        }
    }

    #[test]
    fn insert_then_remove_is_identity(
        values in prop::collection::vec(any::<i32>(), 0..40),
        position in any::<Index>(),
        x in any::<i32>(),
    ) {
        let mut array: DynamicArray<i32> = values.iter().copied().collect();
        let before = array.clone();
        let index = position.index(values.len() + 1);

        array.insert(index, x).unwrap();
        prop_assert_eq!(array.len(), values.len() + 1);
        prop_assert_eq!(array.remove(index), Ok(x));
        prop_assert_eq!(array, before);
    }

    #[test]
    fn to_array_matches_iteration(values in prop::collection::vec(any::<u16>(), 0..40)) {
        let array: DynamicArray<u16> = values.into_iter().collect();
        let snapshot = array.to_array();
        prop_assert_eq!(snapshot.len(), array.len());
        prop_assert!(snapshot.iter().eq(array.iter()));
    }

    #[test]
    fn clones_are_equal_and_hash_alike(values in prop::collection::vec(any::<i64>(), 0..40)) {
        let array: DynamicArray<i64> = values.into_iter().collect();
        let copy = array.clone();
        prop_assert_eq!(&copy, &array);
        prop_assert_eq!(copy.hash_code(), array.hash_code());
    }

    #[test]
    fn changing_an_element_breaks_equality(
        values in prop::collection::vec(any::<i64>(), 1..40),
        position in any::<Index>(),
    ) {
        let array: DynamicArray<i64> = values.into_iter().collect();
        let mut changed = array.clone();
        let index = position.index(array.len());
        let old = *changed.get(index).unwrap();
        changed.set(index, old.wrapping_add(1)).unwrap();

        prop_assert_ne!(&changed, &array);
        prop_assert_ne!(changed.hash_code(), array.hash_code());
    }

    #[test]
    fn reserve_then_trim_preserves_contents(
        values in prop::collection::vec(any::<i32>(), 0..40),
        reserve in 0..200usize,
    ) {
        let mut array: DynamicArray<i32> = values.iter().copied().collect();
        array.ensure_capacity(reserve);
        prop_assert!(array.capacity() >= reserve);
        array.trim_to_size();
        prop_assert_eq!(array.capacity(), values.len());
        prop_assert_eq!(array, values);
    }

    #[test]
    fn sub_list_matches_slicing(
        values in prop::collection::vec(any::<i32>(), 0..40),
        a in any::<Index>(),
        b in any::<Index>(),
    ) {
        let array: DynamicArray<i32> = values.iter().copied().collect();
        let (from, to) = {
            let (x, y) = (a.index(values.len() + 1), b.index(values.len() + 1));
            (x.min(y), x.max(y))
        };
        let sub = array.sub_list(from, to).unwrap();
        prop_assert_eq!(sub.as_slice(), &values[from..to]);
        if from < to {
            prop_assert_eq!(
                array.sub_list(to, from),
                Err(ArrayError::RangeOutOfRange { from: to, to: from, len: values.len() })
            );
        }
    }
}

#[test]
fn display_matches_vec_debug_for_numbers() {
    let array = DynamicArray::from([1, -2, 30]);
    assert_eq!(array.to_string(), format!("{:?}", vec![1, -2, 30]));
}
