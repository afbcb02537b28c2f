use dynamic_array::{ArrayError, DynamicArray, ErrorKind};
use insta::assert_compact_debug_snapshot;

fn sample() -> DynamicArray<i32> {
    DynamicArray::from([10, 20, 30])
}

#[test]
fn index_out_of_range() {
    let mut array = sample();
    let errs = [
        array.get(3).copied().unwrap_err(),
        array.set(5, 0).unwrap_err(),
        array.remove(3).unwrap_err(),
        array.insert(4, 0).unwrap_err(),
    ];
    for err in errs {
        println!("{err}");
        assert_eq!(err.kind(), ErrorKind::IndexOutOfRange);
    }
    insta::assert_snapshot!(errs.map(|e| e.to_string()).join("\n"), @r"
    index 3 out of bounds for length 3
    index 5 out of bounds for length 3
    index 3 out of bounds for length 3
    index 4 out of bounds for length 3
    ");
    assert_eq!(array, [10, 20, 30]);
}

#[test]
fn insert_boundary() {
    let mut array = sample();
    assert_eq!(
        array.insert(4, 40),
        Err(ArrayError::IndexOutOfRange { index: 4, len: 3 })
    );
    assert_eq!(array.insert(3, 40), Ok(()));
    assert_eq!(array, [10, 20, 30, 40]);
}

#[test]
fn invalid_sub_ranges() {
    let array = sample();
    let srcs = [(0, 4), (2, 1), (4, 4)];
    for (from, to) in srcs {
        let err = array.sub_list(from, to).unwrap_err();

        assert_eq!(err, err);
        assert!(err.is_out_of_range());
        println!("{err}");
    }
    assert_compact_debug_snapshot!(array.sub_list(2, 1), @"Err(RangeOutOfRange { from: 2, to: 1, len: 3 })");
}

#[test]
fn empty_container() {
    let mut array: DynamicArray<i32> = DynamicArray::new();
    let err = array.remove_last().unwrap_err();

    println!("{err}");
    assert_eq!(
        err,
        ArrayError::EmptyContainer {
            operation: "remove_last"
        }
    );
    assert_compact_debug_snapshot!(array.remove_first(), @r#"Err(EmptyContainer { operation: "remove_first" })"#);
}

#[test]
fn exhausted_iterator() {
    let array = sample();
    let mut iter = array.iter();
    for _ in 0..3 {
        iter.try_next().unwrap_or_else(|e| panic!("{e}"));
    }
    let err = iter.try_next().unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NoSuchElement);
    insta::assert_snapshot!(err, @"no element at position 3: iteration has ended");
}

#[test]
fn errors_are_std_errors() {
    let err: Box<dyn std::error::Error> = Box::new(ArrayError::IndexOutOfRange { index: 1, len: 0 });
    assert_eq!(err.to_string(), "index 1 out of bounds for length 0");
    assert!(err.source().is_none());
}
