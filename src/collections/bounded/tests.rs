#![cfg(test)]

use super::*;

#[test]
fn test_accepts_exactly_max_size() {
    for n in 1..=16_isize {
        let mut list = BoundedList::new(n).expect("positive sizes should be accepted");

        for i in 0..n {
            assert!(
                list.append(i).is_ok(),
                "Append {} of {} should succeed.",
                i + 1,
                n
            );
        }

        assert!(list.is_full());
        assert_eq!(list.remaining(), 0);
        assert_eq!(
            list.append(n),
            Err(CapacityExceeded { max_size: n as usize, item: n }),
            "The append after the list is full should be rejected."
        );
        assert_eq!(list.len(), n as usize, "A rejected append shouldn't change the length.");
    }
}

#[test]
fn test_invalid_capacity() {
    assert_eq!(
        BoundedList::<u8>::new(0),
        Err(InvalidCapacity { requested: 0 }),
        "A maximum size of 0 should be rejected."
    );
    assert_eq!(
        BoundedList::<u8>::new(-1),
        Err(InvalidCapacity { requested: -1 }),
        "A negative maximum size should be rejected."
    );
    assert!(BoundedList::<u8>::new(isize::MIN).is_err());
    assert!(BoundedList::<u8>::new(isize::MAX).is_ok(), "Creating a huge list shouldn't allocate.");
}

#[test]
fn test_insertion_order() {
    let mut list = BoundedList::new(5).unwrap();
    for word in ["zero", "one", "two", "three"] {
        list.append(word).unwrap();
    }

    assert_eq!(&*list, &["zero", "one", "two", "three"]);
    assert_eq!(
        list.iter().copied().collect::<Vec<_>>(),
        list.into_iter().collect::<Vec<_>>(),
        "Borrowed and owned iteration should agree on order."
    );
}

#[test]
fn test_snapshot_isolation() {
    let mut list = BoundedList::new(3).unwrap();
    list.append(String::from("a")).unwrap();
    list.append(String::from("b")).unwrap();

    let first = list.snapshot();
    assert_eq!(first, list.snapshot(), "Snapshots without mutation should be equal.");

    let mut modified = list.snapshot();
    modified.clear();
    modified.push(String::from("z"));
    assert_eq!(list.snapshot(), ["a", "b"], "Mutating a snapshot shouldn't affect the list.");

    list.append(String::from("c")).unwrap();
    assert_eq!(first, ["a", "b"], "Appending shouldn't affect an earlier snapshot.");
}

#[test]
fn test_from_iter_bounded() {
    let list = BoundedList::from_iter_bounded(4, 0..4).unwrap();
    assert!(list.is_full());

    let err = BoundedList::from_iter_bounded(0, 0..4).unwrap_err();
    assert!(err.is_invalid_capacity());

    match BoundedList::from_iter_bounded(2, 10..20) {
        Err(BoundedListError::CapacityExceeded(err)) => {
            assert_eq!(err.max_size, 2);
            assert_eq!(err.into_item(), 12, "The first item that didn't fit should be returned.");
        }
        other => panic!("expected CapacityExceeded, got {other:?}"),
    }
}

#[test]
fn test_error_messages() {
    assert_eq!(
        InvalidCapacity { requested: -3 }.to_string(),
        "maximum size must be a positive integer, got -3"
    );

    let mut list = BoundedList::new(2).unwrap();
    list.append(()).unwrap();
    list.append(()).unwrap();
    let err: BoundedListError<()> = list.append(()).unwrap_err().into();
    assert_eq!(
        err.to_string(),
        "list has reached its maximum size of 2, unable to append"
    );
}
