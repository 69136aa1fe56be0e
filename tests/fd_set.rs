use paratus::{Error, FdSet};

use std::os::fd::RawFd;

#[test]
fn test_new_set_is_empty() {
    let set = FdSet::new();

    assert!(set.is_empty(), "a new set should have no members");
    assert_eq!(set.len(), 0);
}

#[test]
fn test_insert_and_contains() {
    let mut set = FdSet::new();
    set.insert(0).unwrap();
    set.insert(5).unwrap();

    assert!(set.contains(0));
    assert!(set.contains(5));
    assert!(!set.contains(3));
    assert_eq!(set.len(), 2);
}

#[test]
fn test_insert_is_idempotent() {
    let mut set = FdSet::new();
    set.insert(7).unwrap();
    set.insert(7).unwrap();

    assert_eq!(set.len(), 1, "double insert should not add a second member");
}

#[test]
fn test_remove_reports_membership() {
    let mut set = FdSet::new();
    set.insert(4).unwrap();

    assert!(set.remove(4), "removing a member should report true");
    assert!(!set.remove(4), "removing a non-member should report false");
    assert!(set.is_empty());
}

#[test]
fn test_clear_empties_the_set() {
    let mut set = FdSet::new();
    for fd in 0..10 {
        set.insert(fd).unwrap();
    }

    set.clear();

    assert!(set.is_empty());
    assert!(!set.contains(0));
}

#[test]
fn test_iter_yields_members_in_ascending_order() {
    let mut set = FdSet::new();
    for fd in [64, 1, 130, 0] {
        set.insert(fd).unwrap();
    }

    let members: Vec<RawFd> = set.iter().collect();

    assert_eq!(members, vec![0, 1, 64, 130]);
}

#[test]
fn test_negative_descriptor_is_rejected() {
    let mut set = FdSet::new();

    assert!(
        matches!(set.insert(-1), Err(Error::InvalidArgument { .. })),
        "a negative index is malformed input, not a capacity problem"
    );
}

#[test]
fn test_descriptor_beyond_capacity_is_rejected() {
    let mut set = FdSet::new();

    let err = set.insert(FdSet::CAPACITY as RawFd).unwrap_err();

    assert!(matches!(err, Error::CapacityExceeded { .. }));
    assert!(set.is_empty(), "a rejected insert should not mutate the set");
}

#[test]
fn test_highest_valid_descriptor_is_accepted() {
    let last = FdSet::CAPACITY as RawFd - 1;

    let mut set = FdSet::new();
    set.insert(last).unwrap();

    assert!(set.contains(last));
    assert_eq!(set.iter().collect::<Vec<_>>(), vec![last]);
}

#[test]
fn test_membership_queries_outside_range_report_absent() {
    let set = FdSet::new();

    assert!(!set.contains(-1));
    assert!(!set.contains(FdSet::CAPACITY as RawFd));
}

#[test]
fn test_copies_do_not_alias_their_template() {
    let mut template = FdSet::new();
    template.insert(2).unwrap();

    let mut working = template;
    working.remove(2);

    assert!(
        template.contains(2),
        "mutating a copy should not touch the template"
    );
}
