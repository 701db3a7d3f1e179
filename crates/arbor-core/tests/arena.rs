//! Generational arena tests.
//!
//! These cover the behaviour widget trees rely on: stale keys are detected
//! after removal, vacated slots are reused with a new generation, and
//! iteration only yields live values.

use arbor_core::alloc::{Arena, IndexSlot};

#[test]
fn test_push_and_get() {
    let mut arena = Arena::new();

    let a = arena.push("root");
    let b = arena.push("child");

    assert_eq!(*arena.get(a), "root");
    assert_eq!(*arena.get(b), "child");
    assert_eq!(arena.len(), 2);
}

#[test]
fn test_get_mut() {
    let mut arena = Arena::new();

    let idx = arena.push(String::from("label"));
    arena.get_mut(idx).push_str(" (edited)");

    assert_eq!(arena.get(idx), "label (edited)");
}

#[test]
fn test_try_get_unknown_slot_returns_none() {
    let arena = Arena::<i32>::new();
    assert_eq!(arena.try_get(IndexSlot::new(0, 999)), None);
}

#[test]
fn test_stale_key_after_remove() {
    let mut arena = Arena::new();

    let idx = arena.push(42);
    assert_eq!(arena.remove(idx), 42);

    assert!(!arena.contains(idx));
    assert_eq!(arena.try_get(idx), None);
    assert_eq!(arena.try_remove(idx), None);
    assert!(arena.is_empty());
}

#[test]
#[should_panic(expected = "invalid generation")]
fn test_get_after_remove_panics() {
    let mut arena = Arena::new();

    let idx = arena.push(42);
    arena.remove(idx);

    let _ = arena.get(idx);
}

#[test]
#[should_panic(expected = "invalid generation")]
fn test_double_remove_panics() {
    let mut arena = Arena::new();

    let idx = arena.push(42);
    arena.remove(idx);
    arena.remove(idx);
}

#[test]
fn test_generations_advance_per_reuse() {
    let mut arena = Arena::new();

    let first = arena.push(0);
    arena.remove(first);
    let second = arena.push(1);
    arena.remove(second);
    let third = arena.push(2);

    assert_eq!(first.index(), third.index());
    assert_eq!(third.generation(), 2);
    assert_eq!(arena.try_get(first), None);
    assert_eq!(arena.try_get(second), None);
    assert_eq!(*arena.get(third), 2);
}

#[test]
fn test_iteration_yields_live_keys_in_slot_order() {
    let mut arena = Arena::new();

    let a = arena.push(10);
    let b = arena.push(20);
    let c = arena.push(30);
    arena.remove(b);

    let live: Vec<_> = arena.iter().collect();
    assert_eq!(live, vec![(a, &10), (c, &30)]);
}

#[test]
fn test_many_removals_and_reuses() {
    let mut arena = Arena::new();

    let slots: Vec<_> = (0..100).map(|i| arena.push(i)).collect();
    for slot in slots.iter().step_by(2) {
        arena.remove(*slot);
    }
    assert_eq!(arena.len(), 50);

    for i in 100..150 {
        arena.push(i);
    }
    assert_eq!(arena.len(), 100);

    for slot in slots.iter().skip(1).step_by(2) {
        assert!(arena.contains(*slot));
    }
}
