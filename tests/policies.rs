//! Storage × mutation policy matrix.
//!
//! All four {Required, Optional} × {Immutable, Mutable} combinations are
//! valid; each stores and returns the constructed value unchanged.

use basic_type::prelude::*;
use basic_type::{mixins, tag};

#[test]
fn required_immutable_round_trip() {
    type Quantity = BasicType<u32, Required, Immutable>;

    let quantity = Quantity::new(42);
    assert_eq!(*quantity.get(), 42);
    assert!(quantity.initialized());
}

#[test]
fn required_mutable_round_trip() {
    type Quantity = BasicType<u32, Required, Mutable>;

    let mut quantity = Quantity::new(42);
    assert_eq!(*quantity.get(), 42);

    quantity.set(7);
    assert_eq!(*quantity.get(), 7);
    assert!(quantity.initialized());
}

#[test]
fn optional_immutable_round_trip() {
    type Quantity = BasicType<u32, Optional, Immutable>;

    let quantity = Quantity::new(42);
    assert_eq!(*quantity.get(), 42);
    assert!(quantity.initialized());

    let empty = Quantity::default();
    assert!(!empty.initialized());
}

#[test]
fn optional_mutable_round_trip() {
    type Quantity = BasicType<u32, Optional, Mutable>;

    let mut quantity = Quantity::default();
    assert!(!quantity.initialized());

    quantity.set(42);
    assert!(quantity.initialized());
    assert_eq!(*quantity.get(), 42);
}

#[test]
#[should_panic(expected = "before initialization")]
fn reading_an_uninitialized_optional_fails_fast() {
    type Quantity = BasicType<u32, Optional, Immutable>;

    let empty = Quantity::default();
    let _ = empty.get();
}

#[test]
fn default_required_needs_a_defaultable_inner_type() {
    // Compiles because u32: Default; a Required wrapper over a type without
    // Default has no default() and is rejected at compile time.
    type Quantity = BasicType<u32, Required, Immutable>;

    let quantity = Quantity::default();
    assert_eq!(*quantity.get(), 0);
    assert!(quantity.initialized());
}

#[test]
fn overwriting_with_an_uninitialized_source_resets_the_flag() {
    type Quantity = BasicType<u32, Optional, Mutable>;

    let mut quantity = Quantity::new(42);
    assert!(quantity.initialized());

    quantity = Quantity::default();
    assert!(!quantity.initialized());
}

#[test]
fn equality_covers_value_and_initialized_state() {
    type Quantity = BasicType<u32, Optional, Mutable>;

    let a = Quantity::new(42);
    let b = Quantity::new(42);
    let c = Quantity::new(7);
    let empty = Quantity::default();

    assert_eq!(a, b);
    assert_ne!(a, c);
    assert_ne!(a, empty);
    assert_eq!(empty, Quantity::default());
}

// =============================================================================
// Nominal distinctness through tags
// =============================================================================

tag! {
    Meters;
    Seconds;
}

#[test]
fn tagged_wrappers_are_distinct_nominal_types() {
    type Distance = BasicType<u64, Required, Immutable, mixins![Meters]>;
    type Duration = BasicType<u64, Required, Immutable, mixins![Seconds]>;

    fn advance(distance: &Distance, duration: &Duration) -> u64 {
        distance.get() + duration.get()
    }

    let distance = Distance::new(30);
    let duration = Duration::new(12);

    // advance(&duration, &distance) would not compile: the two wrappers
    // share a representation but not a type.
    assert_eq!(advance(&distance, &duration), 42);
}
