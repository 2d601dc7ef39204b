//! Storage and mutation policies.
//!
//! Policies are type-level markers resolved entirely before any wrapper
//! instance exists. `Required`/`Optional` decide whether a wrapper may exist
//! without a contained value; `Immutable`/`Mutable` decide whether `set` is
//! exposed. All four combinations are valid.

mod sealed {
    pub trait Sealed {}

    impl Sealed for super::Required {}
    impl Sealed for super::Optional {}
    impl Sealed for super::Immutable {}
    impl Sealed for super::Mutable {}
}

/// Storage policy: the value must always be present.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Required;

/// Storage policy: the value may be absent until one is stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Optional;

/// Mutation policy: the value is fixed after construction (default).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Immutable;

/// Mutation policy: the value may be replaced through `set`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mutable;

/// Marker trait for the mutation policy slot of a wrapper.
pub trait Mutation: sealed::Sealed {}

impl Mutation for Immutable {}
impl Mutation for Mutable {}

/// Storage policy contract.
///
/// Maps a policy marker to its concrete representation of `T` and the
/// operations the wrapper delegates to it. Sealed: the two policies are a
/// closed set, dispatched at the type level with no runtime branching beyond
/// the `Option` discriminant that `Optional` itself requires.
pub trait Storage<T>: sealed::Sealed {
    /// Concrete storage for one value of `T`.
    type Repr;

    /// Wrap a value into the representation.
    fn store(value: T) -> Self::Repr;

    /// Read access.
    ///
    /// For `Optional` storage, reading before a value was stored is a
    /// precondition violation and fails fast with a panic. Callers are
    /// expected to check `initialized` first.
    fn get(repr: &Self::Repr) -> &T;

    /// Whether a value is currently present.
    fn initialized(repr: &Self::Repr) -> bool;

    /// Overwrite the representation with a new value.
    ///
    /// On `Optional` storage this transitions the uninitialized state to
    /// initialized.
    fn replace(repr: &mut Self::Repr, value: T);
}

impl<T> Storage<T> for Required {
    type Repr = T;

    #[inline]
    fn store(value: T) -> T {
        value
    }

    #[inline]
    fn get(repr: &T) -> &T {
        repr
    }

    #[inline]
    fn initialized(_: &T) -> bool {
        true
    }

    #[inline]
    fn replace(repr: &mut T, value: T) {
        *repr = value;
    }
}

impl<T> Storage<T> for Optional {
    type Repr = Option<T>;

    #[inline]
    fn store(value: T) -> Option<T> {
        Some(value)
    }

    #[inline]
    #[track_caller]
    fn get(repr: &Option<T>) -> &T {
        match repr {
            Some(value) => value,
            None => panic!("basic_type: value read before initialization"),
        }
    }

    #[inline]
    fn initialized(repr: &Option<T>) -> bool {
        repr.is_some()
    }

    #[inline]
    fn replace(repr: &mut Option<T>, value: T) {
        *repr = Some(value);
    }
}
