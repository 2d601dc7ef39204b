//! The composed wrapper type.

use core::fmt;
use core::marker::PhantomData;

use crate::compose::{Compose, Descriptor, Nil, Selector};
use crate::mixin::{Holds, Value};
use crate::policy::{Immutable, Mutable, Mutation, Required, Storage};
use crate::resolve::Resolve;

/// A strongly-typed wrapper around one value of `T`, composed at the type
/// level from a storage policy `S`, a mutation policy `M` and an ordered
/// descriptor list `X`.
///
/// Distinct instantiations are distinct nominal types even when `T` is
/// shared, so two `u64` quantities tagged differently cannot be confused:
///
/// ```ignore
/// tag! { UserId; OrderId; }
///
/// type User = BasicType<u64, Required, Immutable, mixins![UserId]>;
/// type Order = BasicType<u64, Required, Immutable, mixins![OrderId]>;
/// ```
///
/// The descriptor list may name the final wrapper type through the
/// [`This`](crate::This) placeholder; composition substitutes it before any
/// state is instantiated.
pub struct BasicType<T, S = Required, M = Immutable, X = Nil>
where
    S: Storage<T>,
    M: Mutation,
    X: Compose<T, BasicType<T, S, M, X>>,
{
    repr: S::Repr,
    extras: <X as Compose<T, BasicType<T, S, M, X>>>::State,
    _mutation: PhantomData<M>,
}

impl<T, S, M, X> BasicType<T, S, M, X>
where
    S: Storage<T>,
    M: Mutation,
    X: Compose<T, Self>,
{
    /// Construct from a value.
    ///
    /// Every stateful mixin derives its sub-state from `value` exactly once,
    /// before the value moves into storage.
    pub fn new(value: T) -> Self {
        let extras = X::build(&value);
        BasicType {
            repr: S::store(value),
            extras,
            _mutation: PhantomData,
        }
    }

    /// Borrow the wrapped value.
    ///
    /// On an uninitialized `Optional` wrapper this is a precondition
    /// violation and panics; check [`initialized`](Self::initialized) first.
    #[inline]
    #[track_caller]
    pub fn get(&self) -> &T {
        S::get(&self.repr)
    }

    /// Whether a value is present. Constant `true` under `Required` storage.
    #[inline]
    pub fn initialized(&self) -> bool {
        S::initialized(&self.repr)
    }
}

impl<T, S, X> BasicType<T, S, Mutable, X>
where
    S: Storage<T>,
    X: Compose<T, Self>,
{
    /// Replace the wrapped value.
    ///
    /// Marks `Optional` storage initialized, then refreshes every mixin
    /// sub-state against the new value, exactly once each.
    pub fn set(&mut self, value: T) {
        S::replace(&mut self.repr, value);
        X::refresh(&mut self.extras, S::get(&self.repr));
    }
}

/// Default construction.
///
/// Legal when the storage representation is defaultable — always for
/// `Optional`, and for `Required` exactly when `T: Default` — and when every
/// composed sub-state is defaultable. Anything else is rejected at compile
/// time.
impl<T, S, M, X> Default for BasicType<T, S, M, X>
where
    S: Storage<T>,
    M: Mutation,
    X: Compose<T, Self>,
    S::Repr: Default,
    X::State: Default,
{
    fn default() -> Self {
        BasicType {
            repr: Default::default(),
            extras: Default::default(),
            _mutation: PhantomData,
        }
    }
}

impl<T, S, M, X> Value for BasicType<T, S, M, X>
where
    S: Storage<T>,
    M: Mutation,
    X: Compose<T, Self>,
{
    type Inner = T;

    #[inline]
    #[track_caller]
    fn value(&self) -> &T {
        S::get(&self.repr)
    }
}

/// State retrieval for a descriptor written with the placeholder still in
/// place: `D` is resolved against this wrapper, then its state is found in
/// the composed state list by type.
impl<T, S, M, X, D, I> Holds<D, I> for BasicType<T, S, M, X>
where
    S: Storage<T>,
    M: Mutation,
    X: Compose<T, Self>,
    D: Resolve<Self>,
    D::Out: Descriptor<T>,
    X::State: Selector<<D::Out as Descriptor<T>>::State, I>,
{
    type State = <D::Out as Descriptor<T>>::State;

    #[inline]
    fn state(&self) -> &Self::State {
        self.extras.select()
    }

    #[inline]
    fn state_mut(&mut self) -> &mut Self::State {
        self.extras.select_mut()
    }
}

// =============================================================================
// Value-type operators over the full composed state
// =============================================================================

impl<T, S, M, X> Clone for BasicType<T, S, M, X>
where
    S: Storage<T>,
    M: Mutation,
    X: Compose<T, Self>,
    S::Repr: Clone,
    X::State: Clone,
{
    fn clone(&self) -> Self {
        BasicType {
            repr: self.repr.clone(),
            extras: self.extras.clone(),
            _mutation: PhantomData,
        }
    }
}

impl<T, S, M, X> PartialEq for BasicType<T, S, M, X>
where
    S: Storage<T>,
    M: Mutation,
    X: Compose<T, Self>,
    S::Repr: PartialEq,
    X::State: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.repr == other.repr && self.extras == other.extras
    }
}

impl<T, S, M, X> Eq for BasicType<T, S, M, X>
where
    S: Storage<T>,
    M: Mutation,
    X: Compose<T, Self>,
    S::Repr: Eq,
    X::State: Eq,
{
}

impl<T, S, M, X> fmt::Debug for BasicType<T, S, M, X>
where
    S: Storage<T>,
    M: Mutation,
    X: Compose<T, Self>,
    S::Repr: fmt::Debug,
    X::State: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BasicType")
            .field("value", &self.repr)
            .field("extras", &self.extras)
            .finish()
    }
}
