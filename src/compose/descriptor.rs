//! Descriptor contract: what one composed entry contributes.

use core::fmt;
use core::marker::PhantomData;

use crate::resolve::Resolve;

/// One entry of a wrapper's composed state.
///
/// Implemented by *resolved* descriptors (placeholders already substituted).
/// `T` is the wrapper's underlying value type.
///
/// The wrapper guarantees `build` runs exactly once per mixin at
/// construction, and `refresh` exactly once per `set`, after the base value
/// was updated — so the descriptor always observes the new value.
pub trait Descriptor<T> {
    /// The sub-state this entry owns inside the wrapper.
    type State;

    /// Construct the sub-state from the wrapper's construction argument.
    fn build(value: &T) -> Self::State;

    /// Re-synchronize the sub-state after the wrapped value changed.
    fn refresh(state: &mut Self::State, value: &T);
}

/// Author-side contract of a stateful (cached) mixin.
///
/// Implement this for the mixin struct and attach `#[derive(Stateful)]`;
/// the derive turns it into a [`Descriptor`] that stores the mixin itself
/// as sub-state.
pub trait Cache<T>: Sized {
    /// Derive the cached state from the current value.
    fn derive(value: &T) -> Self;

    /// Re-derive after a mutation. Defaults to a full rebuild.
    #[inline]
    fn sync(&mut self, value: &T) {
        *self = Self::derive(value);
    }
}

/// Zero-sized sub-state of a stateless descriptor.
///
/// Keyed by the resolved descriptor type `D` so that state lookup through
/// [`Selector`](crate::compose::Selector) stays unambiguous when several
/// stateless mixins are composed into one wrapper.
pub struct Marker<D>(PhantomData<fn() -> D>);

impl<D> Marker<D> {
    /// The single value of this state.
    #[inline]
    pub const fn new() -> Self {
        Marker(PhantomData)
    }
}

impl<D> Default for Marker<D> {
    #[inline]
    fn default() -> Self {
        Marker::new()
    }
}

impl<D> Clone for Marker<D> {
    #[inline]
    fn clone(&self) -> Self {
        Marker::new()
    }
}

impl<D> Copy for Marker<D> {}

impl<D> PartialEq for Marker<D> {
    #[inline]
    fn eq(&self, _: &Self) -> bool {
        true
    }
}

impl<D> Eq for Marker<D> {}

impl<D> fmt::Debug for Marker<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Marker")
    }
}

impl<W, D> Resolve<W> for Marker<D>
where
    D: Resolve<W>,
{
    type Out = Marker<D::Out>;
}
