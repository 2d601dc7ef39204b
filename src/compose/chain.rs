//! Descriptor lists and the composition fold.

use core::marker::PhantomData;

use crate::compose::descriptor::Descriptor;
use crate::resolve::Resolve;

// =============================================================================
// Type-level descriptor list (what the caller writes)
// =============================================================================

/// Empty descriptor list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Nil;

/// Descriptor list cell. Built by the `mixins![..]` macro; never instantiated.
pub struct Cons<H, T>(PhantomData<fn() -> (H, T)>);

impl<W> Resolve<W> for Nil {
    type Out = Nil;
}

impl<W, H, T> Resolve<W> for Cons<H, T>
where
    H: Resolve<W>,
    T: Resolve<W>,
{
    type Out = Cons<H::Out, T::Out>;
}

// =============================================================================
// Value-level state list (what the wrapper owns)
// =============================================================================

/// Empty state list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HNil;

/// State list cell holding one mixin's sub-state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HCons<H, T> {
    pub head: H,
    pub tail: T,
}

// =============================================================================
// The fold
// =============================================================================

/// Left-to-right fold of a descriptor list into one composed state.
///
/// `W` is the final wrapper type; each descriptor is resolved against it
/// before instantiation, which is what lets a descriptor be written in terms
/// of the [`This`](crate::This) placeholder.
pub trait Compose<T, W> {
    /// Concatenated sub-states, in list order.
    type State;

    /// Build every sub-state from the construction argument, once each.
    fn build(value: &T) -> Self::State;

    /// Refresh every sub-state against the (already updated) value,
    /// once each per call.
    fn refresh(state: &mut Self::State, value: &T);
}

impl<T, W> Compose<T, W> for Nil {
    type State = HNil;

    #[inline]
    fn build(_: &T) -> HNil {
        HNil
    }

    #[inline]
    fn refresh(_: &mut HNil, _: &T) {}
}

impl<T, W, D, Rest> Compose<T, W> for Cons<D, Rest>
where
    D: Resolve<W>,
    D::Out: Descriptor<T>,
    Rest: Compose<T, W>,
{
    type State = HCons<<D::Out as Descriptor<T>>::State, Rest::State>;

    #[inline]
    fn build(value: &T) -> Self::State {
        HCons {
            head: <D::Out as Descriptor<T>>::build(value),
            tail: Rest::build(value),
        }
    }

    #[inline]
    fn refresh(state: &mut Self::State, value: &T) {
        <D::Out as Descriptor<T>>::refresh(&mut state.head, value);
        Rest::refresh(&mut state.tail, value);
    }
}
