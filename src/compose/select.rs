//! Compile-time retrieval of one sub-state out of the composed state list.

use core::marker::PhantomData;

use crate::compose::chain::HCons;

/// Index: the state sits at the head of the list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Here;

/// Index: the state sits somewhere in the tail.
pub struct There<I>(PhantomData<fn() -> I>);

/// Type-directed search for a sub-state of type `S` at index `I`.
///
/// The index parameter is never written by callers; the compiler infers it,
/// which is also what makes a duplicated descriptor a compile-time ambiguity
/// instead of a silent pick.
pub trait Selector<S, I> {
    fn select(&self) -> &S;
    fn select_mut(&mut self) -> &mut S;
}

impl<S, Tail> Selector<S, Here> for HCons<S, Tail> {
    #[inline]
    fn select(&self) -> &S {
        &self.head
    }

    #[inline]
    fn select_mut(&mut self) -> &mut S {
        &mut self.head
    }
}

impl<Head, S, Tail, I> Selector<S, There<I>> for HCons<Head, Tail>
where
    Tail: Selector<S, I>,
{
    #[inline]
    fn select(&self) -> &S {
        self.tail.select()
    }

    #[inline]
    fn select_mut(&mut self) -> &mut S {
        self.tail.select_mut()
    }
}
