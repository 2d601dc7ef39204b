//! Mixin-facing contracts.
//!
//! A capability mixin contributes named operations (and optionally cached
//! sub-state) to a composed wrapper. Mixins reach back into the wrapper
//! through two narrow traits:
//!
//! - [`Value`] — read access to the wrapped value, for stateless mixins that
//!   compute their results on demand,
//! - [`Holds`] — typed access to one mixin's own sub-state, for stateful
//!   mixins.
//!
//! Extension-trait impls gated on these bounds are how a mixin's operations
//! land on the wrapper. Two mixins may contribute the same operation name;
//! calling it through the bare name is then a compile-time ambiguity, and
//! callers disambiguate with fully-qualified syntax.

pub mod name;

pub use name::{Name, NameTag, Named};

/// Read access to the wrapped value, as seen from a mixin.
///
/// Implemented by every composed wrapper. Shares the storage policy's `get`
/// contract: reading an uninitialized `Optional` wrapper fails fast.
pub trait Value {
    /// The underlying value type.
    type Inner;

    /// Borrow the current value.
    fn value(&self) -> &Self::Inner;
}

/// Typed access to the sub-state contributed by descriptor `D`.
///
/// `D` is the descriptor *as written* in the wrapper's mixin list, with the
/// [`This`](crate::This) placeholder still in place; the impl resolves it
/// against the concrete wrapper. The index `I` is inferred.
pub trait Holds<D, I> {
    /// The stored sub-state of the resolved descriptor.
    type State;

    fn state(&self) -> &Self::State;
    fn state_mut(&mut self) -> &mut Self::State;
}
