//! The capability folding engine.
//!
//! A wrapper is configured with an ordered, type-level list of descriptors
//! (`mixins![Named<N>, Prefix<This>, ..]`). Composition walks the list
//! left-to-right in two passes:
//!
//! 1. **Resolve**: each descriptor is rewritten through
//!    [`Resolve`](crate::Resolve), replacing the [`This`](crate::This)
//!    placeholder by the final wrapper type.
//! 2. **Instantiate**: the resolved descriptor contributes its state through
//!    [`Descriptor`], and the states are concatenated into one value-level
//!    list owned by the wrapper.
//!
//! State retrieval back out of the list is a compile-time search
//! ([`Selector`]) indexed by `Here`/`There`, so access to any mixin's
//! sub-state costs a field projection and nothing else.

pub mod chain;
pub mod descriptor;
pub mod select;

pub use chain::{Compose, Cons, HCons, HNil, Nil};
pub use descriptor::{Cache, Descriptor, Marker};
pub use select::{Here, Selector, There};
