#![cfg_attr(not(feature = "std"), no_std)]

// Feature flags handled:
// - std: default, enables std library (String/Vec/Box leaf substitution impls)

//! # basic-type
//!
//! Strongly-typed value wrappers with compile-time policy and mixin
//! composition.
//!
//! A *basic type* wraps exactly one value of an underlying type `T` so that
//! distinct domain concepts sharing a representation (two different `u64`
//! quantities, say) become distinct nominal types. Behavior is opted into per
//! instantiation: whether the value may be absent, whether it may be
//! replaced, and any number of caller-supplied capability mixins. Everything
//! is resolved at compile time; there is no inheritance, no virtual dispatch
//! and no runtime cost beyond the data the caller asked to store.
//!
//! ## Architecture
//!
//! ```text
//! +-------------------------------------------------------------------+
//! |  Layer 0: Policies & Substitution                                 |
//! |  - Required/Optional, Immutable/Mutable (type-level markers)      |
//! |  - This placeholder, Resolve (structural substitution)            |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Layer 1: Composition Engine                                      |
//! |  - Cons/Nil descriptor lists, Compose (the fold)                  |
//! |  - HCons/HNil state lists, Selector (compile-time retrieval)      |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Layer 2: User API                                                |
//! |  - BasicType, mixins![], tag!, name_tag!, mixin_methods!          |
//! |  - #[derive(Stateless)], #[derive(Stateful)], #[derive(Resolve)]  |
//! +-------------------------------------------------------------------+
//! ```
//!
//! ## Quick Start
//!
//! ```ignore
//! use basic_type::prelude::*;
//!
//! name_tag!(SomeName = "some_name");
//!
//! type Wrapped = BasicType<String, Optional, Mutable, mixins![Named<SomeName>]>;
//!
//! let mut value = Wrapped::default();
//! assert!(!value.initialized());
//!
//! value.set("text1".to_owned());
//! assert_eq!(value.get(), "text1");
//! assert_eq!(value.name(), "some_name");
//! ```
//!
//! Mixins reach back into the not-yet-existing wrapper type through the
//! [`This`] placeholder; the composition engine substitutes the concrete
//! wrapper for it before any state is instantiated (see [`resolve`]).

// Allow `::basic_type` paths emitted by the proc-macros to work inside the
// crate itself
extern crate self as basic_type;

// Re-export paste for the mixin_methods! macro
pub use paste;

// =============================================================================
// Layer 0: Policies & Substitution
// =============================================================================
pub mod policy;
pub mod resolve;

// =============================================================================
// Layer 1: Composition Engine
// =============================================================================
pub mod compose;

// =============================================================================
// Layer 2: User API
// =============================================================================
pub mod basic;
pub mod mixin;

// =============================================================================
// Re-exports at Crate Root
// =============================================================================

pub use basic::BasicType;
pub use compose::{Cache, Compose, Cons, Descriptor, HCons, HNil, Marker, Nil, Selector};
pub use mixin::{Holds, Name, NameTag, Named, Value};
pub use policy::{Immutable, Mutable, Mutation, Optional, Required, Storage};
pub use resolve::{Resolve, This};

// Re-export proc-macros
pub use macros::{Resolve, Stateful, Stateless, name_tag};

// =============================================================================
// Declarative Macros
// =============================================================================

/// Build a descriptor list type from an ordered list of mixins.
///
/// # Usage
/// ```ignore
/// type Extras = mixins![Named<SomeName>, Prefix<This>];
///
/// // Empty list
/// type NoExtras = mixins![];
/// ```
#[macro_export]
macro_rules! mixins {
    () => { $crate::Nil };
    ($head:ty $(, $tail:ty)* $(,)?) => {
        $crate::Cons<$head, $crate::mixins!($($tail),*)>
    };
}

/// Mint inert tag descriptors used purely for nominal distinctness.
///
/// # Usage
/// ```ignore
/// tag! {
///     UserId;
///     pub OrderId;
/// }
///
/// type User = BasicType<u64, Required, Immutable, mixins![UserId]>;
/// type Order = BasicType<u64, Required, Immutable, mixins![OrderId]>;
/// ```
#[macro_export]
macro_rules! tag {
    ($($(#[$meta:meta])* $vis:vis $name:ident;)+) => {
        $(
            $(#[$meta])*
            #[derive(Debug, Clone, Copy, PartialEq, Eq)]
            $vis struct $name;

            impl<W> $crate::Resolve<W> for $name {
                type Out = Self;
            }

            impl<T> $crate::Descriptor<T> for $name {
                type State = $crate::Marker<Self>;

                #[inline]
                fn build(_: &T) -> Self::State {
                    $crate::Marker::new()
                }

                #[inline]
                fn refresh(_: &mut Self::State, _: &T) {}
            }
        )+
    };
}

/// Attach on-demand operations of a stateless mixin to every wrapper that
/// composes it.
///
/// Generates a `<Mixin>Methods` extension trait plus a blanket impl gated on
/// the wrapper both granting value access and holding the mixin. Bodies read
/// the wrapped value through `self.value()`.
///
/// # Usage
/// ```ignore
/// #[derive(Stateless)]
/// struct Prefix<W>(PhantomData<fn() -> W>);
///
/// mixin_methods! {
///     impl Prefix for String {
///         fn prefix(&self) -> String {
///             self.value().chars().take(6).collect()
///         }
///     }
/// }
/// ```
#[macro_export]
macro_rules! mixin_methods {
    (
        impl $mixin:ident for $inner:ty {
            $(
                fn $method:ident(& $slf:ident $(, $arg:ident : $aty:ty)*) $(-> $ret:ty)? $body:block
            )+
        }
    ) => {
        $crate::paste::paste! {
            pub trait [<$mixin Methods>]<__K> {
                $(
                    fn $method(&self $(, $arg: $aty)*) $(-> $ret)?;
                )+
            }

            impl<__W, __I> [<$mixin Methods>]<__I> for __W
            where
                __W: $crate::Value<Inner = $inner>
                    + $crate::Holds<$mixin<$crate::This>, __I>,
            {
                $(
                    fn $method(& $slf $(, $arg: $aty)*) $(-> $ret)? $body
                )+
            }
        }
    };
}

/// Common items for composing basic types.
pub mod prelude {
    pub use crate::basic::BasicType;
    pub use crate::compose::{Cache, Descriptor, Marker};
    pub use crate::mixin::{Holds, Name, NameTag, Named, Value};
    pub use crate::policy::{Immutable, Mutable, Optional, Required};
    pub use crate::resolve::{Resolve, This};
    pub use macros::{Resolve, Stateful, Stateless, name_tag};
    // Note: mixins!, tag!, mixin_methods! and resolve_leaf! are
    // #[macro_export] so they're at crate root
}
