//! The naming mixin: a compile-time string literal wrapped as a type.
//!
//! Tags are minted by the `name_tag!` proc macro:
//!
//! ```ignore
//! name_tag!(SomeName = "some_name");
//!
//! type Wrapped = BasicType<String, Optional, Mutable, mixins![Named<SomeName>]>;
//! assert_eq!(Wrapped::new("text1".to_owned()).name(), "some_name");
//! ```

use core::marker::PhantomData;

use crate::compose::{Descriptor, Marker};
use crate::mixin::Holds;
use crate::resolve::Resolve;

/// A type carrying one compile-time name literal.
pub trait NameTag: 'static {
    /// The literal this tag was minted from.
    const NAME: &'static str;
}

/// Naming descriptor: contributes `name()` returning `N::NAME`.
pub struct Named<N>(PhantomData<fn() -> N>);

// A name tag is a leaf by definition (the placeholder cannot carry a name),
// so substitution leaves the parameter in place. Keeping `N` out of a
// projection also lets the compiler infer it when `name()` is called.
impl<W, N> Resolve<W> for Named<N> {
    type Out = Named<N>;
}

impl<T, N> Descriptor<T> for Named<N>
where
    N: NameTag,
{
    type State = Marker<Self>;

    #[inline]
    fn build(_: &T) -> Self::State {
        Marker::new()
    }

    #[inline]
    fn refresh(_: &mut Self::State, _: &T) {}
}

/// Operation contributed by [`Named`].
///
/// The key parameter `K` is inferred from the wrapper's mixin list.
pub trait Name<K> {
    /// The name this wrapper type was composed with, independent of the
    /// stored value.
    fn name(&self) -> &'static str;
}

impl<W, N, I> Name<(N, I)> for W
where
    N: NameTag,
    W: Holds<Named<N>, I>,
{
    #[inline]
    fn name(&self) -> &'static str {
        N::NAME
    }
}
