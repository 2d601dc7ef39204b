//! Self-reference substitution.
//!
//! A mixin is declared before the wrapper type it will be composed into
//! exists, so its declaration names the final wrapper through the [`This`]
//! placeholder (`Prefix<This>`). During composition every descriptor is
//! passed through [`Resolve`], a structural type-level substitution that
//! rewrites `This` into the concrete wrapper type wherever it occurs —
//! including nested occurrences — and leaves every other type untouched.
//!
//! Three kinds of impls make the substitution total over the types that can
//! appear in a mixin's parameter list:
//!
//! - `This` itself maps to the wrapper (`Out = W`),
//! - leaf types map to themselves ([`resolve_leaf!`]),
//! - type constructors map over their parameters (tuples, `Option`, `Vec`,
//!   `Box`, the descriptor list cells, and user mixins via
//!   `#[derive(Resolve)]`).

/// Placeholder for the final composed wrapper type.
///
/// Written inside a mixin's own parameter list; replaced by the concrete
/// wrapper during composition. Zero runtime cost, zero indirection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct This;

/// Structural substitution of [`This`] by the wrapper type `W`.
pub trait Resolve<W> {
    /// `Self` with every occurrence of `This` replaced by `W`.
    type Out;
}

impl<W> Resolve<W> for This {
    type Out = W;
}

/// Stamp identity [`Resolve`] impls for leaf types.
///
/// A leaf never contains the placeholder, so substitution maps it to itself.
/// Apply this to every marker or payload type used inside a mixin's
/// parameter list that is not itself generic.
#[macro_export]
macro_rules! resolve_leaf {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl<W> $crate::Resolve<W> for $ty {
                type Out = $ty;
            }
        )+
    };
}

resolve_leaf!(
    bool, char, (),
    u8, u16, u32, u64, u128, usize,
    i8, i16, i32, i64, i128, isize,
    f32, f64,
);

#[cfg(feature = "std")]
resolve_leaf!(String);

// Policy markers may show up inside mixin parameter lists; they are leaves.
resolve_leaf!(
    crate::policy::Required,
    crate::policy::Optional,
    crate::policy::Immutable,
    crate::policy::Mutable,
);

// =============================================================================
// Structural impls: map over type constructors
// =============================================================================

impl<W, A> Resolve<W> for Option<A>
where
    A: Resolve<W>,
{
    type Out = Option<A::Out>;
}

#[cfg(feature = "std")]
impl<W, A> Resolve<W> for Vec<A>
where
    A: Resolve<W>,
{
    type Out = Vec<A::Out>;
}

#[cfg(feature = "std")]
impl<W, A> Resolve<W> for Box<A>
where
    A: Resolve<W>,
{
    type Out = Box<A::Out>;
}

impl<W, A> Resolve<W> for (A,)
where
    A: Resolve<W>,
{
    type Out = (A::Out,);
}

impl<W, A, B> Resolve<W> for (A, B)
where
    A: Resolve<W>,
    B: Resolve<W>,
{
    type Out = (A::Out, B::Out);
}

impl<W, A, B, C> Resolve<W> for (A, B, C)
where
    A: Resolve<W>,
    B: Resolve<W>,
    C: Resolve<W>,
{
    type Out = (A::Out, B::Out, C::Out);
}

impl<W, A, B, C, D> Resolve<W> for (A, B, C, D)
where
    A: Resolve<W>,
    B: Resolve<W>,
    C: Resolve<W>,
    D: Resolve<W>,
{
    type Out = (A::Out, B::Out, C::Out, D::Out);
}
