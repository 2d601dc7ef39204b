//! Procedural macros for the basic-type composable wrapper library
//!
//! | Macro | Target | Purpose |
//! |-------|--------|---------|
//! | `#[derive(Resolve)]` | struct | Structural placeholder substitution |
//! | `#[derive(Stateless)]` | struct | Resolve + zero-state descriptor |
//! | `#[derive(Stateful)]` | struct | Resolve + cached-state descriptor |
//! | `name_tag!{}` | - | Mint a compile-time name literal type |

use proc_macro::TokenStream;
use syn::parse_macro_input;

mod mixin;
mod name_tag;
mod substitute;

/// Derive the structural `Resolve` impl for a mixin or marker type.
///
/// For `struct Foo<A, B>` this generates
///
/// ```ignore
/// impl<__Final, A: Resolve<__Final>, B: Resolve<__Final>> Resolve<__Final> for Foo<A, B> {
///     type Out = Foo<A::Out, B::Out>;
/// }
/// ```
///
/// so the `This` placeholder is replaced wherever it appears in the type's
/// parameter list, however deeply nested, while every other parameter maps
/// through unchanged. A type without parameters maps to itself.
///
/// Inline bounds on a parameter are preserved and also required of the
/// substituted parameter.
#[proc_macro_derive(Resolve)]
pub fn derive_resolve(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as syn::DeriveInput);
    substitute::expand_derive_resolve(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

/// Derive the descriptor impls of a stateless mixin.
///
/// Generates the structural `Resolve` impl plus a `Descriptor` impl whose
/// state is the zero-sized `Marker<Self>`. Methods are attached separately,
/// with `mixin_methods!` or a hand-written extension impl.
///
/// # Usage
/// ```ignore
/// #[derive(Stateless)]
/// struct Prefix<W>(PhantomData<fn() -> W>);
/// ```
#[proc_macro_derive(Stateless)]
pub fn derive_stateless(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as syn::DeriveInput);
    mixin::expand_derive_stateless(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

/// Derive the descriptor impls of a stateful (cached) mixin.
///
/// Generates the structural `Resolve` impl plus a `Descriptor` impl that
/// stores the mixin itself as sub-state, built through `Cache::derive` and
/// refreshed through `Cache::sync`. The mixin must implement `Cache<T>` for
/// the underlying value type it is composed over.
///
/// # Usage
/// ```ignore
/// #[derive(Stateful)]
/// struct CachedPrefix<W> {
///     cached: String,
///     _owner: PhantomData<fn() -> W>,
/// }
///
/// impl<W> Cache<String> for CachedPrefix<W> {
///     fn derive(value: &String) -> Self {
///         CachedPrefix { cached: value.chars().take(6).collect(), _owner: PhantomData }
///     }
/// }
/// ```
#[proc_macro_derive(Stateful)]
pub fn derive_stateful(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as syn::DeriveInput);
    mixin::expand_derive_stateful(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

/// Mint a tag type carrying a compile-time name literal.
///
/// # Usage
/// ```ignore
/// name_tag!(SomeName = "some_name");
///
/// type Wrapped = BasicType<String, Optional, Mutable, mixins![Named<SomeName>]>;
/// // Wrapped::name() == "some_name" for every instance
/// ```
#[proc_macro]
pub fn name_tag(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as name_tag::NameTagInput);
    name_tag::expand_name_tag(input).into()
}
