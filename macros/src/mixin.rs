//! Descriptor impl generation for stateless and stateful mixins.

use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::DeriveInput;

use crate::substitute;

/// Impl generics for the `Descriptor<__T>` impl: the value type plus the
/// mixin's own parameters with their inline bounds.
fn descriptor_params(params: &[&syn::TypeParam]) -> Vec<TokenStream2> {
    params
        .iter()
        .map(|p| {
            let id = &p.ident;
            let bounds = &p.bounds;
            if bounds.is_empty() {
                quote!(#id)
            } else {
                quote!(#id: #bounds)
            }
        })
        .collect()
}

pub fn expand_derive_stateless(input: &DeriveInput) -> syn::Result<TokenStream2> {
    let resolve = substitute::expand_derive_resolve(input)?;
    let params = substitute::type_params(input)?;
    let self_ty = substitute::self_ty(input, &params);
    let impl_params = descriptor_params(&params);
    let carried = substitute::carried_predicates(input);

    Ok(quote! {
        #resolve

        impl<__T, #(#impl_params),*> ::basic_type::Descriptor<__T> for #self_ty
        where
            #(#carried,)*
        {
            type State = ::basic_type::Marker<Self>;

            #[inline]
            fn build(_value: &__T) -> Self::State {
                ::basic_type::Marker::new()
            }

            #[inline]
            fn refresh(_state: &mut Self::State, _value: &__T) {}
        }
    })
}

pub fn expand_derive_stateful(input: &DeriveInput) -> syn::Result<TokenStream2> {
    let resolve = substitute::expand_derive_resolve(input)?;
    let params = substitute::type_params(input)?;
    let self_ty = substitute::self_ty(input, &params);
    let impl_params = descriptor_params(&params);
    let carried = substitute::carried_predicates(input);

    Ok(quote! {
        #resolve

        impl<__T, #(#impl_params),*> ::basic_type::Descriptor<__T> for #self_ty
        where
            Self: ::basic_type::Cache<__T>,
            #(#carried,)*
        {
            type State = Self;

            #[inline]
            fn build(value: &__T) -> Self::State {
                <Self as ::basic_type::Cache<__T>>::derive(value)
            }

            #[inline]
            fn refresh(state: &mut Self::State, value: &__T) {
                <Self as ::basic_type::Cache<__T>>::sync(state, value);
            }
        }
    })
}
