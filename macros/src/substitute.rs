//! Shared builder for structural `Resolve` impls.

use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{DeriveInput, GenericParam, TypeParam};

/// Collect the type parameters of the input, rejecting parameter kinds the
/// substitution cannot map over.
pub fn type_params(input: &DeriveInput) -> syn::Result<Vec<&TypeParam>> {
    let mut params = Vec::new();
    for param in &input.generics.params {
        match param {
            GenericParam::Type(tp) => params.push(tp),
            GenericParam::Lifetime(lt) => {
                return Err(syn::Error::new_spanned(
                    lt,
                    "mixin types with lifetime parameters are not supported",
                ));
            }
            GenericParam::Const(cp) => {
                return Err(syn::Error::new_spanned(
                    cp,
                    "mixin types with const parameters are not supported",
                ));
            }
        }
    }
    Ok(params)
}

/// `Foo` or `Foo<A, B>` depending on arity.
pub fn self_ty(input: &DeriveInput, params: &[&TypeParam]) -> TokenStream2 {
    let ident = &input.ident;
    if params.is_empty() {
        quote!(#ident)
    } else {
        let idents = params.iter().map(|p| &p.ident);
        quote!(#ident<#(#idents),*>)
    }
}

/// Original where-clause predicates of the struct, to be carried onto every
/// generated impl.
pub fn carried_predicates(input: &DeriveInput) -> Vec<TokenStream2> {
    match &input.generics.where_clause {
        Some(clause) => clause.predicates.iter().map(|p| quote!(#p)).collect(),
        None => Vec::new(),
    }
}

/// Build the `impl Resolve` for the input type.
pub fn expand_derive_resolve(input: &DeriveInput) -> syn::Result<TokenStream2> {
    let params = type_params(input)?;
    let ident = &input.ident;
    let carried = carried_predicates(input);

    if params.is_empty() {
        // A parameterless type cannot contain the placeholder: identity.
        return Ok(quote! {
            impl<__Final> ::basic_type::Resolve<__Final> for #ident {
                type Out = Self;
            }
        });
    }

    let self_ty = self_ty(input, &params);

    // Each parameter keeps its inline bounds and additionally resolves.
    let impl_params = params.iter().map(|p| {
        let id = &p.ident;
        let bounds = &p.bounds;
        if bounds.is_empty() {
            quote!(#id: ::basic_type::Resolve<__Final>)
        } else {
            quote!(#id: #bounds + ::basic_type::Resolve<__Final>)
        }
    });

    // The substituted parameter must satisfy the same inline bounds.
    let out_bounds = params.iter().filter(|p| !p.bounds.is_empty()).map(|p| {
        let id = &p.ident;
        let bounds = &p.bounds;
        quote!(<#id as ::basic_type::Resolve<__Final>>::Out: #bounds)
    });

    let out_args = params.iter().map(|p| {
        let id = &p.ident;
        quote!(<#id as ::basic_type::Resolve<__Final>>::Out)
    });

    Ok(quote! {
        impl<__Final, #(#impl_params),*> ::basic_type::Resolve<__Final> for #self_ty
        where
            #(#out_bounds,)*
            #(#carried,)*
        {
            type Out = #ident<#(#out_args),*>;
        }
    })
}
