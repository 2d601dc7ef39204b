//! `name_tag!` expansion.

use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::parse::{Parse, ParseStream};

/// `[vis] Ident = "literal"`
pub struct NameTagInput {
    vis: syn::Visibility,
    ident: syn::Ident,
    literal: syn::LitStr,
}

impl Parse for NameTagInput {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let vis: syn::Visibility = input.parse()?;
        let ident: syn::Ident = input.parse()?;
        input.parse::<syn::Token![=]>()?;
        let literal: syn::LitStr = input.parse()?;
        Ok(NameTagInput {
            vis,
            ident,
            literal,
        })
    }
}

pub fn expand_name_tag(input: NameTagInput) -> TokenStream2 {
    let NameTagInput {
        vis,
        ident,
        literal,
    } = input;

    quote! {
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        #vis struct #ident;

        impl ::basic_type::NameTag for #ident {
            const NAME: &'static str = #literal;
        }

        impl<__Final> ::basic_type::Resolve<__Final> for #ident {
            type Out = Self;
        }
    }
}
