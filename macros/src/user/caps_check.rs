//! `caps_check!` expansion.

use proc_macro2::TokenStream;
use quote::quote;
use syn::parse::{Parse, ParseStream};

use crate::common::{generate_unified_check, parse_comma_separated, TypeCheck};

/// `Type: Expr, Type: Expr, ...` (at least one clause)
pub struct CapsCheckInput {
    checks: Vec<TypeCheck>,
}

impl Parse for CapsCheckInput {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let checks: Vec<TypeCheck> = parse_comma_separated(input)?;
        if checks.is_empty() {
            return Err(input.error("expected at least one `Type: Capability` clause"));
        }
        Ok(CapsCheckInput { checks })
    }
}

pub fn expand_caps_check(input: CapsCheckInput) -> TokenStream {
    // Reference user's types before internal items to avoid unused import warnings
    let type_refs = input.checks.iter().map(|c| {
        let ty = &c.ty;
        quote! { __use_type::<#ty>(::core::marker::PhantomData); }
    });
    let check_exprs = input
        .checks
        .iter()
        .map(|c| generate_unified_check(&c.expr, &c.ty));

    quote! {
        {
            fn __use_type<__U: ?Sized>(_: ::core::marker::PhantomData<__U>) {}
            #(#type_refs)*
            true #(&& #check_exprs)*
        }
    }
}
