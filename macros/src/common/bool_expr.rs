// Boolean expression parsing and code generation for capability checks

use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use syn::{
    parse::{Parse, ParseStream},
    Token, Type,
};

// =============================================================================
// Boolean Expression AST
// =============================================================================

#[derive(Clone, Debug)]
pub enum BoolExpr {
    Cap(Type),
    And(Box<BoolExpr>, Box<BoolExpr>),
    Or(Box<BoolExpr>, Box<BoolExpr>),
    Not(Box<BoolExpr>),
}

impl Parse for BoolExpr {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        parse_or(input)
    }
}

// Recursive descent parser: Or -> And -> Unary -> Primary

fn parse_or(input: ParseStream) -> syn::Result<BoolExpr> {
    let mut lhs = parse_and(input)?;

    while input.peek(Token![|]) {
        input.parse::<Token![|]>()?;
        let rhs = parse_and(input)?;
        lhs = BoolExpr::Or(Box::new(lhs), Box::new(rhs));
    }
    Ok(lhs)
}

fn parse_and(input: ParseStream) -> syn::Result<BoolExpr> {
    let mut lhs = parse_unary(input)?;

    while input.peek(Token![&]) {
        input.parse::<Token![&]>()?;
        let rhs = parse_unary(input)?;
        lhs = BoolExpr::And(Box::new(lhs), Box::new(rhs));
    }
    Ok(lhs)
}

fn parse_unary(input: ParseStream) -> syn::Result<BoolExpr> {
    if input.peek(Token![!]) {
        input.parse::<Token![!]>()?;
        let operand = parse_unary(input)?;
        Ok(BoolExpr::Not(Box::new(operand)))
    } else {
        parse_primary(input)
    }
}

fn parse_primary(input: ParseStream) -> syn::Result<BoolExpr> {
    if input.peek(syn::token::Paren) {
        let content;
        syn::parenthesized!(content in input);
        content.parse()
    } else {
        let ty: Type = input.parse()?;
        Ok(BoolExpr::Cap(ty))
    }
}

// =============================================================================
// Built-in Capabilities
// =============================================================================

/// Capabilities answered by the `TypeCaps` table.
///
/// (name in the expression, `IS_*` const, trait probed for types without
/// a `TypeCaps` impl)
const BUILTIN_CAPS: &[(&str, &str, &str)] = &[
    ("Default", "IS_DEFAULT", "::core::default::Default"),
    ("Clone", "IS_CLONE", "::core::clone::Clone"),
    ("Copy", "IS_COPY", "::core::marker::Copy"),
    ("Debug", "IS_DEBUG", "::core::fmt::Debug"),
    ("PartialEq", "IS_PARTIAL_EQ", "::core::cmp::PartialEq"),
    ("PartialOrd", "IS_PARTIAL_ORD", "::core::cmp::PartialOrd"),
    ("Pair", "IS_PAIR", "::tola_util::pair::PairType"),
];

fn builtin(ty: &Type) -> Option<&'static (&'static str, &'static str, &'static str)> {
    let name = quote!(#ty).to_string();
    BUILTIN_CAPS.iter().find(|(cap, _, _)| *cap == name)
}

/// Check if an expression contains ONLY built-in capabilities
fn is_all_builtin(expr: &BoolExpr) -> bool {
    match expr {
        BoolExpr::Cap(ty) => builtin(ty).is_some(),
        BoolExpr::And(lhs, rhs) | BoolExpr::Or(lhs, rhs) => is_all_builtin(lhs) && is_all_builtin(rhs),
        BoolExpr::Not(operand) => is_all_builtin(operand),
    }
}

// =============================================================================
// Unified caps_check! Implementation (Autoref Fallback)
// =============================================================================

/// Generate check code for one `Type: Expr` clause.
///
/// Built-in capabilities only:
///   Autoref dispatch: inherent method on `Wrapper<T>` where `T: TypeCaps`
///   (reads the table, works for generic `T`) beats the trait method on
///   `&Wrapper<T>` (probes the trait directly, concrete types only).
///
/// Any custom trait in the expression:
///   Probe pattern on the concrete type for every atom.
pub fn generate_unified_check(expr: &BoolExpr, ty: &Type) -> TokenStream {
    if !is_all_builtin(expr) {
        let probe_body = generate_probe_body(expr, &quote!(#ty));
        return quote! {
            {
                let _ = ::core::marker::PhantomData::<#ty>;
                #probe_body
            }
        };
    }

    let wrapped = quote!(__T);
    let probe_body = generate_probe_body(expr, &wrapped);
    let table_body = generate_table_body(expr, &wrapped);

    quote! {
        {
            struct __Wrapper<__T: ?Sized>(::core::marker::PhantomData<__T>);

            // Low priority: trait method on &Wrapper<T>, used when T has no TypeCaps
            #[allow(dead_code)]
            trait __Fallback { fn __check(&self) -> bool; }
            impl<__T: ?Sized> __Fallback for &__Wrapper<__T> {
                #[inline]
                fn __check(&self) -> bool { #probe_body }
            }

            // High priority: inherent method on Wrapper<T> where T: TypeCaps
            impl<__T: ?Sized + ::tola_util::detect::TypeCaps> __Wrapper<__T> {
                #[allow(dead_code)]
                #[inline]
                fn __check(&self) -> bool { #table_body }
            }

            (&__Wrapper::<#ty>(::core::marker::PhantomData)).__check()
        }
    }
}

/// Read every atom from the `TypeCaps` table of `ty`.
fn generate_table_body(expr: &BoolExpr, ty: &TokenStream) -> TokenStream {
    match expr {
        BoolExpr::Cap(cap) => {
            let (_, const_name, _) = builtin(cap).expect("table body is only built for built-in capabilities");
            let const_ident = format_ident!("{}", const_name);
            quote! { <#ty as ::tola_util::detect::TypeCaps>::#const_ident }
        }
        BoolExpr::And(lhs, rhs) => {
            let l = generate_table_body(lhs, ty);
            let r = generate_table_body(rhs, ty);
            quote! { (#l && #r) }
        }
        BoolExpr::Or(lhs, rhs) => {
            let l = generate_table_body(lhs, ty);
            let r = generate_table_body(rhs, ty);
            quote! { (#l || #r) }
        }
        BoolExpr::Not(operand) => {
            let o = generate_table_body(operand, ty);
            quote! { (!#o) }
        }
    }
}

/// Generate Probe-based check body (for any trait)
fn generate_probe_body(expr: &BoolExpr, ty: &TokenStream) -> TokenStream {
    match expr {
        BoolExpr::Cap(cap) => match builtin(cap) {
            Some((_, _, path)) => {
                let trait_path: syn::Path = syn::parse_str(path).expect("built-in trait paths are valid");
                generate_single_probe(&quote!(#trait_path), ty)
            }
            None => generate_single_probe(&quote!(#cap), ty),
        },
        BoolExpr::And(lhs, rhs) => {
            let l = generate_probe_body(lhs, ty);
            let r = generate_probe_body(rhs, ty);
            quote! { (#l && #r) }
        }
        BoolExpr::Or(lhs, rhs) => {
            let l = generate_probe_body(lhs, ty);
            let r = generate_probe_body(rhs, ty);
            quote! { (#l || #r) }
        }
        BoolExpr::Not(operand) => {
            let o = generate_probe_body(operand, ty);
            quote! { (!#o) }
        }
    }
}

/// Generate a single probe check for one trait
fn generate_single_probe(trait_path: &TokenStream, ty: &TokenStream) -> TokenStream {
    quote! {
        {
            #[allow(dead_code)]
            trait __ProbeFallback { const VAL: bool = false; }
            struct __Probe<X: ?Sized>(::core::marker::PhantomData<X>);
            impl<X: ?Sized> __ProbeFallback for __Probe<X> {}
            impl<X: ?Sized + #trait_path> __Probe<X> {
                #[allow(dead_code)]
                const VAL: bool = true;
            }
            __Probe::<#ty>::VAL
        }
    }
}
