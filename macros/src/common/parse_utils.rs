//! Common parsing utilities

use syn::{
    parse::{Parse, ParseStream},
    punctuated::Punctuated,
    Token, Type,
};

use super::BoolExpr;

// =============================================================================
// Type Constraint Parsing: `Type: Expr`
// =============================================================================

/// A single type constraint: `Type: BoolExpr`
///
/// Used in `caps_check!(String: Clone & !Copy, u8: Default)`.
pub struct TypeCheck {
    pub ty: Type,
    pub expr: BoolExpr,
}

impl Parse for TypeCheck {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let ty: Type = input.parse()?;
        input.parse::<Token![:]>()?;
        let expr: BoolExpr = input.parse()?;
        Ok(TypeCheck { ty, expr })
    }
}

// =============================================================================
// Comma-separated List Parsing
// =============================================================================

/// Parse a comma-separated list of items (trailing comma allowed)
pub fn parse_comma_separated<T: Parse>(input: ParseStream) -> syn::Result<Vec<T>> {
    let items = Punctuated::<T, Token![,]>::parse_terminated(input)?;
    Ok(items.into_iter().collect())
}
