//! Procedural macros for tola-util capability queries
//!
//! | Macro | Target | Purpose |
//! |-------|--------|---------|
//! | `caps_check!` | - | Boolean capability query on a type |
//! | `#[derive(TypeCaps)]` | struct/enum | Register a type in the capability table |

use proc_macro::TokenStream;
use syn::parse_macro_input;

mod common;
mod user;

/// Check capabilities of a type at compile time.
///
/// # Syntax: `caps_check!(Type: Expr, ...)`
///
/// Supports `&`, `|`, `!` and parentheses. Several clauses are ANDed.
///
/// Built-in capabilities (`Default`, `Clone`, `Copy`, `Debug`, `PartialEq`,
/// `PartialOrd`, `Pair`) are read from the `TypeCaps` table, so they also
/// work on generic parameters bounded by `TypeCaps`. Any other trait is
/// probed directly and needs a concrete type.
///
/// ```ignore
/// use tola_util::caps_check;
///
/// assert!(caps_check!(String: Clone & !Copy));
/// assert!(caps_check!(i32: (Clone | Copy) & Debug, u8: Default));
///
/// fn both<T: TypeCaps>() -> bool {
///     caps_check!(T: Clone & Default)
/// }
/// ```
#[proc_macro]
pub fn caps_check(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as user::CapsCheckInput);
    user::expand_caps_check(input).into()
}

/// Implement `TypeCaps` for a non-generic type.
///
/// ```ignore
/// #[derive(Clone, Debug, TypeCaps)]
/// struct Token(u32);
///
/// assert!(caps_check!(Token: Clone & !Default));
/// ```
#[proc_macro_derive(TypeCaps)]
pub fn derive_type_caps(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as syn::DeriveInput);
    user::expand_derive_type_caps(input).into()
}
