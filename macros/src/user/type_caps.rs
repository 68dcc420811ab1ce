//! `#[derive(TypeCaps)]` expansion.

use proc_macro2::TokenStream;
use quote::quote;
use syn::DeriveInput;

/// Expand `#[derive(TypeCaps)]` into an `impl_type_caps!` call.
///
/// The detection probes answer for one concrete type, so generic items are
/// rejected with a pointer to a hand-written impl.
pub fn expand_derive_type_caps(input: DeriveInput) -> TokenStream {
    if !input.generics.params.is_empty() {
        return syn::Error::new_spanned(
            &input.generics,
            "#[derive(TypeCaps)] supports only non-generic types; implement `TypeCaps` by composing the parameters' answers",
        )
        .to_compile_error();
    }

    let name = &input.ident;
    quote! {
        ::tola_util::impl_type_caps!(#name);
    }
}
