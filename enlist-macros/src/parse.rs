pub mod chain;
pub mod derive;
pub mod entry;
pub mod impl_;

use proc_macro2::TokenStream;
use syn::{parse2, DeriveInput};

pub fn chain(input: TokenStream) -> syn::Result<chain::Chain> {
    parse2(input)
}

pub fn derive(item: TokenStream) -> syn::Result<derive::Output> {
    parse2::<DeriveInput>(item).and_then(TryInto::try_into)
}
