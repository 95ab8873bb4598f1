mod expand;
mod parse;
mod utils;

use proc_macro::TokenStream;
use syn::Error;

fn finish(output: syn::Result<proc_macro2::TokenStream>) -> TokenStream {
    let output = output.unwrap_or_else(Error::into_compile_error);
    #[cfg(feature = "debug")]
    utils::debug(output.clone()).unwrap();
    output.into()
}

#[proc_macro]
pub fn enlist(input: TokenStream) -> TokenStream {
    finish(parse::chain(input.into()).map(expand::chain))
}

#[proc_macro_derive(FromArgs, attributes(enlist))]
pub fn derive_from_args(item: TokenStream) -> TokenStream {
    finish(parse::derive(item.into()).map(expand::derive))
}

#[proc_macro_attribute]
pub fn impl_from_args(attr: TokenStream, item: TokenStream) -> TokenStream {
    finish(parse::impl_::parse(attr.into(), item.into()).map(expand::impl_))
}
