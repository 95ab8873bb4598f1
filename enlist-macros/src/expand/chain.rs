use crate::parse::{chain::Chain, entry::Entry};
use proc_macro2::TokenStream;
use quote::{format_ident, quote};

fn call(entry: &Entry) -> TokenStream {
    match entry {
        Entry::Put(value) => quote! { .put(#value) },
        Entry::Default => quote! { .put_default() },
        Entry::Args(args) => quote! { .args(#args) },
        Entry::Repeat { count, value } => quote! { .repeat(#count, #value) },
        Entry::RepeatFun { count, fun } => quote! { .repeat_fun(#count, #fun) },
        Entry::RepeatFromTo {
            from,
            to,
            step: None,
        } => quote! { .repeat_from_to(#from, #to) },
        Entry::RepeatFromTo {
            from,
            to,
            step: Some(step),
        } => quote! { .repeat_from_to_by(#from, #to, #step) },
        Entry::Extend(iter) => quote! { .extend(#iter) },
        Entry::Feed(directive) => quote! { .feed(#directive) },
    }
}

pub fn expand(chain: Chain) -> TokenStream {
    let target = &chain.target;
    if chain.entries.is_empty() {
        return quote! { #target };
    }
    let inserter = format_ident!("__enlist_inserter");
    let calls = chain.entries.iter().map(call);
    quote! {{
        #[allow(unused_mut)]
        let mut #inserter = #target;
        #inserter #(#calls)*;
        #inserter
    }}
}
