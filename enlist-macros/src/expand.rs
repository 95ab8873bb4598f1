mod chain;
mod from_args;

pub use chain::expand as chain;

use crate::{
    parse,
    utils::{enlist_ident, extend_generic_params, HeaderType},
};
use from_args::FromArgsImpl;
use proc_macro2::TokenStream;
use quote::{format_ident, quote, ToTokens as _};
use syn::visit_mut::VisitMut as _;

pub fn derive(parsed: parse::derive::Output) -> TokenStream {
    let enlist_ident = enlist_ident();
    let (_, ty_generics, _) = parsed.generics.split_for_impl();
    let ident = &parsed.ident;
    let self_ty = quote! { #ident #ty_generics };

    let mut arg_tys = Vec::new();
    let mut arg_idents = Vec::new();
    let mut members = Vec::with_capacity(parsed.args.len());
    let mut values = Vec::with_capacity(parsed.args.len());
    for arg in &parsed.args {
        members.push(&arg.member);
        if arg.is_default {
            values.push(quote! { ::core::default::Default::default() });
        } else {
            let arg_ident = format_ident!("arg{}", arg_idents.len());
            values.push(arg_ident.to_token_stream());
            arg_tys.push(arg.ty.clone());
            arg_idents.push(arg_ident);
        }
    }

    FromArgsImpl {
        enlist_ident: &enlist_ident,
        generics: &parsed.generics,
        self_ty,
        arg_tys: &arg_tys,
        arg_idents: &arg_idents,
        body: quote! { Self { #(#members: #values,)* } },
    }
    .expand()
}

pub fn impl_(parsed: parse::impl_::Output) -> TokenStream {
    let enlist_ident = enlist_ident();
    let mut output = parsed.item.into_token_stream();

    for constructor in &parsed.constructors {
        let mut header_ty = HeaderType::new(&parsed.self_ty);
        let arg_tys = constructor
            .arg_tys
            .iter()
            .cloned()
            .map(|mut ty| {
                header_ty.visit_type_mut(&mut ty);
                ty
            })
            .collect::<Vec<_>>();
        let mut generics = parsed.generics.clone();
        extend_generic_params(&mut generics.params, header_ty.lifetime_params());

        let arg_idents = (0..arg_tys.len())
            .map(|index| format_ident!("arg{index}"))
            .collect::<Vec<_>>();
        let constructor_ident = &constructor.ident;

        output.extend(
            FromArgsImpl {
                enlist_ident: &enlist_ident,
                generics: &generics,
                self_ty: parsed.self_ty.to_token_stream(),
                arg_tys: &arg_tys,
                arg_idents: &arg_idents,
                body: quote! { Self::#constructor_ident(#(#arg_idents),*) },
            }
            .expand(),
        );
    }

    output
}
