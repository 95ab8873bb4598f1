use proc_macro2::{Ident, TokenStream};
use quote::quote;
use syn::{Generics, Type};

pub struct FromArgsImpl<'a> {
    pub enlist_ident: &'a Ident,
    pub generics: &'a Generics,
    pub self_ty: TokenStream,
    pub arg_tys: &'a [Type],
    pub arg_idents: &'a [Ident],
    pub body: TokenStream,
}

impl<'a> FromArgsImpl<'a> {
    pub fn expand(self) -> TokenStream {
        let Self {
            enlist_ident,
            generics,
            self_ty,
            arg_tys,
            arg_idents,
            body,
        } = self;
        let (impl_generics, _, where_clause) = generics.split_for_impl();
        quote! {
            impl #impl_generics #enlist_ident::FromArgs<(#(#arg_tys,)*)> for #self_ty
            #where_clause
            {
                #[inline]
                fn from_args((#(#arg_idents,)*): (#(#arg_tys,)*)) -> Self {
                    #body
                }
            }
        }
    }
}
