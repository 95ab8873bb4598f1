use crate::utils::{combine_errors, eq_by_fmt, is_enlist_attr};
use proc_macro2::{Ident, TokenStream};
use syn::{
    parse2, FnArg, Generics, ImplItem, ImplItemFn, ItemImpl, PatType, ReturnType, Type,
};

pub struct Constructor {
    pub ident: Ident,
    pub arg_tys: Vec<Type>,
}

fn take_constructor_attr(method: &mut ImplItemFn) -> syn::Result<bool> {
    let mut found = None;
    let mut errors = Vec::new();
    let mut index = 0;
    while index < method.attrs.len() {
        match is_enlist_attr(&method.attrs[index], "constructor") {
            Ok(true) => {
                let attr = method.attrs.remove(index);
                if found.is_some() {
                    errors.push(syn::Error::new_spanned(attr, "duplicate `constructor`"));
                } else {
                    found = Some(attr);
                }
                continue;
            }
            Ok(false) => {}
            Err(err) => errors.push(err),
        }
        index += 1;
    }
    combine_errors(errors).map(|()| found.is_some())
}

fn returns_self(output: &ReturnType, self_ty: &Type) -> bool {
    match output {
        ReturnType::Type(_, ty) => {
            eq_by_fmt(ty, <syn::Token![Self]>::default()) || eq_by_fmt(ty, self_ty)
        }
        ReturnType::Default => false,
    }
}

impl Constructor {
    fn new(method: &ImplItemFn, self_ty: &Type) -> syn::Result<Self> {
        let sig = &method.sig;
        let mut errors = Vec::new();
        if let Some(receiver) = sig.receiver() {
            errors.push(syn::Error::new_spanned(receiver, "unexpected receiver"));
        }
        if !sig.generics.params.is_empty() || sig.generics.where_clause.is_some() {
            errors.push(syn::Error::new_spanned(
                &sig.generics,
                "constructors cannot be generic",
            ));
        }
        if let Some(asyncness) = sig.asyncness {
            errors.push(syn::Error::new_spanned(asyncness, "constructors cannot be async"));
        }
        if let Some(variadic) = &sig.variadic {
            errors.push(syn::Error::new_spanned(variadic, "unexpected variadic"));
        }
        if !returns_self(&sig.output, self_ty) {
            errors.push(syn::Error::new_spanned(&sig.output, "expected `-> Self`"));
        }
        let mut arg_tys = Vec::with_capacity(sig.inputs.len());
        for input in &sig.inputs {
            if let FnArg::Typed(PatType { ty, .. }) = input {
                if let Type::ImplTrait(impl_trait) = ty.as_ref() {
                    errors.push(syn::Error::new_spanned(
                        impl_trait,
                        "constructors cannot be generic",
                    ));
                }
                arg_tys.push(ty.as_ref().clone());
            }
        }
        combine_errors(errors).map(|()| Self {
            ident: sig.ident.clone(),
            arg_tys,
        })
    }
}

pub struct Output {
    pub item: ItemImpl,
    pub generics: Generics,
    pub self_ty: Type,
    pub constructors: Vec<Constructor>,
}

impl TryFrom<ItemImpl> for Output {
    type Error = syn::Error;

    fn try_from(mut item: ItemImpl) -> syn::Result<Self> {
        if let Some((_, path, _)) = &item.trait_ {
            return Err(syn::Error::new_spanned(path, "expected inherent impl"));
        }
        let mut constructors = Vec::new();
        let mut errors = Vec::new();
        for impl_item in &mut item.items {
            let ImplItem::Fn(method) = impl_item else {
                continue;
            };
            match take_constructor_attr(method) {
                Ok(true) => match Constructor::new(method, &item.self_ty) {
                    Ok(constructor) => constructors.push(constructor),
                    Err(err) => errors.push(err),
                },
                Ok(false) => {}
                Err(err) => errors.push(err),
            }
        }
        combine_errors(errors)?;
        if constructors.is_empty() {
            return Err(syn::Error::new_spanned(
                &item.self_ty,
                "expected at least one `#[enlist::constructor]` function",
            ));
        }
        Ok(Self {
            generics: item.generics.clone(),
            self_ty: item.self_ty.as_ref().clone(),
            item,
            constructors,
        })
    }
}

pub fn parse(attr: TokenStream, item: TokenStream) -> syn::Result<Output> {
    if !attr.is_empty() {
        return Err(syn::Error::new_spanned(attr, "unexpected arguments"));
    }
    parse2::<ItemImpl>(item).and_then(TryInto::try_into)
}
