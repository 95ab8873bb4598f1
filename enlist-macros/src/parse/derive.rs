use crate::utils::path_eq_ident_str;
use proc_macro2::Ident;
use syn::{Data, DeriveInput, Field, Fields, Generics, Member, Type};

pub struct Arg {
    pub member: Member,
    pub ty: Type,
    pub is_default: bool,
}

fn is_default(field: &Field) -> syn::Result<bool> {
    let mut is_default = false;
    for attr in &field.attrs {
        if !path_eq_ident_str(attr.path(), "enlist") {
            continue;
        }
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("default") {
                if is_default {
                    Err(meta.error("duplicate `default`"))
                } else {
                    is_default = true;
                    Ok(())
                }
            } else {
                Err(meta.error("unexpected argument"))
            }
        })?;
    }
    Ok(is_default)
}

pub struct Output {
    pub ident: Ident,
    pub generics: Generics,
    pub args: Vec<Arg>,
}

impl TryFrom<DeriveInput> for Output {
    type Error = syn::Error;

    fn try_from(input: DeriveInput) -> syn::Result<Self> {
        let fields = match input.data {
            Data::Struct(data) => data.fields,
            Data::Enum(data) => {
                return Err(syn::Error::new_spanned(data.enum_token, "expected struct"))
            }
            Data::Union(data) => {
                return Err(syn::Error::new_spanned(data.union_token, "expected struct"))
            }
        };
        let fields = match fields {
            Fields::Named(named) => named.named.into_iter().collect(),
            Fields::Unnamed(unnamed) => unnamed.unnamed.into_iter().collect(),
            Fields::Unit => Vec::new(),
        };
        let args = fields
            .into_iter()
            .enumerate()
            .map(|(index, field)| {
                Ok(Arg {
                    is_default: is_default(&field)?,
                    member: match field.ident {
                        Some(ident) => Member::Named(ident),
                        None => Member::Unnamed(index.into()),
                    },
                    ty: field.ty,
                })
            })
            .collect::<syn::Result<_>>()?;
        Ok(Self {
            ident: input.ident,
            generics: input.generics,
            args,
        })
    }
}
