use proc_macro2::{Ident, Span};
use quote::{format_ident, ToTokens};
use std::fmt::Write as _;
use syn::{
    punctuated::Punctuated,
    visit_mut::{self, VisitMut},
    Attribute, GenericParam, Lifetime, LifetimeParam, Meta, Path, Token, Type, TypePath,
    TypeReference,
};

pub fn enlist_ident() -> Ident {
    #[cfg(feature = "proc-macro-crate")]
    match proc_macro_crate::crate_name("enlist").expect("expected `enlist` package in `Cargo.toml`")
    {
        proc_macro_crate::FoundCrate::Itself => format_ident!("enlist"),
        proc_macro_crate::FoundCrate::Name(name) => format_ident!("{name}"),
    }
    #[cfg(not(feature = "proc-macro-crate"))]
    format_ident!("enlist")
}

pub fn path_eq_ident_str(path: &Path, ident_str: &str) -> bool {
    path.get_ident()
        .map(|ident| ident == ident_str)
        .unwrap_or_default()
}

fn is_enlist_attr_path(attr_path: &Path) -> bool {
    attr_path.leading_colon.is_none()
        && attr_path.segments.len() == 2
        && attr_path.segments.iter().all(|segment| segment.arguments.is_empty())
        && attr_path.segments[0].ident == "enlist"
}

/// Whether the attribute is `#[enlist::<s>]` without arguments.
pub fn is_enlist_attr(attr: &Attribute, s: &str) -> syn::Result<bool> {
    let path = attr.path();
    if !is_enlist_attr_path(path) || path.segments[1].ident != s {
        return Ok(false);
    }
    match &attr.meta {
        Meta::Path(_) => Ok(true),
        meta => Err(syn::Error::new_spanned(meta, "unexpected arguments")),
    }
}

pub fn eq_by_fmt<Lhs: ToTokens, Rhs: ToTokens>(lhs: Lhs, rhs: Rhs) -> bool {
    let mut buf = String::with_capacity(128);
    write!(buf, "{}", lhs.into_token_stream()).unwrap();
    let lhs_end = buf.len();
    write!(buf, "{}", rhs.into_token_stream()).unwrap();
    buf[..lhs_end] == buf[lhs_end..]
}

pub fn combine_errors(errors: impl IntoIterator<Item = syn::Error>) -> syn::Result<()> {
    let mut errors = errors.into_iter();
    match errors.next() {
        Some(mut init) => {
            for err in errors {
                init.combine(err);
            }
            Err(init)
        }
        None => Ok(()),
    }
}

/// Makes a type usable in an impl header: names every elided reference
/// lifetime and replaces `Self` with `self_ty`.
pub struct HeaderType<'a> {
    self_ty: &'a Type,
    lifetimes: Vec<Lifetime>,
}

impl<'a> HeaderType<'a> {
    pub fn new(self_ty: &'a Type) -> Self {
        Self {
            self_ty,
            lifetimes: Vec::new(),
        }
    }

    fn fresh_lifetime(&mut self, span: Span) -> Lifetime {
        let lifetime = Lifetime::new(&format!("'__enlist{}", self.lifetimes.len()), span);
        self.lifetimes.push(lifetime.clone());
        lifetime
    }

    /// Lifetimes introduced so far, to be added to the impl generics.
    pub fn lifetime_params(&self) -> impl Iterator<Item = GenericParam> + '_ {
        self.lifetimes
            .iter()
            .map(|lifetime| GenericParam::Lifetime(LifetimeParam::new(lifetime.clone())))
    }
}

impl VisitMut for HeaderType<'_> {
    fn visit_type_reference_mut(&mut self, reference: &mut TypeReference) {
        match &reference.lifetime {
            None => reference.lifetime = Some(self.fresh_lifetime(Span::call_site())),
            Some(lifetime) if lifetime.ident == "_" => {
                reference.lifetime = Some(self.fresh_lifetime(lifetime.span()))
            }
            Some(_) => {}
        }
        visit_mut::visit_type_reference_mut(self, reference)
    }

    fn visit_lifetime_mut(&mut self, lifetime: &mut Lifetime) {
        if lifetime.ident == "_" {
            *lifetime = self.fresh_lifetime(lifetime.span());
        }
    }

    fn visit_type_mut(&mut self, ty: &mut Type) {
        if let Type::Path(TypePath { qself: None, path }) = ty {
            if path_eq_ident_str(path, "Self") {
                *ty = self.self_ty.clone();
                return;
            }
        }
        visit_mut::visit_type_mut(self, ty)
    }
}

pub fn extend_generic_params(
    params: &mut Punctuated<GenericParam, Token![,]>,
    lifetimes: impl IntoIterator<Item = GenericParam>,
) {
    // lifetimes must come before type and const params
    let rest = std::mem::take(params);
    params.extend(lifetimes);
    params.extend(rest);
}

#[cfg(feature = "debug")]
pub fn debug(tokens: proc_macro2::TokenStream) -> Result<(), Box<dyn std::error::Error>> {
    use rust_format::{Formatter as _, RustFmt};
    use std::{env, fs, path::PathBuf};
    let dir = if let Ok(out_dir) = env::var("CARGO_TARGET_DIR") {
        out_dir.into()
    } else {
        let dir = PathBuf::from("target/enlist");
        fs::create_dir_all(&dir)?;
        dir
    };
    fs::write(
        dir.join("macros_debug.rs"),
        RustFmt::default().format_tokens(tokens)?,
    )
    .map_err(Into::into)
}
