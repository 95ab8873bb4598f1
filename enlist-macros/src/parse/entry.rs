use crate::utils::path_eq_ident_str;
use proc_macro2::Ident;
use syn::{
    parse::{Parse, ParseStream},
    Attribute, Expr, ExprRange, Meta, RangeLimits, Token,
};

pub enum Entry {
    Put(Expr),
    Default,
    Args(Expr),
    Repeat { count: Expr, value: Expr },
    RepeatFun { count: Expr, fun: Expr },
    RepeatFromTo { from: Expr, to: Expr, step: Option<Expr> },
    Extend(Expr),
    Feed(Expr),
}

fn no_args(attr: &Attribute) -> syn::Result<()> {
    match &attr.meta {
        Meta::Path(_) => Ok(()),
        meta => Err(syn::Error::new_spanned(meta, "unexpected arguments")),
    }
}

/// Parses `step = <expr>`.
struct Step(Expr);

impl Parse for Step {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let ident: Ident = input.parse()?;
        if ident != "step" {
            return Err(syn::Error::new_spanned(ident, "expected `step`"));
        }
        input.parse::<Token![=]>()?;
        let step = input.parse()?;
        if !input.is_empty() {
            return Err(input.error("unexpected tokens after the step"));
        }
        Ok(Self(step))
    }
}

fn split_range(range: Expr) -> syn::Result<(Expr, Expr)> {
    let (start, limits, end) = match range {
        Expr::Range(ExprRange {
            start, limits, end, ..
        }) => (start, limits, end),
        range => return Err(syn::Error::new_spanned(range, "expected `from..to` range")),
    };
    if let RangeLimits::Closed(closed) = &limits {
        return Err(syn::Error::new_spanned(
            closed,
            "expected half-open range, the end is never injected",
        ));
    }
    match (start, end) {
        (Some(start), Some(end)) => Ok((*start, *end)),
        (None, _) => Err(syn::Error::new_spanned(limits, "expected range start")),
        (_, None) => Err(syn::Error::new_spanned(limits, "expected range end")),
    }
}

impl Entry {
    fn with_attr(attr: &Attribute, input: ParseStream) -> syn::Result<Self> {
        let path = attr.path();
        if path_eq_ident_str(path, "default") {
            no_args(attr)?;
            input.parse::<Token![_]>()?;
            Ok(Self::Default)
        } else if path_eq_ident_str(path, "args") {
            no_args(attr)?;
            Ok(Self::Args(input.parse()?))
        } else if path_eq_ident_str(path, "repeat") {
            let count = attr.parse_args()?;
            Ok(Self::Repeat {
                count,
                value: input.parse()?,
            })
        } else if path_eq_ident_str(path, "repeat_fun") {
            let count = attr.parse_args()?;
            Ok(Self::RepeatFun {
                count,
                fun: input.parse()?,
            })
        } else if path_eq_ident_str(path, "repeat_from_to") {
            let step = match &attr.meta {
                Meta::Path(_) => None,
                _ => Some(attr.parse_args::<Step>()?.0),
            };
            let (from, to) = split_range(input.parse()?)?;
            Ok(Self::RepeatFromTo { from, to, step })
        } else if path_eq_ident_str(path, "extend") {
            no_args(attr)?;
            Ok(Self::Extend(input.parse()?))
        } else if path_eq_ident_str(path, "feed") {
            no_args(attr)?;
            Ok(Self::Feed(input.parse()?))
        } else {
            Err(syn::Error::new_spanned(
                path,
                "expected one of `default`, `args`, `repeat`, `repeat_fun`, \
                    `repeat_from_to`, `extend` or `feed`",
            ))
        }
    }
}

impl Parse for Entry {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let mut attrs = input.call(Attribute::parse_outer)?;
        match attrs.len() {
            0 => Ok(Self::Put(input.parse()?)),
            1 => Self::with_attr(&attrs.remove(0), input),
            _ => Err(syn::Error::new_spanned(
                &attrs[1],
                "an entry takes at most one attribute",
            )),
        }
    }
}
