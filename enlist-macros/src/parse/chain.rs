use super::entry::Entry;
use syn::{
    parse::{Parse, ParseStream},
    Expr, Token,
};

pub struct Chain {
    pub target: Expr,
    pub entries: Vec<Entry>,
}

impl Parse for Chain {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let target = input.parse()?;
        let mut entries = Vec::new();
        if input.is_empty() {
            return Ok(Self { target, entries });
        }
        input.parse::<Token![;]>()?;
        while !input.is_empty() {
            entries.push(input.parse()?);
            if input.is_empty() {
                break;
            }
            input.parse::<Token![,]>()?;
        }
        Ok(Self { target, entries })
    }
}
