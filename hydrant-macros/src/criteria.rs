
//! Implementation of the `criteria!` proc macro.
//!
//! Splits the input on top-level commas, reads each chunk as
//! `column <op> value-expression`, and generates a
//! `Criteria::new().add("...", Comparison::..., ...)...` expression with the
//! operators mapped onto the comparison vocabulary.

use proc_macro::TokenStream;
use proc_macro2::{Span, TokenStream as TokenStream2, TokenTree};
use quote::quote;

/// Split a token stream on top-level `,` punctuation.
fn split_conditions(stream: TokenStream2) -> Vec<Vec<TokenTree>> {
    let mut chunks = Vec::new();
    let mut current = Vec::new();
    for tt in stream {
        match &tt {
            TokenTree::Punct(p) if p.as_char() == ',' => {
                if !current.is_empty() {
                    chunks.push(std::mem::take(&mut current));
                }
            }
            _ => current.push(tt),
        }
    }
    if !current.is_empty() {
        chunks.push(current);
    }
    chunks
}

/// Map the operator token(s) at the head of `rest` onto a `Comparison`
/// variant name, returning how many tokens the operator consumed.
fn comparison(rest: &[TokenTree]) -> Result<(&'static str, usize), String> {
    let punct_at = |i: usize| match rest.get(i) {
        Some(TokenTree::Punct(p)) => Some(p.as_char()),
        _ => None,
    };
    match rest.first() {
        Some(TokenTree::Punct(p)) => match p.as_char() {
            '=' if punct_at(1) == Some('=') => Ok(("Equal", 2)),
            '=' => Ok(("Equal", 1)),
            '!' if punct_at(1) == Some('=') => Ok(("NotEqual", 2)),
            '<' if punct_at(1) == Some('>') => Ok(("NotEqual", 2)),
            '>' if punct_at(1) == Some('=') => Ok(("GreaterEqual", 2)),
            '>' => Ok(("GreaterThan", 1)),
            '<' if punct_at(1) == Some('=') => Ok(("LessEqual", 2)),
            '<' => Ok(("LessThan", 1)),
            other => Err(format!("unsupported comparison operator `{other}`")),
        },
        Some(TokenTree::Ident(ident)) if ident == "like" => Ok(("Like", 1)),
        Some(TokenTree::Ident(ident)) if ident == "in" => Ok(("In", 1)),
        _ => Err("expected a comparison operator after the column name".to_string()),
    }
}

fn parse_condition(chunk: &[TokenTree]) -> Result<TokenStream2, String> {
    let column = match chunk.first() {
        Some(TokenTree::Ident(ident)) => ident.to_string(),
        _ => return Err("expected a column identifier".to_string()),
    };

    let (variant, consumed) = comparison(&chunk[1..])?;
    let value_tokens: TokenStream2 = chunk[1 + consumed..].iter().cloned().collect();
    if value_tokens.is_empty() {
        return Err(format!("condition on `{column}` is missing a value"));
    }
    let value: syn::Expr =
        syn::parse2(value_tokens).map_err(|e| format!("invalid value for `{column}`: {e}"))?;

    let variant = proc_macro2::Ident::new(variant, Span::call_site());
    Ok(quote! {
        .add(#column, hydrant::criteria::Comparison::#variant, #value)
    })
}

pub fn expand(input: TokenStream) -> TokenStream {
    let input2: TokenStream2 = input.into();

    let mut calls = Vec::new();
    for chunk in split_conditions(input2) {
        match parse_condition(&chunk) {
            Ok(call) => calls.push(call),
            Err(msg) => {
                return syn::Error::new(Span::call_site(), msg)
                    .to_compile_error()
                    .into();
            }
        }
    }

    quote! {
        hydrant::criteria::Criteria::new() #(#calls)*
    }
    .into()
}
