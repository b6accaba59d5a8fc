use proc_macro::TokenStream;
use quote::quote;
use syn::{parse_macro_input, Data, DeriveInput, Expr, ExprLit, Fields, Lit};

fn col_override(f: &syn::Field) -> Option<usize> {
    for attr in &f.attrs {
        if attr.path().is_ident("hydrant") {
            let mut found = None;
            let _ = attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("col") {
                    let value = meta.value()?;
                    let expr: Expr = value.parse()?;
                    if let Expr::Lit(ExprLit { lit: Lit::Int(n), .. }) = expr {
                        found = n.base10_parse::<usize>().ok();
                    }
                }
                Ok(())
            });
            if found.is_some() {
                return found;
            }
        }
    }
    None
}

pub fn expand(input: TokenStream) -> TokenStream {
    let ast = parse_macro_input!(input as DeriveInput);
    let name = &ast.ident;

    let fields = match &ast.data {
        Data::Struct(s) => match &s.fields {
            Fields::Named(named) => named.named.iter().collect::<Vec<_>>(),
            _ => {
                return syn::Error::new_spanned(&ast, "FromRow only supports structs with named fields")
                    .to_compile_error()
                    .into();
            }
        },
        _ => {
            return syn::Error::new_spanned(&ast, "FromRow only supports structs")
                .to_compile_error()
                .into();
        }
    };

    let struct_name = name.to_string();
    let mut inits = Vec::new();
    let mut next_col = 0usize;

    for f in fields {
        let ident = f.ident.as_ref().unwrap();
        let key = ident.to_string();
        let ty = &f.ty;

        // Fields consume column positions in declaration order unless pinned
        // with #[hydrant(col = N)]; the running position continues from N + 1.
        let col = col_override(f).unwrap_or(next_col);
        next_col = col + 1;

        // If field type is Option<...>, allow a missing column => None.
        // We do a *syntactic* check to keep it lightweight.
        let is_option = match ty {
            syn::Type::Path(p) => p.path.segments.first().map(|s| s.ident == "Option").unwrap_or(false),
            _ => false,
        };

        if is_option {
            inits.push(quote! {
                #ident: {
                    match hydrant_core::row::column_value(row, #col) {
                        None => None,
                        Some(v) => <#ty as hydrant_core::traits::FromValue>::from_value(v)
                            .map_err(|e| e.with_context(format!("{}::{} (column {})", #struct_name, #key, #col)))?,
                    }
                }
            });
        } else {
            inits.push(quote! {
                #ident: {
                    let v = hydrant_core::row::column_value(row, #col)
                        .ok_or_else(|| hydrant_core::error::HydrantError::missing_column(#col, #struct_name))?;
                    <#ty as hydrant_core::traits::FromValue>::from_value(v)
                        .map_err(|e| e.with_context(format!("{}::{} (column {})", #struct_name, #key, #col)))?
                }
            });
        }
    }

    let expanded = quote! {
        impl hydrant_core::traits::FromRow for #name {
            fn from_row(row: &hydrant_core::row::Row) -> Result<Self, hydrant_core::error::HydrantError> {
                Ok(Self {
                    #(#inits,)*
                })
            }
        }
    };

    expanded.into()
}
