// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Typed column constants.
//!
//! For
//!
//! ```rust,ignore
//! pub struct Sample {
//!     #[column(name = "integerColumn")]
//!     pub integer_column: i32,
//! }
//! ```
//!
//! generates
//!
//! ```rust,ignore
//! impl Sample {
//!     pub const INTEGER_COLUMN: ::datahub_orm::Column<i32> =
//!         ::datahub_orm::Column::new("integerColumn");
//! }
//! ```

use proc_macro2::TokenStream;
use quote::quote;

use super::parse::ModelDef;

/// Generate the inherent impl holding one constant per column.
pub fn generate(model: &ModelDef) -> TokenStream {
    let ident = &model.ident;
    let vis = &model.vis;
    let (impl_generics, ty_generics, where_clause) = model.generics.split_for_impl();

    let constants = model.columns.iter().map(|column| {
        let const_ident = &column.const_ident;
        let ty = &column.ty;
        let name = &column.column_name;
        let doc = column
            .doc
            .clone()
            .unwrap_or_else(|| format!("Column `{name}`."));

        quote! {
            #[doc = #doc]
            #vis const #const_ident: ::datahub_orm::Column<#ty> = ::datahub_orm::Column::new(#name);
        }
    });

    quote! {
        #[automatically_derived]
        impl #impl_generics #ident #ty_generics #where_clause {
            #(#constants)*
        }
    }
}
