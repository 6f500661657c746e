// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! `impl Model` generation.
//!
//! Column types come from `ColumnType` unless `#[column(sql_type = "...")]`
//! names one explicitly.

use proc_macro2::TokenStream;
use quote::quote;

use super::parse::{ColumnField, ModelDef};

/// Generate `impl ::datahub_orm::Model`.
pub fn generate(model: &ModelDef) -> TokenStream {
    let ident = &model.ident;
    let table = &model.table_name;
    let (impl_generics, ty_generics, where_clause) = model.generics.split_for_impl();
    let defs = model.columns.iter().map(column_def);

    quote! {
        #[automatically_derived]
        impl #impl_generics ::datahub_orm::Model for #ident #ty_generics #where_clause {
            const TABLE_NAME: &'static str = #table;
            const COLUMNS: &'static [::datahub_orm::ColumnDef] = &[
                #(#defs),*
            ];
        }
    }
}

fn column_def(column: &ColumnField) -> TokenStream {
    let name = &column.column_name;
    let ty = &column.ty;

    let sql_type = match &column.sql_type {
        Some(explicit) => quote! { ::datahub_orm::SqlType::new(#explicit) },
        None => quote! { <#ty as ::datahub_orm::ColumnType>::SQL_TYPE }
    };
    let sql_type = if column.nullable {
        quote! { #sql_type.nullable() }
    } else {
        sql_type
    };

    quote! { ::datahub_orm::ColumnDef::new(#name, #sql_type) }
}
