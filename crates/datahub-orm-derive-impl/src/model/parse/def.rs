// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Validated model definition.

use std::collections::HashMap;

use convert_case::{Case, Casing};
use darling::FromDeriveInput;
use quote::format_ident;
use syn::{DeriveInput, Generics, Ident, Type, Visibility};

use super::{FieldDef, ModelAttrs};

/// Associated items of `Model`; an inherent constant with one of these names
/// would hide them on `Foo::NAME` paths.
const RESERVED_CONSTS: &[&str] = &["TABLE_NAME", "COLUMNS"];

/// A field that maps to a column.
#[derive(Debug)]
pub struct ColumnField {
    /// Field type, the `T` of `Column<T>`.
    pub ty: Type,

    /// Database column name.
    pub column_name: String,

    /// Name of the generated `Column<T>` constant.
    pub const_ident: Ident,

    /// Explicit SQL type, bypassing `ColumnType`.
    pub sql_type: Option<String>,

    /// Column accepts NULL: `#[column(nullable)]` or an `Option<T>` field.
    pub nullable: bool,

    /// Doc comment for the constant.
    pub doc: Option<String>
}

/// Complete model definition used by all generators.
#[derive(Debug)]
pub struct ModelDef {
    /// Struct identifier.
    pub ident: Ident,

    /// Struct visibility.
    pub vis: Visibility,

    /// Struct generics.
    pub generics: Generics,

    /// Database table name.
    pub table_name: String,

    /// Columns in declaration order, skipped fields removed.
    pub columns: Vec<ColumnField>
}

impl ModelDef {
    /// Parse and validate a model from derive input.
    ///
    /// # Errors
    ///
    /// - Applied to an enum, union, tuple or unit struct
    /// - Empty `tableName` or column name
    /// - Unknown `rename_all` value
    /// - Two fields mapping to the same column or constant
    /// - A field whose constant would shadow `TABLE_NAME` or `COLUMNS`
    /// - No columns after `skip`
    pub fn from_derive_input(input: &DeriveInput) -> darling::Result<Self> {
        let fields: Vec<FieldDef> = match &input.data {
            syn::Data::Struct(data) => match &data.fields {
                syn::Fields::Named(named) => named
                    .named
                    .iter()
                    .map(FieldDef::from_field)
                    .collect::<darling::Result<Vec<_>>>()?,
                _ => {
                    return Err(darling::Error::custom("Model requires named fields")
                        .with_span(&input.ident));
                }
            },
            _ => {
                return Err(
                    darling::Error::custom("Model can only be derived for structs")
                        .with_span(&input.ident)
                );
            }
        };

        let attrs = ModelAttrs::from_derive_input(input)?;
        let mut errors = Vec::new();

        let table_name = match attrs.table_name {
            Some(name) if name.trim().is_empty() => {
                errors.push(
                    darling::Error::custom("tableName must not be empty").with_span(&input.ident)
                );
                name
            }
            Some(name) => name,
            None => attrs.ident.to_string().to_case(Case::Snake)
        };

        let mut columns = Vec::new();
        let mut seen_columns: HashMap<String, Ident> = HashMap::new();
        let mut seen_consts: HashMap<String, Ident> = HashMap::new();

        for field in fields.into_iter().filter(|f| !f.column.skip) {
            let field_name = field.name_str();
            let column_name = match &field.column.name {
                Some(name) => name.clone(),
                None => match attrs.rename_all {
                    Some(rule) => rule.apply(&field_name),
                    None => field_name.clone()
                }
            };

            if column_name.trim().is_empty() {
                errors.push(
                    darling::Error::custom("column name must not be empty").with_span(&field.ident)
                );
                continue;
            }

            if let Some(previous) = seen_columns.get(&column_name) {
                errors.push(
                    darling::Error::custom(format!(
                        "column `{column_name}` is already mapped by field `{previous}`"
                    ))
                    .with_span(&field.ident)
                );
                continue;
            }

            let const_name = field_name.to_case(Case::UpperSnake);
            if RESERVED_CONSTS.contains(&const_name.as_str()) {
                errors.push(
                    darling::Error::custom(format!(
                        "field `{field_name}` would shadow `Model::{const_name}`; rename the field \
                         and keep the column with `#[column(name = \"{column_name}\")]`"
                    ))
                    .with_span(&field.ident)
                );
                continue;
            }

            if let Some(previous) = seen_consts.get(&const_name) {
                errors.push(
                    darling::Error::custom(format!(
                        "column constant `{const_name}` is already generated for field `{previous}`"
                    ))
                    .with_span(&field.ident)
                );
                continue;
            }

            seen_columns.insert(column_name.clone(), field.ident.clone());
            seen_consts.insert(const_name.clone(), field.ident.clone());

            columns.push(ColumnField {
                const_ident: format_ident!("{}", const_name, span = field.ident.span()),
                nullable: field.column.nullable || field.is_option(),
                sql_type: field.column.sql_type,
                ty: field.ty,
                column_name,
                doc: field.doc
            });
        }

        if columns.is_empty() && errors.is_empty() {
            errors.push(
                darling::Error::custom("Model requires at least one column").with_span(&input.ident)
            );
        }

        if !errors.is_empty() {
            return Err(darling::Error::multiple(errors));
        }

        Ok(Self {
            ident: attrs.ident,
            vis: attrs.vis,
            generics: attrs.generics,
            table_name,
            columns
        })
    }
}
