// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Field-level attribute parsing.
//!
//! # Supported Attributes
//!
//! | Attribute | Example | Effect |
//! |-----------|---------|--------|
//! | `name` | `#[column(name = "integerColumn")]` | Custom column name |
//! | `sql_type` | `#[column(sql_type = "JSONB")]` | Explicit type |
//! | `nullable` | `#[column(nullable)]` | Allow NULL |
//! | `skip` | `#[column(skip)]` | Not a column |

use syn::{Attribute, Field, Ident, LitStr, Type, ext::IdentExt};

use crate::utils::docs::extract_doc_comments;

/// Column configuration from `#[column(...)]`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnConfig {
    /// Custom column name.
    pub name: Option<String>,

    /// Explicit SQL type.
    pub sql_type: Option<String>,

    /// Allow NULL for non-`Option` types.
    pub nullable: bool,

    /// Exclude the field.
    pub skip: bool
}

impl ColumnConfig {
    /// Merge every `#[column(...)]` attribute on a field.
    ///
    /// # Errors
    ///
    /// Unknown keys and non-string values are reported at their span.
    pub fn from_attrs(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut config = Self::default();

        for attr in attrs.iter().filter(|a| a.path().is_ident("column")) {
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("name") {
                    let value: LitStr = meta.value()?.parse()?;
                    config.name = Some(value.value());
                } else if meta.path.is_ident("sql_type") {
                    let value: LitStr = meta.value()?.parse()?;
                    config.sql_type = Some(value.value());
                } else if meta.path.is_ident("nullable") {
                    config.nullable = true;
                } else if meta.path.is_ident("skip") {
                    config.skip = true;
                } else {
                    return Err(meta.error(
                        "unknown column attribute, expected `name`, `sql_type`, `nullable` or `skip`"
                    ));
                }
                Ok(())
            })?;
        }

        Ok(config)
    }
}

/// One struct field with its parsed column configuration.
#[derive(Debug)]
pub struct FieldDef {
    /// Field identifier.
    pub ident: Ident,

    /// Field type.
    pub ty: Type,

    /// `#[column(...)]` settings.
    pub column: ColumnConfig,

    /// Doc comment, copied onto the generated constant.
    pub doc: Option<String>
}

impl FieldDef {
    /// Parse a named struct field.
    ///
    /// # Errors
    ///
    /// Returns error for unnamed fields or malformed `#[column(...)]`.
    pub fn from_field(field: &Field) -> darling::Result<Self> {
        let ident = field.ident.clone().ok_or_else(|| {
            darling::Error::custom("Model fields must be named").with_span(field)
        })?;
        let column = ColumnConfig::from_attrs(&field.attrs)?;

        Ok(Self {
            ident,
            ty: field.ty.clone(),
            column,
            doc: extract_doc_comments(&field.attrs)
        })
    }

    /// Field name without any `r#` prefix.
    #[must_use]
    pub fn name_str(&self) -> String {
        self.ident.unraw().to_string()
    }

    /// Check if the field type is `Option<T>`.
    #[must_use]
    pub fn is_option(&self) -> bool {
        if let Type::Path(type_path) = &self.ty
            && let Some(segment) = type_path.path.segments.last()
        {
            return segment.ident == "Option";
        }
        false
    }
}
