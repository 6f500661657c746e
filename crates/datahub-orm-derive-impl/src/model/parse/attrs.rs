// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Model-level attribute parsing with darling.
//!
//! # Supported Attributes
//!
//! | Attribute | Required | Default | Description |
//! |-----------|----------|---------|-------------|
//! | `tableName` | No | struct name in `snake_case` | Database table name |
//! | `rename_all` | No | — | Column naming rule for fields |

use convert_case::{Case, Casing};
use darling::{FromDeriveInput, FromMeta};
use syn::{Generics, Ident, Visibility};

/// Naming rule applied to field names to get column names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenameRule {
    /// `integerColumn`
    Camel,

    /// `integer_column`
    Snake,

    /// `IntegerColumn`
    Pascal,

    /// `INTEGER_COLUMN`
    ScreamingSnake,

    /// `integer-column`
    Kebab,

    /// `integercolumn`
    Lower
}

impl RenameRule {
    /// Apply the rule to a field name.
    #[must_use]
    pub fn apply(&self, name: &str) -> String {
        let case = match self {
            Self::Camel => Case::Camel,
            Self::Snake => Case::Snake,
            Self::Pascal => Case::Pascal,
            Self::ScreamingSnake => Case::UpperSnake,
            Self::Kebab => Case::Kebab,
            Self::Lower => Case::Flat
        };
        name.to_case(case)
    }
}

impl FromMeta for RenameRule {
    /// Accepts the serde spellings: `camelCase`, `snake_case`, `PascalCase`,
    /// `SCREAMING_SNAKE_CASE`, `kebab-case`, `lowercase`.
    fn from_string(value: &str) -> darling::Result<Self> {
        match value {
            "camelCase" => Ok(Self::Camel),
            "snake_case" => Ok(Self::Snake),
            "PascalCase" => Ok(Self::Pascal),
            "SCREAMING_SNAKE_CASE" => Ok(Self::ScreamingSnake),
            "kebab-case" => Ok(Self::Kebab),
            "lowercase" => Ok(Self::Lower),
            _ => Err(darling::Error::unknown_value(value))
        }
    }
}

/// Model-level attributes parsed from `#[model(...)]`.
///
/// Internal to parsing; generators use [`ModelDef`](super::ModelDef).
#[derive(Debug, FromDeriveInput)]
#[darling(attributes(model), supports(struct_named))]
pub struct ModelAttrs {
    /// Struct identifier.
    pub ident: Ident,

    /// Struct visibility, reused for the column constants.
    pub vis: Visibility,

    /// Struct generics.
    pub generics: Generics,

    /// Table name from `tableName = "..."`.
    ///
    /// The key matches `datahub_orm::constants::MODEL_TABLE_NAME_ATTRIBUTE`.
    #[darling(rename = "tableName", default)]
    pub table_name: Option<String>,

    /// Column naming rule.
    #[darling(default)]
    pub rename_all: Option<RenameRule>
}
