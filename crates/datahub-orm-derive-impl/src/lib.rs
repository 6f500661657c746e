// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(
    missing_docs,
    rustdoc::missing_crate_level_docs,
    rustdoc::broken_intra_doc_links,
    rust_2018_idioms
)]
#![deny(unsafe_code)]

//! Procedural macros for the DataHub ORM.
//!
//! Use through the `datahub-orm` facade crate; generated code refers to
//! `::datahub_orm` paths.
//!
//! # Attribute Quick Reference
//!
//! ## Model-Level `#[model(...)]`
//!
//! ```rust,ignore
//! #[derive(Model)]
//! #[model(
//!     tableName = "scores",      // Optional: table name (default: struct name in snake_case)
//!     rename_all = "camelCase"   // Optional: column naming rule for fields
//! )]
//! pub struct Score { /* ... */ }
//! ```
//!
//! ## Field-Level `#[column(...)]`
//!
//! ```rust,ignore
//! pub struct Score {
//!     #[column(name = "integerColumn")]  // Explicit column name
//!     pub value: i32,
//!
//!     #[column(sql_type = "JSONB")]      // Explicit SQL type, skips ColumnType
//!     pub payload: String,
//!
//!     #[column(nullable)]                // Force NULL even for non-Option types
//!     pub note: String,
//!
//!     #[column(skip)]                    // Not a column
//!     pub cached: Vec<u8>,
//! }
//! ```
//!
//! # Generated Code Overview
//!
//! | Generated Item | Description |
//! |----------------|-------------|
//! | `Score::VALUE` | `Column<i32>` constant per field, named in `SCREAMING_SNAKE_CASE` |
//! | `impl Model for Score` | `TABLE_NAME` and `COLUMNS` |
//!
//! Fields named `table_name` or `columns` are rejected: their constants would
//! shadow the `Model` items. Keep such a column with `#[column(name = ...)]`
//! on a differently named field.

mod model;
mod utils;

use proc_macro::TokenStream;

/// Derive macro mapping a struct to a DataHub table.
///
/// # Model Attributes
///
/// | Attribute | Required | Default | Description |
/// |-----------|----------|---------|-------------|
/// | `tableName` | No | struct name in `snake_case` | Database table name |
/// | `rename_all` | No | field name as written | `camelCase`, `snake_case`, `PascalCase`, `SCREAMING_SNAKE_CASE`, `kebab-case`, `lowercase` |
///
/// # Field Attributes
///
/// | Attribute | Description |
/// |-----------|-------------|
/// | `#[column(name = "...")]` | Column name. Wins over `rename_all`. |
/// | `#[column(sql_type = "...")]` | SQL type. The field type no longer needs `ColumnType`. |
/// | `#[column(nullable)]` | Column accepts NULL. Implied by `Option<T>`. |
/// | `#[column(skip)]` | Field is not stored. |
///
/// # Example
///
/// ```rust,ignore
/// use datahub_orm::{Model, Column};
///
/// #[derive(Model)]
/// #[model(tableName = "samples")]
/// pub struct Sample {
///     /// The sample value.
///     #[column(name = "integerColumn")]
///     pub integer_column: i32,
/// }
///
/// let col: Column<i32> = Sample::INTEGER_COLUMN;
/// assert_eq!(col.name(), "integerColumn");
/// assert_eq!(Sample::TABLE_NAME, "samples");
/// ```
#[proc_macro_derive(Model, attributes(model, column))]
pub fn derive_model(input: TokenStream) -> TokenStream {
    model::derive(input)
}
