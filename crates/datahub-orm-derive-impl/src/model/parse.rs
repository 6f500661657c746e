// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Model attribute parsing.
//!
//! # Module Structure
//!
//! ```text
//! parse/
//! ├── attrs.rs — ModelAttrs (darling) and RenameRule
//! ├── field.rs — FieldDef and ColumnConfig from `#[column(...)]`
//! ├── def.rs   — ModelDef: validated result used by generators
//! └── tests.rs — Unit tests
//! ```
//!
//! # Usage
//!
//! ```rust,ignore
//! use crate::model::parse::ModelDef;
//!
//! let model = ModelDef::from_derive_input(&input)?;
//! for column in &model.columns {
//!     // column.column_name, column.const_ident, ...
//! }
//! ```

mod attrs;
mod def;
mod field;

pub use attrs::ModelAttrs;
pub use def::{ColumnField, ModelDef};
pub use field::FieldDef;
