// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]

//! # datahub-orm
//!
//! One crate, all features. Re-exports:
//! - [`Model`](macro@Model) derive macro from `datahub-orm-derive-impl`
//! - All types from `datahub-orm-core` ([`Column`], [`Model`](trait@Model),
//!   [`ServerAddress`], [`constants`], [`permissions`], ...)
//!
//! # Quick Start
//!
//! ```rust
//! use datahub_orm::{Column, Model, constants};
//!
//! #[derive(Model)]
//! #[model(tableName = "samples")]
//! pub struct Sample {
//!     #[column(name = "integerColumn")]
//!     pub integer_column: i32,
//! }
//!
//! let column: Column<i32> = Sample::INTEGER_COLUMN;
//! assert_eq!(column, constants::INTEGER_COLUMN);
//! assert_eq!(Sample::TABLE_NAME, "samples");
//! ```

pub use datahub_orm_core::*;
pub use datahub_orm_derive_impl::Model;
