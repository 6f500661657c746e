// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Core types for the DataHub ORM client.
//!
//! This crate provides the runtime types used by `#[derive(Model)]` generated
//! code. It can also be used standalone for hand-written models.
//!
//! # Overview
//!
//! - [`constants`] — Server defaults and well-known field names
//! - [`Column`] — Named, typed reference to a table column
//! - [`ColumnType`] / [`SqlType`] — Rust to PostgreSQL type mapping
//! - [`Model`] / [`ColumnDef`] — Table description for a model struct
//! - [`ServerAddress`] — Where the DataHub server lives
//! - [`check`] — Database existence checks keyed on `datname`
//! - [`permissions`] — Row-level security `GRANT`/`REVOKE` statements
//! - [`prelude`] — Convenient re-exports
//!
//! # Usage
//!
//! ```rust
//! use datahub_orm_core::{Column, ColumnType, constants};
//!
//! let column: Column<i32> = constants::INTEGER_COLUMN;
//! assert_eq!(column.name(), "integerColumn");
//! assert_eq!(<i32 as ColumnType>::SQL_TYPE.name, "INTEGER");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod check;
pub mod column;
pub mod config;
pub mod constants;
pub mod error;
pub mod model;
pub mod permissions;
pub mod prelude;

pub use column::{Column, ColumnType, SqlType};
pub use config::ServerAddress;
pub use error::{ConfigError, PermissionError, ProcessError};
pub use model::{ColumnDef, Model};
