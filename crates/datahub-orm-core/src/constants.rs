// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Process-wide defaults and well-known names.
//!
//! | Constant | Value |
//! |----------|-------|
//! | [`SERVER_ADDR_ROOT`] | `datahub-experimental.csail.mit.edu` |
//! | [`SERVER_ADDR_PORT`] | `9000` |
//! | [`SERVER_DB_CHECK_FIELD_NAME`] | `datname` |
//! | [`MODEL_TABLE_NAME_ATTRIBUTE`] | `tableName` |
//! | [`INTEGER_COLUMN_NAME`] | `integerColumn` |

use crate::column::Column;

/// Default DataHub server host.
pub const SERVER_ADDR_ROOT: &str = "datahub-experimental.csail.mit.edu";

/// Default DataHub server port.
pub const SERVER_ADDR_PORT: u16 = 9000;

/// Column of `pg_database` holding database names.
pub const SERVER_DB_CHECK_FIELD_NAME: &str = "datname";

/// Model attribute key that names the backing table.
///
/// Used as `#[model(tableName = "...")]` by the derive macro.
pub const MODEL_TABLE_NAME_ATTRIBUTE: &str = "tableName";

/// Name of the sample integer column.
pub const INTEGER_COLUMN_NAME: &str = "integerColumn";

/// Sample integer column.
pub const INTEGER_COLUMN: Column<i32> = Column::new(INTEGER_COLUMN_NAME);
