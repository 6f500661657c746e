// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Database existence checks.
//!
//! DataHub repositories live in PostgreSQL databases; whether one exists is
//! answered by the [`SERVER_DB_CHECK_FIELD_NAME`] column of `pg_database`.
//!
//! With the `postgres` feature the checks run directly against a
//! `sqlx::PgPool`:
//!
//! ```rust,ignore
//! use datahub_orm_core::check::database_exists;
//!
//! if !database_exists(&pool, "alice").await? {
//!     // provision the repo base
//! }
//! ```

use crate::constants::SERVER_DB_CHECK_FIELD_NAME;

/// Query selecting one database by name (`$1`).
pub fn database_check_sql() -> String {
    format!(
        "SELECT {field} FROM pg_database WHERE {field} = $1",
        field = SERVER_DB_CHECK_FIELD_NAME
    )
}

/// Query listing all non-template databases by name.
pub fn database_list_sql() -> String {
    format!(
        "SELECT {field} FROM pg_database WHERE NOT datistemplate ORDER BY {field}",
        field = SERVER_DB_CHECK_FIELD_NAME
    )
}

/// Whether `name` appears among `names`.
///
/// Database names are case-sensitive once created, so the match is exact.
pub fn contains_database<'a, I>(names: I, name: &str) -> bool
where
    I: IntoIterator<Item = &'a str>
{
    names.into_iter().any(|n| n == name)
}

/// Check whether a database exists.
///
/// # Errors
///
/// Returns the underlying `sqlx::Error` when the query fails.
#[cfg(feature = "postgres")]
#[cfg_attr(docsrs, doc(cfg(feature = "postgres")))]
pub async fn database_exists(pool: &sqlx::PgPool, name: &str) -> Result<bool, sqlx::Error> {
    let sql = database_check_sql();
    tracing::debug!(database = name, "checking database existence");
    let row = sqlx::query(&sql).bind(name).fetch_optional(pool).await?;
    Ok(row.is_some())
}

/// List all non-template databases.
///
/// # Errors
///
/// Returns the underlying `sqlx::Error` when the query fails or a row lacks
/// the name column.
#[cfg(feature = "postgres")]
#[cfg_attr(docsrs, doc(cfg(feature = "postgres")))]
pub async fn list_databases(pool: &sqlx::PgPool) -> Result<Vec<String>, sqlx::Error> {
    use sqlx::Row;

    let sql = database_list_sql();
    let rows = sqlx::query(&sql).fetch_all(pool).await?;
    let names = rows
        .iter()
        .map(|row| row.try_get::<String, _>(SERVER_DB_CHECK_FIELD_NAME))
        .collect::<Result<Vec<_>, _>>()?;
    tracing::debug!(count = names.len(), "listed databases");
    Ok(names)
}
