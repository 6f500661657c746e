// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Error types.

use thiserror::Error;

/// Invalid server address configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Host was empty or whitespace.
    #[error("server host must not be empty")]
    EmptyHost,

    /// Port was zero, out of range, or not a number.
    #[error("invalid server port `{0}`, expected 1-65535")]
    InvalidPort(String),

    /// Address string could not be split into host and port.
    #[error("malformed server address `{0}`")]
    MalformedAddress(String)
}

/// Failure to parse or apply a row-level security statement.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PermissionError {
    /// Statement was empty.
    #[error("failed to parse permission type from permission statement")]
    MissingPermissionType,

    /// First word was neither `grant` nor `revoke`.
    #[error("{0} is not a valid permission type")]
    InvalidPermissionType(String),

    /// A required clause was missing or misplaced.
    #[error("failed to create security policy due to incorrect syntax in {0}")]
    Syntax(&'static str),

    /// Access type was not `select`, `insert` or `update`.
    #[error("failed to create security policy, {0} is not a valid access type")]
    InvalidAccessType(String),

    /// Table reference was not `repo.table`.
    #[error("table reference `{0}` must have the form repo.table")]
    InvalidTableReference(String),

    /// Revoke named a policy that does not exist.
    #[error("no {access} policy on {repo}.{table} for {grantee} matches `{policy}`")]
    PolicyNotFound {
        /// Access type from the statement.
        access:  String,
        /// Grantee from the statement.
        grantee: String,
        /// Repository name.
        repo:    String,
        /// Table name.
        table:   String,
        /// Policy expression.
        policy:  String
    }
}

/// Failure while applying a statement to a policy store.
#[derive(Debug, Error)]
pub enum ProcessError<E: std::error::Error + 'static> {
    /// Statement was invalid or matched nothing.
    #[error(transparent)]
    Permission(#[from] PermissionError),

    /// Backend failed.
    #[error("policy store failed: {0}")]
    Store(#[source] E)
}
