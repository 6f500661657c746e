// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! `GRANT`/`REVOKE` statement parsing.
//!
//! Clauses are matched left to right, each on the text following the
//! previous one. Keywords are case-insensitive; grantee, repo, table and
//! policy keep their case.

use std::{fmt, str::FromStr, sync::LazyLock};

use regex::Regex;

use crate::error::PermissionError;

static ACCESS_CLAUSE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)^\s+(\S.*?)\s+access\b").expect("valid access regex"));

static GRANTEE_CLAUSE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)^\s+to\s+(\S.*?)\s+on\b").expect("valid grantee regex"));

static TABLE_CLAUSE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)^\s+(\S.*?)\s+where\b").expect("valid table regex"));

/// Whether a statement adds or removes a policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PermissionKind {
    /// `GRANT` — add a policy.
    Grant,

    /// `REVOKE` — remove a matching policy.
    Revoke
}

impl PermissionKind {
    /// SQL keyword.
    pub const fn as_sql(&self) -> &'static str {
        match self {
            Self::Grant => "GRANT",
            Self::Revoke => "REVOKE"
        }
    }
}

impl FromStr for PermissionKind {
    type Err = PermissionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "grant" => Ok(Self::Grant),
            "revoke" => Ok(Self::Revoke),
            other => Err(PermissionError::InvalidPermissionType(other.to_string()))
        }
    }
}

/// Row access covered by a policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AccessType {
    /// Reading rows.
    Select,

    /// Adding rows.
    Insert,

    /// Modifying rows.
    Update
}

impl AccessType {
    /// Lowercase name, as stored with the policy.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Select => "select",
            Self::Insert => "insert",
            Self::Update => "update"
        }
    }
}

impl fmt::Display for AccessType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AccessType {
    type Err = PermissionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "select" => Ok(Self::Select),
            "insert" => Ok(Self::Insert),
            "update" => Ok(Self::Update),
            other => Err(PermissionError::InvalidAccessType(other.to_string()))
        }
    }
}

/// Parsed `GRANT`/`REVOKE ... ACCESS TO ... ON repo.table WHERE ...`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PermissionStatement {
    /// Grant or revoke.
    pub kind: PermissionKind,

    /// Access type the policy covers.
    pub access: AccessType,

    /// User receiving (or losing) the access.
    pub grantee: String,

    /// Repository holding the table.
    pub repo: String,

    /// Table the policy applies to.
    pub table: String,

    /// Row predicate, as raw SQL.
    pub policy: String
}

impl PermissionStatement {
    /// Parse a permission statement.
    ///
    /// # Errors
    ///
    /// Returns the first failing clause, checked in statement order.
    ///
    /// # Example
    ///
    /// ```rust
    /// use datahub_orm_core::permissions::{AccessType, PermissionKind, PermissionStatement};
    ///
    /// let stmt = PermissionStatement::parse(
    ///     "GRANT insert ACCESS TO carol ON crm.leads WHERE owner = 'carol'"
    /// )
    /// .unwrap();
    /// assert_eq!(stmt.kind, PermissionKind::Grant);
    /// assert_eq!(stmt.access, AccessType::Insert);
    /// assert_eq!(stmt.repo, "crm");
    /// assert_eq!(stmt.policy, "owner = 'carol'");
    /// ```
    pub fn parse(statement: &str) -> Result<Self, PermissionError> {
        let trimmed = statement.trim_start();
        let word = trimmed
            .split_whitespace()
            .next()
            .ok_or(PermissionError::MissingPermissionType)?;
        let kind: PermissionKind = word.parse()?;
        let rest = &trimmed[word.len()..];

        let (access, rest) = clause(&ACCESS_CLAUSE, rest, "access type")?;
        let access: AccessType = access.trim().parse()?;

        let (grantee, rest) = clause(&GRANTEE_CLAUSE, rest, "grantee")?;
        let (table_ref, rest) = clause(&TABLE_CLAUSE, rest, "table")?;
        let (repo, table) = split_table_ref(table_ref)?;

        let policy = rest.trim().trim_end_matches(';').trim_end();
        if policy.is_empty() {
            return Err(PermissionError::Syntax("policy"));
        }

        Ok(Self {
            kind,
            access,
            grantee: grantee.to_string(),
            repo: repo.to_string(),
            table: table.to_string(),
            policy: policy.to_string()
        })
    }
}

impl FromStr for PermissionStatement {
    type Err = PermissionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for PermissionStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} ACCESS TO {} ON {}.{} WHERE {}",
            self.kind.as_sql(),
            self.access,
            self.grantee,
            self.repo,
            self.table,
            self.policy
        )
    }
}

/// Match `re` at the start of `input`, returning the capture and the rest.
fn clause<'a>(
    re: &Regex,
    input: &'a str,
    name: &'static str
) -> Result<(&'a str, &'a str), PermissionError> {
    let caps = re.captures(input).ok_or(PermissionError::Syntax(name))?;
    let whole = caps.get(0).ok_or(PermissionError::Syntax(name))?;
    let value = caps.get(1).ok_or(PermissionError::Syntax(name))?;
    Ok((value.as_str(), &input[whole.end()..]))
}

fn split_table_ref(table_ref: &str) -> Result<(&str, &str), PermissionError> {
    let invalid = || PermissionError::InvalidTableReference(table_ref.to_string());
    let (repo, table) = table_ref.split_once('.').ok_or_else(invalid)?;
    if repo.is_empty() || table.is_empty() || table.contains('.') {
        return Err(invalid());
    }
    Ok((repo, table))
}
