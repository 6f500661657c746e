// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Security policy storage and statement processing.

use std::convert::Infallible;

use tracing::{info, warn};

use super::statement::{AccessType, PermissionKind, PermissionStatement};
use crate::error::{PermissionError, ProcessError};

/// Everything that identifies a security policy apart from its id.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PolicyRule {
    /// Account owning the repository.
    pub repo_base: String,

    /// Repository name.
    pub repo: String,

    /// Table name.
    pub table: String,

    /// Covered access type.
    pub access: AccessType,

    /// User receiving the access.
    pub grantee: String,

    /// User who granted it.
    pub grantor: String,

    /// Row predicate.
    pub policy: String
}

/// A stored security policy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SecurityPolicy {
    /// Store-assigned identifier.
    pub id: u64,

    /// Policy contents.
    pub rule: PolicyRule
}

/// Backend holding security policies.
pub trait PolicyStore {
    /// Error raised by the backend.
    type Error: std::error::Error + 'static;

    /// Store a new policy and return it with its id.
    fn add_policy(&mut self, rule: PolicyRule) -> Result<SecurityPolicy, Self::Error>;

    /// Find a policy whose rule equals `rule`.
    fn find_policy(&self, rule: &PolicyRule) -> Result<Option<SecurityPolicy>, Self::Error>;

    /// Remove a policy by id, returning it if it existed.
    fn remove_policy(&mut self, id: u64) -> Result<Option<SecurityPolicy>, Self::Error>;
}

/// In-process [`PolicyStore`].
///
/// Ids start at 1 and are never reused. Granting the same rule twice stores
/// two policies; lookups return the oldest.
#[derive(Debug, Clone)]
pub struct MemoryPolicyStore {
    policies: Vec<SecurityPolicy>,
    next_id:  u64
}

impl MemoryPolicyStore {
    /// Empty store.
    pub const fn new() -> Self {
        Self {
            policies: Vec::new(),
            next_id:  1
        }
    }

    /// Number of stored policies.
    pub fn len(&self) -> usize {
        self.policies.len()
    }

    /// Whether no policies are stored.
    pub fn is_empty(&self) -> bool {
        self.policies.is_empty()
    }

    /// All policies, oldest first.
    pub fn policies(&self) -> &[SecurityPolicy] {
        &self.policies
    }
}

impl Default for MemoryPolicyStore {
    fn default() -> Self {
        Self::new()
    }
}

impl PolicyStore for MemoryPolicyStore {
    type Error = Infallible;

    fn add_policy(&mut self, rule: PolicyRule) -> Result<SecurityPolicy, Self::Error> {
        let policy = SecurityPolicy {
            id: self.next_id,
            rule
        };
        self.next_id += 1;
        self.policies.push(policy.clone());
        Ok(policy)
    }

    fn find_policy(&self, rule: &PolicyRule) -> Result<Option<SecurityPolicy>, Self::Error> {
        Ok(self.policies.iter().find(|p| &p.rule == rule).cloned())
    }

    fn remove_policy(&mut self, id: u64) -> Result<Option<SecurityPolicy>, Self::Error> {
        let removed = self
            .policies
            .iter()
            .position(|p| p.id == id)
            .map(|index| self.policies.remove(index));
        Ok(removed)
    }
}

/// Outcome of a processed statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PolicyChange {
    /// A policy was added.
    Granted(SecurityPolicy),

    /// A policy was removed.
    Revoked(SecurityPolicy)
}

/// Applies permission statements on behalf of one user.
///
/// The user acts as grantor: a revoke only removes policies that same user
/// granted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PermissionsProcessor {
    repo_base: String,
    user:      String
}

impl PermissionsProcessor {
    /// Processor for `user` working inside `repo_base`.
    pub fn new(repo_base: impl Into<String>, user: impl Into<String>) -> Self {
        Self {
            repo_base: repo_base.into(),
            user:      user.into()
        }
    }

    /// Account owning the repositories.
    pub fn repo_base(&self) -> &str {
        &self.repo_base
    }

    /// Acting user.
    pub fn user(&self) -> &str {
        &self.user
    }

    /// Parse `statement` and apply it to `store`.
    ///
    /// # Errors
    ///
    /// - [`ProcessError::Permission`] for parse failures or a revoke with no
    ///   matching policy
    /// - [`ProcessError::Store`] when the backend fails
    pub fn process<S: PolicyStore>(
        &self,
        statement: &str,
        store: &mut S
    ) -> Result<PolicyChange, ProcessError<S::Error>> {
        let statement = PermissionStatement::parse(statement)?;
        self.apply(statement, store)
    }

    /// Apply an already parsed statement to `store`.
    ///
    /// # Errors
    ///
    /// See [`process`](Self::process).
    pub fn apply<S: PolicyStore>(
        &self,
        statement: PermissionStatement,
        store: &mut S
    ) -> Result<PolicyChange, ProcessError<S::Error>> {
        let kind = statement.kind;
        let rule = self.rule(statement);

        match kind {
            PermissionKind::Grant => {
                let policy = store.add_policy(rule).map_err(ProcessError::Store)?;
                info!(
                    id = policy.id,
                    repo = %policy.rule.repo,
                    table = %policy.rule.table,
                    grantee = %policy.rule.grantee,
                    access = %policy.rule.access,
                    "security policy granted"
                );
                Ok(PolicyChange::Granted(policy))
            }
            PermissionKind::Revoke => {
                let found = store.find_policy(&rule).map_err(ProcessError::Store)?;
                let Some(found) = found else {
                    warn!(
                        repo = %rule.repo,
                        table = %rule.table,
                        grantee = %rule.grantee,
                        "revoke matched no security policy"
                    );
                    return Err(not_found(rule).into());
                };
                let removed = store
                    .remove_policy(found.id)
                    .map_err(ProcessError::Store)?
                    .ok_or_else(|| not_found(found.rule.clone()))?;
                info!(id = removed.id, "security policy revoked");
                Ok(PolicyChange::Revoked(removed))
            }
        }
    }

    fn rule(&self, statement: PermissionStatement) -> PolicyRule {
        PolicyRule {
            repo_base: self.repo_base.clone(),
            repo:      statement.repo,
            table:     statement.table,
            access:    statement.access,
            grantee:   statement.grantee,
            grantor:   self.user.clone(),
            policy:    statement.policy
        }
    }
}

fn not_found(rule: PolicyRule) -> PermissionError {
    PermissionError::PolicyNotFound {
        access:  rule.access.to_string(),
        grantee: rule.grantee,
        repo:    rule.repo,
        table:   rule.table,
        policy:  rule.policy
    }
}

#[cfg(test)]
mod tests {
    use std::fmt;

    use super::*;

    const GRANT: &str = "grant select access to bob on sales.orders where region = 'EU'";
    const REVOKE: &str = "revoke select access to bob on sales.orders where region = 'EU'";

    #[test]
    fn grant_adds_policy() {
        let processor = PermissionsProcessor::new("alice", "alice");
        let mut store = MemoryPolicyStore::new();

        let change = processor.process(GRANT, &mut store).unwrap();
        let PolicyChange::Granted(policy) = change else {
            panic!("expected grant");
        };
        assert_eq!(policy.id, 1);
        assert_eq!(policy.rule.repo_base, "alice");
        assert_eq!(policy.rule.grantor, "alice");
        assert_eq!(policy.rule.grantee, "bob");
        assert_eq!(policy.rule.access, AccessType::Select);
        assert_eq!(store.policies(), &[policy]);
    }

    #[test]
    fn revoke_removes_matching_policy() {
        let processor = PermissionsProcessor::new("alice", "alice");
        let mut store = MemoryPolicyStore::new();
        processor.process(GRANT, &mut store).unwrap();

        let change = processor.process(REVOKE, &mut store).unwrap();
        assert!(matches!(change, PolicyChange::Revoked(p) if p.id == 1));
        assert!(store.is_empty());
    }

    #[test]
    fn revoke_without_grant_fails() {
        let processor = PermissionsProcessor::new("alice", "alice");
        let mut store = MemoryPolicyStore::new();

        let err = processor.process(REVOKE, &mut store).unwrap_err();
        assert!(matches!(
            err,
            ProcessError::Permission(PermissionError::PolicyNotFound { .. })
        ));
    }

    #[test]
    fn revoke_by_other_grantor_fails() {
        let owner = PermissionsProcessor::new("alice", "alice");
        let other = PermissionsProcessor::new("alice", "mallory");
        let mut store = MemoryPolicyStore::new();
        owner.process(GRANT, &mut store).unwrap();

        assert!(other.process(REVOKE, &mut store).is_err());
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn revoke_requires_same_policy_text() {
        let processor = PermissionsProcessor::new("alice", "alice");
        let mut store = MemoryPolicyStore::new();
        processor.process(GRANT, &mut store).unwrap();

        let result = processor.process(
            "revoke select access to bob on sales.orders where region = 'US'",
            &mut store
        );
        assert!(result.is_err());
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn ids_are_not_reused() {
        let processor = PermissionsProcessor::new("alice", "alice");
        let mut store = MemoryPolicyStore::new();
        processor.process(GRANT, &mut store).unwrap();
        processor.process(REVOKE, &mut store).unwrap();

        let change = processor.process(GRANT, &mut store).unwrap();
        assert!(matches!(change, PolicyChange::Granted(p) if p.id == 2));
    }

    #[test]
    fn duplicate_grants_revoke_oldest_first() {
        let processor = PermissionsProcessor::new("alice", "alice");
        let mut store = MemoryPolicyStore::new();
        processor.process(GRANT, &mut store).unwrap();
        processor.process(GRANT, &mut store).unwrap();

        let change = processor.process(REVOKE, &mut store).unwrap();
        assert!(matches!(change, PolicyChange::Revoked(p) if p.id == 1));
        assert_eq!(store.policies()[0].id, 2);
    }

    #[test]
    fn parse_errors_surface() {
        let processor = PermissionsProcessor::new("alice", "alice");
        let mut store = MemoryPolicyStore::new();

        let err = processor.process("drop table x", &mut store).unwrap_err();
        assert!(matches!(
            err,
            ProcessError::Permission(PermissionError::InvalidPermissionType(_))
        ));
    }

    #[derive(Debug)]
    struct Offline;

    impl fmt::Display for Offline {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("offline")
        }
    }

    impl std::error::Error for Offline {}

    struct OfflineStore;

    impl PolicyStore for OfflineStore {
        type Error = Offline;

        fn add_policy(&mut self, _rule: PolicyRule) -> Result<SecurityPolicy, Self::Error> {
            Err(Offline)
        }

        fn find_policy(&self, _rule: &PolicyRule) -> Result<Option<SecurityPolicy>, Self::Error> {
            Err(Offline)
        }

        fn remove_policy(&mut self, _id: u64) -> Result<Option<SecurityPolicy>, Self::Error> {
            Err(Offline)
        }
    }

    #[test]
    fn store_errors_surface() {
        let processor = PermissionsProcessor::new("alice", "alice");
        let err = processor.process(GRANT, &mut OfflineStore).unwrap_err();
        assert!(matches!(err, ProcessError::Store(Offline)));
        assert_eq!(err.to_string(), "policy store failed: offline");
    }
}
