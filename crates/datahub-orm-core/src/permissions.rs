// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Row-level security permission statements.
//!
//! DataHub lets a repository owner restrict what collaborators see of a table
//! with statements of the form:
//!
//! ```text
//! GRANT select ACCESS TO bob ON sales.orders WHERE region = 'EU'
//! REVOKE select ACCESS TO bob ON sales.orders WHERE region = 'EU'
//! ```
//!
//! # Module Structure
//!
//! ```text
//! permissions/
//! ├── statement.rs — PermissionStatement parsing
//! └── policy.rs    — PolicyStore, MemoryPolicyStore, PermissionsProcessor
//! ```
//!
//! # Example
//!
//! ```rust
//! use datahub_orm_core::permissions::{MemoryPolicyStore, PermissionsProcessor, PolicyChange};
//!
//! let processor = PermissionsProcessor::new("alice", "alice");
//! let mut store = MemoryPolicyStore::new();
//!
//! let change = processor
//!     .process("grant select access to bob on sales.orders where region = 'EU'", &mut store)
//!     .unwrap();
//! assert!(matches!(change, PolicyChange::Granted(_)));
//! assert_eq!(store.len(), 1);
//! ```

mod policy;
mod statement;

pub use policy::{
    MemoryPolicyStore, PermissionsProcessor, PolicyChange, PolicyRule, PolicyStore,
    SecurityPolicy
};
pub use statement::{AccessType, PermissionKind, PermissionStatement};
