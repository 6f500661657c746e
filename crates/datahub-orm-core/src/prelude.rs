// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Convenient re-exports for common usage.
//!
//! # Usage
//!
//! ```rust
//! use datahub_orm_core::prelude::*;
//!
//! let addr = ServerAddress::default();
//! assert_eq!(addr.port(), constants::SERVER_ADDR_PORT);
//! ```

pub use crate::{
    Column, ColumnDef, ColumnType, ConfigError, Model, PermissionError, ProcessError,
    ServerAddress, SqlType, constants,
    permissions::{
        AccessType, MemoryPolicyStore, PermissionKind, PermissionStatement,
        PermissionsProcessor, PolicyChange, PolicyStore
    }
};
