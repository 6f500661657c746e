// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

#![deny(missing_docs)]

//! Column constants carry field docs, so `missing_docs` stays quiet.

use datahub_orm::Model;

/// A DataHub repository.
#[derive(Model)]
#[model(tableName = "repos")]
pub struct Repo {
    /// Repository name.
    pub name: String,
    /// Owning account.
    pub repo_base: String,
}

fn main() {
    assert_eq!(Repo::NAME.name(), "name");
    assert_eq!(Repo::REPO_BASE.name(), "repo_base");
}
