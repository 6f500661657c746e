// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use datahub_orm::Model;

#[derive(Model)]
struct RepoCollaborator {
    user_name: String,
    privileges: String,
}

fn main() {
    assert_eq!(RepoCollaborator::TABLE_NAME, "repo_collaborator");
    assert_eq!(RepoCollaborator::column_names(), vec!["user_name", "privileges"]);
}
