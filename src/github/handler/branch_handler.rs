use crate::github::{
    builder::upsert_file_builder::UpsertFileBuilder, github_client::GithubClient, response::Sha,
};
use anyhow::Result;

pub struct BranchHandler<'a> {
    client: &'a GithubClient,
    owner: String,
    repo: String,
    branch: String,
}

impl<'a> BranchHandler<'a> {
    pub fn new(
        client: &'a GithubClient,
        owner: impl Into<String>,
        repo: impl Into<String>,
        branch: impl Into<String>,
    ) -> Self {
        BranchHandler {
            client,
            owner: owner.into(),
            repo: repo.into(),
            branch: branch.into(),
        }
    }

    /// Sha of the commit at the tip of the branch.
    pub async fn get_commit_sha(&self) -> Result<Sha> {
        self.client
            .get_branch_sha(&self.owner, &self.repo, &self.branch)
            .await
    }

    pub fn upsert_file(&self) -> UpsertFileBuilder<'a> {
        UpsertFileBuilder::new(self.client, &self.owner, &self.repo, &self.branch)
    }
}
