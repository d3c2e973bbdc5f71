use crate::github::{commit::CommitSummary, github_client::GithubClient};
use anyhow::Result;

pub struct CommitsHandler<'a> {
    client: &'a GithubClient,
    owner: String,
    repo: String,
}

impl<'a> CommitsHandler<'a> {
    pub fn new(client: &'a GithubClient, owner: impl Into<String>, repo: impl Into<String>) -> Self {
        CommitsHandler {
            client,
            owner: owner.into(),
            repo: repo.into(),
        }
    }

    /// Most recent commit touching `path`, if any.
    pub async fn latest(&self, path: &str) -> Result<Option<CommitSummary>> {
        self.client
            .latest_commit(&self.owner, &self.repo, path)
            .await
    }
}
