use super::BuilderExecutor;
use crate::github::{dto::upsert_file_dto::UpsertFileDto, github_client::GithubClient};
use anyhow::Result;

pub struct UpsertFileBuilder<'a> {
    client: &'a GithubClient,
    owner: String,
    repo: String,
    path: String,
    commit_message: String,
    content: String,
    head: String,
}

impl<'a> UpsertFileBuilder<'a> {
    pub fn new(
        client: &'a GithubClient,
        owner: impl Into<String>,
        repo: impl Into<String>,
        branch: impl Into<String>,
    ) -> Self {
        UpsertFileBuilder {
            client,
            owner: owner.into(),
            repo: repo.into(),
            path: String::new(),
            commit_message: String::new(),
            content: String::new(),
            head: branch.into(),
        }
    }

    pub fn path(mut self, path: impl Into<String>) -> Self {
        self.path = path.into();
        self
    }

    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.commit_message = message.into();
        self
    }

    /// Base64 encoded content.
    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }
}

impl BuilderExecutor for UpsertFileBuilder<'_> {
    type Output = ();

    async fn execute(self) -> Result<Self::Output> {
        let file = UpsertFileDto {
            owner: self.owner,
            repo: self.repo,
            path: self.path,
            branch: self.head,
            message: self.commit_message,
            content: self.content,
        };

        self.client.upsert_file(file).await
    }
}
