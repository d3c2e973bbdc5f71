use super::response::CommitResponse;
use serde::Serialize;

/// Display projection of the last commit touching a declaration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommitSummary {
    pub sha: String,
    pub url: String,
    pub author: String,
    pub author_url: Option<String>,
    pub avatar_url: Option<String>,
    pub date: String,
    pub message: String,
}

impl From<CommitResponse> for CommitSummary {
    fn from(response: CommitResponse) -> Self {
        let git_author = response.commit.author;
        let date = git_author
            .as_ref()
            .map(|author| author.date.to_owned())
            .unwrap_or_default();

        let (author, author_url, avatar_url) = match response.author {
            Some(account) => (
                account.login,
                Some(account.html_url),
                Some(account.avatar_url),
            ),
            None => (
                git_author.map(|author| author.name).unwrap_or_default(),
                None,
                None,
            ),
        };

        CommitSummary {
            sha: response.sha,
            url: response.html_url,
            author,
            author_url,
            avatar_url,
            date,
            message: response.commit.message,
        }
    }
}
