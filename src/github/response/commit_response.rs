use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct CommitResponse {
    pub sha: String,
    pub html_url: String,
    pub commit: CommitDetails,
    pub author: Option<Account>,
}

#[derive(Debug, Deserialize)]
pub struct CommitDetails {
    pub message: String,
    pub author: Option<GitIdentity>,
}

#[derive(Debug, Deserialize)]
pub struct GitIdentity {
    pub name: String,
    pub date: String,
}

/// GitHub account linked to a commit, absent when the author email is unknown to GitHub.
#[derive(Debug, Deserialize)]
pub struct Account {
    pub login: String,
    pub avatar_url: String,
    pub html_url: String,
}
