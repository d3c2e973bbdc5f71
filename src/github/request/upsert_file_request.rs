use serde::{Deserialize, Serialize};

/// Body of `PUT /repos/{owner}/{repo}/contents/{path}`. `content` is already base64 encoded.
#[derive(Debug, Serialize, Deserialize)]
pub struct UpsertFileRequest {
    pub message: String,
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub branch: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sha: Option<String>,
}

impl UpsertFileRequest {
    pub fn new(
        message: impl Into<String>,
        content: impl Into<String>,
        branch: Option<String>,
        sha: Option<String>,
    ) -> Self {
        Self {
            message: message.into(),
            content: content.into(),
            branch,
            sha,
        }
    }
}
