use serde::Deserialize;

#[derive(Debug, Deserialize, Default)]
pub struct FileShaResponse {
    pub sha: String,
}
