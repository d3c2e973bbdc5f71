use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct RefResponse {
    pub r#ref: String,
    pub object: Object,
}

#[derive(Debug, Deserialize)]
pub struct Object {
    pub sha: String,
}

#[derive(Debug, Deserialize, Default)]
pub struct Sha {
    pub sha: String,
}
