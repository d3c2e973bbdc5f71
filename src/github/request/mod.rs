mod branch_ref_request;
mod pull_request_request;
mod upsert_file_request;

pub use branch_ref_request::BranchRefRequest;
pub use pull_request_request::PullRequestRequest;
pub use upsert_file_request::UpsertFileRequest;

use anyhow::Result;
use serde::Serialize;

pub trait SerializeRequest {
    fn into_request(self) -> Result<String>
    where
        Self: Serialize + Sized,
    {
        let body = serde_json::to_string(&self)?;

        Ok(body)
    }
}

impl SerializeRequest for PullRequestRequest {}
impl SerializeRequest for BranchRefRequest {}
impl SerializeRequest for UpsertFileRequest {}
