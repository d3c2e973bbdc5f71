mod commit_response;
mod file_sha_response;
mod pull_request_response;
mod ref_response;

pub use commit_response::CommitResponse;
pub use file_sha_response::FileShaResponse;
pub use pull_request_response::PullRequest;
pub use ref_response::{RefResponse, Sha};
