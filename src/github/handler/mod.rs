pub mod branch_handler;
pub mod branches_handler;
pub mod commits_handler;
pub mod pull_request_handler;
pub mod repository_handler;
