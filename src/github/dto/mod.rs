pub mod pull_request_dto;
pub mod pull_request_spec;
pub mod upsert_file_dto;
