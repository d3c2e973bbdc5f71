pub mod builder;
pub mod commit;
pub mod dto;
pub mod github_client;
mod handler;
mod macros;
mod request;
pub mod response;

use self::{
    builder::BuilderExecutor, commit::CommitSummary, dto::pull_request_spec::PullRequestSpec,
    github_client::GithubClient, response::PullRequest,
};
use crate::{destination::Destination, http};
use anyhow::{Context, Result};

/// Proposes `spec.content` at `spec.file_path` through a pull request.
///
/// The steps run strictly in order: resolve the tip of the target branch, create the
/// new branch from it, commit the file on the new branch, open the pull request.
/// A branch that already exists is reused; any other failure aborts the submission.
pub async fn submit(client: &GithubClient, spec: PullRequestSpec) -> Result<PullRequest> {
    let repo = client.repo(&spec.owner, &spec.repo);

    log::debug!("Getting the tip of {}", spec.target_branch);
    let sha = repo
        .branch(&spec.target_branch)
        .get_commit_sha()
        .await
        .context("Error getting the base branch commit sha")?;

    log::debug!("Creating branch {}", spec.new_branch);
    let created = repo
        .branches()
        .create()
        .branch(&spec.new_branch)
        .sha(sha.sha)
        .execute()
        .await;

    match created {
        Ok(()) => log::debug!("Branch {} created", spec.new_branch),
        Err(err) if http::is_reference_already_exists(&err) => {
            log::warn!("Branch {} already exists, reusing it", spec.new_branch)
        }
        Err(err) => return Err(err.context("Error creating the branch")),
    }

    log::debug!("Uploading {}", spec.file_path);
    repo.branch(&spec.new_branch)
        .upsert_file()
        .path(&spec.file_path)
        .message(&spec.title)
        .content(spec.content)
        .execute()
        .await
        .context("Error uploading file to head branch")?;

    log::debug!("Creating pull request");
    let pull_request = repo
        .pull_request()
        .create()
        .title(spec.title)
        .head(&spec.new_branch)
        .base(spec.target_branch)
        .execute()
        .await
        .context("Error creating pull request")?;

    log::info!("Pull request #{} opened", pull_request.number);

    Ok(pull_request)
}

/// Last commit touching `path` in `repo` (`owner/repo`).
///
/// Lookup failures are logged and reported as `None`, same as a path with no history.
pub async fn latest_commit(client: &GithubClient, repo: &str, path: &str) -> Option<CommitSummary> {
    let destination = match repo.parse::<Destination>() {
        Ok(destination) => destination,
        Err(err) => {
            log::error!("Cannot look up commits of {}: {}", repo, err);
            return None;
        }
    };

    let commit = client
        .repo(&destination.owner, &destination.repo)
        .commits()
        .latest(path)
        .await;

    match commit {
        Ok(Some(commit)) => Some(commit),
        Ok(None) => {
            log::debug!("No commit found for {} in {}", path, repo);
            None
        }
        Err(err) => {
            log::error!("Cannot get the latest commit of {} in {}: {:#}", path, repo, err);
            None
        }
    }
}
