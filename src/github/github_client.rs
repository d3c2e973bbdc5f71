use super::{
    commit::CommitSummary,
    dto::{pull_request_dto::PullRequestDto, upsert_file_dto::UpsertFileDto},
    handler::repository_handler::RepositoryHandler,
    request::{BranchRefRequest, PullRequestRequest, SerializeRequest, UpsertFileRequest},
    response::{CommitResponse, FileShaResponse, PullRequest, RefResponse, Sha},
};
use crate::{config::GithubConfig, get, http::HttpClient, post, put};
use anyhow::{Context, Result};
use itertools::Itertools;
use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use reqwest::Url;
use std::env;

const GITHUB_TOKEN_VAR: &str = "GITHUB_TOKEN";

// Characters that cannot appear raw inside a single URL path segment.
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'[')
    .add(b'\\')
    .add(b']')
    .add(b'^')
    .add(b'`')
    .add(b'{')
    .add(b'|')
    .add(b'}');

/// Percent-encodes each `/`-separated segment of a repository file path.
fn encode_contents_path(path: &str) -> String {
    path.split('/')
        .map(|segment| utf8_percent_encode(segment, PATH_SEGMENT))
        .join("/")
}

#[derive(Clone)]
pub struct GithubClient {
    http: HttpClient,
    api_url: String,
    token: String,
    user_agent: String,
}

impl GithubClient {
    pub fn new(
        token: impl Into<String>,
        api_url: impl Into<String>,
        user_agent: impl Into<String>,
    ) -> Self {
        let api_url: String = api_url.into();

        GithubClient {
            http: HttpClient::new(),
            api_url: api_url.trim_end_matches('/').to_owned(),
            token: token.into(),
            user_agent: user_agent.into(),
        }
    }

    /// Builds a client for the configured API, authenticated with `GITHUB_TOKEN`.
    pub fn from_config(config: &GithubConfig) -> Result<Self> {
        let token = env::var(GITHUB_TOKEN_VAR)
            .with_context(|| format!("{} must be set to open pull requests", GITHUB_TOKEN_VAR))?;

        Ok(GithubClient::new(token, &config.api_url, &config.user_agent))
    }

    pub fn repo(&self, owner: impl Into<String>, name: impl Into<String>) -> RepositoryHandler<'_> {
        RepositoryHandler::new(self, owner, name)
    }

    pub(super) fn http(&self) -> &HttpClient {
        &self.http
    }

    pub(super) fn token(&self) -> &str {
        &self.token
    }

    pub(super) fn user_agent(&self) -> &str {
        &self.user_agent
    }

    fn endpoint(&self, path: impl AsRef<str>) -> String {
        format!("{}/{}", self.api_url, path.as_ref())
    }

    pub(super) async fn get_branch_sha(&self, owner: &str, repo: &str, branch: &str) -> Result<Sha> {
        let uri = self.endpoint(format!("repos/{}/{}/git/ref/heads/{}", owner, repo, branch));

        let response = get!(self, &uri)?;

        let reference = serde_json::from_str::<RefResponse>(&response)?;
        log::debug!("{} points at {}", reference.r#ref, reference.object.sha);

        Ok(Sha {
            sha: reference.object.sha,
        })
    }

    pub(super) async fn create_branch(
        &self,
        owner: &str,
        repo: &str,
        branch: &str,
        sha: &str,
    ) -> Result<()> {
        let uri = self.endpoint(format!("repos/{}/{}/git/refs", owner, repo));

        let body = BranchRefRequest::new(branch, sha).into_request()?;

        post!(self, &uri, body)?;

        Ok(())
    }

    /// Blob sha of `path` on `branch`, `None` when the file does not exist yet.
    pub(super) async fn get_file_sha(
        &self,
        owner: &str,
        repo: &str,
        path: &str,
        branch: &str,
    ) -> Result<Option<String>> {
        let uri = self.endpoint(format!(
            "repos/{}/{}/contents/{}",
            owner,
            repo,
            encode_contents_path(path)
        ));
        let url = Url::parse_with_params(&uri, &[("ref", branch)])?;

        match get!(self, url) {
            Ok(response) => {
                let file = serde_json::from_str::<FileShaResponse>(&response)?;
                Ok(Some(file.sha))
            }
            Err(err) if err.is_not_found() => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    pub(super) async fn upsert_file(&self, file: UpsertFileDto) -> Result<()> {
        log::debug!("Upserting file {}", file.path);

        let sha = self
            .get_file_sha(&file.owner, &file.repo, &file.path, &file.branch)
            .await
            .context("failed to look up the current file sha")?;

        if sha.is_some() {
            log::debug!("updating existing file");
        } else {
            log::debug!("creating new file");
        }

        let body =
            UpsertFileRequest::new(&file.message, &file.content, Some(file.branch), sha)
                .into_request()?;

        let uri = self.endpoint(format!(
            "repos/{}/{}/contents/{}",
            file.owner,
            file.repo,
            encode_contents_path(&file.path)
        ));

        put!(self, &uri, body)?;

        Ok(())
    }

    pub(super) async fn create_pull_request(
        &self,
        pull_request: PullRequestDto,
    ) -> Result<PullRequest> {
        log::debug!("Creating pull request");
        let uri = self.endpoint(format!(
            "repos/{}/{}/pulls",
            pull_request.owner, pull_request.repo
        ));

        let body = PullRequestRequest::new(
            pull_request.title,
            pull_request.head,
            pull_request.base,
        )
        .into_request()?;

        let response = post!(self, &uri, body)?;

        let pr: PullRequest = serde_json::from_str(&response)?;

        Ok(pr)
    }

    pub(super) async fn latest_commit(
        &self,
        owner: &str,
        repo: &str,
        path: &str,
    ) -> Result<Option<CommitSummary>> {
        let uri = self.endpoint(format!("repos/{}/{}/commits", owner, repo));
        let url = Url::parse_with_params(
            &uri,
            &[("path", path), ("page", "1"), ("per_page", "1")],
        )?;

        let response = get!(self, url)?;

        let commits = serde_json::from_str::<Vec<CommitResponse>>(&response)?;

        Ok(commits.into_iter().next().map(CommitSummary::from))
    }
}
