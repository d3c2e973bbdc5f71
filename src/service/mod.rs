mod email;
mod local;

pub use email::fallback_email;
pub use local::save_local;

use crate::{
    config::{Config, GithubConfig},
    declaration::{Declaration, ServiceForm},
    destination::Destination,
    github::{
        self, dto::pull_request_spec::PullRequestSpec, github_client::GithubClient,
        response::PullRequest,
    },
    slug,
};
use anyhow::{bail, Context, Result};
use std::path::{Path, PathBuf};

/// A service proposal headed for a GitHub repository.
#[derive(Debug, Clone)]
pub struct ServiceSubmission {
    pub destination: Destination,
    pub name: String,
    pub document_type: String,
    pub declaration: Declaration,
}

impl ServiceSubmission {
    pub fn new(
        destination: Destination,
        name: impl Into<String>,
        document_type: impl Into<String>,
        declaration: Declaration,
    ) -> Self {
        ServiceSubmission {
            destination,
            name: name.into(),
            document_type: document_type.into(),
            declaration,
        }
    }

    pub fn title(&self) -> String {
        format!("Add {} - {}", self.name, self.document_type)
    }

    pub fn branch(&self) -> String {
        slug::snake_case(&self.title())
    }

    pub fn file_path(&self, declarations_dir: &str) -> String {
        format!("{}/{}.json", declarations_dir.trim_end_matches('/'), self.name)
    }

    pub fn pull_request_spec(&self, config: &GithubConfig) -> Result<PullRequestSpec> {
        Ok(PullRequestSpec {
            owner: self.destination.owner.to_owned(),
            repo: self.destination.repo.to_owned(),
            target_branch: config.target_branch.to_owned(),
            new_branch: self.branch(),
            title: self.title(),
            file_path: self.file_path(&config.declarations_dir),
            content: self.declaration.to_base64()?,
        })
    }
}

pub async fn add_service(
    client: &GithubClient,
    config: &GithubConfig,
    submission: &ServiceSubmission,
) -> Result<PullRequest> {
    let spec = submission.pull_request_spec(config)?;

    log::info!(
        "Proposing {} to {} on branch {}",
        spec.file_path,
        submission.destination,
        spec.new_branch
    );

    github::submit(client, spec).await
}

#[derive(Debug)]
pub enum Contribution {
    PullRequest(PullRequest),
    Saved(PathBuf),
}

/// Delivers the declaration of `form`: written under `local_path` when one is given,
/// proposed as a pull request otherwise.
pub async fn contribute(
    config: &Config,
    form: &ServiceForm,
    local_path: Option<&Path>,
) -> Result<Contribution> {
    if !form.can_submit() {
        bail!("a document url and at least one significant part are required");
    }

    let declaration = form.declaration();

    let local_path = local_path
        .map(Path::to_path_buf)
        .or_else(|| form.local_path.as_ref().map(PathBuf::from));

    if let Some(dir) = local_path {
        let path = save_local(&dir, &declaration)
            .await
            .context("Cannot save the declaration locally")?;

        return Ok(Contribution::Saved(path));
    }

    let destination = form
        .destination
        .as_deref()
        .unwrap_or(config.default_destination.as_str())
        .parse::<Destination>()?;

    let client = GithubClient::from_config(&config.github)?;
    let submission =
        ServiceSubmission::new(destination, form.name(), form.document_type(), declaration);

    let pull_request = add_service(&client, &config.github, &submission)
        .await
        .context("Cannot create the pull request for the service")?;

    Ok(Contribution::PullRequest(pull_request))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::declaration::DocumentDeclaration;
    use base64::{prelude::BASE64_STANDARD, Engine};
    use mockito::{Matcher, Request, Server};
    use serde_json::json;
    use std::sync::{Arc, Mutex};
    use tempdir::TempDir;

    fn submission() -> ServiceSubmission {
        let declaration = Declaration::new(
            "Example",
            "terms",
            DocumentDeclaration {
                fetch: "https://example.com/terms".to_owned(),
                select: vec!["main".to_owned()],
                remove: vec![],
            },
        );

        ServiceSubmission::new("org/repo".parse().unwrap(), "Example", "terms", declaration)
    }

    #[test]
    fn should_derive_the_pull_request_from_the_service() {
        let submission = submission();

        let spec = submission.pull_request_spec(&GithubConfig::default()).unwrap();

        assert_eq!(spec.owner, "org");
        assert_eq!(spec.repo, "repo");
        assert_eq!(spec.target_branch, "main");
        assert_eq!(spec.title, "Add Example - terms");
        assert_eq!(spec.new_branch, "add_example_terms");
        assert_eq!(spec.file_path, "declarations/Example.json");
        let content = BASE64_STANDARD.decode(&spec.content).unwrap();
        assert_eq!(
            String::from_utf8(content).unwrap(),
            submission.declaration.to_pretty_json().unwrap()
        );
    }

    #[test]
    fn should_target_the_same_branch_for_the_same_title() {
        assert_eq!(submission().branch(), submission().branch());
    }

    fn recorder(
        calls: &Arc<Mutex<Vec<&'static str>>>,
        step: &'static str,
        body: String,
    ) -> impl Fn(&Request) -> Vec<u8> + Send + Sync + 'static {
        let calls = Arc::clone(calls);
        move |_| {
            calls.lock().unwrap().push(step);
            body.clone().into_bytes()
        }
    }

    #[tokio::test]
    async fn should_call_each_github_endpoint_once_in_order() -> Result<()> {
        let mut server = Server::new_async().await;
        let client = GithubClient::new("token", server.url(), "ota-contribute");
        let calls = Arc::new(Mutex::new(Vec::new()));

        let get_ref = server
            .mock("GET", "/repos/org/repo/git/ref/heads/main")
            .with_body_from_request(recorder(
                &calls,
                "ref-get",
                json!({
                    "ref": "refs/heads/main",
                    "object": { "sha": "base", "type": "commit" }
                })
                .to_string(),
            ))
            .expect(1)
            .create_async()
            .await;
        let create_ref = server
            .mock("POST", "/repos/org/repo/git/refs")
            .with_status(422)
            .with_body_from_request(recorder(
                &calls,
                "ref-create",
                r#"{"message":"Reference already exists"}"#.to_owned(),
            ))
            .expect(1)
            .create_async()
            .await;
        server
            .mock("GET", "/repos/org/repo/contents/declarations/Example.json")
            .match_query(Matcher::Any)
            .with_status(404)
            .create_async()
            .await;
        let upsert = server
            .mock("PUT", "/repos/org/repo/contents/declarations/Example.json")
            .match_body(Matcher::PartialJson(json!({
                "message": "Add Example - terms",
                "branch": "add_example_terms"
            })))
            .with_status(201)
            .with_body_from_request(recorder(&calls, "file-update", "{}".to_owned()))
            .expect(1)
            .create_async()
            .await;
        let create_pr = server
            .mock("POST", "/repos/org/repo/pulls")
            .with_status(201)
            .with_body_from_request(recorder(
                &calls,
                "pr-create",
                json!({
                    "number": 7,
                    "html_url": "https://github.com/org/repo/pull/7",
                    "url": "https://api.github.com/repos/org/repo/pulls/7",
                    "state": "open"
                })
                .to_string(),
            ))
            .expect(1)
            .create_async()
            .await;

        let pr = add_service(&client, &GithubConfig::default(), &submission()).await?;

        get_ref.assert_async().await;
        create_ref.assert_async().await;
        upsert.assert_async().await;
        create_pr.assert_async().await;
        assert_eq!(pr.number, 7);
        assert_eq!(
            *calls.lock().unwrap(),
            vec!["ref-get", "ref-create", "file-update", "pr-create"]
        );

        Ok(())
    }

    #[tokio::test]
    async fn should_save_locally_when_a_local_path_is_given() -> Result<()> {
        let dir = TempDir::new("services")?;
        let form = ServiceForm::from_pairs([
            ("url", "https://example.com/terms"),
            ("name", "Example"),
            ("documentType", "terms"),
            ("selectedCss", "main"),
        ]);

        let contribution = contribute(&Config::default(), &form, Some(dir.path())).await?;

        match contribution {
            Contribution::Saved(path) => assert_eq!(path, dir.path().join("Example.json")),
            other => panic!("unexpected contribution {:?}", other),
        }

        Ok(())
    }

    #[tokio::test]
    async fn should_refuse_a_form_without_significant_part() {
        let form = ServiceForm::from_pairs([("url", "https://example.com/terms")]);

        let result = contribute(&Config::default(), &form, None).await;

        assert!(result.is_err());
    }
}
