use crate::{
    config::Config,
    declaration::ServiceForm,
    document_types,
    github::{self, github_client::GithubClient},
    service::{self, Contribution},
};
use anyhow::{bail, Result};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Propose new services to track in Open Terms Archive.
#[derive(Parser)]
#[clap(name = "ota-contribute", version)]
pub struct Cli {
    /// Path to the YAML config file
    #[clap(long, global = true)]
    pub config: Option<PathBuf>,
    /// Print debug logs
    #[clap(short, long, global = true)]
    pub verbose: bool,
    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Propose the service described by a contribution url
    Submit {
        contribution_url: String,
        /// Write the declaration in this directory instead of opening a pull request
        #[clap(long)]
        local_path: Option<PathBuf>,
        #[clap(flatten)]
        edits: SelectorEdits,
    },
    /// Print the declaration described by a contribution url
    Declaration {
        contribution_url: String,
        #[clap(flatten)]
        edits: SelectorEdits,
    },
    /// List the document types a service may declare
    DocumentTypes,
    /// Show the last commit touching a path of an `owner/repo` repository
    LatestCommit { repo: String, path: String },
}

/// Selector changes applied on top of the contribution url.
#[derive(Args, Debug, Default)]
pub struct SelectorEdits {
    /// Add a significant part
    #[clap(long = "select", value_name = "SELECTOR")]
    pub select: Vec<String>,
    /// Replace the significant part at INDEX, an empty selector drops it
    #[clap(long = "change", value_name = "INDEX=SELECTOR", value_parser = parse_change)]
    pub change: Vec<(usize, String)>,
    /// Drop the significant part at INDEX
    #[clap(long = "unselect", value_name = "INDEX")]
    pub unselect: Vec<usize>,
    /// Add an insignificant part
    #[clap(long = "remove", value_name = "SELECTOR")]
    pub remove: Vec<String>,
}

impl SelectorEdits {
    /// Applies changes first, then drops (highest index first), then additions.
    pub fn apply(&self, form: &mut ServiceForm) {
        for (index, selector) in &self.change {
            form.selected_css.change(*index, selector);
        }

        let mut unselect = self.unselect.clone();
        unselect.sort_unstable_by(|a, b| b.cmp(a));
        unselect.dedup();
        for index in unselect {
            form.selected_css.remove(index);
        }

        for selector in &self.select {
            form.selected_css.add(selector);
        }
        for selector in &self.remove {
            form.removed_css.add(selector);
        }
    }
}

fn parse_change(value: &str) -> Result<(usize, String), String> {
    let (index, selector) = value
        .split_once('=')
        .ok_or_else(|| format!("expected INDEX=SELECTOR, got `{}`", value))?;
    let index = index
        .trim()
        .parse::<usize>()
        .map_err(|err| format!("invalid index `{}`: {}", index, err))?;

    Ok((index, selector.trim().to_owned()))
}

pub async fn run(cli: Cli, config: Config) -> Result<()> {
    match cli.command {
        Commands::Submit {
            contribution_url,
            local_path,
            edits,
        } => submit(&config, &contribution_url, local_path, &edits).await,
        Commands::Declaration {
            contribution_url,
            edits,
        } => {
            let mut form = ServiceForm::from_url(&contribution_url)?;
            edits.apply(&mut form);
            print!("{}", form.declaration().to_pretty_json()?);
            Ok(())
        }
        Commands::DocumentTypes => {
            let types = document_types::list_document_types(&config.document_types_url).await;
            if types.is_empty() {
                log::warn!("Document types are unavailable");
            }
            for document_type in types {
                println!("{}", document_type);
            }
            Ok(())
        }
        Commands::LatestCommit { repo, path } => {
            let client = GithubClient::from_config(&config.github)?;
            match github::latest_commit(&client, &repo, &path).await {
                Some(commit) => println!("{}", serde_json::to_string_pretty(&commit)?),
                None => println!("No commit found"),
            }
            Ok(())
        }
    }
}

async fn submit(
    config: &Config,
    contribution_url: &str,
    local_path: Option<PathBuf>,
    edits: &SelectorEdits,
) -> Result<()> {
    let mut form = ServiceForm::from_url(contribution_url)?;
    edits.apply(&mut form);

    let types = document_types::list_document_types(&config.document_types_url).await;
    if !document_types::is_known_document_type(&types, form.document_type()) {
        bail!(
            "Unknown document type `{}`, expected one of: {}",
            form.document_type(),
            types.join(", ")
        );
    }

    match service::contribute(config, &form, local_path.as_deref()).await {
        Ok(Contribution::PullRequest(pull_request)) => {
            println!("{}", pull_request.html_url);
            Ok(())
        }
        Ok(Contribution::Saved(path)) => {
            println!("{}", path.display());
            Ok(())
        }
        Err(err) => {
            log::error!("Could not submit the service: {:#}", err);
            println!(
                "You can still send it to the maintainers by email: {}",
                service::fallback_email(&form)
            );
            Err(err)
        }
    }
}
