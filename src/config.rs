use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

const DEFAULT_CONFIG_FILE_NAME: &str = "ota-contribute.yaml";

const GITHUB_API_URL: &str = "https://api.github.com";
const MAIN_BRANCH_NAME: &str = "main";
const DECLARATIONS_DIR: &str = "declarations";
const USER_AGENT: &str = "ota-contribute";

const DOCUMENT_TYPES_URL: &str = "http://51.89.227.200:7011/data/api/list_documentTypes/v1/";
const DEFAULT_DESTINATION: &str = "OpenTermsArchive/services-all";
const DEFAULT_LOG_LEVEL: &str = "info";

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub github: GithubConfig,
    #[serde(default = "Config::default_document_types_url")]
    pub document_types_url: String,
    #[serde(default = "Config::default_destination")]
    pub default_destination: String,
    #[serde(default = "Config::default_log_level")]
    pub log_level: String,
}

impl Config {
    /// Reads `path`, or `ota-contribute.yaml` when no path is given.
    ///
    /// A missing default file yields the built-in configuration; a missing explicit file is an error.
    pub async fn load(path: Option<&Path>) -> Result<Config> {
        let (path, explicit) = match path {
            Some(path) => (path.to_path_buf(), true),
            None => (PathBuf::from(DEFAULT_CONFIG_FILE_NAME), false),
        };

        if !explicit && !tokio::fs::try_exists(&path).await.unwrap_or(false) {
            return Ok(Config::default());
        }

        let config_string = tokio::fs::read_to_string(&path)
            .await
            .with_context(|| format!("Cannot read config file {}", path.display()))?;

        Config::parse(&config_string)
    }

    pub fn parse(config_string: &str) -> Result<Config> {
        let config = serde_yaml::from_str::<Config>(config_string)?;

        Ok(config)
    }

    fn default_document_types_url() -> String {
        DOCUMENT_TYPES_URL.to_owned()
    }

    fn default_destination() -> String {
        DEFAULT_DESTINATION.to_owned()
    }

    fn default_log_level() -> String {
        DEFAULT_LOG_LEVEL.to_owned()
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            github: GithubConfig::default(),
            document_types_url: Config::default_document_types_url(),
            default_destination: Config::default_destination(),
            log_level: Config::default_log_level(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct GithubConfig {
    #[serde(default = "GithubConfig::default_api_url")]
    pub api_url: String,
    #[serde(default = "GithubConfig::default_target_branch")]
    pub target_branch: String,
    #[serde(default = "GithubConfig::default_declarations_dir")]
    pub declarations_dir: String,
    #[serde(default = "GithubConfig::default_user_agent")]
    pub user_agent: String,
}

impl GithubConfig {
    fn default_api_url() -> String {
        GITHUB_API_URL.to_owned()
    }

    fn default_target_branch() -> String {
        MAIN_BRANCH_NAME.to_owned()
    }

    fn default_declarations_dir() -> String {
        DECLARATIONS_DIR.to_owned()
    }

    fn default_user_agent() -> String {
        USER_AGENT.to_owned()
    }
}

impl Default for GithubConfig {
    fn default() -> Self {
        GithubConfig {
            api_url: GithubConfig::default_api_url(),
            target_branch: GithubConfig::default_target_branch(),
            declarations_dir: GithubConfig::default_declarations_dir(),
            user_agent: GithubConfig::default_user_agent(),
        }
    }
}
