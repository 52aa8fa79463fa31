use reqwest::Client;
use std::collections::BTreeMap;

use crate::document::ReleaseDocument;
use crate::error::{GhScriptError, Result};

pub const DEFAULT_RAW_BASE_URL: &str = "https://raw.githubusercontent.com";
pub const DEFAULT_BRANCH: &str = "master";
pub const CONFIG_FILE_NAME: &str = "goreleaser.yml";
pub const DEFAULT_FORMAT: &str = "tar.gz";

/// Resolved release configuration the install script is rendered from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectConfig {
    pub owner: String,
    pub name: String,
    pub binary: String,
    pub format: String,
    /// Archive name template; holds the `NAME=` shell assignment once translated
    pub name_template: String,
    /// Architecture -> archive format, applied before display-name replacement
    pub format_overrides: BTreeMap<String, String>,
    pub os_replacements: BTreeMap<String, String>,
    pub arch_replacements: BTreeMap<String, String>,
}

impl ProjectConfig {
    /// Fill owner/name, archive format and binary name left empty by the document
    pub fn apply_defaults(&mut self, repo: &str) -> Result<()> {
        if self.owner.is_empty() || self.name.is_empty() {
            if repo.is_empty() {
                return Err(GhScriptError::MissingOwnerRepo);
            }
            let (owner, name) = split_repo(repo)?;
            if self.owner.is_empty() {
                self.owner = owner.to_string();
            }
            if self.name.is_empty() {
                self.name = name.to_string();
            }
        }

        if self.format.is_empty() {
            self.format = DEFAULT_FORMAT.to_string();
        }

        if self.binary.is_empty() {
            self.binary = match repo.rsplit('/').next() {
                Some(base) if !base.is_empty() => base.to_string(),
                _ => self.name.clone(),
            };
        }

        Ok(())
    }
}

/// Split `owner/name` into everything before the last `/` and the last segment
fn split_repo(repo: &str) -> Result<(&str, &str)> {
    match repo.trim_end_matches('/').rsplit_once('/') {
        Some((owner, name)) if !owner.is_empty() && !name.is_empty() => Ok((owner, name)),
        _ => Err(GhScriptError::InvalidRepo {
            input: repo.to_string(),
        }),
    }
}

/// Reads the release configuration from a local file or a URL
pub struct ConfigLoader {
    http_client: Client,
    raw_base_url: String,
    branch: String,
}

impl ConfigLoader {
    pub fn new() -> Result<Self> {
        let http_client = Client::builder().user_agent("cargo-ghscript").build()?;

        Ok(Self {
            http_client,
            raw_base_url: DEFAULT_RAW_BASE_URL.to_string(),
            branch: DEFAULT_BRANCH.to_string(),
        })
    }

    /// Use another host for the default configuration location
    pub fn with_raw_base_url(mut self, raw_base_url: impl Into<String>) -> Self {
        self.raw_base_url = raw_base_url.into();
        self
    }

    /// Use another branch for the default configuration location
    pub fn with_branch(mut self, branch: impl Into<String>) -> Self {
        self.branch = branch.into();
        self
    }

    /// Location of the configuration file at the head of the branch
    pub fn default_location(&self, repo: &str) -> String {
        format!(
            "{}/{}/{}/{}",
            self.raw_base_url.trim_end_matches('/'),
            repo,
            self.branch,
            CONFIG_FILE_NAME
        )
    }

    /// Load project configuration from a repo name and/or a path or URL
    pub async fn load(&self, repo: &str, file: &str) -> Result<ProjectConfig> {
        if repo.is_empty() && file.is_empty() {
            return Err(GhScriptError::MissingInput);
        }

        let location = if file.is_empty() {
            self.default_location(repo)
        } else {
            file.to_string()
        };

        tracing::info!("Reading {}", location);
        let content = if location.starts_with("http") {
            self.fetch(&location).await?
        } else {
            read_file(&location)?
        };

        let mut config = ReleaseDocument::parse(&content, &location)?.into_project_config();
        config.apply_defaults(repo)?;

        tracing::debug!(
            "Resolved {}/{} (binary: {}, format: {})",
            config.owner,
            config.name,
            config.binary,
            config.format
        );
        Ok(config)
    }

    async fn fetch(&self, url: &str) -> Result<String> {
        let response = self.http_client.get(url).send().await?.error_for_status()?;
        Ok(response.text().await?)
    }
}

fn read_file(path: &str) -> Result<String> {
    std::fs::read_to_string(path).map_err(|source| GhScriptError::Read {
        path: path.to_string(),
        source,
    })
}

/// Load with the default loader
pub async fn load(repo: &str, file: &str) -> Result<ProjectConfig> {
    ConfigLoader::new()?.load(repo, file).await
}
