use thiserror::Error;

#[derive(Error, Debug)]
pub enum GhScriptError {
    #[error("need a repo or file")]
    MissingInput,

    #[error("need to provide owner/name repo")]
    MissingOwnerRepo,

    #[error("Invalid repository format '{input}'. Expected format: owner/name (e.g., goreleaser/goreleaser)")]
    InvalidRepo { input: String },

    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Failed to read {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },

    #[error("Failed to parse release configuration from {location}: {source}")]
    Parse {
        location: String,
        source: serde_yaml::Error,
    },

    #[error("Unable to translate name template '{template}': {source}")]
    NameTemplate {
        template: String,
        source: tera::Error,
    },

    #[error("Unable to render install script: {0}")]
    Render(#[from] tera::Error),
}

pub type Result<T> = std::result::Result<T, GhScriptError>;
