use clap::Parser;

use crate::config::{DEFAULT_BRANCH, DEFAULT_RAW_BASE_URL};

#[derive(Parser, Debug)]
#[clap(
    name = "cargo-ghscript",
    version,
    about = "Generate curl | sh installer scripts for GitHub Releases",
    long_about = None,
    bin_name = "cargo"
)]
pub enum CargoCli {
    #[clap(name = "ghscript")]
    Ghscript(Args),
}

#[derive(Parser, Debug, Clone)]
#[clap(version, about, long_about = None)]
pub struct Args {
    /// Release configuration to read: a local path or an http(s) URL.
    /// Defaults to goreleaser.yml at the head of --branch in --repo
    #[clap(value_name = "FILE")]
    pub file: Option<String>,

    /// GitHub repository (owner/name)
    #[clap(long, env = "GHSCRIPT_REPO")]
    pub repo: Option<String>,

    /// Branch holding the release configuration when no FILE is given
    #[clap(long, env = "GHSCRIPT_BRANCH", default_value = DEFAULT_BRANCH)]
    pub branch: String,

    /// Base URL for raw repository content
    #[clap(long, env = "GHSCRIPT_RAW_BASE_URL", default_value = DEFAULT_RAW_BASE_URL, hide = true)]
    pub raw_base_url: String,

    /// Enable verbose output
    #[clap(long)]
    pub verbose: bool,
}

impl Args {
    /// Repository identifier, empty when not supplied
    pub fn repo(&self) -> &str {
        self.repo.as_deref().unwrap_or("")
    }

    /// Configuration location, empty when not supplied
    pub fn file(&self) -> &str {
        self.file.as_deref().unwrap_or("")
    }

    /// Log filter used when RUST_LOG is not set
    pub fn default_log_filter(&self) -> &'static str {
        if self.verbose {
            "debug"
        } else {
            "info"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direct_invocation() {
        let args = Args::try_parse_from(["cargo-ghscript", "--repo", "foo/bar"]).unwrap();
        assert_eq!(args.repo(), "foo/bar");
        assert_eq!(args.file(), "");
        assert_eq!(args.branch, "master");
        assert_eq!(args.raw_base_url, "https://raw.githubusercontent.com");
        assert_eq!(args.default_log_filter(), "info");
    }

    #[test]
    fn test_cargo_subcommand_invocation() {
        let cli =
            CargoCli::try_parse_from(["cargo", "ghscript", "--verbose", "release.yml"]).unwrap();
        let CargoCli::Ghscript(args) = cli;
        assert_eq!(args.file(), "release.yml");
        assert_eq!(args.repo(), "");
        assert_eq!(args.default_log_filter(), "debug");
    }
}
