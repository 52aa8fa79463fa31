//! # cargo-ghscript
//!
//! A cargo subcommand that writes `curl | sh` installers for binaries published
//! on GitHub releases.
//!
//! ## Overview
//!
//! `cargo-ghscript` reads a goreleaser-style release configuration and prints a
//! POSIX shell script that detects the caller's OS and architecture, downloads
//! the matching release archive together with its checksum list, verifies it,
//! and installs the binary into `$BINDIR` (default `./bin`).
//!
//! ## Usage
//!
//! ```bash
//! # Read goreleaser.yml from the master branch of owner/repo
//! cargo ghscript --repo owner/repo > install.sh
//!
//! # Read a local or remote configuration
//! cargo ghscript --repo owner/repo ./goreleaser.yml > install.sh
//! cargo ghscript https://example.com/goreleaser.yml > install.sh
//! ```
//!
//! The generated script takes a version or `latest`:
//!
//! ```bash
//! curl -sSfL https://example.com/install.sh | BINDIR=/usr/local/bin sh -s latest
//! ```

/// Command-line interface definitions and argument parsing
pub mod cli;

/// Release configuration loading and defaulting
pub mod config;

/// Schema of the release configuration document
pub mod document;

/// Error types and error handling utilities
pub mod error;

/// Archive name template translation into shell
pub mod name_template;

/// Install script rendering
pub mod script;

pub use config::{ConfigLoader, ProjectConfig};
pub use error::{GhScriptError, Result};
pub use name_template::{translate_name_template, NameTemplate};
pub use script::{render_script, ScriptRenderer};

/// Translate the name template of a loaded config and render the install script
pub fn generate(mut config: ProjectConfig) -> Result<String> {
    config.name_template = translate_name_template(&config.name_template)?;
    render_script(&config)
}
