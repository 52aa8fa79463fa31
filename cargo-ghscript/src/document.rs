use serde::Deserialize;
use std::collections::BTreeMap;

use crate::config::ProjectConfig;
use crate::error::{GhScriptError, Result};

/// Operating systems a release may be built for, as named in the document
const KNOWN_OS: &[&str] = &[
    "aix",
    "android",
    "darwin",
    "dragonfly",
    "freebsd",
    "illumos",
    "js",
    "linux",
    "netbsd",
    "openbsd",
    "plan9",
    "solaris",
    "windows",
];

/// Architectures a release may be built for, as named in the document
const KNOWN_ARCH: &[&str] = &[
    "386", "amd64", "amd64p32", "arm", "arm64", "mips", "mips64", "mips64le", "mipsle", "ppc64",
    "ppc64le", "riscv64", "s390x", "wasm",
];

/// Release configuration document (goreleaser.yml layout)
#[derive(Debug, Deserialize, Default)]
pub struct ReleaseDocument {
    #[serde(default)]
    pub build: BuildSection,

    #[serde(default)]
    pub archive: ArchiveSection,

    #[serde(default)]
    pub release: ReleaseSection,
}

#[derive(Debug, Deserialize, Default)]
pub struct BuildSection {
    #[serde(default)]
    pub binary: String,
}

#[derive(Debug, Deserialize, Default)]
pub struct ArchiveSection {
    #[serde(default)]
    pub format: String,

    #[serde(default)]
    pub name_template: String,

    #[serde(default)]
    pub replacements: BTreeMap<String, String>,

    #[serde(default)]
    pub format_overrides: Vec<FormatOverride>,
}

#[derive(Debug, Deserialize)]
pub struct FormatOverride {
    pub goos: String,
    pub format: String,
}

#[derive(Debug, Deserialize, Default)]
pub struct ReleaseSection {
    #[serde(default)]
    pub github: GitHubRepo,
}

#[derive(Debug, Deserialize, Default)]
pub struct GitHubRepo {
    #[serde(default)]
    pub owner: String,

    #[serde(default)]
    pub name: String,
}

impl ReleaseDocument {
    /// Parse a document read from `location`
    pub fn parse(content: &str, location: &str) -> Result<Self> {
        serde_yaml::from_str(content).map_err(|source| GhScriptError::Parse {
            location: location.to_string(),
            source,
        })
    }

    /// Flatten into the record the script is rendered from, without defaults
    pub fn into_project_config(self) -> ProjectConfig {
        let mut os_replacements = BTreeMap::new();
        let mut arch_replacements = BTreeMap::new();
        for (key, value) in self.archive.replacements {
            let is_os = KNOWN_OS.contains(&key.as_str());
            let is_arch = KNOWN_ARCH.contains(&key.as_str());
            if is_os || !is_arch {
                os_replacements.insert(key.clone(), value.clone());
            }
            if is_arch || !is_os {
                arch_replacements.insert(key, value);
            }
        }

        let format_overrides = self
            .archive
            .format_overrides
            .into_iter()
            .map(|o| (o.goos, o.format))
            .collect();

        ProjectConfig {
            owner: self.release.github.owner,
            name: self.release.github.name,
            binary: self.build.binary,
            format: self.archive.format,
            name_template: self.archive.name_template,
            format_overrides,
            os_replacements,
            arch_replacements,
        }
    }
}
