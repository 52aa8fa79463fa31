use serde::Serialize;
use std::collections::BTreeMap;
use std::io::Write;
use tera::{Context, Tera};

use crate::config::ProjectConfig;
use crate::error::{GhScriptError, Result};

const SCRIPT_NAME: &str = "install.sh";
const SCRIPT_TEMPLATE: &str = include_str!("../templates/install.sh.tera");

/// Portable POSIX helpers the install script calls into
pub const SHELL_FUNCTIONS: &str = include_str!("../templates/shell_functions.sh");

#[derive(Debug, Serialize)]
struct PlatformEntry<'a> {
    key: &'a str,
    value: &'a str,
}

#[derive(Debug, Serialize)]
struct ScriptContext<'a> {
    generator: String,
    owner: &'a str,
    repo: &'a str,
    binary: &'a str,
    format: &'a str,
    format_overrides: Vec<PlatformEntry<'a>>,
    os_replacements: Vec<PlatformEntry<'a>>,
    arch_replacements: Vec<PlatformEntry<'a>>,
    name_assignment: &'a str,
    shell_functions: &'static str,
}

impl<'a> ScriptContext<'a> {
    fn new(config: &'a ProjectConfig) -> Self {
        Self {
            generator: format!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION")),
            owner: &config.owner,
            repo: &config.name,
            binary: &config.binary,
            format: &config.format,
            format_overrides: entries(&config.format_overrides),
            os_replacements: entries(&config.os_replacements),
            arch_replacements: entries(&config.arch_replacements),
            name_assignment: &config.name_template,
            shell_functions: SHELL_FUNCTIONS,
        }
    }
}

fn entries(map: &BTreeMap<String, String>) -> Vec<PlatformEntry<'_>> {
    map.iter()
        .map(|(key, value)| PlatformEntry {
            key: key.as_str(),
            value: value.as_str(),
        })
        .collect()
}

/// Renders the install script skeleton
#[derive(Debug)]
pub struct ScriptRenderer {
    tera: Tera,
}

impl ScriptRenderer {
    pub fn new() -> Result<Self> {
        let mut tera = Tera::default();
        tera.autoescape_on(vec![]);
        tera.add_raw_template(SCRIPT_NAME, SCRIPT_TEMPLATE)?;
        Ok(Self { tera })
    }

    /// Render the script for a config whose name template is already translated
    pub fn render(&self, config: &ProjectConfig) -> Result<String> {
        if config.owner.is_empty() || config.name.is_empty() {
            return Err(GhScriptError::MissingOwnerRepo);
        }

        let context = Context::from_serialize(ScriptContext::new(config))?;
        let script = self.tera.render(SCRIPT_NAME, &context)?;
        tracing::debug!("Rendered install script for {}/{}", config.owner, config.name);
        Ok(script)
    }
}

/// Render with a freshly parsed skeleton
pub fn render_script(config: &ProjectConfig) -> Result<String> {
    ScriptRenderer::new()?.render(config)
}

/// Write the script followed by a newline, surfacing broken pipes as errors
pub fn write_script<W: Write>(mut out: W, script: &str) -> std::io::Result<()> {
    writeln!(out, "{script}")?;
    out.flush()
}
