use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use cargo_ghscript::cli::{Args, CargoCli};
use cargo_ghscript::script::write_script;
use cargo_ghscript::{render_script, translate_name_template, ConfigLoader};

#[tokio::main]
async fn main() -> Result<()> {
    // Parse command line arguments - handle both cargo subcommand and direct invocation
    let args = match CargoCli::try_parse() {
        Ok(CargoCli::Ghscript(args)) => args,
        Err(_) => {
            // Fall back to parsing as direct invocation (for cargo-ghscript binary)
            Args::parse()
        }
    };

    // stdout carries the script, logs go to stderr
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(args.default_log_filter()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let loader = ConfigLoader::new()?
        .with_raw_base_url(args.raw_base_url.as_str())
        .with_branch(args.branch.as_str());

    let mut config = loader
        .load(args.repo(), args.file())
        .await
        .context("Unable to parse")?;

    config.name_template =
        translate_name_template(&config.name_template).context("Unable to generate name")?;

    let script = render_script(&config).context("Unable to generate shell")?;
    write_script(std::io::stdout().lock(), &script).context("Unable to write shell")?;

    Ok(())
}
