//! Resource reference generator
//!
//! Builds the standard catalog engine, checks its invariants and prints the
//! documentation tree as Markdown or JSON.
//!
//! ```text
//! resource-docs                     # Markdown reference on stdout
//! resource-docs --format json       # JSON documentation tree
//! resource-docs --audit             # only check invariants
//! RUST_LOG=resource_resolver=debug resource-docs
//! ```

use std::path::PathBuf;

use anyhow::{bail, Context};
use clap::{Parser, ValueEnum};
use transit_ui::ResolverConfig;

/// Output format of the reference
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Markdown,
    Json,
}

/// Generate reference documentation for the UI resource catalog
#[derive(Parser, Debug)]
#[command(name = "resource-docs")]
#[command(about = "Print the icon and design-token reference of the ticketing UI")]
struct Args {
    /// Output format
    #[arg(long, short = 'f', value_enum, default_value = "markdown")]
    format: Format,

    /// Resolver configuration file (JSON)
    #[arg(long, short = 'c')]
    config: Option<PathBuf>,

    /// Only run the invariant audit
    #[arg(long)]
    audit: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "resource_resolver=info,ui_catalog=info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let config = match &args.config {
        Some(path) => {
            let json = std::fs::read_to_string(path)
                .with_context(|| format!("reading config {}", path.display()))?;
            ResolverConfig::from_json_str(&json)
                .with_context(|| format!("parsing config {}", path.display()))?
        }
        None => ResolverConfig::default(),
    };

    let engine = transit_ui::standard_engine_with(config, None).context("building catalog engine")?;

    let issues = engine.audit();
    for issue in &issues {
        tracing::error!(entry = %issue.entry, problem = %issue.problem, "Audit failure");
    }
    if !issues.is_empty() {
        bail!("{} audit issue(s) found", issues.len());
    }

    let tree = engine.describe();
    tracing::info!(
        contexts = tree.contexts.len(),
        actions = tree.action_count(),
        identifiers = tree.identifier_count(),
        "Catalog audited"
    );

    if args.audit {
        return Ok(());
    }

    match args.format {
        Format::Markdown => print!("{}", tree.to_markdown()),
        Format::Json => println!("{}", serde_json::to_string_pretty(&tree)?),
    }
    Ok(())
}
