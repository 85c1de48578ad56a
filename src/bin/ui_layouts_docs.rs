//! ui-layouts-docs CLI - query the ui-layouts.com component documentation.
//!
//! Commands:
//! - `search <query>`: Search the catalog
//! - `docs --key <key>`: Fetch a documentation page as text, snippet or HTML
//! - `meta --key <key>`: Fetch the remote page metadata
//! - `source <name>`: Fetch a component source bundle
//! - `prompt find|implement`: Print a guided workflow instruction text
//!
//! Environment variables:
//! - UI_LAYOUTS_BASE_URL: Override the documentation origin
//! - UI_LAYOUTS_CATALOG: Load the catalog from a JSON file
//! - RUST_LOG: Log filter (default `warn`), logs go to stderr
//!
//! Exit codes:
//! - 0: Success
//! - 1: Error

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use ui_layouts_docs::prompts::{self, FindComponentArgs, ImplementComponentArgs};
use ui_layouts_docs::{
    Catalog, DocsFormat, DocsService, GetDocsArgs, MetaArgs, Options, SearchArgs, SourceArgs,
    DEFAULT_BASE_URL,
};

#[derive(Debug, Parser)]
#[command(name = "ui-layouts-docs", version, about = "Query ui-layouts.com component docs")]
struct Cli {
    /// Origin that component hrefs are resolved against.
    #[arg(long, env = "UI_LAYOUTS_BASE_URL", default_value = DEFAULT_BASE_URL, global = true)]
    base_url: String,

    /// Path segment inserted before every href.
    #[arg(long, global = true)]
    path_prefix: Option<String>,

    /// Override the User-Agent header.
    #[arg(long, global = true)]
    user_agent: Option<String>,

    /// JSON catalog file to use instead of the builtin one.
    #[arg(long, env = "UI_LAYOUTS_CATALOG", global = true)]
    catalog: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Search components by name, key, group, tags or href.
    Search {
        query: String,
        #[arg(long)]
        limit: Option<usize>,
    },

    /// Fetch a component's documentation page.
    Docs {
        #[arg(long)]
        key: Option<String>,
        #[arg(long)]
        href: Option<String>,
        /// raw_html, text or snippet.
        #[arg(long, default_value = "text")]
        format: DocsFormat,
        #[arg(long)]
        max_chars: Option<usize>,
        #[arg(long)]
        timeout_ms: Option<u64>,
    },

    /// Fetch remote page metadata.
    Meta {
        #[arg(long)]
        key: Option<String>,
        #[arg(long)]
        href: Option<String>,
        #[arg(long)]
        timeout_ms: Option<u64>,
    },

    /// Fetch a component source bundle.
    Source {
        component_name: Option<String>,
        #[arg(long)]
        max_chars: Option<usize>,
        #[arg(long)]
        timeout_ms: Option<u64>,
    },

    /// Print a guided workflow instruction text.
    #[command(subcommand)]
    Prompt(PromptKind),
}

#[derive(Debug, Subcommand)]
enum PromptKind {
    /// Find the best component for a requirement.
    Find {
        requirements: String,
        #[arg(long)]
        tags: Option<String>,
        #[arg(long)]
        max_candidates: Option<String>,
    },

    /// Implementation guide for one component.
    Implement {
        #[arg(long)]
        key: Option<String>,
        #[arg(long)]
        href: Option<String>,
        #[arg(long)]
        framework: Option<String>,
        #[arg(long)]
        include_source_code: Option<String>,
    },
}

async fn run(cli: Cli) -> ui_layouts_docs::Result<String> {
    let loaded;
    let catalog = match &cli.catalog {
        Some(path) => {
            loaded = Catalog::from_path(path)?;
            &loaded
        }
        None => Catalog::builtin(),
    };

    let mut options = Options {
        base_url: cli.base_url,
        path_prefix: cli.path_prefix,
        ..Options::default()
    };
    if let Some(user_agent) = cli.user_agent {
        options.user_agent = user_agent;
    }

    let service = DocsService::new(catalog, options)?;
    debug!(
        base_url = %service.options().base_url,
        components = service.catalog().len(),
        "Service ready"
    );

    match cli.command {
        Commands::Search { query, limit } => {
            service.search_components(&SearchArgs { q: query, limit })
        }
        Commands::Docs {
            key,
            href,
            format,
            max_chars,
            timeout_ms,
        } => {
            service
                .get_docs(&GetDocsArgs {
                    key,
                    href,
                    path_prefix: None,
                    format,
                    max_chars,
                    timeout_ms,
                })
                .await
        }
        Commands::Meta {
            key,
            href,
            timeout_ms,
        } => {
            service
                .get_component_meta(&MetaArgs {
                    key,
                    href,
                    path_prefix: None,
                    timeout_ms,
                })
                .await
        }
        Commands::Source {
            component_name,
            max_chars,
            timeout_ms,
        } => {
            service
                .get_source_code(&SourceArgs {
                    component_name,
                    max_chars,
                    timeout_ms,
                })
                .await
        }
        Commands::Prompt(PromptKind::Find {
            requirements,
            tags,
            max_candidates,
        }) => prompts::find_component(&FindComponentArgs {
            requirements,
            tags,
            max_candidates,
        }),
        Commands::Prompt(PromptKind::Implement {
            key,
            href,
            framework,
            include_source_code,
        }) => Ok(prompts::implement_component(
            service.catalog(),
            &ImplementComponentArgs {
                component_key: key,
                component_href: href,
                framework,
                include_source_code,
            },
        )),
    }
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match run(cli).await {
        Ok(text) => println!("{text}"),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}
