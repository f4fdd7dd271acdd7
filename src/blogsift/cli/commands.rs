//! # CLI Dispatch
//!
//! This is **one possible UI client** for blogsift. It is the only place that:
//! - Parses shell arguments
//! - Writes to stdout/stderr
//! - Decides whether output is colored
//!
//! Each `handle_*` function builds a request, calls [`SiftApi`], and renders
//! the returned `CmdResult`. Business logic lives below the API and is not
//! tested here.

use super::browse;
use super::render::{render_categories, render_config, render_messages, render_search_view};
use super::setup::{join_term, Cli, Commands};
use blogsift::api::{CmdResult, ConfigAction, SearchRequest, SiftApi};
use blogsift::commands::search::SearchOptions;
use blogsift::error::Result;
use blogsift::init::{initialize, resolve_config_dir, SiftContext};
use blogsift::store::PostStore;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let use_color = !cli.no_color && console::Term::stdout().features().colors_supported();
    let config_dir = resolve_config_dir();
    tracing::debug!(config_dir = %config_dir.display(), "resolved config dir");

    // Config commands never touch the posts source.
    if let Some(Commands::Config { key, value }) = &cli.command {
        let api = SiftApi::new(PostStore::default(), SearchOptions::default(), config_dir);
        return handle_config(&api, key.clone(), value.clone(), use_color);
    }

    let ctx = initialize(&config_dir, cli.source.as_deref())?;

    match cli.command {
        Some(Commands::Search {
            term,
            category,
            page,
            query,
        }) => {
            let request = SearchRequest {
                query,
                term: join_term(&term),
                category,
                page,
            };
            handle_search(&ctx, &request, use_color)
        }
        Some(Commands::Categories { limit, category }) => {
            handle_categories(&ctx, category.as_deref().unwrap_or(""), limit, use_color)
        }
        Some(Commands::Link {
            term,
            category,
            page,
            query,
        }) => {
            let request = SearchRequest {
                query,
                term: join_term(&term),
                category,
                page,
            };
            handle_link(&ctx, &request, use_color)
        }
        Some(Commands::Browse { query }) => browse::run(&ctx, query.as_deref(), use_color),
        Some(Commands::Config { .. }) => Ok(()),
        None => handle_search(&ctx, &SearchRequest::default(), use_color),
    }
}

/// `RUST_LOG` wins; otherwise `-v` picks the level. Logs go to stderr so
/// stdout stays clean for piping.
fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let _ = tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("blogsift={}", default_level).into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .try_init();
}

fn handle_search(ctx: &SiftContext, request: &SearchRequest, use_color: bool) -> Result<()> {
    let result = ctx.api.search(request)?;
    if let Some(view) = &result.view {
        println!(
            "{}",
            render_search_view(view, ctx.api.options().page_size, use_color)?
        );
    }
    print_messages(&result, use_color)
}

fn handle_categories(
    ctx: &SiftContext,
    selected: &str,
    limit: Option<usize>,
    use_color: bool,
) -> Result<()> {
    let result = ctx.api.categories(selected, limit)?;
    print!("{}", render_categories(&result.categories, use_color)?);
    print_messages(&result, use_color)
}

fn handle_link(ctx: &SiftContext, request: &SearchRequest, use_color: bool) -> Result<()> {
    let result = ctx.api.link(request)?;
    if let Some(url) = &result.url {
        println!("{}", url);
    }
    print_messages(&result, use_color)
}

fn handle_config(
    api: &SiftApi,
    key: Option<String>,
    value: Option<String>,
    use_color: bool,
) -> Result<()> {
    let show_all = key.is_none();
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(k), None) => ConfigAction::ShowKey(k),
        (Some(k), Some(v)) => ConfigAction::Set(k, v),
    };

    let result = api.config(action)?;
    if show_all {
        if let Some(config) = &result.config {
            print!("{}", render_config(config, use_color)?);
        }
    }
    print_messages(&result, use_color)
}

fn print_messages(result: &CmdResult, use_color: bool) -> Result<()> {
    let output = render_messages(&result.messages, use_color)?;
    if !output.is_empty() {
        print!("{}", output);
    }
    Ok(())
}
