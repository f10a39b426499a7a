//! Command-line renderer for the liceo pages.
//!
//! # Responsibility
//! - Load site config, drive a page controller through the same input
//!   events the browser would deliver, and print the resulting markup.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use liceo_core::{
    core_version, default_log_level, init_logging, DirSource, HomePage, NewsPage, PageContext,
    SiteConfig,
};
use log::{error, info, warn};

#[derive(Debug, Parser)]
#[command(name = "liceo", version, about = "Render the liceo news and wall-note pages")]
struct Cli {
    /// TOML site configuration.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Directory the static data is served from (overrides config).
    #[arg(long, global = true)]
    data_root: Option<PathBuf>,

    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Absolute directory for rolling log files; stderr when omitted.
    #[arg(long, global = true)]
    log_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Render `noticias.html`.
    News {
        #[arg(long, default_value = "Todas")]
        category: String,
        /// 1-based page; pages past the end clamp to the last page.
        #[arg(long, default_value_t = 1)]
        page: usize,
        /// Open the detail modal for this news id.
        #[arg(long)]
        open: Option<String>,
    },
    /// Render `index.html`.
    Home {
        #[arg(long, default_value = "all")]
        filter: String,
        #[arg(long, default_value_t = 1)]
        page: usize,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => match SiteConfig::load(path) {
            Ok(config) => config,
            Err(err) => {
                eprintln!("liceo: {err}");
                return ExitCode::FAILURE;
            }
        },
        None => SiteConfig::default(),
    };
    if let Some(root) = cli.data_root {
        config.data_root = root;
    }
    if let Some(dir) = cli.log_dir {
        config.log_dir = Some(dir);
    }

    let level = cli
        .log_level
        .or_else(|| config.log_level.clone())
        .unwrap_or_else(|| default_log_level().to_string());
    if let Err(err) = init_logging(&level, config.log_dir.as_deref()) {
        eprintln!("liceo: {err}");
        return ExitCode::FAILURE;
    }

    info!(
        "event=cli_start module=cli status=ok core_version={} data_root={}",
        core_version(),
        config.data_root.display()
    );

    let source = DirSource::new(config.data_root.clone());
    let html = match cli.command {
        Command::News {
            category,
            page,
            open,
        } => Ok(render_news(&config, &source, &category, page, open.as_deref())),
        Command::Home { filter, page } => render_home(&config, &source, &filter, page),
    };

    match html {
        Ok(html) => {
            println!("{html}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("liceo: {err}");
            ExitCode::FAILURE
        }
    }
}

fn render_news(
    config: &SiteConfig,
    source: &DirSource,
    category: &str,
    page: usize,
    open: Option<&str>,
) -> String {
    let mut ctx = PageContext::news_page(config.reveal_threshold);
    let mut news = NewsPage::from_config(config);
    news.ready(source, &mut ctx);
    news.change_category(category, &mut ctx);
    if page > 1 {
        news.go_to_page(page, &mut ctx);
    }
    if let Some(id) = open {
        if !news.open_detail(id, &mut ctx) {
            warn!("event=open_detail module=cli status=error news_id={id} error_code=not_found");
        }
    }
    ctx.doc.outer_html(ctx.doc.root())
}

fn render_home(
    config: &SiteConfig,
    source: &DirSource,
    filter: &str,
    page: usize,
) -> Result<String, String> {
    let mut ctx = PageContext::home_page(config.reveal_threshold);
    let mut home = HomePage::from_config(config);
    home.ready(source, &mut ctx);
    home.change_mural_filter(filter, &mut ctx);
    for _ in 1..page {
        if !home.mural_next(&mut ctx) {
            error!(
                "event=mural_page module=cli status=error requested={} reached={}",
                page,
                home.mural_state().page()
            );
            return Err(format!(
                "board page {page} is out of range (last page is {})",
                home.mural_state().page()
            ));
        }
    }
    Ok(ctx.doc.outer_html(ctx.doc.root()))
}
