mod api;
mod app;
mod cli;
mod config;
mod logging;
mod runtime;
mod time_utils;
mod ui;

use anyhow::{Context, Result};
use app::App;
use clap::Parser;
use cli::{Cli, Commands};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::from_filename(".env.crm").ok();

    let cli = Cli::parse();

    // Resolve before any threads are spawned; the local offset lookup can fail afterwards.
    let offset = time_utils::local_offset();

    match cli.command {
        Commands::Run => {
            logging::init()?;
            let cfg = config::CrmConfig::load()?;
            let client = api::ApiClient::new(&cfg.api_url, cfg.api_token.clone())
                .with_context(|| format!("Invalid API URL '{}'", cfg.api_url))?;
            run_ui(client, offset).await
        }
        Commands::Dev => {
            logging::init()?;
            let client = api::ApiClient::dev()?;
            run_ui(client, offset).await
        }
        Commands::List {
            activity_type,
            search,
            dev,
        } => {
            let type_filter = cli::parse_type_filter(activity_type.as_deref())?;
            let client = if dev {
                api::ApiClient::dev()?
            } else {
                let cfg = config::CrmConfig::load()?;
                api::ApiClient::new(&cfg.api_url, cfg.api_token.clone())?
            };
            print_activities(&client, offset, type_filter, &search).await
        }
        Commands::ConfigPath => {
            let path = config::CrmConfig::ensure_exists()?;
            println!("{}", path.display());
            Ok(())
        }
    }
}

async fn run_ui(client: api::ApiClient, offset: time::UtcOffset) -> Result<()> {
    tracing::info!(service = %client.describe_target(), "starting crm-tui");

    let mut app = App::new(offset);

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = runtime::run_app(&mut terminal, &mut app, &client).await;

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        tracing::error!("crm-tui exited with error: {:?}", err);
    }
    res
}

async fn print_activities(
    client: &api::ApiClient,
    offset: time::UtcOffset,
    type_filter: app::TypeFilter,
    search: &str,
) -> Result<()> {
    let data = client
        .load_all()
        .await
        .with_context(|| format!("Failed to load activities from {}", client.describe_target()))?;

    let mut app = App::new(offset);
    app.finish_loading(Ok(data));
    app.type_filter = type_filter;
    for c in search.chars() {
        app.search_input_char(c);
    }

    let visible = app.visible_activities();
    if visible.is_empty() {
        println!("No activities found");
        return Ok(());
    }

    for activity in visible {
        let date = time_utils::format_card_date(activity.date.to_offset(offset));
        let description = activity
            .description
            .as_deref()
            .unwrap_or_default()
            .replace('\n', " ");
        let mut line = format!(
            "{:<26} {:<8} {}  ·  {}",
            date,
            activity.activity_type.label(),
            description,
            app.contact_name(activity)
        );
        if let Some(deal) = app.deal_name(activity) {
            line.push_str(&format!("  ·  {}", deal));
        }
        println!("{}", line);
    }
    Ok(())
}
