// Only compile UI module when TUI feature is enabled
#[cfg(feature = "tui")]
mod ui;

use anyhow::{Context, Result};
use chrono::Utc;
use clap::Parser;
use tokio::runtime::Runtime;
use tracing::{debug, info};
use xea_dashboard::config::SearchArgs;
use xea_dashboard::logging::LogTarget;
use xea_dashboard::{
    logging, report, ApiClient, Cli, Command, DataSource, LeaderboardQuery, SampleData,
    SearchForm, Source,
};

fn main() -> Result<()> {
    let cli = Cli::parse();
    let command = cli.command();

    let target = LogTarget::select(command == Command::Tui, cli.log_file.as_deref());
    logging::init(&cli.log_level, target)?;

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("Failed to start async runtime")?;

    let source = if cli.offline {
        Source::Sample(SampleData::new())
    } else {
        let client = ApiClient::new(&cli.client_config())
            .with_context(|| format!("Invalid API URL {:?}", cli.api_url))?;
        Source::Api(client)
    };
    info!(source = %source.describe(), version = xea_dashboard::VERSION, "starting");

    match command {
        Command::Tui => run_ui_mode(source, runtime),
        other => run_report(&source, &runtime, other),
    }
}

fn run_report(source: &Source, runtime: &Runtime, command: Command) -> Result<()> {
    let output = match command {
        Command::Tui => return Ok(()),
        Command::Dashboard => {
            let stats = runtime
                .block_on(source.dashboard_stats())
                .context("Failed to load dashboard stats")?;
            report::dashboard(&stats, &source.recent_activity(), Utc::now())
        }
        Command::Leaderboard(args) => {
            let query = LeaderboardQuery::from(&args);
            let accounts = runtime
                .block_on(source.leaderboard(&query))
                .context("Failed to load leaderboard")?;
            report::leaderboard(&query, &accounts)
        }
        Command::Search(args) => run_search(source, runtime, &args)?,
        Command::Countries => {
            let countries = runtime
                .block_on(source.countries())
                .context("Failed to load countries")?;
            report::list("🌍 Countries", &countries)
        }
        Command::Categories => {
            let categories = runtime
                .block_on(source.categories())
                .context("Failed to load categories")?;
            report::categories(&categories)
        }
        Command::Parameters => report::parameters(),
    };

    println!("{}", output);
    Ok(())
}

fn run_search(source: &Source, runtime: &Runtime, args: &SearchArgs) -> Result<String> {
    let request = SearchForm::from(args).to_request()?;
    debug!(?request, "search request");

    let response = runtime
        .block_on(source.search(&request))
        .with_context(|| format!("Search for {:?} failed", request.topic))?;
    Ok(report::search(&request, &response))
}

#[cfg(feature = "tui")]
fn run_ui_mode(source: Source, runtime: Runtime) -> Result<()> {
    let mut app = ui::App::new(source, runtime);
    ui::run_ui(&mut app)?;
    info!("ui closed");
    Ok(())
}

#[cfg(not(feature = "tui"))]
fn run_ui_mode(_source: Source, _runtime: Runtime) -> Result<()> {
    eprintln!("❌ TUI mode not available!");
    eprintln!("   Rebuild with: cargo build --features tui");
    eprintln!("   Or use a report command, e.g. xea-dashboard leaderboard");
    std::process::exit(1);
}
