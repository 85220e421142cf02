use anyhow::Result;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use portal::client::PortalClient;
use portal::commands::{parse_command, Command, HELP};
use portal::config::PortalConfig;
use portal::filter::{self, FilterState};
use portal::links::search_links;
use portal::models::JobCard;
use portal::pagination::JobFeed;
use portal::view::{render, LOADING_INITIAL, LOADING_MORE};

#[tokio::main]
async fn main() -> Result<()> {
    let config = PortalConfig::from_env()?;

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    info!("Connecting to {}", config.api_url);
    let client = PortalClient::new(
        &config.api_url,
        config.session_token.clone(),
        config.request_timeout,
    )?;
    let feed = JobFeed::new(client);
    let mut filters = FilterState {
        location: config.location.clone(),
        location_match: config.location_match,
        ..FilterState::default()
    };

    println!("{LOADING_INITIAL}");
    feed.load().await;
    print_list(&feed, &filters).await;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let command = match parse_command(&line) {
            Ok(command) => command,
            Err(e) => {
                println!("{e}");
                continue;
            }
        };

        match command {
            Command::Advance(trigger) => {
                if feed.with_state(|s| s.has_more()).await {
                    println!("{LOADING_MORE}");
                }
                feed.advance(trigger).await;
                print_list(&feed, &filters).await;
            }
            Command::Save(n) => match filtered_card(&feed, &filters, n).await {
                Some(job) => println!("{}", feed.source().save_job(&job).await.message()),
                None => println!("No card {n} in the current list"),
            },
            Command::Links(n) => match filtered_card(&feed, &filters, n).await {
                Some(job) => {
                    for (board, url) in search_links(&job.job_title, &filters.location) {
                        println!("{:>9}: {url}", board.name());
                    }
                }
                None => println!("No card {n} in the current list"),
            },
            Command::Salary(band) => {
                filters.salary = band;
                print_list(&feed, &filters).await;
            }
            Command::Location(location) => {
                filters.location = location;
                print_list(&feed, &filters).await;
            }
            Command::Mode(mode) => {
                filters.work_mode = mode;
                print_list(&feed, &filters).await;
            }
            Command::Retry => {
                feed.load().await;
                print_list(&feed, &filters).await;
            }
            Command::Show => print_list(&feed, &filters).await,
            Command::Help => println!("{HELP}"),
            Command::Quit => break,
        }
    }

    Ok(())
}

async fn print_list(feed: &JobFeed<PortalClient>, filters: &FilterState) {
    println!("{}", feed.with_state(|s| render(s, filters)).await);
}

async fn filtered_card(
    feed: &JobFeed<PortalClient>,
    filters: &FilterState,
    n: usize,
) -> Option<JobCard> {
    feed.with_state(|s| {
        filter::apply(s.visible(), filters)
            .get(n.checked_sub(1)?)
            .map(|job| (*job).clone())
    })
    .await
}
