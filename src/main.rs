use live_golf_scoring::api::HttpScoringApi;
use live_golf_scoring::args::{self, CleanArgs, Source};
use live_golf_scoring::cache::{self, SnapshotCache};
use live_golf_scoring::error::CoreError;
use live_golf_scoring::model::Leaderboard;
use live_golf_scoring::score::{LeaderboardRequest, build_leaderboard, load_leaderboard};
use live_golf_scoring::view::render_leaderboard;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = match args::args_checks() {
        Ok(args) => args,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(2);
        }
    };

    match &args.source {
        Source::Snapshot(snapshot) => {
            let leaderboard = build_leaderboard(snapshot, &args.options);
            print_leaderboard(&leaderboard, args.json)?;
        }
        Source::Api { url, token } => {
            let api = HttpScoringApi::new(url, token.clone())?;
            let cache = cache::new_cache();
            run_api(&api, &cache, &args).await?;
        }
    }
    Ok(())
}

async fn run_api(
    api: &HttpScoringApi,
    cache: &SnapshotCache,
    args: &CleanArgs,
) -> Result<(), Box<dyn std::error::Error>> {
    let request = LeaderboardRequest {
        tournament_id: args.tournament_id.clone(),
        options: args.options,
        use_cache: true,
        cache_max_age: args.cache_max_age,
    };
    tracing::info!(tournament_id = %request.tournament_id, "scoring tournament");

    let Some(poll_secs) = args.poll_secs else {
        let leaderboard = load_leaderboard(api, cache, &request).await?;
        return print_leaderboard(&leaderboard, args.json);
    };

    let mut interval = tokio::time::interval(Duration::from_secs(poll_secs));
    loop {
        tokio::select! {
            _ = interval.tick() => {
                match load_leaderboard(api, cache, &request).await {
                    Ok(leaderboard) => print_leaderboard(&leaderboard, args.json)?,
                    Err(e) => tracing::error!(error = %e, "refresh failed"),
                }
            }
            _ = tokio::signal::ctrl_c() => {
                tracing::info!("stopping");
                return Ok(());
            }
        }
    }
}

fn print_leaderboard(
    leaderboard: &Leaderboard,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    if json {
        let out = serde_json::to_string_pretty(leaderboard).map_err(CoreError::from)?;
        println!("{out}");
    } else {
        println!("{}\n", render_leaderboard(leaderboard));
    }
    Ok(())
}
