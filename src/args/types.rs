use clap::{Parser, ValueEnum};

use crate::model::TournamentId;
use crate::score::{
    LeaderboardOptions, MatchPlayOptions, StrokePolicy, TeamScoring, TournamentSnapshot,
};

#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TeamScoringArg {
    /// Sum of every player's scores
    #[default]
    Aggregate,
    /// Best score on each hole
    BestBall,
}

impl From<TeamScoringArg> for TeamScoring {
    fn from(arg: TeamScoringArg) -> Self {
        match arg {
            TeamScoringArg::Aggregate => TeamScoring::Aggregate,
            TeamScoringArg::BestBall => TeamScoring::BestBall,
        }
    }
}

#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum StrokePolicyArg {
    /// At most one stroke per hole
    SingleLap,
    /// Handicaps above 18 keep lapping the hole indices
    #[default]
    MultiLap,
}

impl From<StrokePolicyArg> for StrokePolicy {
    fn from(arg: StrokePolicyArg) -> Self {
        match arg {
            StrokePolicyArg::SingleLap => StrokePolicy::SingleLap,
            StrokePolicyArg::MultiLap => StrokePolicy::MultiLap,
        }
    }
}

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Base url of the scoring API, e.g. https://scores.example.com
    #[arg(long, value_name = "API_URL")]
    pub api_url: Option<String>,
    /// Bearer token sent with API requests.
    #[arg(long, value_name = "API_TOKEN")]
    pub api_token: Option<String>,
    /// Offline snapshot (tournament, course, players, holes) instead of the API.
    #[arg(
        long,
        value_name = "SNAPSHOT_JSON",
        value_parser = crate::args::validation::check_readable_file_and_json
    )]
    pub snapshot_json: Option<TournamentSnapshot>,
    #[arg(short = 't', long, value_name = "TOURNAMENT_ID")]
    pub tournament: Option<String>,
    /// Rank individual players instead of teams.
    #[arg(short = 'i', long)]
    pub individuals: bool,
    #[arg(long, value_enum, default_value_t = TeamScoringArg::Aggregate)]
    pub team_scoring: TeamScoringArg,
    #[arg(long, value_enum, default_value_t = StrokePolicyArg::MultiLap)]
    pub stroke_policy: StrokePolicyArg,
    /// Last hole that counts toward a match play result.
    #[arg(long, default_value_t = 18, value_parser = clap::value_parser!(u8).range(1..=18))]
    pub last_counted_hole: u8,
    /// Print the leaderboard as json.
    #[arg(long)]
    pub json: bool,
    /// Refresh every n seconds instead of printing once.
    #[arg(long, value_name = "SECONDS")]
    pub poll_secs: Option<u64>,
    /// Seconds a fetched snapshot is reused; 0 always refetches.
    #[arg(long, value_name = "SECONDS", default_value_t = 30)]
    pub cache_max_age: i64,
}

/// Where the scoring inputs come from.
#[derive(Clone, Debug)]
pub enum Source {
    Api { url: String, token: Option<String> },
    Snapshot(Box<TournamentSnapshot>),
}

#[derive(Clone, Debug)]
pub struct CleanArgs {
    pub source: Source,
    pub tournament_id: TournamentId,
    pub options: LeaderboardOptions,
    pub json: bool,
    pub poll_secs: Option<u64>,
    pub cache_max_age: i64,
}

impl CleanArgs {
    /// Expects `args` to have passed [`Args::validate`].
    #[must_use]
    pub fn new(args: Args) -> Self {
        let options = LeaderboardOptions {
            individuals: args.individuals,
            team_scoring: args.team_scoring.into(),
            stroke_policy: args.stroke_policy.into(),
            match_play: MatchPlayOptions {
                last_counted_hole: args.last_counted_hole,
            },
        };

        let (source, tournament_id) = match (args.snapshot_json, args.api_url) {
            (Some(snapshot), _) => {
                let id = snapshot.tournament.id.clone();
                (Source::Snapshot(Box::new(snapshot)), id)
            }
            (None, url) => (
                Source::Api {
                    url: url.unwrap_or_default().trim().to_string(),
                    token: args.api_token,
                },
                TournamentId::new(args.tournament.unwrap_or_default().trim()),
            ),
        };

        CleanArgs {
            source,
            tournament_id,
            options,
            json: args.json,
            poll_secs: args.poll_secs,
            cache_max_age: args.cache_max_age,
        }
    }
}
