mod common;

use clap::Parser;
use live_golf_scoring::args::validation::check_readable_file_and_json;
use live_golf_scoring::args::{Args, CleanArgs, Source};
use live_golf_scoring::score::{StrokePolicy, TeamScoring};
use std::io::Write;

fn snapshot_file() -> Result<tempfile::NamedTempFile, Box<dyn std::error::Error>> {
    let mut file = tempfile::NamedTempFile::new()?;
    let json = serde_json::to_string(&common::stroke_play_snapshot())?;
    file.write_all(json.as_bytes())?;
    file.flush()?;
    Ok(file)
}

fn parse(argv: &[&str]) -> Result<Args, clap::Error> {
    Args::try_parse_from(std::iter::once("live-golf-scoring").chain(argv.iter().copied()))
}

#[test]
fn test6_snapshot_file_is_validated() -> Result<(), Box<dyn std::error::Error>> {
    let file = snapshot_file()?;
    let path = file.path().to_string_lossy().to_string();
    let snapshot = check_readable_file_and_json(&path)?;
    assert_eq!(snapshot.tournament.id.as_str(), "spring-open");

    let mut bad = tempfile::NamedTempFile::new()?;
    bad.write_all(b"[1, 2, 3]")?;
    let bad_path = bad.path().to_string_lossy().to_string();
    assert!(check_readable_file_and_json(&bad_path).is_err());
    assert!(check_readable_file_and_json("/definitely/not/here.json").is_err());
    Ok(())
}

#[test]
fn test6_offline_args_become_clean_args() -> Result<(), Box<dyn std::error::Error>> {
    let file = snapshot_file()?;
    let path = file.path().to_string_lossy().to_string();
    let args = parse(&[
        "--snapshot-json",
        &path,
        "--individuals",
        "--team-scoring",
        "best-ball",
        "--stroke-policy",
        "single-lap",
        "--last-counted-hole",
        "17",
    ])?;
    args.validate()?;
    let clean = CleanArgs::new(args);

    assert!(matches!(clean.source, Source::Snapshot(_)));
    assert_eq!(clean.tournament_id.as_str(), "spring-open");
    assert!(clean.options.individuals);
    assert_eq!(clean.options.team_scoring, TeamScoring::BestBall);
    assert_eq!(clean.options.stroke_policy, StrokePolicy::SingleLap);
    assert_eq!(clean.options.match_play.last_counted_hole, 17);
    Ok(())
}

#[test]
fn test6_api_args_need_a_tournament() -> Result<(), Box<dyn std::error::Error>> {
    let args = parse(&["--api-url", "https://scores.example.com/"])?;
    assert!(args.validate().is_err());

    let args = parse(&[
        "--api-url",
        "https://scores.example.com/",
        "--tournament",
        "spring-open",
        "--poll-secs",
        "15",
    ])?;
    args.validate()?;
    let clean = CleanArgs::new(args);
    match clean.source {
        Source::Api { url, token } => {
            assert_eq!(url, "https://scores.example.com/");
            assert_eq!(token, None);
        }
        Source::Snapshot(_) => panic!("expected the api source"),
    }
    assert_eq!(clean.poll_secs, Some(15));
    assert_eq!(clean.cache_max_age, 30);
    assert_eq!(clean.options.stroke_policy, StrokePolicy::MultiLap);
    Ok(())
}

#[test]
fn test6_conflicting_or_missing_sources_fail() -> Result<(), Box<dyn std::error::Error>> {
    assert!(parse(&[])?.validate().is_err());
    assert!(parse(&["--api-url", "ftp://x", "--tournament", "t"])?.validate().is_err());

    let file = snapshot_file()?;
    let path = file.path().to_string_lossy().to_string();
    let both = parse(&["--api-url", "https://x", "--snapshot-json", &path])?;
    assert!(both.validate().is_err());
    let wrong_id = parse(&["--snapshot-json", &path, "--tournament", "other"])?;
    assert!(wrong_id.validate().is_err());
    let polling = parse(&["--snapshot-json", &path, "--poll-secs", "5"])?;
    assert!(polling.validate().is_err());

    assert!(parse(&["--api-url", "https://x", "--last-counted-hole", "19"]).is_err());
    Ok(())
}
