use std::{fs, path::PathBuf};

use super::types::Args;
use crate::score::TournamentSnapshot;

/// # Errors
///
/// Will return `Err` if the file is not readable or is not a tournament snapshot
pub fn check_readable_file_and_json(file: &str) -> Result<TournamentSnapshot, String> {
    let path = PathBuf::from(file);
    if !path.is_file() || fs::metadata(&path).is_err() {
        return Err(format!("The json file '{file}' is not readable."));
    }
    let contents =
        fs::read_to_string(&path).map_err(|e| format!("Failed to read '{file}': {e}"))?;
    let snapshot: TournamentSnapshot = serde_json::from_str(&contents).map_err(|e| {
        format!("The json file '{file}' is not a tournament snapshot: {e}")
    })?;
    validate_snapshot(&snapshot)?;
    Ok(snapshot)
}

/// A snapshot needs a tournament id and hole records that point somewhere.
///
/// # Errors
///
/// Will return `Err` naming the first problem found
pub fn validate_snapshot(snapshot: &TournamentSnapshot) -> Result<(), String> {
    if snapshot.tournament.id.as_str().trim().is_empty() {
        return Err("The snapshot tournament has no id.".to_string());
    }
    if let Some(hole) = snapshot
        .holes
        .iter()
        .find(|h| h.player_id.as_str().is_empty() || h.team_id.as_str().is_empty())
    {
        return Err(format!(
            "The snapshot hole {} has no player or team id.",
            hole.number
        ));
    }
    Ok(())
}

impl Args {
    /// # Errors
    ///
    /// Will return `Err` if the source of scores is missing or ambiguous
    pub fn validate(&self) -> Result<(), String> {
        match (&self.api_url, &self.snapshot_json) {
            (Some(_), Some(_)) => {
                return Err("Use either --api-url or --snapshot-json, not both.".to_string());
            }
            (None, None) => {
                return Err("One of --api-url or --snapshot-json is required.".to_string());
            }
            (Some(url), None) => {
                let url = url.trim();
                if !(url.starts_with("http://") || url.starts_with("https://")) {
                    return Err(format!("The api url '{url}' must start with http:// or https://."));
                }
                if self
                    .tournament
                    .as_deref()
                    .is_none_or(|t| t.trim().is_empty())
                {
                    return Err("--tournament is required with --api-url.".to_string());
                }
            }
            (None, Some(snapshot)) => {
                if let Some(t) = self.tournament.as_deref() {
                    if t.trim() != snapshot.tournament.id.as_str() {
                        return Err(format!(
                            "--tournament '{t}' does not match the snapshot tournament '{}'.",
                            snapshot.tournament.id
                        ));
                    }
                }
                if self.poll_secs.is_some() {
                    return Err("--poll-secs needs --api-url.".to_string());
                }
            }
        }
        if self.poll_secs == Some(0) {
            return Err("--poll-secs must be at least 1.".to_string());
        }
        Ok(())
    }
}
