use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::model::TournamentId;
use crate::score::TournamentSnapshot;

#[derive(Clone, Debug)]
pub struct CachedSnapshot {
    pub snapshot: TournamentSnapshot,
    pub cached_time: DateTime<Utc>,
}

pub type SnapshotCache = Arc<RwLock<HashMap<TournamentId, CachedSnapshot>>>;

#[must_use]
pub fn new_cache() -> SnapshotCache {
    Arc::new(RwLock::new(HashMap::new()))
}

/// A max age of zero or less means never fresh.
#[must_use]
pub fn is_fresh(cached_time: DateTime<Utc>, now: DateTime<Utc>, max_age_seconds: i64) -> bool {
    max_age_seconds > 0 && (now - cached_time).num_seconds() < max_age_seconds
}

pub async fn get_fresh(
    cache: &SnapshotCache,
    tournament_id: &TournamentId,
    max_age_seconds: i64,
) -> Option<TournamentSnapshot> {
    let cache = cache.read().await;
    cache
        .get(tournament_id)
        .filter(|c| is_fresh(c.cached_time, Utc::now(), max_age_seconds))
        .map(|c| c.snapshot.clone())
}

/// Any cached snapshot, however old.
pub async fn get_any(
    cache: &SnapshotCache,
    tournament_id: &TournamentId,
) -> Option<CachedSnapshot> {
    cache.read().await.get(tournament_id).cloned()
}

pub async fn store(cache: &SnapshotCache, snapshot: TournamentSnapshot) {
    let key = snapshot.tournament.id.clone();
    cache.write().await.insert(
        key,
        CachedSnapshot {
            snapshot,
            cached_time: Utc::now(),
        },
    );
}

pub async fn invalidate(cache: &SnapshotCache, tournament_id: &TournamentId) {
    cache.write().await.remove(tournament_id);
}
