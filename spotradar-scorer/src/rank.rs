//! Final ordering and truncation.

use spotradar_core::ScoredSpot;

/// A scored spot with its catalogue position for tie-breaking.
#[derive(Debug, Clone)]
pub(crate) struct Ranked {
    pub(crate) position: usize,
    pub(crate) spot: ScoredSpot,
}

/// Sort best-first and keep at most `limit` spots.
///
/// Order is by tier, then distance, then catalogue position. This agrees with
/// [`ScoredSpot::composite_score`], whose tier gap outweighs any distance.
pub(crate) fn rank(mut ranked: Vec<Ranked>, limit: usize) -> Vec<ScoredSpot> {
    ranked.sort_by(|a, b| {
        a.spot
            .priority
            .cmp(&b.spot.priority)
            .then_with(|| a.spot.distance_km.total_cmp(&b.spot.distance_km))
            .then_with(|| a.position.cmp(&b.position))
    });
    ranked.truncate(limit);
    ranked.into_iter().map(|entry| entry.spot).collect()
}
