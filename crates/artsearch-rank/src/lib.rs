//! Deterministic ranking score over result records.
//!
//! Used to order results for default presentation when the caller did not
//! ask for an explicit sort. Pure and stateless; identical inputs always
//! produce the identical score.

use std::cmp::Ordering;

use artsearch_core::types::RankingInputs;
use serde::Serialize;

/// Scoring weights. `featured` is an editorial override that dominates
/// every organic signal; one rating star is worth 20 bookings or 40 years
/// of experience; availability is a fixed nudge of a quarter star.
pub const FEATURED_WEIGHT: f64 = 1000.0;
pub const RATING_WEIGHT: f64 = 200.0;
pub const AVAILABILITY_WEIGHT: f64 = 50.0;
pub const POPULARITY_WEIGHT: f64 = 10.0;
pub const EXPERIENCE_WEIGHT: f64 = 5.0;

/// Compute the ordering score for one record; higher is better.
///
/// Missing optional fields count as zero, never as NaN and never as
/// disqualifying, so the function cannot fail for any input combination.
pub fn ranking_score(record: &RankingInputs) -> f64 {
    let featured = if record.featured { FEATURED_WEIGHT } else { 0.0 };
    let available = if record.is_available.unwrap_or(false) {
        AVAILABILITY_WEIGHT
    } else {
        0.0
    };
    #[allow(clippy::cast_precision_loss)]
    let popularity = record.popularity.unwrap_or(0) as f64;
    #[allow(clippy::cast_precision_loss)]
    let experience = record.experience_years.unwrap_or(0) as f64;

    featured
        + record.rating.unwrap_or(0.0) * RATING_WEIGHT
        + available
        + popularity * POPULARITY_WEIGHT
        + experience * EXPERIENCE_WEIGHT
}

/// A record paired with its computed score.
#[derive(Debug, Clone, Serialize)]
pub struct ScoredRecord {
    pub score: f64,
    #[serde(flatten)]
    pub record: RankingInputs,
}

/// Score every record and sort best-first.
///
/// The score function leaves ties unspecified, so this helper applies the
/// deterministic secondary order callers need: id ascending.
pub fn score_and_sort(records: Vec<RankingInputs>) -> Vec<ScoredRecord> {
    let mut scored: Vec<ScoredRecord> = records
        .into_iter()
        .map(|record| ScoredRecord {
            score: ranking_score(&record),
            record,
        })
        .collect();
    scored.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.record.id.cmp(&b.record.id))
    });
    scored
}
