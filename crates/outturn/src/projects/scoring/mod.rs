//! Population-relative rating of completed projects.
//!
//! Ratings are not absolute grades. A project's score only says how its
//! deviations sit inside the completed population, so every completed
//! record is re-scored whenever that population changes.

pub(crate) mod normalizer;
mod weights;

use std::collections::BTreeMap;

use crate::projects::domain::{ProjectId, RatingSet};
use crate::projects::repository::{ProjectStore, StoreError};

use normalizer::DeviationSpread;
pub use weights::RatingWeights;

/// Outcome of one full re-score of the completed population.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecalcReport {
    /// Ratings written back, keyed by project id.
    pub ratings: BTreeMap<ProjectId, RatingSet>,
}

impl RecalcReport {
    /// Number of completed records that received fresh ratings.
    pub fn rated(&self) -> usize {
        self.ratings.len()
    }
}

/// Failure modes of a re-score pass.
///
/// An `Update` failure leaves the population partially re-scored: the
/// writes before the failing one have already landed and stay in place.
#[derive(Debug, thiserror::Error)]
pub enum RecalcError {
    #[error("failed to scan completed projects")]
    Scan(#[from] StoreError),
    #[error("rating write-back aborted after {applied} of {total} updates")]
    Update {
        applied: usize,
        total: usize,
        #[source]
        source: StoreError,
    },
}

/// Re-scores the completed population against its own deviation spreads.
#[derive(Debug, Clone, Copy, Default)]
pub struct RatingEngine {
    weights: RatingWeights,
}

impl RatingEngine {
    pub fn new(weights: RatingWeights) -> Self {
        Self { weights }
    }

    /// Rate every completed project and write the results back.
    ///
    /// Cost and duration spreads are scanned independently, so the two
    /// extremes of a record's rating may be anchored by different peers.
    /// An empty completed population is a no-op.
    pub fn recalculate<S>(&self, store: &S) -> Result<RecalcReport, RecalcError>
    where
        S: ProjectStore + ?Sized,
    {
        let completed = store.find_completed()?;

        let cost_spread =
            DeviationSpread::of(completed.iter().map(|record| record.cost_deviation));
        let duration_spread =
            DeviationSpread::of(completed.iter().map(|record| record.duration_deviation));
        let (Some(cost_spread), Some(duration_spread)) = (cost_spread, duration_spread) else {
            return Ok(RecalcReport::default());
        };

        let total = completed.len();
        let mut report = RecalcReport::default();
        for (applied, record) in completed.iter().enumerate() {
            let cost_rating = cost_spread.rating_for(record.cost_deviation);
            let duration_rating = duration_spread.rating_for(record.duration_deviation);
            let ratings = RatingSet {
                cost_rating,
                duration_rating,
                final_rating: self.weights.combine(cost_rating, duration_rating),
            };

            store
                .update_ratings(record.id, &ratings)
                .map_err(|source| RecalcError::Update {
                    applied,
                    total,
                    source,
                })?;
            report.ratings.insert(record.id, ratings);
        }

        Ok(report)
    }
}
