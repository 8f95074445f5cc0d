use std::sync::Arc;

use tracing::{debug, warn};

use super::domain::{ProjectRecord, ProjectSubmission};
use super::intake::{IntakeGuard, ValidationError};
use super::ranking::{rank, RankedProject};
use super::repository::{ProjectStore, StoreError};
use super::scoring::{RatingEngine, RatingWeights, RecalcError, RecalcReport};

/// Service composing the intake guard, record store, and rating engine.
pub struct ProjectService<S> {
    guard: IntakeGuard,
    store: Arc<S>,
    engine: RatingEngine,
}

impl<S> ProjectService<S>
where
    S: ProjectStore + 'static,
{
    pub fn new(store: Arc<S>) -> Self {
        Self::with_weights(store, RatingWeights::default())
    }

    pub fn with_weights(store: Arc<S>, weights: RatingWeights) -> Self {
        Self {
            guard: IntakeGuard::default(),
            store,
            engine: RatingEngine::new(weights),
        }
    }

    /// Validate and persist a submission, re-scoring the completed
    /// population when the new record joins it.
    ///
    /// A failed re-score does not fail the submission: the record is
    /// already stored, so the outcome carries the failure as a warning
    /// instead.
    pub fn submit(
        &self,
        submission: ProjectSubmission,
    ) -> Result<SubmissionOutcome, ProjectServiceError> {
        let draft = self.guard.draft_from_submission(submission)?;
        let mut record = self.store.insert(draft)?;

        let recalculation = if record.is_completed {
            match self.engine.recalculate(self.store.as_ref()) {
                Ok(report) => {
                    if let Some(ratings) = report.ratings.get(&record.id) {
                        record.ratings = Some(*ratings);
                    }
                    debug!(
                        project = %record.id,
                        rated = report.rated(),
                        "completed population re-scored"
                    );
                    RecalculationStatus::Applied(report)
                }
                Err(error) => {
                    warn!(project = %record.id, %error, "rating recalculation failed");
                    RecalculationStatus::Failed(error)
                }
            }
        } else {
            RecalculationStatus::Skipped
        };

        Ok(SubmissionOutcome {
            record,
            recalculation,
        })
    }

    /// All records in standings order, ready for API responses.
    pub fn ranked(&self) -> Result<Vec<RankedProject>, ProjectServiceError> {
        let records = self.store.find_all()?;
        Ok(rank(records))
    }
}

/// Result of a successful submission.
#[derive(Debug)]
pub struct SubmissionOutcome {
    /// The stored record, with fresh ratings when a re-score applied them.
    pub record: ProjectRecord,
    pub recalculation: RecalculationStatus,
}

impl SubmissionOutcome {
    /// Human-readable warning when the re-score failed, for API callers.
    pub fn recalculation_warning(&self) -> Option<String> {
        match &self.recalculation {
            RecalculationStatus::Failed(error) => Some(error.to_string()),
            _ => None,
        }
    }
}

/// What happened to the completed population after the insert.
#[derive(Debug)]
pub enum RecalculationStatus {
    /// The record was incomplete, so the population did not change.
    Skipped,
    Applied(RecalcReport),
    Failed(RecalcError),
}

/// Error raised by the project service.
#[derive(Debug, thiserror::Error)]
pub enum ProjectServiceError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Store(#[from] StoreError),
}
