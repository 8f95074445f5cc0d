//! Storage boundary for project records.

use crate::projects::domain::{ProjectDraft, ProjectId, ProjectRecord, RatingSet};

/// Errors surfaced by a [`ProjectStore`] implementation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    #[error("project {0} not found")]
    NotFound(ProjectId),
    #[error("project store unavailable: {0}")]
    Unavailable(String),
}

/// Persistence seam for project records.
///
/// Backends assign ids on insert and must return listings in a stable
/// order so that downstream ranking stays deterministic.
pub trait ProjectStore: Send + Sync {
    /// Persist a validated draft and return the stored record with its id.
    fn insert(&self, draft: ProjectDraft) -> Result<ProjectRecord, StoreError>;

    /// Every record, completed or not, in insertion order.
    fn find_all(&self) -> Result<Vec<ProjectRecord>, StoreError>;

    /// The completed population, in insertion order.
    fn find_completed(&self) -> Result<Vec<ProjectRecord>, StoreError>;

    /// Overwrite the stored ratings of one record.
    fn update_ratings(&self, id: ProjectId, ratings: &RatingSet) -> Result<(), StoreError>;
}
