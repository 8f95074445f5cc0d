//! Construction project intake, rating, and ranking.
//!
//! Submissions come in with planned, actual, and projected figures, get
//! validated and stamped with their deviations, and land in the record
//! store. Completed projects are then rated 1-10 against the rest of the
//! completed population, and the full list is served back in standings
//! order.

pub mod domain;
pub(crate) mod intake;
pub mod ranking;
pub mod repository;
pub mod router;
pub(crate) mod scoring;
pub mod service;

#[cfg(test)]
mod tests;

pub use domain::{
    Deviations, ProjectDraft, ProjectId, ProjectRecord, ProjectSubmission, RatingSet,
};
pub use intake::{IntakeGuard, ValidationError};
pub use ranking::{compare, rank, RankedProject};
pub use repository::{ProjectStore, StoreError};
pub use router::project_router;
pub use scoring::{RatingEngine, RatingWeights, RecalcError, RecalcReport};
pub use service::{
    ProjectService, ProjectServiceError, RecalculationStatus, SubmissionOutcome,
};
