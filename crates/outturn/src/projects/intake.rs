use chrono::Utc;

use super::domain::{Deviations, ProjectDraft, ProjectSubmission};

/// Validation errors raised at the intake boundary.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("project name must not be empty")]
    EmptyName,
    #[error("{field} must be at least 1 day, got {value}")]
    DurationTooShort { field: &'static str, value: i64 },
    #[error("{field} must not be negative, got {value}")]
    NegativeCost { field: &'static str, value: i64 },
}

/// Guard responsible for producing `ProjectDraft` instances.
///
/// Malformed submissions are rejected here so the scoring core only ever
/// sees well-formed figures.
#[derive(Debug, Clone, Copy, Default)]
pub struct IntakeGuard;

impl IntakeGuard {
    /// Validate an inbound submission and derive the stored fields.
    ///
    /// Deviations are computed once, at creation time; nothing downstream
    /// ever recomputes or mutates them.
    pub fn draft_from_submission(
        &self,
        submission: ProjectSubmission,
    ) -> Result<ProjectDraft, ValidationError> {
        let name = submission.name.trim().to_string();
        if name.is_empty() {
            return Err(ValidationError::EmptyName);
        }

        for (field, value) in [
            ("planned_duration", submission.planned_duration),
            ("actual_duration", submission.actual_duration),
            ("projected_duration", submission.projected_duration),
        ] {
            if value < 1 {
                return Err(ValidationError::DurationTooShort { field, value });
            }
        }

        for (field, value) in [
            ("planned_cost", submission.planned_cost),
            ("actual_cost", submission.actual_cost),
            ("projected_cost", submission.projected_cost),
        ] {
            if value < 0 {
                return Err(ValidationError::NegativeCost { field, value });
            }
        }

        let deviations = Deviations::between(
            submission.planned_cost,
            submission.projected_cost,
            submission.planned_duration,
            submission.projected_duration,
        );

        Ok(ProjectDraft {
            name,
            planned_duration: submission.planned_duration,
            planned_cost: submission.planned_cost,
            actual_duration: submission.actual_duration,
            actual_cost: submission.actual_cost,
            projected_duration: submission.projected_duration,
            projected_cost: submission.projected_cost,
            cost_deviation: deviations.cost,
            duration_deviation: deviations.duration,
            is_completed: submission.is_completed,
            created_at: Utc::now(),
        })
    }
}
