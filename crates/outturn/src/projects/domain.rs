use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Identifier assigned by the record store on insert.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct ProjectId(pub u64);

impl fmt::Display for ProjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Inbound outcome figures for one construction project.
///
/// Durations are whole days, costs whole currency units, both widened to 64
/// bits so deviation arithmetic stays exact for any realistic project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectSubmission {
    pub name: String,
    pub planned_duration: i64,
    pub planned_cost: i64,
    pub actual_duration: i64,
    pub actual_cost: i64,
    pub projected_duration: i64,
    pub projected_cost: i64,
    #[serde(default)]
    pub is_completed: bool,
}

/// Signed plan-versus-projection gaps for one record. Positive values mean
/// the projection exceeds the plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deviations {
    pub cost: i64,
    pub duration: i64,
}

impl Deviations {
    /// Derive both deviations from the planned and projected figures.
    pub fn between(
        planned_cost: i64,
        projected_cost: i64,
        planned_duration: i64,
        projected_duration: i64,
    ) -> Self {
        Self {
            cost: projected_cost - planned_cost,
            duration: projected_duration - planned_duration,
        }
    }
}

/// Population-relative scores carried by completed records.
///
/// The two dimension ratings live on the discrete 1-10 scale; the final
/// rating blends them 70/30 in favor of cost.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RatingSet {
    pub cost_rating: u8,
    pub duration_rating: u8,
    pub final_rating: f64,
}

/// Validated record awaiting a store-assigned identifier. Produced only by
/// the intake guard.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectDraft {
    pub name: String,
    pub planned_duration: i64,
    pub planned_cost: i64,
    pub actual_duration: i64,
    pub actual_cost: i64,
    pub projected_duration: i64,
    pub projected_cost: i64,
    pub cost_deviation: i64,
    pub duration_deviation: i64,
    pub is_completed: bool,
    pub created_at: DateTime<Utc>,
}

/// A stored construction project outcome.
///
/// Everything except `ratings` is immutable after creation; the rating
/// fields are overwritten in place by recalculation passes and stay `None`
/// for as long as the record is incomplete.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectRecord {
    pub id: ProjectId,
    pub name: String,
    pub planned_duration: i64,
    pub planned_cost: i64,
    pub actual_duration: i64,
    pub actual_cost: i64,
    pub projected_duration: i64,
    pub projected_cost: i64,
    pub cost_deviation: i64,
    pub duration_deviation: i64,
    pub ratings: Option<RatingSet>,
    pub is_completed: bool,
    pub created_at: DateTime<Utc>,
}

impl ProjectRecord {
    /// Promote a draft into a stored record under the given identifier.
    pub fn from_draft(id: ProjectId, draft: ProjectDraft) -> Self {
        Self {
            id,
            name: draft.name,
            planned_duration: draft.planned_duration,
            planned_cost: draft.planned_cost,
            actual_duration: draft.actual_duration,
            actual_cost: draft.actual_cost,
            projected_duration: draft.projected_duration,
            projected_cost: draft.projected_cost,
            cost_deviation: draft.cost_deviation,
            duration_deviation: draft.duration_deviation,
            ratings: None,
            is_completed: draft.is_completed,
            created_at: draft.created_at,
        }
    }

    pub fn final_rating(&self) -> Option<f64> {
        self.ratings.map(|set| set.final_rating)
    }
}
