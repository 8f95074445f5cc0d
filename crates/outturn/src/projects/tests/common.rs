use std::collections::BTreeMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use axum::response::Response;
use chrono::{DateTime, TimeZone, Utc};
use serde_json::Value;

use crate::projects::domain::{
    ProjectDraft, ProjectId, ProjectRecord, ProjectSubmission, RatingSet,
};
use crate::projects::intake::IntakeGuard;
use crate::projects::repository::{ProjectStore, StoreError};
use crate::projects::router::project_router;
use crate::projects::service::ProjectService;

pub(super) const BASE_PLANNED_COST: i64 = 250_000;
pub(super) const BASE_PLANNED_DURATION: i64 = 180;

/// A completed submission whose projections land at the given deviations
/// from a shared base plan.
pub(super) fn completed(
    name: &str,
    cost_deviation: i64,
    duration_deviation: i64,
) -> ProjectSubmission {
    ProjectSubmission {
        name: name.to_string(),
        planned_duration: BASE_PLANNED_DURATION,
        planned_cost: BASE_PLANNED_COST,
        actual_duration: BASE_PLANNED_DURATION,
        actual_cost: BASE_PLANNED_COST,
        projected_duration: BASE_PLANNED_DURATION + duration_deviation,
        projected_cost: BASE_PLANNED_COST + cost_deviation,
        is_completed: true,
    }
}

pub(super) fn incomplete(name: &str) -> ProjectSubmission {
    ProjectSubmission {
        is_completed: false,
        ..completed(name, 0, 0)
    }
}

/// A stored record with the shape the comparator cares about; the raw
/// figures are shared filler.
pub(super) fn record(
    id: u64,
    is_completed: bool,
    final_rating: Option<f64>,
    created_at: DateTime<Utc>,
) -> ProjectRecord {
    ProjectRecord {
        id: ProjectId(id),
        name: format!("project-{id}"),
        planned_duration: BASE_PLANNED_DURATION,
        planned_cost: BASE_PLANNED_COST,
        actual_duration: BASE_PLANNED_DURATION,
        actual_cost: BASE_PLANNED_COST,
        projected_duration: BASE_PLANNED_DURATION,
        projected_cost: BASE_PLANNED_COST,
        cost_deviation: 0,
        duration_deviation: 0,
        ratings: final_rating.map(|value| RatingSet {
            cost_rating: 5,
            duration_rating: 5,
            final_rating: value,
        }),
        is_completed,
        created_at,
    }
}

pub(super) fn at(minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 6, 1, 9, minute, 0)
        .single()
        .expect("valid timestamp")
}

pub(super) fn draft(submission: ProjectSubmission) -> ProjectDraft {
    IntakeGuard::default()
        .draft_from_submission(submission)
        .expect("valid submission")
}

pub(super) fn build_service() -> (ProjectService<MemoryStore>, Arc<MemoryStore>) {
    let store = Arc::new(MemoryStore::default());
    let service = ProjectService::new(store.clone());
    (service, store)
}

pub(super) fn project_router_with_service<S>(service: ProjectService<S>) -> axum::Router
where
    S: ProjectStore + 'static,
{
    project_router(Arc::new(service))
}

#[derive(Default)]
pub(super) struct MemoryStore {
    inner: Mutex<MemoryStoreInner>,
}

#[derive(Default)]
struct MemoryStoreInner {
    next_id: u64,
    records: BTreeMap<ProjectId, ProjectRecord>,
}

impl MemoryStore {
    pub(super) fn record(&self, id: ProjectId) -> Option<ProjectRecord> {
        let inner = self.inner.lock().expect("store mutex poisoned");
        inner.records.get(&id).cloned()
    }
}

impl ProjectStore for MemoryStore {
    fn insert(&self, draft: ProjectDraft) -> Result<ProjectRecord, StoreError> {
        let mut inner = self.inner.lock().expect("store mutex poisoned");
        inner.next_id += 1;
        let record = ProjectRecord::from_draft(ProjectId(inner.next_id), draft);
        inner.records.insert(record.id, record.clone());
        Ok(record)
    }

    fn find_all(&self) -> Result<Vec<ProjectRecord>, StoreError> {
        let inner = self.inner.lock().expect("store mutex poisoned");
        Ok(inner.records.values().cloned().collect())
    }

    fn find_completed(&self) -> Result<Vec<ProjectRecord>, StoreError> {
        let inner = self.inner.lock().expect("store mutex poisoned");
        Ok(inner
            .records
            .values()
            .filter(|record| record.is_completed)
            .cloned()
            .collect())
    }

    fn update_ratings(&self, id: ProjectId, ratings: &RatingSet) -> Result<(), StoreError> {
        let mut inner = self.inner.lock().expect("store mutex poisoned");
        let record = inner.records.get_mut(&id).ok_or(StoreError::NotFound(id))?;
        record.ratings = Some(*ratings);
        Ok(())
    }
}

/// Every insert fails; reads succeed but stay empty.
pub(super) struct BrokenInsertStore;

impl ProjectStore for BrokenInsertStore {
    fn insert(&self, _draft: ProjectDraft) -> Result<ProjectRecord, StoreError> {
        Err(StoreError::Unavailable("database offline".to_string()))
    }

    fn find_all(&self) -> Result<Vec<ProjectRecord>, StoreError> {
        Ok(Vec::new())
    }

    fn find_completed(&self) -> Result<Vec<ProjectRecord>, StoreError> {
        Ok(Vec::new())
    }

    fn update_ratings(&self, _id: ProjectId, _ratings: &RatingSet) -> Result<(), StoreError> {
        Ok(())
    }
}

/// Inserts land but the completed-population scan always fails.
#[derive(Default)]
pub(super) struct BrokenScanStore {
    pub(super) inner: MemoryStore,
}

impl ProjectStore for BrokenScanStore {
    fn insert(&self, draft: ProjectDraft) -> Result<ProjectRecord, StoreError> {
        self.inner.insert(draft)
    }

    fn find_all(&self) -> Result<Vec<ProjectRecord>, StoreError> {
        self.inner.find_all()
    }

    fn find_completed(&self) -> Result<Vec<ProjectRecord>, StoreError> {
        Err(StoreError::Unavailable("completed scan failed".to_string()))
    }

    fn update_ratings(&self, id: ProjectId, ratings: &RatingSet) -> Result<(), StoreError> {
        self.inner.update_ratings(id, ratings)
    }
}

/// Listing fails; everything else delegates.
#[derive(Default)]
pub(super) struct BrokenListStore {
    inner: MemoryStore,
}

impl ProjectStore for BrokenListStore {
    fn insert(&self, draft: ProjectDraft) -> Result<ProjectRecord, StoreError> {
        self.inner.insert(draft)
    }

    fn find_all(&self) -> Result<Vec<ProjectRecord>, StoreError> {
        Err(StoreError::Unavailable("listing failed".to_string()))
    }

    fn find_completed(&self) -> Result<Vec<ProjectRecord>, StoreError> {
        self.inner.find_completed()
    }

    fn update_ratings(&self, id: ProjectId, ratings: &RatingSet) -> Result<(), StoreError> {
        self.inner.update_ratings(id, ratings)
    }
}

/// Lets a fixed number of rating updates through before failing, to force
/// a partial recalculation pass.
pub(super) struct UpdateBudgetStore {
    inner: MemoryStore,
    budget: AtomicUsize,
}

impl UpdateBudgetStore {
    pub(super) fn failing_after(budget: usize) -> Self {
        Self {
            inner: MemoryStore::default(),
            budget: AtomicUsize::new(budget),
        }
    }

    pub(super) fn record(&self, id: ProjectId) -> Option<ProjectRecord> {
        self.inner.record(id)
    }
}

impl ProjectStore for UpdateBudgetStore {
    fn insert(&self, draft: ProjectDraft) -> Result<ProjectRecord, StoreError> {
        self.inner.insert(draft)
    }

    fn find_all(&self) -> Result<Vec<ProjectRecord>, StoreError> {
        self.inner.find_all()
    }

    fn find_completed(&self) -> Result<Vec<ProjectRecord>, StoreError> {
        self.inner.find_completed()
    }

    fn update_ratings(&self, id: ProjectId, ratings: &RatingSet) -> Result<(), StoreError> {
        let spent = self
            .budget
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |remaining| {
                remaining.checked_sub(1)
            });
        if spent.is_err() {
            return Err(StoreError::Unavailable("update budget exhausted".to_string()));
        }
        self.inner.update_ratings(id, ratings)
    }
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}

pub(super) fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}
