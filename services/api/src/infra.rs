use metrics_exporter_prometheus::PrometheusHandle;
use outturn::projects::{
    ProjectDraft, ProjectId, ProjectRecord, ProjectStore, RatingSet, StoreError,
};
use std::collections::BTreeMap;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Process-local record store. Ids are handed out sequentially and the
/// ordered map keeps listings in insertion order for the ranker.
#[derive(Default)]
pub(crate) struct InMemoryProjectStore {
    inner: Mutex<StoreInner>,
}

#[derive(Default)]
struct StoreInner {
    next_id: u64,
    records: BTreeMap<ProjectId, ProjectRecord>,
}

impl ProjectStore for InMemoryProjectStore {
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
