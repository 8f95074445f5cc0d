//! Standings order for the project list.

use std::cmp::Ordering;

use serde::Serialize;

use crate::projects::domain::ProjectRecord;

/// A record plus its 1-based slot in the standings.
#[derive(Debug, Clone, Serialize)]
pub struct RankedProject {
    pub position: usize,
    #[serde(flatten)]
    pub project: ProjectRecord,
}

/// Standings comparator: completed projects first, better final rating
/// next, earlier submission breaking ties.
///
/// Unrated records compete with a 0.0 final rating, which parks them
/// below every rated one on a scale that bottoms out at 1.
pub fn compare(a: &ProjectRecord, b: &ProjectRecord) -> Ordering {
    b.is_completed
        .cmp(&a.is_completed)
        .then_with(|| final_rating_key(b).total_cmp(&final_rating_key(a)))
        .then_with(|| a.created_at.cmp(&b.created_at))
}

/// Sort records into standings order and assign positions.
///
/// The sort is stable, so records tied on every key keep their incoming
/// order.
pub fn rank(mut records: Vec<ProjectRecord>) -> Vec<RankedProject> {
    records.sort_by(compare);
    records
        .into_iter()
        .enumerate()
        .map(|(index, project)| RankedProject {
            position: index + 1,
            project,
        })
        .collect()
}

fn final_rating_key(record: &ProjectRecord) -> f64 {
    record.final_rating().unwrap_or(0.0)
}
