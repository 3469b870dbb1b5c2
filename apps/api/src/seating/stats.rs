use serde::{Deserialize, Serialize};

use crate::seating::distributor::group_by_organization;
use crate::seating::models::Record;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SeatingStatistics {
    pub total_candidates: usize,
    pub organizations: usize,
    /// Candidates per organization, rounded to the nearest whole candidate.
    pub average_per_organization: usize,
    pub largest_organization: usize,
}

pub fn compute_statistics(records: &[Record], org_field: &str) -> SeatingStatistics {
    let groups = group_by_organization(records, org_field);
    if groups.is_empty() {
        return SeatingStatistics::default();
    }

    let total = records.len();
    SeatingStatistics {
        total_candidates: total,
        organizations: groups.len(),
        average_per_organization: (total as f64 / groups.len() as f64).round() as usize,
        largest_organization: groups.values().map(Vec::len).max().unwrap_or(0),
    }
}
