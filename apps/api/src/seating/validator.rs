use serde::{Deserialize, Serialize};

use crate::seating::distributor::organization_key;
use crate::seating::models::{Record, Violation};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpacingReport {
    pub passed: bool,
    pub min_spacing: usize,
    pub violation_count: usize,
    pub violations: Vec<Violation>,
    pub message: String,
}

/// Finds same-organization pairs seated `min_spacing` or fewer seats apart.
///
/// Every seat `i` is compared with the next `min_spacing` seats, so the cost is
/// O(seats × min_spacing). `min_spacing == 0` never reports anything.
pub fn validate(order: &[Record], org_field: &str, min_spacing: usize) -> Vec<Violation> {
    let mut violations = Vec::new();

    for (i, record) in order.iter().enumerate() {
        let org = organization_key(record, org_field);
        let window_end = i.saturating_add(min_spacing).min(order.len().saturating_sub(1));

        for j in (i + 1)..=window_end {
            if organization_key(&order[j], org_field) == org {
                violations.push(Violation {
                    position_a: i + 1,
                    position_b: j + 1,
                    organization: org.to_string(),
                    observed_spacing: j - i,
                });
            }
        }
    }

    violations
}

/// Runs [`validate`] and wraps the result with a pass/fail summary.
pub fn spacing_report(order: &[Record], org_field: &str, min_spacing: usize) -> SpacingReport {
    let violations = validate(order, org_field, min_spacing);
    let message = if violations.is_empty() {
        format!(
            "Validation passed! All candidates from the same organization are spaced at least {} seats apart.",
            min_spacing
        )
    } else {
        format!(
            "Found {} spacing violation(s). Some candidates from the same organization are closer than {} seats. This may happen with organizations that have many candidates.",
            violations.len(),
            min_spacing
        )
    };

    SpacingReport {
        passed: violations.is_empty(),
        min_spacing,
        violation_count: violations.len(),
        violations,
        message,
    }
}
