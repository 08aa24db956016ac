//! Comparison reports
//!
//! A [`CompareReport`] pairs the differences of one comparison with the
//! verdict of the policy used, ready for serialization or rendering.

use serde::{Deserialize, Serialize};

use crate::diff::{Difference, DifferenceKind};
use crate::policy::CompatibilityPolicy;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CompareReport {
    /// True iff every difference is compatible under the policy
    pub compatible: bool,
    pub incompatible_count: usize,
    /// Differences in traversal order
    pub differences: Vec<ReportedDifference>,
}

/// One difference with its policy verdict and message
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReportedDifference {
    pub kind: DifferenceKind,
    pub path: String,
    pub compatible: bool,
    pub description: String,
}

impl CompareReport {
    pub fn new(policy: &CompatibilityPolicy, differences: Vec<Difference>) -> Self {
        let differences: Vec<ReportedDifference> = differences
            .into_iter()
            .map(|difference| ReportedDifference {
                compatible: policy.is_compatible(difference.kind),
                description: difference.description(),
                kind: difference.kind,
                path: difference.path,
            })
            .collect();
        let incompatible_count = differences.iter().filter(|d| !d.compatible).count();
        Self {
            compatible: incompatible_count == 0,
            incompatible_count,
            differences,
        }
    }

    pub fn is_compatible(&self) -> bool {
        self.compatible
    }

    /// Only the differences the policy rejects
    pub fn incompatible(&self) -> impl Iterator<Item = &ReportedDifference> {
        self.differences.iter().filter(|d| !d.compatible)
    }
}
