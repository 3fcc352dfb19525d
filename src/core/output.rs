//! Public output types for batch operations.
//!
//! Commit and delete report one outcome per entry so a failure on one
//! entity never hides the others.

use serde::Serialize;

/// Standardized bulk execution result.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BulkResult<T: Serialize> {
    pub action: String,
    pub results: Vec<ItemOutcome<T>>,
    pub summary: BulkSummary,
}

/// Outcome for a single item in a bulk operation.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemOutcome<T: Serialize> {
    pub id: String,
    pub status: ItemStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(flatten)]
    pub result: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemStatus {
    Ok,
    Skipped,
    Error,
}

/// Summary of bulk operation results.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BulkSummary {
    pub total: usize,
    pub succeeded: usize,
    pub failed: usize,
    pub skipped: usize,
}

impl<T: Serialize> BulkResult<T> {
    pub fn new(action: impl Into<String>) -> Self {
        Self {
            action: action.into(),
            results: Vec::new(),
            summary: BulkSummary::default(),
        }
    }

    pub fn record_ok(&mut self, id: String, result: T) {
        self.summary.total += 1;
        self.summary.succeeded += 1;
        self.results.push(ItemOutcome {
            id,
            status: ItemStatus::Ok,
            result: Some(result),
            error: None,
        });
    }

    pub fn record_skipped(&mut self, id: String, result: T) {
        self.summary.total += 1;
        self.summary.skipped += 1;
        self.results.push(ItemOutcome {
            id,
            status: ItemStatus::Skipped,
            result: Some(result),
            error: None,
        });
    }

    pub fn record_error(&mut self, id: String, result: T, error: String) {
        self.summary.total += 1;
        self.summary.failed += 1;
        self.results.push(ItemOutcome {
            id,
            status: ItemStatus::Error,
            result: Some(result),
            error: Some(error),
        });
    }

    pub fn has_failures(&self) -> bool {
        self.summary.failed > 0
    }
}
