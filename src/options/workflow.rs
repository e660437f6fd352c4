//! Workflow Options
//!
//! Settings scoped to a single sync workflow run.

use serde::Serialize;

use crate::option_module;

/// Per-workflow settings
#[derive(Debug, Clone, Default, Serialize)]
pub struct WorkflowOptions {
    change_baseline: Option<String>,
    last_revision: Option<String>,
    check_last_rev_state: bool,
}

option_module!(WorkflowOptions, "workflow");

impl WorkflowOptions {
    pub fn new(
        change_baseline: Option<String>,
        last_revision: Option<String>,
        check_last_rev_state: bool,
    ) -> Self {
        Self {
            change_baseline,
            last_revision,
            check_last_rev_state,
        }
    }

    pub fn change_baseline(&self) -> Option<&str> {
        self.change_baseline.as_deref()
    }

    pub fn last_revision(&self) -> Option<&str> {
        self.last_revision.as_deref()
    }

    pub fn check_last_rev_state(&self) -> bool {
        self.check_last_rev_state
    }

    /// Derive a new instance, replacing the fields set on `patch` and copying
    /// everything else verbatim.
    pub fn derive(&self, patch: WorkflowPatch) -> Self {
        Self {
            change_baseline: patch
                .change_baseline
                .unwrap_or_else(|| self.change_baseline.clone()),
            last_revision: patch
                .last_revision
                .unwrap_or_else(|| self.last_revision.clone()),
            check_last_rev_state: patch
                .check_last_rev_state
                .unwrap_or(self.check_last_rev_state),
        }
    }
}

/// Partial set of field overrides for [`WorkflowOptions::derive`]
#[derive(Default)]
pub struct WorkflowPatch {
    change_baseline: Option<Option<String>>,
    last_revision: Option<Option<String>>,
    check_last_rev_state: Option<bool>,
}

impl WorkflowPatch {
    pub fn change_baseline(mut self, change_baseline: Option<String>) -> Self {
        self.change_baseline = Some(change_baseline);
        self
    }

    pub fn last_revision(mut self, last_revision: Option<String>) -> Self {
        self.last_revision = Some(last_revision);
        self
    }

    pub fn check_last_rev_state(mut self, check: bool) -> Self {
        self.check_last_rev_state = Some(check);
        self
    }
}
