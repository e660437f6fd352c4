//! Gerrit Backend Options

use serde::Serialize;

use crate::option_module;

/// Gerrit review settings
#[derive(Debug, Clone, Default, Serialize)]
pub struct GerritOptions {
    change_id: Option<String>,
}

option_module!(GerritOptions, "gerrit");

impl GerritOptions {
    pub fn change_id(&self) -> Option<&str> {
        self.change_id.as_deref()
    }

    pub fn with_change_id(&self, change_id: &str) -> Self {
        Self {
            change_id: Some(change_id.to_string()),
        }
    }
}
