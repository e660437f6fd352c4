//! GitHub Backend Options
//!
//! `GithubOptions` carries the HTTP transport used by the GitHub API client.
//! The unconfigured default fails loudly instead of silently falling back to
//! a mock: a test exercising network-backed components must install its own
//! transport, otherwise it is almost certainly misconfigured.

use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::Serialize;

use crate::option_module;
use crate::transport::HttpTransport;

use super::deferred::Deferred;
use super::general::GeneralOptions;
use super::module::OptionsError;

/// GitHub API settings
#[derive(Clone)]
pub struct GithubOptions {
    general: Deferred<GeneralOptions>,
    transport: Option<Arc<dyn HttpTransport>>,
}

option_module!(GithubOptions, "github");

impl GithubOptions {
    pub fn new(general: Deferred<GeneralOptions>) -> Self {
        Self {
            general,
            transport: None,
        }
    }

    pub fn with_transport(&self, transport: Arc<dyn HttpTransport>) -> Self {
        Self {
            general: self.general.clone(),
            transport: Some(transport),
        }
    }

    /// The transport the API client must use.
    ///
    /// Fails when none was installed; there is deliberately no default.
    pub fn http_transport(&self) -> Result<Arc<dyn HttpTransport>, OptionsError> {
        self.transport
            .clone()
            .ok_or(OptionsError::TransportNotConfigured("GithubOptions"))
    }

    /// Where the stored API token lives, under the current HOME
    pub fn token_path(&self) -> PathBuf {
        let general = self.general.get();
        let home = general.env_var("HOME").unwrap_or(".");
        Path::new(home).join(".repo-shuttle").join("github-token")
    }
}

impl fmt::Debug for GithubOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GithubOptions")
            .field("transport_configured", &self.transport.is_some())
            .finish_non_exhaustive()
    }
}

/// GitHub pull-request origin settings
#[derive(Debug, Clone, Default, Serialize)]
pub struct GithubPrOriginOptions {
    required_labels: Vec<String>,
}

option_module!(GithubPrOriginOptions, "github-pr-origin");

impl GithubPrOriginOptions {
    pub fn required_labels(&self) -> &[String] {
        &self.required_labels
    }

    pub fn with_required_labels(&self, labels: Vec<String>) -> Self {
        Self {
            required_labels: labels,
        }
    }
}

/// GitHub destination settings
#[derive(Debug, Clone, Default, Serialize)]
pub struct GithubDestinationOptions {
    pr_branch: Option<String>,
}

option_module!(GithubDestinationOptions, "github-destination");

impl GithubDestinationOptions {
    pub fn pr_branch(&self) -> Option<&str> {
        self.pr_branch.as_deref()
    }

    pub fn with_pr_branch(&self, pr_branch: &str) -> Self {
        Self {
            pr_branch: Some(pr_branch.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport::MockHttpTransport;

    #[test]
    fn test_unconfigured_transport_fails_loudly() {
        let github = GithubOptions::new(Deferred::new(GeneralOptions::default()));

        let err = github.http_transport().unwrap_err();
        assert!(matches!(err, OptionsError::TransportNotConfigured(_)));
        assert!(err.to_string().contains("GithubOptions"));
    }

    #[test]
    fn test_installed_transport_is_returned() {
        let github = GithubOptions::new(Deferred::new(GeneralOptions::default()))
            .with_transport(Arc::new(MockHttpTransport::new(|_, _, _| Ok(Vec::new()))));

        assert!(github.http_transport().is_ok());
    }

    #[test]
    fn test_with_transport_does_not_touch_source() {
        let bare = GithubOptions::new(Deferred::new(GeneralOptions::default()));
        let _configured =
            bare.with_transport(Arc::new(MockHttpTransport::new(|_, _, _| Ok(Vec::new()))));

        assert!(bare.http_transport().is_err());
    }
}
