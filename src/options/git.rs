//! Git Backend Options
//!
//! Option modules for the plain-git origin, destination, and mirror backends.
//! `GitOptions` and `GitDestinationOptions` read the current general options
//! through a deferred handle; overriding the environment or filesystem on the
//! builder is visible to them without reconstruction.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::option_module;

use super::deferred::Deferred;
use super::general::GeneralOptions;

/// Shared git settings
#[derive(Debug, Clone)]
pub struct GitOptions {
    general: Deferred<GeneralOptions>,
}

option_module!(GitOptions, "git");

impl GitOptions {
    pub fn new(general: Deferred<GeneralOptions>) -> Self {
        Self { general }
    }

    /// Directory where bare repository caches live, under the current HOME
    pub fn repo_storage(&self) -> PathBuf {
        let general = self.general.get();
        let home = general.env_var("HOME").unwrap_or(".");
        Path::new(home).join(".repo-shuttle").join("repos")
    }
}

/// Git origin settings
#[derive(Debug, Clone, Default, Serialize)]
pub struct GitOriginOptions {
    first_parent: bool,
}

option_module!(GitOriginOptions, "git-origin");

impl GitOriginOptions {
    pub fn first_parent(&self) -> bool {
        self.first_parent
    }

    pub fn with_first_parent(&self, first_parent: bool) -> Self {
        Self { first_parent }
    }
}

/// Git destination settings
#[derive(Debug, Clone)]
pub struct GitDestinationOptions {
    general: Deferred<GeneralOptions>,
    committer_name: Option<String>,
    committer_email: Option<String>,
}

option_module!(GitDestinationOptions, "git-destination");

impl GitDestinationOptions {
    pub fn new(general: Deferred<GeneralOptions>) -> Self {
        Self {
            general,
            committer_name: None,
            committer_email: None,
        }
    }

    pub fn with_committer(&self, name: &str, email: &str) -> Self {
        Self {
            general: self.general.clone(),
            committer_name: Some(name.to_string()),
            committer_email: Some(email.to_string()),
        }
    }

    /// Committer identity: explicit override, then the current environment,
    /// then the built-in fallback.
    pub fn committer(&self) -> (String, String) {
        let general = self.general.get();
        let name = self
            .committer_name
            .clone()
            .or_else(|| general.env_var("GIT_COMMITTER_NAME").map(str::to_string))
            .unwrap_or_else(|| "Repo Shuttle".to_string());
        let email = self
            .committer_email
            .clone()
            .or_else(|| general.env_var("GIT_COMMITTER_EMAIL").map(str::to_string))
            .unwrap_or_else(|| "noreply@repo-shuttle.dev".to_string());
        (name, email)
    }
}

/// Git mirror settings
#[derive(Debug, Clone, Default, Serialize)]
pub struct GitMirrorOptions {
    force_push: bool,
}

option_module!(GitMirrorOptions, "git-mirror");

impl GitMirrorOptions {
    pub fn force_push(&self) -> bool {
        self.force_push
    }

    pub fn with_force_push(&self, force_push: bool) -> Self {
        Self { force_push }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::general::GeneralPatch;
    use std::collections::BTreeMap;

    fn general_with_env(pairs: &[(&str, &str)]) -> Deferred<GeneralOptions> {
        let environment: BTreeMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Deferred::new(
            GeneralOptions::default().derive(GeneralPatch::default().environment(environment)),
        )
    }

    #[test]
    fn test_repo_storage_tracks_current_home() {
        let general = general_with_env(&[("HOME", "/home/one")]);
        let git = GitOptions::new(general.clone());

        assert_eq!(
            git.repo_storage(),
            PathBuf::from("/home/one/.repo-shuttle/repos")
        );

        let current = general.get();
        let mut environment = current.environment().clone();
        environment.insert("HOME".to_string(), "/home/two".to_string());
        general.set(current.derive(GeneralPatch::default().environment(environment)));

        assert_eq!(
            git.repo_storage(),
            PathBuf::from("/home/two/.repo-shuttle/repos")
        );
    }

    #[test]
    fn test_committer_falls_back_to_environment() {
        let general = general_with_env(&[
            ("GIT_COMMITTER_NAME", "Env Committer"),
            ("GIT_COMMITTER_EMAIL", "env@example.com"),
        ]);
        let destination = GitDestinationOptions::new(general);

        assert_eq!(
            destination.committer(),
            ("Env Committer".to_string(), "env@example.com".to_string())
        );
    }

    #[test]
    fn test_explicit_committer_wins_over_environment() {
        let general = general_with_env(&[("GIT_COMMITTER_NAME", "Env Committer")]);
        let destination =
            GitDestinationOptions::new(general).with_committer("Override", "override@example.com");

        assert_eq!(
            destination.committer(),
            ("Override".to_string(), "override@example.com".to_string())
        );
    }

    #[test]
    fn test_committer_builtin_fallback() {
        let general = general_with_env(&[]);
        let destination = GitDestinationOptions::new(general);

        let (name, email) = destination.committer();
        assert_eq!(name, "Repo Shuttle");
        assert_eq!(email, "noreply@repo-shuttle.dev");
    }
}
