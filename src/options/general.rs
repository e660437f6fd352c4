//! General Runtime Options
//!
//! The settings every component shares: process environment, filesystem
//! handle, console sink, output locations, and global flags. Defaults are
//! test-friendly (in-memory filesystem, verbose stdout console); overrides on
//! the builder derive replacements field by field.

use std::collections::BTreeMap;
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::console::{Console, LogConsole};
use crate::fs::{FileSystem, InMemoryFileSystem};
use crate::option_module;

/// General runtime settings
#[derive(Clone)]
pub struct GeneralOptions {
    environment: BTreeMap<String, String>,
    file_system: Arc<dyn FileSystem>,
    verbose: bool,
    console: Arc<dyn Console>,
    config_root: Option<PathBuf>,
    output_root: Option<PathBuf>,
    no_cleanup: bool,
    disable_reversible_check: bool,
    force: bool,
}

option_module!(GeneralOptions, "general");

impl Default for GeneralOptions {
    fn default() -> Self {
        Self {
            environment: std::env::vars().collect(),
            file_system: Arc::new(InMemoryFileSystem::new()),
            verbose: true,
            console: Arc::new(LogConsole::stdout(true)),
            config_root: None,
            output_root: None,
            no_cleanup: true,
            disable_reversible_check: false,
            force: false,
        }
    }
}

impl GeneralOptions {
    pub fn environment(&self) -> &BTreeMap<String, String> {
        &self.environment
    }

    pub fn env_var(&self, key: &str) -> Option<&str> {
        self.environment.get(key).map(String::as_str)
    }

    pub fn file_system(&self) -> &Arc<dyn FileSystem> {
        &self.file_system
    }

    pub fn is_verbose(&self) -> bool {
        self.verbose
    }

    pub fn console(&self) -> &Arc<dyn Console> {
        &self.console
    }

    pub fn config_root(&self) -> Option<&Path> {
        self.config_root.as_deref()
    }

    pub fn output_root(&self) -> Option<&Path> {
        self.output_root.as_deref()
    }

    pub fn is_no_cleanup(&self) -> bool {
        self.no_cleanup
    }

    pub fn is_disable_reversible_check(&self) -> bool {
        self.disable_reversible_check
    }

    pub fn is_forced(&self) -> bool {
        self.force
    }

    /// Derive a new instance, replacing the fields set on `patch` and copying
    /// everything else verbatim.
    pub fn derive(&self, patch: GeneralPatch) -> Self {
        Self {
            environment: patch
                .environment
                .unwrap_or_else(|| self.environment.clone()),
            file_system: patch
                .file_system
                .unwrap_or_else(|| Arc::clone(&self.file_system)),
            verbose: patch.verbose.unwrap_or(self.verbose),
            console: patch.console.unwrap_or_else(|| Arc::clone(&self.console)),
            config_root: patch
                .config_root
                .unwrap_or_else(|| self.config_root.clone()),
            output_root: patch
                .output_root
                .unwrap_or_else(|| self.output_root.clone()),
            no_cleanup: patch.no_cleanup.unwrap_or(self.no_cleanup),
            disable_reversible_check: patch
                .disable_reversible_check
                .unwrap_or(self.disable_reversible_check),
            force: patch.force.unwrap_or(self.force),
        }
    }
}

impl fmt::Debug for GeneralOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GeneralOptions")
            .field("environment", &self.environment.len())
            .field("file_system", &self.file_system.name())
            .field("verbose", &self.verbose)
            .field("config_root", &self.config_root)
            .field("output_root", &self.output_root)
            .field("no_cleanup", &self.no_cleanup)
            .field("disable_reversible_check", &self.disable_reversible_check)
            .field("force", &self.force)
            .finish_non_exhaustive()
    }
}

/// Partial set of field overrides for [`GeneralOptions::derive`]
#[derive(Default)]
pub struct GeneralPatch {
    environment: Option<BTreeMap<String, String>>,
    file_system: Option<Arc<dyn FileSystem>>,
    verbose: Option<bool>,
    console: Option<Arc<dyn Console>>,
    config_root: Option<Option<PathBuf>>,
    output_root: Option<Option<PathBuf>>,
    no_cleanup: Option<bool>,
    disable_reversible_check: Option<bool>,
    force: Option<bool>,
}

impl GeneralPatch {
    pub fn environment(mut self, environment: BTreeMap<String, String>) -> Self {
        self.environment = Some(environment);
        self
    }

    pub fn file_system(mut self, file_system: Arc<dyn FileSystem>) -> Self {
        self.file_system = Some(file_system);
        self
    }

    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = Some(verbose);
        self
    }

    pub fn console(mut self, console: Arc<dyn Console>) -> Self {
        self.console = Some(console);
        self
    }

    pub fn config_root(mut self, config_root: Option<PathBuf>) -> Self {
        self.config_root = Some(config_root);
        self
    }

    pub fn output_root(mut self, output_root: Option<PathBuf>) -> Self {
        self.output_root = Some(output_root);
        self
    }

    pub fn no_cleanup(mut self, no_cleanup: bool) -> Self {
        self.no_cleanup = Some(no_cleanup);
        self
    }

    pub fn disable_reversible_check(mut self, disable: bool) -> Self {
        self.disable_reversible_check = Some(disable);
        self
    }

    pub fn force(mut self, force: bool) -> Self {
        self.force = Some(force);
        self
    }
}
