//! Options Builder
//!
//! Stages one default instance of every option module and applies overrides
//! by deriving replacement instances, never by mutating one in place. Tests
//! chain the overrides they need and call `build()` to snapshot the current
//! modules into an immutable [`Options`] aggregate; the builder stays usable
//! afterwards and later overrides do not affect aggregates already built.

use std::collections::BTreeMap;
use std::io;
use std::path::Path;
use std::sync::Arc;

use crate::console::Console;
use crate::fs::RealFileSystem;

use super::deferred::Deferred;
use super::folder::{FolderDestinationOptions, FolderOriginOptions};
use super::general::{GeneralOptions, GeneralPatch};
use super::gerrit::GerritOptions;
use super::git::{GitDestinationOptions, GitMirrorOptions, GitOptions, GitOriginOptions};
use super::github::{GithubDestinationOptions, GithubOptions, GithubPrOriginOptions};
use super::module::{OptionModule, Options};
use super::workflow::{WorkflowOptions, WorkflowPatch};

/// Builds complete and consistent [`Options`] bundles succinctly.
///
/// Module fields are public so a test can replace a whole backend module
/// directly; the deferred general slot must be the one handed out here, so
/// dependent modules keep observing overrides.
pub struct OptionsBuilder {
    pub general: Deferred<GeneralOptions>,
    pub folder_destination: FolderDestinationOptions,
    pub folder_origin: FolderOriginOptions,
    pub git: GitOptions,
    pub git_origin: GitOriginOptions,
    pub github_pr_origin: GithubPrOriginOptions,
    pub git_destination: GitDestinationOptions,
    pub git_mirror: GitMirrorOptions,
    pub gerrit: GerritOptions,
    pub github: GithubOptions,
    pub github_destination: GithubDestinationOptions,
    pub workflow: WorkflowOptions,
    extra: Vec<Box<dyn OptionModule>>,
}

impl Default for OptionsBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl OptionsBuilder {
    /// Create a builder with every module at its defaults.
    ///
    /// The general slot is bound first; modules that need general settings
    /// hold a deferred handle to it.
    pub fn new() -> Self {
        let general = Deferred::new(GeneralOptions::default());
        Self {
            folder_destination: FolderDestinationOptions::default(),
            folder_origin: FolderOriginOptions::default(),
            git: GitOptions::new(general.clone()),
            git_origin: GitOriginOptions::default(),
            github_pr_origin: GithubPrOriginOptions::default(),
            git_destination: GitDestinationOptions::new(general.clone()),
            git_mirror: GitMirrorOptions::default(),
            gerrit: GerritOptions::default(),
            github: GithubOptions::new(general.clone()),
            github_destination: GithubDestinationOptions::default(),
            workflow: WorkflowOptions::default(),
            extra: Vec::new(),
            general,
        }
    }

    /// Replace the environment mapping wholesale
    pub fn set_environment(&mut self, environment: BTreeMap<String, String>) -> &mut Self {
        let current = self.general.get();
        self.general
            .set(current.derive(GeneralPatch::default().environment(environment)));
        self
    }

    /// Insert or overwrite exactly one environment variable, preserving the
    /// rest of the mapping
    pub fn set_env_var(&mut self, key: &str, value: &str) -> &mut Self {
        let current = self.general.get();
        let environment = update_environment(current.environment(), key, value);
        self.general
            .set(current.derive(GeneralPatch::default().environment(environment)));
        self
    }

    /// Point HOME at the given directory
    pub fn set_home_dir(&mut self, home: &str) -> &mut Self {
        self.set_env_var("HOME", home)
    }

    /// Switch to the real filesystem with PWD at the process working
    /// directory. Reading the working directory can fail and the failure is
    /// fatal to test setup.
    pub fn set_workdir_to_real_temp_dir(&mut self) -> io::Result<&mut Self> {
        let cwd = std::env::current_dir()?;
        Ok(self.set_workdir(&cwd))
    }

    /// Switch to the real filesystem with PWD at `cwd`
    pub fn set_workdir(&mut self, cwd: &Path) -> &mut Self {
        let current = self.general.get();
        let environment =
            update_environment(current.environment(), "PWD", &cwd.display().to_string());
        self.general.set(current.derive(
            GeneralPatch::default()
                .environment(environment)
                .file_system(Arc::new(RealFileSystem::new()))
                .verbose(true),
        ));
        self
    }

    /// Point the output root at the system temp directory.
    ///
    /// Freshly generated temp directories have produced paths over the OS
    /// name-length limit in some tests; the system temp root stays short.
    pub fn set_output_root_to_tmp_dir(&mut self) -> &mut Self {
        let current = self.general.get();
        self.general.set(
            current.derive(GeneralPatch::default().output_root(Some(std::env::temp_dir()))),
        );
        self
    }

    /// Swap the console sink
    pub fn set_console(&mut self, console: Arc<dyn Console>) -> &mut Self {
        let current = self.general.get();
        self.general
            .set(current.derive(GeneralPatch::default().console(console)));
        self
    }

    /// Set the force flag
    pub fn set_force(&mut self, force: bool) -> &mut Self {
        let current = self.general.get();
        self.general
            .set(current.derive(GeneralPatch::default().force(force)));
        self
    }

    /// Set the workflow last revision, preserving the other workflow fields
    pub fn set_last_revision(&mut self, last_revision: &str) -> &mut Self {
        self.workflow = self.workflow.derive(
            WorkflowPatch::default().last_revision(Some(last_revision.to_string())),
        );
        self
    }

    /// Append a module to the built set.
    ///
    /// The built-in modules are always included; registration only extends
    /// the set. Registering a type that is already present replaces that
    /// instance when the aggregate is built.
    pub fn register(&mut self, module: Box<dyn OptionModule>) -> &mut Self {
        self.extra.push(module);
        self
    }

    /// All modules that `build()` will include, in order: the built-in set
    /// followed by registered extras.
    pub fn all_options(&self) -> Vec<Box<dyn OptionModule>> {
        let mut modules: Vec<Box<dyn OptionModule>> = vec![
            Box::new(self.general.get()),
            Box::new(self.folder_destination.clone()),
            Box::new(self.folder_origin.clone()),
            Box::new(self.git.clone()),
            Box::new(self.git_origin.clone()),
            Box::new(self.github_pr_origin.clone()),
            Box::new(self.git_destination.clone()),
            Box::new(self.git_mirror.clone()),
            Box::new(self.gerrit.clone()),
            Box::new(self.github.clone()),
            Box::new(self.github_destination.clone()),
            Box::new(self.workflow.clone()),
        ];
        modules.extend(self.extra.iter().map(|module| module.clone_module()));
        modules
    }

    /// Snapshot the current modules into an immutable aggregate
    pub fn build(&self) -> Options {
        Options::new(self.all_options())
    }
}

fn update_environment(
    environment: &BTreeMap<String, String>,
    key: &str,
    value: &str,
) -> BTreeMap<String, String> {
    let mut updated = environment.clone();
    updated.insert(key.to_string(), value.to_string());
    updated
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fs::FileSystem;

    #[test]
    fn test_env_var_override_preserves_other_keys() {
        let mut builder = OptionsBuilder::new();
        builder.set_environment(BTreeMap::from([("A".to_string(), "1".to_string())]));
        builder.set_env_var("PWD", "/tmp/x");

        let general = builder.general.get();
        assert_eq!(general.env_var("A"), Some("1"));
        assert_eq!(general.env_var("PWD"), Some("/tmp/x"));
        assert_eq!(general.environment().len(), 2);
    }

    #[test]
    fn test_home_dir_override() {
        let mut builder = OptionsBuilder::new();
        builder.set_home_dir("/home/test");

        assert_eq!(builder.general.get().env_var("HOME"), Some("/home/test"));
    }

    #[test]
    fn test_workdir_switches_to_real_filesystem() {
        let mut builder = OptionsBuilder::new();
        assert_eq!(builder.general.get().file_system().name(), "memory");

        builder.set_workdir(Path::new("/work"));

        let general = builder.general.get();
        assert_eq!(general.file_system().name(), "os");
        assert_eq!(general.env_var("PWD"), Some("/work"));
    }

    #[test]
    fn test_output_root_points_at_system_tmp() {
        let mut builder = OptionsBuilder::new();
        builder.set_output_root_to_tmp_dir();

        assert_eq!(
            builder.general.get().output_root(),
            Some(std::env::temp_dir().as_path())
        );
    }

    #[test]
    fn test_chaining() {
        let options = OptionsBuilder::new()
            .set_force(true)
            .set_last_revision("r5")
            .build();

        assert!(options.get::<GeneralOptions>().unwrap().is_forced());
        assert_eq!(
            options.get::<WorkflowOptions>().unwrap().last_revision(),
            Some("r5")
        );
    }

    #[test]
    fn test_build_includes_every_builtin_module() {
        let options = OptionsBuilder::new().build();

        assert_eq!(options.len(), 12);
        assert!(options.get::<GeneralOptions>().is_ok());
        assert!(options.get::<FolderDestinationOptions>().is_ok());
        assert!(options.get::<FolderOriginOptions>().is_ok());
        assert!(options.get::<GitOptions>().is_ok());
        assert!(options.get::<GitOriginOptions>().is_ok());
        assert!(options.get::<GithubPrOriginOptions>().is_ok());
        assert!(options.get::<GitDestinationOptions>().is_ok());
        assert!(options.get::<GitMirrorOptions>().is_ok());
        assert!(options.get::<GerritOptions>().is_ok());
        assert!(options.get::<GithubOptions>().is_ok());
        assert!(options.get::<GithubDestinationOptions>().is_ok());
        assert!(options.get::<WorkflowOptions>().is_ok());
    }

    #[test]
    fn test_built_aggregate_is_a_snapshot() {
        let mut builder = OptionsBuilder::new();
        builder.set_force(false);
        let before = builder.build();

        builder.set_force(true);
        let after = builder.build();

        assert!(!before.get::<GeneralOptions>().unwrap().is_forced());
        assert!(after.get::<GeneralOptions>().unwrap().is_forced());
    }
}
