//! Options Composition System
//!
//! Builds the immutable configuration bundle handed to the sync engine.
//! Every cohesive group of settings is an option module; a builder
//! stages defaults and applies copy-on-override derivations; `build()`
//! snapshots the module set into an ordered aggregate consumers query by
//! type. Modules that need the general settings hold a deferred handle so
//! later overrides of general stay visible to them.

mod builder;
mod deferred;
mod folder;
mod general;
mod gerrit;
mod git;
mod github;
mod module;
mod workflow;

pub use builder::OptionsBuilder;
pub use deferred::Deferred;
pub use folder::{FolderDestinationOptions, FolderOriginOptions};
pub use general::{GeneralOptions, GeneralPatch};
pub use gerrit::GerritOptions;
pub use git::{GitDestinationOptions, GitMirrorOptions, GitOptions, GitOriginOptions};
pub use github::{GithubDestinationOptions, GithubOptions, GithubPrOriginOptions};
pub use module::{OptionModule, Options, OptionsError};
pub use workflow::{WorkflowOptions, WorkflowPatch};
