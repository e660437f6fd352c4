//! Local Folder Backend Options

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::option_module;

/// Folder origin settings
#[derive(Debug, Clone, Default, Serialize)]
pub struct FolderOriginOptions {
    materialize_outside_symlinks: bool,
}

option_module!(FolderOriginOptions, "folder-origin");

impl FolderOriginOptions {
    pub fn materialize_outside_symlinks(&self) -> bool {
        self.materialize_outside_symlinks
    }

    pub fn with_materialize_outside_symlinks(&self, materialize: bool) -> Self {
        Self {
            materialize_outside_symlinks: materialize,
        }
    }
}

/// Folder destination settings
#[derive(Debug, Clone, Default, Serialize)]
pub struct FolderDestinationOptions {
    folder: Option<PathBuf>,
}

option_module!(FolderDestinationOptions, "folder-destination");

impl FolderDestinationOptions {
    pub fn folder(&self) -> Option<&Path> {
        self.folder.as_deref()
    }

    pub fn with_folder(&self, folder: PathBuf) -> Self {
        Self {
            folder: Some(folder),
        }
    }
}
