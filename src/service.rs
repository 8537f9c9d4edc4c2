//! Service descriptor: the caller's driver configuration.

use std::path::{Path, PathBuf};

/// Describes a driver service as configured by the caller, most notably the
/// path to a driver executable if one was supplied.
///
/// The descriptor is read-only input to [`crate::DriverFinder`]. A missing
/// path and a path that points nowhere are treated the same way: resolution
/// falls through to the driver manager.
#[derive(Debug, Clone, Default)]
pub struct Service {
    executable_path: Option<PathBuf>,
}

impl Service {
    /// Creates a service descriptor with no configured path, leaving
    /// resolution entirely to the driver manager.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a service descriptor with an explicit driver path.
    pub fn with_executable_path(path: impl Into<PathBuf>) -> Self {
        Self {
            executable_path: Some(path.into()),
        }
    }

    pub fn executable_path(&self) -> Option<&Path> {
        self.executable_path.as_deref()
    }
}
