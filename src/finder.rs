//! Driver path resolution.
//!
//! [`DriverFinder`] decides between two sources for a driver binary: the
//! path the caller configured on its [`Service`], and whatever the injected
//! [`DriverManager`] can come up with. The local path wins whenever it
//! points at an existing regular file; otherwise the manager is asked and
//! its answer is passed through untouched.

use crate::error::WebDriverError;
use crate::options::Options;
use crate::service::Service;
use crate::DriverManager;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// The mapping a driver manager reports back: the resolved driver path plus
/// whatever extra keys the manager chooses to include.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DriverResult {
    pub driver_path: PathBuf,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl DriverResult {
    /// A result carrying only the driver path.
    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        Self {
            driver_path: path.into(),
            extra: serde_json::Map::new(),
        }
    }
}

/// Stateless resolver tying a [`Service`] descriptor to a [`DriverManager`].
pub struct DriverFinder<M> {
    manager: M,
    is_file: fn(&Path) -> bool,
}

impl<M: DriverManager> DriverFinder<M> {
    pub fn new(manager: M) -> Self {
        Self {
            manager,
            is_file: |path| path.is_file(),
        }
    }

    /// Like [`DriverFinder::new`], but with a custom file-existence
    /// predicate. Tests use this to exercise both branches without
    /// touching the real filesystem.
    pub fn with_file_check(manager: M, is_file: fn(&Path) -> bool) -> Self {
        Self { manager, is_file }
    }

    /// Resolves the driver path for the given service and options.
    ///
    /// If the service's executable path exists as a regular file it is
    /// returned directly and the manager is never consulted. Otherwise the
    /// manager resolves, and its result mapping is returned unchanged. Any
    /// manager failure surfaces as [`WebDriverError::NoSuchDriver`], naming
    /// the requested browser.
    pub fn get_result(
        &self,
        service: &Service,
        options: &Options,
    ) -> Result<DriverResult, WebDriverError> {
        if let Some(path) = service.executable_path() {
            if (self.is_file)(path) {
                debug!(path = %path.display(), "using driver path from service configuration");
                return Ok(DriverResult::from_path(path));
            }
        }

        debug!(
            browser = options.browser_name(),
            "no usable service path, delegating to driver manager"
        );
        self.manager
            .resolve(options)
            .map_err(|source| WebDriverError::NoSuchDriver {
                browser: options.browser_name().to_string(),
                source: Some(Box::new(source)),
            })
    }
}

// --- Tests ---
