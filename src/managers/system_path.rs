//! Driver lookup on the system PATH.

use crate::error::WebDriverError;
use crate::finder::DriverResult;
use crate::options::Options;
use crate::DriverManager;
use tracing::debug;

/// Resolves drivers that are already installed somewhere on the system
/// PATH. Does not download or install anything.
pub struct SystemPathManager;

/// Maps a browser name to the driver binary that serves it.
fn driver_name(browser_name: &str) -> Result<&'static str, WebDriverError> {
    if browser_name.contains("chrome") {
        Ok("chromedriver")
    } else if browser_name.contains("firefox") {
        Ok("geckodriver")
    } else if browser_name.contains("edge") {
        Ok("msedgedriver")
    } else {
        Err(WebDriverError::UnsupportedBrowser(browser_name.to_string()))
    }
}

impl DriverManager for SystemPathManager {
    fn resolve(&self, options: &Options) -> Result<DriverResult, WebDriverError> {
        let driver = driver_name(options.browser_name())?;
        let path = which::which(driver).map_err(|_| WebDriverError::DriverNotOnPath {
            driver: driver.to_string(),
        })?;
        debug!(driver, path = %path.display(), "found driver on PATH");
        Ok(DriverResult::from_path(path))
    }
}

// --- Tests ---
