
// Top-level public modules
pub mod error;
pub mod service;
pub mod options;
pub mod finder;
pub mod managers;

pub use error::WebDriverError;
pub use finder::{DriverFinder, DriverResult};
pub use options::Options;
pub use service::Service;

// Main public trait
/// A component that can locate a driver binary for a requested browser.
///
/// Implementations report where the driver lives via a [`DriverResult`]
/// mapping. Any error they return is wrapped by [`DriverFinder`] before it
/// reaches the caller.
pub trait DriverManager {
    /// Locates a driver matching the given options.
    fn resolve(&self, options: &Options) -> Result<DriverResult, WebDriverError>;
}
