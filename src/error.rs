use thiserror::Error;

/// Error type for all possible failures in the library.
#[derive(Error, Debug)]
pub enum WebDriverError {
    /// The only error a [`crate::DriverFinder`] lets escape: neither the
    /// configured service path nor the driver manager produced a usable
    /// driver. The underlying failure, if any, is kept as the source.
    #[error(
        "Unable to obtain driver for {browser}; For documentation on this error, \
         please visit: https://www.selenium.dev/documentation/webdriver/troubleshooting/errors/driver_location/"
    )]
    NoSuchDriver {
        browser: String,
        #[source]
        source: Option<Box<WebDriverError>>,
    },

    #[error("No '{driver}' executable found on the system PATH")]
    DriverNotOnPath {
        driver: String,
    },

    #[error("Unsupported browser: {0}")]
    UnsupportedBrowser(String),

    #[error("An unknown error has occurred: {0}")]
    Custom(String),
}
