//! Browser options: which browser a driver is requested for.

/// Identifies the browser family a driver is being resolved for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    browser_name: String,
}

impl Options {
    /// Creates options for an arbitrary browser name.
    pub fn new(browser_name: impl Into<String>) -> Self {
        Self {
            browser_name: browser_name.into(),
        }
    }

    pub fn chrome() -> Self {
        Self::new("chrome")
    }

    pub fn firefox() -> Self {
        Self::new("firefox")
    }

    pub fn edge() -> Self {
        Self::new("edge")
    }

    pub fn browser_name(&self) -> &str {
        &self.browser_name
    }
}
