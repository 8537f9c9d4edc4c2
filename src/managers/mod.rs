//! Built-in [`crate::DriverManager`] implementations.

pub mod system_path;

pub use system_path::SystemPathManager;
