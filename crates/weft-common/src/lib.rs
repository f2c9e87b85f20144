pub mod config;
pub mod error;
#[cfg(feature = "telemetry")]
pub mod telemetry;

pub use config::{Config, FileStore, Loader, Routes, Saver};
pub use error::{SerDeError, WeftError};
