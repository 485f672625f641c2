#[cfg(feature = "cli")]
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use crate::core::{EnvironmentReporter, ProcessHost};
pub use domain::model::{EnvironmentReport, ListDemo};
pub use utils::error::{ReportError, Result};
