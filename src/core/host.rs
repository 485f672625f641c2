use crate::domain::ports::HostProbe;
use crate::utils::error::{ReportError, Result};
use std::env;

/// Reads the real process: the compiler it was built with, `current_exe` and
/// the environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessHost;

impl ProcessHost {
    pub fn new() -> Self {
        Self
    }
}

impl HostProbe for ProcessHost {
    fn runtime_version(&self) -> String {
        format!(
            "{} ({})",
            env!("ENV_REPORT_RUSTC_VERSION"),
            env!("ENV_REPORT_TARGET")
        )
    }

    fn executable(&self) -> Result<String> {
        let path = env::current_exe().map_err(|e| ReportError::ProbeError {
            message: format!("cannot resolve current executable: {}", e),
        })?;
        Ok(path.display().to_string())
    }

    fn env_var(&self, name: &str) -> Option<String> {
        env::var_os(name).map(|value| value.to_string_lossy().into_owned())
    }
}
