use crate::domain::model::{EnvironmentReport, ListDemo, NOT_SET};
use crate::domain::ports::HostProbe;
use crate::utils::error::Result;
use std::io::Write;

pub const VIRTUAL_ENV_VAR: &str = "VIRTUAL_ENV";

pub struct EnvironmentReporter<H: HostProbe> {
    host: H,
}

impl<H: HostProbe> EnvironmentReporter<H> {
    pub fn new(host: H) -> Self {
        Self { host }
    }

    /// Gathers the runtime identity, the virtual environment marker and the
    /// squaring demo. Never fails: an unresolvable executable prints empty.
    pub fn collect(&self) -> EnvironmentReport {
        let runtime_version = self.host.runtime_version();
        tracing::debug!("runtime version: {}", runtime_version);

        let executable = self.host.executable().unwrap_or_else(|e| {
            tracing::warn!("⚠️ {}", e);
            String::new()
        });

        let virtual_env = match self.host.env_var(VIRTUAL_ENV_VAR) {
            Some(value) => value,
            None => {
                tracing::debug!("{} is not set", VIRTUAL_ENV_VAR);
                NOT_SET.to_string()
            }
        };

        EnvironmentReport {
            runtime_version,
            executable,
            virtual_env,
            demo: ListDemo::default(),
        }
    }

    pub fn run<W: Write>(&self, out: &mut W) -> Result<()> {
        let report = self.collect();
        for line in report.lines() {
            writeln!(out, "{}", line)?;
        }
        out.flush()?;

        tracing::debug!("report written");
        Ok(())
    }
}
