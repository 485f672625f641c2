use crate::utils::error::Result;

/// Ambient facts about the process the report is running in.
pub trait HostProbe {
    fn runtime_version(&self) -> String;
    fn executable(&self) -> Result<String>;
    fn env_var(&self, name: &str) -> Option<String>;
}
