pub mod host;
pub mod reporter;

pub use host::ProcessHost;
pub use reporter::EnvironmentReporter;
