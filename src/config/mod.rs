use clap::Parser;

/// The report takes no options; every argument, including `--help`, is
/// accepted and ignored.
#[derive(Debug, Clone, Parser)]
#[command(name = "env-report")]
#[command(about = "Print runtime and virtual environment information")]
#[command(disable_help_flag = true, ignore_errors = true)]
pub struct CliConfig {
    #[arg(trailing_var_arg = true, allow_hyphen_values = true, hide = true)]
    pub ignored: Vec<String>,
}
