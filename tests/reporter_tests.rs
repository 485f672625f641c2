use env_report::domain::ports::HostProbe;
use env_report::{EnvironmentReporter, Result};

struct StubHost {
    venv: Option<&'static str>,
}

impl HostProbe for StubHost {
    fn runtime_version(&self) -> String {
        "stub 0.0.1 (linux x86_64)".to_string()
    }

    fn executable(&self) -> Result<String> {
        Ok("/opt/bin/stub".to_string())
    }

    fn env_var(&self, _name: &str) -> Option<String> {
        self.venv.map(str::to_string)
    }
}

fn run_report(venv: Option<&'static str>) -> Vec<String> {
    let mut buf = Vec::new();
    EnvironmentReporter::new(StubHost { venv })
        .run(&mut buf)
        .unwrap();
    String::from_utf8(buf)
        .unwrap()
        .lines()
        .map(str::to_string)
        .collect()
}

#[test]
fn test_report_is_framed_by_separators() {
    let lines = run_report(None);
    let separator = "=".repeat(70);

    assert_eq!(lines.first(), Some(&separator));
    assert_eq!(lines.last(), Some(&separator));
    assert_eq!(lines.iter().filter(|l| **l == separator).count(), 3);
}

#[test]
fn test_full_report_layout() {
    let lines = run_report(Some("/opt/envs/demo"));
    let separator = "=".repeat(70);

    let expected = vec![
        separator.as_str(),
        "RUST LEARNING ENVIRONMENT TEST",
        separator.as_str(),
        "",
        "✅ Rust is working correctly!",
        "",
        "Runtime version: stub 0.0.1 (linux x86_64)",
        "Runtime executable: /opt/bin/stub",
        "",
        "Virtual environment: /opt/envs/demo",
        "",
        "Testing basic interpreter features:",
        "  List comprehension: [1, 2, 3, 4, 5] -> [1, 4, 9, 16, 25]",
        "",
        "🎉 Rust environment is ready for learning!",
        separator.as_str(),
    ];
    assert_eq!(lines, expected);
}

#[test]
fn test_unset_virtual_env() {
    let lines = run_report(None);
    assert!(lines.contains(&"Virtual environment: Not set".to_string()));
}

#[test]
fn test_virtual_env_value_is_printed_verbatim() {
    let lines = run_report(Some("  spaced value  "));
    assert!(lines.contains(&"Virtual environment:   spaced value  ".to_string()));
}
