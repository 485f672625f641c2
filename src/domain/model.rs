use std::fmt;

pub const SEPARATOR_WIDTH: usize = 70;
pub const NOT_SET: &str = "Not set";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListDemo {
    pub numbers: Vec<i64>,
    pub squared: Vec<i64>,
}

impl ListDemo {
    pub fn new(numbers: Vec<i64>) -> Self {
        let squared = numbers.iter().map(|n| n * n).collect();
        Self { numbers, squared }
    }
}

impl Default for ListDemo {
    fn default() -> Self {
        Self::new(vec![1, 2, 3, 4, 5])
    }
}

impl fmt::Display for ListDemo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} -> {:?}", self.numbers, self.squared)
    }
}

/// Everything the reporter prints, gathered before any output is written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvironmentReport {
    pub runtime_version: String,
    pub executable: String,
    pub virtual_env: String,
    pub demo: ListDemo,
}

impl EnvironmentReport {
    pub fn separator() -> String {
        "=".repeat(SEPARATOR_WIDTH)
    }

    pub fn lines(&self) -> Vec<String> {
        let sep = Self::separator();
        vec![
            sep.clone(),
            "RUST LEARNING ENVIRONMENT TEST".to_string(),
            sep.clone(),
            String::new(),
            "✅ Rust is working correctly!".to_string(),
            String::new(),
            format!("Runtime version: {}", self.runtime_version),
            format!("Runtime executable: {}", self.executable),
            String::new(),
            format!("Virtual environment: {}", self.virtual_env),
            String::new(),
            "Testing basic interpreter features:".to_string(),
            format!("  List comprehension: {}", self.demo),
            String::new(),
            "🎉 Rust environment is ready for learning!".to_string(),
            sep,
        ]
    }
}
