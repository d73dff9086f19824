use std::fmt;

/// Where the process runs, as far as logging cares: production output goes
/// to a collector, everything else to a terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Local,
    Production,
}

impl Environment {
    fn from_label(label: Option<&str>) -> Self {
        match label.map(str::trim).map(str::to_lowercase).as_deref() {
            Some("prod") | Some("production") => Environment::Production,
            _ => Environment::Local,
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Environment::Local => "local",
            Environment::Production => "production",
        };
        f.write_str(label)
    }
}

/// Configuration for tracing initialization.
pub struct TracingConfig {
    pub environment: Environment,
    pub json_format: bool,
}

impl Default for TracingConfig {
    fn default() -> Self {
        let environment = Environment::from_label(std::env::var("APP_ENV").ok().as_deref());
        // An explicit LOG_FORMAT wins; otherwise production logs as JSON.
        let json_format = match std::env::var("LOG_FORMAT") {
            Ok(v) => v.eq_ignore_ascii_case("json"),
            Err(_) => environment == Environment::Production,
        };

        Self {
            environment,
            json_format,
        }
    }
}
