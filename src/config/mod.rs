use std::env;

use crate::nagios::softwrap::SoftWrap;

/// Config holds all application configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub db_path: String,
    pub db_max_connections: u32,
    pub listen_addr: String,
    pub templates_dir: String,
    pub host_definition: String,
    pub members_per_line: usize,
    pub wrap_width: Option<usize>,
}

impl Config {
    /// Load configuration from environment variables with defaults
    pub fn load() -> Self {
        Self {
            db_path: get_env("DB_PATH", "/data/monitor.db"),
            db_max_connections: get_env("DB_MAX_CONNECTIONS", "5")
                .parse()
                .unwrap_or(5),
            listen_addr: get_env("LISTEN_ADDR", "0.0.0.0:8080"),
            templates_dir: get_env("TEMPLATES_DIR", "/templates"),
            host_definition: get_env("NAGIOS_HOST_DEFINITION", "ixp-production-switch"),
            members_per_line: get_env("NAGIOS_MEMBERS_PER_LINE", "1")
                .parse()
                .unwrap_or(1),
            wrap_width: env::var("NAGIOS_WRAP_WIDTH")
                .ok()
                .and_then(|v| v.parse().ok()),
        }
    }

    /// Member list wrapping used unless a template overrides it
    pub fn soft_wrap(&self) -> SoftWrap {
        SoftWrap {
            per_line: self.members_per_line.max(1),
            width: self.wrap_width,
            ..SoftWrap::default()
        }
    }
}

fn get_env(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}
