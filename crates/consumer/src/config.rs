//! Application configuration loaded from environment variables.

use common::Environment;

/// Server configuration with sensible defaults.
///
/// Reads from environment variables:
/// - `TENANT_ID` — deployment identifier echoed as `environment` (default: unset)
/// - `HOST` — bind address (default: `"0.0.0.0"`)
/// - `PORT` — public listen port (default: `80`)
/// - `ADMIN_PORT` — health and metrics listen port (default: `9090`)
///
/// Port values that do not parse as a `u16` are logged and replaced by the
/// default. Orchestrators may inject values like `tcp://10.0.0.1:80` under
/// these names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub admin_port: u16,
    pub environment: Option<Environment>,
}

impl Config {
    /// Loads configuration from the process environment, falling back to defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Loads configuration through `lookup`, which maps a variable name to its value.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        Self {
            host: lookup("HOST").unwrap_or(defaults.host),
            port: parse_port(&lookup, "PORT", defaults.port),
            admin_port: parse_port(&lookup, "ADMIN_PORT", defaults.admin_port),
            environment: lookup("TENANT_ID").map(Environment::new),
        }
    }

    /// Returns the `"host:port"` address of the public listener.
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Returns the `"host:port"` address of the admin listener.
    pub fn admin_addr(&self) -> String {
        format!("{}:{}", self.host, self.admin_port)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 80,
            admin_port: 9090,
            environment: None,
        }
    }
}

fn parse_port<F>(lookup: &F, var: &str, default: u16) -> u16
where
    F: Fn(&str) -> Option<String>,
{
    let Some(value) = lookup(var) else {
        return default;
    };
    value.trim().parse().unwrap_or_else(|_| {
        tracing::warn!(var, %value, default, "ignoring invalid port value");
        default
    })
}
