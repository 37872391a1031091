use anyhow::anyhow;
use anyhow::Result;
use serde::Deserialize;

pub const DEFAULT_PORT: u16 = 8090;
pub const DEFAULT_PROTECTED_PREFIX: &str = "/api/";

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub auth: AuthConfig,
    /// `prod` switches logging to JSON at info level; anything else is development.
    #[serde(default = "default_environment")]
    pub environment: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            auth: AuthConfig::default(),
            environment: default_environment(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    #[serde(default)]
    pub worker_threads: Option<usize>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { host: "127.0.0.1".into(), port: DEFAULT_PORT, worker_threads: Some(4) }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct AuthConfig {
    /// Shared secret required on protected paths. `None` disables the gate.
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default = "default_protected_prefix")]
    pub protected_prefix: String,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self { api_key: None, protected_prefix: default_protected_prefix() }
    }
}

fn default_environment() -> String { "dev".to_string() }
fn default_protected_prefix() -> String { DEFAULT_PROTECTED_PREFIX.to_string() }

/// Parse `path` when it exists, otherwise start from defaults.
pub fn load_or_default(path: &str) -> Result<AppConfig> {
    if std::path::Path::new(path).exists() {
        load_from_file(path)
    } else {
        Ok(AppConfig::default())
    }
}

pub fn load_from_file(path: &str) -> Result<AppConfig> {
    let content = std::fs::read_to_string(path)?;
    parse(&content)
}

pub fn parse(content: &str) -> Result<AppConfig> {
    let cfg: AppConfig = toml::from_str(content)?;
    Ok(cfg)
}

impl AppConfig {
    /// Load `config.toml` (or `CONFIG_PATH`), falling back to defaults when the file
    /// is absent, then apply environment overrides and validate.
    pub fn load_and_validate() -> Result<Self> {
        let path = std::env::var("CONFIG_PATH").unwrap_or_else(|_| "config.toml".to_string());
        let mut cfg = load_or_default(&path)?;
        cfg.apply_env_overrides(|key| std::env::var(key).ok());
        cfg.normalize_and_validate()?;
        Ok(cfg)
    }

    /// Overlay `SERVER_HOST`, `SERVER_PORT`, `API_KEY` and `ENVIRONMENT` using the given lookup.
    pub fn apply_env_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(host) = lookup("SERVER_HOST") {
            self.server.host = host;
        }
        if let Some(port) = lookup("SERVER_PORT").and_then(|p| p.parse::<u16>().ok()) {
            self.server.port = port;
        }
        if let Some(key) = lookup("API_KEY") {
            self.auth.api_key = Some(key);
        }
        if let Some(env) = lookup("ENVIRONMENT") {
            self.environment = env;
        }
    }

    pub fn normalize_and_validate(&mut self) -> Result<()> {
        self.server.normalize()?;
        self.auth.normalize()?;
        if self.environment.trim().is_empty() {
            self.environment = default_environment();
        }
        Ok(())
    }

    pub fn is_production(&self) -> bool {
        self.environment.eq_ignore_ascii_case("prod")
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

impl ServerConfig {
    fn normalize(&mut self) -> Result<()> {
        if self.host.trim().is_empty() {
            self.host = "127.0.0.1".to_string();
        }
        if self.port == 0 {
            return Err(anyhow!("server.port must be in 1..=65535"));
        }
        match self.worker_threads {
            Some(0) | None => self.worker_threads = Some(4),
            Some(_) => {}
        }
        Ok(())
    }
}

impl AuthConfig {
    fn normalize(&mut self) -> Result<()> {
        if self.api_key.as_deref().map(str::trim).is_some_and(str::is_empty) {
            self.api_key = None;
        }
        if !self.protected_prefix.starts_with('/') {
            return Err(anyhow!("auth.protected_prefix must start with '/'"));
        }
        Ok(())
    }
}
