use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub genai: GenAiConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default)]
    pub logs: LogsConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogsConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

/// Backend selection and per-backend settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenAiConfig {
    /// Serve prompts from the mock generator instead of a real model.
    #[serde(default = "default_use_mock")]
    pub use_mock: bool,
    #[serde(default)]
    pub mock: MockConfig,
    #[serde(default)]
    pub llm: Option<LlmConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MockConfig {
    #[serde(default = "default_latency_min_ms")]
    pub latency_min_ms: u64,
    #[serde(default = "default_latency_max_ms")]
    pub latency_max_ms: u64,
    /// Fixed seed for the random source; entropy-seeded when absent.
    #[serde(default)]
    pub seed: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LlmConfig {
    #[serde(default)]
    pub base_url: String,
    pub api_key: String,
    pub model: String,
    #[serde(default)]
    pub system_prompt: Option<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            logs: LogsConfig::default(),
        }
    }
}

impl Default for LogsConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl Default for GenAiConfig {
    fn default() -> Self {
        Self {
            use_mock: default_use_mock(),
            mock: MockConfig::default(),
            llm: None,
        }
    }
}

impl Default for MockConfig {
    fn default() -> Self {
        Self {
            latency_min_ms: default_latency_min_ms(),
            latency_max_ms: default_latency_max_ms(),
            seed: None,
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8000
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_use_mock() -> bool {
    true
}

fn default_latency_min_ms() -> u64 {
    500
}

fn default_latency_max_ms() -> u64 {
    1500
}
