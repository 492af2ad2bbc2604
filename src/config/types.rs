use serde::{Deserialize, Serialize};

/// Root configuration container.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub source: SourceConfig,
    #[serde(default)]
    pub quiz: QuizConfig,
}

/// Where and how questions are fetched.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceConfig {
    /// URL serving the question list as a JSON array.
    #[serde(default = "default_endpoint_url")]
    pub endpoint_url: String,
    /// Request timeout in seconds (default: 30).
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u32,
    /// Connection timeout in seconds (default: 5).
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_seconds: u32,
}

/// Quiz presentation behavior.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizConfig {
    /// Advance automatically after an answer is revealed.
    #[serde(default = "default_auto_advance")]
    pub auto_advance: bool,
    /// Delay between reveal and auto-advance, in milliseconds.
    #[serde(default = "default_auto_advance_delay_ms")]
    pub auto_advance_delay_ms: u64,
}

fn default_endpoint_url() -> String {
    "http://127.0.0.1:8000/questions".to_string()
}

fn default_timeout() -> u32 {
    30
}

fn default_connect_timeout() -> u32 {
    5
}

fn default_auto_advance() -> bool {
    true
}

fn default_auto_advance_delay_ms() -> u64 {
    2000
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            endpoint_url: default_endpoint_url(),
            timeout_seconds: default_timeout(),
            connect_timeout_seconds: default_connect_timeout(),
        }
    }
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            auto_advance: default_auto_advance(),
            auto_advance_delay_ms: default_auto_advance_delay_ms(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_playable() {
        let config = Config::default();
        assert!(config.source.endpoint_url.starts_with("http://"));
        assert!(config.quiz.auto_advance);
        assert_eq!(config.quiz.auto_advance_delay_ms, 2000);
    }
}
