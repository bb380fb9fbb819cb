use std::env;
use std::path::PathBuf;

pub mod env_vars {
    pub const HOST: &str = "FAQ_SERVICE_HOST";
    pub const PORT: &str = "FAQ_SERVICE_PORT";
    pub const FAQ_FILE_PATH: &str = "FAQ_FILE_PATH";
    pub const UNANSWERED_FILE_PATH: &str = "FAQ_UNANSWERED_FILE_PATH";
    pub const STORAGE: &str = "FAQ_STORAGE";
}

pub const DEFAULT_PORT: u16 = 5000;

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub faq_path: PathBuf,
    pub unanswered_path: PathBuf,
    /// `file` or `memory`
    pub storage: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: DEFAULT_PORT,
            faq_path: PathBuf::from("faq.txt"),
            unanswered_path: PathBuf::from("unanswered_questions.txt"),
            storage: "file".to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            host: lookup(env_vars::HOST).unwrap_or(defaults.host),
            port: lookup(env_vars::PORT)
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.port),
            faq_path: lookup(env_vars::FAQ_FILE_PATH)
                .map(PathBuf::from)
                .unwrap_or(defaults.faq_path),
            unanswered_path: lookup(env_vars::UNANSWERED_FILE_PATH)
                .map(PathBuf::from)
                .unwrap_or(defaults.unanswered_path),
            storage: lookup(env_vars::STORAGE)
                .map(|s| s.trim().to_lowercase())
                .unwrap_or(defaults.storage),
        }
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
