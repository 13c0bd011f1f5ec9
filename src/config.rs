use std::env;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub port: u16,
    pub openai_api_key: String,
    pub openai_url: String,
    pub openai_model: String,
    pub openai_timeout_secs: u64,
    pub log_path: String,
    pub keywords_path: Option<String>,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            port: env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3000),
            openai_api_key: env::var("OPENAI_API_KEY").unwrap_or_default(),
            openai_url: env::var("OPENAI_URL")
                .unwrap_or_else(|_| "https://api.openai.com/v1/chat/completions".to_string()),
            openai_model: env::var("OPENAI_MODEL").unwrap_or_else(|_| "gpt-3.5-turbo".to_string()),
            openai_timeout_secs: env::var("OPENAI_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(30),
            log_path: env::var("UNMATCHED_LOG_PATH").unwrap_or_else(|_| "logs.jsonl".to_string()),
            keywords_path: env::var("KEYWORDS_PATH").ok().filter(|p| !p.is_empty()),
        }
    }
}
