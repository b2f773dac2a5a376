use crate::error::AppError;
use std::env;

/// Fallback base URL for the generation service when `NGROK_URL` is unset.
const DEFAULT_GENERATION_URL: &str = "https://9772-104-196-41-144.ngrok-free.app";

#[derive(Debug, Clone)]
pub struct ChatConfig {
    pub generation: GenerationConfig,
    pub log_level: String,
}

#[derive(Debug, Clone)]
pub struct GenerationConfig {
    /// Base URL of the generation service, fixed for the process lifetime.
    pub base_url: String,
}

impl ChatConfig {
    pub fn load() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();

        Ok(ChatConfig {
            generation: GenerationConfig {
                base_url: get_env("NGROK_URL", Some(DEFAULT_GENERATION_URL))?,
            },
            log_level: get_env("LOG_LEVEL", Some("info"))?,
        })
    }
}

fn get_env(key: &str, default: Option<&str>) -> Result<String, AppError> {
    match env::var(key) {
        Ok(val) => Ok(val),
        Err(_) => {
            if let Some(def) = default {
                Ok(def.to_string())
            } else {
                Err(AppError::Config(anyhow::anyhow!(
                    "{} is required but not set",
                    key
                )))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_env_falls_back_to_default() {
        let value = get_env("CHAT_SERVICE_UNSET_VAR", Some("fallback")).unwrap();
        assert_eq!(value, "fallback");
    }

    #[test]
    fn get_env_without_default_fails() {
        assert!(get_env("CHAT_SERVICE_UNSET_VAR", None).is_err());
    }
}
