use serde::Deserialize;
use service_core::config as core_config;
use service_core::error::AppError;
use std::env;

/// Development fallback for the file-storage gateway. Production deployments
/// must set `GATEWAY_BASE_URL` explicitly.
pub const DEFAULT_GATEWAY_BASE_URL: &str =
    "http://localstack:4566/restapis/3q5o86n2kp/prod/_user_request_/files";

#[derive(Debug, Clone, Deserialize)]
pub struct FacadeConfig {
    #[serde(flatten)]
    pub common: core_config::Config,
    pub gateway: GatewaySettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GatewaySettings {
    /// Base URL of the file-storage gateway. The listing and upload endpoints
    /// live at the base itself; single files at `<base>/<id>`.
    pub base_url: String,
}

impl FacadeConfig {
    pub fn load() -> Result<Self, AppError> {
        // Common config handles .env and the APP_ prefix.
        let common = core_config::Config::load()?;

        let is_prod = env::var("ENVIRONMENT").unwrap_or_else(|_| "dev".to_string()) == "prod";

        Ok(FacadeConfig {
            common,
            gateway: GatewaySettings {
                base_url: get_env("GATEWAY_BASE_URL", Some(DEFAULT_GATEWAY_BASE_URL), is_prod)?,
            },
        })
    }
}

fn get_env(key: &str, default: Option<&str>, is_prod: bool) -> Result<String, AppError> {
    match env::var(key) {
        Ok(val) => Ok(val),
        Err(_) => {
            if is_prod {
                Err(AppError::ConfigError(anyhow::anyhow!(format!(
                    "{} is required in production but not set",
                    key
                ))))
            } else if let Some(def) = default {
                Ok(def.to_string())
            } else {
                Err(AppError::ConfigError(anyhow::anyhow!(format!(
                    "{} is required but not set",
                    key
                ))))
            }
        }
    }
}
