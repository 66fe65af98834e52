use ::config::{Config, ConfigError, Environment, File, FileFormat};
use serde::Deserialize;

use crate::collector::link_image_collector::FailurePolicy;

const SETTINGS_FILE: &str = "Settings.toml";

#[derive(Debug, Deserialize)]
pub struct AppConfig {
    pub file: FileConfig,
    pub http: HttpConfig,
    pub fetch: FetchConfig,
    pub flaresolverr: FlareSolverrConfig,
    pub progress: ProgressConfig,
}

#[derive(Debug, Deserialize)]
pub struct FileConfig {
    pub links: String,
}

#[derive(Debug, Deserialize)]
pub struct HttpConfig {
    pub user_agent: String,
    pub timeout_secs: Option<u64>,
}

#[derive(Debug, Deserialize)]
pub struct FetchConfig {
    pub mode: FetchMode,
    pub on_error: FailurePolicy,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FetchMode {
    Direct,
    FlareSolverr,
}

#[derive(Debug, Deserialize)]
pub struct FlareSolverrConfig {
    pub url: Option<String>,
    pub max_timeout_ms: u64,
}

#[derive(Debug, Deserialize)]
pub struct ProgressConfig {
    pub enabled: bool,
}

/// Loads settings from `Settings.toml` (optional) and `APP__*` environment variables.
pub fn load_config() -> Result<AppConfig, ConfigError> {
    load_config_from(SETTINGS_FILE)
}

/// Same as [`load_config`] with an explicit settings file path.
///
/// Sources are layered: built-in defaults, then the TOML file if it exists,
/// then environment variables such as `APP__FETCH__ON_ERROR=skip`.
pub fn load_config_from(settings_path: &str) -> Result<AppConfig, ConfigError> {
    let settings = Config::builder()
        .set_default("file.links", "links.txt")?
        .set_default(
            "http.user_agent",
            concat!("swatch_scrapping/", env!("CARGO_PKG_VERSION")),
        )?
        .set_default("fetch.mode", "direct")?
        .set_default("fetch.on_error", "abort")?
        .set_default("flaresolverr.max_timeout_ms", 60_000_i64)?
        .set_default("progress.enabled", true)?
        .add_source(File::new(settings_path, FileFormat::Toml).required(false))
        .add_source(
            Environment::with_prefix("APP")
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    let config = settings.try_deserialize::<AppConfig>()?;

    if config.fetch.mode == FetchMode::FlareSolverr && config.flaresolverr.url.is_none() {
        return Err(ConfigError::Message(
            "fetch.mode is \"flaresolverr\" but flaresolverr.url is not set".to_string(),
        ));
    }

    Ok(config)
}
