use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize)]
pub struct Settings {
    pub logging: LoggingConfig,
    pub codec: CodecConfig,
}

#[derive(Debug, Deserialize)]
pub struct LoggingConfig {
    pub log_dir: String,
    pub stdout_level: String,
    pub file_level: String,
}

#[derive(Debug, Deserialize)]
pub struct CodecConfig {
    /// Initial capacity, in bytes, of a frame buffer from `Buffer::for_frame`.
    pub sink_capacity: usize,
    /// Whether operators expect the portable path. The path itself is fixed
    /// at build time (`portable` feature); this is only checked at startup.
    #[serde(default)]
    pub portable_path: bool,
}

pub const DEFAULT_SINK_CAPACITY: i64 = 64 * 1024;

pub fn load_settings() -> Result<Settings, config::ConfigError> {
    let config_path = env::var("COLWIRE_CONFIG").unwrap_or_else(|_| "config".to_string());
    load_settings_from(&config_path)
}

/// Built-in defaults, overridden by the file at `path` when it exists.
pub fn load_settings_from(path: &str) -> Result<Settings, config::ConfigError> {
    let settings: Settings = config::Config::builder()
        .set_default("logging.log_dir", "logs")?
        .set_default("logging.stdout_level", "warn")?
        .set_default("logging.file_level", "info")?
        .set_default("codec.sink_capacity", DEFAULT_SINK_CAPACITY)?
        .set_default("codec.portable_path", false)?
        .add_source(config::File::with_name(path).required(false))
        .build()?
        .try_deserialize()?;

    Ok(settings)
}
