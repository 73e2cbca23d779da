//! Configuration structs

mod app_config;

pub use app_config::{
    AppSettings, ConfigError, Environment, MirrorConfig, MirrorTargetConfig, ServerConfig,
    MIRROR_TIMEOUT_VAR, MIRROR_URL_VAR,
};
