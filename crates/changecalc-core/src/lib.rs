//! # changecalc-core
//!
//! Shared configuration and logging setup for changecalc.
//!
//! ## Modules
//!
//! - `config`: layered TOML configuration
//! - `logging`: tracing subscriber initialization

pub mod config;
pub mod logging;

pub use config::{
    get_config_home, ClassifyConfig, Config, ConfigError, EmitMode, LogConfig, OutputConfig,
    CURRENT_CONFIG_VERSION, SUPPORTED_CONFIG_VERSIONS,
};
pub use logging::{init_logging, parse_level, LoggingGuard};
