//! Config parsing and resolution.
//!
//! This crate is intentionally IO-free: it parses and resolves configuration provided as strings.

#![forbid(unsafe_code)]

mod defaults;
mod model;
mod resolve;

pub use defaults::{DEFAULT_CONFIG_FILE, DEFAULT_SKIP_PATTERNS};
pub use model::PragmaCheckConfigV1;
pub use resolve::{ConfigError, OutputFormat, Overrides, ResolvedConfig};

/// Parse `pragma-check.toml` (or equivalent) into a typed model.
pub fn parse_config_toml(input: &str) -> Result<PragmaCheckConfigV1, ConfigError> {
    let cfg: PragmaCheckConfigV1 = toml::from_str(input)?;
    Ok(cfg)
}

/// Resolve the effective config used by the engine (defaults + file + overrides).
pub fn resolve_config(
    cfg: PragmaCheckConfigV1,
    overrides: Overrides,
) -> Result<ResolvedConfig, ConfigError> {
    resolve::resolve_config(cfg, overrides)
}
