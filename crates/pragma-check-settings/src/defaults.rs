/// Config file looked up under the project root when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "pragma-check.toml";

/// Built-in skip set: generated exposure wrappers and mocks whose pragmas are
/// not meant to track the library's.
pub const DEFAULT_SKIP_PATTERNS: &[&str] =
    &["contracts-exposed/**", "contracts/mocks/WithInit.sol"];
