use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// `pragma-check.toml` schema v1.
///
/// This is a *user-facing* config model: every field is optional and unknown
/// values are validated during resolution, not parsing.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct PragmaCheckConfigV1 {
    /// Optional schema string for tooling (`pragma_check.config.v1`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,

    /// Extra glob patterns of source paths to leave out of the check.
    #[serde(default)]
    pub skip: Vec<String>,

    /// Keep the built-in skip patterns (default `true`). When `false`, `skip`
    /// replaces them.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extend_default_skip: Option<bool>,

    /// `first` (default) or `error`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duplicate_pragma: Option<String>,

    /// `text` (default), `github`, or `json`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
}
