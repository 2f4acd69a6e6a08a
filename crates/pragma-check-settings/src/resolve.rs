use crate::defaults::DEFAULT_SKIP_PATTERNS;
use crate::model::PragmaCheckConfigV1;
use pragma_check_domain::policy::{DuplicatePragma, EffectiveConfig};
use pragma_check_domain::skip::SkipSet;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("parse config toml")]
    Toml(#[from] toml::de::Error),

    #[error("invalid skip glob: {pattern}")]
    InvalidSkip {
        pattern: String,
        #[source]
        source: globset::Error,
    },

    #[error("unknown {field}: {value} (expected {expected})")]
    UnknownValue {
        field: &'static str,
        value: String,
        expected: &'static str,
    },
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Github,
    Json,
}

/// Command-line overrides. `skip` is additive; the rest replace file values.
#[derive(Clone, Debug, Default)]
pub struct Overrides {
    pub skip: Vec<String>,
    pub no_default_skip: bool,
    pub duplicate_pragma: Option<String>,
    pub format: Option<String>,
}

#[derive(Clone, Debug)]
pub struct ResolvedConfig {
    pub effective: EffectiveConfig,
    pub format: OutputFormat,
}

pub fn resolve_config(
    cfg: PragmaCheckConfigV1,
    overrides: Overrides,
) -> Result<ResolvedConfig, ConfigError> {
    let keep_defaults = !overrides.no_default_skip && cfg.extend_default_skip.unwrap_or(true);

    let mut patterns: Vec<String> = Vec::new();
    if keep_defaults {
        patterns.extend(DEFAULT_SKIP_PATTERNS.iter().map(|p| p.to_string()));
    }
    for p in cfg.skip.into_iter().chain(overrides.skip) {
        if !patterns.contains(&p) {
            patterns.push(p);
        }
    }
    let skip = compile_skip(patterns)?;

    let duplicate_pragma = match overrides.duplicate_pragma.or(cfg.duplicate_pragma) {
        Some(v) => parse_duplicate_pragma(&v)?,
        None => DuplicatePragma::default(),
    };

    let format = match overrides.format.or(cfg.format) {
        Some(v) => parse_format(&v)?,
        None => OutputFormat::default(),
    };

    Ok(ResolvedConfig {
        effective: EffectiveConfig {
            skip,
            duplicate_pragma,
        },
        format,
    })
}

fn compile_skip(patterns: Vec<String>) -> Result<SkipSet, ConfigError> {
    // Compile one by one first so the error names the offending pattern.
    for pattern in &patterns {
        SkipSet::new([pattern.as_str()]).map_err(|source| ConfigError::InvalidSkip {
            pattern: pattern.clone(),
            source,
        })?;
    }
    SkipSet::new(patterns).map_err(|source| ConfigError::InvalidSkip {
        pattern: "<set>".to_string(),
        source,
    })
}

fn parse_duplicate_pragma(v: &str) -> Result<DuplicatePragma, ConfigError> {
    match v {
        "first" | "keep-first" => Ok(DuplicatePragma::KeepFirst),
        "error" => Ok(DuplicatePragma::Error),
        other => Err(ConfigError::UnknownValue {
            field: "duplicate_pragma",
            value: other.to_string(),
            expected: "first|error",
        }),
    }
}

fn parse_format(v: &str) -> Result<OutputFormat, ConfigError> {
    match v {
        "text" => Ok(OutputFormat::Text),
        "github" | "gha" => Ok(OutputFormat::Github),
        "json" => Ok(OutputFormat::Json),
        other => Err(ConfigError::UnknownValue {
            field: "format",
            value: other.to_string(),
            expected: "text|github|json",
        }),
    }
}
