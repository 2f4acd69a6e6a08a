use globset::{GlobBuilder, GlobSet, GlobSetBuilder};
use pragma_check_types::SourcePath;

/// Source paths excluded from both extraction and validation.
///
/// Patterns use micromatch-style semantics: `*` stays within one path segment,
/// `**` crosses segments.
#[derive(Clone, Debug)]
pub struct SkipSet {
    patterns: Vec<String>,
    set: GlobSet,
}

impl SkipSet {
    pub fn new<I, S>(patterns: I) -> Result<Self, globset::Error>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let patterns: Vec<String> = patterns.into_iter().map(Into::into).collect();
        let mut builder = GlobSetBuilder::new();
        for p in &patterns {
            builder.add(GlobBuilder::new(p).literal_separator(true).build()?);
        }
        Ok(Self {
            set: builder.build()?,
            patterns,
        })
    }

    pub fn empty() -> Self {
        Self {
            patterns: Vec::new(),
            set: GlobSet::empty(),
        }
    }

    pub fn is_skipped(&self, path: &SourcePath) -> bool {
        self.set.is_match(path.as_str())
    }

    pub fn patterns(&self) -> &[String] {
        &self.patterns
    }
}

impl Default for SkipSet {
    fn default() -> Self {
        Self::empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn double_star_crosses_directories() {
        let skip = SkipSet::new(["contracts-exposed/**"]).expect("valid globs");
        assert!(skip.is_skipped(&SourcePath::new("contracts-exposed/token/ERC20.sol")));
        assert!(!skip.is_skipped(&SourcePath::new("contracts/token/ERC20.sol")));
    }

    #[test]
    fn single_star_stays_in_one_segment() {
        let skip = SkipSet::new(["contracts/mocks/*.sol"]).expect("valid globs");
        assert!(skip.is_skipped(&SourcePath::new("contracts/mocks/WithInit.sol")));
        assert!(!skip.is_skipped(&SourcePath::new("contracts/mocks/token/ERC20Mock.sol")));
    }

    #[test]
    fn empty_set_skips_nothing() {
        let skip = SkipSet::default();
        assert!(!skip.is_skipped(&SourcePath::new("anything.sol")));
        assert!(skip.patterns().is_empty());
    }

    #[test]
    fn invalid_pattern_is_rejected() {
        assert!(SkipSet::new(["contracts/[.sol"]).is_err());
    }
}
