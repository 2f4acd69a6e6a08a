use crate::skip::SkipSet;

/// What to do when a file declares more than one language-version pragma.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DuplicatePragma {
    /// Keep the first one in document order and log the rest.
    #[default]
    KeepFirst,
    /// Differing declarations abort the run.
    Error,
}

#[derive(Clone, Debug, Default)]
pub struct EffectiveConfig {
    pub skip: SkipSet,
    pub duplicate_pragma: DuplicatePragma,
}
